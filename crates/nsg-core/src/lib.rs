//! NSG-Core: Foundation types for synthetic neural signal generation
//!
//! Poses, trajectories, channel vectors, batch containers, and the
//! fixed-point encoding contract shared by the generation strategies.

pub mod batch;
pub mod channel;
pub mod encoding;
pub mod error;
pub mod pose;

pub use batch::*;
pub use channel::*;
pub use encoding::*;
pub use error::{NsgError, NsgResult};
pub use pose::*;
