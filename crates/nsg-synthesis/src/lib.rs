//! NSG-Synthesis: Synthetic neural intent signal generation
//!
//! Two alternative strategies behind a common output contract:
//! trajectory interpolation with noise injection, and cluster-driven
//! activation synthesis. Both produce batches of 12-channel integer
//! vectors for downstream decoder development and pipeline testing.

pub mod cluster;
pub mod noise;
pub mod trajectory;

pub use cluster::*;
pub use noise::{NoiseConfig, NoiseKind};
pub use trajectory::*;
