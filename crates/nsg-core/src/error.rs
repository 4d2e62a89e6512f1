//! Error handling for the NSG framework

use core::fmt;

/// Result type alias for NSG framework operations
pub type NsgResult<T> = Result<T, NsgError>;

/// Error type for all signal-generation operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NsgError {
    /// Invalid generator or batch configuration
    InvalidConfig {
        /// Description of the configuration error
        reason: String,
    },

    /// Cluster partition does not cover the channel range exactly
    InvalidPartition {
        /// Number of channels the partition covers
        covered: usize,
        /// Number of channels it must cover
        expected: usize,
    },

    /// Caller-supplied noise kind outside the recognized set
    UnrecognizedNoiseKind {
        /// The value that failed to parse
        value: String,
    },

    /// Trajectory end time precedes start time
    InvalidTrajectory {
        /// Start pose timestamp in milliseconds
        start_ms: u32,
        /// End pose timestamp in milliseconds
        end_ms: u32,
    },
}

impl fmt::Display for NsgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NsgError::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
            NsgError::InvalidPartition { covered, expected } => {
                write!(
                    f,
                    "Cluster partition covers {} channels, expected exactly {}",
                    covered, expected
                )
            }
            NsgError::UnrecognizedNoiseKind { value } => {
                write!(
                    f,
                    "Unrecognized noise kind '{}', expected 'gaussian' or 'uniform'",
                    value
                )
            }
            NsgError::InvalidTrajectory { start_ms, end_ms } => {
                write!(
                    f,
                    "Trajectory end time {}ms precedes start time {}ms",
                    end_ms, start_ms
                )
            }
        }
    }
}

impl std::error::Error for NsgError {}
