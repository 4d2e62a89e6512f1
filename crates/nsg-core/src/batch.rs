//! Batch containers for generated signals

use crate::channel::ChannelVector;
use uuid::Uuid;

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// One trajectory-mode signal: a time series of channel vectors,
/// one per discrete time step from start to end time inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<ChannelVector>,
}

impl Signal {
    pub fn new(samples: Vec<ChannelVector>) -> Self {
        Signal { samples }
    }

    /// Number of time steps in this signal
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A batch of independently generated trajectory-mode signals
#[derive(Debug, Clone)]
pub struct SignalBatch {
    /// Unique identifier for this batch
    pub id: Uuid,
    /// Sample period the batch was generated with, in milliseconds
    pub sample_period_ms: u32,
    /// Generated signals, in order of generation
    pub signals: Vec<Signal>,
    /// Creation timestamp in milliseconds since the epoch
    pub created_at: u64,
}

impl SignalBatch {
    pub fn new(sample_period_ms: u32, signals: Vec<Signal>) -> Self {
        SignalBatch {
            id: Uuid::new_v4(),
            sample_period_ms,
            signals,
            created_at: now_millis(),
        }
    }

    /// Number of signals in the batch
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// A batch of cluster-mode snapshots.
///
/// Cluster-mode signals have no time axis; each snapshot is a single
/// channel vector of cluster-driven firing magnitudes.
#[derive(Debug, Clone)]
pub struct SnapshotBatch {
    /// Unique identifier for this batch
    pub id: Uuid,
    /// Generated snapshots, in order of generation
    pub snapshots: Vec<ChannelVector>,
    /// Creation timestamp in milliseconds since the epoch
    pub created_at: u64,
}

impl SnapshotBatch {
    pub fn new(snapshots: Vec<ChannelVector>) -> Self {
        SnapshotBatch {
            id: Uuid::new_v4(),
            snapshots,
            created_at: now_millis(),
        }
    }

    /// Number of snapshots in the batch
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
