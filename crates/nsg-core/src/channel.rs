//! ChannelVector: fixed-width per-electrode sample container

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of simulated electrode channels per sample
pub const CHANNEL_COUNT: usize = 12;

/// One sample across all simulated electrodes.
///
/// Trajectory mode populates channels 0-2 with position-derived activity
/// and 3-5 with an orientation-derived state; 6-11 stay reserved at zero.
/// Cluster mode populates all 12 channels by cluster membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVector(pub [i32; CHANNEL_COUNT]);

impl ChannelVector {
    /// All-zero channel vector
    pub fn zeroed() -> Self {
        ChannelVector([0; CHANNEL_COUNT])
    }

    /// Channel values as a slice
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Iterate over channel values
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.0.iter()
    }
}

impl Default for ChannelVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Index<usize> for ChannelVector {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for ChannelVector {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.0[index]
    }
}

impl fmt::Display for ChannelVector {
    /// Space-separated integers in fixed channel order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Basic statistics for one channel across a set of samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelStats {
    pub min: i32,
    pub max: i32,
    pub mean: f32,
}

impl ChannelStats {
    pub fn calculate(values: &[i32]) -> Self {
        if values.is_empty() {
            return Self {
                min: 0,
                max: 0,
                mean: 0.0,
            };
        }

        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let sum: i64 = values.iter().map(|&v| v as i64).sum();
        let mean = sum as f32 / values.len() as f32;

        Self { min, max, mean }
    }

    /// Per-channel statistics over a set of channel vectors
    pub fn per_channel(vectors: &[ChannelVector]) -> Vec<ChannelStats> {
        (0..CHANNEL_COUNT)
            .map(|ch| {
                let column: Vec<i32> = vectors.iter().map(|v| v[ch]).collect();
                ChannelStats::calculate(&column)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_vector_display() {
        let mut vector = ChannelVector::zeroed();
        vector[0] = 42;
        vector[11] = -7;
        let line = format!("{}", vector);
        assert_eq!(line, "42 0 0 0 0 0 0 0 0 0 0 -7");
        assert_eq!(line.split_whitespace().count(), CHANNEL_COUNT);
    }

    #[test]
    fn test_channel_stats() {
        let stats = ChannelStats::calculate(&[-5, 0, 5, 10]);
        assert_eq!(stats.min, -5);
        assert_eq!(stats.max, 10);
        assert!((stats.mean - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_channel_stats_empty() {
        let stats = ChannelStats::calculate(&[]);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 0);
        assert_eq!(stats.mean, 0.0);
    }

    #[test]
    fn test_per_channel_stats() {
        let mut a = ChannelVector::zeroed();
        let mut b = ChannelVector::zeroed();
        a[3] = 10;
        b[3] = 20;
        let stats = ChannelStats::per_channel(&[a, b]);
        assert_eq!(stats.len(), CHANNEL_COUNT);
        assert_eq!(stats[3].min, 10);
        assert_eq!(stats[3].max, 20);
        assert!((stats[3].mean - 15.0).abs() < f32::EPSILON);
        assert_eq!(stats[0].max, 0);
    }
}
