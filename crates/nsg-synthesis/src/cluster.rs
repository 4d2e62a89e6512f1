//! Cluster-mode generation: activation-driven firing snapshots

use nsg_core::{
    clamp_channel, ChannelVector, NsgError, NsgResult, SnapshotBatch, CHANNEL_COUNT,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Raw per-channel magnitudes are clamped into this range before the
/// perturbation pass
const CLAMP_MIN: i32 = 0;
const CLAMP_MAX: i32 = 200;

/// Per-channel probability of the post-clamp perturbation
const PERTURB_PROBABILITY: f32 = 0.1;

/// Static assignment of channels to functionally related clusters.
///
/// Cluster sizes map to contiguous channel blocks in declaration order
/// and must sum to exactly [`CHANNEL_COUNT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPartition {
    /// Number of channels driven by each cluster
    pub sizes: Vec<usize>,
}

impl ClusterPartition {
    pub fn new(sizes: Vec<usize>) -> NsgResult<Self> {
        let partition = ClusterPartition { sizes };
        partition.validate()?;
        Ok(partition)
    }

    /// Check that the partition covers the channel range exactly
    pub fn validate(&self) -> NsgResult<()> {
        let covered: usize = self.sizes.iter().sum();
        if covered != CHANNEL_COUNT {
            return Err(NsgError::InvalidPartition {
                covered,
                expected: CHANNEL_COUNT,
            });
        }
        Ok(())
    }

    /// Number of clusters
    pub fn cluster_count(&self) -> usize {
        self.sizes.len()
    }

    /// Contiguous channel range driven by each cluster, in order
    pub fn channel_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(self.sizes.len());
        let mut offset = 0;
        for &size in &self.sizes {
            ranges.push(offset..offset + size);
            offset += size;
        }
        ranges
    }
}

impl Default for ClusterPartition {
    /// Five clusters sized for hand, arm, wrist, shoulder, and finger groups
    fn default() -> Self {
        ClusterPartition {
            sizes: vec![4, 3, 2, 2, 1],
        }
    }
}

/// Configuration for cluster-mode generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Channel-to-cluster assignment
    pub partition: ClusterPartition,
    /// Blend weight between the two excitation sources, in [0, 1]
    pub cluster_strength: f32,
    /// Random seed for reproducibility; `None` seeds from system time
    pub seed: Option<u64>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            partition: ClusterPartition::default(),
            cluster_strength: 0.5,
            seed: None,
        }
    }
}

/// Blend two competing excitation sources into one activation level.
///
/// The two legs use independent draws: `r1` excites the sin leg, `r2`
/// the cos leg. At strength 1.0 the cos leg has zero weight and the
/// activation is insensitive to `r2` (and vice versa at 0.0).
fn blend_activation(r1: f32, r2: f32, strength: f32) -> f32 {
    r1.sin().powi(2) * strength + r2.cos().powi(2) * (1.0 - strength)
}

/// Generates batches of cluster-driven firing snapshots.
///
/// Unlike trajectory mode these signals have no time axis; each snapshot
/// is one channel vector of per-electrode magnitudes derived from its
/// cluster's activation level plus independent channel noise.
pub struct ClusterSynthesizer {
    config: ClusterConfig,
    ranges: Vec<Range<usize>>,
    rng: StdRng,
}

impl ClusterSynthesizer {
    /// Create a new synthesizer, seeding the random source once
    pub fn new(config: ClusterConfig) -> NsgResult<Self> {
        config.partition.validate()?;
        if !config.cluster_strength.is_finite()
            || !(0.0..=1.0).contains(&config.cluster_strength)
        {
            return Err(NsgError::InvalidConfig {
                reason: format!(
                    "Cluster strength must be within [0, 1], got {}",
                    config.cluster_strength
                ),
            });
        }

        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        });
        let rng = StdRng::seed_from_u64(seed);
        let ranges = config.partition.channel_ranges();

        Ok(ClusterSynthesizer {
            config,
            ranges,
            rng,
        })
    }

    /// Generate `num_signals` independent snapshots
    pub fn generate(&mut self, num_signals: usize) -> NsgResult<SnapshotBatch> {
        if num_signals == 0 {
            return Err(NsgError::InvalidConfig {
                reason: "Number of signals must be at least 1".to_string(),
            });
        }

        let mut snapshots = Vec::with_capacity(num_signals);
        for _ in 0..num_signals {
            let mut snapshot = self.synthesize();
            self.perturb(&mut snapshot);
            snapshots.push(snapshot);
        }

        Ok(SnapshotBatch::new(snapshots))
    }

    /// First stage: cluster activations, per-channel magnitudes, clamp.
    /// All values leave this stage within `[CLAMP_MIN, CLAMP_MAX]`.
    fn synthesize(&mut self) -> ChannelVector {
        let strength = self.config.cluster_strength;
        let mut snapshot = ChannelVector::zeroed();

        let activations: Vec<f32> = (0..self.ranges.len())
            .map(|_| {
                let r1: f32 = self.rng.gen();
                let r2: f32 = self.rng.gen();
                blend_activation(r1, r2, strength)
            })
            .collect();

        for (range, activation) in self.ranges.iter().zip(&activations) {
            for channel in range.clone() {
                let u: f32 = self.rng.gen();
                snapshot[channel] = (activation * (u * 100.0 + 50.0)) as i32;
            }
        }

        for channel in 0..CHANNEL_COUNT {
            snapshot[channel] = clamp_channel(snapshot[channel], CLAMP_MIN, CLAMP_MAX);
        }

        snapshot
    }

    /// Second stage: with independent 10% probability per channel, add a
    /// [-25, 25] perturbation. Applied after clamping, so perturbed
    /// channels may legally leave the clamped range.
    fn perturb(&mut self, snapshot: &mut ChannelVector) {
        for channel in 0..CHANNEL_COUNT {
            if self.rng.gen::<f32>() < PERTURB_PROBABILITY {
                let u: f32 = self.rng.gen();
                snapshot[channel] = (snapshot[channel] as f32 + (u * 50.0 - 25.0)) as i32;
            }
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(strength: f32) -> ClusterConfig {
        ClusterConfig {
            partition: ClusterPartition::default(),
            cluster_strength: strength,
            seed: Some(42),
        }
    }

    #[test]
    fn test_batch_length_matches_num_signals() {
        let mut synthesizer = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        let batch = synthesizer.generate(9).unwrap();
        assert_eq!(batch.len(), 9);
    }

    #[test]
    fn test_default_partition_covers_channels() {
        let partition = ClusterPartition::default();
        assert!(partition.validate().is_ok());
        assert_eq!(partition.cluster_count(), 5);
        assert_eq!(
            partition.channel_ranges(),
            vec![0..4, 4..7, 7..9, 9..11, 11..12]
        );
    }

    #[test]
    fn test_partition_coverage_rejected() {
        let result = ClusterPartition::new(vec![4, 4]);
        assert_eq!(
            result,
            Err(NsgError::InvalidPartition {
                covered: 8,
                expected: CHANNEL_COUNT
            })
        );
    }

    #[test]
    fn test_strength_out_of_range_rejected() {
        for strength in [-0.1, 1.5, f32::NAN] {
            let result = ClusterSynthesizer::new(seeded_config(strength));
            assert!(matches!(result, Err(NsgError::InvalidConfig { .. })));
        }
    }

    #[test]
    fn test_zero_num_signals_rejected() {
        let mut synthesizer = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        assert!(matches!(
            synthesizer.generate(0),
            Err(NsgError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_pre_perturbation_values_clamped() {
        let mut synthesizer = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        for _ in 0..200 {
            let snapshot = synthesizer.synthesize();
            for &value in snapshot.iter() {
                assert!((CLAMP_MIN..=CLAMP_MAX).contains(&value));
            }
        }
    }

    #[test]
    fn test_final_values_within_documented_bounds() {
        // Post-clamp perturbation may push values into [-25, 225]
        let mut synthesizer = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        let batch = synthesizer.generate(500).unwrap();
        for snapshot in &batch.snapshots {
            for &value in snapshot.iter() {
                assert!((-25..=225).contains(&value), "value {} out of bounds", value);
            }
        }
    }

    #[test]
    fn test_every_channel_populated() {
        let mut synthesizer = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        let batch = synthesizer.generate(100).unwrap();
        for channel in 0..CHANNEL_COUNT {
            let max = batch.snapshots.iter().map(|s| s[channel]).max().unwrap();
            assert!(max > 0, "channel {} never fired", channel);
        }
    }

    #[test]
    fn test_full_strength_ignores_cos_leg() {
        let base = blend_activation(0.3, 0.1, 1.0);
        for r2 in [0.0, 0.25, 0.5, 0.75, 0.99] {
            assert_eq!(blend_activation(0.3, r2, 1.0), base);
        }
    }

    #[test]
    fn test_zero_strength_ignores_sin_leg() {
        let base = blend_activation(0.1, 0.6, 0.0);
        for r1 in [0.0, 0.25, 0.5, 0.75, 0.99] {
            assert_eq!(blend_activation(r1, 0.6, 0.0), base);
        }
    }

    #[test]
    fn test_activation_in_unit_interval() {
        for strength in [0.0, 0.3, 0.5, 0.8, 1.0] {
            for r in [0.0f32, 0.2, 0.5, 0.9, 0.999] {
                let activation = blend_activation(r, 1.0 - r, strength);
                assert!((0.0..=1.0).contains(&activation));
            }
        }
    }

    #[test]
    fn test_fixed_seed_reproducibility() {
        let mut first = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        let mut second = ClusterSynthesizer::new(seeded_config(0.5)).unwrap();
        let batch_a = first.generate(16).unwrap();
        let batch_b = second.generate(16).unwrap();
        assert_eq!(batch_a.snapshots, batch_b.snapshots);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = seeded_config(0.7);
        let json = serde_json::to_string(&config).unwrap();
        let back: ClusterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.partition, config.partition);
        assert_eq!(back.cluster_strength, config.cluster_strength);
        assert_eq!(back.seed, config.seed);
    }
}
