//! Trajectory-mode generation: pose interpolation with noise injection

use crate::noise::{NoiseConfig, NoiseSampler};
use nsg_core::{
    ChannelVector, FixedPointEncoding, NsgError, NsgResult, Signal, SignalBatch, Trajectory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for trajectory-mode generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Time between consecutive samples, in milliseconds
    pub sample_period_ms: u32,
    /// Noise applied to the interpolated position channels
    pub noise: NoiseConfig,
    /// Fixed-point encoding of channel values
    pub encoding: FixedPointEncoding,
    /// Random seed for reproducibility; `None` seeds from system time
    pub seed: Option<u64>,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 1,
            noise: NoiseConfig::default(),
            encoding: FixedPointEncoding::default(),
            seed: None,
        }
    }
}

/// Generates batches of interpolated motor-intent signals.
///
/// Each signal walks the trajectory from start pose to end pose at the
/// configured sample period. Channels 0-2 carry the scaled, noise-injected
/// position estimate; channels 3-5 start as the scaled orientation and are
/// then overwritten each step with the noise-free scaled x estimate (a
/// quirk of the model this generator reproduces deliberately); channels
/// 6-11 are reserved and stay zero.
pub struct TrajectoryGenerator {
    config: TrajectoryConfig,
    sampler: NoiseSampler,
    rng: StdRng,
}

impl TrajectoryGenerator {
    /// Create a new generator, seeding the random source once
    pub fn new(config: TrajectoryConfig) -> NsgResult<Self> {
        if config.sample_period_ms == 0 {
            return Err(NsgError::InvalidConfig {
                reason: "Sample period must be at least 1ms".to_string(),
            });
        }
        let sampler = NoiseSampler::from_config(&config.noise)?;

        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        });
        let rng = StdRng::seed_from_u64(seed);

        Ok(TrajectoryGenerator {
            config,
            sampler,
            rng,
        })
    }

    /// Generate `num_signals` independent signals for the trajectory.
    ///
    /// Each signal has exactly `duration / sample_period + 1` samples;
    /// a degenerate trajectory yields the initial sample only.
    pub fn generate(
        &mut self,
        trajectory: &Trajectory,
        num_signals: usize,
    ) -> NsgResult<SignalBatch> {
        if num_signals == 0 {
            return Err(NsgError::InvalidConfig {
                reason: "Number of signals must be at least 1".to_string(),
            });
        }
        trajectory.validate()?;

        let duration_ms = trajectory.duration_ms();
        let steps = trajectory.step_count(self.config.sample_period_ms);

        let mut signals = Vec::with_capacity(num_signals);
        for _ in 0..num_signals {
            signals.push(self.generate_signal(trajectory, duration_ms, steps));
        }

        Ok(SignalBatch::new(self.config.sample_period_ms, signals))
    }

    fn generate_signal(&mut self, trajectory: &Trajectory, duration_ms: u32, steps: usize) -> Signal {
        let encoding = self.config.encoding;
        let start_pos = trajectory.start.position();
        let end_pos = trajectory.end.position();

        let mut samples = Vec::with_capacity(steps);

        // Initial sample: start position plus the orientation-derived state
        let mut first = ChannelVector::zeroed();
        for (axis, &value) in start_pos.iter().enumerate() {
            first[axis] = encoding.encode(value);
        }
        for (axis, &value) in trajectory.start.orientation().iter().enumerate() {
            first[3 + axis] = encoding.encode(value);
        }
        samples.push(first);

        let mut t = self.config.sample_period_ms;
        while t <= duration_ms {
            // The factor divides elapsed milliseconds by the step count,
            // not the duration: at 1ms period the path stops short of the
            // end pose, at longer periods it runs past it.
            let factor = t as f32 / steps as f32;
            let mut sample = ChannelVector::zeroed();

            for axis in 0..3 {
                let interpolated = start_pos[axis] + (end_pos[axis] - start_pos[axis]) * factor;
                let noise = self.sampler.sample(&mut self.rng);
                sample[axis] = encoding.encode(interpolated + noise);
            }

            // State channels track the noise-free x estimate
            let x_clean = start_pos[0] + (end_pos[0] - start_pos[0]) * factor;
            let state = encoding.encode(x_clean);
            for channel in 3..6 {
                sample[channel] = state;
            }

            samples.push(sample);
            t += self.config.sample_period_ms;
        }

        Signal::new(samples)
    }

    /// Get current configuration
    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }
}
