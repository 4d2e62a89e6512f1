//! Noise models for trajectory-mode signal perturbation

use nsg_core::{NsgError, NsgResult};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized noise distributions.
///
/// The set is closed; parsing any other name fails with
/// [`NsgError::UnrecognizedNoiseKind`] instead of silently passing
/// samples through unperturbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// Zero-mean Gaussian with standard deviation `amplitude`
    Gaussian,
    /// Bounded-uniform over `[-amplitude, amplitude]`
    Uniform,
}

impl FromStr for NoiseKind {
    type Err = NsgError;

    fn from_str(s: &str) -> NsgResult<Self> {
        match s {
            "gaussian" => Ok(NoiseKind::Gaussian),
            "uniform" => Ok(NoiseKind::Uniform),
            other => Err(NsgError::UnrecognizedNoiseKind {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseKind::Gaussian => write!(f, "gaussian"),
            NoiseKind::Uniform => write!(f, "uniform"),
        }
    }
}

/// Noise configuration for trajectory-mode generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Distribution the per-axis noise samples are drawn from
    pub kind: NoiseKind,
    /// Distribution width; 0.0 disables perturbation
    pub amplitude: f32,
}

impl NoiseConfig {
    pub fn new(kind: NoiseKind, amplitude: f32) -> Self {
        NoiseConfig { kind, amplitude }
    }

    pub fn validate(&self) -> NsgResult<()> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(NsgError::InvalidConfig {
                reason: format!(
                    "Noise amplitude must be finite and non-negative, got {}",
                    self.amplitude
                ),
            });
        }
        Ok(())
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            kind: NoiseKind::Gaussian,
            amplitude: 0.0,
        }
    }
}

/// Prepared sampler for one noise configuration
#[derive(Debug, Clone)]
pub(crate) enum NoiseSampler {
    Gaussian(Normal<f32>),
    Uniform { amplitude: f32 },
}

impl NoiseSampler {
    pub(crate) fn from_config(config: &NoiseConfig) -> NsgResult<Self> {
        config.validate()?;
        match config.kind {
            NoiseKind::Gaussian => {
                let dist = Normal::new(0.0, config.amplitude).map_err(|e| {
                    NsgError::InvalidConfig {
                        reason: format!("Failed to create normal distribution: {}", e),
                    }
                })?;
                Ok(NoiseSampler::Gaussian(dist))
            }
            NoiseKind::Uniform => Ok(NoiseSampler::Uniform {
                amplitude: config.amplitude,
            }),
        }
    }

    /// Draw one noise sample
    pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        match self {
            NoiseSampler::Gaussian(dist) => dist.sample(rng),
            NoiseSampler::Uniform { amplitude } => {
                if *amplitude > 0.0 {
                    rng.gen_range(-amplitude..=*amplitude)
                } else {
                    0.0
                }
            }
        }
    }
}
