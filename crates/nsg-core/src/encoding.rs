//! Fixed-point encoding of floating-point channel values

use serde::{Deserialize, Serialize};

/// Fixed-point encoding configuration for trajectory-mode channels.
///
/// Resolution (bit depth) and scale factor are independent values: the
/// resolution declares the nominal representable range, the scale factor
/// converts floating-point units into integer counts. Encoding does not
/// enforce the range; values past `max_value` are clamped downstream
/// where the model demands it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedPointEncoding {
    /// Nominal bit depth of an encoded channel value
    pub resolution_bits: u32,
    /// Multiplier applied before truncation to integer
    pub scale: f32,
}

impl FixedPointEncoding {
    /// Encode a value: scale and truncate toward zero
    pub fn encode(&self, value: f32) -> i32 {
        (value * self.scale) as i32
    }

    /// Largest value representable at the configured resolution
    pub fn max_value(&self) -> i32 {
        (1i64 << self.resolution_bits) as i32 - 1
    }
}

impl Default for FixedPointEncoding {
    /// 10-bit resolution with a matching 1024x scale factor
    fn default() -> Self {
        FixedPointEncoding {
            resolution_bits: 10,
            scale: 1024.0,
        }
    }
}

/// Clamp a raw channel magnitude into a bounded integer range
pub fn clamp_channel(value: i32, min: i32, max: i32) -> i32 {
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encoding() {
        let encoding = FixedPointEncoding::default();
        assert_eq!(encoding.resolution_bits, 10);
        assert_eq!(encoding.max_value(), 1023);
        assert_eq!(encoding.encode(1.0), 1024);
    }

    #[test]
    fn test_encode_truncates_toward_zero() {
        let encoding = FixedPointEncoding::default();
        // 0.9999 * 1024 = 1023.8976
        assert_eq!(encoding.encode(0.9999), 1023);
        assert_eq!(encoding.encode(-0.9999), -1023);
    }

    #[test]
    fn test_encode_does_not_enforce_range() {
        let encoding = FixedPointEncoding::default();
        assert!(encoding.encode(30.0) > encoding.max_value());
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(250, 0, 200), 200);
        assert_eq!(clamp_channel(-3, 0, 200), 0);
        assert_eq!(clamp_channel(77, 0, 200), 77);
    }
}
