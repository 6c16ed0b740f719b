//! Dense 3D LUT grid generation.

use crate::config::ColorBalance;
use crate::error::ConfigError;

/// A dense 3D lookup table of adjusted RGB samples.
///
/// Entries are stored with red varying slowest and blue fastest:
/// entry (r, g, b) lives at index `((r * size) + g) * size + b`.
/// Channel values stay `f64` so six-decimal output is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Grid size per axis.
    pub size: u32,
    /// LUT entries as RGB triples. Length = size³.
    pub data: Vec<[f64; 3]>,
}

impl Lut3D {
    /// Generate the full grid for a color balance at the given size.
    ///
    /// Sample i along each axis maps to `i / (size - 1)`, so the grid
    /// spans [0, 1] inclusive; each sample is then scaled per channel.
    /// Sizes below 2 are rejected (normalization would divide by zero).
    pub fn generate(balance: &ColorBalance, size: u32) -> Result<Self, ConfigError> {
        if size < 2 {
            return Err(ConfigError::SizeTooSmall { size });
        }

        let n = size as usize;
        let max = (size - 1) as f64;
        let mut data = Vec::with_capacity(n * n * n);
        for r in 0..n {
            for g in 0..n {
                for b in 0..n {
                    let sample = [r as f64 / max, g as f64 / max, b as f64 / max];
                    data.push(balance.apply(sample));
                }
            }
        }
        Ok(Self { size, data })
    }

    /// Number of entries a grid of this size must hold.
    pub fn entry_count(&self) -> usize {
        let n = self.size as usize;
        n * n * n
    }

    /// Entry at grid position (r, g, b).
    pub fn entry(&self, r: u32, g: u32, b: u32) -> [f64; 3] {
        let n = self.size as usize;
        self.data[((r as usize * n) + g as usize) * n + b as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: ColorBalance = ColorBalance {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    #[test]
    fn test_generate_fills_the_whole_grid() {
        let lut = Lut3D::generate(&IDENTITY, 33).unwrap();
        assert_eq!(lut.data.len(), 35_937);
        assert_eq!(lut.data.len(), lut.entry_count());
    }

    #[test]
    fn test_size_two_has_exact_corners() {
        let balance = ColorBalance {
            red: 1.0,
            green: 0.5,
            blue: 0.5,
        };
        let lut = Lut3D::generate(&balance, 2).unwrap();
        assert_eq!(lut.data.len(), 8);
        assert_eq!(lut.entry(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(lut.entry(1, 1, 1), [1.0, 0.5, 0.5]);
    }

    #[test]
    fn test_samples_are_evenly_spaced_over_unit_interval() {
        let lut = Lut3D::generate(&IDENTITY, 5).unwrap();
        for i in 0..5 {
            let expected = f64::from(i) / 4.0;
            assert_eq!(lut.entry(i, 0, 0)[0], expected);
            assert_eq!(lut.entry(0, i, 0)[1], expected);
            assert_eq!(lut.entry(0, 0, i)[2], expected);
        }
    }

    #[test]
    fn test_entry_scales_each_channel_by_its_factor() {
        let balance = ColorBalance {
            red: 2.0,
            green: -1.0,
            blue: 0.25,
        };
        let lut = Lut3D::generate(&balance, 3).unwrap();
        assert_eq!(lut.entry(1, 2, 1), [0.5 * 2.0, 1.0 * -1.0, 0.5 * 0.25]);
    }

    #[test]
    fn test_blue_varies_fastest_in_storage_order() {
        let lut = Lut3D::generate(&IDENTITY, 3).unwrap();
        // Consecutive entries step the blue axis.
        assert_eq!(lut.data[0], [0.0, 0.0, 0.0]);
        assert_eq!(lut.data[1], [0.0, 0.0, 0.5]);
        // One full blue run later, green steps.
        assert_eq!(lut.data[3], [0.0, 0.5, 0.0]);
        // One full green×blue plane later, red steps.
        assert_eq!(lut.data[9], [0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_sizes_below_two_are_rejected() {
        for size in [0, 1] {
            let err = Lut3D::generate(&IDENTITY, size).unwrap_err();
            assert!(matches!(err, ConfigError::SizeTooSmall { .. }));
        }
    }
}
