// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// One stop of the density color ramp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RampStop {
    /// Position along the ramp in `[0, 1]`, low density first.
    pub offset: f32,
    /// Color at this position.
    pub color: Color,
}

/// Tuning of the Glow density field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlowConfig {
    /// Scale applied to `sqrt(matching / total)`.
    pub intensity_scale: f64,
    /// Kernel radius in screen pixels.
    pub radius: f64,
    /// Alpha of each ramp stop, from transparent to opaque.
    pub ramp_alpha: [f32; 6],
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            intensity_scale: 3.0,
            radius: 30.0,
            ramp_alpha: [0.0, 0.25, 0.45, 0.65, 0.85, 1.0],
        }
    }
}

impl GlowConfig {
    /// Density intensity for a branch matching `matching` of `total` entities.
    ///
    /// Scales with the square root of the branch's share of the dataset, so a
    /// sparse category never glows louder than a denser one. An empty dataset
    /// yields `0`.
    #[must_use]
    pub fn intensity(&self, matching: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let ratio = matching as f64 / total as f64;
        ratio.sqrt() * self.intensity_scale
    }

    /// Evenly spaced ramp stops tinted with `tint`.
    #[must_use]
    pub fn ramp(&self, tint: Color) -> Vec<RampStop> {
        let last = self.ramp_alpha.len().saturating_sub(1).max(1);
        self.ramp_alpha
            .iter()
            .enumerate()
            .map(|(i, &alpha)| {
                let offset = i as f32 / last as f32;
                RampStop {
                    offset,
                    color: tint.with_alpha(alpha),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_sqrt_of_share() {
        let cfg = GlowConfig::default();
        assert!((cfg.intensity(25, 100) - 1.5).abs() < 1e-12);
        assert!((cfg.intensity(100, 100) - 3.0).abs() < 1e-12);
        assert_eq!(cfg.intensity(0, 0), 0.0);
        assert_eq!(cfg.intensity(0, 10), 0.0);
        // A sparse branch stays fainter than a dense one.
        assert!(cfg.intensity(5, 1_000) < cfg.intensity(600, 1_000));
    }

    #[test]
    fn ramp_runs_transparent_to_opaque() {
        let tint = Color::from_rgb8(255, 50, 130);
        let ramp = GlowConfig::default().ramp(tint);
        assert_eq!(ramp.len(), 6);
        assert_eq!(ramp[0].offset, 0.0);
        assert_eq!(ramp[5].offset, 1.0);
        assert_eq!(ramp[0].color.components[3], 0.0);
        assert_eq!(ramp[5].color, tint);
    }
}
