// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`

/// Tuning constants of the hover pulse.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PulseConfig {
    /// Phase advance in radians per millisecond (0.005 is about 0.8 Hz).
    pub phase_rate: f64,
    /// Smallest radius multiplier of a matching point.
    pub min_scale: f64,
    /// Largest radius multiplier of a matching point.
    pub max_scale: f64,
    /// Alpha applied to points outside the hovered branch.
    pub dim_alpha: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            phase_rate: 0.005,
            min_scale: 1.4,
            max_scale: 3.5,
            dim_alpha: 0.05,
        }
    }
}

impl PulseConfig {
    /// Radius multiplier `elapsed_ms` after the hover started.
    ///
    /// A sine wave mapped onto `[min_scale, max_scale]`; continuous in time and
    /// starting at the midpoint.
    #[must_use]
    pub fn radius_multiplier(&self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() {
            return self.min_scale;
        }
        let wave = (elapsed_ms * self.phase_rate).sin();
        let t = (wave + 1.0) * 0.5;
        self.min_scale + (self.max_scale - self.min_scale) * t
    }
}
