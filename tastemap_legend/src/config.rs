// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Layout and gesture thresholds of the legend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegendConfig {
    /// Viewport width in CSS pixels below which row hover is ignored.
    pub desktop_min_width: f64,
    /// Vertical drag distance that opens or closes the mobile drawer.
    pub drawer_drag_threshold: f64,
    /// Largest pointer travel still treated as a tap on the drawer handle.
    pub tap_slop: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            desktop_min_width: 768.0,
            drawer_drag_threshold: 40.0,
            tap_slop: 6.0,
        }
    }
}
