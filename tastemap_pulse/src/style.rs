// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use tastemap_hierarchy::DescendantSet;

/// Per-point color and radius functions for one animation frame.
#[derive(Clone, Copy, Debug)]
pub struct PulseFrame<'a> {
    descendants: &'a DescendantSet,
    multiplier: f64,
    dim_alpha: f32,
}

impl<'a> PulseFrame<'a> {
    pub(crate) fn new(descendants: &'a DescendantSet, multiplier: f64, dim_alpha: f32) -> Self {
        Self {
            descendants,
            multiplier,
            dim_alpha,
        }
    }

    /// Radius multiplier applied to matching points this frame.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns `true` if `category` belongs to the hovered branch.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        self.descendants.contains(category)
    }

    /// Matching points render fully opaque, the rest at the dim alpha.
    #[must_use]
    pub fn point_color(&self, category: &str, base: Color) -> Color {
        if self.matches(category) {
            base.with_alpha(1.0)
        } else {
            base.with_alpha(self.dim_alpha)
        }
    }

    /// Matching points are scaled by the multiplier, the rest keep `base_radius`.
    #[must_use]
    pub fn point_radius(&self, category: &str, base_radius: f64) -> f64 {
        if self.matches(category) {
            base_radius * self.multiplier
        } else {
            base_radius
        }
    }
}
