// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use tastemap_dataset::Entity;
use tastemap_hierarchy::Palette;
use tastemap_pulse::PulseFrame;

use crate::glow::RampStop;

/// Colored points with per-point color and radius functions.
///
/// Holds indices into the full entity list rather than copies.
#[derive(Clone, Debug)]
pub struct PointLayer<'a> {
    entities: &'a [Entity],
    palette: &'a Palette,
    indices: Vec<usize>,
    base_radius: f64,
    pulse: Option<PulseFrame<'a>>,
}

impl<'a> PointLayer<'a> {
    pub(crate) fn new(
        entities: &'a [Entity],
        palette: &'a Palette,
        indices: Vec<usize>,
        base_radius: f64,
        pulse: Option<PulseFrame<'a>>,
    ) -> Self {
        Self {
            entities,
            palette,
            indices,
            base_radius,
            pulse,
        }
    }

    /// Indices of the drawn entities.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of drawn points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` while a hover pulse styles the points.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    /// The drawn entities, in draw order.
    pub fn entities(&self) -> impl Iterator<Item = (usize, &'a Entity)> + '_ {
        let entities = self.entities;
        self.indices.iter().map(move |&i| (i, &entities[i]))
    }

    /// Fill color of entity `index`.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        let category = self.category_of(index);
        let base = self.palette.color_of(category);
        match &self.pulse {
            Some(frame) => frame.point_color(category, base),
            None => base,
        }
    }

    /// Radius in screen pixels of entity `index`.
    #[must_use]
    pub fn radius_at(&self, index: usize) -> f64 {
        match &self.pulse {
            Some(frame) => frame.point_radius(self.category_of(index), self.base_radius),
            None => self.base_radius,
        }
    }

    fn category_of(&self, index: usize) -> &'a str {
        self.entities.get(index).map_or("", |e| e.category.as_str())
    }
}

/// A density field of one category branch.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityLayer {
    /// Category whose branch is drawn.
    pub category: String,
    /// Ramp from transparent to opaque, tinted with the category color.
    pub ramp: Vec<RampStop>,
    /// Overall intensity of the field.
    pub intensity: f64,
    /// Kernel radius in screen pixels.
    pub radius: f64,
    /// `(lon, lat)` of every contributing entity, each with weight 1.
    pub positions: Vec<(f64, f64)>,
}

/// One layer descriptor handed to the render surface.
#[derive(Clone, Debug)]
pub enum Layer<'a> {
    /// Discrete colored points.
    Points(PointLayer<'a>),
    /// Weighted density field.
    Density(DensityLayer),
}
