// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tastemap_controller::{Controller, ViewMode};
use tastemap_dataset::Dataset;
use tastemap_pulse::PulseConfig;
use tracing::{debug, warn};

use crate::filter::{filter_glow, filter_points};
use crate::glow::GlowConfig;
use crate::layer::{DensityLayer, Layer, PointLayer};
use crate::surface::RenderSurface;

/// Tuning of the whole pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Radius of an unhovered point in screen pixels.
    pub point_radius: f64,
    /// Hover pulse tuning.
    pub pulse: PulseConfig,
    /// Glow density tuning.
    pub glow: GlowConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            point_radius: 3.0,
            pulse: PulseConfig::default(),
            glow: GlowConfig::default(),
        }
    }
}

/// Result of one render pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The surface accepted the new layers.
    Drawn,
    /// The surface failed; the previous frame stays on screen.
    Skipped,
}

/// Derives layers from the dataset and the controller state and hands them
/// to a [`RenderSurface`].
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    drawn: u64,
    skipped: u64,
}

impl Pipeline {
    /// Creates a pipeline with `config`.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            drawn: 0,
            skipped: 0,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Frames the surface accepted.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.drawn
    }

    /// Frames dropped because the surface failed.
    #[must_use]
    pub fn frames_skipped(&self) -> u64 {
        self.skipped
    }

    /// Indices of the entities the current state shows.
    #[must_use]
    pub fn shown(&self, dataset: &Dataset, controller: &Controller) -> Vec<usize> {
        let entities = dataset.entities();
        match controller.mode().mode() {
            ViewMode::Points => filter_points(entities, controller.selection().visible()),
            ViewMode::Glow => match controller.mode().glow_category() {
                Some(category) => {
                    filter_glow(entities, &controller.tree().descendant_names(category))
                }
                None => Vec::new(),
            },
        }
    }

    /// Layer descriptors for the frame at `now_ms`.
    ///
    /// Points mode yields one point layer, styled by the hover pulse when a
    /// legend row is hovered. Glow mode yields one density layer, or nothing
    /// when no category glows.
    #[must_use]
    pub fn layers<'a>(
        &self,
        dataset: &'a Dataset,
        controller: &'a Controller,
        now_ms: f64,
    ) -> Vec<Layer<'a>> {
        let entities = dataset.entities();
        match controller.mode().mode() {
            ViewMode::Points => {
                let indices = filter_points(entities, controller.selection().visible());
                let pulse = controller.hover().frame(now_ms, &self.config.pulse);
                vec![Layer::Points(PointLayer::new(
                    entities,
                    dataset.palette(),
                    indices,
                    self.config.point_radius,
                    pulse,
                ))]
            }
            ViewMode::Glow => {
                let Some(category) = controller.mode().glow_category() else {
                    return Vec::new();
                };
                let branch = controller.tree().descendant_names(category);
                let indices = filter_glow(entities, &branch);
                let glow = &self.config.glow;
                let tint = dataset.color_of(category);
                vec![Layer::Density(DensityLayer {
                    category: category.to_owned(),
                    ramp: glow.ramp(tint),
                    intensity: glow.intensity(indices.len(), entities.len()),
                    radius: glow.radius,
                    positions: indices.iter().map(|&i| entities[i].position()).collect(),
                })]
            }
        }
    }

    /// Builds the layers for `now_ms` and draws them.
    ///
    /// A surface error is logged and the frame is skipped.
    pub fn render<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        dataset: &Dataset,
        controller: &Controller,
        now_ms: f64,
    ) -> RenderOutcome {
        let layers = self.layers(dataset, controller, now_ms);
        match surface.draw(&layers) {
            Ok(()) => {
                self.drawn += 1;
                debug!("Drew {} layers", layers.len());
                RenderOutcome::Drawn
            }
            Err(err) => {
                self.skipped += 1;
                warn!("Render failed, keeping the previous frame: {}", err);
                RenderOutcome::Skipped
            }
        }
    }
}
