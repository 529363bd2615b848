// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Pipeline: from dataset and view state to drawable layers.
//!
//! The [`Pipeline`] recomputes the displayed subset of the dataset whenever the
//! host asks for a frame; there is no caching or debouncing.
//!
//! - Points mode: every entity whose category is in the visible set, drawn as a
//!   [`PointLayer`] whose [`color_at`](PointLayer::color_at) and
//!   [`radius_at`](PointLayer::radius_at) apply the legend hover pulse.
//! - Glow mode: every entity in the glow category's branch, drawn as a
//!   [`DensityLayer`] tinted with that category's color. Its intensity is
//!   `sqrt(matching / total) * 3`, so a sparse branch never outshines a
//!   denser one.
//!
//! Drawing is delegated to a host [`RenderSurface`]. A surface error is logged
//! and the frame is skipped, leaving the previous one on screen.
//!
//! The crate also carries the map-facing extras: [`Tooltip`]s for points
//! under the pointer, and [`CameraSync`] to keep a [`BaseMap`] aligned with
//! the render camera.

mod camera;
mod filter;
mod glow;
mod layer;
mod pick;
mod pipeline;
mod surface;

pub use camera::{CameraLimits, CameraSync, MapCamera};
pub use filter::{filter_glow, filter_points};
pub use glow::{GlowConfig, RampStop};
pub use layer::{DensityLayer, Layer, PointLayer};
pub use pick::{PointHover, Tooltip};
pub use pipeline::{Pipeline, PipelineConfig, RenderOutcome};
pub use surface::{BaseMap, RenderSurface};
