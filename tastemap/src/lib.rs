// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap: an interactive map of categorized restaurants.
//!
//! This crate wires the headless pieces together:
//!
//! - [`Startup`] gates all interaction behind the one-time load of the startup
//!   document and turns a failure into a blocking overlay.
//! - [`App`] owns the dataset, the [`Controller`](tastemap_controller::Controller),
//!   the render [`Pipeline`](tastemap_pipeline::Pipeline), the hover pulse
//!   [`FrameTask`](tastemap_pulse::FrameTask), camera sync and the mobile drawer.
//!   Every input is applied to completion and the map re-renders synchronously.
//!
//! Hosts supply three collaborators through traits: a
//! [`FrameScheduler`](tastemap_pulse::FrameScheduler) for animation frames, a
//! [`RenderSurface`](tastemap_pipeline::RenderSurface) for point and density
//! layers, and a [`BaseMap`](tastemap_pipeline::BaseMap) for the tiles.
//!
//! The `tastemap-legend` binary loads a `map_data.json` and prints the legend
//! and filter summary, which is handy for checking a freshly prepared dataset.

mod app;
mod startup;
mod text;

pub use app::{App, AppConfig};
pub use startup::Startup;
pub use text::legend_to_text;

pub use tastemap_controller::{Event, Reaction, ViewMode};
pub use tastemap_dataset::{Dataset, LOAD_FAILURE_MESSAGE, LoadError};
pub use tastemap_legend::{InputContext, LegendInput, PointerKind, RowPart};
