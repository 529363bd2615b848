// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Pulse: the legend hover animation.
//!
//! Hovering a legend row highlights the points of that category branch on the
//! map: matching points pulse between 140% and 350% of their base radius while
//! every other point fades to about 5% opacity. This crate holds the pieces of
//! that effect that do not depend on any renderer:
//!
//! - [`HoverPulse`]: the single hovered category, the time the hover started,
//!   and a memoized [`DescendantSet`](tastemap_hierarchy::DescendantSet) so the
//!   per-frame match test is a hash lookup.
//! - [`PulseFrame`]: the per-point color/radius functions for one frame.
//! - [`FrameTask`]: a cancellable handle over a host [`FrameScheduler`]
//!   (typically `requestAnimationFrame`). Starting a running task and stopping
//!   an idle one are both no-ops, so at most one frame is ever pending.
//!
//! ## Minimal example
//!
//! ```rust
//! use tastemap_hierarchy::{CategoryNode, CategoryTree};
//! use tastemap_pulse::{HoverPulse, PulseConfig};
//!
//! let tree = CategoryTree::from_roots([CategoryNode::new("Cafe", 10, [255, 140, 105])]).unwrap();
//! let mut hover = HoverPulse::new();
//! hover.enter(&tree, "Cafe", 1_000.0);
//!
//! let frame = hover.frame(1_200.0, &PulseConfig::default()).unwrap();
//! assert!((1.4..=3.5).contains(&frame.multiplier()));
//! assert!(frame.matches("Cafe (Unspecified)"));
//! ```
//!
//! Time is always supplied by the caller as milliseconds; nothing here reads a
//! clock.
//!
//! This crate is `no_std` and uses `alloc`; enable `libm` when building without `std`.

#![no_std]

extern crate alloc;

mod cache;
mod config;
mod frame;
mod hover;
mod style;

pub use cache::DescendantCache;
pub use config::PulseConfig;
pub use frame::{FrameScheduler, FrameTask};
pub use hover::HoverPulse;
pub use style::PulseFrame;
