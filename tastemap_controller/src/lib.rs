// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Controller: view modes and the application state they act on.
//!
//! The map has two mutually exclusive view modes:
//! - [`ViewMode::Points`]: multi-select. Checkboxes add or remove a category's
//!   whole descendant set from the visible set.
//! - [`ViewMode::Glow`]: radio select. Exactly one category branch is visible
//!   and drawn as a density field.
//!
//! Switching Points → Glow snapshots the visible set and selects the largest
//! top-level category; switching back restores the snapshot exactly.
//!
//! All interactive state lives in [`AppState`], owned by a [`Controller`]. Hosts
//! translate their input into [`Event`]s, call [`Controller::handle`], and use
//! the returned [`Reaction`] to decide what to refresh and whether to start or
//! stop the hover animation loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tastemap_controller::{Controller, Event, ViewMode};
//! use tastemap_hierarchy::{CategoryNode, CategoryTree};
//!
//! let tree = CategoryTree::from_roots([
//!     CategoryNode::new("Pizza Shop", 80, [255, 100, 30]),
//!     CategoryNode::new("Asian", 100, [255, 50, 130]),
//! ])
//! .unwrap();
//! let mut controller = Controller::new(Arc::new(tree));
//!
//! controller.handle(Event::ModeChanged(ViewMode::Glow));
//! assert_eq!(controller.mode().glow_category(), Some("Asian"));
//!
//! controller.handle(Event::ModeChanged(ViewMode::Points));
//! assert!(controller.selection().visible().contains("Pizza Shop"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod event;
pub mod mode;

pub use controller::{AppState, Controller};
pub use event::{Event, PulseCommand, Reaction};
pub use mode::{ModeState, ViewMode};
