// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Legend: a headless, hierarchical legend for a category map.
//!
//! [`Legend::build`] is a pure function of the hierarchy, the selection, the
//! view mode and the hovered category. It produces a tree of [`LegendRow`]s,
//! each carrying everything a host needs to draw it:
//!
//! - a tri-state [`CheckState`] derived from the node's descendant set,
//! - the swatch color, label and a formatted count (`12,345`),
//! - an expand/collapse arrow for groups, and children sorted by descending count,
//! - a dimmed flag when nothing in the branch is visible, and a hovered flag.
//!
//! Input flows back through [`Legend::dispatch`], which turns row clicks and
//! pointer crossings into [`Event`](tastemap_controller::Event)s for the
//! controller. On narrow screens the legend lives in a drawer driven by
//! [`DrawerState`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tastemap_controller::Controller;
//! use tastemap_hierarchy::{CategoryNode, CategoryTree};
//! use tastemap_legend::{
//!     CheckState, InputContext, Legend, LegendConfig, LegendInput, PointerKind, RowPart,
//! };
//!
//! let asian = CategoryNode::new("Asian", 1_200, [255, 50, 130])
//!     .with_child(CategoryNode::new("Chinese", 700, [255, 55, 70]))
//!     .unwrap();
//! let mut controller = Controller::new(Arc::new(CategoryTree::from_roots([asian]).unwrap()));
//!
//! let legend = Legend::from_controller(&controller);
//! let row = &legend.rows()[0];
//! assert_eq!(row.check, CheckState::Checked);
//! assert_eq!(row.count_label, "1,200");
//!
//! // Clicking the checked checkbox hides the branch and does not expand the row.
//! let context = InputContext { viewport_width: 1280.0, pointer: PointerKind::Mouse };
//! let click = LegendInput::Click { row: "Asian".into(), part: RowPart::Checkbox };
//! for event in legend.dispatch(&click, &context, &LegendConfig::default()) {
//!     controller.handle(event);
//! }
//! let legend = Legend::from_controller(&controller);
//! assert_eq!(legend.rows()[0].check, CheckState::Unchecked);
//! assert!(legend.rows()[0].dimmed);
//! assert_eq!(legend.rows()[0].expander, Some(false));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod dispatch;
pub mod drawer;
mod format;
mod rows;

pub use config::LegendConfig;
pub use dispatch::{InputContext, LegendInput, Outcome, PointerKind, RowPart};
pub use drawer::DrawerState;
pub use format::{FilterSummary, format_count};
pub use rows::{CheckState, Legend, LegendRow};
