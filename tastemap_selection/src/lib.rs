// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Selection: which categories are visible, which groups are expanded.
//!
//! This crate focuses on the _bookkeeping_ of the legend: the flat set of visible
//! category names plus the set of expanded group names. It does **not** know
//! about view modes, rendering or hover; the controller decides how a user
//! gesture maps onto these sets.
//!
//! The core types are:
//! - [`VisibleSet`]: visible category names at any depth of the hierarchy, with a
//!   monotonically increasing **revision** bumped only when contents change.
//! - [`ExpandedGroups`]: legend groups currently expanded.
//! - [`SelectionState`]: both sets plus the hierarchy-aware operations
//!   (show/hide a node's descendant set, select all/none, tri-state status).
//! - [`TriState`]: the derived all/some/none status of a node.
//!
//! Tri-state status is never stored. [`SelectionState::status_of`] recomputes it
//! from the node's descendant set every time, so it cannot drift from the
//! visible set.
//!
//! ## Minimal example
//!
//! ```rust
//! use tastemap_hierarchy::{CategoryNode, CategoryTree};
//! use tastemap_selection::{SelectionState, TriState};
//!
//! let asian = CategoryNode::new("Asian", 100, [255, 0, 0])
//!     .with_child(CategoryNode::new("Chinese", 60, [255, 0, 0]))
//!     .unwrap()
//!     .with_child(CategoryNode::new("Japanese", 40, [255, 0, 0]))
//!     .unwrap();
//! let tree = CategoryTree::from_roots([asian]).unwrap();
//!
//! let mut selection = SelectionState::new();
//! selection.select_all(&tree);
//! assert_eq!(selection.status_of(&tree, "Asian"), TriState::All);
//!
//! // Unchecking a leaf leaves its parent partially visible.
//! selection.toggle_category_and_descendants(&tree, "Chinese", false);
//! assert_eq!(selection.status_of(&tree, "Asian"), TriState::Some);
//! assert_eq!(selection.status_of(&tree, "Chinese"), TriState::None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expanded;
mod state;
mod status;
mod visible;

pub use expanded::ExpandedGroups;
pub use state::SelectionState;
pub use status::TriState;
pub use visible::{VisibleSet, VisibleSnapshot};
