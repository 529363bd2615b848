// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Hierarchy: the category tree behind the map legend.
//!
//! This crate models the cuisine hierarchy that the data-preparation step emits
//! next to the restaurant points. The tree is loaded once and is read-only
//! afterwards; everything interactive (selection, view modes, hover) lives in
//! other crates and refers to nodes **by name** only.
//!
//! The core types are:
//! - [`CategoryNode`]: a named group or leaf carrying a display color, a
//!   precomputed entity count, and an ordered list of children.
//! - [`CategoryTree`]: the forest of top-level nodes plus the named traversal
//!   operations the rest of the workspace relies on.
//! - [`DescendantSet`]: the ordered, de-duplicated result of
//!   [`CategoryTree::descendant_names`], with constant-time membership.
//! - [`Palette`]: the flat category name → color lookup used to tint points.
//!
//! ## Descendant sets
//!
//! Restaurants can be categorized at *any* depth, and the preparation step
//! renames group-level entries to a synthetic `"<Name> (Unspecified)"` variant.
//! The unit of "what does toggling this node affect" is therefore not the set of
//! leaves but the descendant set: the node's name, its unspecified variant, and
//! recursively the same for every child.
//!
//! ```rust
//! use tastemap_hierarchy::{CategoryNode, CategoryTree};
//!
//! let asian = CategoryNode::new("Asian", 100, [255, 0, 0])
//!     .with_child(CategoryNode::new("Chinese", 60, [255, 0, 0]))
//!     .unwrap()
//!     .with_child(CategoryNode::new("Japanese", 40, [255, 0, 0]))
//!     .unwrap();
//! let tree = CategoryTree::from_roots([asian]).unwrap();
//!
//! let names = tree.descendant_names("Asian");
//! assert_eq!(
//!     names.names(),
//!     &[
//!         "Asian",
//!         "Asian (Unspecified)",
//!         "Chinese",
//!         "Chinese (Unspecified)",
//!         "Japanese",
//!         "Japanese (Unspecified)",
//!     ]
//! );
//! assert!(names.contains("Japanese (Unspecified)"));
//! ```
//!
//! ## Lookup misses and name collisions
//!
//! [`CategoryTree::find_node`] is a depth-first search that returns the first
//! exact match. A name that is not in the tree is not an error: its descendant
//! set is just the name and its unspecified variant. Names are expected to be
//! unique across the whole tree; [`CategoryTree::duplicate_names`] reports the
//! ones that are not so loaders can flag them.
//!
//! ## Features
//!
//! - `serde`: implements `Deserialize` for [`CategoryTree`] (from the nested
//!   `name → {count, color, children?}` object, preserving document order) and
//!   for [`Palette`] (from a `name → [r, g, b]` object).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod descendants;
mod node;
mod palette;
#[cfg(feature = "serde")]
mod serde_impl;
mod tree;

pub use descendants::{DescendantSet, UNSPECIFIED_SUFFIX, unspecified_name};
pub use node::{CategoryNode, HierarchyError};
pub use palette::{DEFAULT_RGB, Palette};
pub use tree::{CategoryTree, CountIssue, Iter};
