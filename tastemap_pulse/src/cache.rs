// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;

use tastemap_hierarchy::{CategoryTree, DescendantSet};

/// Descendant set memoized by category name.
///
/// Computing a descendant set walks the tree; the pulse needs it for every
/// point on every frame, so it is computed once per hover and reused until the
/// key changes or the cache is invalidated.
#[derive(Clone, Debug, Default)]
pub struct DescendantCache {
    key: Option<String>,
    set: DescendantSet,
}

impl DescendantCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The name the cached set belongs to, if any.
    #[must_use]
    pub fn cached_for(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The cached set, empty when nothing is cached.
    #[must_use]
    pub fn get(&self) -> &DescendantSet {
        &self.set
    }

    /// Returns the set for `name`, recomputing only when the key differs.
    pub fn get_or_compute(&mut self, tree: &CategoryTree, name: &str) -> &DescendantSet {
        if self.key.as_deref() != Some(name) {
            self.set = tree.descendant_names(name);
            self.key = Some(name.to_owned());
        }
        &self.set
    }

    /// Drops the cached set.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.set = DescendantSet::default();
    }
}
