// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashSet;
use tastemap_hierarchy::CategoryTree;

/// Legend groups currently expanded. Everything starts collapsed.
#[derive(Clone, Debug, Default)]
pub struct ExpandedGroups {
    names: HashSet<String>,
}

impl ExpandedGroups {
    /// Creates an empty (all collapsed) set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` is expanded.
    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Flips `name` and returns its new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(String::from(name));
            true
        }
    }

    /// Expands every node of `tree` that has children.
    pub fn expand_all(&mut self, tree: &CategoryTree) {
        for (_, node) in tree.iter() {
            if !node.is_leaf() {
                self.names.insert(String::from(node.name()));
            }
        }
    }

    /// Collapses everything.
    pub fn collapse_all(&mut self) {
        self.names.clear();
    }

    /// Number of expanded groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if every group is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
