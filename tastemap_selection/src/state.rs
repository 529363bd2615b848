// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tastemap_hierarchy::CategoryTree;

use crate::expanded::ExpandedGroups;
use crate::status::TriState;
use crate::visible::VisibleSet;

/// Visible categories and expanded groups, reconciled against a hierarchy.
///
/// The hierarchy is passed into each operation rather than stored, so the
/// state holds category names only.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    visible: VisibleSet,
    expanded: ExpandedGroups,
}

impl SelectionState {
    /// Creates a state with nothing visible and everything collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible category names.
    #[must_use]
    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    /// Mutable access for callers that apply their own policy (the view-mode controller).
    pub fn visible_mut(&mut self) -> &mut VisibleSet {
        &mut self.visible
    }

    /// The expanded legend groups.
    #[must_use]
    pub fn expanded(&self) -> &ExpandedGroups {
        &self.expanded
    }

    /// Mutable access to the expanded legend groups.
    pub fn expanded_mut(&mut self) -> &mut ExpandedGroups {
        &mut self.expanded
    }

    /// Adds (`visible = true`) or removes every name in `name`'s descendant set.
    ///
    /// This is the multi-select behavior; doing it twice is the same as once.
    pub fn toggle_category_and_descendants(
        &mut self,
        tree: &CategoryTree,
        name: &str,
        visible: bool,
    ) {
        let descendants = tree.descendant_names(name);
        if visible {
            self.visible.extend_with(descendants.iter());
        } else {
            self.visible.remove_all(descendants.iter());
        }
    }

    /// Replaces the visible set with exactly `name`'s descendant set.
    pub fn show_only(&mut self, tree: &CategoryTree, name: &str) {
        let descendants = tree.descendant_names(name);
        self.visible.replace_with(descendants.iter());
    }

    /// Unions in the descendant set of every top-level node.
    pub fn select_all(&mut self, tree: &CategoryTree) {
        for root in tree.roots() {
            self.visible.extend_with(root.descendant_names().iter());
        }
    }

    /// Hides everything.
    pub fn select_none(&mut self) {
        self.visible.clear();
    }

    /// Derived all/some/none status of `name`.
    #[must_use]
    pub fn status_of(&self, tree: &CategoryTree, name: &str) -> TriState {
        TriState::of(&tree.descendant_names(name), &self.visible)
    }
}
