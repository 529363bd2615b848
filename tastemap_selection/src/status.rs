// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tastemap_hierarchy::DescendantSet;

use crate::visible::VisibleSet;

/// Derived visibility of a hierarchy node.
///
/// Drives the legend checkbox: checked for [`TriState::All`], indeterminate for
/// [`TriState::Some`], unchecked and dimmed for [`TriState::None`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriState {
    /// Every name of the descendant set is visible.
    All,
    /// At least one, but not every, name is visible.
    Some,
    /// No name of the descendant set is visible.
    None,
}

impl TriState {
    /// Computes the status of `descendants` against `visible`.
    #[must_use]
    pub fn of(descendants: &DescendantSet, visible: &VisibleSet) -> Self {
        let present = descendants.iter().filter(|n| visible.contains(n)).count();
        if present == 0 {
            Self::None
        } else if present == descendants.len() {
            Self::All
        } else {
            Self::Some
        }
    }

    /// Returns `true` for [`TriState::All`].
    #[must_use]
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` for [`TriState::None`].
    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
