// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Points/Glow state machine.

use alloc::borrow::ToOwned;
use alloc::string::String;

use tastemap_hierarchy::{CategoryNode, CategoryTree};
use tastemap_selection::{SelectionState, VisibleSnapshot};

/// How the filtered entities are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// One colored point per entity; any number of categories visible.
    #[default]
    Points,
    /// One density field for a single category branch.
    Glow,
}

/// View mode plus the state only one of the modes needs.
///
/// While in [`ViewMode::Glow`], `saved` holds the Points-mode visible set so
/// it can be restored exactly on the way back.
#[derive(Clone, Debug, Default)]
pub struct ModeState {
    mode: ViewMode,
    glow_category: Option<String>,
    saved: Option<VisibleSnapshot>,
}

impl ModeState {
    /// Starts in Points mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Returns `true` in Glow mode.
    #[must_use]
    pub fn is_glow(&self) -> bool {
        self.mode == ViewMode::Glow
    }

    /// The category whose branch glows, if any.
    #[must_use]
    pub fn glow_category(&self) -> Option<&str> {
        self.glow_category.as_deref()
    }

    /// The Points-mode selection captured on entering Glow.
    #[must_use]
    pub fn saved(&self) -> Option<&VisibleSnapshot> {
        self.saved.as_ref()
    }

    /// Points → Glow. Returns `false` if already in Glow.
    ///
    /// Snapshots the visible set, then radio-selects the top-level category with
    /// the highest count. An empty hierarchy leaves nothing selected.
    pub fn enter_glow(&mut self, tree: &CategoryTree, selection: &mut SelectionState) -> bool {
        if self.is_glow() {
            return false;
        }
        self.saved = Some(selection.visible().snapshot());
        self.mode = ViewMode::Glow;
        self.select_largest(tree, selection);
        true
    }

    /// Glow → Points. Returns `false` if already in Points.
    ///
    /// Restores the snapshot taken by [`ModeState::enter_glow`] and empties the slot.
    pub fn enter_points(&mut self, selection: &mut SelectionState) -> bool {
        if !self.is_glow() {
            return false;
        }
        if let Some(saved) = self.saved.take() {
            selection.visible_mut().restore(saved);
        }
        self.glow_category = None;
        self.mode = ViewMode::Points;
        true
    }

    /// Radio-selects `name` in Glow mode: the visible set becomes exactly its
    /// descendant set.
    pub fn select_glow(&mut self, tree: &CategoryTree, selection: &mut SelectionState, name: &str) {
        selection.show_only(tree, name);
        self.glow_category = Some(name.to_owned());
    }

    /// Radio-selects the largest top-level category, or nothing for an empty tree.
    pub fn select_largest(&mut self, tree: &CategoryTree, selection: &mut SelectionState) {
        match tree.largest_top_level().map(CategoryNode::name) {
            Some(name) => self.select_glow(tree, selection, name),
            None => self.clear_glow(selection),
        }
    }

    /// Clears the glow selection; nothing glows.
    pub fn clear_glow(&mut self, selection: &mut SelectionState) {
        selection.select_none();
        self.glow_category = None;
    }
}
