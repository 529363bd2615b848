// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use tastemap_hierarchy::CategoryTree;
use tastemap_pulse::HoverPulse;
use tastemap_selection::{SelectionState, TriState};

use crate::event::{Event, PulseCommand, Reaction};
use crate::mode::{ModeState, ViewMode};

/// Every piece of interactive state, in one place.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Visible categories and expanded groups.
    pub selection: SelectionState,
    /// Points/Glow state machine.
    pub mode: ModeState,
    /// Legend hover and its pulse bookkeeping.
    pub hover: HoverPulse,
}

/// Owns the [`AppState`] and mutates it only through named transitions.
///
/// Each transition returns a [`Reaction`] telling the host what to refresh.
/// The hierarchy is shared and never mutated.
#[derive(Clone, Debug)]
pub struct Controller {
    tree: Arc<CategoryTree>,
    state: AppState,
}

impl Controller {
    /// Points mode, every category visible, every group collapsed, no hover.
    #[must_use]
    pub fn new(tree: Arc<CategoryTree>) -> Self {
        let mut state = AppState::default();
        state.selection.select_all(&tree);
        Self { tree, state }
    }

    /// The hierarchy.
    #[must_use]
    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// A shared handle to the hierarchy.
    #[must_use]
    pub fn shared_tree(&self) -> Arc<CategoryTree> {
        Arc::clone(&self.tree)
    }

    /// Read access to the whole state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Visible categories and expanded groups.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    /// The mode state machine.
    #[must_use]
    pub fn mode(&self) -> &ModeState {
        &self.state.mode
    }

    /// The legend hover.
    #[must_use]
    pub fn hover(&self) -> &HoverPulse {
        &self.state.hover
    }

    /// Derived tri-state status of `name`.
    #[must_use]
    pub fn status_of(&self, name: &str) -> TriState {
        self.state.selection.status_of(&self.tree, name)
    }

    /// Applies one event.
    pub fn handle(&mut self, event: Event) -> Reaction {
        match event {
            Event::CheckboxToggled { name, visible } => self.toggle_checkbox(&name, visible),
            Event::RowExpanded { name } => self.toggle_expanded(&name),
            Event::RowHovered { name, now_ms } => self.hover_enter(&name, now_ms),
            Event::RowUnhovered { name } => self.hover_leave(&name),
            Event::ModeChanged(mode) => self.set_mode(mode),
            Event::SelectAll => self.select_all(),
            Event::SelectNone => self.select_none(),
            Event::ExpandAll => self.expand_all(),
            Event::CollapseAll => self.collapse_all(),
        }
    }

    /// Checkbox click. Multi-select in Points; radio select in Glow, where
    /// `visible` is ignored.
    pub fn toggle_checkbox(&mut self, name: &str, visible: bool) -> Reaction {
        let AppState {
            selection, mode, ..
        } = &mut self.state;
        match mode.mode() {
            ViewMode::Points => {
                selection.toggle_category_and_descendants(&self.tree, name, visible);
            }
            ViewMode::Glow => mode.select_glow(&self.tree, selection, name),
        }
        Reaction::REFRESH
    }

    /// Row-body click. Only rows with children expand; other clicks do nothing.
    pub fn toggle_expanded(&mut self, name: &str) -> Reaction {
        let has_children = self.tree.find_node(name).is_some_and(|n| !n.is_leaf());
        if !has_children {
            return Reaction::NONE;
        }
        self.state.selection.expanded_mut().toggle(name);
        Reaction::LEGEND
    }

    /// Expands every group with children.
    pub fn expand_all(&mut self) -> Reaction {
        self.state.selection.expanded_mut().expand_all(&self.tree);
        Reaction::LEGEND
    }

    /// Collapses every group.
    pub fn collapse_all(&mut self) -> Reaction {
        self.state.selection.expanded_mut().collapse_all();
        Reaction::LEGEND
    }

    /// Pointer entered a legend row. Ignored in Glow mode.
    pub fn hover_enter(&mut self, name: &str, now_ms: f64) -> Reaction {
        if self.state.mode.is_glow() {
            return Reaction::NONE;
        }
        self.state.hover.enter(&self.tree, name, now_ms);
        Reaction::REFRESH.with_pulse(PulseCommand::Start)
    }

    /// Pointer left a legend row. Only the hovered row's leave clears the hover;
    /// clearing stops the pulse and asks for one final render.
    pub fn hover_leave(&mut self, name: &str) -> Reaction {
        if self.state.hover.leave(name) {
            Reaction::REFRESH.with_pulse(PulseCommand::Stop)
        } else {
            Reaction::NONE
        }
    }

    /// Points/Glow toggle. Switching to the current mode is a no-op.
    pub fn set_mode(&mut self, target: ViewMode) -> Reaction {
        let AppState {
            selection,
            mode,
            hover,
        } = &mut self.state;
        match target {
            ViewMode::Glow => {
                if !mode.enter_glow(&self.tree, selection) {
                    return Reaction::NONE;
                }
                hover.clear();
                Reaction::REFRESH.with_pulse(PulseCommand::Stop)
            }
            ViewMode::Points => {
                if mode.enter_points(selection) {
                    Reaction::REFRESH
                } else {
                    Reaction::NONE
                }
            }
        }
    }

    /// Select All. In Glow this re-selects the largest top-level category.
    pub fn select_all(&mut self) -> Reaction {
        let AppState {
            selection, mode, ..
        } = &mut self.state;
        match mode.mode() {
            ViewMode::Points => selection.select_all(&self.tree),
            ViewMode::Glow => mode.select_largest(&self.tree, selection),
        }
        Reaction::REFRESH
    }

    /// Select None. In Glow this also clears the glow category.
    pub fn select_none(&mut self) -> Reaction {
        let AppState {
            selection, mode, ..
        } = &mut self.state;
        match mode.mode() {
            ViewMode::Points => selection.select_none(),
            ViewMode::Glow => mode.clear_glow(selection),
        }
        Reaction::REFRESH
    }
}
