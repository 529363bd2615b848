// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use tastemap_controller::{Controller, ViewMode};
use tastemap_hierarchy::{CategoryNode, CategoryTree};
use tastemap_selection::{SelectionState, TriState};

use crate::format::format_count;

/// Rendered state of a row checkbox.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckState {
    /// Every descendant is visible.
    Checked,
    /// Some descendants are visible.
    Indeterminate,
    /// Nothing in the branch is visible.
    Unchecked,
}

impl From<TriState> for CheckState {
    fn from(status: TriState) -> Self {
        match status {
            TriState::All => Self::Checked,
            TriState::Some => Self::Indeterminate,
            TriState::None => Self::Unchecked,
        }
    }
}

impl CheckState {
    /// The `visible` flag a click on this checkbox requests.
    ///
    /// Checked rows hide their branch; indeterminate and unchecked rows show it.
    #[must_use]
    pub fn click_target(self) -> bool {
        self != Self::Checked
    }
}

/// One legend row and, nested, the rows of its children.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Category name, also the row label.
    pub name: String,
    /// Nesting depth; top-level rows are `0`.
    pub depth: usize,
    /// Tri-state checkbox.
    pub check: CheckState,
    /// Rendered faded because nothing in the branch is visible.
    pub dimmed: bool,
    /// Swatch color.
    pub swatch: Color,
    /// Entity count of the branch.
    pub count: u64,
    /// Human-formatted [`LegendRow::count`].
    pub count_label: String,
    /// `None` for leaves; otherwise whether the group is expanded.
    pub expander: Option<bool>,
    /// The row is the legend-hovered category.
    pub hovered: bool,
    /// Child rows, by descending count. Only shown when expanded.
    pub children: Vec<Self>,
}

impl LegendRow {
    /// Returns `true` if this row has an expand/collapse arrow.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.expander.is_some()
    }

    /// Returns `true` if the children are shown.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expander == Some(true)
    }
}

/// The legend as a tree of rows: a pure projection of hierarchy, selection,
/// mode and hover.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    mode: ViewMode,
    rows: Vec<LegendRow>,
}

struct Inputs<'a> {
    tree: &'a CategoryTree,
    selection: &'a SelectionState,
    hovered: Option<&'a str>,
}

impl Legend {
    /// Projects the given state into rows.
    ///
    /// In Glow mode the checkboxes read as radio buttons: the glow branch is
    /// checked, its ancestors indeterminate and the rest unchecked.
    #[must_use]
    pub fn build(
        tree: &CategoryTree,
        selection: &SelectionState,
        mode: ViewMode,
        hovered: Option<&str>,
    ) -> Self {
        let inputs = Inputs {
            tree,
            selection,
            hovered,
        };
        let rows = tree
            .top_level_sorted()
            .into_iter()
            .map(|node| build_row(&inputs, node, 0))
            .collect();
        Self { mode, rows }
    }

    /// Projects a controller's current state.
    #[must_use]
    pub fn from_controller(controller: &Controller) -> Self {
        Self::build(
            controller.tree(),
            controller.selection(),
            controller.mode().mode(),
            controller.hover().hovered(),
        )
    }

    /// The mode the legend was built for.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Top-level rows by descending count.
    #[must_use]
    pub fn rows(&self) -> &[LegendRow] {
        &self.rows
    }

    /// Rows as displayed: pre-order, descending into expanded groups only.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&LegendRow> {
        let mut out = Vec::new();
        let mut stack: Vec<&LegendRow> = self.rows.iter().rev().collect();
        while let Some(row) = stack.pop() {
            out.push(row);
            if row.is_expanded() {
                stack.extend(row.children.iter().rev());
            }
        }
        out
    }

    /// Finds a row by name at any depth, expanded or not.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&LegendRow> {
        let mut stack: Vec<&LegendRow> = self.rows.iter().rev().collect();
        while let Some(row) = stack.pop() {
            if row.name == name {
                return Some(row);
            }
            stack.extend(row.children.iter().rev());
        }
        None
    }
}

fn build_row(inputs: &Inputs<'_>, node: &CategoryNode, depth: usize) -> LegendRow {
    let status = inputs.selection.status_of(inputs.tree, node.name());
    let expander = (!node.is_leaf()).then(|| inputs.selection.expanded().is_expanded(node.name()));
    let children = node
        .sorted_children()
        .into_iter()
        .map(|child| build_row(inputs, child, depth + 1))
        .collect();
    LegendRow {
        name: String::from(node.name()),
        depth,
        check: status.into(),
        dimmed: status.is_none(),
        swatch: node.color(),
        count: node.count(),
        count_label: format_count(node.count()),
        expander,
        hovered: inputs.hovered == Some(node.name()),
        children,
    }
}
