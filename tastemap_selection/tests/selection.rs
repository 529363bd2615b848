// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tastemap_selection` crate.
//!
//! These exercise how the flat visible set, the derived tri-state status and
//! the revision counter interact over a three-level cuisine tree.

use tastemap_hierarchy::{CategoryNode, CategoryTree};
use tastemap_selection::{ExpandedGroups, SelectionState, TriState};

fn tree() -> CategoryTree {
    let asian = CategoryNode::new("Asian", 100, [255, 0, 0])
        .with_child(
            CategoryNode::new("Chinese", 60, [255, 0, 0])
                .with_child(CategoryNode::new("Cantonese", 25, [255, 85, 95]))
                .unwrap(),
        )
        .unwrap()
        .with_child(CategoryNode::new("Japanese", 40, [255, 0, 0]))
        .unwrap();
    let pizza = CategoryNode::new("Pizza", 80, [255, 100, 30]);
    let bar = CategoryNode::new("Bar", 20, [140, 180, 255])
        .with_child(CategoryNode::new("Pub", 12, [130, 170, 255]))
        .unwrap();
    CategoryTree::from_roots([asian, pizza, bar]).unwrap()
}

fn all_names(tree: &CategoryTree) -> Vec<String> {
    tree.iter().map(|(_, n)| n.name().to_owned()).collect()
}

#[test]
fn status_matches_definition_for_every_node() {
    let tree = tree();
    let mut sel = SelectionState::new();
    sel.select_all(&tree);
    sel.toggle_category_and_descendants(&tree, "Cantonese", false);
    sel.visible_mut().remove_all(["Pub (Unspecified)"]);

    for name in all_names(&tree) {
        let descendants = tree.descendant_names(&name);
        let present = descendants
            .iter()
            .filter(|n| sel.visible().contains(n))
            .count();
        let expected = if present == descendants.len() {
            TriState::All
        } else if present == 0 {
            TriState::None
        } else {
            TriState::Some
        };
        assert_eq!(sel.status_of(&tree, &name), expected, "status of {name}");
    }
}

#[test]
fn select_all_marks_every_node_all() {
    let tree = tree();
    let mut sel = SelectionState::new();
    sel.select_all(&tree);
    for name in all_names(&tree) {
        assert_eq!(sel.status_of(&tree, &name), TriState::All, "{name}");
    }
}

#[test]
fn select_none_marks_every_node_none() {
    let tree = tree();
    let mut sel = SelectionState::new();
    sel.select_all(&tree);
    sel.select_none();
    assert!(sel.visible().is_empty());
    for name in all_names(&tree) {
        assert_eq!(sel.status_of(&tree, &name), TriState::None, "{name}");
    }
}

#[test]
fn toggling_visible_twice_equals_once() {
    let tree = tree();
    let mut once = SelectionState::new();
    once.toggle_category_and_descendants(&tree, "Chinese", true);

    let mut twice = SelectionState::new();
    twice.toggle_category_and_descendants(&tree, "Chinese", true);
    let rev = twice.visible().revision();
    twice.toggle_category_and_descendants(&tree, "Chinese", true);

    assert_eq!(once.visible().snapshot(), twice.visible().snapshot());
    assert_eq!(twice.visible().revision(), rev, "second toggle is a no-op");
}

#[test]
fn unchecking_group_removes_whole_descendant_set() {
    let asian = CategoryNode::new("Asian", 100, [255, 0, 0])
        .with_child(CategoryNode::new("Chinese", 60, [255, 0, 0]))
        .unwrap()
        .with_child(CategoryNode::new("Japanese", 40, [255, 0, 0]))
        .unwrap();
    let tree = CategoryTree::from_roots([asian]).unwrap();
    let mut sel = SelectionState::new();
    sel.select_all(&tree);
    sel.visible_mut().extend_with(["Somewhere Else"]);

    sel.toggle_category_and_descendants(&tree, "Asian", false);

    for name in [
        "Asian",
        "Asian (Unspecified)",
        "Chinese",
        "Chinese (Unspecified)",
        "Japanese",
        "Japanese (Unspecified)",
    ] {
        assert!(!sel.visible().contains(name), "{name} still visible");
    }
    assert_eq!(sel.visible().sorted(), ["Somewhere Else"]);
    assert_eq!(sel.status_of(&tree, "Asian"), TriState::None);
}

#[test]
fn category_only_in_entities_can_be_toggled() {
    let tree = tree();
    let mut sel = SelectionState::new();
    sel.toggle_category_and_descendants(&tree, "Food Truck", true);
    assert_eq!(
        sel.visible().sorted(),
        ["Food Truck", "Food Truck (Unspecified)"]
    );
    assert_eq!(sel.status_of(&tree, "Food Truck"), TriState::All);
}

#[test]
fn show_only_replaces_previous_contents() {
    let tree = tree();
    let mut sel = SelectionState::new();
    sel.select_all(&tree);
    sel.show_only(&tree, "Bar");
    assert_eq!(
        sel.visible().sorted(),
        ["Bar", "Bar (Unspecified)", "Pub", "Pub (Unspecified)"]
    );
}

#[test]
fn expanded_groups_toggle_and_expand_all() {
    let tree = tree();
    let mut expanded = ExpandedGroups::new();
    assert!(expanded.toggle("Asian"));
    assert!(expanded.is_expanded("Asian"));
    assert!(!expanded.toggle("Asian"));
    assert!(expanded.is_empty());

    expanded.expand_all(&tree);
    assert_eq!(expanded.len(), 3, "Asian, Chinese and Bar have children");
    assert!(!expanded.is_expanded("Pizza"));
    expanded.collapse_all();
    assert!(expanded.is_empty());
}
