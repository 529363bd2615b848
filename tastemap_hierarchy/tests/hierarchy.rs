// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tastemap_hierarchy` crate.
//!
//! These exercise descendant sets and lookup over a small cuisine tree, plus
//! decoding of the document shape produced by the data-preparation step.

use tastemap_hierarchy::{CategoryNode, CategoryTree, DescendantSet};

fn cuisine_tree() -> CategoryTree {
    let asian = CategoryNode::new("Asian", 100, [255, 0, 0])
        .with_child(CategoryNode::new("Chinese", 60, [255, 0, 0]))
        .unwrap()
        .with_child(CategoryNode::new("Japanese", 40, [255, 0, 0]))
        .unwrap();
    let pizza = CategoryNode::new("Pizza", 80, [255, 100, 30]);
    CategoryTree::from_roots([asian, pizza]).unwrap()
}

#[test]
fn descendant_names_of_group_include_every_depth() {
    let tree = cuisine_tree();
    let set = tree.descendant_names("Asian");
    let names: Vec<&str> = set.iter().collect();
    assert_eq!(
        names,
        [
            "Asian",
            "Asian (Unspecified)",
            "Chinese",
            "Chinese (Unspecified)",
            "Japanese",
            "Japanese (Unspecified)",
        ]
    );
}

#[test]
fn descendant_names_of_leaf_is_name_and_unspecified() {
    let tree = cuisine_tree();
    let set = tree.descendant_names("Japanese");
    assert_eq!(set.names(), &["Japanese", "Japanese (Unspecified)"]);
    assert!(!set.contains("Asian"));
}

#[test]
fn lookup_miss_degrades_to_detached_set() {
    let tree = cuisine_tree();
    assert_eq!(
        tree.descendant_names("Ethiopian"),
        DescendantSet::detached("Ethiopian")
    );
}

#[test]
fn every_node_is_reachable_from_some_root() {
    let tree = cuisine_tree();
    for (_, node) in tree.iter() {
        let reachable = tree
            .roots()
            .iter()
            .any(|root| root.descendant_names().contains(node.name()));
        assert!(reachable, "{} not reachable from any root", node.name());
    }
}

#[cfg(feature = "serde")]
mod decode {
    use tastemap_hierarchy::{CategoryTree, Palette};

    const HIERARCHY: &str = r#"{
        "Pizza Shop": {"count": 80, "color": [255, 100, 30]},
        "Asian": {
            "count": 100,
            "color": [255, 50, 130],
            "children": {
                "Japanese": {"count": 40, "color": [255, 50, 150]},
                "Chinese": {
                    "count": 55,
                    "color": [255, 55, 70],
                    "children": {"Sichuan": {"count": 20, "color": [240, 40, 55]}}
                },
                "Asian (Unspecified)": {"count": 5, "color": [255, 50, 130]}
            }
        }
    }"#;

    #[test]
    fn hierarchy_keeps_document_order() {
        let tree: CategoryTree = serde_json::from_str(HIERARCHY).unwrap();
        let roots: Vec<&str> = tree.roots().iter().map(|n| n.name()).collect();
        assert_eq!(roots, ["Pizza Shop", "Asian"]);

        let asian = tree.find_node("Asian").unwrap();
        let children: Vec<&str> = asian.children().iter().map(|n| n.name()).collect();
        assert_eq!(children, ["Japanese", "Chinese", "Asian (Unspecified)"]);
        assert_eq!(tree.find_node("Sichuan").unwrap().rgb(), [240, 40, 55]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn duplicate_sibling_in_document_is_an_error() {
        let doc = r#"{"Bar": {"count": 1, "color": [0, 0, 0],
            "children": {"Pub": {"count": 1, "color": [0, 0, 0]},
                         "Pub": {"count": 1, "color": [0, 0, 0]}}}}"#;
        let err = serde_json::from_str::<CategoryTree>(doc).unwrap_err();
        assert!(err.to_string().contains("Pub"), "{err}");
    }

    #[test]
    fn palette_decodes_flat_object() {
        let palette: Palette =
            serde_json::from_str(r#"{"Thai": [255, 190, 60], "Thai (Unspecified)": [1, 2, 3]}"#)
                .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.rgb_of("Thai (Unspecified)"), [1, 2, 3]);
    }
}
