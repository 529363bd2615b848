// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction sequences driven through [`Controller::handle`].

use std::sync::Arc;

use tastemap_controller::{Controller, Event, PulseCommand, Reaction, ViewMode};
use tastemap_hierarchy::{CategoryNode, CategoryTree};
use tastemap_selection::TriState;

fn tree() -> Arc<CategoryTree> {
    let asian = CategoryNode::new("Asian", 100, [255, 50, 130])
        .with_child(CategoryNode::new("Chinese", 60, [255, 55, 70]))
        .unwrap()
        .with_child(CategoryNode::new("Japanese", 40, [255, 50, 150]))
        .unwrap();
    let pizza = CategoryNode::new("Pizza Shop", 80, [255, 100, 30]);
    let cafe = CategoryNode::new("Cafe", 20, [255, 140, 105]);
    Arc::new(CategoryTree::from_roots([pizza, asian, cafe]).unwrap())
}

fn checkbox(name: &str, visible: bool) -> Event {
    Event::CheckboxToggled {
        name: name.into(),
        visible,
    }
}

#[test]
fn starts_in_points_with_everything_visible() {
    let c = Controller::new(tree());
    assert_eq!(c.mode().mode(), ViewMode::Points);
    for (_, node) in c.tree().iter() {
        assert_eq!(c.status_of(node.name()), TriState::All, "{}", node.name());
    }
    assert!(c.selection().expanded().is_empty());
    assert!(!c.hover().is_active());
}

#[test]
fn points_glow_points_restores_selection_exactly() {
    let mut c = Controller::new(tree());
    c.handle(checkbox("Chinese", false));
    c.handle(checkbox("Cafe", false));
    let before = c.selection().visible().snapshot();

    c.handle(Event::ModeChanged(ViewMode::Glow));
    assert_ne!(c.selection().visible().snapshot(), before);
    c.handle(Event::ModeChanged(ViewMode::Points));

    assert_eq!(c.selection().visible().snapshot(), before);
    assert_eq!(c.mode().glow_category(), None);
}

#[test]
fn glow_picks_largest_top_level() {
    let mut c = Controller::new(tree());
    c.handle(Event::ModeChanged(ViewMode::Glow));
    assert_eq!(c.mode().glow_category(), Some("Asian"));
    let expected = c.tree().descendant_names("Asian");
    assert_eq!(c.selection().visible().len(), expected.len());
    assert!(expected.iter().all(|n| c.selection().visible().contains(n)));
}

#[test]
fn glow_checkboxes_are_radio_buttons() {
    let mut c = Controller::new(tree());
    c.handle(Event::ModeChanged(ViewMode::Glow));

    for (name, visible) in [("Pizza Shop", true), ("Japanese", false), ("Cafe", true)] {
        c.handle(checkbox(name, visible));
        let glow = c.mode().glow_category().unwrap();
        assert_eq!(glow, name);
        let expected = c.tree().descendant_names(glow);
        assert_eq!(c.selection().visible().len(), expected.len(), "{name}");
        assert!(expected.iter().all(|n| c.selection().visible().contains(n)));
    }
}

#[test]
fn mode_switch_to_current_mode_is_a_no_op() {
    let mut c = Controller::new(tree());
    assert!(c.handle(Event::ModeChanged(ViewMode::Points)).is_none());
    c.handle(Event::ModeChanged(ViewMode::Glow));
    let revision = c.selection().visible().revision();
    assert!(c.handle(Event::ModeChanged(ViewMode::Glow)).is_none());
    assert_eq!(c.selection().visible().revision(), revision);
}

#[test]
fn select_none_then_all_in_glow() {
    let mut c = Controller::new(tree());
    c.handle(Event::ModeChanged(ViewMode::Glow));
    c.handle(checkbox("Cafe", true));

    c.handle(Event::SelectNone);
    assert!(c.selection().visible().is_empty());
    assert_eq!(c.mode().glow_category(), None);

    c.handle(Event::SelectAll);
    assert_eq!(c.mode().glow_category(), Some("Asian"));
    assert_eq!(c.status_of("Pizza Shop"), TriState::None);
}

#[test]
fn hover_is_ignored_in_glow_and_cleared_on_entering_it() {
    let mut c = Controller::new(tree());
    let r = c.handle(Event::RowHovered {
        name: "Asian".into(),
        now_ms: 10.0,
    });
    assert_eq!(r.pulse, PulseCommand::Start);
    assert_eq!(c.hover().hovered(), Some("Asian"));

    let r = c.handle(Event::ModeChanged(ViewMode::Glow));
    assert_eq!(r.pulse, PulseCommand::Stop);
    assert!(!c.hover().is_active());

    let r = c.handle(Event::RowHovered {
        name: "Cafe".into(),
        now_ms: 20.0,
    });
    assert_eq!(r, Reaction::NONE);
    assert!(!c.hover().is_active());
}

#[test]
fn stale_unhover_keeps_current_hover() {
    let mut c = Controller::new(tree());
    c.handle(Event::RowHovered {
        name: "Asian".into(),
        now_ms: 0.0,
    });
    c.handle(Event::RowHovered {
        name: "Cafe".into(),
        now_ms: 5.0,
    });
    assert!(c.handle(Event::RowUnhovered { name: "Asian".into() }).is_none());
    assert_eq!(c.hover().hovered(), Some("Cafe"));

    let r = c.handle(Event::RowUnhovered { name: "Cafe".into() });
    assert_eq!(r.pulse, PulseCommand::Stop);
    assert!(r.render, "leaving forces a final render");
}

#[test]
fn expansion_only_applies_to_groups() {
    let mut c = Controller::new(tree());
    assert!(c.handle(Event::RowExpanded { name: "Cafe".into() }).is_none());
    assert!(c.selection().expanded().is_empty());

    let r = c.handle(Event::RowExpanded { name: "Asian".into() });
    assert_eq!(r, Reaction::LEGEND);
    assert!(c.selection().expanded().is_expanded("Asian"));

    c.handle(Event::RowExpanded { name: "Asian".into() });
    assert!(!c.selection().expanded().is_expanded("Asian"));

    c.handle(Event::ExpandAll);
    assert_eq!(c.selection().expanded().len(), 1);
    c.handle(Event::CollapseAll);
    assert!(c.selection().expanded().is_empty());
}

#[test]
fn unchecking_a_group_clears_its_branch() {
    let mut c = Controller::new(tree());
    c.handle(checkbox("Asian", false));
    for name in [
        "Asian",
        "Asian (Unspecified)",
        "Chinese",
        "Chinese (Unspecified)",
        "Japanese",
        "Japanese (Unspecified)",
    ] {
        assert!(!c.selection().visible().contains(name), "{name}");
    }
    assert_eq!(c.status_of("Asian"), TriState::None);
    assert_eq!(c.status_of("Pizza Shop"), TriState::All);
}
