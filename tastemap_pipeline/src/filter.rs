// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tastemap_dataset::Entity;
use tastemap_hierarchy::DescendantSet;
use tastemap_selection::VisibleSet;

/// Indices of the entities whose category is visible.
#[must_use]
pub fn filter_points(entities: &[Entity], visible: &VisibleSet) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| visible.contains(&e.category))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the entities that belong to the glowing branch.
#[must_use]
pub fn filter_glow(entities: &[Entity], branch: &DescendantSet) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| branch.contains(&e.category))
        .map(|(i, _)| i)
        .collect()
}
