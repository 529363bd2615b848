// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tastemap_dataset::Entity;

/// The surface reports the pointer over a drawn point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointHover {
    /// Index of the entity in the full entity list.
    pub index: usize,
    /// Pointer position in screen coordinates.
    pub screen: Point,
}

/// Tooltip contents for a hovered point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Restaurant name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Street address.
    pub address: String,
    /// Borough.
    pub boro: String,
    /// Where to place the tooltip.
    pub anchor: Point,
}

impl Tooltip {
    /// Builds the tooltip for `hover`, or `None` for an out-of-range index.
    #[must_use]
    pub fn for_hover(entities: &[Entity], hover: PointHover) -> Option<Self> {
        let entity = entities.get(hover.index)?;
        Some(Self {
            name: entity.name.clone(),
            category: entity.category.clone(),
            address: entity.address.clone(),
            boro: entity.boro.clone(),
            anchor: hover.screen,
        })
    }
}
