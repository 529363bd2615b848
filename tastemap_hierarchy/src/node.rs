// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt;

use peniko::Color;

use crate::descendants::DescendantSet;

/// Error returned when building a hierarchy that would break the tree shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HierarchyError {
    /// A sibling with the same name already exists under `parent`.
    ///
    /// `parent` is `None` for top-level nodes.
    DuplicateSibling {
        /// Name of the parent node, if any.
        parent: Option<String>,
        /// The colliding child name.
        name: String,
    },
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSibling {
                parent: Some(parent),
                name,
            } => write!(f, "category {name:?} appears twice under {parent:?}"),
            Self::DuplicateSibling { parent: None, name } => {
                write!(f, "top-level category {name:?} appears twice")
            }
        }
    }
}

impl core::error::Error for HierarchyError {}

/// One node of the category hierarchy: a group when it has children, a leaf otherwise.
///
/// Children keep the order they were inserted in (document order when decoded).
/// Display order is a separate concern, see [`CategoryNode::sorted_children`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    name: String,
    count: u64,
    rgb: [u8; 3],
    children: Vec<Self>,
}

impl CategoryNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(name: impl Into<String>, count: u64, rgb: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            count,
            rgb,
            children: Vec::new(),
        }
    }

    /// Appends `child`, rejecting a name that already exists among the children.
    pub fn push_child(&mut self, child: Self) -> Result<(), HierarchyError> {
        if self.child(&child.name).is_some() {
            return Err(HierarchyError::DuplicateSibling {
                parent: Some(self.name.clone()),
                name: child.name,
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// Builder form of [`CategoryNode::push_child`].
    pub fn with_child(mut self, child: Self) -> Result<Self, HierarchyError> {
        self.push_child(child)?;
        Ok(self)
    }

    /// The category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entities categorized at this node or below.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The raw `[r, g, b]` triple.
    #[must_use]
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// The opaque display color used for the swatch and for point/density fill.
    #[must_use]
    pub fn color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::from_rgb8(r, g, b)
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the direct child called `name`, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children ordered for display: descending count, ties keep insertion order.
    #[must_use]
    pub fn sorted_children(&self) -> Vec<&Self> {
        sort_by_count(&self.children)
    }

    /// The descendant set rooted at this node.
    ///
    /// See [`CategoryTree::descendant_names`](crate::CategoryTree::descendant_names)
    /// for the name-based entry point.
    #[must_use]
    pub fn descendant_names(&self) -> DescendantSet {
        DescendantSet::of_node(self)
    }
}

/// Stable sort by descending count.
pub(crate) fn sort_by_count(nodes: &[CategoryNode]) -> Vec<&CategoryNode> {
    let mut sorted: Vec<&CategoryNode> = nodes.iter().collect();
    sorted.sort_by_key(|n| Reverse(n.count));
    sorted
}
