// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::descendants::DescendantSet;
use crate::node::{CategoryNode, HierarchyError, sort_by_count};

/// A node whose count is smaller than the sum of its children's counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountIssue {
    /// Name of the offending node.
    pub name: String,
    /// The node's own count.
    pub count: u64,
    /// Sum of the direct children's counts.
    pub children_total: u64,
}

/// The full category hierarchy: an ordered forest of top-level [`CategoryNode`]s.
///
/// The tree is built once (by hand or by decoding the startup document) and is
/// treated as immutable afterwards. All queries take names, so callers never
/// hold references into the tree across interactions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTree {
    roots: Vec<CategoryNode>,
}

impl CategoryTree {
    /// Creates an empty hierarchy.
    #[must_use]
    pub const fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Builds a hierarchy from top-level nodes, rejecting duplicate top-level names.
    pub fn from_roots<I>(roots: I) -> Result<Self, HierarchyError>
    where
        I: IntoIterator<Item = CategoryNode>,
    {
        let mut tree = Self::new();
        for root in roots {
            tree.push_root(root)?;
        }
        Ok(tree)
    }

    /// Appends a top-level node.
    pub fn push_root(&mut self, root: CategoryNode) -> Result<(), HierarchyError> {
        if self.roots.iter().any(|r| r.name() == root.name()) {
            return Err(HierarchyError::DuplicateSibling {
                parent: None,
                name: String::from(root.name()),
            });
        }
        self.roots.push(root);
        Ok(())
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    /// Returns `true` if there are no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, pre-order iterator over `(depth, node)` pairs.
    ///
    /// Top-level nodes have depth `0`.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.roots.iter().rev().map(|n| (0, n)).collect(),
        }
    }

    /// Finds the first node called `name` in depth-first order.
    ///
    /// If the same name occurs in several branches the first match wins; see
    /// [`CategoryTree::duplicate_names`].
    #[must_use]
    pub fn find_node(&self, name: &str) -> Option<&CategoryNode> {
        self.iter().map(|(_, n)| n).find(|n| n.name() == name)
    }

    /// The descendant set of `name`.
    ///
    /// A name with no node in the tree yields just itself and its unspecified
    /// variant, so filtering degrades to exact matching instead of failing.
    #[must_use]
    pub fn descendant_names(&self, name: &str) -> DescendantSet {
        match self.find_node(name) {
            Some(node) => node.descendant_names(),
            None => DescendantSet::detached(name),
        }
    }

    /// Top-level nodes ordered for display: descending count, ties stable.
    #[must_use]
    pub fn top_level_sorted(&self) -> Vec<&CategoryNode> {
        sort_by_count(&self.roots)
    }

    /// Children of `name` ordered for display, or an empty list for leaves and misses.
    #[must_use]
    pub fn sorted_children(&self, name: &str) -> Vec<&CategoryNode> {
        self.find_node(name)
            .map(CategoryNode::sorted_children)
            .unwrap_or_default()
    }

    /// The top-level node with the highest count; the first one wins a tie.
    #[must_use]
    pub fn largest_top_level(&self) -> Option<&CategoryNode> {
        self.top_level_sorted().first().copied()
    }

    /// Names that occur more than once anywhere in the tree, in first-seen order.
    ///
    /// Lookup by name is only well defined when this is empty.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut reported: HashSet<&str> = HashSet::new();
        let mut duplicates = Vec::new();
        for (_, node) in self.iter() {
            let name = node.name();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    /// Nodes whose count is smaller than the sum of their children's counts.
    #[must_use]
    pub fn count_issues(&self) -> Vec<CountIssue> {
        self.iter()
            .filter_map(|(_, node)| {
                let children_total: u64 = node.children().iter().map(CategoryNode::count).sum();
                (children_total > node.count()).then(|| CountIssue {
                    name: String::from(node.name()),
                    count: node.count(),
                    children_total,
                })
            })
            .collect()
    }
}

/// Iterator returned by [`CategoryTree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<(usize, &'a CategoryNode)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a CategoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
