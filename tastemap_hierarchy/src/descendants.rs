// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::node::CategoryNode;

/// Suffix of the synthetic category given to entities tagged with a group name.
pub const UNSPECIFIED_SUFFIX: &str = " (Unspecified)";

/// Returns the `"<name> (Unspecified)"` variant of `name`.
#[must_use]
pub fn unspecified_name(name: &str) -> String {
    format!("{name}{UNSPECIFIED_SUFFIX}")
}

/// Ordered, de-duplicated set of category names matched by one hierarchy node.
///
/// The order is `[name, "<name> (Unspecified)", ...]` followed by each child's set
/// in insertion order. The preparation step sometimes emits an explicit
/// `"<name> (Unspecified)"` child; the repeated name is kept once, at its first
/// position.
#[derive(Clone, Debug, Default)]
pub struct DescendantSet {
    names: Vec<String>,
    index: HashSet<String>,
}

impl DescendantSet {
    /// Descendant set of a name that has no node in the tree.
    #[must_use]
    pub fn detached(name: &str) -> Self {
        let mut set = Self::default();
        set.push(name);
        set.push(&unspecified_name(name));
        set
    }

    pub(crate) fn of_node(node: &CategoryNode) -> Self {
        let mut set = Self::default();
        let mut stack: Vec<&CategoryNode> = Vec::from([node]);
        while let Some(current) = stack.pop() {
            set.push(current.name());
            set.push(&unspecified_name(current.name()));
            stack.extend(current.children().iter().rev());
        }
        set
    }

    fn push(&mut self, name: &str) {
        if self.index.insert(String::from(name)) {
            self.names.push(String::from(name));
        }
    }

    /// The name the set was computed for.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// All names, in traversal order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterates over the names in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Returns `true` if `category` belongs to the set.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.index.contains(category)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` for the default, empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PartialEq for DescendantSet {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for DescendantSet {}
