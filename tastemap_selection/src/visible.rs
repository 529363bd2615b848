// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

/// Set of visible category names plus a revision counter.
///
/// Names may belong to any depth of the hierarchy; group names and synthetic
/// unspecified variants are stored just like leaves. Order carries no meaning.
#[derive(Clone, Debug, Default)]
pub struct VisibleSet {
    names: HashSet<String>,
    revision: u64,
}

impl VisibleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of visible names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if `name` is visible.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterates over the visible names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Visible names in lexical order, for stable output.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when a mutation changes the contents. No-op
    /// calls (re-adding visible names, removing hidden ones) leave it unchanged,
    /// which gives observers a cheap "did anything actually change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds every name, bumping the revision once if any was new.
    pub fn extend_with<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changed = false;
        for name in names {
            let name = name.as_ref();
            if !self.names.contains(name) {
                self.names.insert(String::from(name));
                changed = true;
            }
        }
        if changed {
            self.bump_revision();
        }
    }

    /// Removes every name, bumping the revision once if any was present.
    pub fn remove_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changed = false;
        for name in names {
            changed |= self.names.remove(name.as_ref());
        }
        if changed {
            self.bump_revision();
        }
    }

    /// Replaces the contents with `names`.
    pub fn replace_with<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let new_names: HashSet<String> = names
            .into_iter()
            .map(|n| String::from(n.as_ref()))
            .collect();
        self.replace_with_set(new_names);
    }

    /// Removes every name.
    pub fn clear(&mut self) {
        if self.names.is_empty() {
            return;
        }
        self.names.clear();
        self.bump_revision();
    }

    /// Captures the current contents.
    #[must_use]
    pub fn snapshot(&self) -> VisibleSnapshot {
        VisibleSnapshot {
            names: self.names.clone(),
        }
    }

    /// Restores contents captured by [`VisibleSet::snapshot`].
    ///
    /// The revision keeps counting up; restoring is a change like any other.
    pub fn restore(&mut self, snapshot: VisibleSnapshot) {
        self.replace_with_set(snapshot.names);
    }

    fn replace_with_set(&mut self, new_names: HashSet<String>) {
        if new_names == self.names {
            return;
        }
        self.names = new_names;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Point-in-time copy of a [`VisibleSet`]'s contents, without its revision.
///
/// Two snapshots compare equal when they hold the same names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSnapshot {
    names: HashSet<String>,
}

impl VisibleSnapshot {
    /// Returns `true` if `name` was visible.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing was visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_with_bumps_once_and_only_on_change() {
        let mut set = VisibleSet::new();
        set.extend_with(["Thai", "Thai (Unspecified)"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.revision(), 1);

        set.extend_with(["Thai"]);
        assert_eq!(set.revision(), 1);
    }

    #[test]
    fn remove_all_ignores_missing_names() {
        let mut set = VisibleSet::new();
        set.extend_with(["Thai", "Lao"]);
        let rev = set.revision();

        set.remove_all(["Burmese"]);
        assert_eq!(set.revision(), rev);

        set.remove_all(["Thai", "Burmese"]);
        assert_eq!(set.sorted(), ["Lao"]);
        assert!(set.revision() > rev);
    }

    #[test]
    fn restore_returns_to_snapshot_contents() {
        let mut set = VisibleSet::new();
        set.extend_with(["Bar", "Pub"]);
        let snapshot = set.snapshot();

        set.replace_with(["Cafe"]);
        assert!(!set.contains("Bar"));

        set.restore(snapshot.clone());
        assert_eq!(set.snapshot(), snapshot);
        assert_eq!(set.revision(), 3);
    }

    #[test]
    fn clear_on_empty_set_is_a_noop() {
        let mut set = VisibleSet::new();
        set.clear();
        assert_eq!(set.revision(), 0);
    }
}
