// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;

use peniko::Color;

/// Color used for categories missing from the lookup.
pub const DEFAULT_RGB: [u8; 3] = [128, 128, 128];

/// Flat category name → color lookup.
///
/// Every category an entity may carry (including the synthetic unspecified
/// variants) has an entry in the startup document. Unknown names fall back to
/// [`DEFAULT_RGB`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, [u8; 3]>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Sets the color for `category`, returning the previous one.
    pub fn insert(&mut self, category: impl Into<String>, rgb: [u8; 3]) -> Option<[u8; 3]> {
        self.colors.insert(category.into(), rgb)
    }

    /// The `[r, g, b]` triple for `category`, or [`DEFAULT_RGB`].
    #[must_use]
    pub fn rgb_of(&self, category: &str) -> [u8; 3] {
        self.colors.get(category).copied().unwrap_or(DEFAULT_RGB)
    }

    /// The opaque color for `category`.
    #[must_use]
    pub fn color_of(&self, category: &str) -> Color {
        let [r, g, b] = self.rgb_of(category);
        Color::from_rgb8(r, g, b)
    }

    /// Returns `true` if `category` has an explicit entry.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.colors.contains_key(category)
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if there are no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, [u8; 3])> for Palette {
    fn from_iter<I: IntoIterator<Item = (S, [u8; 3])>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
