// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;

use tastemap_hierarchy::CategoryTree;

use crate::cache::DescendantCache;
use crate::config::PulseConfig;
use crate::style::PulseFrame;

#[derive(Clone, Debug)]
struct HoverTarget {
    name: String,
    started_ms: f64,
}

/// The legend-hovered category and the state its pulse needs.
///
/// At most one category is hovered at a time. Entering a row replaces any
/// previous hover, restarts the pulse phase and invalidates the cached match set.
#[derive(Clone, Debug, Default)]
pub struct HoverPulse {
    target: Option<HoverTarget>,
    cache: DescendantCache,
}

impl HoverPulse {
    /// Creates an idle hover state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts hovering `name` at `now_ms`.
    pub fn enter(&mut self, tree: &CategoryTree, name: &str, now_ms: f64) {
        self.cache.invalidate();
        self.cache.get_or_compute(tree, name);
        self.target = Some(HoverTarget {
            name: name.to_owned(),
            started_ms: now_ms,
        });
    }

    /// Stops hovering if `name` is the hovered category.
    ///
    /// Returns `true` if the hover was cleared. Leaving a row that is no longer
    /// the hovered one (a late leave after another enter) changes nothing.
    pub fn leave(&mut self, name: &str) -> bool {
        if self.hovered() == Some(name) {
            self.clear()
        } else {
            false
        }
    }

    /// Clears any hover. Returns `true` if one was active.
    pub fn clear(&mut self) -> bool {
        if self.target.take().is_some() {
            self.cache.invalidate();
            true
        } else {
            false
        }
    }

    /// The hovered category name.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.name.as_str())
    }

    /// Returns `true` while a category is hovered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// When the current hover started, in caller milliseconds.
    #[must_use]
    pub fn started_ms(&self) -> Option<f64> {
        self.target.as_ref().map(|t| t.started_ms)
    }

    /// The memoized match set of the current hover.
    #[must_use]
    pub fn cache(&self) -> &DescendantCache {
        &self.cache
    }

    /// Point styling for the frame at `now_ms`, or `None` when idle.
    #[must_use]
    pub fn frame(&self, now_ms: f64, config: &PulseConfig) -> Option<PulseFrame<'_>> {
        let target = self.target.as_ref()?;
        let multiplier = config.radius_multiplier(now_ms - target.started_ms);
        Some(PulseFrame::new(self.cache.get(), multiplier, config.dim_alpha))
    }
}
