// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile legend drawer: open and close it by dragging its handle.
//!
//! ## Usage
//!
//! 1) Call [`DrawerState::press`] when the pointer goes down on the handle.
//! 2) Call [`DrawerState::drag`] on each move; it returns the delta since the
//!    previous position so the host can track the drawer with the finger.
//! 3) Call [`DrawerState::release`] on pointer up. Dragging up past the
//!    threshold opens the drawer, down past it closes it, and a tap toggles it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tastemap_legend::{DrawerState, LegendConfig};
//!
//! let config = LegendConfig::default();
//! let mut drawer = DrawerState::default();
//!
//! drawer.press(Point::new(100.0, 600.0));
//! drawer.drag(Point::new(100.0, 560.0));
//! assert!(drawer.release(Point::new(100.0, 500.0), &config));
//! assert!(drawer.is_open());
//! ```

use kurbo::{Point, Vec2};

use crate::config::LegendConfig;

/// Open/closed state of the legend drawer plus an in-progress handle drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DrawerState {
    open: bool,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DrawerState {
    /// Returns `true` if the drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` while the handle is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Opens or closes the drawer directly.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Starts a handle drag at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move, returning the delta since the previous position.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn drag(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Total offset of `pos` from where the drag started.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Ends the drag at `pos` and applies the gesture.
    ///
    /// Returns `true` if the open state changed.
    pub fn release(&mut self, pos: Point, config: &LegendConfig) -> bool {
        let Some(offset) = self.total_offset(pos) else {
            return false;
        };
        self.start_pos = None;
        self.last_pos = None;

        let was_open = self.open;
        if offset.hypot() <= config.tap_slop {
            self.open = !self.open;
        } else if offset.y <= -config.drawer_drag_threshold {
            self.open = true;
        } else if offset.y >= config.drawer_drag_threshold {
            self.open = false;
        }
        self.open != was_open
    }

    /// Abandons the drag without changing the open state.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }
}
