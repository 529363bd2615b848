// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend input dispatch: turn row pointer input into controller events.
//!
//! A click lands on one part of a row. The dispatcher walks the bubble path
//! from that part up to the row and runs one handler per entry:
//!
//! - Checkbox: emits [`Event::CheckboxToggled`] and returns [`Outcome::Stop`],
//!   so the row's expand handler never sees the click.
//! - Body: emits [`Event::RowExpanded`] for groups; leaves ignore the click.
//!
//! Hover input is filtered before it becomes an event: only a mouse pointer on
//! a desktop-width viewport in Points mode hovers rows. Leaving a row always
//! produces [`Event::RowUnhovered`]; the controller ignores a leave for a row
//! that is not the hovered one.

use alloc::string::String;

use smallvec::{SmallVec, smallvec};
use tastemap_controller::{Event, ViewMode};

use crate::config::LegendConfig;
use crate::rows::Legend;

/// Part of a row that received a click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowPart {
    /// The tri-state checkbox.
    Checkbox,
    /// Anywhere else on the row: label, swatch, count or arrow.
    Body,
}

/// Handler result controlling propagation along the bubble path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep bubbling.
    Continue,
    /// Abort propagation.
    Stop,
}

/// Kind of pointing device.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    /// A mouse or trackpad; can hover.
    #[default]
    Mouse,
    /// A finger.
    Touch,
    /// A stylus.
    Pen,
}

/// Host context accompanying legend input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputContext {
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// Device that produced the input.
    pub pointer: PointerKind,
}

impl InputContext {
    /// Returns `true` if row hover may start a pulse in `mode`.
    #[must_use]
    pub fn allows_hover(&self, mode: ViewMode, config: &LegendConfig) -> bool {
        self.pointer == PointerKind::Mouse
            && self.viewport_width >= config.desktop_min_width
            && mode == ViewMode::Points
    }
}

/// Raw pointer input on a legend row.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendInput {
    /// A click on `part` of the row named `row`.
    Click {
        /// Row category.
        row: String,
        /// Clicked part.
        part: RowPart,
    },
    /// The pointer entered a row.
    PointerEnter {
        /// Row category.
        row: String,
        /// Host timestamp in milliseconds.
        now_ms: f64,
    },
    /// The pointer left a row.
    PointerLeave {
        /// Row category.
        row: String,
    },
}

/// Bubble path for a click on `part`: innermost first.
#[must_use]
pub fn bubble_path(part: RowPart) -> SmallVec<[RowPart; 2]> {
    match part {
        RowPart::Checkbox => smallvec![RowPart::Checkbox, RowPart::Body],
        RowPart::Body => smallvec![RowPart::Body],
    }
}

/// Runs `handler` along `path` until a handler stops propagation.
///
/// Returns `true` if propagation was stopped.
pub fn run<E>(
    path: &[RowPart],
    event: &mut E,
    mut handler: impl FnMut(RowPart, &mut E) -> Outcome,
) -> bool {
    for &part in path {
        if handler(part, event) == Outcome::Stop {
            return true;
        }
    }
    false
}

impl Legend {
    /// Translates row input into controller events.
    ///
    /// Input on a row that is not in the legend produces nothing.
    #[must_use]
    pub fn dispatch(
        &self,
        input: &LegendInput,
        context: &InputContext,
        config: &LegendConfig,
    ) -> SmallVec<[Event; 1]> {
        let mut events = SmallVec::new();
        match input {
            LegendInput::Click { row, part } => {
                let Some(target) = self.find(row) else {
                    return events;
                };
                run(&bubble_path(*part), &mut events, |part, out| match part {
                    RowPart::Checkbox => {
                        out.push(Event::CheckboxToggled {
                            name: target.name.clone(),
                            visible: target.check.click_target(),
                        });
                        Outcome::Stop
                    }
                    RowPart::Body => {
                        if target.is_group() {
                            out.push(Event::RowExpanded {
                                name: target.name.clone(),
                            });
                        }
                        Outcome::Continue
                    }
                });
            }
            LegendInput::PointerEnter { row, now_ms } => {
                if context.allows_hover(self.mode(), config) && self.find(row).is_some() {
                    events.push(Event::RowHovered {
                        name: row.clone(),
                        now_ms: *now_ms,
                    });
                }
            }
            LegendInput::PointerLeave { row } => {
                events.push(Event::RowUnhovered { name: row.clone() });
            }
        }
        events
    }
}
