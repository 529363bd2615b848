// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::mode::ViewMode;

/// A user interaction, as delivered by the legend or the toolbar.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A legend checkbox was clicked; `visible` is the requested new state.
    CheckboxToggled {
        /// Category of the row.
        name: String,
        /// `true` to show the branch, `false` to hide it. Ignored in Glow mode.
        visible: bool,
    },
    /// The body of a legend row was clicked.
    RowExpanded {
        /// Category of the row.
        name: String,
    },
    /// The pointer entered a legend row.
    RowHovered {
        /// Category of the row.
        name: String,
        /// Host timestamp in milliseconds.
        now_ms: f64,
    },
    /// The pointer left a legend row.
    RowUnhovered {
        /// Category of the row.
        name: String,
    },
    /// The Points or Glow toggle was pressed.
    ModeChanged(ViewMode),
    /// The Select All button was pressed.
    SelectAll,
    /// The Select None button was pressed.
    SelectNone,
    /// Expand every legend group.
    ExpandAll,
    /// Collapse every legend group.
    CollapseAll,
}

/// What the hover animation loop should do after an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PulseCommand {
    /// Leave the loop as it is.
    #[default]
    Keep,
    /// Start the loop (idempotent).
    Start,
    /// Cancel the loop.
    Stop,
}

/// Which views must be refreshed after an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// The legend rows changed.
    pub legend: bool,
    /// The map layers changed.
    pub render: bool,
    /// Hover animation loop command.
    pub pulse: PulseCommand,
}

impl Reaction {
    /// Nothing to do.
    pub const NONE: Self = Self {
        legend: false,
        render: false,
        pulse: PulseCommand::Keep,
    };

    /// Refresh both the legend and the map.
    pub const REFRESH: Self = Self {
        legend: true,
        render: true,
        pulse: PulseCommand::Keep,
    };

    /// Refresh only the legend.
    pub const LEGEND: Self = Self {
        legend: true,
        render: false,
        pulse: PulseCommand::Keep,
    };

    /// Returns `true` if nothing needs to happen.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `self` with the given pulse command.
    #[must_use]
    pub fn with_pulse(mut self, pulse: PulseCommand) -> Self {
        self.pulse = pulse;
        self
    }

    /// Combines the reaction to `self` with that of a later event.
    ///
    /// Refresh flags accumulate; the later pulse command wins unless it is `Keep`.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            legend: self.legend || later.legend,
            render: self.render || later.render,
            pulse: match later.pulse {
                PulseCommand::Keep => self.pulse,
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_accumulates_and_keeps_last_command() {
        let start = Reaction::REFRESH.with_pulse(PulseCommand::Start);
        assert_eq!(Reaction::NONE.merge(Reaction::LEGEND), Reaction::LEGEND);
        assert_eq!(start.merge(Reaction::LEGEND), start);
        assert_eq!(
            start.merge(Reaction::NONE.with_pulse(PulseCommand::Stop)).pulse,
            PulseCommand::Stop
        );
    }
}
