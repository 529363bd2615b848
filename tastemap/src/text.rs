// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;

use tastemap_legend::{CheckState, Legend};

/// Plain-text rendering of the displayed legend rows, one per line.
///
/// ```text
/// [x] v Asian (1,200)
///     [-]   Chinese (700)
/// ```
#[must_use]
pub fn legend_to_text(legend: &Legend) -> String {
    let mut out = String::new();
    for row in legend.visible_rows() {
        let check = match row.check {
            CheckState::Checked => "[x]",
            CheckState::Indeterminate => "[-]",
            CheckState::Unchecked => "[ ]",
        };
        let arrow = match row.expander {
            Some(true) => "v ",
            Some(false) => "> ",
            None => "  ",
        };
        let indent = "    ".repeat(row.depth);
        let _ = writeln!(out, "{indent}{check} {arrow}{} ({})", row.name, row.count_label);
    }
    out
}
