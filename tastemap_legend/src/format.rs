// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

/// Formats a count with comma thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The legend summary line: how many entities the current filter shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Entities drawn.
    pub shown: usize,
    /// Entities in the dataset.
    pub total: usize,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} restaurants shown",
            format_count(self.shown as u64),
            format_count(self.total as u64)
        )
    }
}
