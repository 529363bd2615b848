// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;

/// Text of the blocking overlay shown when the startup document cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load map data. Run the data preparation step (prepare_map_data) to generate map_data.json, then reload.";

/// Why the startup document could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The document could not be read.
    Io(io::Error),
    /// The document is not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// A required top-level key is absent or `null`.
    MissingField(&'static str),
    /// The host reported a failed fetch.
    Fetch(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read map data: {err}"),
            Self::Json(err) => write!(f, "failed to decode map data: {err}"),
            Self::MissingField(key) => write!(f, "map data has no `{key}`"),
            Self::Fetch(reason) => write!(f, "failed to fetch map data: {reason}"),
        }
    }
}

impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::MissingField(_) | Self::Fetch(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
