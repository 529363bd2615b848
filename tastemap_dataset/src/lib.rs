// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tastemap Dataset: the startup document of the map.
//!
//! The document is one JSON object written by the data preparation step:
//!
//! ```json
//! {
//!   "restaurants": [{"position": [-73.98, 40.75], "category": "Sichuan",
//!                    "name": "...", "general": "Asian", "address": "...", "boro": "Manhattan"}],
//!   "hierarchy": {"Asian": {"count": 1, "color": [255, 50, 130],
//!                           "children": {"Sichuan": {"count": 1, "color": [240, 40, 55]}}}},
//!   "colors": {"Sichuan": [240, 40, 55]}
//! }
//! ```
//!
//! [`Dataset`] decodes it, keeping hierarchy order. Descriptive fields that are
//! missing, `null` or not strings become empty strings; entities without a
//! usable position are skipped with a warning. Structural problems in the hierarchy (names used
//! in more than one branch, parents counting fewer entities than their
//! children) are logged through `tracing` but do not fail the load.
//!
//! A failed load is terminal for the map: hosts show [`LOAD_FAILURE_MESSAGE`].
//!
//! ## Minimal example
//!
//! ```rust
//! use tastemap_dataset::Dataset;
//!
//! let doc = r#"{
//!     "restaurants": [{"position": [-73.99, 40.73], "category": "Cafe", "name": null}],
//!     "hierarchy": {"Cafe": {"count": 1, "color": [255, 140, 105]}},
//!     "colors": {"Cafe": [255, 140, 105]}
//! }"#;
//! let dataset = Dataset::from_json_str(doc).unwrap();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.entities()[0].name, "");
//! assert_eq!(dataset.hierarchy().roots()[0].name(), "Cafe");
//! ```

mod dataset;
mod entity;
mod error;

pub use dataset::Dataset;
pub use entity::Entity;
pub use error::{LOAD_FAILURE_MESSAGE, LoadError};
