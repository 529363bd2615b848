// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde_json::Value;

/// One restaurant on the map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Leaf category or a `"<Name> (Unspecified)"` variant.
    pub category: String,
    /// Display name.
    pub name: String,
    /// Top-level category, display only.
    pub general: String,
    /// Street address, display only.
    pub address: String,
    /// Borough, display only.
    pub boro: String,
}

impl Entity {
    /// `(lon, lat)` pair.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// Reads one entry of the `restaurants` array.
    ///
    /// Returns `None` without a finite numeric `[lon, lat]`. Descriptive fields
    /// that are missing, `null` or not strings read as empty, so one odd record
    /// never fails the whole document.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let (lon, lat) = match value.get("position")?.as_array()?.as_slice() {
            [lon, lat, ..] => (lon.as_f64()?, lat.as_f64()?),
            _ => return None,
        };
        if !(lon.is_finite() && lat.is_finite()) {
            return None;
        }
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Some(Self {
            lon,
            lat,
            category: text("category"),
            name: text("name"),
            general: text("general"),
            address: text("address"),
            boro: text("boro"),
        })
    }
}
