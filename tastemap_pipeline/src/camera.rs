// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::surface::BaseMap;

/// Zoom and pitch range of the map camera.
///
/// Always holds `min_zoom <= max_zoom` and `max_pitch >= 0`, with no NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraLimits {
    min_zoom: f64,
    max_zoom: f64,
    max_pitch: f64,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.0,
            max_zoom: 20.0,
            max_pitch: 60.0,
        }
    }
}

impl CameraLimits {
    /// Creates limits, swapping the zoom bounds if given in the wrong order.
    ///
    /// A NaN bound falls back to the default one, and a negative pitch limit
    /// becomes `0`.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64, max_pitch: f64) -> Self {
        let defaults = Self::default();
        let min_zoom = if min_zoom.is_nan() {
            defaults.min_zoom
        } else {
            min_zoom
        };
        let max_zoom = if max_zoom.is_nan() {
            defaults.max_zoom
        } else {
            max_zoom
        };
        let max_pitch = if max_pitch.is_nan() {
            defaults.max_pitch
        } else {
            max_pitch.max(0.0)
        };
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        Self {
            min_zoom,
            max_zoom,
            max_pitch,
        }
    }

    /// Smallest zoom level.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Largest zoom level.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Largest pitch in degrees.
    #[must_use]
    pub fn max_pitch(&self) -> f64 {
        self.max_pitch
    }
}

/// Camera shared by the render surface and the base map.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapCamera {
    /// Longitude of the view center.
    pub lon: f64,
    /// Latitude of the view center.
    pub lat: f64,
    /// Web-mercator zoom level.
    pub zoom: f64,
    /// Tilt in degrees, `0` looks straight down.
    pub pitch: f64,
    /// Rotation in degrees clockwise from north.
    pub bearing: f64,
}

impl Default for MapCamera {
    /// Centered on New York City.
    fn default() -> Self {
        Self {
            lon: -73.95,
            lat: 40.72,
            zoom: 11.0,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

impl MapCamera {
    /// Returns the camera with zoom and pitch clamped into `limits` and the
    /// bearing normalized to `[0, 360)`.
    ///
    /// A NaN zoom or pitch lands on the lower limit and a non-finite bearing
    /// becomes `0`.
    #[must_use]
    pub fn clamped(mut self, limits: &CameraLimits) -> Self {
        self.zoom = self.zoom.max(limits.min_zoom).min(limits.max_zoom);
        self.pitch = self.pitch.max(0.0).min(limits.max_pitch);
        self.bearing = if self.bearing.is_finite() {
            self.bearing.rem_euclid(360.0)
        } else {
            0.0
        };
        self
    }
}

/// Mirrors the render camera to a [`BaseMap`], skipping unchanged cameras.
#[derive(Clone, Debug, Default)]
pub struct CameraSync {
    limits: CameraLimits,
    last: Option<MapCamera>,
}

impl CameraSync {
    /// Creates a sync with the given limits.
    #[must_use]
    pub fn new(limits: CameraLimits) -> Self {
        Self { limits, last: None }
    }

    /// The last camera sent to the base map.
    #[must_use]
    pub fn current(&self) -> Option<&MapCamera> {
        self.last.as_ref()
    }

    /// Clamps `camera` and sends it to `base` if it differs from the last one.
    ///
    /// Returns `true` if the base map was updated.
    pub fn update(&mut self, base: &mut impl BaseMap, camera: MapCamera) -> bool {
        let camera = camera.clamped(&self.limits);
        if self.last == Some(camera) {
            return false;
        }
        base.sync_camera(&camera);
        self.last = Some(camera);
        true
    }
}
