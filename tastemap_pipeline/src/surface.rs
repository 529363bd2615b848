// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::camera::MapCamera;
use crate::layer::Layer;

/// The canvas that draws point and density layers.
pub trait RenderSurface {
    /// Failure to build or draw a frame.
    type Error: core::error::Error;

    /// Replaces the drawn layers. On error the previous frame stays on screen.
    fn draw(&mut self, layers: &[Layer<'_>]) -> Result<(), Self::Error>;
}

/// The tiled base map underneath the render surface.
pub trait BaseMap {
    /// Moves the base map to `camera`.
    fn sync_camera(&mut self, camera: &MapCamera);
}
