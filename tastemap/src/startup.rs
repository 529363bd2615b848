// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tastemap_dataset::{Dataset, LOAD_FAILURE_MESSAGE, LoadError};
use tracing::error;

use crate::app::{App, AppConfig};

/// The one-time load that gates all interaction.
///
/// The host fetches the startup document itself and hands the outcome to
/// [`Startup::finish`]. A failure is terminal: there is no retry.
#[derive(Debug)]
pub enum Startup<H> {
    /// Waiting for the document.
    Loading(AppConfig),
    /// Interactive.
    Ready(Box<App<H>>),
    /// The document could not be loaded.
    Failed(LoadError),
}

impl<H: PartialEq> Startup<H> {
    /// Starts waiting for the document.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::Loading(config)
    }

    /// Completes the load with the fetched bytes or the fetch failure.
    ///
    /// Only a `Loading` state changes; finishing twice keeps the first outcome.
    #[must_use]
    pub fn finish(self, fetched: Result<Vec<u8>, LoadError>) -> Self {
        let Self::Loading(config) = self else {
            return self;
        };
        match fetched.and_then(|bytes| Dataset::from_slice(&bytes)) {
            Ok(dataset) => Self::Ready(Box::new(App::new(dataset, config))),
            Err(err) => {
                error!("Map data failed to load: {}", err);
                Self::Failed(err)
            }
        }
    }

    /// The app, once ready.
    #[must_use]
    pub fn app(&self) -> Option<&App<H>> {
        match self {
            Self::Ready(app) => Some(app.as_ref()),
            _ => None,
        }
    }

    /// Mutable access to the app, once ready.
    pub fn app_mut(&mut self) -> Option<&mut App<H>> {
        match self {
            Self::Ready(app) => Some(app.as_mut()),
            _ => None,
        }
    }

    /// Returns `true` once input may reach the map.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Text of the blocking overlay, shown only after a failed load.
    #[must_use]
    pub fn overlay_message(&self) -> Option<&'static str> {
        match self {
            Self::Failed(_) => Some(LOAD_FAILURE_MESSAGE),
            _ => None,
        }
    }
}
