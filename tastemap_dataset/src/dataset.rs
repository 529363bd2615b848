// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use peniko::Color;
use serde::Deserialize;
use serde_json::Value;
use tastemap_hierarchy::{CategoryTree, Palette};
use tracing::{debug, info, warn};

use crate::entity::Entity;
use crate::error::LoadError;

#[derive(Deserialize)]
struct RawDocument {
    restaurants: Option<Vec<Value>>,
    hierarchy: Option<CategoryTree>,
    colors: Option<Palette>,
}

/// The startup document: every entity, the hierarchy and the color lookup.
///
/// Loaded once; read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    entities: Vec<Entity>,
    hierarchy: Arc<CategoryTree>,
    palette: Palette,
    skipped: usize,
}

impl Dataset {
    /// Assembles a dataset from parts.
    #[must_use]
    pub fn new(entities: Vec<Entity>, hierarchy: CategoryTree, palette: Palette) -> Self {
        Self {
            entities,
            hierarchy: Arc::new(hierarchy),
            palette,
            skipped: 0,
        }
    }

    /// Decodes a document held in memory.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Decodes a document held in a string.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Decodes a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Reads and decodes the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading map data from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawDocument) -> Result<Self, LoadError> {
        let restaurants = raw.restaurants.ok_or(LoadError::MissingField("restaurants"))?;
        let hierarchy = raw.hierarchy.ok_or(LoadError::MissingField("hierarchy"))?;
        let palette = raw.colors.unwrap_or_default();

        let total = restaurants.len();
        let entities: Vec<Entity> = restaurants
            .iter()
            .filter_map(Entity::from_value)
            .collect();
        let skipped = total - entities.len();
        if skipped > 0 {
            warn!("Skipped {} restaurants without a usable position", skipped);
        }

        for name in hierarchy.duplicate_names() {
            warn!(
                "Category {:?} appears in more than one branch; lookups use the first",
                name
            );
        }
        for issue in hierarchy.count_issues() {
            warn!(
                "Category {:?} has count {} but its children total {}",
                issue.name, issue.count, issue.children_total
            );
        }
        if palette.is_empty() {
            debug!("Map data has no color lookup; all points use the fallback gray");
        }

        info!(
            "Loaded {} restaurants in {} categories",
            entities.len(),
            hierarchy.len()
        );
        Ok(Self {
            entities,
            hierarchy: Arc::new(hierarchy),
            palette,
            skipped,
        })
    }

    /// Every entity, in document order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if there are no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities dropped at load for lacking a position.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The category hierarchy.
    #[must_use]
    pub fn hierarchy(&self) -> &CategoryTree {
        &self.hierarchy
    }

    /// A shared handle to the hierarchy, for the controller.
    #[must_use]
    pub fn shared_hierarchy(&self) -> Arc<CategoryTree> {
        Arc::clone(&self.hierarchy)
    }

    /// The color lookup.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Point color of `category`, gray when unknown.
    #[must_use]
    pub fn color_of(&self, category: &str) -> Color {
        self.palette.color_of(category)
    }

    /// Number of entities per category name.
    #[must_use]
    pub fn tally_by_category(&self) -> BTreeMap<&str, usize> {
        let mut tally = BTreeMap::new();
        for entity in &self.entities {
            *tally.entry(entity.category.as_str()).or_insert(0) += 1;
        }
        tally
    }
}
