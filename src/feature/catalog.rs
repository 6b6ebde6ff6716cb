//! `FeatureCatalog` (C3): a read-only lookup from feature type name to
//! resolved attributes. The core never reads this from disk; it's handed
//! a fully materialised value by the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::HexFieldError;

use super::types::FeatureAttrs;

/// A pair of read-only name → attrs mappings, one for Terrain kinds and
/// one for Structure kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCatalog {
    terrain: HashMap<String, FeatureAttrs>,
    structure: HashMap<String, FeatureAttrs>,
}

impl FeatureCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces a terrain type's attributes.
    pub fn insert_terrain(&mut self, name: impl Into<String>, attrs: FeatureAttrs) -> &mut Self {
        self.terrain.insert(name.into(), attrs);
        self
    }

    /// Registers or replaces a structure type's attributes.
    pub fn insert_structure(&mut self, name: impl Into<String>, attrs: FeatureAttrs) -> &mut Self {
        self.structure.insert(name.into(), attrs);
        self
    }

    pub fn terrain_attrs(&self, name: &str) -> Result<&FeatureAttrs, HexFieldError> {
        self.terrain
            .get(name)
            .ok_or_else(|| HexFieldError::NotFound(name.to_string()))
    }

    pub fn structure_attrs(&self, name: &str) -> Result<&FeatureAttrs, HexFieldError> {
        self.structure
            .get(name)
            .ok_or_else(|| HexFieldError::NotFound(name.to_string()))
    }

    /// Terrain type names usable for bulk hex fill: those without the
    /// `edgeobject` marker.
    #[must_use]
    pub fn hex_terrain_kinds(&self) -> Vec<&str> {
        self.terrain
            .iter()
            .filter(|(_, attrs)| !attrs.edgeobject)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
