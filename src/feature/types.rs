//! `Feature`: the tagged-variant replacement for the source's
//! `Feature ← {Terrain, Structure}` class hierarchy with dynamic attribute
//! setting. The tag is the kind; the attributes are an explicit record
//! resolved once at construction, never probed by name afterwards.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::EngineConfig;
use crate::error::HexFieldError;

use super::catalog::FeatureCatalog;

/// Which of the two shapes a feature takes. Both kinds may live in a hex
/// or on an edge; the catalog, not the kind, decides what's placeable
/// where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Terrain,
    Structure,
}

/// Attributes resolved from a catalog entry. `movement_cost` is already
/// defaulted by the time this exists; everything else stays optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureAttrs {
    pub movement_cost: Option<i64>,
    pub terrain_condition: Option<String>,
    pub structure_condition: Option<String>,
    pub texture: Option<String>,
    /// Marks a terrain kind as edge-only; excluded from bulk hex fill.
    /// Meaningless outside the terrain catalog.
    pub edgeobject: bool,
}

/// A Terrain or Structure instance placed in a hex or on an edge.
///
/// Constructed once from a catalog entry; after that its fields never
/// change. The core never mutates a feature in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub kind: FeatureKind,
    pub feature_type: String,
    pub movement_cost: i64,
    pub terrain_condition: Option<String>,
    pub structure_condition: Option<String>,
    pub texture: Option<String>,
}

impl Feature {
    /// Builds a Terrain feature by resolving `feature_type` against the
    /// catalog's terrain table.
    pub fn new_terrain(
        id: String,
        name: String,
        feature_type: String,
        catalog: &FeatureCatalog,
        config: &EngineConfig,
    ) -> Result<Self, HexFieldError> {
        let attrs = catalog.terrain_attrs(&feature_type)?.clone();
        Ok(Self::from_attrs(
            id,
            name,
            FeatureKind::Terrain,
            feature_type,
            &attrs,
            config,
        ))
    }

    /// Builds a Structure feature by resolving `feature_type` against the
    /// catalog's structure table.
    pub fn new_structure(
        id: String,
        name: String,
        feature_type: String,
        catalog: &FeatureCatalog,
        config: &EngineConfig,
    ) -> Result<Self, HexFieldError> {
        let attrs = catalog.structure_attrs(&feature_type)?.clone();
        Ok(Self::from_attrs(
            id,
            name,
            FeatureKind::Structure,
            feature_type,
            &attrs,
            config,
        ))
    }

    /// Clones this feature's resolved attributes onto a fresh id/name.
    /// Used by `EdgeMap::append_chain` to stamp out copies of a template.
    #[must_use]
    pub fn clone_with(&self, id: String, name: String) -> Self {
        Self {
            id,
            name,
            kind: self.kind,
            feature_type: self.feature_type.clone(),
            movement_cost: self.movement_cost,
            terrain_condition: self.terrain_condition.clone(),
            structure_condition: self.structure_condition.clone(),
            texture: self.texture.clone(),
        }
    }

    fn from_attrs(
        id: String,
        name: String,
        kind: FeatureKind,
        feature_type: String,
        attrs: &FeatureAttrs,
        config: &EngineConfig,
    ) -> Self {
        let movement_cost = attrs.movement_cost.unwrap_or_else(|| {
            warn!(
                feature_type = %feature_type,
                large_cost = config.large_cost,
                "feature type has no movement_cost in catalog, defaulting to LARGE"
            );
            config.large_cost
        });
        Self {
            id,
            name,
            kind,
            feature_type,
            movement_cost,
            terrain_condition: attrs.terrain_condition.clone(),
            structure_condition: attrs.structure_condition.clone(),
            texture: attrs.texture.clone(),
        }
    }

    #[must_use]
    pub fn is_terrain(&self) -> bool {
        matches!(self.kind, FeatureKind::Terrain)
    }

    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.structure_condition.as_deref() == Some("bridge")
    }

    #[must_use]
    pub fn is_bridgeable(&self) -> bool {
        self.is_terrain() && self.terrain_condition.as_deref() == Some("bridgeable")
    }
}
