//! `HexMap` (C4): hex → ordered feature list, with the terrain-uniqueness
//! invariant.

use std::collections::HashMap;

use rand::Rng;

use crate::config::EngineConfig;
use crate::error::HexFieldError;
use crate::feature::{Feature, FeatureCatalog};
use crate::hex::Hex;
use crate::ids::IdGenerator;

fn floor_div2(v: i32) -> i32 {
    v.div_euclid(2)
}

/// Mapping from hex to its ordered list of features.
///
/// Every key is a hex produced by `initialize`; at most one Terrain
/// feature lives in any single hex's list.
#[derive(Debug, Clone)]
pub struct HexMap {
    entries: HashMap<Hex, Vec<Feature>>,
    config: EngineConfig,
}

impl HexMap {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
        }
    }

    /// Populates the map with every hex in the rhombus-trimmed rectangle
    /// `[left-⌊r/2⌋ .. right-⌊r/2⌋] × [top..bottom]`. Calling this again
    /// discards the previous contents.
    pub fn initialize(&mut self, left: i32, right: i32, top: i32, bottom: i32) {
        self.entries.clear();
        for r in top..=bottom {
            let offset = floor_div2(r);
            for q in (left - offset)..=(right - offset) {
                self.entries.insert(Hex::new(q, r), Vec::new());
            }
        }
    }

    #[must_use]
    pub fn exists(&self, h: Hex) -> bool {
        self.entries.contains_key(&h)
    }

    /// Appends `feature` to `h`'s content list. Fails with `NoSuchHex` if
    /// `h` isn't in the map, or `DuplicateTerrain` if `feature` is Terrain
    /// and `h` already holds one.
    pub fn append(&mut self, h: Hex, feature: Feature) -> Result<(), HexFieldError> {
        let contents = self
            .entries
            .get_mut(&h)
            .ok_or(HexFieldError::NoSuchHex(h))?;
        if feature.is_terrain() && contents.iter().any(Feature::is_terrain) {
            return Err(HexFieldError::DuplicateTerrain);
        }
        contents.push(feature);
        Ok(())
    }

    /// The feature list for `h`, empty (never failing) if `h` isn't a key.
    #[must_use]
    pub fn contents(&self, h: Hex) -> &[Feature] {
        self.entries.get(&h).map_or(&[], Vec::as_slice)
    }

    pub fn find_by_id(&self, id: &str) -> Result<&Feature, HexFieldError> {
        self.entries
            .values()
            .flatten()
            .find(|f| f.id == id)
            .ok_or_else(|| HexFieldError::NotFound(id.to_string()))
    }

    /// For every hex, picks a uniform-random terrain kind from
    /// `catalog.hex_terrain_kinds()`, mints an id via `namer`, and appends
    /// the resulting Terrain feature. Hexes are visited in `(q, r)` order
    /// and candidate kinds are sorted by name before indexing, so that a
    /// seeded `rng` reproduces the same fill across runs regardless of
    /// the catalog's backing `HashMap` iteration order.
    pub fn fill_with_terrain(
        &mut self,
        catalog: &FeatureCatalog,
        rng: &mut impl Rng,
        namer: &mut impl IdGenerator,
    ) -> Result<(), HexFieldError> {
        let mut kinds = catalog.hex_terrain_kinds();
        kinds.sort_unstable();
        if kinds.is_empty() {
            return Err(HexFieldError::NotFound("no hex terrain kinds in catalog".to_string()));
        }
        let mut hexes: Vec<Hex> = self.entries.keys().copied().collect();
        hexes.sort_by_key(|h| (h.q, h.r));
        for h in hexes {
            let kind = kinds[rng.random_range(0..kinds.len())].to_string();
            let id = namer.fresh_id(&kind, crate::feature::FeatureKind::Terrain);
            let feature = Feature::new_terrain(id, kind.clone(), kind, catalog, &self.config)?;
            self.append(h, feature)?;
        }
        Ok(())
    }

    /// All `(hex, contents)` pairs, for the renderer.
    pub fn iter_contents(&self) -> impl Iterator<Item = (&Hex, &[Feature])> {
        self.entries.iter().map(|(h, c)| (h, c.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
