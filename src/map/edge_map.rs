//! `EdgeMap` (C5): canonical edge → ordered feature list.

use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::edge::Edge;
use crate::error::HexFieldError;
use crate::feature::Feature;
use crate::hex::{Direction, Hex};
use crate::ids::IdGenerator;

use super::hex_map::HexMap;

/// Mapping from canonical edge to its ordered list of features.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    entries: HashMap<Edge, Vec<Feature>>,
    #[allow(dead_code)]
    config: EngineConfig,
}

impl EdgeMap {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
        }
    }

    /// Produces every internal boundary of `hex_map` exactly once. Hexes
    /// are visited in `(q, r)` order so the spawn side each edge records
    /// is reproducible; the spec leaves this order unspecified, but a
    /// stable order is what lets tests pin spawn side deliberately.
    pub fn initialize(&mut self, hex_map: &HexMap) {
        self.entries.clear();
        let mut hexes: Vec<Hex> = hex_map.iter_contents().map(|(h, _)| *h).collect();
        hexes.sort_by_key(|h| (h.q, h.r));
        for h in hexes {
            for d in Direction::ALL {
                let neighbour = h.neighbour(d);
                if !hex_map.exists(neighbour) {
                    continue;
                }
                let edge = h.edge_by_direction(d);
                self.entries.entry(edge).or_default();
            }
        }
    }

    #[must_use]
    pub fn exists(&self, edge: Edge) -> bool {
        self.entries.contains_key(&edge)
    }

    /// Appends `feature` to `edge`'s content list, enforcing Terrain
    /// uniqueness the same way `HexMap::append` does.
    pub fn append(&mut self, edge: Edge, feature: Feature) -> Result<(), HexFieldError> {
        let contents = self.entries.get_mut(&edge).ok_or_else(|| {
            let (a, b) = edge.endpoints();
            HexFieldError::NotFound(format!("edge {a}-{b}"))
        })?;
        if feature.is_terrain() && contents.iter().any(Feature::is_terrain) {
            return Err(HexFieldError::DuplicateTerrain);
        }
        contents.push(feature);
        Ok(())
    }

    /// Starting at `source_hex`, walks `directions` one step at a time,
    /// stamping a numbered clone of `template` onto the edge crossed at
    /// each step. Fails if any step leaves the map or violates Terrain
    /// uniqueness.
    pub fn append_chain(
        &mut self,
        source_hex: Hex,
        directions: &[Direction],
        template: &Feature,
        namer: &mut impl IdGenerator,
    ) -> Result<(), HexFieldError> {
        let mut current = source_hex;
        for (i, &d) in directions.iter().enumerate() {
            let edge = current.edge_by_direction(d);
            let name = format!("{}{}", template.name, i + 1);
            let id = namer.fresh_id(&name, template.kind);
            let feature = template.clone_with(id, name);
            self.append(edge, feature)?;
            current = current.neighbour(d);
        }
        Ok(())
    }

    /// The feature list for `edge`, empty (never failing) if absent.
    #[must_use]
    pub fn contents(&self, edge: Edge) -> &[Feature] {
        self.entries.get(&edge).map_or(&[], Vec::as_slice)
    }

    /// All `(edge, contents)` pairs, for the renderer; each edge still
    /// carries its spawn side for placement.
    pub fn iter_contents(&self) -> impl Iterator<Item = (&Edge, &[Feature])> {
        self.entries.iter().map(|(e, c)| (e, c.as_slice()))
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
