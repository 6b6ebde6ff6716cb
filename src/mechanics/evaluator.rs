//! `MoveEvaluator` (C6): per-step cost and condition aggregation.
//!
//! This is the one algorithm in the crate with a genuine subtlety: a
//! bridge cancels the cost of exactly one bridgeable terrain feature on
//! the same step, never more.

use crate::edge::Edge;
use crate::feature::Feature;
use crate::hex::{Direction, Hex};
use crate::map::{EdgeMap, HexMap};

/// Reads `HexMap` and `EdgeMap` contents through `Hex`/`Edge` to answer
/// "what does stepping from `h` in direction `d` cost, and what
/// conditions does it carry?". Holds no state of its own and never
/// mutates either map.
pub struct MoveEvaluator<'a> {
    hex_map: &'a HexMap,
    edge_map: &'a EdgeMap,
}

impl<'a> MoveEvaluator<'a> {
    #[must_use]
    pub fn new(hex_map: &'a HexMap, edge_map: &'a EdgeMap) -> Self {
        Self { hex_map, edge_map }
    }

    /// Directions out of `h` that land on an in-bounds hex.
    #[must_use]
    pub fn valid_neighbours(&self, h: Hex) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.hex_map.exists(h.neighbour(d)))
            .collect()
    }

    fn step_features(&self, h: Hex, d: Direction) -> (Vec<&Feature>, Edge) {
        let neighbour = h.neighbour(d);
        let edge = h.edge_by_direction(d);
        let mut features: Vec<&Feature> = self.hex_map.contents(neighbour).iter().collect();
        features.extend(self.edge_map.contents(edge).iter());
        (features, edge)
    }

    /// The move-cost of stepping from `h` to its direction-`d` neighbour,
    /// clamped to a minimum of 1.
    #[must_use]
    pub fn cost(&self, h: Hex, d: Direction) -> i64 {
        let (features, _) = self.step_features(h, d);
        let mut bridge_present = features.iter().any(|f| f.is_bridge());
        let mut sum: i64 = 0;
        for feature in &features {
            if feature.is_bridgeable() && bridge_present {
                bridge_present = false;
            } else {
                sum += feature.movement_cost;
            }
        }
        sum.max(1)
    }

    /// The `terrain_condition` strings carried by `h ∪ edge(h,d)`'s
    /// Terrain features, hex-first then edge.
    #[must_use]
    pub fn conditions(&self, h: Hex, d: Direction) -> Vec<String> {
        let (features, _) = self.step_features(h, d);
        features
            .into_iter()
            .filter(|f| f.is_terrain())
            .filter_map(|f| f.terrain_condition.clone())
            .collect()
    }

    /// `(h, d, neighbour, cost, conditions)` for every valid direction
    /// out of `h`.
    #[must_use]
    pub fn neighbour_conditions(&self, h: Hex) -> Vec<(Hex, Direction, Hex, i64, Vec<String>)> {
        self.valid_neighbours(h)
            .into_iter()
            .map(|d| {
                let neighbour = h.neighbour(d);
                (h, d, neighbour, self.cost(h, d), self.conditions(h, d))
            })
            .collect()
    }
}
