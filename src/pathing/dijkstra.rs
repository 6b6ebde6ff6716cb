//! `ReachabilityEngine` (C7): Dijkstra over the move evaluator, bounded
//! by a cost limit.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::config::EngineConfig;
use crate::hex::Hex;
use crate::map::{EdgeMap, HexMap};
use crate::mechanics::MoveEvaluator;

/// Wraps a `HexMap`/`EdgeMap` pair so repeated `dijkstra` calls against
/// the same static map share one `MoveEvaluator` instead of rebuilding
/// one per call.
pub struct ReachabilityEngine<'a> {
    hex_map: &'a HexMap,
    edge_map: &'a EdgeMap,
    config: EngineConfig,
}

impl<'a> ReachabilityEngine<'a> {
    #[must_use]
    pub fn new(hex_map: &'a HexMap, edge_map: &'a EdgeMap, config: EngineConfig) -> Self {
        Self {
            hex_map,
            edge_map,
            config,
        }
    }

    /// Shortest cost from `source` to every hex in the map, using
    /// `config.default_cost_limit` as the bound.
    #[must_use]
    pub fn dijkstra(&self, source: Hex) -> HashMap<Hex, i64> {
        self.dijkstra_bounded(source, self.config.default_cost_limit)
    }

    /// Shortest cost from `source` to every hex in the map, stopping
    /// exploration once the frontier's minimum distance exceeds
    /// `cost_limit`. Hexes genuinely unreachable from `source` keep
    /// `config.large_cost`. Hexes one step past the node that triggered
    /// the stop may already have been relaxed to a finite value below
    /// `config.large_cost` before the limit took effect — relaxation is
    /// unconditional, the limit only stops further expansion, it does
    /// not retract distances already written.
    #[must_use]
    pub fn dijkstra_bounded(&self, source: Hex, cost_limit: i64) -> HashMap<Hex, i64> {
        let evaluator = MoveEvaluator::new(self.hex_map, self.edge_map);
        let large = self.config.large_cost;

        let mut dist: HashMap<Hex, i64> = self
            .hex_map
            .iter_contents()
            .map(|(h, _)| (*h, large))
            .collect();
        dist.insert(source, 0);

        let mut visited: HashSet<Hex> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<(i64, Hex)>> = BinaryHeap::new();
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if visited.contains(&u) {
                continue;
            }
            if d > cost_limit {
                debug!(hex = %u, dist = d, cost_limit, "dijkstra stopping early at cost limit");
                break;
            }
            if d > dist.get(&u).copied().unwrap_or(large) {
                continue;
            }
            visited.insert(u);

            for dir in evaluator.valid_neighbours(u) {
                let v = u.neighbour(dir);
                let candidate = d + evaluator.cost(u, dir);
                if candidate < dist.get(&v).copied().unwrap_or(large) {
                    dist.insert(v, candidate);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        dist
    }
}
