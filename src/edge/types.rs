//! `Edge`, the canonical identity of a boundary between two hexes (C2).

use std::hash::{Hash, Hasher};

use crate::hex::{Direction, Hex};

/// The undirected boundary between two adjacent hexes.
///
/// Equality and hashing depend only on the canonical hex pair. The spawn
/// side — the hex and direction the edge was first produced from — is
/// carried for asset placement but never participates in identity.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    low: Hex,
    high: Hex,
    spawn_hex: Hex,
    spawn_direction: Direction,
}

impl Edge {
    /// Builds the edge between `h1` and `h2`, normalising endpoint order
    /// via `Hex::ordered_pair` while remembering `h1`/`d` as the spawn
    /// side.
    #[must_use]
    pub fn new(h1: Hex, h2: Hex, spawn_direction: Direction) -> Self {
        let (low, high) = h1.ordered_pair(h2);
        Self {
            low,
            high,
            spawn_hex: h1,
            spawn_direction,
        }
    }

    /// The canonical `(low, high)` endpoint pair, sorted by `(q, r)`.
    #[must_use]
    pub fn endpoints(&self) -> (Hex, Hex) {
        (self.low, self.high)
    }

    /// The `(hex, direction)` this edge was first produced from.
    #[must_use]
    pub fn spawn_side(&self) -> (Hex, Direction) {
        (self.spawn_hex, self.spawn_direction)
    }

    #[must_use]
    pub fn contains(&self, h: Hex) -> bool {
        self.low == h || self.high == h
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low.hash(state);
        self.high.hash(state);
    }
}

impl Hex {
    /// The edge whose endpoints are `self` and `self.neighbour(d)`,
    /// recording `(self, d)` as the spawn side.
    #[must_use]
    pub fn edge_by_direction(self, d: Direction) -> Edge {
        let neighbour = self.neighbour(d);
        Edge::new(self, neighbour, d)
    }
}
