//! Engine-wide tunables.
//!
//! The core takes its configuration as a plain value rather than reading
//! it from disk — loading belongs to the host application, not this
//! crate (see `spec.md` non-goals). `EngineConfig::default()` reproduces
//! the spec's hard-coded constants exactly, so omitting configuration
//! changes nothing.

use serde::{Deserialize, Serialize};

/// Movement cost assigned to a feature whose catalog entry has no
/// `movement_cost` attribute.
pub const DEFAULT_LARGE_COST: i64 = 10_000;

/// Tunable constants consumed by the move evaluator and reachability
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Movement cost substituted when a feature's catalog entry is
    /// missing `movement_cost`. Spec calls this `LARGE`.
    pub large_cost: i64,
    /// Cost budget used by `ReachabilityEngine::dijkstra` when the
    /// caller doesn't supply one explicitly.
    pub default_cost_limit: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            large_cost: DEFAULT_LARGE_COST,
            default_cost_limit: DEFAULT_LARGE_COST,
        }
    }
}
