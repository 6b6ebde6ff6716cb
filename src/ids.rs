//! The id generator collaborator (see `spec.md` §6, External Interfaces).
//!
//! The core never invents ids itself; it only asks an injected generator
//! for one at the two points where it constructs features on the
//! caller's behalf (`HexMap::fill_with_terrain`, `EdgeMap::append_chain`).
//! Ownership of the generator belongs to the caller — the map never
//! stores one (`spec.md` §9, *Singletons*).

use crate::feature::FeatureKind;

/// Produces opaque, process-unique id strings for newly constructed
/// features.
///
/// `name` is the human name the feature will carry; `kind` is Terrain or
/// Structure. Implementations are free to ignore both and hand back a
/// uuid, a counter, or anything else the host application uses to label
/// objects — the core treats the result as an opaque string.
pub trait IdGenerator {
    fn fresh_id(&mut self, name: &str, kind: FeatureKind) -> String;
}

/// A trivial counter-based generator, useful for tests and small tools
/// that don't need globally unique ids. Not used by the core itself.
#[derive(Debug, Default, Clone)]
pub struct CountingIdGenerator {
    next: u64,
}

impl CountingIdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for CountingIdGenerator {
    fn fresh_id(&mut self, name: &str, kind: FeatureKind) -> String {
        let id = self.next;
        self.next += 1;
        format!("{kind:?}:{name}:{id}")
    }
}
