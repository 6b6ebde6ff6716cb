//! Shared error type for the hex-field core.
//!
//! One enum, not one type per fallible operation: every operation in this
//! crate that can fail returns exactly one of these variants, so call
//! sites can match on a single `Result<_, HexFieldError>`.

use crate::hex::Hex;

/// Errors surfaced by the hex-field core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexFieldError {
    /// `Hex::parse` received a string that doesn't match `^-?\d+,-?\d+$`.
    BadCoordinateSyntax(String),
    /// `direction_of` was called on hexes that aren't direct neighbours.
    NotNeighbour { from: Hex, to: Hex },
    /// A direction value outside `0..6` was supplied.
    BadDirection(i32),
    /// An append or lookup targeted a hex that isn't in the map.
    NoSuchHex(Hex),
    /// Attempted to add a second Terrain feature to a hex or edge.
    DuplicateTerrain,
    /// A catalog or id lookup found nothing under the given name/id.
    NotFound(String),
}

impl std::fmt::Display for HexFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadCoordinateSyntax(s) => {
                write!(f, "'{s}' is not a valid hex coordinate (expected \"q,r\")")
            }
            Self::NotNeighbour { from, to } => {
                write!(f, "{from} and {to} are not direct neighbours")
            }
            Self::BadDirection(d) => write!(f, "direction {d} is not in 0..6"),
            Self::NoSuchHex(h) => write!(f, "hex {h} is not present in the map"),
            Self::DuplicateTerrain => {
                write!(f, "a terrain feature already occupies this hex or edge")
            }
            Self::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}
