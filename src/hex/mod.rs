//! Hex algebra (C1): coordinates, directions, and the neighbour/ordering/
//! pixel-projection helpers everything else in the crate is built on.
//!
//! Pure: nothing here touches a map, a catalog, or an id generator.

mod algorithms;
mod types;


pub use algorithms::{corners, direction_of, edge_centers, ordered_pair, pixel_center};
pub use types::{Direction, Hex};

use crate::error::HexFieldError;

impl Hex {
    pub fn direction_of(self, to: Hex) -> Result<Direction, HexFieldError> {
        algorithms::direction_of(self, to)
    }

    #[must_use]
    pub fn ordered_pair(self, other: Hex) -> (Hex, Hex) {
        algorithms::ordered_pair(self, other)
    }

    #[must_use]
    pub fn pixel_center(self, size: f64) -> (f64, f64) {
        algorithms::pixel_center(self, size)
    }

    #[must_use]
    pub fn corners(self, size: f64) -> [(f64, f64); 6] {
        algorithms::corners(self, size)
    }

    #[must_use]
    pub fn edge_centers(self, size: f64) -> [(f64, f64); 6] {
        algorithms::edge_centers(self, size)
    }
}
