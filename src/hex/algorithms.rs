//! Free functions over `Hex`: adjacency, ordering, and the pixel
//! projections the renderer needs for consistent edge placement.

use crate::error::HexFieldError;

use super::types::{Direction, Hex};

/// The direction from `from` to `to`, if they're direct neighbours.
pub fn direction_of(from: Hex, to: Hex) -> Result<Direction, HexFieldError> {
    let delta = (to.q - from.q, to.r - from.r);
    Direction::ALL
        .into_iter()
        .find(|d| d.delta() == delta)
        .ok_or(HexFieldError::NotNeighbour { from, to })
}

/// The pair `(h1, h2)` sorted lexicographically by `(q, r)`.
#[must_use]
pub fn ordered_pair(h1: Hex, h2: Hex) -> (Hex, Hex) {
    if (h1.q, h1.r) <= (h2.q, h2.r) {
        (h1, h2)
    } else {
        (h2, h1)
    }
}

/// Pointy-top pixel centre of `h` at hex `size`.
#[must_use]
pub fn pixel_center(h: Hex, size: f64) -> (f64, f64) {
    let q = f64::from(h.q);
    let r = f64::from(h.r);
    let x = size * (3f64.sqrt() * q + 3f64.sqrt() / 2.0 * r);
    let y = size * 1.5 * r;
    (x, y)
}

/// The six corner points of `h` at hex `size`, starting at `-90°` and
/// proceeding clockwise in `60°` steps.
#[must_use]
pub fn corners(h: Hex, size: f64) -> [(f64, f64); 6] {
    let (cx, cy) = pixel_center(h, size);
    let mut out = [(0.0, 0.0); 6];
    for (k, slot) in out.iter_mut().enumerate() {
        let angle = (60.0 * k as f64 - 90.0).to_radians();
        *slot = (cx + size * angle.cos(), cy + size * angle.sin());
    }
    out
}

/// The midpoint of each consecutive corner pair, indexed so that entry `d`
/// is the centre of `edge_by_direction(h, d)`.
#[must_use]
pub fn edge_centers(h: Hex, size: f64) -> [(f64, f64); 6] {
    let c = corners(h, size);
    let mut out = [(0.0, 0.0); 6];
    for d in 0..6 {
        let a = c[d];
        let b = c[(d + 1) % 6];
        out[d] = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    }
    out
}
