//! `Hex` and `Direction`, the two value types C1 is built from.

use std::fmt;

use crate::error::HexFieldError;

/// A cell of the board, identified by axial coordinates `(q, r)`.
///
/// The cube coordinate `s = -q - r` is derived, never stored, so the
/// `q + r + s == 0` invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    #[must_use]
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The derived cube coordinate. `self.q + self.r + self.s() == 0` always.
    #[must_use]
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Parses the `"q,r"` form. Fails with `BadCoordinateSyntax` on anything
    /// that doesn't match `^-?\d+,-?\d+$`.
    pub fn parse(text: &str) -> Result<Self, HexFieldError> {
        let bad = || HexFieldError::BadCoordinateSyntax(text.to_string());
        let (q_str, r_str) = text.split_once(',').ok_or_else(bad)?;
        if q_str.is_empty() || r_str.is_empty() {
            return Err(bad());
        }
        let is_signed_int = |s: &str| {
            let digits = s.strip_prefix('-').unwrap_or(s);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_signed_int(q_str) || !is_signed_int(r_str) {
            return Err(bad());
        }
        let q: i32 = q_str.parse().map_err(|_| bad())?;
        let r: i32 = r_str.parse().map_err(|_| bad())?;
        Ok(Self { q, r })
    }

    /// `Hex(h.q + dq, h.r + dr)` for the direction's axial delta.
    #[must_use]
    pub fn neighbour(&self, d: Direction) -> Self {
        let (dq, dr) = d.delta();
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// One of the six neighbour directions, clockwise from north-east on a
/// pointy-top layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Direction {
    NorthEast = 0,
    East = 1,
    SouthEast = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The axial `(dq, dr)` delta for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (0, -1),
        }
    }

    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Direction {
    type Error = HexFieldError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::NorthEast),
            1 => Ok(Direction::East),
            2 => Ok(Direction::SouthEast),
            3 => Ok(Direction::SouthWest),
            4 => Ok(Direction::West),
            5 => Ok(Direction::NorthWest),
            other => Err(HexFieldError::BadDirection(other)),
        }
    }
}
