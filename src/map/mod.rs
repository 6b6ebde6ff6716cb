//! The two-layer map model (C4, C5): hex contents and edge contents,
//! both keyed off the C1/C2 value types.

mod edge_map;
mod hex_map;


pub use edge_map::EdgeMap;
pub use hex_map::HexMap;
