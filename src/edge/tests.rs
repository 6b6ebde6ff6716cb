use super::*;
use crate::hex::{Direction, Hex};

#[test]
fn s1_edge_identity_is_symmetric_across_spawn_side() {
    let h = Hex::new(0, 0);
    let a = h.edge_by_direction(Direction::NorthEast);
    let neighbour = Hex::new(1, -1);
    let b = neighbour.edge_by_direction(Direction::SouthWest);
    assert_eq!(a, b);
}

#[test]
fn spawn_side_does_not_affect_equality() {
    let h = Hex::new(2, -2);
    let a = Edge::new(h, h.neighbour(Direction::East), Direction::East);
    let b = Edge::new(
        h.neighbour(Direction::East),
        h,
        Direction::West,
    );
    assert_eq!(a, b);
    assert_ne!(a.spawn_side(), b.spawn_side());
}

#[test]
fn endpoints_are_canonically_ordered() {
    let h1 = Hex::new(5, 5);
    let h2 = Hex::new(5, 4);
    let edge = Edge::new(h1, h2, Direction::NorthWest);
    let (low, high) = edge.endpoints();
    assert!((low.q, low.r) <= (high.q, high.r));
}

#[test]
fn contains_both_endpoints() {
    let h1 = Hex::new(0, 0);
    let h2 = h1.neighbour(Direction::East);
    let edge = Edge::new(h1, h2, Direction::East);
    assert!(edge.contains(h1));
    assert!(edge.contains(h2));
    assert!(!edge.contains(Hex::new(9, 9)));
}
