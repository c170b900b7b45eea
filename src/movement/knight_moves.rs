//! Knight movement pattern.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::geometry::vector::Vector;

/// The eight fixed L-shaped knight offsets.
pub const KNIGHT_DELTAS: [Vector; 8] = [
    Vector::new(-2, -1),
    Vector::new(-2, 1),
    Vector::new(-1, -2),
    Vector::new(-1, 2),
    Vector::new(1, -2),
    Vector::new(1, 2),
    Vector::new(2, -1),
    Vector::new(2, 1),
];

/// Pseudo-legal knight destinations from `from`, pruned by `filter`.
pub fn knight_moves(from: Square, filter: impl Fn(Square) -> bool) -> HashSet<Square> {
    KNIGHT_DELTAS
        .iter()
        .map(|&delta| from + delta)
        .filter(|&square| filter(square))
        .collect()
}
