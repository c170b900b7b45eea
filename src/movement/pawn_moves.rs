//! Pawn movement pattern.
//!
//! The two diagonal-forward squares carry capture intent but are not
//! capture-filtered here; occupancy and capture rules are layered by the
//! caller through the filter parameter, the same way blocking is for sliders.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::geometry::vector::Vector;
use crate::pieces::piece::Color;

/// Pseudo-legal pawn destinations from `from`, pruned by `filter`.
///
/// Forward one square always; forward two only from the color's pawn rank;
/// both forward diagonals unconditionally.
pub fn pawn_moves(color: Color, from: Square, filter: impl Fn(Square) -> bool) -> HashSet<Square> {
    let forward = color.forward();

    let mut candidates = vec![
        from + Vector::new(forward, 0),
        from + Vector::new(forward, -1),
        from + Vector::new(forward, 1),
    ];
    if from.rank == color.pawn_rank() {
        candidates.push(from + Vector::new(2 * forward, 0));
    }

    candidates.into_iter().filter(|&sq| filter(sq)).collect()
}
