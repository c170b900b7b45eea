//! Queen movement pattern: the union of the rook and bishop rays.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::movement::bishop_moves::bishop_moves;
use crate::movement::rook_moves::rook_moves;

/// Pseudo-legal queen destinations from `from`, pruned by `filter`.
pub fn queen_moves(from: Square, filter: impl Fn(Square) -> bool) -> HashSet<Square> {
    let mut out = rook_moves(from, &filter);
    out.extend(bishop_moves(from, &filter));
    out
}
