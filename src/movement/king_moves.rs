//! King movement pattern and castling step vectors.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::geometry::vector::Vector;
use crate::moves::castle::CastleSide;

/// The eight adjacent king offsets.
pub const KING_DELTAS: [Vector; 8] = [
    Vector::new(-1, -1),
    Vector::new(-1, 0),
    Vector::new(-1, 1),
    Vector::new(0, -1),
    Vector::new(0, 1),
    Vector::new(1, -1),
    Vector::new(1, 0),
    Vector::new(1, 1),
];

/// King-side castling step: two files toward the h-file.
pub const SHORT_CASTLE_STEP: Vector = Vector::new(0, 2);
/// Queen-side castling step: two files toward the a-file.
pub const LONG_CASTLE_STEP: Vector = Vector::new(0, -2);

/// The king's castling step for a side. File-based, so identical for both
/// colors.
#[inline]
pub const fn castle_step(side: CastleSide) -> Vector {
    match side {
        CastleSide::Short => SHORT_CASTLE_STEP,
        CastleSide::Long => LONG_CASTLE_STEP,
    }
}

/// Pseudo-legal king destinations from `from`, pruned by `filter`. Castling
/// destinations are not included here; they belong to the castle component.
pub fn king_moves(from: Square, filter: impl Fn(Square) -> bool) -> HashSet<Square> {
    KING_DELTAS
        .iter()
        .map(|&delta| from + delta)
        .filter(|&square| filter(square))
        .collect()
}
