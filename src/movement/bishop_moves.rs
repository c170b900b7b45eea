//! Bishop movement pattern.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::geometry::vector::Vector;
use crate::movement::rook_moves::slide;

/// Diagonal unit directions.
pub const BISHOP_DIRS: [Vector; 4] = [
    Vector::new(-1, -1),
    Vector::new(-1, 1),
    Vector::new(1, -1),
    Vector::new(1, 1),
];

/// Pseudo-legal bishop destinations from `from`, pruned by `filter`.
pub fn bishop_moves(from: Square, filter: impl Fn(Square) -> bool) -> HashSet<Square> {
    slide(from, &BISHOP_DIRS, filter)
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::geometry::square::Square;

    #[test]
    fn bishop_on_f1_covers_both_diagonals() {
        let f1 = Square::from_notation("f1").expect("f1 should parse");
        let expected: std::collections::HashSet<Square> =
            ["e2", "d3", "c4", "b5", "a6", "g2", "h3"]
                .iter()
                .map(|n| Square::from_notation(n).expect("test square should parse"))
                .collect();

        assert_eq!(bishop_moves(f1, Square::is_in_board), expected);
    }
}
