//! Rook movement pattern.
//!
//! Sliding pieces walk each direction ray until the supplied filter rejects a
//! square. Occupancy blocking is deliberately not applied here: callers that
//! want it inject a stricter filter instead of the plain bounds predicate.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::geometry::vector::Vector;

/// Orthogonal unit directions.
pub const ROOK_DIRS: [Vector; 4] = [
    Vector::new(-1, 0),
    Vector::new(1, 0),
    Vector::new(0, -1),
    Vector::new(0, 1),
];

/// Pseudo-legal rook destinations from `from`, pruned by `filter`.
pub fn rook_moves(from: Square, filter: impl Fn(Square) -> bool) -> HashSet<Square> {
    slide(from, &ROOK_DIRS, filter)
}

/// Walk every ray in `dirs`, collecting squares until `filter` rejects one.
pub(crate) fn slide(
    from: Square,
    dirs: &[Vector],
    filter: impl Fn(Square) -> bool,
) -> HashSet<Square> {
    let mut out = HashSet::new();
    for &dir in dirs {
        let mut square = from + dir;
        while filter(square) {
            out.insert(square);
            square = square + dir;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::geometry::square::Square;

    #[test]
    fn rook_on_h1_sweeps_its_file_and_rank() {
        let h1 = Square::from_notation("h1").expect("h1 should parse");
        let expected: std::collections::HashSet<Square> = [
            "h2", "h3", "h4", "h5", "h6", "h7", "h8", "g1", "f1", "e1", "d1", "c1", "b1", "a1",
        ]
        .iter()
        .map(|n| Square::from_notation(n).expect("test square should parse"))
        .collect();

        assert_eq!(rook_moves(h1, Square::is_in_board), expected);
    }

    #[test]
    fn ray_walking_stops_at_a_rejecting_filter() {
        // Reject the e-file entirely: rays crossing it must stop there.
        let a4 = Square::from_notation("a4").expect("a4 should parse");
        let moves = rook_moves(a4, |sq| Square::is_in_board(sq) && sq.file != 4);

        let d4 = Square::from_notation("d4").expect("d4 should parse");
        let f4 = Square::from_notation("f4").expect("f4 should parse");
        assert!(moves.contains(&d4));
        assert!(!moves.contains(&f4));
    }
}
