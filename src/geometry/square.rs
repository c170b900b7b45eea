//! Board square addressing and algebraic-notation conversion.
//!
//! Squares use reverse-rank indexing: rank index 0 is the chess rank 8 and
//! rank index 7 is the chess rank 1, while file index 0 is the "a" file. So
//! "e4" is `Square { rank: 4, file: 4 }` and "a1" is `Square { rank: 7, file: 0 }`.

use std::fmt;
use std::ops::{Add, Sub};

use crate::errors::Errors;
use crate::geometry::vector::Vector;

/// A rank/file pair addressing one board square.
///
/// Coordinate arithmetic may produce squares outside the 8x8 grid; that is
/// not an error but an expected outcome of edge-square and sliding-piece
/// computations, filtered with [`Square::is_in_board`]. Addressing the board
/// grid with an out-of-bounds square is the caller's defect and panics there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    /// Parse a two-character algebraic square (for example: "e4").
    pub fn from_notation(notation: &str) -> Result<Square, Errors> {
        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return Err(Errors::InvalidNotation(notation.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(Errors::InvalidNotation(notation.to_owned()));
        }

        Ok(Square::new((b'8' - rank) as i8, (file - b'a') as i8))
    }

    /// Render this square in algebraic notation. Total inverse of
    /// [`Square::from_notation`] for in-bounds squares.
    pub fn to_notation(self) -> String {
        debug_assert!(
            Square::is_in_board(self),
            "cannot render out-of-bounds square {self:?}"
        );
        let file_char = char::from(b'a' + self.file as u8);
        let rank_char = char::from(b'8' - self.rank as u8);
        format!("{file_char}{rank_char}")
    }

    /// Bounds predicate with the exact shape of the injectable move filter:
    /// movement generation takes any `fn(Square) -> bool` and callers may
    /// substitute stricter filters (occupancy, threat) without touching the
    /// pattern code.
    #[inline]
    pub fn is_in_board(square: Square) -> bool {
        (0..8).contains(&square.rank) && (0..8).contains(&square.file)
    }
}

impl Add<Vector> for Square {
    type Output = Square;

    #[inline]
    fn add(self, rhs: Vector) -> Square {
        Square::new(self.rank + rhs.d_rank, self.file + rhs.d_file)
    }
}

impl Sub for Square {
    type Output = Vector;

    /// The displacement that carries `rhs` onto `self`.
    #[inline]
    fn sub(self, rhs: Square) -> Vector {
        Vector::new(self.rank - rhs.rank, self.file - rhs.file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
