//! Piece records and the per-kind capability dispatch.
//!
//! A `Piece` is a plain value record owned by the board's arena; its identity
//! is the [`PieceId`] handed out when it is placed, never its kind/color pair.
//! The `square` field is the back-reference to its board slot and is mutated
//! only by board operations.

use std::collections::HashSet;

use crate::geometry::square::Square;
use crate::movement::bishop_moves::bishop_moves;
use crate::movement::king_moves::king_moves;
use crate::movement::knight_moves::knight_moves;
use crate::movement::pawn_moves::pawn_moves;
use crate::movement::queen_moves::queen_moves;
use crate::movement::rook_moves::rook_moves;

/// Side to move / piece orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of "forward" for this color under reverse-rank indexing
    /// (White advances toward rank index 0).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank index of this color's back rank.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank index of this color's pawn starting rank.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Closed set of piece kinds; capability dispatch is an exhaustive match, so
/// adding a kind forces every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Arena index identifying one piece for the lifetime of its board.
///
/// Two pieces of equal kind and color are still distinct ids, which is what
/// containment and move records compare by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub usize);

/// One chess piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Back-reference to the board slot currently holding this piece; `None`
    /// while unplaced or captured.
    pub square: Option<Square>,
    /// Set true exactly once, when a move is committed through this piece.
    pub has_moved: bool,
}

impl Piece {
    /// Create an unplaced piece, ready to be handed to a board.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            square: None,
            has_moved: false,
        }
    }

    /// Pseudo-legal destinations from `from`, pruned by `filter`.
    ///
    /// Pure: no board occupancy, blocking, or check rules are consulted.
    /// Callers layer those by injecting a stricter filter than
    /// [`Square::is_in_board`]. Squares rejected by the filter are silently
    /// excluded and an empty set is a valid result.
    pub fn legal_moves<F>(&self, from: Square, filter: F) -> HashSet<Square>
    where
        F: Fn(Square) -> bool,
    {
        match self.kind {
            PieceKind::Pawn => pawn_moves(self.color, from, &filter),
            PieceKind::Knight => knight_moves(from, &filter),
            PieceKind::Bishop => bishop_moves(from, &filter),
            PieceKind::Rook => rook_moves(from, &filter),
            PieceKind::Queen => queen_moves(from, &filter),
            PieceKind::King => king_moves(from, &filter),
        }
    }

    /// King capability backing the castle component: true iff this king has
    /// never moved and `clear` accepts both the destination and the transit
    /// square it passes over. `clear` is supplied by the surrounding game
    /// layer and is where check, threat, and obstruction rules live.
    pub fn castleable<F>(&self, target: Square, clear: F) -> bool
    where
        F: Fn(Square) -> bool,
    {
        assert_eq!(self.kind, PieceKind::King, "castleable is a king capability");

        let from = match self.square {
            Some(square) => square,
            None => return false,
        };
        if self.has_moved {
            return false;
        }

        let middle = from + (target - from) / 2;
        clear(target) && clear(middle)
    }
}
