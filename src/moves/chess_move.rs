//! Square-pair moves and move-text parsing.
//!
//! Plain moves are written in long algebraic form, a source square followed
//! by a target square ("e2e4"). Castling text is delegated to the castle
//! component's own parser.

use std::fmt;

use crate::board::board::Board;
use crate::errors::Errors;
use crate::geometry::square::Square;
use crate::moves::castle::Castle;
use crate::pieces::piece::{Color, PieceId, PieceKind};

/// A transient move record: the acting piece and its source and target
/// squares. Built from notation or directly, tested for pseudo-legality,
/// applied, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// What a piece of move text parses into.
#[derive(Debug, Clone)]
pub enum PlayerMove {
    Plain(Move),
    Castle(Castle),
}

impl Move {
    pub fn new(piece: PieceId, from: Square, to: Square) -> Self {
        Self { piece, from, to }
    }

    /// Parse move text for `side` against `board`.
    ///
    /// Castling-shaped text is handed to [`Castle::read`]; everything else
    /// must be a 4-character square pair whose source square is occupied.
    /// Malformed text and an empty source square are both
    /// [`Errors::InvalidNotation`].
    pub fn parse(text: &str, board: &Board, side: Color) -> Result<PlayerMove, Errors> {
        if let Some(king) = king_of(board, side) {
            if let Some(castle) = Castle::read(text, board, king) {
                return Ok(PlayerMove::Castle(castle));
            }
        }

        let (from_text, to_text) = match (text.get(0..2), text.get(2..4)) {
            (Some(from), Some(to)) if text.len() == 4 => (from, to),
            _ => return Err(Errors::InvalidNotation(text.to_owned())),
        };

        let from = Square::from_notation(from_text)?;
        let to = Square::from_notation(to_text)?;
        let piece = board
            .piece_id_at(from)
            .ok_or_else(|| Errors::InvalidNotation(text.to_owned()))?;

        Ok(PlayerMove::Plain(Move::new(piece, from, to)))
    }

    /// Pseudo-legality: the target belongs to the acting piece's move set
    /// under the plain bounds filter. Occupancy blocking and self-check
    /// avoidance are the surrounding rules layer's concern; it injects a
    /// stricter filter into `legal_moves` instead of changing this test.
    pub fn is_legal(&self, board: &Board) -> bool {
        board
            .piece(self.piece)
            .legal_moves(self.from, Square::is_in_board)
            .contains(&self.to)
    }

    /// Carry out the relocation, returning any displaced piece.
    ///
    /// Legality must have been established first; this delegates straight to
    /// the board's raw relocation primitive. Toggling the actor's `has_moved`
    /// is left to the caller's commit step so legality testing stays free of
    /// side effects.
    pub fn apply(&self, board: &mut Board) -> Option<PieceId> {
        board.simulate_move(self.piece, self.to)
    }

    /// Long algebraic notation for this move.
    pub fn notation(&self) -> String {
        format!("{}{}", self.from.to_notation(), self.to.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

impl PartialEq for PlayerMove {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PlayerMove::Plain(a), PlayerMove::Plain(b)) => a == b,
            (PlayerMove::Castle(a), PlayerMove::Castle(b)) => {
                a.king == b.king && a.target == b.target
            }
            _ => false,
        }
    }
}

/// Parse, legality-check, and carry out one piece of move text for `side`.
///
/// The board is untouched unless the move is accepted: legality is evaluated
/// in full before the relocation primitive runs, so a rejected move never
/// leaves the board partially mutated. `clear` is the predicate handed to the
/// king's castling capability; plain moves ignore it. A castle additionally
/// requires the side's unmoved rook on its home square — anything else there
/// (or nothing) rejects the move. Returns the displaced piece, if any.
/// Committing `has_moved` (and forfeiting castle pairs) stays with the
/// caller, as with [`Move::apply`].
pub fn attempt_move<F>(
    text: &str,
    board: &mut Board,
    side: Color,
    clear: F,
) -> Result<Option<PieceId>, Errors>
where
    F: Fn(Square) -> bool,
{
    match Move::parse(text, board, side)? {
        PlayerMove::Plain(mv) => {
            if !mv.is_legal(board) {
                return Err(Errors::IllegalMove(text.to_owned()));
            }
            Ok(mv.apply(board))
        }
        PlayerMove::Castle(castle) => {
            if !castle.is_legal(board, &clear) {
                return Err(Errors::IllegalMove(text.to_owned()));
            }

            let color = board.piece(castle.king).color;
            let rook_home = Square::new(color.home_rank(), castle.side().rook_home_file());
            let rook = board
                .piece_id_at(rook_home)
                .filter(|&id| {
                    let piece = board.piece(id);
                    piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
                })
                .ok_or_else(|| Errors::IllegalMove(text.to_owned()))?;

            board.simulate_move(castle.king, castle.castle);
            board.simulate_move(rook, castle.rook_destination());
            Ok(None)
        }
    }
}

fn king_of(board: &Board, color: Color) -> Option<PieceId> {
    (0..8)
        .flat_map(|rank| (0..8).map(move |file| Square::new(rank, file)))
        .filter_map(|square| board.piece_id_at(square))
        .find(|&id| {
            let piece = board.piece(id);
            piece.kind == PieceKind::King && piece.color == color
        })
}
