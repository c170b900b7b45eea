//! Castling: a king/rook pairing evaluated against the five-rule contract.
//!
//! 1. The king must not have moved (the king's `has_moved` flag).
//! 2. The paired rook must not have moved (the rook's `has_moved` flag,
//!    tracked by [`CastlePair`]).
//! 3. The king must not be in check.
//! 4. The squares the king passes over must not be threatened.
//! 5. No piece of either color may stand between king and rook.
//!
//! Rules 3-5 are supplied by the surrounding game layer through the `clear`
//! predicate injected into [`Castle::is_legal`]; the castle object itself
//! never re-scans the board. Castling notation is the PGN letter form
//! ("O-O" / "O-O-O"), case-sensitive; the FIDE digit form is not accepted.

use std::fmt;

use crate::board::board::Board;
use crate::geometry::square::Square;
use crate::geometry::vector::Vector;
use crate::movement::king_moves::{castle_step, LONG_CASTLE_STEP, SHORT_CASTLE_STEP};
use crate::pieces::piece::{Color, PieceId, PieceKind};

/// King-side ("short") or queen-side ("long") castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Short,
    Long,
}

impl CastleSide {
    /// Classify a king step vector. Only the two two-file steps are castling
    /// steps; anything else is `None`.
    #[inline]
    pub fn of_step(step: Vector) -> Option<CastleSide> {
        if step == SHORT_CASTLE_STEP {
            Some(CastleSide::Short)
        } else if step == LONG_CASTLE_STEP {
            Some(CastleSide::Long)
        } else {
            None
        }
    }

    /// PGN notation for this side.
    #[inline]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Short => "O-O",
            CastleSide::Long => "O-O-O",
        }
    }

    /// File index of the paired rook's home square.
    #[inline]
    pub const fn rook_home_file(self) -> i8 {
        match self {
            CastleSide::Short => 7,
            CastleSide::Long => 0,
        }
    }
}

/// Eligibility of a registered castle pair. One-way: a pair never returns to
/// `Available` once forfeited or consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleStatus {
    Available,
    Forfeited,
}

/// A registered king/rook pairing for one color and side, with its explicit
/// eligibility state.
#[derive(Debug, Clone)]
pub struct CastlePair {
    pub color: Color,
    pub side: CastleSide,
    pub king: PieceId,
    pub rook: PieceId,
    status: CastleStatus,
}

impl CastlePair {
    pub fn new(color: Color, side: CastleSide, king: PieceId, rook: PieceId) -> Self {
        Self {
            color,
            side,
            king,
            rook,
            status: CastleStatus::Available,
        }
    }

    #[inline]
    pub fn status(&self) -> CastleStatus {
        self.status
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == CastleStatus::Available
    }

    /// Consume or forfeit this pair. Idempotent; there is no way back.
    pub fn forfeit(&mut self) {
        self.status = CastleStatus::Forfeited;
    }

    /// Forfeit the pair if its king or rook has committed a move.
    pub fn sync(&mut self, board: &Board) {
        if board.piece(self.king).has_moved || board.piece(self.rook).has_moved {
            self.forfeit();
        }
    }
}

/// The four castle pairs of a match.
#[derive(Debug, Clone, Default)]
pub struct CastleBook {
    pairs: Vec<CastlePair>,
}

impl CastleBook {
    /// Register the pairs found at the standard home squares of `board`.
    /// Squares not holding the expected unmoved king/rook simply yield no
    /// pair, so the book also works for partially-set-up test boards.
    pub fn standard(board: &Board) -> CastleBook {
        let mut pairs = Vec::with_capacity(4);

        for color in [Color::White, Color::Black] {
            let king_home = Square::new(color.home_rank(), 4);
            let king = match board.piece_id_at(king_home) {
                Some(id) if home_piece(board, id, PieceKind::King, color) => id,
                _ => continue,
            };

            for side in [CastleSide::Short, CastleSide::Long] {
                let rook_home = Square::new(color.home_rank(), side.rook_home_file());
                if let Some(rook) = board.piece_id_at(rook_home) {
                    if home_piece(board, rook, PieceKind::Rook, color) {
                        pairs.push(CastlePair::new(color, side, king, rook));
                    }
                }
            }
        }

        CastleBook { pairs }
    }

    pub fn pairs(&self) -> &[CastlePair] {
        &self.pairs
    }

    pub fn pair(&self, color: Color, side: CastleSide) -> Option<&CastlePair> {
        self.pairs
            .iter()
            .find(|pair| pair.color == color && pair.side == side)
    }

    pub fn pair_mut(&mut self, color: Color, side: CastleSide) -> Option<&mut CastlePair> {
        self.pairs
            .iter_mut()
            .find(|pair| pair.color == color && pair.side == side)
    }

    /// Forfeit every pair whose king or rook has committed a move.
    pub fn sync(&mut self, board: &Board) {
        for pair in &mut self.pairs {
            pair.sync(board);
        }
    }
}

fn home_piece(board: &Board, id: PieceId, kind: PieceKind, color: Color) -> bool {
    let piece = board.piece(id);
    piece.kind == kind && piece.color == color && !piece.has_moved
}

/// A transient castling move: constructed from a king and target square,
/// evaluated once for legality, then discarded.
#[derive(Debug, Clone)]
pub struct Castle {
    /// The acting king.
    pub king: PieceId,
    /// Square the king is asked to reach.
    pub target: Square,
    /// `target` minus the king's current square.
    pub step: Vector,
    /// The king's castling destination for this side.
    pub castle: Square,
    /// The transit square the king passes over; also where the rook lands.
    pub middle: Square,
}

impl Castle {
    /// Derive the castling squares for `king` moving to `target`.
    ///
    /// `target` must lie a castling step away from the king; any other step
    /// vector is a defect in the caller's step table and fails fast.
    pub fn new(board: &Board, king: PieceId, target: Square) -> Castle {
        let piece = board.piece(king);
        assert_eq!(piece.kind, PieceKind::King, "castle built for a non-king");
        let from = piece
            .square
            .unwrap_or_else(|| panic!("castle built for an off-board king {king:?}"));

        let step = target - from;
        let side = CastleSide::of_step(step)
            .unwrap_or_else(|| panic!("not a castling step: {step:?}"));

        Castle {
            king,
            target,
            step,
            castle: from + castle_step(side),
            middle: from + step / 2,
        }
    }

    /// Parse castling notation for `king`. Exactly "O-O" (king-side) and
    /// "O-O-O" (queen-side) match; any other text is no parse, not an error.
    pub fn read(text: &str, board: &Board, king: PieceId) -> Option<Castle> {
        let from = board.piece(king).square?;
        match text {
            "O-O" => Some(Castle::new(board, king, from + SHORT_CASTLE_STEP)),
            "O-O-O" => Some(Castle::new(board, king, from + LONG_CASTLE_STEP)),
            _ => None,
        }
    }

    /// Which side this castle is on.
    #[inline]
    pub fn side(&self) -> CastleSide {
        // The constructor only admits the two castling steps.
        CastleSide::of_step(self.step).expect("castle holds a non-castling step")
    }

    /// Where the paired rook ends up: the king's transit square.
    #[inline]
    pub fn rook_destination(&self) -> Square {
        self.middle
    }

    /// Whether this castle is still possible, delegating entirely to the
    /// king's `castleable` capability: king unmoved, and `clear` accepting
    /// the destination and transit squares. Obstruction and the rook's own
    /// `has_moved` are the caller's side of the contract (see module docs).
    pub fn is_legal<F>(&self, board: &Board, clear: F) -> bool
    where
        F: Fn(Square) -> bool,
    {
        board.piece(self.king).castleable(self.target, clear)
    }

    /// Castling notation for this move.
    pub fn notation(&self) -> &'static str {
        self.side().notation()
    }
}

impl fmt::Display for Castle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::{Castle, CastleBook, CastleSide, CastleStatus};
    use crate::board::board::Board;
    use crate::board::setup::standard_match;
    use crate::geometry::square::Square;
    use crate::pieces::piece::{Color, Piece, PieceKind};

    fn sq(notation: &str) -> Square {
        Square::from_notation(notation).expect("test square should parse")
    }

    #[test]
    fn short_castle_for_white_king_derives_g1_and_f1() {
        let mut board = Board::new();
        let king = board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));

        let castle = Castle::read("O-O", &board, king).expect("O-O should parse");

        assert_eq!(castle.castle, sq("g1"));
        assert_eq!(castle.middle, sq("f1"));
        assert_eq!(castle.rook_destination(), sq("f1"));
        assert_eq!(castle.notation(), "O-O");
    }

    #[test]
    fn long_castle_for_black_king_derives_c8_and_d8() {
        let mut board = Board::new();
        let king = board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));

        let castle = Castle::read("O-O-O", &board, king).expect("O-O-O should parse");

        assert_eq!(castle.castle, sq("c8"));
        assert_eq!(castle.middle, sq("d8"));
        assert_eq!(castle.notation(), "O-O-O");
    }

    #[test]
    fn unrecognized_castle_text_is_no_parse() {
        let mut board = Board::new();
        let king = board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));

        for text in ["0-0", "o-o", "O-O-O-O", "e1g1", ""] {
            assert!(Castle::read(text, &board, king).is_none(), "{text:?}");
        }
    }

    #[test]
    fn legality_delegates_to_the_injected_predicate() {
        let mut board = Board::new();
        let king = board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        let castle = Castle::read("O-O", &board, king).expect("O-O should parse");

        assert!(castle.is_legal(&board, |_| true));
        // A threatened transit square forbids the castle.
        let f1 = sq("f1");
        assert!(!castle.is_legal(&board, |square| square != f1));
    }

    #[test]
    fn a_moved_king_can_no_longer_castle() {
        let mut board = Board::new();
        let king = board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        let castle = Castle::read("O-O", &board, king).expect("O-O should parse");

        board.piece_mut(king).has_moved = true;
        assert!(!castle.is_legal(&board, |_| true));
    }

    #[test]
    fn pair_forfeits_once_its_rook_moves_and_never_recovers() {
        let (mut board, mut castles) = standard_match();
        let h1_rook = board
            .piece_id_at(sq("h1"))
            .expect("h1 should hold a rook in a new game");

        castles.sync(&board);
        let pair = castles
            .pair(Color::White, CastleSide::Short)
            .expect("white short pair should be registered");
        assert_eq!(pair.status(), CastleStatus::Available);

        board.piece_mut(h1_rook).has_moved = true;
        castles.sync(&board);
        let pair = castles
            .pair(Color::White, CastleSide::Short)
            .expect("white short pair should be registered");
        assert_eq!(pair.status(), CastleStatus::Forfeited);

        // The queen-side pair is untouched.
        assert!(castles
            .pair(Color::White, CastleSide::Long)
            .expect("white long pair should be registered")
            .is_available());

        // Clearing the flag again cannot resurrect the right.
        board.piece_mut(h1_rook).has_moved = false;
        castles.sync(&board);
        assert!(!castles
            .pair(Color::White, CastleSide::Short)
            .expect("white short pair should be registered")
            .is_available());
    }

    #[test]
    fn book_registration_skips_missing_pieces() {
        let mut board = Board::new();
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("h1"), Piece::new(PieceKind::Rook, Color::White));

        let castles = CastleBook::standard(&board);
        assert_eq!(castles.pairs().len(), 1);
        assert!(castles.pair(Color::White, CastleSide::Short).is_some());
        assert!(castles.pair(Color::White, CastleSide::Long).is_none());
    }
}
