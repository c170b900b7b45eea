//! Square-addressable piece storage.
//!
//! The board owns every piece in an arena (`Vec<Piece>`); grid slots hold
//! arena ids, and each piece records its own square as a plain value. Every
//! mutator keeps slot and back-reference consistent in both directions, so
//! callers never reach into the grid directly. Captured pieces stay in the
//! arena with a cleared back-reference, so a caller holding the id keeps a
//! valid handle.

use crate::errors::Errors;
use crate::geometry::square::Square;
use crate::pieces::piece::{Piece, PieceId};

/// An 8x8 grid of optional piece slots over a piece arena.
///
/// The board lives for a full match and is mutated only through the addressed
/// operations below. Iteration is a live view: mutating the board while an
/// iterator from [`Board::pieces_on_board`] is alive is a caller error.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: [[Option<PieceId>; 8]; 8],
}

impl Board {
    /// An empty board with no pieces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid coordinates for an in-bounds square. Addressing the grid with an
    /// out-of-bounds square is a defect in the caller and fails fast.
    fn index(square: Square) -> (usize, usize) {
        assert!(
            Square::is_in_board(square),
            "board addressed with out-of-bounds square {square:?}"
        );
        (square.rank as usize, square.file as usize)
    }

    /// Place `piece` on `square`, returning its arena id.
    ///
    /// An existing occupant is evicted first (back-reference cleared, kept in
    /// the arena), so no piece ever leaks out of sync.
    pub fn place(&mut self, square: Square, mut piece: Piece) -> PieceId {
        let (rank, file) = Self::index(square);
        if let Some(evicted) = self.grid[rank][file].take() {
            self.pieces[evicted.0].square = None;
        }

        let id = PieceId(self.pieces.len());
        piece.square = Some(square);
        self.pieces.push(piece);
        self.grid[rank][file] = Some(id);
        id
    }

    /// The piece behind an id. Ids are only minted by this board; a foreign
    /// id is a defect and panics.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Mutable access to a piece, e.g. for committing `has_moved`.
    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    /// Id of the occupant of `square`, if any.
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        let (rank, file) = Self::index(square);
        self.grid[rank][file]
    }

    /// The occupant of `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece_id_at(square).map(|id| {
            let piece = &self.pieces[id.0];
            debug_assert_eq!(
                piece.square,
                Some(square),
                "slot and back-reference desynchronized at {square:?}"
            );
            piece
        })
    }

    /// The occupant of the square written in algebraic notation.
    pub fn at(&self, notation: &str) -> Result<Option<&Piece>, Errors> {
        let square = Square::from_notation(notation)?;
        Ok(self.piece_at(square))
    }

    /// Empty `square`, returning the removed occupant's id. The occupant's
    /// back-reference is cleared; the piece stays in the arena. No-op on an
    /// already-empty square.
    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        let (rank, file) = Self::index(square);
        let removed = self.grid[rank][file].take();
        if let Some(id) = removed {
            self.pieces[id.0].square = None;
        }
        removed
    }

    /// Whether the piece behind `id` currently occupies some slot.
    /// Identity-based: two pieces of equal kind and color are distinct ids.
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.get(id.0).is_some_and(|piece| piece.square.is_some())
    }

    /// All occupants in rank-major, file-ascending order. Lazy and
    /// restartable: each call re-scans the grid.
    pub fn pieces_on_board(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        (0..8).flat_map(move |rank| {
            (0..8).filter_map(move |file| {
                let square = Square::new(rank, file);
                self.piece_at(square).map(|piece| (square, piece))
            })
        })
    }

    /// Relocate the piece behind `id` to `target` unconditionally, returning
    /// the id of any displaced occupant.
    ///
    /// This is a raw relocation primitive: no legality is consulted and
    /// `has_moved` is not touched, so the move/castle layer can test legality
    /// without mutating side effects and commit separately. Calling it for an
    /// off-board piece is a defect.
    pub fn simulate_move(&mut self, id: PieceId, target: Square) -> Option<PieceId> {
        let (to_rank, to_file) = Self::index(target);
        let from = self.pieces[id.0]
            .square
            .unwrap_or_else(|| panic!("simulate_move on off-board piece {id:?}"));

        let displaced = self.grid[to_rank][to_file].take().filter(|&other| other != id);
        if let Some(other) = displaced {
            self.pieces[other.0].square = None;
        }

        let (from_rank, from_file) = Self::index(from);
        self.grid[from_rank][from_file] = None;
        self.grid[to_rank][to_file] = Some(id);
        self.pieces[id.0].square = Some(target);
        displaced
    }
}
