//! Standard starting configuration.

use crate::board::board::Board;
use crate::geometry::square::Square;
use crate::moves::castle::CastleBook;
use crate::pieces::piece::{Color, Piece, PieceKind};

/// Back-rank piece order, a-file through h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with all 32 pieces at their standard starting squares.
    pub fn new_game() -> Board {
        let mut board = Board::new();

        for color in [Color::White, Color::Black] {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                board.place(
                    Square::new(color.home_rank(), file as i8),
                    Piece::new(kind, color),
                );
                board.place(
                    Square::new(color.pawn_rank(), file as i8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }

        board
    }
}

/// A standard new game: the starting board plus the four registered castle
/// pairs (white/black, king-side/queen-side).
pub fn standard_match() -> (Board, CastleBook) {
    let board = Board::new_game();
    let castles = CastleBook::standard(&board);
    (board, castles)
}
