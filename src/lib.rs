//! Crate root module declarations for the mailbox chess core.
//!
//! This file exposes the coordinate algebra, piece capability model, board
//! container, and move/castle layer so game loops, renderers, and rule engines
//! can import stable module paths. Rendering, interactive play, and full
//! check/checkmate detection are external consumers of this crate.

pub mod errors;

pub mod geometry {
    pub mod square;
    pub mod vector;
}

pub mod pieces {
    pub mod piece;
}

pub mod movement {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod board {
    pub mod board;
    pub mod setup;
}

pub mod moves {
    pub mod castle;
    pub mod chess_move;
}
