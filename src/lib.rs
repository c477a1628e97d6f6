//! Crate root module declarations for the Quince Chess engine project.
//!
//! This file exposes the board-state core (the 0x88 board, FEN validation
//! and interchange, and the static movement/attack tables) so future
//! move-generation, search, and protocol layers can import stable module
//! paths.

pub mod board {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod tables {
    pub mod offsets;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod fen_validator;
    pub mod render_board;
}
