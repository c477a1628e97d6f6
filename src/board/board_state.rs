//! Core mutable board-state representation.
//!
//! `Board` is the central model for the engine core. It stores the 128-slot
//! 0x88 piece array, the per-color king-location cache, castling rights,
//! the en-passant target, the move clocks, and the `SetUp`/`FEN` header
//! metadata kept in sync with the serialized position.

use std::collections::BTreeMap;

use crate::board::chess_rules::STARTING_POSITION_FEN;
use crate::board::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::fen_validator::FenError;

/// Sparse 0x88 board plus the auxiliary game state carried by a FEN.
///
/// One caller-owned value; every operation mutates through an explicit
/// reference and there is no shared or static instance. Concurrent
/// consumers snapshot by cloning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece array. Only indices satisfying `index & 0x88 == 0` are ever
    /// populated; the remaining slots are off-board padding.
    pub cells: [Option<Piece>; 128],

    /// Cached king location per color, `None` while that king is absent.
    pub king_square: [Option<Square>; 2],

    /// Per-color mask over `CASTLE_KINGSIDE` / `CASTLE_QUEENSIDE`. Taken
    /// on trust from the FEN source, independent of rook placement.
    pub castling_rights: [CastlingRights; 2],

    pub en_passant_square: Option<Square>,

    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub side_to_move: Color,

    /// `SetUp`/`FEN` tag pair, present exactly while the position differs
    /// from the standard start. Export-format metadata only.
    pub setup_header: BTreeMap<String, String>,
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self {
            cells: [None; 128],
            king_square: [None; 2],
            castling_rights: [0; 2],
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            side_to_move: Color::White,
            setup_header: BTreeMap::new(),
        };
        board.update_setup();
        board
    }
}

impl Board {
    /// Empty board: no pieces, no rights, white to move, clocks reset.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Board holding the standard starting position.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    /// Replace the whole state with the position described by `fen`.
    ///
    /// Validation happens before any mutation: on error the board is left
    /// byte-for-byte unchanged.
    pub fn load(&mut self, fen: &str) -> Result<(), FenError> {
        *self = parse_fen(fen)?;
        Ok(())
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Reset every field to the empty-board defaults. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Place `piece` on the named square.
    ///
    /// Returns `false` without mutating anything when the square name does
    /// not resolve, or when the piece is a king and that color's king is
    /// already cached on a different square.
    pub fn put(&mut self, piece: Piece, square: &str) -> bool {
        let Ok(index) = algebraic_to_square(square) else {
            return false;
        };

        if piece.kind == PieceKind::King {
            if let Some(existing) = self.king_square[piece.color.index()] {
                if existing != index {
                    return false;
                }
            }
        }

        self.cells[index as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_square[piece.color.index()] = Some(index);
        }

        self.update_setup();
        true
    }

    /// Piece on the named square, or `None` for an empty square or an
    /// unresolvable name.
    #[inline]
    pub fn get(&self, square: &str) -> Option<Piece> {
        let index = algebraic_to_square(square).ok()?;
        self.cells[index as usize]
    }

    /// Clear and return the piece on the named square. Removing a king
    /// resets that color's cached king location.
    pub fn remove(&mut self, square: &str) -> Option<Piece> {
        let index = algebraic_to_square(square).ok()?;
        let removed = self.cells[index as usize].take();

        if let Some(piece) = removed {
            if piece.kind == PieceKind::King {
                self.king_square[piece.color.index()] = None;
            }
        }

        self.update_setup();
        removed
    }

    /// Re-derive the `SetUp`/`FEN` header metadata from the current
    /// position. Called after every mutation so the header observable
    /// through the struct always matches the serialized state.
    pub fn update_setup(&mut self) {
        let fen = generate_fen(self);

        self.setup_header.clear();
        if fen != STARTING_POSITION_FEN {
            self.setup_header.insert("SetUp".to_owned(), "1".to_owned());
            self.setup_header.insert("FEN".to_owned(), fen);
        }
    }
}
