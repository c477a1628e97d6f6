//! Static movement, attack, and ray tables.
//!
//! Pure data for the move generator built on top of the board core. All
//! values are defined against the 0x88 square encoding: an offset is the
//! index delta of one step, and the attack/ray tables are indexed by
//! `0x77 + from - to`. None of these constants may be renumbered
//! independently of the square layout.

use crate::board::chess_types::{
    CastlingRights, PieceKind, Square, BITS_KSIDE_CASTLE, BITS_QSIDE_CASTLE, SQUARE_A1,
    SQUARE_A8, SQUARE_H1, SQUARE_H8,
};

/// Pawn step offsets per `Color::index()`: single push, double push, and
/// the two capture diagonals.
pub const PAWN_OFFSETS: [[i8; 4]; 2] = [
    [-16, -32, -17, -15],
    [16, 32, 17, 15],
];

pub const KNIGHT_OFFSETS: [i8; 8] = [-18, -33, -31, -14, 18, 33, 31, 14];
pub const BISHOP_OFFSETS: [i8; 4] = [-17, -15, 17, 15];
pub const ROOK_OFFSETS: [i8; 4] = [-16, 1, 16, -1];
pub const QUEEN_OFFSETS: [i8; 8] = [-17, -16, -15, 1, 17, 16, 15, -1];
pub const KING_OFFSETS: [i8; 8] = [-17, -16, -15, 1, 17, 16, 15, -1];

/// Step offsets for a non-pawn piece kind. Pawns move by color and are
/// resolved through `PAWN_OFFSETS` instead.
pub const fn piece_offsets(kind: PieceKind) -> &'static [i8] {
    match kind {
        PieceKind::Pawn => &[],
        PieceKind::Knight => &KNIGHT_OFFSETS,
        PieceKind::Bishop => &BISHOP_OFFSETS,
        PieceKind::Rook => &ROOK_OFFSETS,
        PieceKind::Queen => &QUEEN_OFFSETS,
        PieceKind::King => &KING_OFFSETS,
    }
}

/// Bit position per `PieceKind::index()` into the `ATTACKS` masks.
pub const SHIFTS: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// Index into `ATTACKS`/`RAYS` for an attacker on `from` targeting `to`.
#[inline]
pub const fn attack_index(from: Square, to: Square) -> usize {
    (0x77 + from as i16 - to as i16) as usize
}

/// Which piece kinds can attack across a given square delta. Each entry
/// is a mask over `1 << SHIFTS[kind]`.
#[rustfmt::skip]
pub const ATTACKS: [u8; 239] = [
    20,  0,  0,  0,  0,  0,  0, 24,  0,  0,  0,  0,  0,  0, 20,  0,
     0, 20,  0,  0,  0,  0,  0, 24,  0,  0,  0,  0,  0, 20,  0,  0,
     0,  0, 20,  0,  0,  0,  0, 24,  0,  0,  0,  0, 20,  0,  0,  0,
     0,  0,  0, 20,  0,  0,  0, 24,  0,  0,  0, 20,  0,  0,  0,  0,
     0,  0,  0,  0, 20,  0,  0, 24,  0,  0, 20,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0, 20,  2, 24,  2, 20,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  2, 53, 56, 53,  2,  0,  0,  0,  0,  0,  0,
    24, 24, 24, 24, 24, 24, 56,  0, 56, 24, 24, 24, 24, 24, 24,  0,
     0,  0,  0,  0,  0,  2, 53, 56, 53,  2,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0, 20,  2, 24,  2, 20,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0, 20,  0,  0, 24,  0,  0, 20,  0,  0,  0,  0,  0,
     0,  0,  0, 20,  0,  0,  0, 24,  0,  0,  0, 20,  0,  0,  0,  0,
     0,  0, 20,  0,  0,  0,  0, 24,  0,  0,  0,  0, 20,  0,  0,  0,
     0, 20,  0,  0,  0,  0,  0, 24,  0,  0,  0,  0,  0, 20,  0,  0,
    20,  0,  0,  0,  0,  0,  0, 24,  0,  0,  0,  0,  0,  0, 20,
];

/// Sliding direction (one 0x88 step) from `from` toward `to`, or 0 when
/// no straight ray connects them.
#[rustfmt::skip]
pub const RAYS: [i8; 239] = [
     17,   0,   0,   0,   0,   0,   0,  16,   0,   0,   0,   0,   0,   0,  15,   0,
      0,  17,   0,   0,   0,   0,   0,  16,   0,   0,   0,   0,   0,  15,   0,   0,
      0,   0,  17,   0,   0,   0,   0,  16,   0,   0,   0,   0,  15,   0,   0,   0,
      0,   0,   0,  17,   0,   0,   0,  16,   0,   0,   0,  15,   0,   0,   0,   0,
      0,   0,   0,   0,  17,   0,   0,  16,   0,   0,  15,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,  17,   0,  16,   0,  15,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,  17,  16,  15,   0,   0,   0,   0,   0,   0,   0,
      1,   1,   1,   1,   1,   1,   1,   0,  -1,  -1,  -1,  -1,  -1,  -1,  -1,   0,
      0,   0,   0,   0,   0,   0, -15, -16, -17,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0, -15,   0, -16,   0, -17,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0, -15,   0,   0, -16,   0,   0, -17,   0,   0,   0,   0,   0,
      0,   0,   0, -15,   0,   0,   0, -16,   0,   0,   0, -17,   0,   0,   0,   0,
      0,   0, -15,   0,   0,   0,   0, -16,   0,   0,   0,   0, -17,   0,   0,   0,
      0, -15,   0,   0,   0,   0,   0, -16,   0,   0,   0,   0,   0, -17,   0,   0,
    -15,   0,   0,   0,   0,   0,   0, -16,   0,   0,   0,   0,   0,   0, -17,
];

/// Rank rows in the 0x88 layout (row 0 is rank 8).
pub const RANK_8: u8 = 0;
pub const RANK_7: u8 = 1;
pub const RANK_6: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_4: u8 = 4;
pub const RANK_3: u8 = 5;
pub const RANK_2: u8 = 6;
pub const RANK_1: u8 = 7;

/// Rook home square paired with the castle flag it guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRook {
    pub square: Square,
    pub flag: CastlingRights,
}

/// Castling rooks per `Color::index()`, queenside then kingside.
pub const CASTLING_ROOKS: [[CastlingRook; 2]; 2] = [
    [
        CastlingRook { square: SQUARE_A1, flag: BITS_QSIDE_CASTLE },
        CastlingRook { square: SQUARE_H1, flag: BITS_KSIDE_CASTLE },
    ],
    [
        CastlingRook { square: SQUARE_A8, flag: BITS_QSIDE_CASTLE },
        CastlingRook { square: SQUARE_H8, flag: BITS_KSIDE_CASTLE },
    ],
];
