//! Twelve-rule FEN validator.
//!
//! Checks a Forsyth-Edwards Notation string field by field before any
//! board mutation happens. Each failure mode carries a stable numeric
//! code that callers (and downstream tooling) branch on, so the rule
//! order and numbering are an external contract.

use thiserror::Error;

use crate::board::chess_rules::PIECE_SYMBOLS;

/// Validation failure for a FEN string.
///
/// The discriminants' numeric codes (1 through 11, via [`FenError::code`])
/// and the `Display` messages are stable; a fully valid FEN corresponds
/// to code 0 ("No errors.") and is reported as `Ok(())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN string must contain six space-delimited fields.")]
    FieldCount,
    #[error("6th field (move number) must be a positive integer.")]
    FullmoveNumber,
    #[error("5th field (half move counter) must be a non-negative integer.")]
    HalfmoveClock,
    #[error("4th field (en-passant square) is invalid.")]
    EnPassantSquare,
    #[error("3rd field (castling availability) is invalid.")]
    CastlingAvailability,
    #[error("2nd field (side to move) is invalid.")]
    SideToMove,
    #[error("1st field (piece positions) does not contain 8 '/'-delimited rows.")]
    RowCount,
    #[error("1st field (piece positions) is invalid [consecutive numbers].")]
    ConsecutiveNumbers,
    #[error("1st field (piece positions) is invalid [invalid piece].")]
    InvalidPiece,
    #[error("1st field (piece positions) is invalid [row too large].")]
    RowTooLarge,
    #[error("Illegal en-passant square")]
    IllegalEnPassant,
}

impl FenError {
    /// Stable numeric error code.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            FenError::FieldCount => 1,
            FenError::FullmoveNumber => 2,
            FenError::HalfmoveClock => 3,
            FenError::EnPassantSquare => 4,
            FenError::CastlingAvailability => 5,
            FenError::SideToMove => 6,
            FenError::RowCount => 7,
            FenError::ConsecutiveNumbers => 8,
            FenError::InvalidPiece => 9,
            FenError::RowTooLarge => 10,
            FenError::IllegalEnPassant => 11,
        }
    }
}

/// Validate a FEN string without touching any board state.
///
/// The rules run in a fixed order and short-circuit on the first failure:
///
/// 1. exactly six whitespace-delimited fields,
/// 2. positive fullmove number,
/// 3. non-negative halfmove clock,
/// 4. en-passant field is `-` or `[a-h][36]`,
/// 5. castling field is `-` or an in-order subset of `KQkq`,
/// 6. side to move is `w` or `b`,
/// 7. exactly eight `/`-delimited placement rows,
/// 8. per row: no consecutive digits, only recognized piece letters,
///    and digits plus letters summing to exactly eight files,
/// 9. the en-passant rank may not pair rank 3 with `w` or rank 6 with `b`.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let tokens: Vec<&str> = fen.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(FenError::FieldCount);
    }

    match parse_counter(tokens[5]) {
        Some(fullmove_number) if fullmove_number > 0 => {}
        _ => return Err(FenError::FullmoveNumber),
    }

    if parse_counter(tokens[4]).is_none() {
        return Err(FenError::HalfmoveClock);
    }

    if !is_valid_en_passant_field(tokens[3]) {
        return Err(FenError::EnPassantSquare);
    }

    if !is_valid_castling_field(tokens[2]) {
        return Err(FenError::CastlingAvailability);
    }

    if !matches!(tokens[1], "w" | "b") {
        return Err(FenError::SideToMove);
    }

    let rows: Vec<&str> = tokens[0].split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount);
    }

    for row in rows {
        validate_placement_row(row)?;
    }

    validate_en_passant_side(tokens[3], tokens[1])
}

/// Strictly-decimal counter parse; the `u16` width matches the board's
/// clock fields so a validated FEN can never overflow the loader.
fn parse_counter(field: &str) -> Option<u16> {
    if !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse::<u16>().ok()
}

fn is_valid_en_passant_field(field: &str) -> bool {
    if field == "-" {
        return true;
    }

    let bytes = field.as_bytes();
    bytes.len() == 2
        && (b'a'..=b'h').contains(&bytes[0])
        && (bytes[1] == b'3' || bytes[1] == b'6')
}

/// `-`, or a non-empty subsequence of `KQkq` in that order with no
/// repeats (the grammar `KQ?k?q?|Qk?q?|kq?|q`).
fn is_valid_castling_field(field: &str) -> bool {
    if field == "-" {
        return true;
    }
    if field.is_empty() {
        return false;
    }

    let mut remaining: &[u8] = b"KQkq";
    for &byte in field.as_bytes() {
        match remaining.iter().position(|&allowed| allowed == byte) {
            Some(position) => remaining = &remaining[position + 1..],
            None => return false,
        }
    }

    true
}

fn validate_placement_row(row: &str) -> Result<(), FenError> {
    let mut field_sum = 0u32;
    let mut previous_was_digit = false;

    for ch in row.chars() {
        if let Some(digit) = ch.to_digit(10) {
            if previous_was_digit {
                return Err(FenError::ConsecutiveNumbers);
            }
            field_sum += digit;
            previous_was_digit = true;
        } else {
            if !PIECE_SYMBOLS.contains(ch) {
                return Err(FenError::InvalidPiece);
            }
            field_sum += 1;
            previous_was_digit = false;
        }
    }

    if field_sum != 8 {
        return Err(FenError::RowTooLarge);
    }

    Ok(())
}

// Cross-field rule: rank 3 is rejected while white is to move and
// rank 6 while black is to move.
fn validate_en_passant_side(en_passant: &str, side: &str) -> Result<(), FenError> {
    if en_passant == "-" {
        return Ok(());
    }

    let rank_digit = en_passant.as_bytes()[1];
    if (rank_digit == b'3' && side == "w") || (rank_digit == b'6' && side == "b") {
        return Err(FenError::IllegalEnPassant);
    }

    Ok(())
}
