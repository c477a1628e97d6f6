//! FEN-to-Board parser.
//!
//! Validates, then builds a fully-populated board from a Forsyth-Edwards
//! Notation string: pieces, king cache, rights, en-passant target, and
//! clocks. Invalid input never produces a partially-decoded board.

use crate::board::board_state::Board;
use crate::board::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::fen_validator::{validate_fen, FenError};

/// Build a fresh board from a FEN string.
///
/// The placement walk follows the 0x88 cursor: `/` jumps the cursor over
/// the off-board half-rank, a digit skips that many empty squares, and a
/// piece letter is placed at the cursor (uppercase = white).
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    validate_fen(fen)?;

    let tokens: Vec<&str> = fen.split_whitespace().collect();
    let mut board = Board::new_empty();

    parse_placement(tokens[0], &mut board);

    board.side_to_move = match tokens[1] {
        "w" => Color::White,
        _ => Color::Black,
    };

    if tokens[2].contains('K') {
        board.castling_rights[Color::White.index()] |= CASTLE_KINGSIDE;
    }
    if tokens[2].contains('Q') {
        board.castling_rights[Color::White.index()] |= CASTLE_QUEENSIDE;
    }
    if tokens[2].contains('k') {
        board.castling_rights[Color::Black.index()] |= CASTLE_KINGSIDE;
    }
    if tokens[2].contains('q') {
        board.castling_rights[Color::Black.index()] |= CASTLE_QUEENSIDE;
    }

    board.en_passant_square = if tokens[3] == "-" {
        None
    } else {
        algebraic_to_square(tokens[3]).ok()
    };

    board.halfmove_clock = tokens[4].parse::<u16>().map_err(|_| FenError::HalfmoveClock)?;
    board.fullmove_number = tokens[5].parse::<u16>().map_err(|_| FenError::FullmoveNumber)?;

    board.update_setup();
    Ok(board)
}

fn parse_placement(placement: &str, board: &mut Board) {
    let mut cursor: Square = SQUARE_A8;

    for ch in placement.chars() {
        if ch == '/' {
            // Skip the off-board half of the rank.
            cursor += 8;
        } else if let Some(empty_count) = ch.to_digit(10) {
            cursor += empty_count as Square;
        } else if let Some(piece) = piece_from_fen_char(ch) {
            if let Ok(name) = square_to_algebraic(cursor) {
                board.put(piece, &name);
            }
            cursor += 1;
        }
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::board::chess_types::{
        Color, Piece, PieceKind, CASTLE_KINGSIDE, CASTLE_QUEENSIDE,
    };
    use crate::utils::fen_validator::FenError;
    use crate::utils::render_board::render_board;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(&board));

        assert_eq!(board.side_to_move, Color::White);
        assert_eq!(board.fullmove_number, 1);
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.en_passant_square, None);
        assert_eq!(
            board.castling_rights,
            [
                CASTLE_KINGSIDE | CASTLE_QUEENSIDE,
                CASTLE_KINGSIDE | CASTLE_QUEENSIDE
            ]
        );
    }

    #[test]
    fn starting_placement_lands_on_the_expected_squares() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(
            board.get("a8"),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            board.get("d1"),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            board.get("e2"),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.get("e4"), None);
        assert_eq!(board.king_square[Color::White.index()], Some(116));
        assert_eq!(board.king_square[Color::Black.index()], Some(4));
    }

    #[test]
    fn en_passant_and_partial_castling_fields_are_applied() {
        let board = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b Kq e3 4 10")
            .expect("FEN with en-passant target should parse");

        assert_eq!(board.side_to_move, Color::Black);
        assert_eq!(board.en_passant_square, Some(0x54), "e3 should resolve to 0x54");
        assert_eq!(board.castling_rights[Color::White.index()], CASTLE_KINGSIDE);
        assert_eq!(board.castling_rights[Color::Black.index()], CASTLE_QUEENSIDE);
        assert_eq!(board.halfmove_clock, 4);
        assert_eq!(board.fullmove_number, 10);
    }

    #[test]
    fn invalid_fen_is_refused() {
        assert_eq!(
            parse_fen("not a fen").err().map(|error| error.code()),
            Some(1)
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0"),
            Err(FenError::FullmoveNumber)
        );
    }

    #[test]
    fn non_standard_position_records_the_setup_header() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let board = parse_fen(fen).expect("custom FEN should parse");

        assert_eq!(board.setup_header.get("SetUp").map(String::as_str), Some("1"));
        assert_eq!(board.setup_header.get("FEN").map(String::as_str), Some(fen));
    }
}
