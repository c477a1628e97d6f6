//! Board-to-FEN serializer.
//!
//! Walks the 0x88 cells in the same stride as the parser and emits the
//! canonical six-field FEN string. Never mutates the board.

use crate::board::board_state::Board;
use crate::board::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_placement_field(board);
    let side_to_move = match board.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(&board.castling_rights);
    let en_passant = generate_en_passant_field(board.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        board.halfmove_clock,
        board.fullmove_number
    )
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();
    let mut empty_count = 0u8;
    let mut square = SQUARE_A8 as usize;

    while square <= SQUARE_H1 as usize {
        match board.cells[square] {
            Some(piece) => {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            }
            None => empty_count += 1,
        }

        if (square + 1) & 0x88 != 0 {
            // Rank boundary: flush the run and hop the off-board half-rank.
            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
                empty_count = 0;
            }
            if square != SQUARE_H1 as usize {
                out.push('/');
            }
            square += 8;
        }

        square += 1;
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: &[CastlingRights; 2]) -> String {
    let mut out = String::new();

    if rights[Color::White.index()] & CASTLE_KINGSIDE != 0 {
        out.push('K');
    }
    if rights[Color::White.index()] & CASTLE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights[Color::Black.index()] & CASTLE_KINGSIDE != 0 {
        out.push('k');
    }
    if rights[Color::Black.index()] & CASTLE_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };

    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::board::board_state::Board;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::board::chess_types::{Color, CASTLE_KINGSIDE, CASTLE_QUEENSIDE};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        let reparsed = parse_fen(&generated).expect("generated FEN should parse");

        assert_eq!(generated, fen);
        assert_eq!(reparsed, parsed);
        assert_eq!(reparsed.side_to_move, Color::Black);
        assert_eq!(
            reparsed.castling_rights[Color::Black.index()],
            CASTLE_KINGSIDE | CASTLE_QUEENSIDE
        );
        assert_eq!(reparsed.castling_rights[Color::White.index()], 0);
        assert_eq!(reparsed.en_passant_square, None);
        assert_eq!(reparsed.halfmove_clock, 4);
        assert_eq!(reparsed.fullmove_number, 6);
    }

    #[test]
    fn round_trip_en_passant_position_fen() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        let parsed = parse_fen(fen).expect("en-passant FEN should parse");

        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn empty_board_serializes_to_bare_ranks() {
        let board = Board::new_empty();
        assert_eq!(generate_fen(&board), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn generation_does_not_mutate_the_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let snapshot = board.clone();

        let _ = generate_fen(&board);
        assert_eq!(board, snapshot);
    }
}
