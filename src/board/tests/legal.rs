//! Legal move filter tests: pins, check evasion, castling safety, en passant.

use super::{kings_only, squares, white_ready_to_castle};
use crate::board::{Board, BoardBuilder, Color, LastMove, PieceKind, Square};

#[test]
fn test_starting_position_legal_equals_raw() {
    let board = Board::new();
    for (sq, piece) in board.occupied() {
        assert_eq!(
            board.legal_moves(sq, piece, None),
            board.raw_moves(sq, piece, None)
        );
    }
}

#[test]
fn test_pinned_bishop_cannot_move() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(6, 4), Color::White, PieceKind::Bishop)
        .piece(Square::at(0, 4), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    let bishop = Square::at(6, 4);
    assert!(!board.raw_moves_from(bishop, None).is_empty());
    assert!(board.legal_moves_from(bishop, None).is_empty());
}

#[test]
fn test_pinned_rook_slides_along_pin() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(6, 4), Color::White, PieceKind::Rook)
        .piece(Square::at(0, 4), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    assert_eq!(
        board.legal_moves_from(Square::at(6, 4), None),
        squares(&["e3", "e4", "e5", "e6", "e7", "e8"])
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(0, 5), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    assert_eq!(
        board.legal_moves_from(Square::at(7, 4), None),
        squares(&["d1", "d2", "e2"])
    );
}

#[test]
fn test_king_may_capture_undefended_attacker_only() {
    let undefended = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(6, 4), Color::Black, PieceKind::Queen)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    assert!(undefended
        .legal_moves_from(Square::at(7, 4), None)
        .contains(Square::at(6, 4)));

    let defended = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(6, 4), Color::Black, PieceKind::Queen)
        .piece(Square::at(0, 4), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    assert!(!defended
        .legal_moves_from(Square::at(7, 4), None)
        .contains(Square::at(6, 4)));
}

#[test]
fn test_check_must_be_blocked() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(5, 3), Color::White, PieceKind::Knight)
        .piece(Square::at(0, 4), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    assert_eq!(
        board.legal_moves_from(Square::at(5, 3), None),
        squares(&["e5"])
    );
}

#[test]
fn test_castling_both_sides_when_safe() {
    let board = white_ready_to_castle();
    let moves = board.legal_moves_from(Square::at(7, 4), None);
    assert!(moves.contains(Square::at(7, 6)));
    assert!(moves.contains(Square::at(7, 2)));
}

#[test]
fn test_no_castling_out_of_check() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(7, 7), Color::White, PieceKind::Rook)
        .piece(Square::at(2, 4), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    let king = Square::at(7, 4);
    let castle = Square::at(7, 6);
    assert!(board.raw_moves_from(king, None).contains(castle));
    assert!(!board.legal_moves_from(king, None).contains(castle));
}

#[test]
fn test_no_castling_into_attacked_square() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(7, 7), Color::White, PieceKind::Rook)
        .piece(Square::at(2, 6), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    assert!(!board
        .legal_moves_from(Square::at(7, 4), None)
        .contains(Square::at(7, 6)));
}

#[test]
fn test_queenside_castling_ignores_attacked_b_file() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(7, 0), Color::White, PieceKind::Rook)
        .piece(Square::at(0, 1), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 4), Color::Black, PieceKind::King)
        .build();
    assert!(board
        .legal_moves_from(Square::at(7, 4), None)
        .contains(Square::at(7, 2)));
}

#[test]
fn test_queenside_castling_through_attacked_d_file() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(7, 0), Color::White, PieceKind::Rook)
        .piece(Square::at(0, 3), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 7), Color::Black, PieceKind::King)
        .build();
    assert!(!board
        .legal_moves_from(Square::at(7, 4), None)
        .contains(Square::at(7, 2)));
}

#[test]
fn test_en_passant_exposing_king_on_row_is_illegal() {
    let board = BoardBuilder::new()
        .moved_piece(Square::at(3, 0), Color::White, PieceKind::King)
        .moved_piece(Square::at(3, 1), Color::White, PieceKind::Pawn)
        .moved_piece(Square::at(3, 2), Color::Black, PieceKind::Pawn)
        .piece(Square::at(3, 7), Color::Black, PieceKind::Rook)
        .piece(Square::at(0, 7), Color::Black, PieceKind::King)
        .build();
    let last = Some(LastMove::new(Square::at(1, 2), Square::at(3, 2)));
    let pawn = Square::at(3, 1);
    assert!(board.raw_moves_from(pawn, last).contains(Square::at(2, 2)));
    assert_eq!(board.legal_moves_from(pawn, last), squares(&["b6"]));
}

#[test]
fn test_en_passant_removes_checking_pawn() {
    let board = BoardBuilder::new()
        .moved_piece(Square::at(4, 4), Color::White, PieceKind::King)
        .moved_piece(Square::at(3, 4), Color::White, PieceKind::Pawn)
        .moved_piece(Square::at(3, 3), Color::Black, PieceKind::Pawn)
        .piece(Square::at(0, 0), Color::Black, PieceKind::King)
        .build();
    let last = Some(LastMove::new(Square::at(1, 3), Square::at(3, 3)));
    assert!(board.is_in_check(Color::White).unwrap());
    assert_eq!(
        board.legal_moves_from(Square::at(3, 4), last),
        squares(&["d6"])
    );
}

#[test]
fn test_legal_moves_without_king_fall_back_to_raw() {
    let board = BoardBuilder::new()
        .piece(Square::at(4, 4), Color::White, PieceKind::Queen)
        .piece(Square::at(0, 0), Color::Black, PieceKind::Rook)
        .build();
    let queen = Square::at(4, 4);
    assert_eq!(
        board.legal_moves_from(queen, None),
        board.raw_moves_from(queen, None)
    );
}

#[test]
fn test_all_legal_moves_and_is_legal() {
    let board = kings_only()
        .piece(Square::at(6, 0), Color::White, PieceKind::Pawn)
        .build();
    let all = board.all_legal_moves(Color::White, None);
    let total: usize = all.iter().map(|(_, moves)| moves.len()).sum();
    // Pawn: a3, a4. King: d1, d2, e2, f2, f1.
    assert_eq!(total, 7);
    assert!(board.is_legal(Square::at(6, 0), Square::at(4, 0), None));
    assert!(!board.is_legal(Square::at(6, 0), Square::at(3, 0), None));
    assert!(board.has_any_legal_move(Color::Black, None));
}

#[test]
fn test_queries_are_idempotent() {
    let board = white_ready_to_castle();
    let before = board.clone();
    let king = Square::at(7, 4);
    let first = board.legal_moves_from(king, None);
    let second = board.legal_moves_from(king, None);
    assert_eq!(first, second);
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        second.iter().collect::<Vec<_>>()
    );
    assert_eq!(board, before);
}
