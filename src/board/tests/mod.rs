//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Raw move generation per piece kind
//! - `legal.rs` - Self-check filtering, pins, castling legality
//! - `check.rs` - Check, checkmate and stalemate detection
//! - `make_unmake.rs` - Apply/undo and promotion resolution
//! - `fen.rs` - FEN import/export
//! - `proptest.rs` - Property-based tests over random playouts

mod legal;

use crate::board::{Board, BoardBuilder, Color, PieceKind, Square, SquareSet};

/// Parse algebraic squares into a set, for compact expectations.
pub(super) fn squares(names: &[&str]) -> SquareSet {
    names
        .iter()
        .map(|n| n.parse::<Square>().expect("valid square"))
        .collect()
}

/// Kings on e1 and e8 and nothing else.
pub(super) fn kings_only() -> BoardBuilder {
    BoardBuilder::new()
        .piece(Square::at(7, 4), Color::White, PieceKind::King)
        .piece(Square::at(0, 4), Color::Black, PieceKind::King)
}

/// The standard position with the squares between White's king and rooks cleared.
pub(super) fn white_ready_to_castle() -> Board {
    BoardBuilder::starting_position()
        .clear(Square::at(7, 1))
        .clear(Square::at(7, 2))
        .clear(Square::at(7, 3))
        .clear(Square::at(7, 5))
        .clear(Square::at(7, 6))
        .build()
}
