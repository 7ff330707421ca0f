//! Chess board representation and rules.
//!
//! An 8×8 grid of optional pieces plus the rules that operate on it: raw
//! move generation, attack detection, the legal move filter, check and
//! checkmate detection, and the move executor with undo. Every operation
//! takes its inputs explicitly (board, square, piece, last move) and returns
//! new values; nothing reads hidden state.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let e2 = Square::at(6, 4);
//! let moves = board.legal_moves_from(e2, None);
//! assert_eq!(moves.len(), 2);
//! assert!(!board.is_in_check(Color::White).unwrap());
//! ```

mod attacks;
mod builder;
mod check;
mod display;
mod error;
mod fen;
mod legal;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::GameStatus;
pub use error::{FenError, GameError, RulesError, SquareError};
pub use fen::fen_side_to_move;
pub use state::Board;
pub use types::{
    Color, LastMove, MoveKind, MoveOutcome, MoveRecord, Piece, PieceKind, PromotionPending,
    Square, SquareSet, SquareSetIter, PROMOTION_CHOICES,
};
