//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameError, GameStatus, LastMove, MoveOutcome, MoveRecord, Piece,
    PieceKind, PromotionPending, RulesError, Square, SquareSet,
};
pub use crate::game::{Game, PlayOutcome};
