//! Core chess types.
//!
//! This module contains the data model shared by every rules component:
//! - `PieceKind`, `Color` and `Piece` - piece identity plus the `has_moved` flag
//! - `Square` - validated (row, col) coordinate
//! - `SquareSet` - set of destination squares
//! - `LastMove`, `MoveRecord`, `PromotionPending`, `MoveOutcome` - move values

mod moves;
mod piece;
mod square;
mod square_set;

pub use moves::{LastMove, MoveKind, MoveOutcome, MoveRecord, PromotionPending};
pub use piece::{Color, Piece, PieceKind, PROMOTION_CHOICES};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
