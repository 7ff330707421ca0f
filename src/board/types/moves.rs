//! Move records and the values that flow between executor calls.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// The most recently committed move, as needed for en passant eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        LastMove { from, to }
    }
}

/// Structural side effect of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    /// The captured pawn stood on `captured_at`, not on the destination.
    EnPassant { captured_at: Square },
    /// `rook` is the rook as it stood before castling.
    Castle {
        rook_from: Square,
        rook_to: Square,
        rook: Piece,
    },
    Promotion { promoted_to: PieceKind },
}

/// A committed move, sufficient to undo it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it was before the move
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl MoveRecord {
    /// The en passant context this move leaves for the next ply
    #[inline]
    #[must_use]
    pub const fn last_move(&self) -> LastMove {
        LastMove::new(self.from, self.to)
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }

    /// The piece a pawn promoted to, if this move was a promotion
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promoted_to } => Some(promoted_to),
            _ => None,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let MoveKind::Castle { rook_from, .. } = self.kind {
            return if rook_from.col() > self.from.col() {
                f.write_str("O-O")
            } else {
                f.write_str("O-O-O")
            };
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// A pawn move to the farthest row that still needs a promotion piece.
///
/// The board is left untouched until the pending move is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PromotionPending {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

/// Result of applying a move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Applied {
        board: crate::board::Board,
        record: MoveRecord,
    },
    PromotionPending(PromotionPending),
}
