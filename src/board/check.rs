//! Check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::{Board, Color, LastMove, Square};

/// Position status for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Not in check, at least one legal move
    Ongoing,
    /// In check, at least one legal move
    Check,
    /// In check, no legal move
    Checkmate,
    /// Not in check, no legal move
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

impl Board {
    fn king_square(&self, color: Color) -> Result<Square, RulesError> {
        self.find_king(color).ok_or_else(|| {
            #[cfg(feature = "logging")]
            log::warn!("no {color} king on the board");
            RulesError::KingNotFound { color }
        })
    }

    /// Returns true if `color`'s king is attacked by the opponent.
    ///
    /// # Errors
    /// `KingNotFound` if `color` has no king on the board.
    pub fn is_in_check(&self, color: Color) -> Result<bool, RulesError> {
        let king = self.king_square(color)?;
        Ok(self.is_attacked(king, color.opponent()))
    }

    /// Returns true if `color` is in check and no piece of `color` has a
    /// legal move.
    ///
    /// # Errors
    /// `KingNotFound` if `color` has no king on the board.
    pub fn is_in_checkmate(
        &self,
        color: Color,
        last_move: Option<LastMove>,
    ) -> Result<bool, RulesError> {
        if !self.is_in_check(color)? {
            return Ok(false);
        }
        Ok(!self.has_any_legal_move(color, last_move))
    }

    /// Returns true if `color` is not in check but has no legal move.
    ///
    /// # Errors
    /// `KingNotFound` if `color` has no king on the board.
    pub fn is_in_stalemate(
        &self,
        color: Color,
        last_move: Option<LastMove>,
    ) -> Result<bool, RulesError> {
        if self.is_in_check(color)? {
            return Ok(false);
        }
        Ok(!self.has_any_legal_move(color, last_move))
    }

    /// Classify the position for `color` to move.
    ///
    /// # Errors
    /// `KingNotFound` if `color` has no king on the board.
    pub fn status(
        &self,
        color: Color,
        last_move: Option<LastMove>,
    ) -> Result<GameStatus, RulesError> {
        let in_check = self.is_in_check(color)?;
        let can_move = self.has_any_legal_move(color, last_move);
        Ok(match (in_check, can_move) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        })
    }
}
