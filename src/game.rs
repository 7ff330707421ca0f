//! Game controller built on the stateless rules in [`crate::board`].
//!
//! The board functions trust their callers; this is the caller. It tracks
//! whose turn it is, rejects illegal attempts with a recoverable error,
//! keeps the move history that undo consumes, and holds a pending promotion
//! until a piece is chosen.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameStatus, Square};
//! use chess_rules::game::{Game, PlayOutcome};
//!
//! let mut game = Game::new();
//! let outcome = game.play(Square::at(6, 4), Square::at(4, 4)).unwrap();
//! assert!(matches!(outcome, PlayOutcome::Moved { status: GameStatus::Ongoing, .. }));
//! assert_eq!(game.history().len(), 1);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    fen_side_to_move, Board, Color, FenError, GameError, GameStatus, LastMove, MoveOutcome,
    MoveRecord, PieceKind, PromotionPending, Square, SquareSet,
};

/// Result of a successful `play` or `promote` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayOutcome {
    /// The move was committed; `status` is for the side now to move.
    Moved {
        record: MoveRecord,
        status: GameStatus,
    },
    /// A pawn reached the last row; call [`Game::promote`] to finish.
    PromotionRequired(PromotionPending),
}

/// A game in progress: current board, side to move and move history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Color,
    history: Vec<MoveRecord>,
    pending: Option<PromotionPending>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Game {
            board,
            to_move,
            history: Vec::new(),
            pending: None,
        }
    }

    /// Start from a FEN string (placement, side to move, castling).
    ///
    /// # Errors
    /// Any [`FenError`] from the placement, side or castling fields.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(fen)?;
        let to_move = fen_side_to_move(fen)?;
        Ok(Self::from_board(board, to_move))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.to_move
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<LastMove> {
        self.history.last().map(MoveRecord::last_move)
    }

    #[must_use]
    pub fn pending_promotion(&self) -> Option<PromotionPending> {
        self.pending
    }

    /// Legal destinations for the piece on `square`; empty when the square
    /// is empty, holds an opponent piece, or a promotion is pending.
    #[must_use]
    pub fn legal_moves_from(&self, square: Square) -> SquareSet {
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.to_move && self.pending.is_none() => {
                self.board.legal_moves(square, piece, self.last_move())
            }
            _ => SquareSet::EMPTY,
        }
    }

    /// Status for the side to move.
    ///
    /// # Errors
    /// `Rules(KingNotFound)` if the side to move has no king.
    pub fn status(&self) -> Result<GameStatus, GameError> {
        Ok(self.board.status(self.to_move, self.last_move())?)
    }

    /// Validate and play `from` → `to` for the side to move.
    ///
    /// # Errors
    /// `PromotionPending` while a promotion awaits a choice, `EmptySquare`,
    /// `WrongTurn`, or `IllegalMove` when `to` is not a legal destination.
    /// The game is unchanged on error.
    pub fn play(&mut self, from: Square, to: Square) -> Result<PlayOutcome, GameError> {
        if let Some(pending) = self.pending {
            return Err(GameError::PromotionPending { square: pending.to });
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare { square: from })?;
        if piece.color != self.to_move {
            return Err(GameError::WrongTurn {
                square: from,
                to_move: self.to_move,
            });
        }

        let last_move = self.last_move();
        if !self.board.legal_moves(from, piece, last_move).contains(to) {
            #[cfg(feature = "logging")]
            log::debug!("rejected illegal move {from}{to}");
            return Err(GameError::IllegalMove { from, to });
        }

        match self.board.apply_move(from, to, last_move)? {
            MoveOutcome::Applied { board, record } => self.commit(board, record),
            MoveOutcome::PromotionPending(pending) => {
                self.pending = Some(pending);
                Ok(PlayOutcome::PromotionRequired(pending))
            }
        }
    }

    /// Resolve the pending promotion with `kind`.
    ///
    /// # Errors
    /// `NoPendingPromotion`, or `Rules(InvalidPromotionChoice)` for a king or
    /// pawn; in the latter case the promotion stays pending so the caller
    /// can ask again.
    pub fn promote(&mut self, kind: PieceKind) -> Result<PlayOutcome, GameError> {
        let pending = self.pending.ok_or(GameError::NoPendingPromotion)?;
        let (board, record) = self.board.resolve_promotion(&pending, kind)?;
        let outcome = self.commit(board, record)?;
        self.pending = None;
        Ok(outcome)
    }

    /// Abandon a pending promotion; the pawn stays where it was.
    pub fn cancel_promotion(&mut self) -> Option<PromotionPending> {
        self.pending.take()
    }

    /// Take back the last committed move.
    ///
    /// # Errors
    /// `PromotionPending` while a promotion awaits a choice (cancel it
    /// first), `NothingToUndo` on an empty history.
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        if let Some(pending) = self.pending {
            return Err(GameError::PromotionPending { square: pending.to });
        }
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board = self.board.undo_move(&record);
        self.to_move = self.to_move.opponent();
        Ok(record)
    }

    /// Status is computed before any field changes so a failure leaves the
    /// game as it was.
    fn commit(&mut self, board: Board, record: MoveRecord) -> Result<PlayOutcome, GameError> {
        let next = self.to_move.opponent();
        let status = board.status(next, Some(record.last_move()))?;
        self.board = board;
        self.history.push(record);
        self.to_move = next;
        #[cfg(feature = "logging")]
        log::info!("{record}: {} to move, {status}", self.to_move);
        Ok(PlayOutcome::Moved { record, status })
    }
}
