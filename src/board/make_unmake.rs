//! Move executor: apply, resolve promotion, undo.
//!
//! None of these mutate `self`; each returns a fresh board so callers can
//! keep the prior snapshot for history and undo. Legality is the caller's
//! responsibility, only structural side effects are applied here.

use super::error::RulesError;
use super::movegen::CastleSide;
use super::{
    Board, LastMove, MoveKind, MoveOutcome, MoveRecord, Piece, PieceKind, PromotionPending, Square,
};

impl Board {
    /// Apply the move `from` → `to`.
    ///
    /// A pawn reaching its promotion row yields
    /// [`MoveOutcome::PromotionPending`] and leaves the board untouched until
    /// [`Board::resolve_promotion`] is called. `last_move` is accepted so the
    /// call mirrors the generator's inputs; en passant is recognised from the
    /// move shape alone (pawn moving diagonally onto an empty square).
    ///
    /// # Errors
    /// `EmptySquare` if `from` holds no piece.
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        _last_move: Option<LastMove>,
    ) -> Result<MoveOutcome, RulesError> {
        let piece = self
            .piece_at(from)
            .ok_or(RulesError::EmptySquare { square: from })?;

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            #[cfg(feature = "logging")]
            log::debug!("{from}{to}: promotion pending for {}", piece.color);
            return Ok(MoveOutcome::PromotionPending(PromotionPending {
                from,
                to,
                color: piece.color,
            }));
        }

        let mut board = self.clone();
        board.remove_piece(from);
        let mut captured = board.remove_piece(to);

        let kind = match piece.kind {
            PieceKind::Pawn if from.col() != to.col() && captured.is_none() => {
                let captured_at = Square::at(from.row(), to.col());
                captured = board.remove_piece(captured_at);
                MoveKind::EnPassant { captured_at }
            }
            PieceKind::Pawn if from.row().abs_diff(to.row()) == 2 => MoveKind::DoublePawnPush,
            PieceKind::King => match CastleSide::of_king_move(from, to) {
                Some(side) => board.relocate_castling_rook(from.row(), side),
                None => MoveKind::Normal,
            },
            _ => MoveKind::Normal,
        };

        board.set_piece(to, piece.moved());

        let record = MoveRecord {
            from,
            to,
            piece,
            captured,
            kind,
        };
        #[cfg(feature = "logging")]
        log::debug!("applied {record} ({:?})", record.kind);
        Ok(MoveOutcome::Applied { board, record })
    }

    /// Finish a pending promotion by placing a `kind` piece on the
    /// destination and clearing the origin.
    ///
    /// # Errors
    /// `InvalidPromotionChoice` unless `kind` is queen, rook, bishop or
    /// knight; `EmptySquare` if the pawn is no longer on `pending.from`.
    pub fn resolve_promotion(
        &self,
        pending: &PromotionPending,
        kind: PieceKind,
    ) -> Result<(Board, MoveRecord), RulesError> {
        if !kind.is_promotion_choice() {
            return Err(RulesError::InvalidPromotionChoice { kind });
        }
        let pawn = self.piece_at(pending.from).ok_or(RulesError::EmptySquare {
            square: pending.from,
        })?;

        let mut board = self.clone();
        board.remove_piece(pending.from);
        let captured = board.remove_piece(pending.to);
        board.set_piece(pending.to, Piece::new(kind, pending.color).moved());

        let record = MoveRecord {
            from: pending.from,
            to: pending.to,
            piece: pawn,
            captured,
            kind: MoveKind::Promotion { promoted_to: kind },
        };
        #[cfg(feature = "logging")]
        log::debug!("promoted {record}");
        Ok((board, record))
    }

    /// Reverse `record`, which must be the last move applied to `self`.
    ///
    /// Restores the moving piece's pre-move snapshot (so `has_moved` flags
    /// revert), the captured piece on the square it was taken from, and a
    /// castled rook.
    #[must_use]
    pub fn undo_move(&self, record: &MoveRecord) -> Board {
        let mut board = self.clone();
        board.remove_piece(record.to);
        board.set_piece(record.from, record.piece);

        match record.kind {
            MoveKind::EnPassant { captured_at } => {
                if let Some(victim) = record.captured {
                    board.set_piece(captured_at, victim);
                }
            }
            MoveKind::Castle {
                rook_from,
                rook_to,
                rook,
            } => {
                board.remove_piece(rook_to);
                board.set_piece(rook_from, rook);
            }
            MoveKind::Normal | MoveKind::DoublePawnPush | MoveKind::Promotion { .. } => {
                if let Some(victim) = record.captured {
                    board.set_piece(record.to, victim);
                }
            }
        }

        #[cfg(feature = "logging")]
        log::debug!("undid {record}");
        board
    }

    /// Move the rook for a castling king; a missing rook leaves a plain
    /// king move.
    fn relocate_castling_rook(&mut self, row: usize, side: CastleSide) -> MoveKind {
        let rook_from = Square::at(row, side.rook_from_col());
        let rook_to = Square::at(row, side.rook_to_col());
        match self.remove_piece(rook_from) {
            Some(rook) => {
                self.set_piece(rook_to, rook.moved());
                MoveKind::Castle {
                    rook_from,
                    rook_to,
                    rook,
                }
            }
            None => MoveKind::Normal,
        }
    }
}
