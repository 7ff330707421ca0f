//! Legal move filter.
//!
//! Wraps raw generation and drops every destination that would leave the
//! mover's own king attacked, plus the castling-specific rules (not out of
//! check, not through an attacked square).

use super::movegen::CastleSide;
use super::{Board, Color, LastMove, Piece, PieceKind, Square, SquareSet};

impl Board {
    /// Legal destinations for `piece` standing on `from`.
    ///
    /// Always a subset of [`Board::raw_moves`] for the same arguments.
    #[must_use]
    pub fn legal_moves(
        &self,
        from: Square,
        piece: Piece,
        last_move: Option<LastMove>,
    ) -> SquareSet {
        let opponent = piece.color.opponent();
        let mut legal = SquareSet::EMPTY;

        for to in self.raw_moves(from, piece, last_move) {
            if piece.kind == PieceKind::King {
                if let Some(side) = CastleSide::of_king_move(from, to) {
                    if !self.castling_transit_safe(from, side, opponent) {
                        #[cfg(feature = "logging")]
                        log::trace!("castling {from}{to} rejected: king in or crossing check");
                        continue;
                    }
                }
            }

            if self.keeps_king_safe(from, to, piece, last_move) {
                legal.insert(to);
            } else {
                #[cfg(feature = "logging")]
                log::trace!("{from}{to} rejected: leaves {} king in check", piece.color);
            }
        }
        legal
    }

    /// Legal destinations for whatever stands on `from`; empty if nothing does.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square, last_move: Option<LastMove>) -> SquareSet {
        match self.piece_at(from) {
            Some(piece) => self.legal_moves(from, piece, last_move),
            None => SquareSet::EMPTY,
        }
    }

    /// Returns true if moving the piece on `from` to `to` is legal.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square, last_move: Option<LastMove>) -> bool {
        self.legal_moves_from(from, last_move).contains(to)
    }

    /// Legal destinations for every piece of `color` that has at least one.
    #[must_use]
    pub fn all_legal_moves(
        &self,
        color: Color,
        last_move: Option<LastMove>,
    ) -> Vec<(Square, SquareSet)> {
        self.pieces(color)
            .map(|(from, piece)| (from, self.legal_moves(from, piece, last_move)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect()
    }

    /// Returns true as soon as any piece of `color` has a legal move.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color, last_move: Option<LastMove>) -> bool {
        self.pieces(color)
            .any(|(from, piece)| !self.legal_moves(from, piece, last_move).is_empty())
    }

    /// King not currently in check and the square it crosses not attacked.
    fn castling_transit_safe(&self, from: Square, side: CastleSide, opponent: Color) -> bool {
        let step: isize = match side {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        };
        let transit = from.offset(0, step);
        !self.is_attacked(from, opponent)
            && transit.map_or(true, |sq| !self.is_attacked(sq, opponent))
    }

    /// Simulate the move on a scratch board and test the mover's king.
    ///
    /// Only the moving piece is relocated, except that an en passant victim
    /// is lifted too: it may be the checking piece, or the pawn shielding
    /// the king along the row.
    fn keeps_king_safe(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        last_move: Option<LastMove>,
    ) -> bool {
        let mut scratch = self.clone();
        scratch.remove_piece(from);
        if piece.kind == PieceKind::Pawn && from.col() != to.col() && self.is_empty(to) {
            if let Some(victim) = self.en_passant_victim(from, piece.color, last_move) {
                scratch.remove_piece(victim);
            }
        }
        scratch.set_piece(to, piece);

        let king_square = if piece.kind == PieceKind::King {
            Some(to)
        } else {
            scratch.find_king(piece.color)
        };

        // Without a king there is nothing to expose.
        match king_square {
            Some(king) => !scratch.is_attacked(king, piece.color.opponent()),
            None => true,
        }
    }
}
