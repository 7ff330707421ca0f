//! Attack oracle: is a square attacked by a given color.

use super::movegen::KING_OFFSETS;
use super::{Board, Color, Piece, PieceKind, Square, SquareSet};

impl Board {
    /// Squares `piece` on `from` attacks.
    ///
    /// This is the raw move set with the two non-capturing cases adjusted:
    /// pawns attack both forward diagonals whether or not anything stands
    /// there (pushes never attack), and castling destinations are left out.
    /// Never consults check, so the legal-move filter can call it freely.
    #[must_use]
    pub fn attacked_by_piece(&self, from: Square, piece: Piece) -> SquareSet {
        match piece.kind {
            PieceKind::Pawn => {
                let dir = piece.color.pawn_direction();
                [-1, 1]
                    .into_iter()
                    .filter_map(|dc| from.offset(dir, dc))
                    .collect()
            }
            PieceKind::King => self.generate_step_moves(from, piece, &KING_OFFSETS),
            _ => self.raw_moves(from, piece, None),
        }
    }

    /// Returns true if any piece of color `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|(from, piece)| self.attacked_by_piece(from, piece).contains(square))
    }

    /// Every square attacked by `by`
    #[must_use]
    pub fn attacked_squares(&self, by: Color) -> SquareSet {
        self.pieces(by)
            .fold(SquareSet::EMPTY, |acc, (from, piece)| {
                acc.union(self.attacked_by_piece(from, piece))
            })
    }
}
