//! Raw move generation.
//!
//! Produces every geometrically reachable destination for a single piece,
//! ignoring whether the move would leave the mover's own king in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{CastleSide, KING_OFFSETS};
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use sliders::{DIAGONALS, ORTHOGONALS};

use super::{Board, LastMove, Piece, PieceKind, Square, SquareSet};

impl Board {
    /// Every destination `piece` standing on `from` can reach, ignoring check.
    ///
    /// `last_move` is the most recently committed move; it is only read to
    /// decide en passant eligibility. Castling destinations are included when
    /// the king, rook and intervening squares allow it, without any attack
    /// test.
    #[must_use]
    pub fn raw_moves(&self, from: Square, piece: Piece, last_move: Option<LastMove>) -> SquareSet {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, last_move),
            PieceKind::Knight => self.generate_step_moves(from, piece, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.generate_slider_moves(from, piece, &DIAGONALS),
            PieceKind::Rook => self.generate_slider_moves(from, piece, &ORTHOGONALS),
            PieceKind::Queen => self
                .generate_slider_moves(from, piece, &DIAGONALS)
                .union(self.generate_slider_moves(from, piece, &ORTHOGONALS)),
            PieceKind::King => self.generate_king_moves(from, piece),
        }
    }

    /// Raw moves for whatever stands on `from`; empty if the square is empty.
    #[must_use]
    pub fn raw_moves_from(&self, from: Square, last_move: Option<LastMove>) -> SquareSet {
        match self.piece_at(from) {
            Some(piece) => self.raw_moves(from, piece, last_move),
            None => SquareSet::EMPTY,
        }
    }

    /// Destinations at fixed offsets that are on the board and not occupied
    /// by a piece of the mover's color.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        piece: Piece,
        offsets: &[(isize, isize)],
    ) -> SquareSet {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.color_on(to) != Some(piece.color))
            .collect()
    }
}
