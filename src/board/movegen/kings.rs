use super::super::{Board, Piece, PieceKind, Square, SquareSet};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Column the king starts on
pub(crate) const KING_HOME_COL: usize = 4;

/// Which way a king castles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub(crate) const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Side implied by a king move, if it spans two columns
    pub(crate) fn of_king_move(from: Square, to: Square) -> Option<Self> {
        if from.row() != to.row() || from.col().abs_diff(to.col()) != 2 {
            return None;
        }
        Some(if to.col() > from.col() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        })
    }

    pub(crate) const fn king_to_col(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    pub(crate) const fn rook_from_col(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    pub(crate) const fn rook_to_col(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns strictly between king and rook, all of which must be empty
    pub(crate) const fn between_cols(self) -> &'static [usize] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }
}

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, piece: Piece) -> SquareSet {
        let mut moves = self.generate_step_moves(from, piece, &KING_OFFSETS);
        if piece.has_moved
            || from.row() != piece.color.back_row()
            || from.col() != KING_HOME_COL
        {
            return moves;
        }

        for side in CastleSide::BOTH {
            if self.castling_path_clear(from, piece, side) {
                moves.insert(Square::at(from.row(), side.king_to_col()));
            }
        }
        moves
    }

    /// Rook present, same color, unmoved, with empty squares in between
    fn castling_path_clear(&self, from: Square, king: Piece, side: CastleSide) -> bool {
        let row = from.row();
        let rook_ready = self
            .piece_at(Square::at(row, side.rook_from_col()))
            .is_some_and(|rook| rook.is(PieceKind::Rook, king.color) && !rook.has_moved);

        rook_ready
            && side
                .between_cols()
                .iter()
                .all(|&col| self.is_empty(Square::at(row, col)))
    }
}
