use super::super::{Board, Piece, Square, SquareSet};

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Board {
    /// Walk each ray until the edge or the first occupied square. An enemy
    /// piece on that square is a capture; an own piece blocks.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
    ) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(dr, dc) in directions {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.insert(to),
                    Some(other) => {
                        if other.color != piece.color {
                            moves.insert(to);
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
        moves
    }
}
