use super::super::{Board, Color, LastMove, Piece, PieceKind, Square, SquareSet};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        piece: Piece,
        last_move: Option<LastMove>,
    ) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let color = piece.color;
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.insert(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.insert(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some(other) if other.color != color => moves.insert(target),
                Some(_) => {}
                None => {
                    if self
                        .en_passant_victim(from, color, last_move)
                        .is_some_and(|victim| victim.col() == target.col())
                    {
                        moves.insert(target);
                    }
                }
            }
        }

        moves
    }

    /// Square of the enemy pawn a pawn of `color` on `from` may capture en
    /// passant, given the last committed move.
    ///
    /// Eligible only right after an opposing pawn advanced two rows and
    /// landed beside `from` on the same row.
    pub(crate) fn en_passant_victim(
        &self,
        from: Square,
        color: Color,
        last_move: Option<LastMove>,
    ) -> Option<Square> {
        let last = last_move?;
        let double_advance = last.from.col() == last.to.col()
            && last.from.row().abs_diff(last.to.row()) == 2;
        let beside = last.to.row() == from.row() && last.to.col().abs_diff(from.col()) == 1;
        let victim = self.piece_at(last.to)?;

        let enemy_pawn = victim.is(PieceKind::Pawn, color.opponent());
        (double_advance && beside && enemy_pawn).then_some(last.to)
    }
}
