//! Plain-text rendering of a board.

use std::fmt;

use super::{Board, Square, SquareSet};

impl Board {
    /// Render the board with `marks` shown as `*` on empty squares and
    /// bracketed on occupied ones. Handy for eyeballing legal move sets.
    #[must_use]
    pub fn render_with_marks(&self, marks: SquareSet) -> String {
        let mut out = String::new();
        for row in 0..8 {
            out.push_str(&format!("{} ", 8 - row));
            for col in 0..8 {
                let sq = Square::at(row, col);
                let cell = self.piece_at(sq).map_or('.', |p| p.to_fen_char());
                if marks.contains(sq) {
                    if cell == '.' {
                        out.push_str(" * ");
                    } else {
                        out.push_str(&format!("[{cell}]"));
                    }
                } else {
                    out.push_str(&format!(" {cell} "));
                }
            }
            out.push('\n');
        }
        out.push_str("   a  b  c  d  e  f  g  h");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_marks(SquareSet::EMPTY))
    }
}
