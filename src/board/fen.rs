//! FEN import and export for the piece placement.
//!
//! Only the placement, side-to-move and castling fields carry information
//! this crate models. Castling availability is translated into `has_moved`
//! flags on kings and rooks; en passant and clocks are ignored since en
//! passant eligibility comes from an explicit last move instead.

use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Parse a board from a FEN string or just its placement field.
    ///
    /// Kings and rooks on their home squares count as unmoved when the
    /// castling field grants the matching right, or when no castling field is
    /// given. Pawns off their start row are marked as moved.
    ///
    /// # Errors
    /// Returns a [`FenError`] describing the first malformed field.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let castling = parts.nth(1);

        let mut board = Board::empty();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::WrongRowLength {
                        row,
                        squares: col + 1,
                    });
                }
                board.set_piece(Square::at(row, col), piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongRowLength { row, squares: col });
            }
        }

        let rights = CastlingField::parse(castling)?;
        board.infer_moved_flags(&rights);
        Ok(board)
    }

    /// The FEN placement field for this board.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square::at(row, col)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }

    /// FEN castling field implied by the `has_moved` flags ("-" if none).
    #[must_use]
    pub fn castling_availability(&self) -> String {
        let mut field = String::new();
        for color in Color::BOTH {
            let row = color.back_row();
            let king_home = self
                .piece_at(Square::at(row, 4))
                .is_some_and(|k| k.is(PieceKind::King, color) && !k.has_moved);
            for (col, letter) in [(7, 'k'), (0, 'q')] {
                let rook_home = self
                    .piece_at(Square::at(row, col))
                    .is_some_and(|r| r.is(PieceKind::Rook, color) && !r.has_moved);
                if king_home && rook_home {
                    field.push(if color == Color::White {
                        letter.to_ascii_uppercase()
                    } else {
                        letter
                    });
                }
            }
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    fn infer_moved_flags(&mut self, rights: &CastlingField) {
        for sq in Square::all() {
            let Some(mut piece) = self.piece_at(sq) else {
                continue;
            };
            let row = piece.color.back_row();
            piece.has_moved = match piece.kind {
                PieceKind::Pawn => sq.row() != piece.color.pawn_start_row(),
                PieceKind::King => sq != Square::at(row, 4) || !rights.any(piece.color),
                PieceKind::Rook if sq == Square::at(row, 7) => !rights.allows(piece.color, true),
                PieceKind::Rook if sq == Square::at(row, 0) => !rights.allows(piece.color, false),
                PieceKind::Rook => true,
                _ => false,
            };
            self.set_piece(sq, piece);
        }
    }
}

/// Parsed castling field; `None` means the field was absent.
struct CastlingField(Option<[bool; 4]>);

impl CastlingField {
    fn parse(field: Option<&str>) -> Result<Self, FenError> {
        let Some(field) = field else {
            return Ok(CastlingField(None));
        };
        let mut rights = [false; 4];
        for c in field.chars() {
            match c {
                'K' => rights[0] = true,
                'Q' => rights[1] = true,
                'k' => rights[2] = true,
                'q' => rights[3] = true,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        Ok(CastlingField(Some(rights)))
    }

    fn allows(&self, color: Color, kingside: bool) -> bool {
        let idx = match (color, kingside) {
            (Color::White, true) => 0,
            (Color::White, false) => 1,
            (Color::Black, true) => 2,
            (Color::Black, false) => 3,
        };
        self.0.map_or(true, |rights| rights[idx])
    }

    fn any(&self, color: Color) -> bool {
        self.allows(color, true) || self.allows(color, false)
    }
}

/// Side to move from a full FEN string (`w` when the field is missing).
///
/// # Errors
/// `InvalidSideToMove` for anything other than `w` or `b`.
pub fn fen_side_to_move(fen: &str) -> Result<Color, FenError> {
    match fen.split_whitespace().nth(1) {
        None | Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        Some(other) => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}
