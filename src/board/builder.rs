//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::at(7, 4), Color::White, PieceKind::King)
//!     .piece(Square::at(0, 4), Color::Black, PieceKind::King)
//!     .moved_piece(Square::at(3, 4), Color::White, PieceKind::Pawn)
//!     .build();
//! assert!(board.piece_at(Square::at(3, 4)).unwrap().has_moved);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        BoardBuilder { board }
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place an unmoved piece on the board, replacing anything there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(square, Piece::new(kind, color));
        self
    }

    /// Place a piece that is marked as having moved.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        let piece = Piece::new(kind, color).moved();
        self.board.set_piece(square, piece);
        self
    }

    /// Place an exact piece value.
    #[must_use]
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
