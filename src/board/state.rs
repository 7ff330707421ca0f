use std::ops::Index;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, kind) in BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            board.set_piece(Square::at(color.back_row(), col), Piece::new(*kind, color));
            board.set_piece(
                Square::at(color.pawn_start_row(), col),
                Piece::new(PieceKind::Pawn, color),
            );
        }
    }
    board
});

/// An 8×8 grid of optional pieces, row-major, row 0 = Black's back rank.
///
/// Boards are treated as immutable snapshots: every rules operation that
/// changes the position returns a new `Board`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Build a board from a full grid
    #[must_use]
    pub const fn from_grid(squares: [[Option<Piece>; 8]; 8]) -> Self {
        Board { squares }
    }

    #[must_use]
    pub const fn grid(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.row()][sq.col()].is_none()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some(piece);
    }

    /// Clear `sq`, returning whatever stood there
    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// All occupied squares with their pieces, in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| Some((sq, self[sq]?)))
    }

    /// All pieces of one color with their squares
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// Locate `color`'s king (first one found in row-major order)
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row()][sq.col()]
    }
}
