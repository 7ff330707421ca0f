//! Error types for chess rules operations.

use std::fmt;

use super::types::{Color, PieceKind, Square};

/// Error type for rules queries and move execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The color has no king on the board; the position is not playable
    KingNotFound { color: Color },
    /// Promotion kind outside queen, rook, bishop, knight
    InvalidPromotionChoice { kind: PieceKind },
    /// The origin square of a move holds no piece
    EmptySquare { square: Square },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::KingNotFound { color } => {
                write!(f, "No {color} king on the board")
            }
            RulesError::InvalidPromotionChoice { kind } => {
                write!(
                    f,
                    "Cannot promote to {kind}, expected queen, rook, bishop or knight"
                )
            }
            RulesError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
        }
    }
}

impl std::error::Error for RulesError {}

/// Error type for game controller actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Destination is not among the piece's legal moves
    IllegalMove { from: Square, to: Square },
    /// The piece on `square` does not belong to the side to move
    WrongTurn { square: Square, to_move: Color },
    /// No piece to move on `square`
    EmptySquare { square: Square },
    /// A promotion on `square` must be resolved before anything else
    PromotionPending { square: Square },
    /// `promote` called without a pending promotion
    NoPendingPromotion,
    /// Undo requested with an empty history
    NothingToUndo,
    /// Underlying rules failure
    Rules(RulesError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { from, to } => {
                write!(f, "Illegal move '{from}{to}'")
            }
            GameError::WrongTurn { square, to_move } => {
                write!(f, "Piece on {square} cannot move, {to_move} to move")
            }
            GameError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            GameError::PromotionPending { square } => {
                write!(f, "Promotion on {square} is waiting for a piece choice")
            }
            GameError::NoPendingPromotion => write!(f, "No promotion is pending"),
            GameError::NothingToUndo => write!(f, "No move to undo"),
            GameError::Rules(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Rules(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RulesError> for GameError {
    fn from(err: RulesError) -> Self {
        GameError::Rules(err)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Col out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Col {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement field does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 squares
    WrongRowLength { row: usize, squares: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Empty FEN string
    Empty,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRowCount { found } => {
                write!(f, "FEN placement must have 8 rows, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRowLength { row, squares } => {
                write!(f, "Row {row} describes {squares} squares, expected 8")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::Empty => write!(f, "Empty FEN string"),
        }
    }
}

impl std::error::Error for FenError {}
