pub mod board;
pub mod game;

pub use board::{Board, Color, GameStatus, MoveRecord, Piece, PieceKind, Square};
pub use game::Game;
