pub mod board;

pub use board::{
    Board, BoardBuilder, Color, FenError, Game, InvalidMove, Move, MoveList, Piece, Square,
};
