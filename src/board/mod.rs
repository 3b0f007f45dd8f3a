//! Chess board representation and rules.
//!
//! A mailbox board, per-piece pseudo-legal move generation, and a `Game`
//! that filters candidates through a king-safety check to produce legal
//! moves, apply them, and decide check, checkmate and stalemate.
//!
//! # Example
//! ```
//! use chess_rules::board::{Game, Square};
//!
//! let game = Game::new();
//! let moves = game.legal_moves(Square(1, 4)); // the e2 pawn
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod game;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, InvalidMove, SquareError};
pub use game::Game;
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square, PROMOTION_PIECES};
