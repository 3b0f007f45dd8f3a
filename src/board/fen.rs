//! Text codec for positions, a two-field subset of FEN.
//!
//! The engine's whole state is the piece grid and the side to move, so a
//! position serializes as `<placement> <side>`, e.g. the starting position:
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w
//! ```
//!
//! Castling, en-passant and clock fields do not exist in this engine and
//! have no place in the format. Extra trailing fields are ignored on input,
//! so full FEN strings from other tools parse too.

use std::fmt::Write as _;
use std::str::FromStr;

use super::error::FenError;
use super::game::Game;
use super::state::Board;
use super::types::{Color, Piece, Square};

impl Game {
    /// Parse a position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement, rank 8 first
        let mut board = Board::empty();
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        // Parse side to move
        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(Game::from_parts(board, turn))
    }

    /// Render the position as FEN: placement and side to move
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.board().piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            let _ = write!(fen, "{empty_run}");
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                let _ = write!(fen, "{empty_run}");
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.turn() == Color::White { 'w' } else { 'b' });
        fen
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::try_from_fen(s)
    }
}
