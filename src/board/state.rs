//! Mailbox board state.
//!
//! The board is a plain 8x8 grid of optional (color, piece) pairs. `Clone`
//! copies the grid element-wise, so a cloned board shares no storage with
//! the original; the legality filter leans on that for its hypothetical
//! boards.

use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Move, Piece, Square};

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    let back_rank = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    for (file, &piece) in back_rank.iter().enumerate() {
        board.set_piece(Square(0, file), Color::White, piece);
        board.set_piece(Square(7, file), Color::Black, piece);
    }
    for file in 0..8 {
        board.set_piece(Square(1, file), Color::White, Piece::Pawn);
        board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
    }
    board
});

/// A chess board: 64 squares, each holding at most one piece.
///
/// Equality and hashing cover the full board content, so two boards with the
/// same placed pieces compare equal regardless of how they were built.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    // squares[rank][file]
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Create an empty board with no pieces
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Create a board with the standard starting position
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    /// Reset this board to the standard starting position
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Place a piece on a square, replacing any occupant
    #[inline]
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.rank()][square.file()] = Some((color, piece));
    }

    /// Remove the piece on a square, if any
    #[inline]
    pub fn remove_piece(&mut self, square: Square) {
        self.squares[square.rank()][square.file()] = None;
    }

    /// The piece on a square, or `None` if the square is empty
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.rank()][square.file()]
    }

    /// Returns true if no piece occupies the square
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Locate a piece of the given color and kind by linear scan.
    ///
    /// Returns `None` when no such piece is on the board. Partial setups
    /// (including boards without a king) are valid, so absence is a normal
    /// result rather than an error.
    #[must_use]
    pub fn find_piece(&self, color: Color, piece: Piece) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, piece)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Iterate over the squares holding pieces of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            match self.piece_at(sq) {
                Some((c, piece)) if c == color => Some((sq, piece)),
                _ => None,
            }
        })
    }

    /// Apply a move's board mutation: lift the piece off the start square,
    /// substitute the promotion piece if the move carries one, and set it
    /// down on the destination. Legality is the caller's concern.
    pub(crate) fn apply_move(&mut self, mv: Move) {
        if let Some((color, piece)) = self.piece_at(mv.from()) {
            let placed = mv.promotion().unwrap_or(piece);
            self.remove_piece(mv.from());
            self.set_piece(mv.to(), color, placed);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
