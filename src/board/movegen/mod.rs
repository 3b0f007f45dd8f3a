//! Pseudo-legal move generation.
//!
//! A pseudo-legal move obeys the moving piece's geometry and board
//! occupancy but ignores whether it leaves the mover's own king attacked.
//! King safety is filtered one level up, in `Game::legal_moves`.

mod pawns;
mod sliders;
mod steppers;

use super::state::Board;
use super::types::{Color, MoveList, Piece, Square};

impl Board {
    /// All pseudo-legal moves for the piece on `from`.
    ///
    /// Returns an empty list if the square is empty; querying an empty
    /// square is valid and uninteresting, not an error.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let Some((color, piece)) = self.piece_at(from) else {
            return MoveList::new();
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_knight_moves(from, color),
            Piece::King => self.generate_king_moves(from, color),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(from, color, piece)
            }
        }
    }

    /// Union of pseudo-legal moves over every piece of one color
    pub(crate) fn all_pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.pieces_of(color) {
            moves.extend(&self.pseudo_legal_moves(from));
        }
        moves
    }

    /// Whether `color`'s king is attacked on this board.
    ///
    /// A king is attacked iff some opposing piece has a pseudo-legal move
    /// ending on its square. A board without a king of the given color is a
    /// valid partial setup and is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_piece(color, Piece::King) else {
            return false;
        };
        self.all_pseudo_legal_moves(color.opponent())
            .iter()
            .any(|mv| mv.to() == king_sq)
    }
}
