//! Sliding traversal for bishops, rooks and queens.

use super::super::state::Board;
use super::super::types::{Color, Move, MoveList, Piece, Square};

const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Slide along each ray: through empty squares, capturing an enemy ends
    /// the ray, a friendly piece or the board edge ends it without a move.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: Piece,
    ) -> MoveList {
        let mut moves = MoveList::new();
        let directions: &[(isize, isize)] = match slider {
            Piece::Bishop => &DIAGONALS,
            Piece::Rook => &ORTHOGONALS,
            _ => &ALL_DIRECTIONS, // Queen
        };

        for &(dr, df) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.piece_at(next) {
                    None => {
                        moves.push(Move::new(from, next));
                        current = next;
                    }
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::new(from, next));
                        }
                        break;
                    }
                }
            }
        }

        moves
    }
}
