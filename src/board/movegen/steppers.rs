//! Stepping traversal for kings and knights.

use super::super::state::Board;
use super::super::types::{Color, Move, MoveList, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        self.generate_step_moves(from, color, &KING_OFFSETS)
    }

    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS)
    }

    /// One candidate square per offset, kept iff on the board and empty or
    /// enemy-occupied.
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize); 8],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some((occupant, _)) if occupant != color => moves.push(Move::new(from, to)),
                Some(_) => {}
            }
        }
        moves
    }
}
