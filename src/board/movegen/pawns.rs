//! Pawn move generation.
//!
//! Pawns fit neither traversal primitive: their push direction depends on
//! color, captures differ from quiet moves, and reaching the far rank turns
//! one destination into a four-move promotion family.

use super::super::state::Board;
use super::super::types::{Color, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                push_pawn_move(&mut moves, from, forward, promotion_rank);
                if from.rank() == start_rank {
                    // Both intermediate and destination squares must be empty
                    if let Some(double_forward) = from.offset(2 * dir, 0) {
                        if self.is_empty(double_forward) {
                            moves.push(Move::new(from, double_forward));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if let Some((occupant, _)) = self.piece_at(target) {
                if occupant != color {
                    push_pawn_move(&mut moves, from, target, promotion_rank);
                }
            }
        }

        moves
    }
}

/// Record a pawn move, expanding it into the promotion family when it lands
/// on the far rank. A bare non-promoting move onto that rank is never
/// produced.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, promotion_rank: usize) {
    if to.rank() == promotion_rank {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promoting(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
