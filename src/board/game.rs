//! Game orchestration: legal moves, move application, check and mate
//! detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::InvalidMove;
use super::state::Board;
use super::types::{Color, Move, MoveList, Square};

/// A chess game: one board plus the side to move.
///
/// No terminal state is stored. Checkmate and stalemate are computed
/// predicates over the current position, so callers ask after each move
/// rather than polling a flag.
///
/// A `Game` is not internally synchronized; a caller receiving moves for the
/// same game from several connections must serialize access per game, e.g.
/// behind one mutex per live game.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Start a new game: standard position, White to move
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Reassemble a game from stored parts (persistence round-trips)
    #[must_use]
    pub fn from_parts(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    /// The current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board, keeping the turn (arbitrary position setup)
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// The side to move
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Override the side to move (arbitrary position setup)
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Legal moves for the piece on `from`: its pseudo-legal moves minus
    /// those leaving its own king attacked.
    ///
    /// Each candidate is tried on a clone of the board, so the game's own
    /// board is never disturbed. An empty square yields an empty list.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        let Some((color, _)) = self.board.piece_at(from) else {
            return MoveList::new();
        };
        let mut legal = MoveList::new();
        for &mv in &self.board.pseudo_legal_moves(from) {
            let mut hypothetical = self.board.clone();
            hypothetical.apply_move(mv);
            if !hypothetical.is_in_check(color) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Whether `color`'s king is attacked in the current position
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move anywhere
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.board.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Not in check, but still no legal move anywhere
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.board.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Shared aggregation for the two terminal predicates. Both go through
    /// this one scan of `legal_moves`, which keeps them mutually exclusive
    /// and jointly exhaustive with "has at least one legal move".
    fn has_any_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    /// Attempt a move for the side to move.
    ///
    /// Checks run in order: a piece must sit on the start square, it must
    /// belong to the side to move, and the full (from, to, promotion) triple
    /// must be in that square's legal move set. On success the board is
    /// updated and the turn flips; on failure nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let Some((color, _)) = self.board.piece_at(mv.from()) else {
            return Err(InvalidMove::NoPieceAtStart { square: mv.from() });
        };
        if color != self.turn {
            return Err(InvalidMove::NotPlayersTurn {
                square: mv.from(),
                piece_color: color,
            });
        }
        if !self.legal_moves(mv.from()).contains(mv) {
            return Err(InvalidMove::MoveNotLegal { mv });
        }

        self.board.apply_move(mv);
        self.turn = self.turn.opponent();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
