//! Serde round-trips for the persistence collaborator.
//!
//! Run with `cargo test --features serde`.

#![cfg(feature = "serde")]

use chess_rules::{Board, Color, Game, Move, Piece, Square};

#[test]
fn game_round_trips_through_json() {
    let mut game = Game::new();
    game.make_move(Move::new(Square(1, 4), Square(3, 4))).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.turn(), Color::Black);
}

#[test]
fn board_round_trips_through_json() {
    let mut board = Board::empty();
    board.set_piece(Square(4, 4), Color::Black, Piece::Queen);
    board.set_piece(Square(0, 0), Color::White, Piece::King);

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn move_round_trips_with_promotion() {
    let mv = Move::promoting(Square(6, 2), Square(7, 2), Piece::Knight);
    let json = serde_json::to_string(&mv).unwrap();
    let restored: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, mv);
    assert_eq!(restored.promotion(), Some(Piece::Knight));
}
