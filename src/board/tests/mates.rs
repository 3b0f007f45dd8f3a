//! Check, checkmate and stalemate scenarios.

use std::str::FromStr;

use crate::board::{BoardBuilder, Color, Game, InvalidMove, Move, Piece, Square};

fn sq(notation: &str) -> Square {
    Square::from_str(notation).unwrap()
}

#[test]
fn test_fresh_game_has_no_terminal_state() {
    let game = Game::new();
    for color in Color::BOTH {
        assert!(!game.is_in_check(color));
        assert!(!game.is_in_checkmate(color));
        assert!(!game.is_in_stalemate(color));
    }
}

#[test]
fn test_rook_gives_check_down_the_file() {
    let game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .build_game();
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_in_check(Color::Black));
}

#[test]
fn test_interposed_piece_blocks_check() {
    let game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e4"), Color::White, Piece::Pawn)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .build_game();
    assert!(!game.is_in_check(Color::White));
}

#[test]
fn test_knight_check_ignores_blockers() {
    let game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::White, Piece::Pawn)
        .piece(sq("d2"), Color::White, Piece::Pawn)
        .piece(sq("d3"), Color::Black, Piece::Knight)
        .build_game();
    assert!(game.is_in_check(Color::White));
}

#[test]
fn test_pawn_checks_diagonally_forward() {
    let game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("f2"), Color::Black, Piece::Pawn)
        .build_game();
    assert!(game.is_in_check(Color::White));

    // A pawn straight ahead gives no check
    let quiet = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::Black, Piece::Pawn)
        .build_game();
    assert!(!quiet.is_in_check(Color::White));
}

#[test]
fn test_no_king_is_never_in_check() {
    // Partial setups may omit a king entirely; the predicates must answer
    // rather than fail.
    let game = BoardBuilder::new()
        .piece(sq("d4"), Color::Black, Piece::Queen)
        .build_game();
    assert!(!game.is_in_check(Color::White));
    assert!(!game.is_in_checkmate(Color::White));
}

#[test]
fn test_back_rank_mate() {
    // White king sealed behind its own pawns, black rook sweeps the rank.
    let game = BoardBuilder::new()
        .piece(sq("g1"), Color::White, Piece::King)
        .piece(sq("f2"), Color::White, Piece::Pawn)
        .piece(sq("g2"), Color::White, Piece::Pawn)
        .piece(sq("h2"), Color::White, Piece::Pawn)
        .piece(sq("a1"), Color::Black, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build_game();
    assert!(game.is_in_check(Color::White));
    assert!(game.is_in_checkmate(Color::White));
    assert!(!game.is_in_stalemate(Color::White));
    assert!(!game.is_in_checkmate(Color::Black));
}

#[test]
fn test_back_rank_escape_square_prevents_mate() {
    // Same position with the g2 pawn gone: Kg2 escapes.
    let game = BoardBuilder::new()
        .piece(sq("g1"), Color::White, Piece::King)
        .piece(sq("f2"), Color::White, Piece::Pawn)
        .piece(sq("h2"), Color::White, Piece::Pawn)
        .piece(sq("a1"), Color::Black, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build_game();
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_in_checkmate(Color::White));
}

#[test]
fn test_check_escaped_by_capturing_attacker() {
    let game = BoardBuilder::new()
        .piece(sq("h1"), Color::White, Piece::King)
        .piece(sq("g1"), Color::Black, Piece::Rook)
        .build_game();
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_in_checkmate(Color::White));
    assert!(game
        .legal_moves(sq("h1"))
        .contains(Move::new(sq("h1"), sq("g1"))));
}

#[test]
fn test_check_escaped_by_interposing() {
    // The king cannot move, but the g1 knight can block on e2.
    let game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("d1"), Color::White, Piece::Queen)
        .piece(sq("f1"), Color::White, Piece::Bishop)
        .piece(sq("d2"), Color::White, Piece::Pawn)
        .piece(sq("f2"), Color::White, Piece::Pawn)
        .piece(sq("g1"), Color::White, Piece::Knight)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build_game();
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_in_checkmate(Color::White));

    // Interposing is the knight's only legal move
    let moves = game.legal_moves(sq("g1"));
    assert_eq!(moves.len(), 1);
    assert!(moves.contains(Move::new(sq("g1"), sq("e2"))));
}

#[test]
fn test_cornered_king_stalemate() {
    // Lone black king on a8, boxed by the c7 queen without check.
    let game = BoardBuilder::new()
        .piece(sq("a8"), Color::Black, Piece::King)
        .piece(sq("c7"), Color::White, Piece::Queen)
        .piece(sq("h1"), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build_game();
    assert!(!game.is_in_check(Color::Black));
    assert!(game.is_in_stalemate(Color::Black));
    assert!(!game.is_in_checkmate(Color::Black));
}

#[test]
fn test_stalemate_lifts_when_a_pawn_can_move() {
    let game = BoardBuilder::new()
        .piece(sq("a8"), Color::Black, Piece::King)
        .piece(sq("c7"), Color::White, Piece::Queen)
        .piece(sq("h1"), Color::White, Piece::King)
        .piece(sq("h7"), Color::Black, Piece::Pawn)
        .side_to_move(Color::Black)
        .build_game();
    assert!(!game.is_in_stalemate(Color::Black));
}

#[test]
fn test_lone_king_in_the_open_is_not_stalemated() {
    let game = BoardBuilder::new()
        .piece(sq("d5"), Color::Black, Piece::King)
        .side_to_move(Color::Black)
        .build_game();
    assert!(!game.is_in_stalemate(Color::Black));
    assert_eq!(game.legal_moves(sq("d5")).len(), 8);
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        game.make_move(Move::new(sq(from), sq(to))).unwrap();
    }
    assert!(game.is_in_check(Color::White));
    assert!(game.is_in_checkmate(Color::White));
    assert!(!game.is_in_stalemate(Color::White));

    // No white move can answer the mate
    let mv = Move::new(sq("a2"), sq("a3"));
    assert_eq!(
        game.make_move(mv).unwrap_err(),
        InvalidMove::MoveNotLegal { mv }
    );
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        game.make_move(Move::new(sq(from), sq(to))).unwrap();
    }
    assert!(game.is_in_checkmate(Color::Black));
    assert!(!game.is_in_checkmate(Color::White));
}

#[test]
fn test_checkmate_and_stalemate_disagree_everywhere() {
    let positions = [
        Game::new(),
        BoardBuilder::new()
            .piece(sq("g1"), Color::White, Piece::King)
            .piece(sq("f2"), Color::White, Piece::Pawn)
            .piece(sq("g2"), Color::White, Piece::Pawn)
            .piece(sq("h2"), Color::White, Piece::Pawn)
            .piece(sq("a1"), Color::Black, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .build_game(),
        BoardBuilder::new()
            .piece(sq("a8"), Color::Black, Piece::King)
            .piece(sq("c7"), Color::White, Piece::Queen)
            .piece(sq("h1"), Color::White, Piece::King)
            .side_to_move(Color::Black)
            .build_game(),
    ];
    for game in &positions {
        for color in Color::BOTH {
            assert!(!(game.is_in_checkmate(color) && game.is_in_stalemate(color)));
        }
    }
}
