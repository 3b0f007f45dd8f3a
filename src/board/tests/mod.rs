//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `board.rs` - Board state: clone independence, equality, find, reset
//! - `movegen.rs` - Per-piece pseudo-legal move geometry
//! - `game.rs` - Move application, turn handling, error taxonomy
//! - `mates.rs` - Check, checkmate and stalemate scenarios
//! - `proptest.rs` - Property-based tests

mod mates;
