//! Chess board representation and rules logic.
//!
//! A mailbox board with per-piece pseudo-legal move generation and a
//! deliberately narrow check scan. No legality filtering beyond movement
//! shape: moving into check, leaving check unanswered, and similar blunders
//! are the caller's to permit or prevent.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let moves = board.moves_from(Square(6, 4));
//! println!("White's e-pawn has {} moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod check;
mod error;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{SelectionError, SquareError};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square, Wing};
