//! Core value types for the board layer.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, Wing};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
