pub mod board;
pub mod session;

pub use board::{Board, BoardBuilder, CastlingRights, Color, Move, MoveList, Piece, Square, Wing};
pub use session::{
    CapturedPieces, GameSession, MoveOutcome, PlayedMove, RookRelocation, SelectionError,
    SharedSession,
};
