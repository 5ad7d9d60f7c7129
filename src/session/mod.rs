//! Game session: selection handshake, move execution, turn order.
//!
//! A `GameSession` is an explicit per-game value; embedders hold one per
//! logical game rather than sharing a process-wide instance. The
//! generate-then-execute handshake is modeled as a two-state machine: the
//! session is idle until `generate_moves` records a selection, and
//! `execute_move` consumes it. Executing with no selection is a defined
//! error, not undefined behavior.

mod shared;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, MoveList, Piece, Square, Wing};

pub use crate::board::SelectionError;
pub use shared::SharedSession;

/// Pieces captured so far, per color of the capturing player, in capture
/// order. Used by the presentation layer for offset placement only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    lists: [Vec<Piece>; 2],
}

impl CapturedPieces {
    /// Pieces captured by `color`, oldest first.
    #[must_use]
    pub fn by(&self, color: Color) -> &[Piece] {
        &self.lists[color.index()]
    }

    fn push(&mut self, color: Color, piece: Piece) {
        self.lists[color.index()].push(piece);
    }
}

/// The rook displacement that accompanied a castling move, so the
/// presentation layer can animate the rook as well as the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RookRelocation {
    pub from: Square,
    pub to: Square,
}

/// A successfully executed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    /// The moved piece's new square
    pub to: Square,
    /// The piece removed from the destination, if the move captured
    pub captured: Option<Piece>,
    /// The rook displacement, if the move was a castling
    pub castling_rook: Option<RookRelocation>,
}

/// Outcome of an `execute_move` call.
///
/// `Rejected` is the ordinary "clicked a square that is not a candidate"
/// no-op, not an error: nothing moves, the turn does not pass, and the
/// selection stays live so the player can click a valid destination next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Rejected,
    Played(PlayedMove),
}

impl MoveOutcome {
    /// The played move, if the destination was accepted.
    #[must_use]
    pub fn played(self) -> Option<PlayedMove> {
        match self {
            MoveOutcome::Played(mv) => Some(mv),
            MoveOutcome::Rejected => None,
        }
    }
}

/// One game of chess: board position, turn order, capture bookkeeping, and
/// the transient selection the generate/execute handshake runs on.
///
/// Not internally synchronized. Concurrent hosts must wrap the session in an
/// exclusive-access boundary such as [`SharedSession`]; interleaving
/// `generate_moves`/`execute_move` pairs from different callers corrupts the
/// handshake.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    active: Color,
    captured: CapturedPieces,
    selection: Option<Square>,
}

impl GameSession {
    /// Fresh game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::White)
    }

    /// Game over an arbitrary position, for tests and resumed states.
    #[must_use]
    pub fn with_board(board: Board, active: Color) -> Self {
        GameSession {
            board,
            active,
            captured: CapturedPieces::default(),
            selection: None,
        }
    }

    /// Candidate moves for the piece on `from`, recording `from` as the
    /// pending selection.
    ///
    /// The selection is recorded even when the square is empty (the
    /// subsequent `execute_move` then rejects every destination), matching
    /// the presentation contract: selecting is a pure UI gesture and never
    /// fails.
    pub fn generate_moves(&mut self, from: Square) -> MoveList {
        self.selection = Some(from);
        let moves = self.board.moves_from(from);
        trace!("selected {from}: {} candidate moves", moves.len());
        moves
    }

    /// Execute the move from the pending selection to `to`.
    ///
    /// Re-derives the selected piece and its candidates, then matches `to`
    /// against them. An unmatched destination yields
    /// `Ok(MoveOutcome::Rejected)` with no side effects and the selection
    /// retained. Calling with no pending selection is a call-ordering error.
    pub fn execute_move(&mut self, to: Square) -> Result<MoveOutcome, SelectionError> {
        let from = self.selection.ok_or(SelectionError::NoSelection)?;

        let Some((_, piece)) = self.board.piece_at(from) else {
            debug!("execute {to}: selected square {from} is empty, rejecting");
            return Ok(MoveOutcome::Rejected);
        };
        let Some(mv) = self.board.moves_from(from).find(to) else {
            debug!("execute {to}: not a candidate for {piece:?} on {from}, rejecting");
            return Ok(MoveOutcome::Rejected);
        };

        let castling_rook = if mv.is_castling {
            self.relocate_castling_rook(to)
        } else {
            None
        };

        let captured = if mv.is_capture {
            let captured = self.board.piece_at(to).map(|(_, p)| p);
            if let Some(piece) = captured {
                self.captured.push(self.active, piece);
            }
            captured
        } else {
            None
        };

        match piece {
            Piece::King => self.board.castling.mark_king_moved(self.active),
            Piece::Rook if from.col() == Wing::QueenSide.rook_col() => self
                .board
                .castling
                .mark_rook_moved(self.active, Wing::QueenSide),
            Piece::Rook if from.col() == Wing::KingSide.rook_col() => self
                .board
                .castling
                .mark_rook_moved(self.active, Wing::KingSide),
            _ => {}
        }

        self.board.relocate(from, to);
        self.selection = None;
        let mover = self.active;
        self.active = self.active.opponent();

        debug!("{mover} played {piece:?} {from} -> {to} (capture: {})", mv.is_capture);
        Ok(MoveOutcome::Played(PlayedMove {
            to,
            captured,
            castling_rook,
        }))
    }

    /// Relocate the wing rook for a castling king destination and drop that
    /// wing's rook right. Keyed on the destination column exactly like the
    /// rest of the castling bookkeeping: column 2 means the a-rook, column 6
    /// the h-rook; any other castling destination moves no rook.
    fn relocate_castling_rook(&mut self, king_to: Square) -> Option<RookRelocation> {
        let wing = match king_to.col() {
            2 => Wing::QueenSide,
            6 => Wing::KingSide,
            _ => return None,
        };
        let rook_from = Square(king_to.row(), wing.rook_col());
        let rook_to = match wing {
            Wing::QueenSide => Square(king_to.row(), king_to.col() + 1),
            Wing::KingSide => Square(king_to.row(), king_to.col() - 1),
        };
        self.board.relocate(rook_from, rook_to);
        self.board.castling.mark_rook_moved(self.active, wing);
        Some(RookRelocation {
            from: rook_from,
            to: rook_to,
        })
    }

    /// The color to move.
    #[must_use]
    pub fn active_player(&self) -> Color {
        self.active
    }

    /// Captured pieces per capturing color, in capture order.
    #[must_use]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Read access to the position for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square of the pending selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
