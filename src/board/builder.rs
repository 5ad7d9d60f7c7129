//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece, including partial boards for
//! tests (the check detector tolerates a missing king).
//!
//! # Example
//! ```
//! use chess_rules::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! ```

use super::{Board, CastlingRights, Color, Piece, Square, Wing};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    castling: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            castling: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut builder = Self::new();
        for (col, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square(7, col), Color::White, piece));
            builder.pieces.push((Square(0, col), Color::Black, piece));
            builder
                .pieces
                .push((Square(6, col), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Square(1, col), Color::Black, Piece::Pawn));
        }
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing any existing occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set castling rights wholesale.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant all castling rights.
    #[must_use]
    pub fn all_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::all();
        self
    }

    /// Revoke all castling rights.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Mark a color's king as having moved.
    #[must_use]
    pub fn king_moved(mut self, color: Color) -> Self {
        self.castling.mark_king_moved(color);
        self
    }

    /// Mark a color's rook on the given wing as having moved.
    #[must_use]
    pub fn rook_moved(mut self, color: Color, wing: Wing) -> Self {
        self.castling.mark_rook_moved(color, wing);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board.castling = self.castling;
        board
    }
}
