use std::fmt;

use super::{CastlingRights, Color, Piece, Square};

/// The 8x8 board grid plus castling-rights bookkeeping.
///
/// Owns only position state. Validation is the move generator's and the
/// session's job; the mutation primitive here relocates without questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) castling: CastlingRights,
}

impl Board {
    /// Standard starting position with full castling rights.
    pub fn new() -> Self {
        let mut board = Board::empty();
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
        for color in Color::BOTH {
            for (col, &piece) in back_rank.iter().enumerate() {
                board.set_piece(Square(color.back_rank(), col), color, piece);
                board.set_piece(Square(color.pawn_start_rank(), col), color, Piece::Pawn);
            }
        }
        board.castling = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling: CastlingRights::none(),
        }
    }

    /// Piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Whether a square holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// The single mutation primitive: move whatever sits on `from` to `to`,
    /// clearing `from`. Overwrites any occupant of `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        self.squares[to.0][to.1] = self.squares[from.0][from.1].take();
    }

    /// Current castling rights.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some((color, piece)) => write!(f, "{} ", piece.to_board_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
