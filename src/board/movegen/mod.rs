mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, MoveList, Piece, Square};

pub(crate) const ORTHOGONAL_RAYS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_RAYS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Pseudo-legal candidate moves for the piece on `from`.
    ///
    /// Generates for the color of the occupant, so either side's pieces can
    /// be probed regardless of whose turn it is. An empty square yields an
    /// empty list. No self-check filtering is performed: a returned move may
    /// leave or put the mover's own king in check.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        match self.piece_at(from) {
            None => MoveList::new(),
            Some((color, piece)) => match piece {
                Piece::Pawn => self.pawn_moves(from, color),
                Piece::Knight => self.knight_moves(from, color),
                Piece::Bishop => self.slider_moves(from, color, &DIAGONAL_RAYS),
                Piece::Rook => self.slider_moves(from, color, &ORTHOGONAL_RAYS),
                Piece::Queen => self.queen_moves(from, color),
                Piece::King => self.king_moves(from, color),
            },
        }
    }
}
