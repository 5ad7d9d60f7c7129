//! King-attacked detection.

use super::{Board, Color, Piece, Square};

impl Board {
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Whether `color`'s king is attacked by an enemy knight, bishop, rook,
    /// or queen.
    ///
    /// Pawns and the enemy king are deliberately excluded from the attacker
    /// scan, so pawn-delivered check and king adjacency are never detected.
    /// A board with no king of that color reports "not in check".
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            return false;
        };

        let enemy = color.opponent();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                match self.piece_at(sq) {
                    Some((occupant, piece))
                        if occupant == enemy && piece != Piece::Pawn && piece != Piece::King =>
                    {
                        if self.moves_from(sq).contains(king_sq) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }

        false
    }
}
