use super::{DIAGONAL_RAYS, ORTHOGONAL_RAYS};

use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each ray until blocked: a friendly piece blocks without being
    /// included, an enemy piece is included as a capture and ends the ray.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();

        for &(dr, dc) in rays {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, dc) {
                match self.piece_at(to) {
                    Some((occupant, _)) if occupant == color => break,
                    Some(_) => {
                        moves.push(Move::capture(to));
                        break;
                    }
                    None => {
                        moves.push(Move::quiet(to));
                        cursor = to;
                    }
                }
            }
        }

        moves
    }

    /// Queen moves are the union of rook and bishop rays, not independently
    /// implemented.
    pub(crate) fn queen_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = self.slider_moves(from, color, &ORTHOGONAL_RAYS);
        for mv in self.slider_moves(from, color, &DIAGONAL_RAYS).iter() {
            moves.push(*mv);
        }
        moves
    }
}
