use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        // One step forward onto an empty square. A pawn on the far rank has
        // no forward square and generates nothing (promotion is not modeled).
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                moves.push(Move::quiet(forward));
            }
        }

        // Two steps from the start rank, both intervening squares empty.
        if from.row() == color.pawn_start_rank() {
            let one = from.offset(dir, 0);
            let two = from.offset(2 * dir, 0);
            if let (Some(one), Some(two)) = (one, two) {
                if self.is_empty_square(one) && self.is_empty_square(two) {
                    moves.push(Move::quiet(two));
                }
            }
        }

        // Diagonal captures onto enemy-occupied squares only. No en passant.
        for dcol in [-1, 1] {
            if let Some(target) = from.offset(dir, dcol) {
                if let Some((occupant, _)) = self.piece_at(target) {
                    if occupant != color {
                        moves.push(Move::capture(target));
                    }
                }
            }
        }

        moves
    }
}
