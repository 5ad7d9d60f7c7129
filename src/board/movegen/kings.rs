use super::super::attack_tables::KING_STEPS;
use super::super::{Board, Color, Move, MoveList, Square, Wing};

impl Board {
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for &to in &KING_STEPS[from.as_index()] {
            match self.piece_at(to) {
                Some((occupant, _)) if occupant == color => continue,
                Some(_) => moves.push(Move::capture(to)),
                None => moves.push(Move::quiet(to)),
            }
        }

        // Castling: a two-square king move toward an unmoved rook, offered
        // only while the king is unmoved and not currently in check. The
        // squares strictly between king and rook column must be empty. The
        // king's transit and destination squares are NOT checked for attacks,
        // and rook presence is not verified; rights bookkeeping is the sole
        // authority for the rook.
        if self.castling.king_unmoved(color) && !self.is_king_in_check(color) {
            let (row, col) = (from.row(), from.col());

            if self.castling.rook_unmoved(color, Wing::QueenSide)
                && col >= 3
                && (1..=3).all(|d| self.is_empty_square(Square(row, col - d)))
            {
                moves.push(Move::castle(Square(row, col - 2)));
            }
            if self.castling.rook_unmoved(color, Wing::KingSide)
                && col + 2 < 8
                && (1..=2).all(|d| self.is_empty_square(Square(row, col + d)))
            {
                moves.push(Move::castle(Square(row, col + 2)));
            }
        }

        moves
    }
}
