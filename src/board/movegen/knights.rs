use super::super::attack_tables::KNIGHT_STEPS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for &to in &KNIGHT_STEPS[from.as_index()] {
            match self.piece_at(to) {
                Some((occupant, _)) if occupant == color => continue,
                Some(_) => moves.push(Move::capture(to)),
                None => moves.push(Move::quiet(to)),
            }
        }

        moves
    }
}
