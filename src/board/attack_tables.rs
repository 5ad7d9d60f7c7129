//! Precomputed per-square step targets for the jumping pieces.

use once_cell::sync::Lazy;

use super::Square;

fn step_table(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    let mut table: [Vec<Square>; 64] = std::array::from_fn(|_| Vec::new());
    for (idx, targets) in table.iter_mut().enumerate() {
        let from = Square(idx / 8, idx % 8);
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                targets.push(to);
            }
        }
    }
    table
}

pub(crate) static KNIGHT_STEPS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    step_table(&[
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ])
});

pub(crate) static KING_STEPS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    step_table(&[
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ])
});
