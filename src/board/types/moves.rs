//! Move type and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single pseudo-legal move candidate for the selected piece.
///
/// Carries only the destination; the origin is the square the moves were
/// generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Destination square
    pub to: Square,
    /// Whether an enemy piece sits on the destination
    pub is_capture: bool,
    /// Whether this is a two-square castling king move
    pub is_castling: bool,
}

impl Move {
    /// Create a quiet (non-capture) move
    #[inline]
    #[must_use]
    pub const fn quiet(to: Square) -> Self {
        Move {
            to,
            is_capture: false,
            is_castling: false,
        }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(to: Square) -> Self {
        Move {
            to,
            is_capture: true,
            is_castling: false,
        }
    }

    /// Create a castling king move
    #[inline]
    #[must_use]
    pub const fn castle(to: Square) -> Self {
        Move {
            to,
            is_capture: false,
            is_castling: true,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self.to)?;
        if self.is_capture {
            write!(f, " cap")?;
        }
        if self.is_castling {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to)
    }
}

/// A queen in the open reaches at most 27 squares; the king adds castling on
/// top of 8 neighbors. 32 leaves headroom.
pub(crate) const MAX_MOVES: usize = 32;

pub(crate) const EMPTY_MOVE: Move = Move::quiet(Square(0, 0));

/// List of candidate moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    /// Find the candidate targeting `to`, if any (exact row/column match)
    #[must_use]
    pub fn find(&self, to: Square) -> Option<Move> {
        self.iter().find(|m| m.to == to).copied()
    }

    /// Whether any candidate targets `to`
    #[must_use]
    pub fn contains(&self, to: Square) -> bool {
        self.find(to).is_some()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
