//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const KING_WHITE: u8 = 1 << 0;
const ROOK_WHITE_Q: u8 = 1 << 1;
const ROOK_WHITE_K: u8 = 1 << 2;
const KING_BLACK: u8 = 1 << 3;
const ROOK_BLACK_Q: u8 = 1 << 4;
const ROOK_BLACK_K: u8 = 1 << 5;

/// All castling rights combined
const ALL_RIGHTS: u8 =
    KING_WHITE | ROOK_WHITE_Q | ROOK_WHITE_K | KING_BLACK | ROOK_BLACK_Q | ROOK_BLACK_K;

/// Board wing a rook belongs to.
///
/// Anchored to the column in file order regardless of color: `QueenSide` is
/// the column-0 rook, `KingSide` the column-7 rook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wing {
    QueenSide,
    KingSide,
}

impl Wing {
    /// Starting column of this wing's rook (0 or 7)
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            Wing::QueenSide => 0,
            Wing::KingSide => 7,
        }
    }
}

/// Castling rights represented as a bitmask.
///
/// Tracks "king has not moved" plus one "rook has not moved" flag per wing and
/// color. Rights are monotonic: once removed, they cannot be restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (no king or rook has moved)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_RIGHTS)
    }

    /// Whether this color's king has never moved
    #[inline]
    #[must_use]
    pub const fn king_unmoved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    /// Whether this color's rook on the given wing has never moved
    #[inline]
    #[must_use]
    pub const fn rook_unmoved(self, color: Color, wing: Wing) -> bool {
        self.0 & Self::rook_bit(color, wing) != 0
    }

    /// Record that this color's king has moved
    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 &= !Self::king_bit(color);
    }

    /// Record that this color's rook on the given wing has moved
    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, wing: Wing) {
        self.0 &= !Self::rook_bit(color, wing);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_RIGHTS)
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => KING_WHITE,
            Color::Black => KING_BLACK,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, wing: Wing) -> u8 {
        match (color, wing) {
            (Color::White, Wing::QueenSide) => ROOK_WHITE_Q,
            (Color::White, Wing::KingSide) => ROOK_WHITE_K,
            (Color::Black, Wing::QueenSide) => ROOK_BLACK_Q,
            (Color::Black, Wing::KingSide) => ROOK_BLACK_K,
        }
    }
}
