//! Common types used throughout the engine.

use std::fmt;

use crate::constants::BOARD_SIZE;
use crate::disc::Disc;

/// Search depth.
pub type Depth = u32;

/// Leaf score (number of white discs: 0 to 64).
pub type Score = i32;

/// A placement of `disc` at (`row`, `col`).
///
/// Coordinates are signed so that [`Move::NONE`] can sit outside the board.
/// A move with out-of-range coordinates is never applied to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i8,
    pub col: i8,
    pub disc: Disc,
}

impl Move {
    /// The unset move. Used as the last move of a freshly constructed game.
    pub const NONE: Move = Move {
        row: -1,
        col: -1,
        disc: Disc::Empty,
    };

    /// Creates a move placing `disc` at (`row`, `col`).
    ///
    /// Out-of-range coordinates are allowed here; validity is checked when the
    /// move is applied.
    pub const fn new(row: i8, col: i8, disc: Disc) -> Move {
        Move { row, col, disc }
    }

    /// Creates a move from unsigned board coordinates.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if either coordinate is outside the board.
    #[inline]
    pub fn at(row: usize, col: usize, disc: Disc) -> Move {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Move::new(row as i8, col as i8, disc)
    }

    /// Returns `true` if this is the unset sentinel.
    pub fn is_none(&self) -> bool {
        !self.in_bounds()
    }

    /// Returns `true` if both coordinates are on the board.
    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.row) && (0..BOARD_SIZE as i8).contains(&self.col)
    }

    /// Returns the same coordinates with a different disc.
    pub fn with_disc(self, disc: Disc) -> Move {
        Move { disc, ..self }
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{},{}", self.row, self.col)
        }
    }
}
