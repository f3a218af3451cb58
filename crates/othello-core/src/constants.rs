//! Global constants

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper bound on the number of legal moves in any position.
pub const MAX_MOVES: usize = BOARD_SQUARES;
