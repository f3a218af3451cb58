use std::error::Error;
use std::fmt;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::Disc;

/// Represents an Othello board as an 8x8 grid of cells.
///
/// Cells are addressed by (row, column), both in `0..8`, with (0, 0) in the
/// top-left corner. Cells can only be changed by the crate's move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Disc; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    /// Creates the standard opening position: White on (3,3) and (4,4),
    /// Black on (3,4) and (4,3).
    fn default() -> Self {
        let mut board = Board::empty();
        board.cells[3][3] = Disc::White;
        board.cells[3][4] = Disc::Black;
        board.cells[4][3] = Disc::Black;
        board.cells[4][4] = Disc::White;
        board
    }
}

impl Board {
    /// Creates a new `Board` with the initial Othello setup.
    ///
    /// # Returns
    /// A new `Board` instance.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` with every cell empty.
    pub fn empty() -> Board {
        Board {
            cells: [[Disc::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string must contain exactly 64 significant characters, listed in
    /// row-major order from (0,0) to (7,7). Whitespace is ignored, so the
    /// board can be laid out one row per line. Characters are interpreted as:
    /// - `'B'` for a black disc
    /// - `'W'` for a white disc
    /// - `'-'` for an empty cell
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    ///
    /// # Errors
    /// Returns an error on an unknown character or a wrong cell count.
    pub fn from_string(board_string: &str) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut n = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            if n >= BOARD_SQUARES {
                return Err(ParseBoardError::Length(n + 1));
            }
            let disc = match c {
                'B' => Disc::Black,
                'W' => Disc::White,
                '-' => Disc::Empty,
                other => return Err(ParseBoardError::Char(other)),
            };
            board.cells[n / BOARD_SIZE][n % BOARD_SIZE] = disc;
            n += 1;
        }
        if n != BOARD_SQUARES {
            return Err(ParseBoardError::Length(n));
        }
        Ok(board)
    }

    /// Gets the disc at a cell.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Disc {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, disc: Disc) {
        self.cells[row][col] = disc;
    }

    /// Counts the cells holding `disc`.
    pub fn count(&self, disc: Disc) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == disc)
            .count() as u32
    }

    /// Returns the number of empty cells.
    pub fn empty_count(&self) -> u32 {
        self.count(Disc::Empty)
    }

    /// Returns the number of cells holding a disc of either color.
    pub fn occupied_count(&self) -> u32 {
        BOARD_SQUARES as u32 - self.empty_count()
    }

    /// Iterates over all cells in row-major order as `(row, col, disc)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Disc)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &disc)| (row, col, disc))
        })
    }
}

impl fmt::Display for Board {
    /// Formats the board as a grid with row and column indices.
    ///
    /// ```text
    ///   0 1 2 3 4 5 6 7
    /// 0 - - - - - - - -
    /// ...
    /// 3 - - - W B - - -
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for disc in line {
                write!(f, " {}", disc.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error returned by [`Board::from_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// A character other than `B`, `W`, `-` or whitespace.
    Char(char),
    /// The number of cells read (not 64).
    Length(usize),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::Char(c) => write!(f, "unexpected board character '{c}'"),
            ParseBoardError::Length(n) => {
                write!(f, "expected {BOARD_SQUARES} cells, found {n}")
            }
        }
    }
}

impl Error for ParseBoardError {}
