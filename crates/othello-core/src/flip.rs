//! Direction scans used by both move validation and disc flipping.
//!
//! A scan walks from a candidate cell in one compass direction over a run of
//! opponent discs. The walk only steps while the next cell is strictly inside
//! the board on every axis it moves along (`> 0` when decreasing, `< 7` when
//! increasing), so an edge cell is never crossed as part of the run. After the
//! walk, the stopping cell is accepted as an anchor if it is on the board
//! (edges included) and holds the mover's disc.

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::disc::Disc;

const LAST: isize = BOARD_SIZE as isize - 1;

/// One of the eight compass directions, as a (row, col) step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Returns the (row, col) step of this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Walk guard: the cell is strictly interior along each moving axis.
#[inline]
fn walk_guard(pos: isize, step: isize) -> bool {
    match step {
        -1 => pos > 0,
        1 => pos < LAST,
        _ => true,
    }
}

/// Anchor guard: the cell is on the board along each moving axis.
#[inline]
fn anchor_guard(pos: isize, step: isize) -> bool {
    match step {
        -1 => pos >= 0,
        1 => pos <= LAST,
        _ => true,
    }
}

/// Counts the opponent discs that placing `disc` at (`row`, `col`) would
/// capture in direction `dir`.
///
/// # Arguments
///
/// * `board` - The board to scan
/// * `row`, `col` - The candidate cell (its own content is not inspected)
/// * `dir` - The direction to walk
/// * `disc` - The color being placed
///
/// # Returns
///
/// The length of the captured run, or 0 if the direction is not capturing.
pub fn capture_len(board: &Board, row: usize, col: usize, dir: Direction, disc: Disc) -> usize {
    let opp = disc.opposite();
    let (dr, dc) = dir.delta();
    let mut i = row as isize + dr;
    let mut j = col as isize + dc;
    let mut count = 0;

    while walk_guard(i, dr)
        && walk_guard(j, dc)
        && board.get(i as usize, j as usize) == opp
    {
        i += dr;
        j += dc;
        count += 1;
    }

    if count > 0
        && anchor_guard(i, dr)
        && anchor_guard(j, dc)
        && board.get(i as usize, j as usize) == disc
    {
        count
    } else {
        0
    }
}

/// Returns `true` if at least one direction from (`row`, `col`) captures.
pub fn is_capturing(board: &Board, row: usize, col: usize, disc: Disc) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| capture_len(board, row, col, dir, disc) > 0)
}

/// Flips every captured run around (`row`, `col`) to `disc`.
///
/// The placed disc itself is not written here.
///
/// # Returns
///
/// The total number of flipped discs over all capturing directions.
pub(crate) fn apply_flips(board: &mut Board, row: usize, col: usize, disc: Disc) -> usize {
    let mut flipped = 0;
    for dir in Direction::ALL {
        // Rays from one cell are disjoint, so each run is measured before its own cells change.
        let n = capture_len(board, row, col, dir, disc);
        let (dr, dc) = dir.delta();
        for k in 1..=n as isize {
            let i = row as isize + dr * k;
            let j = col as isize + dc * k;
            board.set(i as usize, j as usize, disc);
        }
        flipped += n;
    }
    flipped
}
