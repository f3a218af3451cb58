//! Game state management for Othello.
//!
//! This module provides the `GameState` struct which owns the board, remembers
//! who moved last, generates legal moves as fully applied child states, and
//! detects the end of the game.

use std::error::Error;
use std::fmt;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::constants::MAX_MOVES;
use crate::disc::Disc;
use crate::flip;
use crate::types::{Move, Score};

/// Child positions produced by [`GameState::legal_moves`], in row-major order.
pub type Children = ArrayVec<GameState, MAX_MOVES>;

/// Reasons a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The coordinates are outside the board (this includes [`Move::NONE`]).
    OutOfBounds(Move),
    /// The target cell already holds a disc.
    Occupied(Move),
    /// No direction from the target cell captures an opponent run.
    NoCapture(Move),
    /// The move places `Disc::Empty`.
    NotAColor(Move),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds(mv) => {
                write!(f, "({},{}) is outside the board", mv.row, mv.col)
            }
            GameError::Occupied(mv) => write!(f, "cell {mv} is already occupied"),
            GameError::NoCapture(mv) => write!(f, "{} at {mv} flips no discs", mv.disc),
            GameError::NotAColor(mv) => write!(f, "move at {mv} does not place a color"),
        }
    }
}

impl Error for GameError {}

/// Represents the state of an Othello game.
///
/// The state is a plain value: searching copies it for every explored child
/// instead of undoing moves in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// The color that made the most recent move or pass.
    last_mover: Disc,
    /// The most recently applied move, [`Move::NONE`] before the first one.
    last_move: Move,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// The last mover is White so that Black, who conventionally opens, is
    /// the side to move.
    ///
    /// # Returns
    ///
    /// A new `GameState` in the starting position.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Disc::White)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// This is useful for setting up specific positions for analysis
    /// or tests.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `last_mover` - The color considered to have moved last
    ///
    /// # Returns
    ///
    /// A new `GameState` with the specified position and no last move.
    pub fn from_board(board: Board, last_mover: Disc) -> Self {
        Self {
            board,
            last_mover,
            last_move: Move::NONE,
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color that moved (or passed) last.
    pub fn last_mover(&self) -> Disc {
        self.last_mover
    }

    /// Returns the last applied move.
    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// Returns which color is due to move next.
    pub fn side_to_move(&self) -> Disc {
        self.last_mover.opposite()
    }

    /// Checks why a move cannot be applied, if it cannot.
    ///
    /// A move is valid when its coordinates are on the board, it places a
    /// color, the target cell is empty, and at least one direction captures.
    ///
    /// # Errors
    ///
    /// Returns the first failed condition as a [`GameError`].
    pub fn check_move(&self, mv: &Move) -> Result<(), GameError> {
        if !mv.in_bounds() {
            return Err(GameError::OutOfBounds(*mv));
        }
        if !mv.disc.is_color() {
            return Err(GameError::NotAColor(*mv));
        }
        let (row, col) = (mv.row as usize, mv.col as usize);
        if self.board.get(row, col) != Disc::Empty {
            return Err(GameError::Occupied(*mv));
        }
        if !flip::is_capturing(&self.board, row, col, mv.disc) {
            return Err(GameError::NoCapture(*mv));
        }
        Ok(())
    }

    /// Returns `true` if `mv` may be applied to this state.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Applies a move to the board.
    ///
    /// Places `mv.disc` at the target cell, flips every captured run in all
    /// eight directions, and records `mv` as the last move and its color as
    /// the last mover.
    ///
    /// # Arguments
    ///
    /// * `mv` - The move to apply
    ///
    /// # Returns
    ///
    /// The number of flipped discs.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] and leaves the state untouched if the move is
    /// not valid.
    pub fn make_move(&mut self, mv: &Move) -> Result<usize, GameError> {
        if let Err(err) = self.check_move(mv) {
            tracing::trace!(%err, "rejected move");
            return Err(err);
        }
        Ok(self.apply_unchecked(mv))
    }

    /// Applies a move already known to be valid.
    fn apply_unchecked(&mut self, mv: &Move) -> usize {
        let (row, col) = (mv.row as usize, mv.col as usize);
        self.board.set(row, col, mv.disc);
        self.last_move = *mv;
        self.last_mover = mv.disc;
        flip::apply_flips(&mut self.board, row, col, mv.disc)
    }

    /// Records a forced pass by `disc`.
    ///
    /// The board is unchanged; only the last mover is updated so that the
    /// opponent becomes the side to move.
    pub fn pass(&mut self, disc: Disc) {
        self.last_mover = disc;
    }

    /// Generates every legal move for `disc` as a child state.
    ///
    /// Cells are scanned in row-major order. For every empty cell where
    /// `disc` captures in at least one direction, a copy of this state with
    /// that move applied is produced.
    ///
    /// # Returns
    ///
    /// The child states, ordered by (row, col).
    pub fn legal_moves(&self, disc: Disc) -> Children {
        let mut children = Children::new();
        for mv in self.candidate_moves(disc) {
            let mut child = *self;
            child.apply_unchecked(&mv);
            children.push(child);
        }
        children
    }

    /// Returns the legal moves for `disc` without building child states.
    ///
    /// The order matches [`GameState::legal_moves`].
    pub fn legal_move_list(&self, disc: Disc) -> ArrayVec<Move, MAX_MOVES> {
        self.candidate_moves(disc).collect()
    }

    /// Returns `true` if `disc` has at least one legal move.
    pub fn has_legal_move(&self, disc: Disc) -> bool {
        self.candidate_moves(disc).next().is_some()
    }

    fn candidate_moves(&self, disc: Disc) -> impl Iterator<Item = Move> + '_ {
        let board = &self.board;
        board
            .iter()
            .filter(move |&(row, col, cell)| {
                disc.is_color() && cell == Disc::Empty && flip::is_capturing(board, row, col, disc)
            })
            .map(move |(row, col, _)| Move::at(row, col, disc))
    }

    /// Checks if the game has ended.
    ///
    /// The game ends when neither color has a legal move. The board does not
    /// have to be full.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Disc::Black) && !self.has_legal_move(Disc::White)
    }

    /// Heuristic leaf score: the number of white discs on the board.
    ///
    /// Black's count is not subtracted. The search maximizes this value for
    /// White and minimizes it for Black.
    pub fn evaluate(&self) -> Score {
        self.board.count(Disc::White) as Score
    }

    /// Returns the disc count for both players.
    ///
    /// # Returns
    ///
    /// A tuple `(black_count, white_count)`.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.count(Disc::Black),
            self.board.count(Disc::White),
        )
    }

    /// Returns the color with more discs, or `None` on a draw.
    pub fn winner(&self) -> Option<Disc> {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for GameState {
    /// Formats the side to move followed by the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}'s turn.", self.side_to_move())?;
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str, last_mover: Disc) -> GameState {
        GameState::from_board(Board::from_string(s).unwrap(), last_mover)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.last_mover(), Disc::White);
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.last_move(), Move::NONE);
        assert!(!game.is_terminal());
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.evaluate(), 2);
    }

    #[test]
    fn test_opening_legal_moves_for_black() {
        let game = GameState::new();
        let moves: Vec<(i8, i8)> = game
            .legal_move_list(Disc::Black)
            .iter()
            .map(|mv| (mv.row, mv.col))
            .collect();
        assert_eq!(moves, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);

        let children = game.legal_moves(Disc::Black);
        assert_eq!(children.len(), 4);
        for (child, (row, col)) in children.iter().zip(moves) {
            assert_eq!(child.last_move(), Move::new(row, col, Disc::Black));
            assert_eq!(child.last_mover(), Disc::Black);
            assert_eq!(child.score(), (4, 1));
        }
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        let flipped = game.make_move(&Move::new(2, 3, Disc::Black)).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(game.board().get(2, 3), Disc::Black);
        assert_eq!(game.board().get(3, 3), Disc::Black);
        assert_eq!(game.board().get(4, 4), Disc::White);
        assert_eq!(game.last_mover(), Disc::Black);
        assert_eq!(game.side_to_move(), Disc::White);
    }

    #[test]
    fn test_make_move_adds_exactly_one_disc() {
        let mut game = GameState::new();
        let mut disc = Disc::Black;
        for _ in 0..10 {
            let before = game.board().occupied_count();
            let Some(&mv) = game.legal_move_list(disc).first() else {
                break;
            };
            game.make_move(&mv).unwrap();
            assert_eq!(game.board().occupied_count(), before + 1);
            disc = disc.opposite();
        }
    }

    #[test]
    fn test_illegal_moves_leave_state_untouched() {
        let mut game = GameState::new();
        let before = game;

        assert_eq!(
            game.make_move(&Move::new(0, 0, Disc::Black)),
            Err(GameError::NoCapture(Move::new(0, 0, Disc::Black)))
        );
        assert_eq!(
            game.make_move(&Move::new(3, 3, Disc::Black)),
            Err(GameError::Occupied(Move::new(3, 3, Disc::Black)))
        );
        assert_eq!(
            game.make_move(&Move::NONE),
            Err(GameError::OutOfBounds(Move::NONE))
        );
        assert_eq!(
            game.make_move(&Move::new(2, 3, Disc::Empty)),
            Err(GameError::NotAColor(Move::new(2, 3, Disc::Empty)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let game = GameState::new();
        let before = game;
        let first = game.legal_moves(Disc::White);
        let second = game.legal_moves(Disc::White);
        assert_eq!(first, second);
        assert_eq!(game.is_terminal(), game.is_terminal());
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_with_empty_cells() {
        // Only black discs remain: nobody can capture anything.
        let game = state(
            "BBBB----
             BBBB----
             --------
             --------
             --------
             --------
             --------
             --------",
            Disc::Black,
        );
        assert!(game.is_terminal());
        assert!(game.board().empty_count() > 0);
        assert!(game.legal_moves(Disc::Black).is_empty());
        assert!(game.legal_moves(Disc::White).is_empty());
    }

    #[test]
    fn test_terminal_full_board() {
        let game = state(&"BW".repeat(32), Disc::White);
        assert!(game.is_terminal());
        assert_eq!(game.score(), (32, 32));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_one_side_blocked_is_not_terminal() {
        // White captures (0,1) from (0,2); the corner disc cannot be flanked.
        let game = state(
            "WB------
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
            Disc::Black,
        );
        assert!(!game.has_legal_move(Disc::Black));
        assert_eq!(
            game.legal_move_list(Disc::White).as_slice(),
            &[Move::new(0, 2, Disc::White)]
        );
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_pass_switches_side_only() {
        let mut game = GameState::new();
        let board = *game.board();
        game.pass(Disc::Black);
        assert_eq!(game.side_to_move(), Disc::White);
        assert_eq!(*game.board(), board);
        assert_eq!(game.last_move(), Move::NONE);
    }

    #[test]
    fn test_children_do_not_share_board() {
        let game = GameState::new();
        let mut children = game.legal_moves(Disc::Black);
        let sibling = children[1];
        children[0].make_move(&Move::new(2, 2, Disc::White)).unwrap();
        assert_eq!(children[1], sibling);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_winner() {
        let mut game = GameState::new();
        game.make_move(&Move::new(2, 3, Disc::Black)).unwrap();
        assert_eq!(game.winner(), Some(Disc::Black));
    }

    #[test]
    fn test_display_announces_side_to_move() {
        let text = GameState::new().to_string();
        assert!(text.starts_with("B's turn.\n  0 1 2 3 4 5 6 7\n"));
    }
}
