//! Interactive turn loop between a human and the computer.

use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::player::Player;
use othello_core::search::Searcher;
use othello_core::types::Move;

use crate::error::Result;
use crate::game;
use crate::prompt::{self, LineSource};

/// What happened during a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Played,
    Passed,
    /// The human entered an illegal move; the board is unchanged.
    Rejected,
    /// Input ended.
    Quit,
}

/// One game between a human and a computer player.
pub struct Session<'a, S: LineSource + ?Sized> {
    game: GameState,
    human: Player,
    computer: Player,
    searcher: Searcher,
    input: &'a mut S,
    show_hints: bool,
}

impl<'a, S: LineSource + ?Sized> Session<'a, S> {
    /// Creates a session in the opening position.
    ///
    /// # Arguments
    /// * `human` - The human-controlled player
    /// * `computer` - The computer-controlled player
    /// * `searcher` - Search engine used for the computer's moves
    /// * `input` - Where the human's coordinates are read from
    pub fn new(
        human: Player,
        computer: Player,
        searcher: Searcher,
        input: &'a mut S,
    ) -> Self {
        Session {
            game: GameState::new(),
            human,
            computer,
            searcher,
            input,
            show_hints: false,
        }
    }

    /// Marks the human's legal cells when printing the board.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Starts from `game` instead of the opening position.
    #[cfg(test)]
    fn with_state(mut self, game: GameState) -> Self {
        self.game = game;
        self
    }

    /// Plays until the game ends or the input runs out.
    ///
    /// # Returns
    ///
    /// The final position.
    pub fn run(mut self) -> Result<GameState> {
        self.print_board();

        while !self.game.is_terminal() {
            let player = if self.game.last_mover() == self.human.disc() {
                self.computer
            } else {
                self.human
            };

            match self.play_turn(&player)? {
                Turn::Quit => {
                    tracing::info!("input closed, leaving the game");
                    return Ok(self.game);
                }
                Turn::Rejected => continue,
                Turn::Played | Turn::Passed => self.print_board(),
            }
        }

        game::print_result(&self.game);
        Ok(self.game)
    }

    fn play_turn(&mut self, player: &Player) -> Result<Turn> {
        let disc = player.disc();
        if !self.game.has_legal_move(disc) {
            println!("No moves for {disc}. PASS");
            self.game.pass(disc);
            return Ok(Turn::Passed);
        }

        if player.is_human() {
            self.human_turn(disc)
        } else {
            Ok(self.computer_turn(player))
        }
    }

    fn human_turn(&mut self, disc: Disc) -> Result<Turn> {
        let Some(row) = prompt::read_value::<i8, _>(&mut *self.input, "Give X Coordinates: ")? else {
            return Ok(Turn::Quit);
        };
        let Some(col) = prompt::read_value::<i8, _>(&mut *self.input, "Give Y Coordinates: ")? else {
            return Ok(Turn::Quit);
        };

        let mv = Move::new(row, col, disc);
        match self.game.make_move(&mv) {
            Ok(_) => Ok(Turn::Played),
            Err(err) => {
                println!("Invalid move: {err}");
                Ok(Turn::Rejected)
            }
        }
    }

    fn computer_turn(&mut self, player: &Player) -> Turn {
        let disc = player.disc();
        let Some(result) = self.searcher.select_for(player, &self.game) else {
            println!("No moves for {disc}. PASS");
            self.game.pass(disc);
            return Turn::Passed;
        };

        let mv = result.best_move.with_disc(disc);
        println!("Played at {},{}", mv.row, mv.col);
        match self.game.make_move(&mv) {
            Ok(_) => Turn::Played,
            Err(err) => {
                // A depth limit of zero reports the previous move, not a new one.
                tracing::warn!(%err, depth = player.depth_limit(), "computer move rejected, passing");
                self.game.pass(disc);
                Turn::Passed
            }
        }
    }

    fn print_board(&self) {
        let hints = if self.show_hints && self.game.side_to_move() == self.human.disc() {
            self.game.legal_move_list(self.human.disc()).to_vec()
        } else {
            Vec::new()
        };
        game::print(&self.game, &hints);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::Script;
    use othello_core::board::Board;
    use othello_core::search::{SearchOptions, TieBreak};

    fn searcher() -> Searcher {
        Searcher::new(
            &SearchOptions::default()
                .with_tie_break(TieBreak::PreferFirst)
                .with_seed(Some(3)),
        )
    }

    // Black to move with no capture; White's only move (0,2) ends the game.
    fn black_blocked() -> GameState {
        let board = Board::from_string(
            "WB------
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        )
        .unwrap();
        GameState::from_board(board, Disc::White)
    }

    #[test]
    fn test_human_move_then_computer_reply() {
        let mut script = Script::new(&["2", "3"]);
        let session = Session::new(
            Player::human(Disc::Black, 1),
            Player::computer(Disc::White, 1),
            searcher(),
            &mut script,
        );
        let game = session.run().unwrap();

        assert_eq!(game.board().get(2, 3), Disc::Black);
        assert_eq!(game.board().occupied_count(), 6);
        assert_eq!(game.last_mover(), Disc::White);
        // The computer's reply to (2,3) with the first tied child is (2,2).
        assert_eq!(game.last_move(), Move::new(2, 2, Disc::White));
    }

    #[test]
    fn test_invalid_human_move_is_reprompted() {
        let mut script = Script::new(&["abc", "0", "0", "9", "9", "5", "4"]);
        let session = Session::new(
            Player::human(Disc::Black, 1),
            Player::computer(Disc::White, 1),
            searcher(),
            &mut script,
        );
        let game = session.run().unwrap();

        assert_eq!(game.board().get(5, 4), Disc::Black);
        assert_eq!(game.board().get(0, 0), Disc::Empty);
        assert_eq!(game.board().occupied_count(), 6);
    }

    #[test]
    fn test_computer_opens_when_human_is_white() {
        let mut script = Script::new(&[]);
        let session = Session::new(
            Player::human(Disc::White, 1),
            Player::computer(Disc::Black, 1),
            searcher(),
            &mut script,
        );
        let game = session.run().unwrap();

        assert_eq!(game.last_move(), Move::new(2, 3, Disc::Black));
        assert_eq!(game.board().occupied_count(), 5);
    }

    #[test]
    fn test_human_without_moves_passes_without_input() {
        let mut script = Script::new(&["0", "2"]);
        let session = Session::new(
            Player::human(Disc::Black, 1),
            Player::computer(Disc::White, 1),
            searcher(),
            &mut script,
        )
        .with_state(black_blocked());
        let game = session.run().unwrap();

        assert_eq!(script.remaining(), 2);
        assert!(game.is_terminal());
        assert_eq!(game.last_move(), Move::new(0, 2, Disc::White));
        assert_eq!(game.score(), (0, 3));
        assert_eq!(game.winner(), Some(Disc::White));
    }

    #[test]
    fn test_computer_without_moves_passes() {
        let mut script = Script::new(&["0", "2"]);
        let session = Session::new(
            Player::human(Disc::White, 1),
            Player::computer(Disc::Black, 1),
            searcher(),
            &mut script,
        )
        .with_state(black_blocked());
        let game = session.run().unwrap();

        assert_eq!(script.remaining(), 0);
        assert!(game.is_terminal());
        assert_eq!(game.last_mover(), Disc::White);
        assert_eq!(game.board().get(0, 2), Disc::White);
        assert_eq!(game.score(), (0, 3));
    }

    #[test]
    fn test_terminal_position_ends_the_session() {
        let board = Board::from_string(
            "BBBBBBBB
             BBBBBBBB
             BBBBBBBB
             BBBBBBBB
             WWWWWWWW
             WWWWWWWW
             WWWWWWWW
             WWWWWWWW",
        )
        .unwrap();
        let mut script = Script::new(&["3", "3"]);
        let session = Session::new(
            Player::human(Disc::Black, 2),
            Player::computer(Disc::White, 2),
            searcher(),
            &mut script,
        )
        .with_state(GameState::from_board(board, Disc::White));
        let game = session.run().unwrap();

        assert_eq!(script.remaining(), 2);
        assert!(game.is_terminal());
        assert_eq!(game.score(), (32, 32));
        assert_eq!(game.winner(), None);
    }
}
