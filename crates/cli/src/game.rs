//! Board rendering for the Othello CLI.
//!
//! The layout follows the plain board format of the core (`B`, `W`, `-` with
//! row and column indices) and adds terminal colors, the last move and,
//! optionally, the legal cells of the human player.

use colored::{ColoredString, Colorize};
use othello_core::constants::BOARD_SIZE;
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::types::Move;

/// Renders `game` as lines of text.
///
/// # Arguments
/// * `game` - The position to render
/// * `hints` - Cells to mark as legal for the side to move
pub fn render(game: &GameState, hints: &[Move]) -> Vec<String> {
    let board = game.board();
    let last_move = game.last_move();
    let (black_count, white_count) = game.score();

    let mut lines = Vec::with_capacity(BOARD_SIZE + 2);
    let turn = match game.side_to_move() {
        Disc::Black => "B's turn.".bright_green(),
        _ => "W's turn.".bright_yellow(),
    };
    lines.push(turn.to_string());

    let mut header = String::from(" ");
    for col in 0..BOARD_SIZE {
        header.push_str(&format!(" {col}"));
    }
    lines.push(header);

    for row in 0..BOARD_SIZE {
        let mut line = format!("{row}");
        for col in 0..BOARD_SIZE {
            let is_last = last_move.in_bounds()
                && last_move.row as usize == row
                && last_move.col as usize == col;
            let is_hint = hints
                .iter()
                .any(|mv| mv.row as usize == row && mv.col as usize == col);
            line.push(' ');
            line.push_str(&cell(board.get(row, col), is_last, is_hint).to_string());
        }

        // Side information
        match row {
            1 => line.push_str(&format!("   Black: {}", format!("{black_count:2}").bright_green())),
            2 => line.push_str(&format!("   White: {}", format!("{white_count:2}").bright_yellow())),
            _ => {}
        }
        lines.push(line);
    }
    lines
}

fn cell(disc: Disc, is_last: bool, is_hint: bool) -> ColoredString {
    match disc {
        Disc::Black if is_last => "B".on_bright_black().bright_green(),
        Disc::White if is_last => "W".on_bright_black().bright_yellow(),
        Disc::Black => "B".bright_green(),
        Disc::White => "W".bright_yellow(),
        Disc::Empty if is_hint => "*".bright_cyan(),
        Disc::Empty => "-".normal(),
    }
}

/// Prints the board to stdout.
pub fn print(game: &GameState, hints: &[Move]) {
    for line in render(game, hints) {
        println!("{line}");
    }
}

/// Prints the final tallies and the result.
pub fn print_result(game: &GameState) {
    let (black_count, white_count) = game.score();
    println!("{}", "*** Game Over ***".bright_red());
    println!("Black: {black_count}  White: {white_count}");
    match game.winner() {
        Some(Disc::Black) => println!("{}", "Black wins!".bright_green()),
        Some(_) => println!("{}", "White wins!".bright_yellow()),
        None => println!("{}", "Draw".bright_cyan()),
    }
}
