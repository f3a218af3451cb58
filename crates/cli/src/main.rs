mod error;
mod game;
mod prompt;
mod ui;

use clap::{Parser, ValueEnum};
use othello_core::disc::Disc;
use othello_core::player::Player;
use othello_core::search::{SearchOptions, Searcher, TieBreak};
use othello_core::types::Depth;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::prompt::{LineSource, Terminal};

/// Tie-break policy for equally scored moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    /// Decide ties with a coin flip
    Random,
    /// Keep the first move in row-major order
    First,
    /// Keep the last move in row-major order
    Last,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Random => TieBreak::Random,
            TieBreakArg::First => TieBreak::PreferFirst,
            TieBreakArg::Last => TieBreak::PreferLast,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello against a minimax computer opponent")]
struct Cli {
    /// Maximum search depth of the computer (asked at startup if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<Depth>,

    /// Your color, B or W; Black moves first (asked at startup if omitted)
    #[arg(short, long)]
    color: Option<Disc>,

    /// Seed for the computer's tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// How the computer chooses between equally scored moves
    #[arg(long, value_enum, default_value_t = TieBreakArg::Random)]
    tie_break: TieBreakArg,

    /// Mark your legal moves on the board
    #[arg(long)]
    hints: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut terminal = Terminal::new()?;
    println!("Welcome to Othello (Reversi)!");

    let Some(depth) = ask_depth(&mut terminal, args.depth)? else {
        return Ok(());
    };
    let Some(human_disc) = ask_color(&mut terminal, args.color)? else {
        return Ok(());
    };

    let human = Player::human(human_disc, depth);
    let computer = Player::computer(human_disc.opposite(), depth);
    let options = SearchOptions::default()
        .with_tie_break(args.tie_break.into())
        .with_seed(args.seed);
    let searcher = Searcher::new(&options);
    tracing::info!(
        %human_disc,
        depth,
        tie_break = ?searcher.tie_break(),
        seeded = options.seed.is_some(),
        "starting game"
    );

    let game = ui::Session::new(human, computer, searcher, &mut terminal)
        .with_hints(args.hints)
        .run()?;

    let (black, white) = game.score();
    tracing::info!(black, white, finished = game.is_terminal(), "game closed");
    Ok(())
}

fn ask_depth(source: &mut impl LineSource, preset: Option<Depth>) -> Result<Option<Depth>> {
    if preset.is_some() {
        return Ok(preset);
    }
    loop {
        match prompt::read_value::<Depth, _>(&mut *source, "Enter a maximum depth for MiniMax: ")? {
            Some(0) => println!("The depth must be at least 1."),
            other => return Ok(other),
        }
    }
}

fn ask_color(source: &mut impl LineSource, preset: Option<Disc>) -> Result<Option<Disc>> {
    if preset.is_some() {
        return Ok(preset);
    }
    prompt::read_value::<Disc, _>(&mut *source, "Choose a color (B goes first): [B/W] ")
}
