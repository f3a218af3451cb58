pub mod board;
pub mod constants;
pub mod disc;
pub mod flip;
pub mod game_state;
pub mod perft;
pub mod player;
pub mod search;
pub mod types;
