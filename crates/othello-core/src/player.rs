//! Player configuration.

use crate::disc::Disc;
use crate::types::Depth;

/// Who decides a player's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are read from external input.
    Human,
    /// Moves are chosen by the search.
    Computer,
}

/// A participant in the game: a color, a search-depth bound and a kind.
///
/// Players carry configuration only; the game state lives in
/// [`GameState`](crate::game_state::GameState).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    disc: Disc,
    depth_limit: Depth,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `disc` is `Disc::Empty`.
    pub fn new(disc: Disc, depth_limit: Depth, kind: PlayerKind) -> Player {
        debug_assert!(disc.is_color(), "a player must have a color");
        Player {
            disc,
            depth_limit,
            kind,
        }
    }

    pub fn human(disc: Disc, depth_limit: Depth) -> Player {
        Player::new(disc, depth_limit, PlayerKind::Human)
    }

    pub fn computer(disc: Disc, depth_limit: Depth) -> Player {
        Player::new(disc, depth_limit, PlayerKind::Computer)
    }

    pub fn disc(&self) -> Disc {
        self.disc
    }

    pub fn depth_limit(&self) -> Depth {
        self.depth_limit
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}
