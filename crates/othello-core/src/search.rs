//! Game tree search engine.
//!
//! A fixed-depth, exhaustive minimax. White always maximizes and Black always
//! minimizes the leaf score ([`GameState::evaluate`]), whichever side the
//! computer plays. Every explored child is a fresh copy of its parent with one
//! move applied, so sibling subtrees never observe each other's changes.

pub mod node_type;
pub mod options;
pub mod search_result;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::disc::Disc;
use crate::game_state::GameState;
use crate::player::Player;
use crate::search::node_type::{Max, Min, NodeType};
use crate::types::{Depth, Move, Score};

pub use options::{SearchOptions, TieBreak};
pub use search_result::SearchResult;

/// Main search engine structure.
///
/// The searcher owns its tie-break generator; seeding it makes searches
/// reproducible.
pub struct Searcher<R = StdRng> {
    rng: R,
    tie_break: TieBreak,
    depth_limit: Depth,
    n_nodes: u64,
}

impl Searcher<StdRng> {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Searcher::with_rng(rng, options.tie_break)
    }
}

impl<R: Rng> Searcher<R> {
    /// Creates a search engine drawing tie-breaks from `rng`.
    pub fn with_rng(rng: R, tie_break: TieBreak) -> Self {
        Searcher {
            rng,
            tie_break,
            depth_limit: 0,
            n_nodes: 0,
        }
    }

    /// Returns the tie-break mode in use.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Selects a move for `disc` by searching `depth_limit` plies.
    ///
    /// # Arguments
    ///
    /// * `state` - The position to search; it is never modified
    /// * `disc` - The color to move
    /// * `depth_limit` - Number of plies to expand below `state`
    ///
    /// # Returns
    ///
    /// `None` if `disc` has no legal move and must pass. Otherwise the chosen
    /// root move with its propagated score. With a depth limit of zero the
    /// result is the leaf evaluation of `state` itself, paired with the move
    /// that produced it.
    pub fn select_move(
        &mut self,
        state: &GameState,
        disc: Disc,
        depth_limit: Depth,
    ) -> Option<SearchResult> {
        if !state.has_legal_move(disc) {
            tracing::debug!(%disc, "no legal move, pass");
            return None;
        }

        self.depth_limit = depth_limit;
        self.n_nodes = 0;

        let (best_move, score) = if disc == Disc::White {
            self.search::<Max>(state, 0)
        } else {
            self.search::<Min>(state, 0)
        };

        tracing::debug!(
            %disc,
            depth_limit,
            n_nodes = self.n_nodes,
            score,
            best_move = %best_move,
            "search finished"
        );

        Some(SearchResult {
            best_move,
            score,
            n_nodes: self.n_nodes,
        })
    }

    /// Selects a move for `player` at the player's own depth limit.
    ///
    /// Whether a player is computer-controlled is the caller's concern.
    pub fn select_for(&mut self, player: &Player, state: &GameState) -> Option<SearchResult> {
        self.select_move(state, player.disc(), player.depth_limit())
    }

    /// Searches one node and returns the move leading to the chosen child
    /// together with the child's propagated score.
    ///
    /// Leaves (terminal positions, the depth limit, or a side with no moves)
    /// return their own last move and evaluation.
    fn search<NT: NodeType>(&mut self, state: &GameState, depth: Depth) -> (Move, Score) {
        self.n_nodes += 1;

        if depth == self.depth_limit || state.is_terminal() {
            return (state.last_move(), state.evaluate());
        }

        let children = state.legal_moves(NT::PLAYER);
        if children.is_empty() {
            return (state.last_move(), state.evaluate());
        }

        let mut best: Option<(Move, Score)> = None;
        for child in &children {
            let (_, score) = self.search::<NT::Next>(child, depth + 1);
            let replace = match best {
                None => true,
                Some((_, best_score)) if NT::improves(score, best_score) => true,
                Some((_, best_score)) if score == best_score => self.take_tied(),
                Some(_) => false,
            };
            if replace {
                best = Some((child.last_move(), score));
            }
        }

        // `children` is not empty, so a best child was recorded.
        best.unwrap_or((state.last_move(), state.evaluate()))
    }

    /// Decides whether a tied challenger replaces the current best.
    fn take_tied(&mut self) -> bool {
        match self.tie_break {
            TieBreak::Random => self.rng.random_bool(0.5),
            TieBreak::PreferFirst => false,
            TieBreak::PreferLast => true,
        }
    }
}
