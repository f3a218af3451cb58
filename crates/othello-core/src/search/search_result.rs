//! Search result types.

use crate::types::{Move, Score};

/// Result of a search operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen root move. At a depth limit of zero this is the searched
    /// state's own last move, which may be [`Move::NONE`].
    pub best_move: Move,
    /// Propagated leaf score (white disc count) of the chosen line.
    pub score: Score,
    /// Number of nodes visited, the root included.
    pub n_nodes: u64,
}
