//! Node type definitions for the minimax recursion.

use crate::disc::Disc;
use crate::types::Score;

/// Node where White moves and the highest score is kept.
pub struct Max;

/// Node where Black moves and the lowest score is kept.
pub struct Min;

/// Trait for compile-time node type specialization.
pub trait NodeType {
    /// The color whose moves are expanded at this node.
    const PLAYER: Disc;
    /// The node type of the children.
    type Next: NodeType;

    /// Returns `true` if `score` is strictly preferred over `best`.
    fn improves(score: Score, best: Score) -> bool;
}

impl NodeType for Max {
    const PLAYER: Disc = Disc::White;
    type Next = Min;

    #[inline]
    fn improves(score: Score, best: Score) -> bool {
        score > best
    }
}

impl NodeType for Min {
    const PLAYER: Disc = Disc::Black;
    type Next = Max;

    #[inline]
    fn improves(score: Score, best: Score) -> bool {
        score < best
    }
}
