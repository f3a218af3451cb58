use crate::disc::Disc;
use crate::game_state::GameState;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    let state = GameState::new();
    perft(&state, state.side_to_move(), depth)
}

/// Counts the leaves of the legal-move tree below `state` with `disc` to move.
///
/// A pass does not consume depth. When neither side can move the position
/// counts as a single leaf.
pub fn perft(state: &GameState, disc: Disc, depth: u32) -> u64 {
    let children = state.legal_moves(disc);

    if children.is_empty() {
        return if state.has_legal_move(disc.opposite()) {
            perft(state, disc.opposite(), depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return children.len() as u64;
    }

    children
        .iter()
        .map(|child| perft(child, disc.opposite(), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_perft() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
    }
}
