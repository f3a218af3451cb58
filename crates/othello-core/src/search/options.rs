/// How the search resolves a child whose score equals the current best.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Replace the current best on a fair coin flip.
    #[default]
    Random,
    /// Keep the earliest child in row-major order.
    PreferFirst,
    /// Take the latest child in row-major order.
    PreferLast,
}

#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub tie_break: TieBreak,
    /// Seed for the tie-break generator. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl SearchOptions {
    /// Fix the tie-break generator seed so that repeated searches of the same
    /// position choose the same moves.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Select a deterministic tie-break mode, or restore the random one.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
