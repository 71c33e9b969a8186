//! Interpreter configuration.

/// How `g` and `p` treat coordinates outside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// `g` pushes 0 and `p` does nothing.
    #[default]
    Lenient,
    /// Both fail with an out-of-bounds error.
    Strict,
}

/// Configuration for an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the `?` instruction. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Out-of-bounds handling for `g` and `p`.
    pub bounds: BoundsPolicy,
}

impl EngineConfig {
    /// Creates the default configuration: entropy-seeded and lenient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the bounds policy.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder method for strict bounds checking.
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_bounds(BoundsPolicy::Strict)
    }
}
