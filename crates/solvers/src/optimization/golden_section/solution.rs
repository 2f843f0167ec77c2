use bufferstock_core::Snapshot;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to within the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a golden section search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Best evaluated x.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Model input and output at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of shrink iterations performed.
    pub iters: usize,
}
