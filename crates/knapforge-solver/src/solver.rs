//! The solver seam shared by both knapsack variants.

use knapforge_core::{Algorithm, Item, KnapsackError, Result, SolveResult};
use tracing::warn;

/// An exact knapsack solver.
///
/// Implementations are stateless with respect to the instance: every call to
/// [`solve`](KnapsackSolver::solve) reads the given snapshot and builds a
/// fresh [`SolveResult`].
pub trait KnapsackSolver {
    /// The variant this solver answers.
    fn algorithm(&self) -> Algorithm;

    /// Solves `items` under `capacity`.
    ///
    /// An empty item list or a zero capacity yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::Precondition`] for a negative capacity.
    fn solve(&self, items: &[Item], capacity: i64) -> Result<SolveResult>;
}

// Converts the boundary capacity into the unsigned budget the algorithms use.
pub(crate) fn checked_capacity(algorithm: Algorithm, capacity: i64) -> Result<u64> {
    u64::try_from(capacity).map_err(|_| {
        warn!(
            event = "solve_rejected",
            algorithm = algorithm.as_str(),
            capacity,
        );
        KnapsackError::Precondition(format!(
            "capacity must not be negative, got {capacity}"
        ))
    })
}
