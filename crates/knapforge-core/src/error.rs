//! Error types for Knapforge

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Main error type for Knapforge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// Solver invoked with input it refuses to run on
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Comparison requested before both algorithms produced a result
    #[error("Not ready: run the {missing} algorithm first")]
    NotReady { missing: Algorithm },

    /// Malformed or non-positive item input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The 0/1 table would exceed the configured cell budget
    #[error("Capacity limit exceeded: table needs {cells} cells, limit is {limit}")]
    CapacityLimit { cells: u128, limit: u64 },

    /// A result was handed to the comparison in the wrong slot
    #[error("Algorithm mismatch: expected a {expected} result, found {found}")]
    AlgorithmMismatch {
        expected: Algorithm,
        found: Algorithm,
    },
}

/// Result type alias for Knapforge operations
pub type Result<T> = std::result::Result<T, KnapsackError>;
