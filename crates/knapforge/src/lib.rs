//! Knapforge - Exact Knapsack Solvers in Rust
//!
//! Solve the 0/1 knapsack exactly by dynamic programming, the fractional
//! knapsack exactly by ratio greedy, and compare the two.
//!
//! # Example
//!
//! ```rust
//! use knapforge::prelude::*;
//!
//! let mut session = KnapsackSession::new();
//! session.add_item(60, 10)?;
//! session.add_item(100, 20)?;
//! session.add_item(120, 30)?;
//! session.set_capacity(50);
//!
//! session.run_zero_one()?;
//! session.run_fractional()?;
//!
//! let summary = session.compare()?;
//! assert_eq!(summary.zero_one_value, 220.0);
//! assert_eq!(summary.higher_value, Algorithm::Fractional);
//! # Ok::<(), KnapsackError>(())
//! ```

// Data model
pub use knapforge_core::{
    Algorithm, ComparisonSummary, Item, ItemStore, KnapsackError, Result, SelectionEntry,
    SolveResult, DEFAULT_CAPACITY,
};

// Configuration
pub use knapforge_config::{ConfigError, KnapsackConfig, ReportConfig, ZeroOneConfig};

// Solvers and the three core operations
pub use knapforge_solver::{
    compare, solve_fractional, solve_zero_one, ComparisonReporter, FractionalSolver,
    KnapsackSession, KnapsackSolver, ZeroOneSolver,
};

/// Console logging and text reports.
#[cfg(feature = "console")]
pub use knapforge_console as console;

pub mod prelude {
    pub use super::{
        compare, solve_fractional, solve_zero_one, Algorithm, ComparisonSummary, Item,
        KnapsackError, KnapsackSession, KnapsackSolver, SolveResult,
    };
}
