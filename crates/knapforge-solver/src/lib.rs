//! Knapforge Solver Engine
//!
//! This crate provides the knapsack solvers and the session that drives them:
//! - `ZeroOneSolver`: exact dynamic programming with subset reconstruction
//! - `FractionalSolver`: exact greedy by value/weight ratio
//! - `ComparisonReporter`: head-to-head summary of the latest results
//! - `KnapsackSession`: item store plus the last result per algorithm
//!
//! Both solvers run synchronously on the calling thread.
//!
//! # Example
//!
//! ```
//! use knapforge_core::Item;
//! use knapforge_solver::{compare, solve_fractional, solve_zero_one};
//!
//! let items = vec![
//!     Item::new(60, 10).unwrap(),
//!     Item::new(100, 20).unwrap(),
//!     Item::new(120, 30).unwrap(),
//! ];
//!
//! let zero_one = solve_zero_one(&items, 50).unwrap();
//! let fractional = solve_fractional(&items, 50).unwrap();
//! assert_eq!(zero_one.total_value, 220.0);
//! assert_eq!(fractional.total_value, 240.0);
//!
//! let summary = compare(Some(&zero_one), Some(&fractional)).unwrap();
//! assert_eq!(summary.value_gap(), 20.0);
//! ```

pub mod comparison;
pub mod fractional;
pub mod session;
pub mod solver;
pub mod zero_one;

#[cfg(test)]
mod fractional_tests;

pub use comparison::{compare, ComparisonReporter};
pub use fractional::{solve_fractional, FractionalSolver};
pub use session::KnapsackSession;
pub use solver::KnapsackSolver;
pub use zero_one::{solve_zero_one, ZeroOneSolver};
