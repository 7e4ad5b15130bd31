//! Knapforge Core - Core types and errors for knapsack solving
//!
//! This crate provides the data model shared by every Knapforge crate:
//! - Items and the item store a session solves against
//! - Selection entries and solve results produced by the solvers
//! - The comparison summary derived from two results
//! - The error taxonomy

pub mod algorithm;
pub mod error;
pub mod item;
pub mod result;

#[cfg(test)]
mod item_tests;

pub use algorithm::Algorithm;
pub use error::{KnapsackError, Result};
pub use item::{Item, ItemStore, DEFAULT_CAPACITY};
pub use result::{ComparisonSummary, SelectionEntry, SolveResult};
