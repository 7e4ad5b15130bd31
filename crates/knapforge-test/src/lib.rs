//! Shared test fixtures for Knapforge crates.
//!
//! This crate provides data and pure functions for testing.
//! It does NOT depend on `knapforge-solver` so the solver crate can use it
//! as a dev-dependency.
//!
//! - [`scenarios`] - Canonical instances with known answers
//! - [`random`] - Seeded random instances
//! - [`oracle`] - Exhaustive reference answers for small instances
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! knapforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use knapforge_test::scenarios::scenario_a;
//! use knapforge_test::oracle::brute_force_best;
//! ```

pub mod oracle;
pub mod random;
pub mod scenarios;

// Re-export commonly used items at crate root for convenience
pub use oracle::{brute_force_best, BruteForceAnswer};
pub use random::random_instance;
pub use scenarios::{items, scenario_a, scenario_b, scenario_c, Scenario};

/// Tolerance for comparing accumulated `f64` values.
pub const EPSILON: f64 = 1e-9;

/// Whether two values agree within [`EPSILON`], scaled by magnitude.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}
