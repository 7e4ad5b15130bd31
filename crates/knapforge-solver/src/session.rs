//! A solving session: the item store plus the latest result per algorithm.

use knapforge_config::KnapsackConfig;
use knapforge_core::{
    Algorithm, ComparisonSummary, Item, ItemStore, KnapsackError, Result, SolveResult,
};
use tracing::warn;

use crate::comparison::ComparisonReporter;
use crate::fractional::FractionalSolver;
use crate::solver::KnapsackSolver;
use crate::zero_one::ZeroOneSolver;

/// Owns the items and capacity being edited, and keeps the most recent
/// result of each algorithm for comparison.
///
/// Running an algorithm overwrites its previous result. Adding items does
/// not clear stored results.
///
/// # Example
///
/// ```
/// use knapforge_solver::KnapsackSession;
///
/// let mut session = KnapsackSession::new();
/// session.add_item(60, 10).unwrap();
/// session.add_item(100, 20).unwrap();
/// session.add_item(120, 30).unwrap();
/// session.set_capacity(50);
///
/// assert!(session.compare().is_err());
///
/// session.run_zero_one().unwrap();
/// session.run_fractional().unwrap();
/// let summary = session.compare().unwrap();
/// assert_eq!(summary.zero_one_value, 220.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnapsackSession {
    store: ItemStore,
    zero_one: ZeroOneSolver,
    fractional: FractionalSolver,
    reporter: ComparisonReporter,
    last_zero_one: Option<SolveResult>,
    last_fractional: Option<SolveResult>,
}

impl KnapsackSession {
    /// Creates an empty session with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session holding the configured instance and solver limits.
    pub fn from_config(config: &KnapsackConfig) -> Self {
        Self {
            store: config.to_store(),
            zero_one: ZeroOneSolver::from_config(&config.zero_one),
            ..Self::default()
        }
    }

    /// Creates a session around an existing store.
    pub fn with_store(store: ItemStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Adds an item and returns its 0-based index.
    pub fn add_item(&mut self, value: i64, weight: i64) -> Result<usize> {
        self.store.add_item(value, weight)
    }

    /// Adds an already validated item and returns its 0-based index.
    pub fn push_item(&mut self, item: Item) -> usize {
        self.store.push(item)
    }

    pub fn set_capacity(&mut self, capacity: i64) {
        self.store.set_capacity(capacity);
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Runs the 0/1 solver on the current items.
    pub fn run_zero_one(&mut self) -> Result<&SolveResult> {
        self.run(Algorithm::ZeroOne)
    }

    /// Runs the fractional solver on the current items.
    pub fn run_fractional(&mut self) -> Result<&SolveResult> {
        self.run(Algorithm::Fractional)
    }

    /// Runs `algorithm` and stores its result, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::Precondition`] when the store has no items or
    /// the capacity is not positive. Solver errors are passed through and
    /// leave the previous result in place.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<&SolveResult> {
        self.check_runnable(algorithm)?;

        let items = self.store.items();
        let capacity = self.store.capacity();
        let result = match algorithm {
            Algorithm::ZeroOne => self.zero_one.solve(items, capacity)?,
            Algorithm::Fractional => self.fractional.solve(items, capacity)?,
        };

        let slot = match algorithm {
            Algorithm::ZeroOne => &mut self.last_zero_one,
            Algorithm::Fractional => &mut self.last_fractional,
        };
        Ok(slot.insert(result))
    }

    /// Compares the latest result of each algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::NotReady`] until both algorithms have run.
    pub fn compare(&self) -> Result<ComparisonSummary> {
        self.reporter
            .compare(self.last_zero_one.as_ref(), self.last_fractional.as_ref())
    }

    /// The latest stored result for `algorithm`, if any.
    pub fn last_result(&self, algorithm: Algorithm) -> Option<&SolveResult> {
        match algorithm {
            Algorithm::ZeroOne => self.last_zero_one.as_ref(),
            Algorithm::Fractional => self.last_fractional.as_ref(),
        }
    }

    fn check_runnable(&self, algorithm: Algorithm) -> Result<()> {
        if self.store.is_empty() || self.store.capacity() <= 0 {
            warn!(
                event = "solve_rejected",
                algorithm = algorithm.as_str(),
                item_count = self.store.len() as u64,
                capacity = self.store.capacity(),
            );
            return Err(KnapsackError::Precondition(
                "add at least one item and set a positive capacity".to_string(),
            ));
        }
        Ok(())
    }
}
