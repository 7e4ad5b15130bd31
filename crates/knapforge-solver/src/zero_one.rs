//! Exact 0/1 knapsack by dynamic programming.
//!
//! The table holds `(n + 1) * (W + 1)` cells, so time and memory grow with
//! the capacity, not just the item count. Callers bound `W` themselves or
//! configure [`ZeroOneSolver::with_max_table_cells`]. Without a configured
//! limit, tables larger than the address space allows are refused with
//! [`KnapsackError::CapacityLimit`], as is any allocation the system denies.
//!
//! Cells are `u128`, so sums of `u64` item values never overflow.
//!
//! Logging levels:
//! - **INFO**: Solve start/end
//! - **DEBUG**: Table dimensions
//! - **TRACE**: Items picked during reconstruction

use std::time::Instant;

use knapforge_config::ZeroOneConfig;
use knapforge_core::{Algorithm, Item, KnapsackError, Result, SelectionEntry, SolveResult};
use tracing::{debug, info, trace, warn};

use crate::solver::{checked_capacity, KnapsackSolver};

type Cell = u128;

/// Largest table a `Vec<Cell>` can address.
pub const MAX_ADDRESSABLE_CELLS: u64 =
    (isize::MAX as u64) / std::mem::size_of::<Cell>() as u64;

/// Dynamic programming solver for the 0/1 variant.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_solver::{KnapsackSolver, ZeroOneSolver};
///
/// let items = vec![Item::new(10, 5).unwrap()];
/// let result = ZeroOneSolver::new().solve(&items, 2).unwrap();
/// assert_eq!(result.total_value, 0.0);
/// assert!(result.selected.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZeroOneSolver {
    max_table_cells: Option<u64>,
}

impl ZeroOneSolver {
    /// Creates a solver with no table size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver from configuration.
    pub fn from_config(config: &ZeroOneConfig) -> Self {
        Self {
            max_table_cells: config.max_table_cells,
        }
    }

    /// Refuses instances whose table would exceed `cells` entries.
    pub fn with_max_table_cells(mut self, cells: u64) -> Self {
        self.max_table_cells = Some(cells);
        self
    }

    pub fn max_table_cells(&self) -> Option<u64> {
        self.max_table_cells
    }

    fn table_limit(&self) -> u64 {
        self.max_table_cells
            .unwrap_or(MAX_ADDRESSABLE_CELLS)
            .min(MAX_ADDRESSABLE_CELLS)
    }

    fn check_table_size(&self, item_count: usize, capacity: u64) -> Result<usize> {
        let cells = (item_count as u128 + 1) * (capacity as u128 + 1);
        let limit = self.table_limit();
        if cells > limit as u128 {
            return Err(reject_table(cells, limit));
        }
        Ok(cells as usize)
    }
}

fn reject_table(cells: u128, limit: u64) -> KnapsackError {
    warn!(
        event = "solve_rejected",
        algorithm = Algorithm::ZeroOne.as_str(),
        cells = u64::try_from(cells).unwrap_or(u64::MAX),
        limit,
    );
    KnapsackError::CapacityLimit { cells, limit }
}

impl KnapsackSolver for ZeroOneSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ZeroOne
    }

    fn solve(&self, items: &[Item], capacity: i64) -> Result<SolveResult> {
        let capacity = checked_capacity(Algorithm::ZeroOne, capacity)?;

        info!(
            event = "solve_start",
            algorithm = Algorithm::ZeroOne.as_str(),
            item_count = items.len() as u64,
            capacity,
        );

        if items.is_empty() || capacity == 0 {
            info!(
                event = "solve_end",
                algorithm = Algorithm::ZeroOne.as_str(),
                total_value = 0.0,
                selected_count = 0u64,
                duration_us = 0u64,
            );
            return Ok(SolveResult::empty(Algorithm::ZeroOne));
        }

        let cells = self.check_table_size(items.len(), capacity)?;

        let start = Instant::now();
        let table = ValueTable::build(items, capacity as usize)
            .ok_or_else(|| reject_table(cells as u128, self.table_limit()))?;
        let selected = table.reconstruct(items);
        let elapsed = start.elapsed();

        debug!(
            event = "table_built",
            rows = table.rows as u64,
            cols = table.cols as u64,
            cells = cells as u64,
        );

        let total_value = table.best() as f64;
        info!(
            event = "solve_end",
            algorithm = Algorithm::ZeroOne.as_str(),
            total_value,
            selected_count = selected.len() as u64,
            duration_us = elapsed.as_micros() as u64,
        );

        Ok(SolveResult::new(
            Algorithm::ZeroOne,
            total_value,
            selected,
            elapsed,
        ))
    }
}

/// Solves the 0/1 variant with an unbounded [`ZeroOneSolver`].
pub fn solve_zero_one(items: &[Item], capacity: i64) -> Result<SolveResult> {
    ZeroOneSolver::new().solve(items, capacity)
}

/// Row-major `(n + 1) x (W + 1)` grid; cell `(i, w)` is the best value using
/// the first `i` items within budget `w`.
struct ValueTable {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl ValueTable {
    /// Returns `None` if the table cannot be allocated.
    fn build(items: &[Item], capacity: usize) -> Option<Self> {
        let rows = items.len() + 1;
        let cols = capacity + 1;
        let len = rows.checked_mul(cols)?;
        let mut cells: Vec<Cell> = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0);

        for (i, item) in items.iter().enumerate() {
            let (done, rest) = cells.split_at_mut((i + 1) * cols);
            let prev = &done[i * cols..];
            let row = &mut rest[..cols];

            // Too heavy for any budget: the row repeats the previous one.
            let weight = match usize::try_from(item.weight()) {
                Ok(weight) if weight <= capacity => weight,
                _ => {
                    row.copy_from_slice(prev);
                    continue;
                }
            };

            row[..weight].copy_from_slice(&prev[..weight]);
            for w in weight..cols {
                let with_item = Cell::from(item.value()) + prev[w - weight];
                row[w] = prev[w].max(with_item);
            }
        }

        Some(Self { rows, cols, cells })
    }

    fn get(&self, i: usize, w: usize) -> Cell {
        self.cells[i * self.cols + w]
    }

    fn best(&self) -> Cell {
        self.get(self.rows - 1, self.cols - 1)
    }

    // Walks back from the last row; a cell differing from the one above means
    // that row's item was taken.
    fn reconstruct(&self, items: &[Item]) -> Vec<SelectionEntry> {
        let mut w = self.cols - 1;
        let mut selected = Vec::new();

        for i in (1..self.rows).rev() {
            if self.get(i, w) != self.get(i - 1, w) {
                let item = &items[i - 1];
                trace!(event = "item_admitted", item = i as u64, fraction = 1.0);
                selected.push(SelectionEntry::whole(i - 1, item));
                w -= item.weight() as usize;
            }
        }

        selected.reverse();
        selected
    }
}
