//! Exact fractional knapsack by value/weight ratio.
//!
//! Items are admitted in decreasing ratio order; the first item that does not
//! fit is split to fill the remaining capacity exactly. This greedy order is
//! optimal for the divisible variant.

use std::cmp::Ordering;
use std::time::Instant;

use knapforge_core::{Algorithm, Item, Result, SelectionEntry, SolveResult};
use tracing::{debug, info, trace};

use crate::solver::{checked_capacity, KnapsackSolver};

/// Greedy solver for the fractional variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractionalSolver;

impl FractionalSolver {
    pub fn new() -> Self {
        Self
    }
}

impl KnapsackSolver for FractionalSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fractional
    }

    fn solve(&self, items: &[Item], capacity: i64) -> Result<SolveResult> {
        let capacity = checked_capacity(Algorithm::Fractional, capacity)?;

        info!(
            event = "solve_start",
            algorithm = Algorithm::Fractional.as_str(),
            item_count = items.len() as u64,
            capacity,
        );

        if items.is_empty() || capacity == 0 {
            info!(
                event = "solve_end",
                algorithm = Algorithm::Fractional.as_str(),
                total_value = 0.0,
                selected_count = 0u64,
                duration_us = 0u64,
            );
            return Ok(SolveResult::empty(Algorithm::Fractional));
        }

        let start = Instant::now();
        let order = ratio_order(items);
        debug!(event = "ratios_sorted", item_count = order.len() as u64);

        let mut remaining = capacity;
        let mut total_value = 0.0;
        let mut selected = Vec::new();

        for index in order {
            if remaining == 0 {
                break;
            }

            let item = &items[index];
            if item.weight() <= remaining {
                remaining -= item.weight();
                total_value += item.value() as f64;
                selected.push(SelectionEntry::whole(index, item));
                trace!(event = "item_admitted", item = index as u64 + 1, fraction = 1.0);
            } else {
                let fraction = remaining as f64 / item.weight() as f64;
                total_value += item.value() as f64 * remaining as f64 / item.weight() as f64;
                selected.push(SelectionEntry::partial(index, item, fraction));
                trace!(event = "item_admitted", item = index as u64 + 1, fraction);
                remaining = 0;
            }
        }
        let elapsed = start.elapsed();

        info!(
            event = "solve_end",
            algorithm = Algorithm::Fractional.as_str(),
            total_value,
            selected_count = selected.len() as u64,
            duration_us = elapsed.as_micros() as u64,
        );

        Ok(SolveResult::new(
            Algorithm::Fractional,
            total_value,
            selected,
            elapsed,
        ))
    }
}

/// Solves the fractional variant.
pub fn solve_fractional(items: &[Item], capacity: i64) -> Result<SolveResult> {
    FractionalSolver::new().solve(items, capacity)
}

/// Item indices by decreasing value/weight ratio, ties by ascending index.
pub fn ratio_order(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_unstable_by(|&a, &b| compare_ratio(&items[b], &items[a]).then(a.cmp(&b)));
    order
}

// Exact ratio comparison: a.value / a.weight vs b.value / b.weight.
fn compare_ratio(a: &Item, b: &Item) -> Ordering {
    let lhs = a.value() as u128 * b.weight() as u128;
    let rhs = b.value() as u128 * a.weight() as u128;
    lhs.cmp(&rhs)
}
