//! Solve results and the comparison derived from them.

use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::item::Item;

/// One admitted item in a solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionEntry {
    /// 0-based position of the item in the solved slice.
    pub item_index: usize,
    pub value: u64,
    pub weight: u64,
    /// Share of the item taken, in `(0, 1]`.
    pub fraction_used: f64,
}

impl SelectionEntry {
    /// An item taken in full.
    pub fn whole(item_index: usize, item: &Item) -> Self {
        Self {
            item_index,
            value: item.value(),
            weight: item.weight(),
            fraction_used: 1.0,
        }
    }

    /// An item taken in part.
    pub fn partial(item_index: usize, item: &Item, fraction_used: f64) -> Self {
        debug_assert!(fraction_used > 0.0 && fraction_used <= 1.0);
        Self {
            item_index,
            value: item.value(),
            weight: item.weight(),
            fraction_used,
        }
    }

    /// 1-based item number, as shown to users ("Item 3").
    pub fn item_number(&self) -> usize {
        self.item_index + 1
    }

    pub fn is_whole(&self) -> bool {
        self.fraction_used >= 1.0
    }

    /// Weight this entry occupies in the knapsack.
    pub fn weight_used(&self) -> f64 {
        self.weight as f64 * self.fraction_used
    }

    /// Value this entry contributes.
    pub fn value_gained(&self) -> f64 {
        self.value as f64 * self.fraction_used
    }
}

/// Outcome of a single solver invocation.
///
/// A fresh result is built on every run; sessions keep only the most recent
/// one per algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    pub algorithm: Algorithm,
    pub total_value: f64,
    pub selected: Vec<SelectionEntry>,
    /// Wall-clock time of the algorithm body only.
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn new(
        algorithm: Algorithm,
        total_value: f64,
        selected: Vec<SelectionEntry>,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            total_value,
            selected,
            elapsed,
        }
    }

    /// A zero-value result with nothing selected.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self::new(algorithm, 0.0, Vec::new(), Duration::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Total weight occupied by the selection.
    pub fn weight_used(&self) -> f64 {
        self.selected.iter().map(SelectionEntry::weight_used).sum()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Fraction used for each of `item_count` items, 0 where not selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapforge_core::{Algorithm, Item, SelectionEntry, SolveResult};
    /// use std::time::Duration;
    ///
    /// let item = Item::new(10, 5).unwrap();
    /// let result = SolveResult::new(
    ///     Algorithm::Fractional,
    ///     4.0,
    ///     vec![SelectionEntry::partial(1, &item, 0.4)],
    ///     Duration::ZERO,
    /// );
    /// assert_eq!(result.usage_by_item(3), vec![0.0, 0.4, 0.0]);
    /// ```
    pub fn usage_by_item(&self, item_count: usize) -> Vec<f64> {
        let mut usage = vec![0.0; item_count];
        for entry in &self.selected {
            if let Some(slot) = usage.get_mut(entry.item_index) {
                *slot = entry.fraction_used;
            }
        }
        usage
    }

    /// Whether two results chose the same items for the same value,
    /// ignoring timing.
    pub fn same_solution(&self, other: &SolveResult) -> bool {
        self.algorithm == other.algorithm
            && self.total_value == other.total_value
            && self.selected == other.selected
    }
}

/// Head-to-head summary of the latest 0/1 and fractional results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonSummary {
    pub zero_one_value: f64,
    /// Full precision; rounding is left to the display layer.
    pub fractional_value: f64,
    pub zero_one_elapsed: Duration,
    pub fractional_elapsed: Duration,
    pub faster: Algorithm,
    pub higher_value: Algorithm,
}

impl ComparisonSummary {
    pub fn value_of(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::ZeroOne => self.zero_one_value,
            Algorithm::Fractional => self.fractional_value,
        }
    }

    pub fn elapsed_of(&self, algorithm: Algorithm) -> Duration {
        match algorithm {
            Algorithm::ZeroOne => self.zero_one_elapsed,
            Algorithm::Fractional => self.fractional_elapsed,
        }
    }

    /// Value the fractional relaxation gains over the 0/1 answer.
    pub fn value_gap(&self) -> f64 {
        self.fractional_value - self.zero_one_value
    }

    /// 0/1 time divided by fractional time, `None` when the latter is zero.
    pub fn time_ratio(&self) -> Option<f64> {
        let fractional = self.fractional_elapsed.as_secs_f64();
        if fractional > 0.0 {
            Some(self.zero_one_elapsed.as_secs_f64() / fractional)
        } else {
            None
        }
    }
}
