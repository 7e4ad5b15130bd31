//! Exhaustive reference answers.
//!
//! Enumerates every subset, so only use it for a handful of items.

use knapforge_core::Item;

/// Largest instance [`brute_force_best`] accepts.
pub const MAX_ORACLE_ITEMS: usize = 20;

/// Best 0/1 value and one subset achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BruteForceAnswer {
    pub value: u64,
    /// 0-based item indices, ascending.
    pub indices: Vec<usize>,
}

/// Finds the optimal 0/1 value by checking every subset.
///
/// # Panics
///
/// Panics if there are more than [`MAX_ORACLE_ITEMS`] items.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_test::oracle::brute_force_best;
///
/// let items = vec![Item::new(60, 10).unwrap(), Item::new(100, 20).unwrap()];
/// let answer = brute_force_best(&items, 25);
/// assert_eq!(answer.value, 100);
/// assert_eq!(answer.indices, vec![1]);
/// ```
pub fn brute_force_best(items: &[Item], capacity: i64) -> BruteForceAnswer {
    assert!(
        items.len() <= MAX_ORACLE_ITEMS,
        "brute force is limited to {} items",
        MAX_ORACLE_ITEMS
    );

    let capacity = capacity.max(0) as u64;
    let mut best = BruteForceAnswer {
        value: 0,
        indices: Vec::new(),
    };

    for mask in 0u32..(1u32 << items.len()) {
        let mut weight = 0u64;
        let mut value = 0u64;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += item.weight();
                value += item.value();
            }
        }
        if weight <= capacity && value > best.value {
            best = BruteForceAnswer {
                value,
                indices: (0..items.len()).filter(|&i| mask & (1 << i) != 0).collect(),
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::scenario_a;

    #[test]
    fn test_scenario_a() {
        let scenario = scenario_a();
        let answer = brute_force_best(&scenario.items, scenario.capacity);
        assert_eq!(answer.value, 220);
        assert_eq!(answer.indices, vec![1, 2]);
    }

    #[test]
    fn test_empty() {
        let answer = brute_force_best(&[], 10);
        assert_eq!(answer.value, 0);
        assert!(answer.indices.is_empty());
    }
}
