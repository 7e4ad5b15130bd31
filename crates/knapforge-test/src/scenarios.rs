//! Canonical knapsack instances with known optimal answers.
//!
//! # Example
//!
//! ```
//! use knapforge_test::scenarios::scenario_a;
//!
//! let scenario = scenario_a();
//! assert_eq!(scenario.items.len(), 3);
//! assert_eq!(scenario.capacity, 50);
//! assert_eq!(scenario.zero_one_value, 220.0);
//! ```

use knapforge_core::Item;

/// An instance together with its optimal values.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub items: Vec<Item>,
    pub capacity: i64,
    pub zero_one_value: f64,
    pub fractional_value: f64,
}

/// Builds items from `(value, weight)` pairs.
///
/// # Panics
///
/// Panics if a pair has a zero value or weight.
pub fn items(pairs: &[(u64, u64)]) -> Vec<Item> {
    pairs
        .iter()
        .map(|&(value, weight)| Item::new(value, weight).expect("fixture items are positive"))
        .collect()
}

/// Three items, capacity 50.
///
/// 0/1 takes items 2 and 3 for 220; fractional takes items 1 and 2 whole
/// and two thirds of item 3 for 240.
pub fn scenario_a() -> Scenario {
    Scenario {
        items: items(&[(60, 10), (100, 20), (120, 30)]),
        capacity: 50,
        zero_one_value: 220.0,
        fractional_value: 240.0,
    }
}

/// One item heavier than the capacity.
///
/// 0/1 takes nothing; fractional takes two fifths for 4.
pub fn scenario_b() -> Scenario {
    Scenario {
        items: items(&[(10, 5)]),
        capacity: 2,
        zero_one_value: 0.0,
        fractional_value: 4.0,
    }
}

/// Scenario A's items under a zero capacity.
pub fn scenario_c() -> Scenario {
    Scenario {
        items: items(&[(60, 10), (100, 20), (120, 30)]),
        capacity: 0,
        zero_one_value: 0.0,
        fractional_value: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_preserve_order() {
        let items = items(&[(1, 2), (3, 4)]);
        assert_eq!(items[0].value(), 1);
        assert_eq!(items[1].weight(), 4);
    }

    #[test]
    #[should_panic(expected = "fixture items are positive")]
    fn test_items_reject_zero() {
        items(&[(0, 1)]);
    }
}
