use knapforge_core::{Algorithm, KnapsackError};
use knapforge_test::{approx_eq, items, random_instance, scenario_a, scenario_b, scenario_c};

use crate::fractional::ratio_order;
use crate::*;

#[test]
fn test_scenario_a() {
    let scenario = scenario_a();
    let result = solve_fractional(&scenario.items, scenario.capacity).unwrap();

    assert_eq!(result.algorithm, Algorithm::Fractional);
    assert!(approx_eq(result.total_value, 240.0));
    assert_eq!(result.selected.len(), 3);

    assert_eq!(result.selected[0].item_index, 0);
    assert_eq!(result.selected[0].fraction_used, 1.0);
    assert_eq!(result.selected[1].item_index, 1);
    assert_eq!(result.selected[1].fraction_used, 1.0);
    assert_eq!(result.selected[2].item_index, 2);
    assert!(approx_eq(result.selected[2].fraction_used, 2.0 / 3.0));
    assert!(approx_eq(result.weight_used(), 50.0));
}

#[test]
fn test_scenario_b_partial_item() {
    let scenario = scenario_b();
    let result = solve_fractional(&scenario.items, scenario.capacity).unwrap();
    assert!(approx_eq(result.total_value, 4.0));
    assert_eq!(result.selected.len(), 1);
    assert!(approx_eq(result.selected[0].fraction_used, 0.4));
}

#[test]
fn test_scenario_c_zero_capacity() {
    let scenario = scenario_c();
    let result = solve_fractional(&scenario.items, scenario.capacity).unwrap();
    assert_eq!(result.total_value, 0.0);
    assert!(result.selected.is_empty());
}

#[test]
fn test_empty_items() {
    let result = solve_fractional(&[], 10).unwrap();
    assert_eq!(result.total_value, 0.0);
    assert!(result.selected.is_empty());
}

#[test]
fn test_negative_capacity_is_precondition_error() {
    let err = solve_fractional(&scenario_a().items, -3).unwrap_err();
    assert!(matches!(err, KnapsackError::Precondition(_)));
}

#[test]
fn test_everything_fits() {
    let items = items(&[(5, 2), (7, 3), (1, 1)]);
    let result = solve_fractional(&items, 100).unwrap();
    assert_eq!(result.total_value, 13.0);
    assert_eq!(result.selected.len(), 3);
    assert!(result.selected.iter().all(|e| e.is_whole()));
    assert_eq!(result.weight_used(), 6.0);
}

#[test]
fn test_ratio_order_breaks_ties_by_index() {
    // Ratios: 2, 3, 2, 3
    let items = items(&[(4, 2), (9, 3), (2, 1), (6, 2)]);
    assert_eq!(ratio_order(&items), vec![1, 3, 0, 2]);
}

#[test]
fn test_ratio_order_is_exact() {
    // 1/3 vs 333_333_333/1_000_000_000: the second is slightly smaller
    let items = items(&[(333_333_333, 1_000_000_000), (1, 3)]);
    assert_eq!(ratio_order(&items), vec![1, 0]);
}

#[test]
fn test_only_last_entry_is_partial() {
    for seed in 0..40 {
        let items = random_instance(seed, 12, 80, 20);
        let result = solve_fractional(&items, 45).unwrap();
        let (last, rest) = result.selected.split_last().unwrap();
        assert!(rest.iter().all(|e| e.is_whole()), "seed {seed}");
        assert!(last.fraction_used > 0.0 && last.fraction_used <= 1.0);
    }
}

#[test]
fn test_fills_capacity_unless_everything_fits() {
    for seed in 0..40 {
        let items = random_instance(seed, 8, 50, 20);
        let total_weight: u64 = items.iter().map(|i| i.weight()).sum();
        let capacity = 40;
        let result = solve_fractional(&items, capacity).unwrap();

        let used = result.weight_used();
        assert!(used <= capacity as f64 + 1e-9, "seed {seed}");
        if total_weight > capacity as u64 {
            assert!(approx_eq(used, capacity as f64), "seed {seed}");
        } else {
            assert!(approx_eq(used, total_weight as f64), "seed {seed}");
        }
    }
}

#[test]
fn test_idempotent() {
    let items = random_instance(5, 15, 100, 30);
    let first = solve_fractional(&items, 70).unwrap();
    let second = solve_fractional(&items, 70).unwrap();
    assert!(first.same_solution(&second));
}
