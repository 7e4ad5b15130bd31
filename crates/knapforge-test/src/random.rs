//! Seeded random instances.
//!
//! Instances are reproducible: the same seed always yields the same items.

use knapforge_core::Item;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `count` items with values in `1..=max_value` and weights in
/// `1..=max_weight`.
///
/// # Example
///
/// ```
/// use knapforge_test::random::random_instance;
///
/// let a = random_instance(7, 10, 50, 20);
/// let b = random_instance(7, 10, 50, 20);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|item| item.weight() <= 20));
/// ```
pub fn random_instance(seed: u64, count: usize, max_value: u64, max_weight: u64) -> Vec<Item> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let value = rng.random_range(1..=max_value.max(1));
            let weight = rng.random_range(1..=max_weight.max(1));
            Item::new(value, weight).expect("random ranges start at 1")
        })
        .collect()
}

/// Generates a capacity in `0..=max_capacity` from the same seed family.
pub fn random_capacity(seed: u64, max_capacity: i64) -> i64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    rng.random_range(0..=max_capacity.max(0))
}
