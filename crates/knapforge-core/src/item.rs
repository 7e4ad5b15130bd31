//! Items and the ordered store a session solves against.

use std::fmt;
use std::str::FromStr;

use crate::error::{KnapsackError, Result};

/// Capacity a fresh store starts with.
pub const DEFAULT_CAPACITY: i64 = 10;

/// An indivisible `(value, weight)` pair.
///
/// Both fields are strictly positive. Items carry no identity of their own:
/// an item is identified by its position in the [`ItemStore`] (or in the
/// slice handed to a solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    value: u64,
    weight: u64,
}

impl Item {
    /// Creates an item, rejecting a zero value or weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapforge_core::Item;
    ///
    /// let item = Item::new(60, 10).unwrap();
    /// assert_eq!(item.value(), 60);
    /// assert_eq!(item.ratio(), 6.0);
    ///
    /// assert!(Item::new(0, 10).is_err());
    /// ```
    pub fn new(value: u64, weight: u64) -> Result<Self> {
        if value == 0 || weight == 0 {
            return Err(KnapsackError::Validation(format!(
                "value and weight must be positive integers, got value={value}, weight={weight}"
            )));
        }
        Ok(Self { value, weight })
    }

    /// Creates an item from signed input, as typed by a user.
    pub fn from_signed(value: i64, weight: i64) -> Result<Self> {
        if value <= 0 || weight <= 0 {
            return Err(KnapsackError::Validation(format!(
                "value and weight must be positive integers, got value={value}, weight={weight}"
            )));
        }
        Self::new(value as u64, weight as u64)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Value per unit of weight.
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value: {}, Weight: {}", self.value, self.weight)
    }
}

/// Parses `value:weight` (or `value,weight`).
impl FromStr for Item {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        let (value, weight) = s
            .split_once(':')
            .or_else(|| s.split_once(','))
            .ok_or_else(|| {
                KnapsackError::Validation(format!("expected 'value:weight', got '{s}'"))
            })?;
        let parse = |field: &str, name: &str| {
            field.trim().parse::<i64>().map_err(|_| {
                KnapsackError::Validation(format!("{name} must be a valid integer, got '{field}'"))
            })
        };
        Self::from_signed(parse(value, "value")?, parse(weight, "weight")?)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            value: u64,
            weight: u64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Item::new(raw.value, raw.weight).map_err(serde::de::Error::custom)
    }
}

/// Ordered, append-only list of items plus the knapsack capacity.
///
/// Position is identity: the index returned by [`ItemStore::add_item`] is the
/// `item_index` solvers report back in their selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
    capacity: i64,
}

impl ItemStore {
    /// Creates an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates a store from already validated items.
    pub fn from_items(items: Vec<Item>, capacity: i64) -> Self {
        Self { items, capacity }
    }

    /// Appends an item and returns its 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::Validation`] if value or weight is not positive.
    pub fn add_item(&mut self, value: i64, weight: i64) -> Result<usize> {
        let item = Item::from_signed(value, weight)?;
        Ok(self.push(item))
    }

    /// Appends a validated item and returns its 0-based index.
    pub fn push(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn set_capacity(&mut self, capacity: i64) {
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights, widened so it cannot overflow.
    pub fn total_weight(&self) -> u128 {
        self.items.iter().map(|item| u128::from(item.weight())).sum()
    }

    /// Sum of all item values, widened so it cannot overflow.
    pub fn total_value(&self) -> u128 {
        self.items.iter().map(|item| u128::from(item.value())).sum()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
