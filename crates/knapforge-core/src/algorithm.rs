//! Algorithm identifiers.

use std::fmt;

/// The two knapsack variants Knapforge solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Items taken whole or not at all, solved by dynamic programming.
    ZeroOne,
    /// Items may be split, solved greedily by value/weight ratio.
    Fractional,
}

impl Algorithm {
    /// Both algorithms, in reporting order.
    pub const ALL: [Algorithm; 2] = [Algorithm::ZeroOne, Algorithm::Fractional];

    /// Short machine-friendly name used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::ZeroOne => "zero_one",
            Algorithm::Fractional => "fractional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::ZeroOne => write!(f, "0/1 Knapsack"),
            Algorithm::Fractional => write!(f, "Fractional Knapsack"),
        }
    }
}
