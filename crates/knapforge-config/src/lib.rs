//! Configuration system for Knapforge.
//!
//! Load a knapsack instance and solver settings from TOML (or YAML) files
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use knapforge_config::KnapsackConfig;
//!
//! let config = KnapsackConfig::from_toml_str(r#"
//!     capacity = 50
//!
//!     [[items]]
//!     value = 60
//!     weight = 10
//!
//!     [[items]]
//!     value = 100
//!     weight = 20
//!
//!     [zero_one]
//!     max_table_cells = 1_000_000
//! "#).unwrap();
//!
//! assert_eq!(config.capacity, 50);
//! assert_eq!(config.items.len(), 2);
//! assert_eq!(config.zero_one.max_table_cells, Some(1_000_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use knapforge_config::KnapsackConfig;
//!
//! let config = KnapsackConfig::load("knapsack.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use knapforge_core::{Item, ItemStore, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main knapsack configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct KnapsackConfig {
    /// Knapsack capacity.
    #[serde(default = "default_capacity")]
    pub capacity: i64,

    /// Items in insertion order.
    #[serde(default)]
    pub items: Vec<Item>,

    /// 0/1 solver settings.
    #[serde(default)]
    pub zero_one: ZeroOneConfig,

    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            items: Vec::new(),
            zero_one: ZeroOneConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl KnapsackConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file, or the defaults if the file does
    /// not exist. Any other read, parse or validation error is returned.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks settings the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < 0 {
            return Err(ConfigError::Invalid(format!(
                "capacity must not be negative, got {}",
                self.capacity
            )));
        }
        if self.zero_one.max_table_cells == Some(0) {
            return Err(ConfigError::Invalid(
                "zero_one.max_table_cells must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Appends an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Bounds the 0/1 table size.
    pub fn with_max_table_cells(mut self, cells: u64) -> Self {
        self.zero_one.max_table_cells = Some(cells);
        self
    }

    /// Builds an item store holding the configured instance.
    pub fn to_store(&self) -> ItemStore {
        ItemStore::from_items(self.items.clone(), self.capacity)
    }
}

/// 0/1 dynamic programming settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ZeroOneConfig {
    /// Upper bound on `(items + 1) * (capacity + 1)` table cells.
    ///
    /// Runs that would need a larger table are refused before allocating.
    pub max_table_cells: Option<u64>,
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Decimal places for fractional values.
    #[serde(default = "default_value_precision")]
    pub value_precision: usize,

    /// Decimal places for elapsed milliseconds.
    #[serde(default = "default_time_precision")]
    pub time_precision: usize,

    /// Whether to draw the per-item usage chart.
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
}

fn default_value_precision() -> usize {
    2
}

fn default_time_precision() -> usize {
    3
}

fn default_show_chart() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            value_precision: default_value_precision(),
            time_precision: default_time_precision(),
            show_chart: default_show_chart(),
        }
    }
}
