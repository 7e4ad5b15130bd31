//! Tests for knapsack configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        capacity = 50

        [[items]]
        value = 60
        weight = 10

        [[items]]
        value = 100
        weight = 20

        [[items]]
        value = 120
        weight = 30

        [zero_one]
        max_table_cells = 1000

        [report]
        value_precision = 4
        show_chart = false
    "#;

    let config = KnapsackConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.capacity, 50);
    assert_eq!(config.items.len(), 3);
    assert_eq!(config.items[2], Item::new(120, 30).unwrap());
    assert_eq!(config.zero_one.max_table_cells, Some(1000));
    assert_eq!(config.report.value_precision, 4);
    assert_eq!(config.report.time_precision, 3);
    assert!(!config.report.show_chart);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        capacity: 2
        items:
          - value: 10
            weight: 5
    "#;

    let config = KnapsackConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.capacity, 2);
    assert_eq!(config.items, vec![Item::new(10, 5).unwrap()]);
    assert_eq!(config.zero_one, ZeroOneConfig::default());
}

#[test]
fn test_defaults() {
    let config = KnapsackConfig::from_toml_str("").unwrap();
    assert_eq!(config.capacity, DEFAULT_CAPACITY);
    assert!(config.items.is_empty());
    assert_eq!(config.zero_one.max_table_cells, None);
    assert_eq!(config.report, ReportConfig::default());
}

#[test]
fn test_rejects_zero_weight_item() {
    let toml = r#"
        [[items]]
        value = 10
        weight = 0
    "#;

    assert!(matches!(
        KnapsackConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_rejects_negative_capacity() {
    assert!(matches!(
        KnapsackConfig::from_toml_str("capacity = -5"),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_rejects_zero_cell_limit() {
    let toml = r#"
        [zero_one]
        max_table_cells = 0
    "#;

    assert!(matches!(
        KnapsackConfig::from_toml_str(toml),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        KnapsackConfig::load("does/not/exist.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_or_default_missing_file() {
    let config = KnapsackConfig::load_or_default("does/not/exist.toml").unwrap();
    assert_eq!(config.capacity, 10);
    assert!(config.items.is_empty());
}

#[test]
fn test_load_or_default_reports_malformed_file() {
    let path = std::env::temp_dir().join(format!("knapforge-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "capacity = -5\n").unwrap();
    let invalid = KnapsackConfig::load_or_default(&path);
    std::fs::write(&path, "capacity = [\n").unwrap();
    let unparsable = KnapsackConfig::load_or_default(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(invalid, Err(ConfigError::Invalid(_))));
    assert!(matches!(unparsable, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let config = KnapsackConfig::new()
        .with_capacity(7)
        .with_item(Item::new(3, 2).unwrap())
        .with_item(Item::new(4, 3).unwrap())
        .with_max_table_cells(64);

    let store = config.to_store();
    assert_eq!(store.capacity(), 7);
    assert_eq!(store.len(), 2);
    assert_eq!(config.zero_one.max_table_cells, Some(64));
}
