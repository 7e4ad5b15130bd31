use crate::*;

#[test]
fn test_item_creation() {
    let item = Item::new(60, 10).unwrap();
    assert_eq!(item.value(), 60);
    assert_eq!(item.weight(), 10);
    assert_eq!(item.ratio(), 6.0);
}

#[test]
fn test_item_rejects_non_positive() {
    assert!(matches!(Item::new(0, 1), Err(KnapsackError::Validation(_))));
    assert!(matches!(Item::new(1, 0), Err(KnapsackError::Validation(_))));
    assert!(matches!(
        Item::from_signed(-3, 4),
        Err(KnapsackError::Validation(_))
    ));
    assert!(matches!(
        Item::from_signed(3, -4),
        Err(KnapsackError::Validation(_))
    ));
}

#[test]
fn test_item_parse() {
    assert_eq!("60:10".parse::<Item>().unwrap(), Item::new(60, 10).unwrap());
    assert_eq!(" 7 , 3 ".parse::<Item>().unwrap(), Item::new(7, 3).unwrap());
}

#[test]
fn test_item_parse_errors() {
    let err = "sixty:10".parse::<Item>().unwrap_err();
    assert!(err.to_string().contains("valid integer"));

    let err = "60".parse::<Item>().unwrap_err();
    assert!(err.to_string().contains("value:weight"));

    let err = "60:0".parse::<Item>().unwrap_err();
    assert!(err.to_string().contains("positive"));
}

#[test]
fn test_store_defaults() {
    let store = ItemStore::new();
    assert!(store.is_empty());
    assert_eq!(store.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_store_positional_identity() {
    let mut store = ItemStore::new();
    assert_eq!(store.add_item(60, 10).unwrap(), 0);
    assert_eq!(store.add_item(100, 20).unwrap(), 1);
    // Duplicate pairs still get their own position
    assert_eq!(store.add_item(60, 10).unwrap(), 2);

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(2), Some(&Item::new(60, 10).unwrap()));
    assert_eq!(store.total_weight(), 40);
    assert_eq!(store.total_value(), 220);
}

#[test]
fn test_store_totals_do_not_overflow() {
    let mut store = ItemStore::new();
    for _ in 0..3 {
        store.add_item(i64::MAX, i64::MAX).unwrap();
    }
    assert_eq!(store.total_value(), 3 * i64::MAX as u128);
    assert_eq!(store.total_weight(), 3 * i64::MAX as u128);
}

#[test]
fn test_store_rejects_invalid_item() {
    let mut store = ItemStore::new();
    assert!(store.add_item(0, 5).is_err());
    assert!(store.add_item(5, -1).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_store_capacity_is_mutable() {
    let mut store = ItemStore::new();
    store.set_capacity(50);
    assert_eq!(store.capacity(), 50);
    store.set_capacity(-1);
    assert_eq!(store.capacity(), -1);
}
