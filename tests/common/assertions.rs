//! Domain-specific assertion macros for sheetview harnesses.
//!
//! These add context-rich failure messages that make it clear *which* record
//! and field broke an invariant.

use sheetview::Record;

/// Assert that a `Record` has a field with an expected JSON value.
///
/// ```rust
/// assert_field!(record, "Score", 10.0);
/// assert_field!(record, "Score", null);
/// ```
#[macro_export]
macro_rules! assert_field {
    ($record:expr, $key:expr, $value:tt) => {{
        let record: &sheetview::Record = &$record;
        let key: &str = $key;
        let expected = serde_json::json!($value);
        match record.get(key) {
            Some(actual) => {
                let actual = serde_json::to_value(actual).unwrap();
                if actual != expected {
                    panic!(
                        "assert_field! failed:\n  record[{:?}]\n  expected: {}\n  actual:   {}",
                        key, expected, actual
                    );
                }
            }
            None => panic!(
                "assert_field! failed: field {:?} not found.\n  Available fields: {:?}",
                key,
                record.field_names().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Every record must carry exactly the header's fields, in header order.
pub fn assert_full_field_set(records: &[Record], header: &[&str]) {
    for (i, record) in records.iter().enumerate() {
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(
            names, header,
            "record {i} does not carry the header's field set"
        );
    }
}
