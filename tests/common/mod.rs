//! Shared test fixtures for the order rollup integration tests.
//!
//! Provides small raw record sets, both typed and in the JSON wire shape
//! served by the prediction endpoint.

#![allow(dead_code)]

use order_rollup::RawOrderRecord;
use std::io::Write;
use tempfile::NamedTempFile;

/// The three-record example: two categories on 1/1 (a holiday) and one on 2/1.
pub fn example_records() -> Vec<RawOrderRecord> {
    vec![
        RawOrderRecord::new("A", 2024, 1, 1, 1, 10.0),
        RawOrderRecord::new("B", 2024, 1, 1, 0, 5.0),
        RawOrderRecord::new("A", 2024, 2, 1, 0, 7.0),
    ]
}

/// [`example_records`] with the informational `Date` field filled in, as
/// parsed from [`example_json`].
pub fn example_records_with_dates() -> Vec<RawOrderRecord> {
    let dates = ["2024-01-01", "2024-01-01", "2024-02-01"];
    example_records()
        .into_iter()
        .zip(dates)
        .map(|(mut r, d)| {
            r.date = Some(d.to_string());
            r
        })
        .collect()
}

/// A wider fixture: three categories over two months, with gaps.
pub fn quarter_records() -> Vec<RawOrderRecord> {
    vec![
        RawOrderRecord::new("Beverages", 2024, 1, 15, 0, 12.5),
        RawOrderRecord::new("Snacks", 2024, 1, 15, 0, 8.0),
        RawOrderRecord::new("Dairy", 2024, 1, 15, 0, 4.25),
        RawOrderRecord::new("Beverages", 2024, 1, 16, 0, 11.0),
        RawOrderRecord::new("Dairy", 2024, 1, 16, 0, 3.75),
        RawOrderRecord::new("Snacks", 2024, 2, 14, 1, 20.0),
        RawOrderRecord::new("Beverages", 2024, 2, 14, 1, 15.0),
        RawOrderRecord::new("Snacks", 2024, 3, 1, 0, 9.5),
    ]
}

/// The same shape the `/predict` endpoint serves.
pub fn example_json() -> serde_json::Value {
    serde_json::json!([
        {
            "Category": "A",
            "Date": "2024-01-01",
            "Day": 1,
            "IsHoliday": 1,
            "Month": 1,
            "PredictedOrderQuantity": 10.0,
            "Year": 2024
        },
        {
            "Category": "B",
            "Date": "2024-01-01",
            "Day": 1,
            "IsHoliday": 0,
            "Month": 1,
            "PredictedOrderQuantity": 5.0,
            "Year": 2024
        },
        {
            "Category": "A",
            "Date": "2024-02-01",
            "Day": 1,
            "IsHoliday": 0,
            "Month": 2,
            "PredictedOrderQuantity": 7.0,
            "Year": 2024
        }
    ])
}

/// Write `value` to a temp file and return the handle; keep it alive for the test.
pub fn write_json_file(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(value).unwrap()).unwrap();
    file.flush().unwrap();
    file
}
