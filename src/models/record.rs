use serde::{Deserialize, Serialize};

use super::keys::{DateKey, PeriodKey};

// ---------------------------------------------------------------------------
// HolidayFlag — IsHoliday as received (0/1 number or boolean)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HolidayFlag {
    Bool(bool),
    Number(f64),
}

impl HolidayFlag {
    /// Numbers count as a holiday only when exactly `1`; `2`, `-1` and `0.5` are not holidays.
    pub fn is_holiday(self) -> bool {
        match self {
            HolidayFlag::Bool(b) => b,
            HolidayFlag::Number(n) => n == 1.0,
        }
    }
}

impl From<bool> for HolidayFlag {
    fn from(value: bool) -> Self {
        HolidayFlag::Bool(value)
    }
}

impl From<i32> for HolidayFlag {
    fn from(value: i32) -> Self {
        HolidayFlag::Number(f64::from(value))
    }
}

impl From<f64> for HolidayFlag {
    fn from(value: f64) -> Self {
        HolidayFlag::Number(value)
    }
}

// ---------------------------------------------------------------------------
// RawOrderRecord — One prediction row as served by the record source
// ---------------------------------------------------------------------------

/// A record as received, before validation.
///
/// Every field is optional so a missing key is reported as a
/// [`ValidationError`](crate::error::ValidationError) instead of a JSON error.
///
/// Values of the wrong JSON type are not treated that way: `Year`, `Month`
/// and `Day` must be integers (`1.0` is rejected), `PredictedOrderQuantity` a
/// number, and `IsHoliday` a number or boolean (`"1"` is rejected). Such a
/// value fails deserialization of the whole record set with
/// [`RollupError::Json`](crate::error::RollupError::Json), before any record
/// reaches normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOrderRecord {
    pub category: Option<String>,
    pub date: Option<String>,
    pub day: Option<u32>,
    pub is_holiday: Option<HolidayFlag>,
    pub month: Option<u32>,
    pub predicted_order_quantity: Option<f64>,
    pub year: Option<i32>,
}

impl RawOrderRecord {
    /// Convenience constructor with every required field present.
    pub fn new(
        category: &str,
        year: i32,
        month: u32,
        day: u32,
        is_holiday: impl Into<HolidayFlag>,
        quantity: f64,
    ) -> Self {
        Self {
            category: Some(category.to_string()),
            date: None,
            day: Some(day),
            is_holiday: Some(is_holiday.into()),
            month: Some(month),
            predicted_order_quantity: Some(quantity),
            year: Some(year),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderRecord — Validated record, the engine's atomic input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub category: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_holiday: bool,
    pub quantity: f64,
}

impl OrderRecord {
    pub fn period(&self) -> PeriodKey {
        PeriodKey::new(self.year, self.month)
    }

    /// Year-independent pivot row key.
    pub fn date_key(&self) -> DateKey {
        DateKey::new(self.month, self.day)
    }
}
