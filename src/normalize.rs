//! Validation and canonicalization of raw records.
//!
//! The first failing record aborts normalization; no partial output is returned.

use log::debug;

use crate::error::ValidationError;
use crate::models::{OrderRecord, RawOrderRecord};

/// Validate and canonicalize a slice of raw records.
///
/// Rejects a record with a missing required field, an empty category, or a
/// negative or non-finite quantity. Calendar values are not range-checked:
/// month 13 or day 40 pass through and are keyed on literally.
pub fn normalize(raw: &[RawOrderRecord]) -> Result<Vec<OrderRecord>, ValidationError> {
    let records = raw
        .iter()
        .enumerate()
        .map(|(index, r)| normalize_one(index, r))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("normalized {} records", records.len());
    Ok(records)
}

/// Validate a single raw record at position `index`.
pub fn normalize_one(index: usize, raw: &RawOrderRecord) -> Result<OrderRecord, ValidationError> {
    let missing = |field: &'static str| ValidationError::MissingField { index, field };

    let category = raw.category.as_deref().ok_or_else(|| missing("Category"))?;
    let year = raw.year.ok_or_else(|| missing("Year"))?;
    let month = raw.month.ok_or_else(|| missing("Month"))?;
    let day = raw.day.ok_or_else(|| missing("Day"))?;
    let is_holiday = raw.is_holiday.ok_or_else(|| missing("IsHoliday"))?;
    let quantity = raw
        .predicted_order_quantity
        .ok_or_else(|| missing("PredictedOrderQuantity"))?;

    if category.is_empty() {
        return Err(ValidationError::EmptyCategory { index });
    }
    if !quantity.is_finite() {
        return Err(ValidationError::NonFiniteQuantity { index });
    }
    if quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity {
            index,
            value: quantity,
        });
    }

    Ok(OrderRecord {
        category: category.to_string(),
        year,
        month,
        day,
        is_holiday: is_holiday.is_holiday(),
        quantity,
    })
}
