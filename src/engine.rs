//! Raw-input entry points.
//!
//! Each function normalizes first and aggregates only if every record is
//! valid, so a [`ValidationError`](crate::error::ValidationError) never comes
//! with partial output. All of them are pure: the input slice is only read.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{MonthlyCategoryTotal, MonthlyTotal, OrderRecord, PivotTable, RawOrderRecord};
use crate::normalize::normalize;
use crate::pivot::date_pivot;
use crate::rollup::{monthly_category_totals, monthly_totals};

pub fn monthly_total_rollup(raw: &[RawOrderRecord]) -> Result<Vec<MonthlyTotal>> {
    let records = normalize(raw)?;
    Ok(monthly_totals(&records))
}

pub fn monthly_category_rollup(raw: &[RawOrderRecord]) -> Result<Vec<MonthlyCategoryTotal>> {
    let records = normalize(raw)?;
    Ok(monthly_category_totals(&records))
}

pub fn date_pivot_table(raw: &[RawOrderRecord]) -> Result<PivotTable> {
    let records = normalize(raw)?;
    Ok(date_pivot(&records))
}

// ---------------------------------------------------------------------------
// OrderViews — All three derived views from one input snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderViews {
    pub monthly_totals: Vec<MonthlyTotal>,
    pub monthly_category_totals: Vec<MonthlyCategoryTotal>,
    pub pivot: PivotTable,
}

impl OrderViews {
    /// Compute every view from already-normalized records.
    pub fn from_records(records: &[OrderRecord]) -> Self {
        Self {
            monthly_totals: monthly_totals(records),
            monthly_category_totals: monthly_category_totals(records),
            pivot: date_pivot(records),
        }
    }
}

/// Normalize once and compute all three views.
pub fn derive_views(raw: &[RawOrderRecord]) -> Result<OrderViews> {
    let records = normalize(raw)?;
    Ok(OrderViews::from_records(&records))
}
