use serde::{Deserialize, Serialize};
use std::fmt;

use super::keys::DateKey;

// ---------------------------------------------------------------------------
// PivotCell — One category column of a pivot row
// ---------------------------------------------------------------------------

/// A cell is present (`Some`) when at least one record exists for its
/// (date, category); absent cells serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotCell {
    pub category: String,
    pub quantity: Option<f64>,
}

impl PivotCell {
    pub fn is_present(&self) -> bool {
        self.quantity.is_some()
    }
}

/// Two decimal places, or `N/A` for an absent cell.
impl fmt::Display for PivotCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Some(q) => write!(f, "{:.2}", q),
            None => f.write_str("N/A"),
        }
    }
}

// ---------------------------------------------------------------------------
// PivotRow — One date key across every category column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotRow {
    pub date_key: DateKey,
    /// One cell per table column, in column order.
    pub cells: Vec<PivotCell>,
    pub row_total: f64,
    pub is_holiday: bool,
}

impl PivotRow {
    pub fn cell(&self, category: &str) -> Option<&PivotCell> {
        self.cells.iter().find(|c| c.category == category)
    }

    /// `None` if `category` is not a column; `Some(None)` if the column exists but the cell is absent.
    pub fn quantity(&self, category: &str) -> Option<Option<f64>> {
        self.cell(category).map(|c| c.quantity)
    }

    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.row_total)
    }
}

// ---------------------------------------------------------------------------
// PivotTable — Fixed column set plus rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTable {
    /// Every category seen anywhere in the input, first-seen order.
    pub columns: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, date_key: DateKey) -> Option<&PivotRow> {
        self.rows.iter().find(|r| r.date_key == date_key)
    }
}
