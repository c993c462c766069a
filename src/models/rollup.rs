use serde::{Deserialize, Serialize};

use super::keys::PeriodKey;

// ---------------------------------------------------------------------------
// MonthlyTotal — Sum of quantity per (year, month) across all categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub period: PeriodKey,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// MonthlyCategoryTotal — Sum of quantity per (year, month, category)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCategoryTotal {
    pub period: PeriodKey,
    pub category: String,
    pub total: f64,
}
