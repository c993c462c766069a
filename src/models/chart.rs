use serde::{Deserialize, Serialize};

use super::keys::PeriodKey;

// ---------------------------------------------------------------------------
// SeriesDataset — One line of a line chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDataset {
    pub label: String,
    /// Aligned with [`CategorySeries::labels`]; `None` where the series has no value.
    pub data: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// CategorySeries — x-axis labels plus one dataset per line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeries {
    pub labels: Vec<PeriodKey>,
    pub datasets: Vec<SeriesDataset>,
}

impl CategorySeries {
    pub fn dataset(&self, label: &str) -> Option<&SeriesDataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}
