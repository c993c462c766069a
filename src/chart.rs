//! Line-chart shaped views over the monthly rollups.
//!
//! Only the data layout is produced here; colours, titles and axes belong to
//! whatever renders the chart.

use std::collections::HashMap;

use crate::config::TOTAL_SERIES_LABEL;
use crate::grouping::first_seen;
use crate::models::{CategorySeries, MonthlyCategoryTotal, MonthlyTotal, PeriodKey, SeriesDataset};

/// One dataset per category over the distinct periods of `rows`.
///
/// Labels and datasets follow first-seen order. Each dataset's `data` is
/// aligned with `labels`; a category with no total for a period gets `None`
/// at that position.
pub fn category_series(rows: &[MonthlyCategoryTotal]) -> CategorySeries {
    let labels = first_seen(rows.iter().map(|r| r.period));
    let categories = first_seen(rows.iter().map(|r| r.category.as_str()));

    let mut lookup: HashMap<(&str, PeriodKey), f64> = HashMap::new();
    for r in rows {
        *lookup.entry((r.category.as_str(), r.period)).or_insert(0.0) += r.total;
    }

    let datasets = categories
        .into_iter()
        .map(|category| SeriesDataset {
            label: category.to_string(),
            data: labels
                .iter()
                .map(|period| lookup.get(&(category, *period)).copied())
                .collect(),
        })
        .collect();

    CategorySeries { labels, datasets }
}

/// Single-dataset series over the monthly totals, labelled "Order Quantity".
pub fn total_series(rows: &[MonthlyTotal]) -> CategorySeries {
    if rows.is_empty() {
        return CategorySeries::default();
    }
    CategorySeries {
        labels: rows.iter().map(|r| r.period).collect(),
        datasets: vec![SeriesDataset {
            label: TOTAL_SERIES_LABEL.to_string(),
            data: rows.iter().map(|r| Some(r.total)).collect(),
        }],
    }
}
