//! Monthly rollups over normalized records.
//!
//! Both functions preserve first-seen key order and fold quantities in input
//! order. Neither re-sorts: callers wanting chronological output sort the
//! input first.

use log::{debug, warn};
use std::collections::HashSet;

use crate::grouping::OrderedGroups;
use crate::models::{MonthlyCategoryTotal, MonthlyTotal, OrderRecord, PeriodKey};

/// Total quantity per `(year, month)` across all categories.
pub fn monthly_totals(records: &[OrderRecord]) -> Vec<MonthlyTotal> {
    let mut groups: OrderedGroups<PeriodKey, f64> = OrderedGroups::new();
    for r in records {
        *groups.entry(r.period()) += r.quantity;
    }

    debug!(
        "monthly totals: {} records -> {} periods",
        records.len(),
        groups.len()
    );

    groups
        .into_iter()
        .map(|(period, total)| MonthlyTotal { period, total })
        .collect()
}

/// Total quantity per `(year, month, category)`.
///
/// Output is period-major: periods in first-seen order, and within each
/// period, categories in the order they were first seen for that period.
/// Duplicate `(date, category)` records are summed.
pub fn monthly_category_totals(records: &[OrderRecord]) -> Vec<MonthlyCategoryTotal> {
    let mut groups: OrderedGroups<PeriodKey, OrderedGroups<String, Bucket>> = OrderedGroups::new();
    for r in records {
        let bucket = groups
            .entry(r.period())
            .entry_or_insert_with(r.category.clone(), Bucket::default);
        bucket.add(r.day, r.quantity);
    }

    let mut out = Vec::new();
    for (period, categories) in groups {
        for (category, bucket) in categories {
            if bucket.duplicate_day {
                warn!(
                    "period {} category '{}' has duplicate days; quantities were summed",
                    period, category
                );
            }
            out.push(MonthlyCategoryTotal {
                period,
                category,
                total: bucket.total,
            });
        }
    }

    debug!(
        "monthly category totals: {} records -> {} rows",
        records.len(),
        out.len()
    );
    out
}

/// Running total for one (period, category); remembers which days it has
/// seen only to flag duplicate (date, category) records.
#[derive(Default)]
struct Bucket {
    total: f64,
    days: HashSet<u32>,
    duplicate_day: bool,
}

impl Bucket {
    fn add(&mut self, day: u32, quantity: f64) {
        self.total += quantity;
        if !self.days.insert(day) {
            self.duplicate_day = true;
        }
    }
}
