//! Date x category pivot table.

use log::{debug, warn};
use std::collections::HashMap;

use crate::grouping::{first_seen, OrderedGroups};
use crate::models::{DateKey, OrderRecord, PivotCell, PivotRow, PivotTable};

#[derive(Default)]
struct DateBucket {
    /// category -> (summed quantity, record count)
    cells: HashMap<String, (f64, usize)>,
    total: f64,
    is_holiday: bool,
}

/// Build the pivot table: one row per distinct `month/day`, one column per
/// category seen anywhere in the input.
///
/// Rows and columns are in first-seen order. A category with no record on a
/// date gets an absent cell; several records for the same date and category
/// are summed. `row_total` folds the date's quantities in input order and a
/// row is a holiday if any of its records is.
pub fn date_pivot(records: &[OrderRecord]) -> PivotTable {
    let columns = first_seen(records.iter().map(|r| r.category.clone()));

    let mut dates: OrderedGroups<DateKey, DateBucket> = OrderedGroups::new();
    for r in records {
        let bucket = dates.entry(r.date_key());
        let cell = bucket.cells.entry(r.category.clone()).or_insert((0.0, 0));
        cell.0 += r.quantity;
        cell.1 += 1;
        bucket.total += r.quantity;
        bucket.is_holiday |= r.is_holiday;
    }

    let rows: Vec<PivotRow> = dates
        .into_iter()
        .map(|(date_key, bucket)| {
            let cells = columns
                .iter()
                .map(|category| {
                    let quantity = bucket.cells.get(category).map(|&(sum, count)| {
                        if count > 1 {
                            warn!(
                                "{} records for date {} category '{}'; quantities were summed",
                                count, date_key, category
                            );
                        }
                        sum
                    });
                    PivotCell {
                        category: category.clone(),
                        quantity,
                    }
                })
                .collect();
            PivotRow {
                date_key,
                cells,
                row_total: bucket.total,
                is_holiday: bucket.is_holiday,
            }
        })
        .collect();

    debug!(
        "pivot: {} records -> {} rows x {} columns",
        records.len(),
        rows.len(),
        columns.len()
    );

    PivotTable { columns, rows }
}
