//! Property-based tests for the aggregation engine.
//!
//! Verifies that the rollup and pivot invariants hold across random record
//! sets, using the `proptest` crate for generation.

use proptest::prelude::*;
use std::collections::HashSet;

use order_rollup::chart::category_series;
use order_rollup::normalize::normalize;
use order_rollup::pivot::date_pivot;
use order_rollup::rollup::{monthly_category_totals, monthly_totals};
use order_rollup::{engine, HolidayFlag, RawOrderRecord};

// =============================================================================
// Generators
// =============================================================================

fn arb_holiday() -> impl Strategy<Value = HolidayFlag> {
    prop_oneof![
        (-1i32..3).prop_map(HolidayFlag::from),
        any::<bool>().prop_map(HolidayFlag::Bool),
    ]
}

/// A small key space so periods, dates and categories collide often.
fn arb_record() -> impl Strategy<Value = RawOrderRecord> {
    (
        prop::sample::select(vec!["A", "B", "C", "D"]),
        2023i32..=2024,
        1u32..=3,
        1u32..=4,
        arb_holiday(),
        0.0f64..1000.0,
    )
        .prop_map(|(cat, year, month, day, holiday, q)| {
            RawOrderRecord::new(cat, year, month, day, holiday, q)
        })
}

fn arb_records() -> impl Strategy<Value = Vec<RawOrderRecord>> {
    proptest::collection::vec(arb_record(), 0..60)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Repeated calls give identical output and leave the input unchanged.
    #[test]
    fn prop_views_are_pure(raw in arb_records()) {
        let before = raw.clone();
        let first = engine::derive_views(&raw).unwrap();
        let second = engine::derive_views(&raw).unwrap();
        prop_assert_eq!(&raw, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_monthly_totals_conserve_sum(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let input: f64 = records.iter().map(|r| r.quantity).sum();
        let output: f64 = monthly_totals(&records).iter().map(|t| t.total).sum();
        prop_assert!(close(input, output), "{} vs {}", input, output);
    }

    #[test]
    fn prop_monthly_total_equals_category_sum(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let by_category = monthly_category_totals(&records);
        for t in monthly_totals(&records) {
            let sum: f64 = by_category
                .iter()
                .filter(|c| c.period == t.period)
                .map(|c| c.total)
                .sum();
            prop_assert!(close(sum, t.total));
        }
    }

    #[test]
    fn prop_category_pairs_are_unique(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let rows = monthly_category_totals(&records);
        let pairs: HashSet<_> = rows.iter().map(|r| (r.period, r.category.clone())).collect();
        prop_assert_eq!(pairs.len(), rows.len());
    }

    #[test]
    fn prop_pivot_row_totals(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let table = date_pivot(&records);
        for row in &table.rows {
            let cells: f64 = row.cells.iter().filter_map(|c| c.quantity).sum();
            let inputs: f64 = records
                .iter()
                .filter(|r| r.date_key() == row.date_key)
                .map(|r| r.quantity)
                .sum();
            prop_assert!(close(row.row_total, cells));
            prop_assert!(close(row.row_total, inputs));
        }
    }

    #[test]
    fn prop_pivot_holiday_is_any(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let table = date_pivot(&records);
        for row in &table.rows {
            let any = records
                .iter()
                .any(|r| r.date_key() == row.date_key && r.is_holiday);
            prop_assert_eq!(row.is_holiday, any);
        }
    }

    #[test]
    fn prop_pivot_columns_complete(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let table = date_pivot(&records);
        let categories: HashSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
        prop_assert_eq!(table.columns.len(), categories.len());
        for row in &table.rows {
            let cats: Vec<&str> = row.cells.iter().map(|c| c.category.as_str()).collect();
            let cols: Vec<&str> = table.columns.iter().map(String::as_str).collect();
            prop_assert_eq!(cats, cols);
            for cell in &row.cells {
                let present = records.iter().any(|r| {
                    r.date_key() == row.date_key && r.category == cell.category
                });
                prop_assert_eq!(cell.quantity.is_some(), present);
            }
        }
    }

    #[test]
    fn prop_category_series_is_rectangular(raw in arb_records()) {
        let records = normalize(&raw).unwrap();
        let series = category_series(&monthly_category_totals(&records));
        for d in &series.datasets {
            prop_assert_eq!(d.data.len(), series.labels.len());
        }
    }

    /// A single negative quantity anywhere fails the whole call.
    #[test]
    fn prop_negative_quantity_fails_whole_call(
        mut raw in arb_records(),
        q in -1000.0f64..-0.001,
    ) {
        let at = raw.len() / 2;
        raw.insert(at, RawOrderRecord::new("A", 2024, 1, 1, 0, q));
        prop_assert!(engine::derive_views(&raw).is_err());
        prop_assert!(engine::monthly_total_rollup(&raw).is_err());
    }
}
