//! Unit tests for the insertion-ordered grouping helpers.

use order_rollup::grouping::{first_seen, OrderedGroups};

#[test]
fn groups_iterate_in_first_insertion_order() {
    let mut groups: OrderedGroups<&str, f64> = OrderedGroups::new();
    for (k, v) in [("c", 1.0), ("a", 2.0), ("c", 3.0), ("b", 4.0)] {
        *groups.entry(k) += v;
    }
    assert_eq!(groups.len(), 3);
    let entries: Vec<(&str, f64)> = groups.into_iter().collect();
    assert_eq!(entries, vec![("c", 4.0), ("a", 2.0), ("b", 4.0)]);
}

#[test]
fn entry_or_insert_with_runs_init_once() {
    let mut groups: OrderedGroups<u32, Vec<u32>> = OrderedGroups::new();
    groups.entry_or_insert_with(1, || vec![10]).push(11);
    groups.entry_or_insert_with(1, || vec![99]).push(12);
    let collected: Vec<(u32, Vec<u32>)> = groups.into_iter().collect();
    assert_eq!(collected, vec![(1, vec![10, 11, 12])]);
}

#[test]
fn empty_groups() {
    let groups: OrderedGroups<String, f64> = OrderedGroups::default();
    assert!(groups.is_empty());
    assert_eq!(groups.into_iter().count(), 0);
}

#[test]
fn first_seen_dedups_preserving_order() {
    assert_eq!(first_seen(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    assert!(first_seen(Vec::<u8>::new()).is_empty());
}
