//! Insertion-ordered grouping.
//!
//! Every view the engine produces is ordered by when a key was first seen in
//! the input, never by key value. [`OrderedGroups`] keeps that order explicitly:
//! a `Vec` of keys and accumulators plus a `HashMap` index into it.

use std::collections::HashMap;
use std::hash::Hash;

/// Map from key to accumulator that iterates in first-insertion order.
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the accumulator for `key`, creating it with `init` on first sight.
    pub fn entry_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, init: F) -> &mut V {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, init()));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Clone, V: Default> OrderedGroups<K, V> {
    pub fn entry(&mut self, key: K) -> &mut V {
        self.entry_or_insert_with(key, V::default)
    }
}

impl<K, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Distinct values in first-seen order.
pub fn first_seen<K, I>(items: I) -> Vec<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut groups: OrderedGroups<K, ()> = OrderedGroups::new();
    for item in items {
        groups.entry(item);
    }
    groups.into_iter().map(|(k, _)| k).collect()
}
