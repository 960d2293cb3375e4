//! Inventory - item counts for a fixed set of tracked kinds

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of items keyed by kind
///
/// Only kinds registered up front are tracked. Iteration and tie-breaking
/// follow the key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory<K: Ord> {
    counts: BTreeMap<K, u32>,
}

impl<K: Ord + Copy> Inventory<K> {
    pub fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// Track every kind in `kinds`, starting from zero
    pub fn with_kinds(kinds: impl IntoIterator<Item = K>) -> Self {
        Self { counts: kinds.into_iter().map(|kind| (kind, 0)).collect() }
    }

    pub fn track(&mut self, kind: K) {
        self.counts.entry(kind).or_insert(0);
    }

    pub fn is_tracked(&self, kind: K) -> bool {
        self.counts.contains_key(&kind)
    }

    /// Add items; false if the kind is not tracked
    pub fn deposit(&mut self, kind: K, amount: u32) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) => {
                *count = count.saturating_add(amount);
                true
            }
            None => false,
        }
    }

    /// Take items out, all or nothing
    pub fn withdraw(&mut self, kind: K, amount: u32) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count >= amount => {
                *count -= amount;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, kind: K) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Tracked kind with the fewest items; ties go to the lowest key
    pub fn least_stocked(&self) -> Option<K> {
        self.counts
            .iter()
            .min_by_key(|(_, count)| **count)
            .map(|(kind, _)| *kind)
    }

    pub fn most_stocked(&self) -> Option<K> {
        self.counts
            .iter()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .map(|(kind, _)| *kind)
    }

    /// Tracked kinds with nothing in stock
    pub fn missing(&self) -> Vec<K> {
        self.counts
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Check that every requirement can be met
    pub fn has_all(&self, requirements: &[(K, u32)]) -> bool {
        requirements.iter().all(|(kind, amount)| self.count(*kind) >= *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}
