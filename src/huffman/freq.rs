//! Frequency statistics over a byte input.

use indexmap::IndexMap;

/// Occurrence counts per byte value, built once per input.
///
/// Only symbols with a nonzero count are stored; there is no fixed 256-slot
/// backing array. Every table is an owned per-call value, consumed by
/// [`crate::huffman::build_tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<u8, u64>,
}

impl FrequencyTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.count_bytes(data);
        table
    }

    /// Record one occurrence of `symbol`.
    pub fn count(&mut self, symbol: u8) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Record one occurrence of every byte of `data`.
    pub fn count_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.count(byte);
        }
    }

    /// Set the count of `symbol` outright; a zero count removes the entry.
    pub fn set(&mut self, symbol: u8, count: u64) {
        if count == 0 {
            self.counts.shift_remove(&symbol);
        } else {
            self.counts.insert(symbol, count);
        }
    }

    /// Occurrence count of `symbol` (zero when absent).
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols with a nonzero count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no symbol has a nonzero count.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(symbol, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
