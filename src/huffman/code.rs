//! Code-table generation by tree traversal.

use crate::huffman::bits::BitSeq;
use crate::huffman::freq::FrequencyTable;
use crate::huffman::tree::{Node, Tree};

use indexmap::IndexMap;

/// Mapping from byte value to its prefix-free code.
///
/// Derived once from a finished [`Tree`] and read-only afterward. Holds one
/// entry per symbol that appeared with nonzero frequency; entries iterate in
/// leaf-traversal order, which is deterministic for a given tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: IndexMap<u8, BitSeq>,
}

impl CodeTable {
    /// Derive the table from a tree: depth-first walk appending `0` for a
    /// left step and `1` for a right step, recording the accumulated path at
    /// each leaf.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut codes = IndexMap::new();
        let mut path = BitSeq::new();
        collect(tree.root(), &mut path, &mut codes);
        Self { codes }
    }

    /// The code for `symbol`, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&BitSeq> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSeq)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Total encoded length in bits for an input with the given frequencies:
    /// the sum of `code length × frequency` over all symbols.
    pub fn weighted_cost(&self, table: &FrequencyTable) -> u64 {
        self.codes
            .iter()
            .map(|(&symbol, code)| code.len() as u64 * table.get(symbol))
            .sum()
    }
}

fn collect(node: &Node, path: &mut BitSeq, codes: &mut IndexMap<u8, BitSeq>) {
    if node.is_leaf() {
        if let Some(symbol) = node.symbol {
            codes.insert(symbol, path.clone());
        }
        return;
    }
    if let Some(left) = node.left.as_deref() {
        path.push(false);
        collect(left, path, codes);
        path.pop();
    }
    if let Some(right) = node.right.as_deref() {
        path.push(true);
        collect(right, path, codes);
        path.pop();
    }
}
