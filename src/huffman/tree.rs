//! Greedy Huffman tree construction.

use crate::error::{CodecError, Result};
use crate::huffman::freq::FrequencyTable;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One node of a Huffman tree.
///
/// Each node exclusively owns its children; the tree is strictly binary with
/// no sharing and no cycles. A node is a leaf iff both children are absent,
/// and only leaves carry a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The coded byte; present on leaves only.
    pub symbol: Option<u8>,
    /// Occurrence count (sum of both children on internal nodes).
    pub frequency: u64,
    /// Left child, reached by a `0` bit.
    pub left: Option<Box<Node>>,
    /// Right child, reached by a `1` bit.
    pub right: Option<Box<Node>>,
}

impl Node {
    fn leaf(symbol: u8, frequency: u64) -> Self {
        Self {
            symbol: Some(symbol),
            frequency,
            left: None,
            right: None,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A finished Huffman tree.
///
/// Built once by [`build_tree`] and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Min-heap entry ordered by `(frequency, insertion sequence)`.
///
/// The sequence number is the explicit tie-break: among equal frequencies
/// the oldest node merges first, making the resulting codes deterministic
/// across runs.
struct HeapEntry {
    frequency: u64,
    seq: u64,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the minimum.
        (other.frequency, other.seq).cmp(&(self.frequency, self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        (self.frequency, self.seq) == (other.frequency, other.seq)
    }
}

impl Eq for HeapEntry {}

/// Build a Huffman tree from a frequency table.
///
/// Seeds one leaf per nonzero-frequency symbol (in ascending symbol order),
/// then repeatedly merges the two lowest-frequency nodes until one root
/// remains. On each merge the first node popped becomes the left child and
/// the second the right child.
///
/// A single-symbol alphabet still yields an internal root with the lone
/// leaf as its left child, so the symbol's code is `0` — a zero-length code
/// would make decoding ambiguous.
///
/// Fails with [`CodecError::EmptyAlphabet`] when the table has no nonzero
/// entries.
pub fn build_tree(table: &FrequencyTable) -> Result<Tree> {
    let mut entries: Vec<(u8, u64)> = table.iter().collect();
    entries.sort_by_key(|&(symbol, _)| symbol);
    if entries.is_empty() {
        return Err(CodecError::EmptyAlphabet);
    }

    let mut seq = 0u64;
    let mut heap = BinaryHeap::with_capacity(entries.len());
    for (symbol, frequency) in entries {
        heap.push(HeapEntry {
            frequency,
            seq,
            node: Node::leaf(symbol, frequency),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
            break;
        };
        let frequency = first.frequency + second.frequency;
        heap.push(HeapEntry {
            frequency,
            seq,
            node: Node {
                symbol: None,
                frequency,
                left: Some(Box::new(first.node)),
                right: Some(Box::new(second.node)),
            },
        });
        seq += 1;
    }

    let Some(top) = heap.pop() else {
        return Err(CodecError::EmptyAlphabet);
    };

    let root = if top.node.is_leaf() {
        Node {
            symbol: None,
            frequency: top.frequency,
            left: Some(Box::new(top.node)),
            right: None,
        }
    } else {
        top.node
    };

    Ok(Tree { root })
}
