//! Huffman entropy coding: prefix-free binary tree codes over bytes.
//!
//! This subsystem has a builder stage and a codec stage:
//! - [`freq`] — per-call frequency statistics over an input.
//! - [`tree`] — greedy minimum-frequency merging into an owned binary tree.
//! - [`code`] — the derived code table (byte → bit sequence).
//! - [`codec`] — table-driven encode and tree-walking decode.
//!
//! Bit sequences are *logical* ([`BitSeq`]); packing bits into bytes is out
//! of scope for this crate. The subsystem shares no state or types with the
//! dictionary coder in [`crate::lz77`].

pub mod bits;
pub mod code;
pub mod codec;
pub mod freq;
pub mod tree;

pub use bits::BitSeq;
pub use code::CodeTable;
pub use codec::{decode, encode};
pub use freq::FrequencyTable;
pub use tree::{build_tree, Node, Tree};
