//! # sqz
//!
//! Classic lossless compression primitives in pure Rust.
//!
//! This library implements two independent textbook techniques over byte
//! sequences, each with exact round-trip reconstruction:
//!
//! - **LZ77 dictionary coding** — a sliding-window longest-match search
//!   emitting `(offset, length, literal)` back-reference tokens, with a
//!   human-readable textual wire format.
//! - **Huffman entropy coding** — greedy minimum-frequency tree
//!   construction, prefix-free code tables, and logical-bit encode/decode.
//!
//! The two subsystems share no state or types and are independently usable;
//! this crate deliberately ships no combined pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqz::lz77;
//!
//! let tokens = lz77::encode(b"ABABABABA");
//! assert_eq!(lz77::format_tokens(&tokens), "(0, 0, 'A') (0, 0, 'B') (2, 7, $)");
//! assert_eq!(lz77::decode(&tokens)?, b"ABABABABA");
//! # Ok::<(), sqz::CodecError>(())
//! ```
//!
//! ```rust
//! use sqz::huffman::{self, build_tree, CodeTable, FrequencyTable};
//!
//! let data = b"this is an example for huffman encoding";
//! let freq = FrequencyTable::from_bytes(data);
//! let tree = build_tree(&freq)?;
//! let codes = CodeTable::from_tree(&tree);
//! let bits = huffman::encode(data, &codes)?;
//! assert_eq!(huffman::decode(&bits, &tree)?, data);
//! # Ok::<(), sqz::CodecError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`lz77`] — window matcher, token model + text format, dictionary codec
//! - [`huffman`] — frequency table, tree builder, code table, entropy codec
//! - [`error`] — the [`CodecError`] taxonomy shared by both subsystems
//!
//! All computation is synchronous and CPU-bound; there is no I/O and no
//! process-wide state. Every encode/decode call owns its buffers, so calls
//! over disjoint inputs are trivially independent.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod huffman;
pub mod lz77;

// Re-export commonly used types
pub use error::{CodecError, Result};
pub use huffman::{build_tree, BitSeq, CodeTable, FrequencyTable, Tree};
pub use lz77::{find_longest_match, Lz77, Match, Token, DEFAULT_WINDOW_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
