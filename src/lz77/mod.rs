//! LZ77 dictionary coding: sliding-window back-reference compression.
//!
//! This subsystem has two stages:
//! - [`matcher`] — scans a bounded trailing window of already-seen bytes for
//!   the longest repeated run at the current position.
//! - [`codec`] — drives the matcher across the whole input, emitting one
//!   [`Token`] per match, and replays a token sequence back into bytes.
//!
//! Tokens also have a human-readable textual wire format, `(offset, length,
//! literal)` per token, implemented in [`token`].
//!
//! The subsystem shares no state or types with the Huffman coder in
//! [`crate::huffman`]; the two are independently usable.

pub mod codec;
pub mod matcher;
pub mod token;

pub use codec::{decode, encode, Lz77};
pub use matcher::{find_longest_match, Match};
pub use token::{format_tokens, parse_tokens, Token};

/// Default sliding-window size in bytes.
pub const DEFAULT_WINDOW_SIZE: usize = 4096;
