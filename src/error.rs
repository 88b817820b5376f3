//! Error types for the sqz codecs.

use thiserror::Error;

/// Main error type for encode/decode operations.
///
/// Every failure mode is reported to the caller as an explicit variant.
/// Nothing is skipped silently and nothing reads or writes out of bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A serialized token could not be parsed.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// A back-reference points before the start of the reconstructed output.
    #[error("back-reference out of range: offset {offset} exceeds {decoded} decoded bytes")]
    OutOfRangeBackReference { offset: usize, decoded: usize },

    /// A token stream or bit sequence ended in the middle of a unit.
    #[error("truncated input: {0}")]
    TruncatedInput(String),

    /// A byte has no entry in the code table.
    #[error("unknown symbol: {0:#04X} has no code table entry")]
    UnknownSymbol(u8),

    /// Decoding would grow the output past a caller-imposed limit.
    #[error("output would exceed the configured limit of {limit} bytes")]
    CapacityExceeded { limit: usize },

    /// Tree construction was requested with no nonzero frequencies.
    #[error("frequency table has no nonzero entries")]
    EmptyAlphabet,

    /// A decode walk stepped toward a child that does not exist.
    #[error("corrupt tree: {0}")]
    CorruptTree(String),
}

/// Result type alias for sqz operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::OutOfRangeBackReference {
            offset: 12,
            decoded: 4,
        };
        assert_eq!(
            err.to_string(),
            "back-reference out of range: offset 12 exceeds 4 decoded bytes"
        );
    }

    #[test]
    fn test_unknown_symbol_display() {
        let err = CodecError::UnknownSymbol(0x0A);
        assert!(err.to_string().contains("0x0A"));
    }

    #[test]
    fn test_capacity_display() {
        let err = CodecError::CapacityExceeded { limit: 1024 };
        assert!(err.to_string().contains("1024"));
    }
}
