//! Dictionary codec: drives the matcher over an input and replays tokens.

use crate::error::{CodecError, Result};
use crate::lz77::matcher::find_longest_match;
use crate::lz77::token::Token;
use crate::lz77::DEFAULT_WINDOW_SIZE;

/// LZ77 dictionary codec.
///
/// Holds the per-codec configuration; all per-call state (cursor, output
/// buffer) is owned by each `encode`/`decode` invocation, so one instance
/// can serve any number of independent calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77 {
    window_size: usize,
    output_limit: Option<usize>,
}

impl Default for Lz77 {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            output_limit: None,
        }
    }
}

impl Lz77 {
    /// Codec with the given sliding-window size and no output limit.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            output_limit: None,
        }
    }

    /// Cap the decoded output at `limit` bytes.
    ///
    /// Decoding past the cap fails with [`CodecError::CapacityExceeded`]
    /// instead of growing further.
    pub fn with_output_limit(mut self, limit: usize) -> Self {
        self.output_limit = Some(limit);
        self
    }

    /// The configured sliding-window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Encode `data` into a token sequence.
    ///
    /// A single cursor walks the input; each step takes the longest match
    /// the window offers, emits one token, and advances past the match and
    /// its trailing literal (when one exists). Empty input yields an empty
    /// sequence.
    pub fn encode(&self, data: &[u8]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < data.len() {
            let m = find_longest_match(data, pos, self.window_size);
            pos += m.length + usize::from(m.literal.is_some());
            tokens.push(Token::from(m));
        }

        tokens
    }

    /// Decode a token sequence back into bytes.
    ///
    /// Tokens are processed strictly in order against a growing output
    /// buffer. Back-references copy byte by byte, front to back, so an
    /// overlapping reference (`length > offset`) extends its own output:
    /// each copied byte becomes a valid source for the ones after it.
    pub fn decode(&self, tokens: &[Token]) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::new();

        for token in tokens {
            if token.offset > 0 {
                if token.offset > out.len() {
                    return Err(CodecError::OutOfRangeBackReference {
                        offset: token.offset,
                        decoded: out.len(),
                    });
                }
                let start = out.len() - token.offset;
                for i in 0..token.length {
                    let byte = out[start + i];
                    self.push_checked(&mut out, byte)?;
                }
            } else if token.length > 0 {
                // A copy with no source can never resolve.
                return Err(CodecError::MalformedToken(format!(
                    "token has length {} but zero offset",
                    token.length
                )));
            }

            if let Some(byte) = token.literal {
                self.push_checked(&mut out, byte)?;
            }
        }

        Ok(out)
    }

    fn push_checked(&self, out: &mut Vec<u8>, byte: u8) -> Result<()> {
        if let Some(limit) = self.output_limit {
            if out.len() >= limit {
                return Err(CodecError::CapacityExceeded { limit });
            }
        }
        out.push(byte);
        Ok(())
    }
}

/// Encode with the default 4096-byte window.
pub fn encode(data: &[u8]) -> Vec<Token> {
    Lz77::default().encode(data)
}

/// Decode with the default configuration (no output limit).
pub fn decode(tokens: &[Token]) -> Result<Vec<u8>> {
    Lz77::default().decode(tokens)
}
