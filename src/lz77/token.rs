//! Token model and textual wire format for the dictionary codec.
//!
//! One [`Token`] is emitted per match. The interchange format is textual:
//! `(offset, length, literal)` per token, space-separated, e.g.
//!
//! ```text
//! (0, 0, 'A') (0, 0, 'B') (2, 7, $)
//! ```
//!
//! Printable literals are quoted as-is; everything else (and the quote and
//! backslash themselves) is written as a `'\xNN'` hex escape. `$` marks the
//! no-literal token produced when a match runs to the exact end of the
//! input. Parsing is strict: an unparseable token is an error, never
//! skipped.

use crate::error::{CodecError, Result};
use crate::lz77::matcher::Match;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, multispace0, multispace1, satisfy},
    combinator::{all_consuming, map, map_res, value},
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
    IResult,
};

use std::fmt;
use std::fmt::Write as _;

/// One serializable unit of the dictionary stream.
///
/// `offset == 0 && length == 0` is a pure literal; `literal == None` is the
/// end-of-input form (the match consumed the final byte, nothing follows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Back-reference distance; 0 means no back-reference.
    pub offset: usize,
    /// Number of bytes to copy from the back-reference.
    pub length: usize,
    /// Trailing literal byte, absent for the end-of-input form.
    pub literal: Option<u8>,
}

impl From<Match> for Token {
    fn from(m: Match) -> Self {
        Self {
            offset: m.offset,
            length: m.length,
            literal: m.literal,
        }
    }
}

/// Literals written without an escape: printable ASCII minus `'` and `\`.
fn is_plain_literal(byte: u8) -> bool {
    (byte.is_ascii_graphic() || byte == b' ') && byte != b'\'' && byte != b'\\'
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Some(b) if is_plain_literal(b) => {
                write!(f, "({}, {}, '{}')", self.offset, self.length, b as char)
            }
            Some(b) => write!(f, "({}, {}, '\\x{:02x}')", self.offset, self.length, b),
            None => write!(f, "({}, {}, $)", self.offset, self.length),
        }
    }
}

/// Render a token sequence in the textual wire format, space-separated.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{token}");
    }
    out
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(input)
}

fn hex_escape(input: &str) -> IResult<&str, u8> {
    map_res(
        preceded(
            tag("\\x"),
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        ),
        |digits| u8::from_str_radix(digits, 16),
    )(input)
}

fn plain_char(input: &str) -> IResult<&str, u8> {
    map(satisfy(|c| c.is_ascii() && is_plain_literal(c as u8)), |c| {
        c as u8
    })(input)
}

fn quoted_literal(input: &str) -> IResult<&str, u8> {
    delimited(char('\''), alt((hex_escape, plain_char)), char('\''))(input)
}

/// The literal slot: a quoted byte, or `$` for the no-literal form.
fn literal_slot(input: &str) -> IResult<&str, Option<u8>> {
    alt((value(None, char('$')), map(quoted_literal, Some)))(input)
}

fn comma(input: &str) -> IResult<&str, ()> {
    value((), tuple((multispace0, char(','), multispace0)))(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    map(
        delimited(
            tuple((char('('), multispace0)),
            tuple((number, preceded(comma, number), preceded(comma, literal_slot))),
            tuple((multispace0, char(')'))),
        ),
        |(offset, length, literal)| Token {
            offset,
            length,
            literal,
        },
    )(input)
}

/// Parse a space-separated token stream.
///
/// An empty (or all-whitespace) input is the valid base case and yields an
/// empty sequence. A stream that ends inside an open token is
/// [`CodecError::TruncatedInput`]; anything else unparseable is
/// [`CodecError::MalformedToken`].
pub fn parse_tokens(input: &str) -> Result<Vec<Token>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match all_consuming(separated_list1(multispace1, token))(trimmed) {
        Ok((_, tokens)) => Ok(tokens),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let rest = e.input.trim_start();
            let position = trimmed.len() - rest.len();
            if rest.starts_with('(') && !rest.contains(')') {
                Err(CodecError::TruncatedInput(format!(
                    "token stream ends inside the token at byte {position}"
                )))
            } else {
                Err(CodecError::MalformedToken(format!(
                    "unparseable token at byte {position}: {:?}",
                    truncate_context(rest)
                )))
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(CodecError::TruncatedInput(
            "token stream ended mid-token".into(),
        )),
    }
}

/// First few bytes of the offending input, for error messages.
fn truncate_context(input: &str) -> &str {
    let end = input
        .char_indices()
        .take(16)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &input[..end]
}
