//! Logical bit sequences.

use std::fmt;

/// A growable sequence of logical bits.
///
/// This is the interchange type of the entropy codec: codes and encoded
/// streams are sequences of `{0, 1}`, not packed bytes. `Display` renders
/// the bits as `'0'`/`'1'` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSeq {
    bits: Vec<bool>,
}

impl BitSeq {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty sequence with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitSeq) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the sequence holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index`, if any.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Iterate over the bits front to back.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Whether `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &BitSeq) -> bool {
        self.len() <= other.len() && self.bits[..] == other.bits[..self.len()]
    }
}

impl fmt::Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitSeq {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BitSeq {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl<'a> IntoIterator for &'a BitSeq {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}
