//! Entropy encode and decode.

use crate::error::{CodecError, Result};
use crate::huffman::bits::BitSeq;
use crate::huffman::code::CodeTable;
use crate::huffman::tree::Tree;

/// Encode `data` to a bit sequence, one table lookup per byte.
///
/// Fails with [`CodecError::UnknownSymbol`] when a byte has no table entry
/// (the table was built from different input). Empty input yields an empty
/// sequence.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<BitSeq> {
    let mut out = BitSeq::with_capacity(data.len());
    for &byte in data {
        let code = table
            .get(byte)
            .ok_or(CodecError::UnknownSymbol(byte))?;
        out.extend_from(code);
    }
    Ok(out)
}

/// Decode a bit sequence by walking the tree.
///
/// Starting at the root, each `0` steps left and each `1` steps right;
/// reaching a leaf emits its symbol and resets the walk to the root. The
/// sequence must end exactly on a symbol boundary: ending mid-path is
/// [`CodecError::TruncatedInput`], and stepping toward an absent child
/// is [`CodecError::CorruptTree`].
pub fn decode(bits: &BitSeq, tree: &Tree) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut node = tree.root();
    let mut mid_path = false;

    for (index, bit) in bits.iter().enumerate() {
        let next = if bit {
            node.right.as_deref()
        } else {
            node.left.as_deref()
        };
        let Some(next) = next else {
            let side = if bit { "right" } else { "left" };
            return Err(CodecError::CorruptTree(format!(
                "bit {index} steps toward an absent {side} child"
            )));
        };

        if next.is_leaf() {
            match next.symbol {
                Some(symbol) => out.push(symbol),
                None => {
                    return Err(CodecError::CorruptTree(format!(
                        "leaf reached at bit {index} carries no symbol"
                    )))
                }
            }
            node = tree.root();
            mid_path = false;
        } else {
            node = next;
            mid_path = true;
        }
    }

    if mid_path {
        return Err(CodecError::TruncatedInput(
            "bit sequence ends in the middle of a code".into(),
        ));
    }

    Ok(out)
}
