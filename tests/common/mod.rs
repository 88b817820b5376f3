//! Shared fixtures for sqz integration tests.

#![allow(dead_code)]

use sqz::huffman::{BitSeq, FrequencyTable};

/// The classic six-symbol frequency distribution whose optimal Huffman cost
/// is 224 bits.
pub fn classic_frequency_table() -> FrequencyTable {
    let mut table = FrequencyTable::new();
    table.set(b'a', 5);
    table.set(b'b', 9);
    table.set(b'c', 12);
    table.set(b'd', 13);
    table.set(b'e', 16);
    table.set(b'f', 45);
    table
}

/// Build a bit sequence from a `'0'`/`'1'` string.
pub fn bits(text: &str) -> BitSeq {
    text.chars()
        .map(|c| match c {
            '0' => false,
            '1' => true,
            other => panic!("not a bit: {other:?}"),
        })
        .collect()
}

/// Inputs exercising the round-trip edge cases: empty, single byte,
/// all-identical, all-distinct, and long repeating patterns.
pub fn roundtrip_inputs() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![b'Q'],
        vec![b'z'; 300],
        (0u8..=255).collect(),
        b"ABABABABA".to_vec(),
        b"abcabcabcabcabcabcabcabcabcabc".to_vec(),
        b"she sells sea shells by the sea shore".to_vec(),
        {
            let mut long = Vec::new();
            for i in 0..5000u32 {
                long.push((i % 7) as u8 + b'a');
            }
            long
        },
    ]
}
