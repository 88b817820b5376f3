/// Huffman demonstration: build a tree for a fixed input, print the code
/// table, then encode and decode the input.

use sqz::huffman::{self, build_tree, CodeTable, FrequencyTable};

fn main() {
    let input = b"this is an example for huffman encoding";
    println!("Input: {}\n", String::from_utf8_lossy(input));

    let freq = FrequencyTable::from_bytes(input);
    let tree = build_tree(&freq).unwrap();
    let codes = CodeTable::from_tree(&tree);

    println!("Huffman codes:");
    let mut entries: Vec<_> = codes.iter().collect();
    entries.sort_by_key(|&(symbol, _)| symbol);
    for (symbol, code) in entries {
        let shown = if symbol == b' ' {
            "' '".to_string()
        } else {
            format!("'{}'", symbol as char)
        };
        println!("  {shown}: {code}  (freq {})", freq.get(symbol));
    }

    let bits = huffman::encode(input, &codes).unwrap();
    println!("\nEncoded ({} bits): {bits}", bits.len());
    println!(
        "Weighted cost: {} bits over {} input bytes",
        codes.weighted_cost(&freq),
        input.len()
    );

    let decoded = huffman::decode(&bits, &tree).unwrap();
    println!("\nDecoded: {}", String::from_utf8_lossy(&decoded));

    assert_eq!(decoded, input);
}
