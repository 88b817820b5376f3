/// LZ77 demonstration: encode a fixed input, print the token stream in the
/// textual wire format, and decode it back.

use sqz::lz77::{self, Lz77};

fn main() {
    let input = b"ABABABABA";
    println!("Input:   {}", String::from_utf8_lossy(input));

    let codec = Lz77::default();
    let tokens = codec.encode(input);
    let text = lz77::format_tokens(&tokens);
    println!("Encoded: {text}");

    let parsed = lz77::parse_tokens(&text).unwrap();
    let decoded = codec.decode(&parsed).unwrap();
    println!("Decoded: {}", String::from_utf8_lossy(&decoded));

    assert_eq!(decoded, input);
}
