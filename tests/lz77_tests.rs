//! Integration tests for the LZ77 dictionary codec.
//!
//! Covers the full path: matcher → token stream → textual wire format →
//! decode, including the malformed-stream error cases.

mod common;

// ===========================================================================
// Round-trips
// ===========================================================================

mod roundtrip {
    use super::common;
    use sqz::lz77::{self, Lz77};

    #[test]
    fn test_all_edge_case_inputs() {
        for input in common::roundtrip_inputs() {
            let tokens = lz77::encode(&input);
            let decoded = lz77::decode(&tokens).unwrap();
            assert_eq!(decoded, input, "round-trip failed for {} bytes", input.len());
        }
    }

    #[test]
    fn test_through_text_format() {
        for input in common::roundtrip_inputs() {
            let tokens = lz77::encode(&input);
            let text = lz77::format_tokens(&tokens);
            let parsed = lz77::parse_tokens(&text).unwrap();
            assert_eq!(parsed, tokens);
            assert_eq!(lz77::decode(&parsed).unwrap(), input);
        }
    }

    #[test]
    fn test_every_byte_value_survives_the_text_format() {
        let input: Vec<u8> = (0u8..=255).chain(0u8..=255).collect();
        let tokens = lz77::encode(&input);
        let text = lz77::parse_tokens(&lz77::format_tokens(&tokens)).unwrap();
        assert_eq!(lz77::decode(&text).unwrap(), input);
    }

    #[test]
    fn test_tiny_windows_still_roundtrip() {
        let input = b"banana bandana banana bandana";
        for window in [1, 2, 3, 5, 8, 4096] {
            let codec = Lz77::new(window);
            assert_eq!(
                codec.decode(&codec.encode(input)).unwrap(),
                input,
                "window {window}"
            );
        }
    }
}

// ===========================================================================
// Concrete scenarios from the matcher contract
// ===========================================================================

mod scenarios {
    use sqz::lz77::{self, find_longest_match, Token};

    #[test]
    fn test_ababababa_with_default_window() {
        // At position 2 the matcher finds offset 2, length 7, with the run
        // ending exactly at end of input — the no-literal token form.
        let input = b"ABABABABA";
        let m = find_longest_match(input, 2, 4096);
        assert_eq!(m.offset, 2);
        assert_eq!(m.length, 7);
        assert_eq!(m.literal, None);

        let tokens = lz77::encode(input);
        assert_eq!(
            tokens.last(),
            Some(&Token {
                offset: 2,
                length: 7,
                literal: None,
            })
        );
        assert_eq!(lz77::decode(&tokens).unwrap(), input);
    }

    #[test]
    fn test_repeat_found_only_inside_window() {
        // "0123456789" repeats at distance 10.
        let mut input = b"0123456789".to_vec();
        input.extend_from_slice(b"0123456789");

        let found = find_longest_match(&input, 10, 10);
        assert_eq!(found.offset, 10);
        assert_eq!(found.length, 10);

        let missed = find_longest_match(&input, 10, 9);
        assert_eq!(missed.length, 0);
        assert_eq!(missed.literal, Some(b'0'));
    }

    #[test]
    fn test_overlapping_back_reference_period_two() {
        // offset=2, length=7 against prior output "AB" → "ABABABA".
        let tokens = vec![
            Token {
                offset: 0,
                length: 0,
                literal: Some(b'A'),
            },
            Token {
                offset: 0,
                length: 0,
                literal: Some(b'B'),
            },
            Token {
                offset: 2,
                length: 7,
                literal: None,
            },
        ];
        assert_eq!(lz77::decode(&tokens).unwrap(), b"ABABABABA");
    }

    #[test]
    fn test_deterministic_encoding() {
        let input = b"deterministic deterministic deterministic";
        assert_eq!(lz77::encode(input), lz77::encode(input));
    }
}

// ===========================================================================
// Malformed streams
// ===========================================================================

mod malformed {
    use sqz::lz77::{self, Lz77, Token};
    use sqz::CodecError;

    #[test]
    fn test_back_reference_past_start_of_output() {
        let tokens = vec![Token {
            offset: 1,
            length: 1,
            literal: Some(b'A'),
        }];
        assert_eq!(
            lz77::decode(&tokens).unwrap_err(),
            CodecError::OutOfRangeBackReference {
                offset: 1,
                decoded: 0,
            }
        );
    }

    #[test]
    fn test_back_reference_beyond_decoded_prefix() {
        let text = "(0, 0, 'A') (0, 0, 'B') (9, 3, 'C')";
        let tokens = lz77::parse_tokens(text).unwrap();
        assert_eq!(
            lz77::decode(&tokens).unwrap_err(),
            CodecError::OutOfRangeBackReference {
                offset: 9,
                decoded: 2,
            }
        );
    }

    #[test]
    fn test_unparseable_token_text() {
        let err = lz77::parse_tokens("(1, 2, 'A') nonsense").unwrap_err();
        assert!(matches!(err, CodecError::MalformedToken(_)), "{err:?}");
    }

    #[test]
    fn test_truncated_token_text() {
        let err = lz77::parse_tokens("(1, 2, 'A') (3, 4").unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput(_)), "{err:?}");
    }

    #[test]
    fn test_output_limit_is_enforced() {
        let codec = Lz77::default().with_output_limit(8);
        let tokens = lz77::encode(b"twelve chars");
        assert_eq!(
            codec.decode(&tokens).unwrap_err(),
            CodecError::CapacityExceeded { limit: 8 }
        );
    }
}
