//! Property tests for binary encoding.

use proptest::prelude::*;

use wasm_soup::embed::{decode_binary, encode_binary};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decode(encode(bytes)) == bytes.
    #[test]
    fn property_base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_binary(&bytes);
        prop_assert_eq!(decode_binary(&encoded).unwrap(), bytes);
    }

    /// PROPERTY: Encoded text is safe inside a double-quoted JS string.
    #[test]
    fn property_base64_alphabet_only(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = encode_binary(&bytes);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
        prop_assert_eq!(encoded.len(), bytes.len().div_ceil(3) * 4);
    }
}
