//! Text-safe encoding of the binary module

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode raw module bytes as padded standard base64.
///
/// The output is plain ASCII and can be dropped into a JavaScript string
/// literal (`atob("...")`) without further escaping.
pub fn encode_binary(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Inverse of [`encode_binary`].
pub fn decode_binary(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}
