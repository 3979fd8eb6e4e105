#![no_main]

use libfuzzer_sys::fuzz_target;
use wasm_soup::embed::{escape_for_embedding, unescape_template_literal};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let escaped = escape_for_embedding(text);
        assert_eq!(unescape_template_literal(&escaped), text);
        assert!(!escaped.to_ascii_lowercase().contains("</script"));
        assert!(!escaped.contains("<!--"));
    }
});
