#![no_main]

use libfuzzer_sys::fuzz_target;
use wasm_soup::embed::{discover_snippets, prepare_loader};

fuzz_target!(|data: &[u8]| {
    if let Ok(loader) = std::str::from_utf8(data) {
        let snippets = discover_snippets(loader, "game");
        for snippet in &snippets {
            assert!(snippet.path.starts_with("snippets/game-"));
            assert!(snippet
                .ident()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
        let _ = prepare_loader(loader, "game_bg.wasm", &snippets);
    }
});
