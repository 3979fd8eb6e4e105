//! Escaping for text embedded in a JavaScript template literal
//!
//! The loader and snippet scripts are placed between backticks inside the
//! page's module script. Three characters are significant there: `\`, `` ` ``
//! and `$` (as the start of `${`). They are escaped in that order so the
//! backslashes added for the latter two are never escaped again.

/// Escape text for placement inside a template literal.
///
/// Escapes, in order: backslash, backtick, dollar sign.
pub fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('$', "\\$")
}

/// Undo [`escape_template_literal`] (and [`guard_script_close`]).
///
/// A backslash takes the following character literally, which is how the
/// browser evaluates `\\`, `` \` ``, `\$`, `\/` and `\!` inside a template
/// literal.
/// A trailing lone backslash is kept as is.
pub fn unescape_template_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Keep escaped text from closing the surrounding `<script>` element.
///
/// Rewrites every `</script` (ASCII case-insensitive) as `<\/script` and
/// every `<!--` as `<\!--`. An unguarded `<!--` followed by `<script` puts
/// the HTML tokenizer in its double-escaped state, where the real closing
/// tag no longer ends the element. Must run after
/// [`escape_template_literal`]; the inserted backslashes are valid
/// template-literal escapes that evaluate back to `/` and `!`.
pub fn guard_script_close(s: &str) -> String {
    const SCRIPT_CLOSE: &[u8] = b"</script";
    const COMMENT_OPEN: &[u8] = b"<!--";

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        let rest = &bytes[i..];
        let matched = if rest.len() >= SCRIPT_CLOSE.len()
            && rest[..SCRIPT_CLOSE.len()].eq_ignore_ascii_case(SCRIPT_CLOSE)
        {
            Some(SCRIPT_CLOSE.len())
        } else if rest.starts_with(COMMENT_OPEN) {
            Some(COMMENT_OPEN.len())
        } else {
            None
        };
        match matched {
            Some(len) => {
                out.push_str(&s[last..i + 1]);
                out.push('\\');
                last = i + 1;
                i += len;
            }
            None => i += 1,
        }
    }
    out.push_str(&s[last..]);
    out
}

/// Escape text for embedding into the page's module script.
pub fn escape_for_embedding(s: &str) -> String {
    guard_script_close(&escape_template_literal(s))
}
