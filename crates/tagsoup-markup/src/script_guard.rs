//! Script tag neutralizing.
//!
//! Only `script` tags are touched: their `<` and `>` become `&lt;` and `&gt;`
//! so a browser renders them as text. Everything else, tags included, is
//! copied byte for byte.
//!
//! A tag counts as `script` under either reading of its name: the
//! classifier's (text up to whitespace) or a browser's (text up to
//! whitespace or `/`). The second catches `<script/src=...>`, which the
//! classifier names `script/src=...` but a browser runs as a script. Spans
//! that hold a nested `<` are rescanned from that inner `<`, so `<<script>`
//! cannot hide a tag behind a stray bracket. A `<script` whose `<` pairs with
//! no `>`, skipped in such a rescan or left dangling at the end of input, is
//! escaped too.

use tagsoup_common::warning::warn_once;

use crate::tokenizer::helpers::starts_with_ignore_ascii_case_at;
use crate::tokenizer::{TagTokenizer, classify_interior};

const SCRIPT: &str = "script";

/// Entity-escape every `script` tag, leaving all other text untouched.
///
/// `escape_script_tags("<script>alert(1)</script>ok")` is
/// `"&lt;script&gt;alert(1)&lt;/script&gt;ok"`.
#[must_use]
pub fn escape_script_tags(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let mut cursor = 0;

    while let Some(span) = TagTokenizer::new(html, cursor).next() {
        let interior = span.as_str();

        if let Some(inner) = interior.rfind('<') {
            // Resume at the innermost '<'. The skipped '<' may pair with a
            // later '>' once the inner tag is escaped, so it is escaped too
            // if it starts a script name.
            let restart = span.start() + inner;
            escape_unpaired(&html[cursor..restart], &mut output);
            cursor = restart;
            continue;
        }

        let outer = span.outer_range();
        output.push_str(&html[cursor..outer.start]);
        if is_script_tag(interior) {
            warn_once("ScriptGuard", "escaped a script tag");
            output.push_str("&lt;");
            output.push_str(interior);
            output.push_str("&gt;");
        } else {
            output.push_str(&html[outer.clone()]);
        }
        cursor = outer.end;
    }

    escape_unpaired(&html[cursor..], &mut output);
    output
}

fn is_script_tag(interior: &str) -> bool {
    let (kind, name) = classify_interior(interior);
    if kind.is_tag() && name == SCRIPT {
        return true;
    }

    let body = interior.strip_prefix('/').unwrap_or(interior);
    body.split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .is_some_and(|name| name.eq_ignore_ascii_case(SCRIPT))
}

/// Copy text whose `<` characters start no tag, escaping any `<script` or
/// `</script` among them. `<scripts` and the like are left alone.
fn escape_unpaired(text: &str, output: &mut String) {
    let bytes = text.as_bytes();
    let mut copied = 0;

    for (i, _) in text.match_indices('<') {
        let name_at = if bytes.get(i + 1) == Some(&b'/') { i + 2 } else { i + 1 };
        let name_end = name_at + SCRIPT.len();
        if starts_with_ignore_ascii_case_at(bytes, name_at, SCRIPT.as_bytes())
            && ends_script_name(&text[name_end..])
        {
            warn_once("ScriptGuard", "escaped an unterminated script tag");
            output.push_str(&text[copied..i]);
            output.push_str("&lt;");
            copied = i + 1;
        }
    }
    output.push_str(&text[copied..]);
}

/// Browser reading: a tag name runs until whitespace or `/`.
fn ends_script_name(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c == '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_name_reading() {
        assert!(is_script_tag("script"));
        assert!(is_script_tag("/SCRIPT"));
        assert!(is_script_tag("script/src=x"));
        assert!(is_script_tag("script\ttype=module"));
        assert!(!is_script_tag(" script"));
        assert!(!is_script_tag("scripts"));
        assert!(!is_script_tag("noscript"));
    }

    #[test]
    fn test_dangling_script_is_escaped() {
        let mut out = String::new();
        escape_unpaired("a <b <script src=x", &mut out);
        assert_eq!(out, "a <b &lt;script src=x");
    }

    #[test]
    fn test_unpaired_name_needs_boundary() {
        for (text, expected) in [
            ("<scripts", "<scripts"),
            ("</scripting y", "</scripting y"),
            ("<scriptfoo", "<scriptfoo"),
            ("<script", "&lt;script"),
            ("</SCRIPT/x", "&lt;/SCRIPT/x"),
        ] {
            let mut out = String::new();
            escape_unpaired(text, &mut out);
            assert_eq!(out, expected, "{text}");
        }
    }
}
