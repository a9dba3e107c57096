//! Tag removal.
//!
//! Every span the classifier recognizes as a tag is dropped together with its
//! delimiters; text between tags, and spans that are not tags (`a < b > c`),
//! are kept byte for byte.
//!
//! A `<` in the tail that never meets a `>` is dropped together with the rest
//! of the tail: `"x <b"` strips to `"x "`. Keeping it would be an equally
//! defensible choice; dropping it means a half-written tag never leaks into
//! plain text.

use crate::options::StripOptions;
use crate::tokenizer::{TagKind, TagToken, TagTokenizer};

/// Strip tags, keeping text.
///
/// `remove_tags("<b>Hello</b> <i>World</i>")` is `"Hello World"`.
#[must_use]
pub fn remove_tags(html: &str) -> String {
    strip_tags_with(html, StripOptions::default())
}

/// Strip tags, turning `<br>` variants into `\r\n` and `&nbsp;`/`&ensp;` into
/// plain spaces.
#[must_use]
pub fn intelli_remove_tags(html: &str) -> String {
    strip_tags_with(html, StripOptions::intelligent())
}

/// Strip tags with explicit options.
///
/// Text without a `<` holds no markup and is returned as is, entities
/// included.
#[must_use]
pub fn strip_tags_with(html: &str, options: StripOptions) -> String {
    if !html.contains('<') {
        return html.to_string();
    }

    let mut output = String::with_capacity(html.len());
    let mut tokenizer = TagTokenizer::new(html, 0);
    let mut cursor = 0;

    for span in tokenizer.by_ref() {
        let token = TagToken::classify(span);
        let range = token.outer_range();
        output.push_str(&html[cursor..range.start]);
        cursor = range.end;

        if options.line_breaks && is_line_break(token.interior()) {
            output.push_str("\r\n");
        } else if token.kind() == TagKind::NotTag {
            output.push_str(token.literal());
        }
    }

    let tail = tokenizer.leftover().as_str();
    output.push_str(tail.find('<').map_or(tail, |i| &tail[..i]));

    if options.space_entities {
        replace_space_entities(&output)
    } else {
        output
    }
}

/// `br`, `br/`, ` BR / ` and the like.
fn is_line_break(interior: &str) -> bool {
    let body = interior.trim();
    let body = body.strip_suffix('/').unwrap_or(body).trim_end();
    body.eq_ignore_ascii_case("br")
}

const SPACE_ENTITIES: [&str; 2] = ["&nbsp;", "&ensp;"];

fn replace_space_entities(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let entity = SPACE_ENTITIES.iter().find(|entity| {
            candidate
                .get(..entity.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(entity))
        });
        if let Some(entity) = entity {
            output.push(' ');
            rest = &candidate[entity.len()..];
        } else {
            output.push('&');
            rest = &candidate[1..];
        }
    }
    output.push_str(rest);
    output
}
