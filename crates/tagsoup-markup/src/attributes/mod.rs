//! Attribute extraction.
//!
//! Finding the tag is a simplified scan of its own, separate from
//! [`crate::tokenizer::TagTokenizer`]: it looks for `<name` directly and ends
//! the tag at the first `>` that is not inside a quoted value, so
//! `<a title="x > y">` keeps its whole title. The attribute text stops before
//! a closing `>` or `/>`.

mod map;
mod parser;

use std::ops::Range;

pub use map::{Attribute, AttributeMap, Iter};
pub use parser::{AttributeParser, AttributeState};

use crate::error::{MarkupError, require_alphanumeric};
use crate::tokenizer::helpers::{snap_to_char_boundary, starts_with_ignore_ascii_case_at};

/// Attributes of the first `<tag_name ...>` at or after `start_index`.
///
/// The tag name is matched ASCII case-insensitively and must be followed by
/// whitespace, `/`, `>` or the end of input, so `a` does not find `<abbr>`.
/// Returns `Ok(None)` when there is no such tag.
///
/// # Errors
///
/// - [`MarkupError::EmptyArgument`] / [`MarkupError::NotAlphanumeric`] if
///   `html` or `tag_name` has no letter or digit.
/// - [`MarkupError::IndexOutOfRange`] if `start_index >= html.len()`.
pub fn get_attributes_for_tag(
    html: &str,
    tag_name: &str,
    start_index: usize,
) -> Result<Option<AttributeMap>, MarkupError> {
    require_alphanumeric(html, "html")?;
    require_alphanumeric(tag_name, "tag_name")?;
    if start_index >= html.len() {
        return Err(MarkupError::IndexOutOfRange {
            index: start_index,
            len: html.len(),
        });
    }

    Ok(locate_tag(html, tag_name.trim(), start_index)
        .map(|tag| AttributeParser::new(&html[tag.attributes]).run()))
}

/// Attributes of every `<tag_name ...>` in `html`, in document order.
///
/// # Errors
///
/// [`MarkupError::EmptyArgument`] / [`MarkupError::NotAlphanumeric`] if
/// `html` or `tag_name` has no letter or digit.
pub fn find_all_attributes_for_tag(
    html: &str,
    tag_name: &str,
) -> Result<Vec<AttributeMap>, MarkupError> {
    require_alphanumeric(html, "html")?;
    require_alphanumeric(tag_name, "tag_name")?;

    let tag_name = tag_name.trim();
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(tag) = locate_tag(html, tag_name, pos) {
        found.push(AttributeParser::new(&html[tag.attributes]).run());
        pos = tag.resume;
    }
    Ok(found)
}

struct LocatedTag {
    // Text between the tag name and the closing '>'.
    attributes: Range<usize>,
    // Where a search for the next occurrence continues.
    resume: usize,
}

fn locate_tag(html: &str, tag_name: &str, from: usize) -> Option<LocatedTag> {
    let bytes = html.as_bytes();
    let name = tag_name.as_bytes();
    let mut pos = snap_to_char_boundary(html, from);

    while let Some(rel) = html[pos..].find('<') {
        let open = pos + rel;
        let name_end = open + 1 + name.len();
        if starts_with_ignore_ascii_case_at(bytes, open + 1, name) && ends_tag_name(html, name_end)
        {
            let end = attribute_text_end(html, name_end);
            return Some(LocatedTag {
                attributes: name_end..trim_self_closing(html, name_end, end),
                resume: (end + 1).min(html.len()),
            });
        }
        pos = open + 1;
    }
    None
}

fn ends_tag_name(html: &str, at: usize) -> bool {
    html[at..]
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c == '/' || c == '>')
}

/// Drop the `/` of a `/>` terminator, so `<img src=x/>` reads `src` as `x`.
/// A tag left open at the end of input has no terminator to trim.
fn trim_self_closing(html: &str, from: usize, end: usize) -> usize {
    if end < html.len() && html[from..end].ends_with('/') {
        end - 1
    } else {
        end
    }
}

/// Offset of the `>` closing a tag whose attributes start at `from`.
///
/// A quote only counts as opening a value right after `=`, so an apostrophe
/// in `title=don't` does not hide the real `>`. If a quoted value never
/// closes, the first literal `>` is used instead; with no `>` at all the tag
/// runs to the end of input.
fn attribute_text_end(html: &str, from: usize) -> usize {
    let mut quote: Option<char> = None;
    let mut after_equals = false;

    for (i, c) in html[from..].char_indices() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '>' => return from + i,
            '"' | '\'' if after_equals => {
                quote = Some(c);
                after_equals = false;
            }
            '=' => after_equals = true,
            c if c.is_whitespace() => {}
            _ => after_equals = false,
        }
    }

    html[from..].find('>').map_or(html.len(), |i| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_gt_does_not_end_tag() {
        let html = r#"<a title="x > y">"#;
        assert_eq!(attribute_text_end(html, 2), html.len() - 1);
    }

    #[test]
    fn test_apostrophe_in_unquoted_value_is_literal() {
        let html = "<a title=don't>rest";
        assert_eq!(attribute_text_end(html, 2), 14);
    }

    #[test]
    fn test_unbalanced_quote_falls_back_to_first_gt() {
        let html = r#"<a title="oops>text"#;
        assert_eq!(attribute_text_end(html, 2), 14);
    }

    #[test]
    fn test_no_gt_runs_to_end() {
        let html = "<a href=x";
        assert_eq!(attribute_text_end(html, 2), html.len());
    }

    #[test]
    fn test_name_boundary() {
        assert!(locate_tag("<abbr title=x>", "a", 0).is_none());
        assert!(locate_tag("<a/>", "a", 0).is_some());
        assert!(locate_tag("<a", "a", 0).is_some());
    }
}
