//! Empty pair pruning.
//!
//! For each opener, the closer is the first literal `</name>` after it
//! (ASCII case-insensitive); nesting is not tracked. The text in between is
//! pruned recursively, and the pair is dropped if nothing is left. An opener
//! with no closer is kept and scanning continues after it; its name is
//! remembered so later openers of the same name at that level are not
//! searched for again. Single tags and non-tags are always kept.
//!
//! `<p><b></b>hi<i></i></p>` becomes `<p>hi</p>`.

use std::collections::HashSet;

use tagsoup_common::warning::warn_once;

use crate::error::MarkupError;
use crate::options::PruneOptions;
use crate::tokenizer::helpers::find_ignore_ascii_case;
use crate::tokenizer::{TagKind, TagToken, TagTokenizer};

/// Remove empty paired tags using the default nesting limit.
///
/// # Errors
///
/// [`MarkupError::TooComplex`] if the nesting is deeper than
/// [`crate::options::DEFAULT_MAX_DEPTH`].
pub fn remove_empty_pair_tags(html: &str) -> Result<String, MarkupError> {
    remove_empty_pair_tags_with(html, PruneOptions::default())
}

/// Remove empty paired tags.
///
/// # Errors
///
/// [`MarkupError::TooComplex`] if the nesting is deeper than
/// `options.max_depth`. Nothing is returned in that case; a partially pruned
/// document is never produced.
pub fn remove_empty_pair_tags_with(
    html: &str,
    options: PruneOptions,
) -> Result<String, MarkupError> {
    prune(html, 0, options.max_depth)
}

fn prune(input: &str, depth: usize, max_depth: usize) -> Result<String, MarkupError> {
    if depth > max_depth {
        warn_once(
            "Prune",
            &format!("gave up: nesting exceeds {max_depth} levels"),
        );
        return Err(MarkupError::TooComplex { limit: max_depth });
    }

    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    // Names with no closer between here and the end of `input`. Searching
    // again from a later cursor cannot succeed.
    let mut unclosed: HashSet<String> = HashSet::new();

    loop {
        let Some(span) = TagTokenizer::new(input, cursor).next() else {
            output.push_str(&input[cursor..]);
            break;
        };
        let token = TagToken::classify(span);
        let opener = token.outer_range();
        output.push_str(&input[cursor..opener.start]);
        cursor = opener.end;

        if token.kind() != TagKind::PairOpen {
            output.push_str(token.literal());
            continue;
        }

        if unclosed.contains(token.name()) {
            output.push_str(token.literal());
            continue;
        }
        let closer_literal = format!("</{}>", token.name());
        let Some(closer_start) = find_ignore_ascii_case(input, &closer_literal, opener.end) else {
            let _ = unclosed.insert(token.name().to_string());
            output.push_str(token.literal());
            continue;
        };
        let closer_end = closer_start + closer_literal.len();

        let content = prune(&input[opener.end..closer_start], depth + 1, max_depth)?;
        if !content.is_empty() {
            output.push_str(token.literal());
            output.push_str(&content);
            output.push_str(&input[closer_start..closer_end]);
        }
        cursor = closer_end;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_is_inclusive() {
        let nested = "<a><a>x</a></a>";
        // Lexical matching: the outer <a> closes at the first </a>, so the
        // deepest content is one level down.
        assert!(remove_empty_pair_tags_with(nested, PruneOptions { max_depth: 1 }).is_ok());
        assert_eq!(
            remove_empty_pair_tags_with("<a><b>x</b></a>", PruneOptions { max_depth: 1 }),
            Err(MarkupError::TooComplex { limit: 1 })
        );
    }
}
