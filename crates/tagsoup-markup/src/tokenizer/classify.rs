use super::token::TagKind;

/// Classify a tag interior (the text between `<` and `>`).
///
/// Rules, first match wins:
///
/// 1. Blank, or containing another `<` or `>`: `NotTag`.
/// 2. The name is the text up to the first whitespace with one leading and
///    one trailing `/` removed, lower-cased. No name: `NotTag`.
/// 3. Starts and ends with `/` (`</foo/>`): `NotTag`.
/// 4. Starts with `!` or `?` (declarations, comments, processing
///    instructions): `Single`.
/// 5. Ends with `/`: `Single`.
/// 6. Starts with `/`: `PairClose`.
/// 7. Anything else: `PairOpen`.
#[must_use]
pub fn classify_interior(interior: &str) -> (TagKind, String) {
    if interior.trim().is_empty() || interior.contains(['<', '>']) {
        return not_tag();
    }

    let name = tag_name(interior);
    if name.is_empty() {
        return not_tag();
    }

    let opens_with_slash = interior.starts_with('/');
    let closes_with_slash = interior.ends_with('/');

    if opens_with_slash && closes_with_slash {
        return not_tag();
    }

    let kind = if interior.starts_with(['!', '?']) || closes_with_slash {
        TagKind::Single
    } else if opens_with_slash {
        TagKind::PairClose
    } else {
        TagKind::PairOpen
    };
    (kind, name)
}

/// Classify a tag literal such as `<div>` or `</p>`.
///
/// One leading `<` and one trailing `>` are removed if present, so a bare
/// interior is accepted too.
#[must_use]
pub fn classify_tag(tag_literal: &str) -> (TagKind, String) {
    let interior = tag_literal.strip_prefix('<').unwrap_or(tag_literal);
    let interior = interior.strip_suffix('>').unwrap_or(interior);
    classify_interior(interior)
}

const fn not_tag() -> (TagKind, String) {
    (TagKind::NotTag, String::new())
}

fn tag_name(interior: &str) -> String {
    let head = interior
        .split(char::is_whitespace)
        .next()
        .unwrap_or_default();
    let head = head.strip_prefix('/').unwrap_or(head);
    let head = head.strip_suffix('/').unwrap_or(head);
    head.to_ascii_lowercase()
}
