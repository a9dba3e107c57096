//! Byte- and char-level helpers for the scanners.
//!
//! Every structural character the engine looks for (`<`, `>`, `/`, `=`,
//! quotes) is ASCII, and ASCII bytes never occur inside a multi-byte UTF-8
//! sequence. Byte offsets found by searching for them are therefore always
//! char boundaries, which is what lets the scanners slice freely.

/// Move `index` forward to the nearest char boundary, clamped to `input.len()`.
#[must_use]
pub fn snap_to_char_boundary(input: &str, index: usize) -> usize {
    let mut index = index.min(input.len());
    while !input.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// ASCII case-insensitive `starts_with` at a byte offset.
#[must_use]
pub fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

/// First byte offset at or after `from` where `needle` occurs, ignoring ASCII
/// case.
///
/// `needle` must start with an ASCII byte so a match can only begin on a char
/// boundary.
#[must_use]
pub fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    let first = *needle.first()?;
    debug_assert!(first.is_ascii());

    let mut i = from;
    while i + needle.len() <= hay.len() {
        let rel = hay[i..]
            .iter()
            .position(|b| b.eq_ignore_ascii_case(&first))?;
        let pos = i + rel;
        if starts_with_ignore_ascii_case_at(hay, pos, needle) {
            return Some(pos);
        }
        i = pos + 1;
    }
    None
}

/// HTML void elements: never have content, never take a closer.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
