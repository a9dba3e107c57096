use std::fmt;
use std::ops::Range;

/// A substring of some source text, identified by position rather than copied.
///
/// Materializing the text is a slice of the borrowed source, so there is
/// nothing to cache and nothing is ever cloned. Two spans are equal only when
/// they point into the very same source buffer at the same range; equal text
/// taken from different buffers is not enough.
#[derive(Debug, Clone, Copy)]
pub struct MarkupSpan<'a> {
    source: &'a str,
    start: usize,
    len: usize,
}

impl<'a> MarkupSpan<'a> {
    /// Both ends of `start..start + len` must be char boundaries of `source`.
    pub(crate) fn new(source: &'a str, start: usize, len: usize) -> Self {
        debug_assert!(start + len <= source.len());
        debug_assert!(source.is_char_boundary(start));
        debug_assert!(source.is_char_boundary(start + len));
        Self { source, start, len }
    }

    /// Byte offset of the first character in the source.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length span.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The byte range within the source.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The text this span covers.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.range()]
    }

    /// The whole text the span was taken from.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// For a tag interior: the range including the surrounding `<` and `>`.
    ///
    /// Only meaningful for spans produced by [`super::TagTokenizer`], which
    /// always sit between one delimiter byte on each side.
    #[must_use]
    pub const fn outer_range(&self) -> Range<usize> {
        self.start.saturating_sub(1)..self.end() + 1
    }
}

impl PartialEq for MarkupSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source.as_ptr(), other.source.as_ptr())
            && self.source.len() == other.source.len()
            && self.start == other.start
            && self.len == other.len
    }
}

impl Eq for MarkupSpan<'_> {}

impl fmt::Display for MarkupSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_materializes_slice() {
        let source = "<b>bold</b>";
        let span = MarkupSpan::new(source, 1, 1);
        assert_eq!(span.as_str(), "b");
        assert_eq!(span.outer_range(), 0..3);
        assert_eq!(span.to_string(), "b");
    }

    #[test]
    fn test_equality_requires_same_source() {
        let first = String::from("<b>");
        let second = String::from("<b>");
        let a = MarkupSpan::new(&first, 1, 1);
        let b = MarkupSpan::new(&second, 1, 1);
        assert_eq!(a.as_str(), b.as_str());
        assert_ne!(a, b);
        assert_eq!(a, MarkupSpan::new(&first, 1, 1));
    }

    #[test]
    fn test_equality_requires_same_range() {
        let source = "<b><b>";
        assert_ne!(MarkupSpan::new(source, 1, 1), MarkupSpan::new(source, 4, 1));
    }
}
