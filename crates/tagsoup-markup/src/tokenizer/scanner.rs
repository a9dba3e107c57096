use std::iter::FusedIterator;

use super::helpers::snap_to_char_boundary;
use super::span::MarkupSpan;
use super::token::TagToken;

/// Lexical tag scanner.
///
/// Yields, left to right, the interior of every `<...>`: the text between a
/// literal `<` and the next literal `>`. Pairing is purely lexical, so in
/// `a <b <c> d` the yielded interior is `b <c`; the classifier is what rejects
/// such spans. Scanning never fails. When no further bracket pair exists the
/// iterator ends and [`TagTokenizer::leftover`] covers the unscanned tail.
#[derive(Debug, Clone)]
pub struct TagTokenizer<'a> {
    input: &'a str,
    // Where the search for the next '<' begins.
    pos: usize,
}

impl<'a> TagTokenizer<'a> {
    /// Start scanning `input` at byte offset `start`.
    ///
    /// An offset past the end gives an empty scan; one inside a multi-byte
    /// character is moved forward to the next character.
    #[must_use]
    pub fn new(input: &'a str, start: usize) -> Self {
        Self {
            input,
            pos: snap_to_char_boundary(input, start),
        }
    }

    /// Byte offset just after the last `>` consumed (or the start offset).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Text after the last closed `>`. Only final once iteration has ended.
    #[must_use]
    pub fn leftover(&self) -> MarkupSpan<'a> {
        MarkupSpan::new(self.input, self.pos, self.input.len() - self.pos)
    }
}

impl<'a> Iterator for TagTokenizer<'a> {
    type Item = MarkupSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let open = self.pos + self.input[self.pos..].find('<')?;
        let interior_start = open + 1;
        let close = interior_start + self.input[interior_start..].find('>')?;
        self.pos = close + 1;
        Some(MarkupSpan::new(
            self.input,
            interior_start,
            close - interior_start,
        ))
    }
}

impl FusedIterator for TagTokenizer<'_> {}

/// Result of a full scan: every tag interior plus the trailing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScan<'a> {
    /// Tag interiors in source order.
    pub tags: Vec<MarkupSpan<'a>>,
    /// Everything after the last closed `>`; the whole input (from the start
    /// offset) if there was no bracket pair.
    pub leftover: MarkupSpan<'a>,
}

/// Scan `input` from byte offset `start` to the end.
#[must_use]
pub fn scan_tags(input: &str, start: usize) -> TagScan<'_> {
    let mut tokenizer = TagTokenizer::new(input, start);
    let tags = tokenizer.by_ref().collect();
    TagScan {
        tags,
        leftover: tokenizer.leftover(),
    }
}

/// Scan and classify every tag in `input`.
#[must_use]
pub fn tokenize(input: &str) -> Vec<TagToken<'_>> {
    TagTokenizer::new(input, 0).map(TagToken::classify).collect()
}
