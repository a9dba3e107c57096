use core::fmt;
use std::ops::Range;

use serde::Serialize;
use strum_macros::Display;

use super::classify::classify_interior;
use super::span::MarkupSpan;

/// What a `<...>` span turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum TagKind {
    /// Not a tag: blank, nested brackets, `</x/>`, or no usable name.
    /// Copied through untouched by every transform.
    NotTag,
    /// Self-contained: `<br/>`, `<img src=x />`, `<!DOCTYPE html>`, `<?xml ...?>`.
    Single,
    /// Opens a pair: `<div class="x">`.
    PairOpen,
    /// Closes a pair: `</div>`.
    PairClose,
}

impl TagKind {
    /// Everything except [`TagKind::NotTag`].
    #[must_use]
    pub const fn is_tag(self) -> bool {
        !matches!(self, Self::NotTag)
    }

    /// [`TagKind::PairOpen`] or [`TagKind::PairClose`].
    #[must_use]
    pub const fn is_paired(self) -> bool {
        matches!(self, Self::PairOpen | Self::PairClose)
    }
}

/// A classified tag span.
///
/// The name is lower-cased and is empty exactly when the kind is
/// [`TagKind::NotTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken<'a> {
    span: MarkupSpan<'a>,
    kind: TagKind,
    name: String,
}

impl<'a> TagToken<'a> {
    /// Classify a span produced by the scanner.
    #[must_use]
    pub fn classify(span: MarkupSpan<'a>) -> Self {
        let (kind, name) = classify_interior(span.as_str());
        Self { span, kind, name }
    }

    /// The interior span, without `<` and `>`.
    #[must_use]
    pub const fn span(&self) -> MarkupSpan<'a> {
        self.span
    }

    /// The classification.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        self.kind
    }

    /// Lower-case tag name; empty for [`TagKind::NotTag`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text between the delimiters.
    #[must_use]
    pub fn interior(&self) -> &'a str {
        self.span.as_str()
    }

    /// Position of the whole tag, delimiters included.
    #[must_use]
    pub const fn outer_range(&self) -> Range<usize> {
        self.span.outer_range()
    }

    /// The tag exactly as written in the source, delimiters included.
    #[must_use]
    pub fn literal(&self) -> &'a str {
        &self.span.source()[self.outer_range()]
    }
}

impl fmt::Display for TagToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.outer_range();
        write!(f, "{}..{} {}", range.start, range.end, self.kind)?;
        if !self.name.is_empty() {
            write!(f, "({})", self.name)?;
        }
        write!(f, " {}", self.literal())
    }
}
