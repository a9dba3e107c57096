//! Tag tokenizer module.
//!
//! Scanning is purely lexical: a tag span is the text between a literal `<`
//! and the next literal `>`. Nothing here knows about nesting; that is left to
//! the repairer and the pruner, which consume these spans.

/// Tag classification rules.
pub mod classify;
/// String helpers shared by the scanners.
pub mod helpers;
/// The lexical `<...>` scanner.
pub mod scanner;
/// Borrowed, zero-copy substring handles.
pub mod span;
/// Classified tag tokens.
pub mod token;

pub use classify::{classify_interior, classify_tag};
pub use scanner::{TagScan, TagTokenizer, scan_tags, tokenize};
pub use span::MarkupSpan;
pub use token::{TagKind, TagToken};
