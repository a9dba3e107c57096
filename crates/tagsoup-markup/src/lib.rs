//! Fault-tolerant markup tag engine.
//!
//! # Scope
//!
//! This crate works on raw HTML/XML text at the level of individual tags. It
//! never builds a tree and never rejects malformed markup; broken input is
//! the expected case and is resolved by fixed, deterministic rules.
//!
//! - **Tokenizer** ([`tokenizer`]) - finds every `<...>` span lexically and
//!   classifies it as [`TagKind::NotTag`], [`TagKind::Single`],
//!   [`TagKind::PairOpen`] or [`TagKind::PairClose`]
//! - **Attributes** ([`attributes`]) - a quote-tolerant attribute state
//!   machine producing an ordered, case-insensitive [`AttributeMap`]
//! - **Balance repair** ([`repair`]) - drops orphaned closers and
//!   synthesizes closers for tags left open
//! - **Empty pair pruning** ([`prune`]) - removes paired tags whose content
//!   is empty after recursive pruning
//! - **Stripping** ([`strip`]) - removes tags while keeping text, optionally
//!   turning `<br>` into line breaks
//! - **Script guard** ([`script_guard`]) - entity-escapes `<script>` tags and
//!   nothing else
//!
//! # Not Implemented
//!
//! - DOM construction or any tree-level algorithm
//! - CDATA, script or rawtext tokenizer modes
//! - Character reference decoding
//! - Encoding sniffing

/// Attribute extraction for a named tag.
pub mod attributes;
/// Error type for precondition failures and fail-closed limits.
pub mod error;
/// Option structs for the configurable transforms.
pub mod options;
/// Recursive removal of empty paired tags.
pub mod prune;
/// Stack-based open/close balance repair.
pub mod repair;
/// Entity-escaping of script tags.
pub mod script_guard;
/// Tag removal that keeps text content.
pub mod strip;
/// Lexical tag scanning and classification.
pub mod tokenizer;

pub use attributes::{
    Attribute, AttributeMap, AttributeParser, find_all_attributes_for_tag, get_attributes_for_tag,
};
pub use error::MarkupError;
pub use options::{PruneOptions, RepairOptions, StripOptions};
pub use prune::{remove_empty_pair_tags, remove_empty_pair_tags_with};
pub use repair::{BalanceRepairer, fix_broken_html, fix_broken_tags, repair_with};
pub use script_guard::escape_script_tags;
pub use strip::{intelli_remove_tags, remove_tags, strip_tags_with};
pub use tokenizer::{
    MarkupSpan, TagKind, TagScan, TagToken, TagTokenizer, classify_tag, scan_tags, tokenize,
};
