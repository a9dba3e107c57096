//! Open/close balance repair.
//!
//! One forward pass with a stack of open tag names:
//!
//! - an opener is copied and its name pushed;
//! - a closer is copied and popped if it matches the innermost open tag, and
//!   dropped otherwise (the stack is left alone);
//! - single tags and non-tags are copied untouched;
//! - at the end, a closer is synthesized for every name still on the stack,
//!   innermost first.
//!
//! Matching only against the innermost open tag is what informal renderers do
//! when they auto-close, and it makes the output well formed in one pass.
//! Running the repair on its own output changes nothing.

use tagsoup_common::warning::warn_once;

use crate::options::RepairOptions;
use crate::tokenizer::helpers::is_void_element;
use crate::tokenizer::{TagKind, TagToken, TagTokenizer};

/// Stack-based repairer for one input.
#[derive(Debug)]
pub struct BalanceRepairer<'a> {
    input: &'a str,
    options: RepairOptions,
    open_tags: Vec<String>,
    output: String,
}

impl<'a> BalanceRepairer<'a> {
    /// Create a repairer over `input`.
    #[must_use]
    pub fn new(input: &'a str, options: RepairOptions) -> Self {
        Self {
            input,
            options,
            open_tags: Vec::new(),
            output: String::with_capacity(input.len()),
        }
    }

    /// Run the repair and return the corrected text.
    #[must_use]
    pub fn run(mut self) -> String {
        let mut tokenizer = TagTokenizer::new(self.input, 0);
        let mut cursor = 0;

        for span in tokenizer.by_ref() {
            let token = TagToken::classify(span);
            let range = token.outer_range();
            self.output.push_str(&self.input[cursor..range.start]);
            self.handle_token(&token);
            cursor = range.end;
        }

        let tail = tokenizer.leftover().as_str();
        self.finish(tail)
    }

    fn handle_token(&mut self, token: &TagToken<'_>) {
        match self.effective_kind(token) {
            TagKind::PairOpen => {
                self.output.push_str(token.literal());
                self.open_tags.push(token.name().to_string());
            }
            TagKind::PairClose => {
                if self.open_tags.last().map(String::as_str) == Some(token.name()) {
                    let _ = self.open_tags.pop();
                    self.output.push_str(token.literal());
                } else {
                    warn_once("Repair", "dropped orphaned closer");
                }
            }
            TagKind::Single | TagKind::NotTag => {
                self.output.push_str(token.literal());
            }
        }
    }

    fn effective_kind(&self, token: &TagToken<'_>) -> TagKind {
        match token.kind() {
            TagKind::PairOpen if self.options.void_elements && is_void_element(token.name()) => {
                TagKind::Single
            }
            // A closer for "a/" would read back as `</a/>`, which is NotTag, and
            // the tag would be closed again on every later run.
            TagKind::PairOpen if token.name().ends_with('/') => TagKind::Single,
            kind => kind,
        }
    }

    /// Append the unscanned tail and the synthesized closers.
    ///
    /// A `<` left dangling in the tail would swallow anything appended after
    /// it on a later scan, so the closers go in front of it.
    fn finish(mut self, tail: &str) -> String {
        let (text, dangling) = tail.find('<').map_or((tail, ""), |i| tail.split_at(i));
        self.output.push_str(text);

        while let Some(name) = self.open_tags.pop() {
            warn_once("Repair", "synthesized missing closer");
            self.output.push_str("</");
            self.output.push_str(&name);
            self.output.push('>');
        }

        self.output.push_str(dangling);
        self.output
    }
}

/// Repair with XML semantics: every `<name>` without `/` expects a closer.
#[must_use]
pub fn fix_broken_tags(xml: &str) -> String {
    repair_with(xml, RepairOptions::xml())
}

/// Repair with HTML semantics: void elements such as `<br>` never get a
/// closer, and stray `</br>` closers are dropped.
#[must_use]
pub fn fix_broken_html(html: &str) -> String {
    repair_with(html, RepairOptions::html())
}

/// Repair with explicit options.
#[must_use]
pub fn repair_with(input: &str, options: RepairOptions) -> String {
    BalanceRepairer::new(input, options).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_tail_goes_after_closers() {
        assert_eq!(fix_broken_tags("x<b>y<i"), "x<b>y</b><i");
    }

    #[test]
    fn test_name_ending_in_slash_is_not_tracked() {
        assert_eq!(fix_broken_tags("<a// b>x"), "<a// b>x");
    }
}
