use std::mem;

use strum_macros::Display;

use super::map::AttributeMap;

/// States of the attribute scanner.
///
/// Each state says exactly what the next character can do, so combinations
/// such as "inside quotes but reading a key" cannot arise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttributeState {
    /// Between attributes.
    Idle,
    /// Reading a name.
    Key,
    /// Name ended by whitespace; a `=` may still follow.
    AfterKey,
    /// Saw `=`; waiting for the value to start.
    BeforeValue,
    /// Inside a value opened by the given quote character.
    Quoted(char),
    /// Inside a value with no quotes; ends at whitespace.
    Unquoted,
    /// Skipping a quoted run that did not follow `=`.
    StrayQuoted(char),
}

/// Character-at-a-time attribute scanner.
///
/// Input is the text between a tag's name and its closing `>` or `/>`.
/// Nothing here can fail: quotes that never close, values without names and
/// stray punctuation all degrade to a fixed outcome.
///
/// - Name characters are letters, digits, `-` and `:`; anything else in name
///   position is skipped.
/// - A name followed by another name (no `=`) gets an empty value.
/// - Quoted values may contain anything, including `=` and whitespace.
/// - Unquoted values end at whitespace.
/// - At end of input the pending name is kept with whatever value was read.
/// - If a name repeats (in any case) the first one wins.
#[derive(Debug)]
pub struct AttributeParser<'a> {
    input: &'a str,
    state: AttributeState,
    key: String,
    value: String,
    attributes: AttributeMap,
}

impl<'a> AttributeParser<'a> {
    /// Create a parser over the attribute text of one tag.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            state: AttributeState::Idle,
            key: String::new(),
            value: String::new(),
            attributes: AttributeMap::new(),
        }
    }

    /// Current state. Mostly useful for tests and debugging.
    #[must_use]
    pub const fn state(&self) -> AttributeState {
        self.state
    }

    /// Run over the whole input and return the collected attributes.
    #[must_use]
    pub fn run(mut self) -> AttributeMap {
        for c in self.input.chars() {
            self.step(c);
        }
        self.finish()
    }

    /// Feed one character.
    pub fn step(&mut self, c: char) {
        match self.state {
            AttributeState::Idle => {
                if is_key_char(c) {
                    self.key.push(c);
                    self.state = AttributeState::Key;
                } else if is_quote(c) {
                    self.state = AttributeState::StrayQuoted(c);
                }
            }
            AttributeState::Key => {
                if c.is_whitespace() {
                    self.state = AttributeState::AfterKey;
                } else if c == '=' {
                    self.state = AttributeState::BeforeValue;
                } else if is_quote(c) {
                    self.flush();
                    self.state = AttributeState::StrayQuoted(c);
                } else if is_key_char(c) {
                    self.key.push(c);
                }
            }
            AttributeState::AfterKey => {
                if c == '=' {
                    self.state = AttributeState::BeforeValue;
                } else if is_quote(c) {
                    self.flush();
                    self.state = AttributeState::StrayQuoted(c);
                } else if is_key_char(c) {
                    // Previous name had no value.
                    self.flush();
                    self.key.push(c);
                    self.state = AttributeState::Key;
                }
            }
            AttributeState::BeforeValue => {
                if is_quote(c) {
                    self.state = AttributeState::Quoted(c);
                } else if !c.is_whitespace() {
                    self.value.push(c);
                    self.state = AttributeState::Unquoted;
                }
            }
            AttributeState::Quoted(quote) => {
                if c == quote {
                    self.flush();
                    self.state = AttributeState::Idle;
                } else {
                    self.value.push(c);
                }
            }
            AttributeState::Unquoted => {
                if c.is_whitespace() {
                    self.flush();
                    self.state = AttributeState::Idle;
                } else if is_quote(c) {
                    self.flush();
                    self.state = AttributeState::StrayQuoted(c);
                } else {
                    self.value.push(c);
                }
            }
            AttributeState::StrayQuoted(quote) => {
                if c == quote {
                    self.state = AttributeState::Idle;
                }
            }
        }
    }

    /// Flush anything pending and return the collected attributes.
    #[must_use]
    pub fn finish(mut self) -> AttributeMap {
        self.flush();
        self.attributes
    }

    fn flush(&mut self) {
        let key = mem::take(&mut self.key);
        let value = mem::take(&mut self.value);
        if !key.is_empty() {
            let _ = self.attributes.insert(key, value);
        }
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | ':')
}

const fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}
