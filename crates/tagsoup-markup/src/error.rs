use thiserror::Error;

/// Failures reported by the markup engine.
///
/// Malformed markup is never one of these. Only caller mistakes (bad
/// arguments) and the pruner's nesting limit surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A required string argument was empty.
    #[error("argument `{0}` must not be empty")]
    EmptyArgument(&'static str),

    /// A required string argument had no letter or digit in it.
    #[error("argument `{0}` must contain at least one alphanumeric character")]
    NotAlphanumeric(&'static str),

    /// A start offset pointed at or past the end of the input.
    #[error("start index {index} is out of range for input of length {len}")]
    IndexOutOfRange {
        /// The offending offset, in bytes.
        index: usize,
        /// Length of the input, in bytes.
        len: usize,
    },

    /// Nesting went deeper than the configured limit; no output is produced.
    #[error("markup too complex: nesting exceeds {limit} levels")]
    TooComplex {
        /// The depth limit that was exceeded.
        limit: usize,
    },
}

/// Check a required string argument: non-empty and at least one alphanumeric
/// character.
pub(crate) fn require_alphanumeric(value: &str, name: &'static str) -> Result<(), MarkupError> {
    if value.is_empty() {
        return Err(MarkupError::EmptyArgument(name));
    }
    if !value.chars().any(char::is_alphanumeric) {
        return Err(MarkupError::NotAlphanumeric(name));
    }
    Ok(())
}
