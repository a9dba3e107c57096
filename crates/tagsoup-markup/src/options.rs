/// Default nesting limit for [`PruneOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for [`crate::repair::BalanceRepairer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOptions {
    /// Treat HTML void elements (`br`, `img`, `meta`, ...) as single tags even
    /// without a trailing `/`. Off by default, which gives XML semantics: every
    /// `<name>` without `/` expects a closer.
    pub void_elements: bool,
}

impl RepairOptions {
    /// XML semantics. Same as `Default`.
    #[must_use]
    pub const fn xml() -> Self {
        Self {
            void_elements: false,
        }
    }

    /// HTML semantics: void elements never get a synthesized closer.
    #[must_use]
    pub const fn html() -> Self {
        Self {
            void_elements: true,
        }
    }
}

/// Settings for the empty pair pruner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneOptions {
    /// Deepest nesting the pruner will descend into before giving up with
    /// [`crate::MarkupError::TooComplex`].
    pub max_depth: usize,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Settings for [`crate::strip::strip_tags_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOptions {
    /// Replace `<br>`, `<br/>` and spaced variants with `\r\n`.
    pub line_breaks: bool,
    /// Replace `&nbsp;` and `&ensp;` with a plain space.
    pub space_entities: bool,
}

impl StripOptions {
    /// Both conversions on; what `intelli_remove_tags` uses.
    #[must_use]
    pub const fn intelligent() -> Self {
        Self {
            line_breaks: true,
            space_entities: true,
        }
    }
}
