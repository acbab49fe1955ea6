//! The compiled-pattern facade.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::formatter;
use crate::matcher::{MatchInfo, Matcher};
use crate::token::Token;
use crate::tokenizer::{self, ParseGlobError};

/// Options fixed when a pattern is compiled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobOptions {
    /// Compare literals, character lists, and letter ranges without regard to
    /// case. Defaults to `false`. Number ranges, `?`, path separators, and
    /// wildcards are case-agnostic either way.
    pub case_insensitive: bool,
}

/// A compiled glob pattern: an immutable token sequence plus the
/// case-sensitivity configuration it was compiled with.
///
/// A `Glob` holds no per-evaluation state, so a single instance can be shared
/// freely across threads and matched concurrently without coordination.
#[derive(Debug, Clone)]
pub struct Glob {
    tokens: Vec<Token>,
    options: GlobOptions,
    /// Canonical pattern text, reconstructed lazily on first display.
    pattern: OnceLock<String>,
}

impl Glob {
    /// Compiles `pattern` with default (case-sensitive) options.
    ///
    /// # Errors
    /// Returns [`ParseGlobError::Empty`] if the pattern is empty.
    pub fn parse(pattern: &str) -> Result<Self, ParseGlobError> {
        Self::parse_with_options(pattern, GlobOptions::default())
    }

    /// Compiles `pattern` with the given options.
    ///
    /// # Errors
    /// Returns [`ParseGlobError::Empty`] if the pattern is empty.
    pub fn parse_with_options(
        pattern: &str,
        options: GlobOptions,
    ) -> Result<Self, ParseGlobError> {
        let tokens = tokenizer::tokenize(pattern)?;
        tracing::trace!(
            "compiled glob pattern `{pattern}` into {} tokens",
            tokens.len()
        );
        Ok(Self {
            tokens,
            options,
            pattern: OnceLock::new(),
        })
    }

    /// Does `subject` match this pattern?
    pub fn is_match(&self, subject: &str) -> bool {
        self.evaluate(subject).success
    }

    /// Evaluates `subject` and returns the detailed per-token match report.
    pub fn evaluate(&self, subject: &str) -> MatchInfo {
        Matcher::new(&self.tokens, self.options.case_insensitive).evaluate(subject)
    }

    /// The compiled token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The options this pattern was compiled with.
    pub fn options(&self) -> GlobOptions {
        self.options
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern.get_or_init(|| formatter::format(&self.tokens)))
    }
}

impl FromStr for Glob {
    type Err = ParseGlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
