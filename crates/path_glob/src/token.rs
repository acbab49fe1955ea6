//! The token model a glob pattern compiles into.

/// One classified unit of a compiled glob pattern.
///
/// Tokens are pure data: they are created once by the tokenizer, never change
/// afterwards, and carry no reader or matcher state. A token sequence can
/// therefore be shared across any number of concurrent match evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An exact run of non-special characters.
    Literal(String),

    /// `?`: exactly one character that is not a path separator.
    AnyCharacter,

    /// `*`: zero or more characters within a single path segment. Never
    /// matches across a separator.
    Wildcard,

    /// `**`: zero or more characters, potentially crossing separators.
    WildcardDirectory {
        /// Separator that immediately preceded the `**` in the pattern text
        /// and was absorbed into this token.
        leading_separator: Option<char>,
        /// Separator that immediately followed the `**` in the pattern text
        /// and was absorbed into this token.
        trailing_separator: Option<char>,
    },

    /// Exactly one path separator. `/` and `\` are mutually equivalent when
    /// matching; the character recorded here is the one the pattern used.
    PathSeparator(char),

    /// `[abc]` or `[!abc]`: one character that is (or is not) in the set.
    CharacterList {
        /// The member characters, in pattern order.
        chars: Vec<char>,
        /// Whether the class was negated with a leading `!`.
        negated: bool,
    },

    /// `[a-z]` or `[!a-z]`: one character inside (or outside) an inclusive
    /// ordinal range that the tokenizer classified as alphabetic.
    LetterRange {
        /// Inclusive lower bound.
        start: char,
        /// Inclusive upper bound.
        end: char,
        /// Whether the range was negated with a leading `!`.
        negated: bool,
    },

    /// Same matching semantics as [`Token::LetterRange`]; the tokenizer
    /// classified the range as numeric. The distinction is informational only.
    NumberRange {
        /// Inclusive lower bound.
        start: char,
        /// Inclusive upper bound.
        end: char,
        /// Whether the range was negated with a leading `!`.
        negated: bool,
    },
}

/// A token paired with the subject text it consumed during one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    /// The pattern token that matched.
    pub token: Token,
    /// The subject text the token consumed.
    pub text: String,
}
