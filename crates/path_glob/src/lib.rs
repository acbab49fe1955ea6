#![deny(missing_docs)]
//! Compiles glob patterns into immutable token sequences and matches path
//! strings against them with a backtracking evaluator.
//!
//! A pattern string such as `**/*.txt` or `src/[A-Z]*.cs` is tokenized once
//! into a [`Glob`]; the compiled pattern is then reused for any number of
//! concurrent [`Glob::is_match`] / [`Glob::evaluate`] calls.
//!
//! # Pattern syntax
//!
//! | Syntax | Meaning |
//! |---|---|
//! | literal characters | match exactly |
//! | `?` | exactly one character, not a separator |
//! | `*` | zero or more characters, never crossing a separator |
//! | `**` | zero or more characters, may cross separators; absorbs an immediately adjacent leading and/or trailing separator in the pattern text |
//! | `/`, `\` | path separators, mutually equivalent |
//! | `[abc]` | one character in the set |
//! | `[!abc]` | one character not in the set |
//! | `[a-z]` | one character in the inclusive range |
//! | `[!a-z]` | one character outside the inclusive range |
//! | `]]` inside a class | a literal `]` |
//!
//! # Matching semantics
//!
//! Wildcards are resolved by a greedy shortest-prefix-first search: a wildcard
//! consumes as little as possible and defers to the tokens after it, retrying
//! with a longer prefix until the rest of the pattern matches or its horizon
//! (the current path segment for `*`, everything for `**`) is exhausted.
//! [`Glob::evaluate`] reports which token consumed which piece of the subject,
//! the token at which matching failed, and any unconsumed trailing text.
//!
//! Matching never fails with an error; the only fallible operation is
//! compilation, which rejects the empty pattern. Patterns with many adjacent
//! wildcards can backtrack exponentially in the worst case; typical file
//! globs are nowhere near that bound.

mod cursor;
mod formatter;
mod glob;
mod matcher;
mod token;
mod tokenizer;

pub use glob::{Glob, GlobOptions};
pub use matcher::MatchInfo;
pub use token::{Token, TokenMatch};
pub use tokenizer::ParseGlobError;
