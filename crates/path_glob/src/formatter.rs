//! Serializes a token sequence back to canonical pattern text.

use itertools::Itertools;

use crate::token::Token;

/// Appends the canonical textual form of each token, in order.
///
/// This is a pure left-to-right transform with no backtracking; it is only
/// used to reconstruct a display string for a compiled pattern.
pub(crate) fn format(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::AnyCharacter => out.push('?'),
            Token::Wildcard => out.push('*'),
            Token::WildcardDirectory {
                leading_separator,
                trailing_separator,
            } => {
                if let Some(sep) = leading_separator {
                    out.push(*sep);
                }
                out.push_str("**");
                if let Some(sep) = trailing_separator {
                    out.push(*sep);
                }
            }
            Token::PathSeparator(sep) => out.push(*sep),
            Token::CharacterList { chars, negated } => {
                out.push('[');
                if *negated {
                    out.push('!');
                }
                out.push_str(&chars.iter().join(""));
                out.push(']');
            }
            Token::LetterRange {
                start,
                end,
                negated,
            }
            | Token::NumberRange {
                start,
                end,
                negated,
            } => {
                out.push('[');
                if *negated {
                    out.push('!');
                }
                out.push(*start);
                out.push('-');
                out.push(*end);
                out.push(']');
            }
        }
    }
    out
}
