//! Turns glob pattern text into an ordered sequence of [`Token`]s.

use thiserror::Error;

use crate::cursor::Cursor;
use crate::token::Token;

/// An error that occurred while compiling a glob pattern.
///
/// Compilation is the only fallible operation in this crate; everything that
/// can go wrong while *matching* is reported through
/// [`MatchInfo`](crate::MatchInfo) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGlobError {
    /// The pattern string was empty.
    #[error("glob pattern is empty")]
    Empty,
}

/// Tokenizes `pattern` by reading one character at a time and dispatching on
/// the cursor's classification predicates, in their fixed priority order.
///
/// Linear in the pattern length; character-class scanning is additionally
/// linear in the class length.
pub(crate) fn tokenize(pattern: &str) -> Result<Vec<Token>, ParseGlobError> {
    if pattern.is_empty() {
        return Err(ParseGlobError::Empty);
    }

    let mut cursor = Cursor::new(pattern);
    let mut tokens = Vec::new();
    while cursor.read().is_some() {
        if cursor.is_start_of_character_class() {
            tokens.push(read_character_class(&mut cursor));
        } else if cursor.is_single_char_wildcard() {
            tokens.push(Token::AnyCharacter);
        } else if cursor.is_segment_wildcard() {
            tokens.push(Token::Wildcard);
        } else if cursor.is_path_separator() {
            if let Some(sep) = cursor.current() {
                tokens.push(Token::PathSeparator(sep));
            }
        } else if cursor.is_directory_wildcard() {
            // A separator emitted just before `**` belongs to the directory
            // wildcard, so that `/**/` collapses into a single token.
            let leading_separator = match tokens.last() {
                Some(Token::PathSeparator(sep)) => {
                    let sep = *sep;
                    tokens.pop();
                    Some(sep)
                }
                _ => None,
            };
            tokens.push(read_directory_wildcard(&mut cursor, leading_separator));
        } else {
            tokens.push(read_literal(&mut cursor));
        }
    }

    Ok(tokens)
}

/// Reads the remainder of a `**` token. The cursor sits on the first `*`.
fn read_directory_wildcard(cursor: &mut Cursor<'_>, leading_separator: Option<char>) -> Token {
    cursor.read();
    let trailing_separator = match cursor.peek() {
        Some(c) if Cursor::is_separator(c) => cursor.read(),
        _ => None,
    };
    Token::WildcardDirectory {
        leading_separator,
        trailing_separator,
    }
}

/// Accumulates a literal run starting at the current character. The run ends
/// before the next token-start character or path separator.
fn read_literal(cursor: &mut Cursor<'_>) -> Token {
    let mut text = String::new();
    text.extend(cursor.current());
    while let Some(next) = cursor.peek() {
        if Cursor::is_start_of_token(next) || Cursor::is_separator(next) {
            break;
        }
        cursor.read();
        text.push(next);
    }
    Token::Literal(text)
}

/// Reads a `[...]` class. The cursor sits on the opening bracket.
///
/// The class is a letter or number range when its first character is
/// alphanumeric and followed by `-`, otherwise a character list. Scanning
/// stops at an unescaped `]` (`]]` is an escaped literal `]`). A class that is
/// never terminated is built permissively from whatever was scanned.
fn read_character_class(cursor: &mut Cursor<'_>) -> Token {
    let negated = if cursor.peek() == Some('!') {
        cursor.read();
        true
    } else {
        false
    };

    let mut chars = Vec::new();
    let mut is_range = false;
    let mut alphabetic_start = false;

    if let Some(first) = cursor.peek() {
        cursor.read();
        if first.is_alphanumeric() && cursor.peek() == Some('-') {
            is_range = true;
            alphabetic_start = first.is_alphabetic();
        }
        chars.push(first);
    }

    if is_range {
        // Skip over the dash; the next scanned character is the upper bound.
        cursor.read();
    }

    while let Some(c) = cursor.read() {
        if c == ']' {
            if cursor.peek() == Some(']') {
                chars.push(c);
            } else {
                break;
            }
        } else {
            chars.push(c);
        }
    }

    if is_range {
        if let (Some(&start), Some(&end)) = (chars.first(), chars.get(1)) {
            return if alphabetic_start {
                Token::LetterRange {
                    start,
                    end,
                    negated,
                }
            } else {
                Token::NumberRange {
                    start,
                    end,
                    negated,
                }
            };
        }
        // A range missing its end bound degrades to a plain character list.
    }

    Token::CharacterList { chars, negated }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, ParseGlobError};
    use crate::token::Token;

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!(tokenize(""), Err(ParseGlobError::Empty));
    }

    #[test]
    fn literal_runs_split_on_separators_and_token_starts() {
        let tokens = tokenize("src/main.rs").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("src".to_string()),
                Token::PathSeparator('/'),
                Token::Literal("main.rs".to_string()),
            ]
        );
    }

    #[test]
    fn wildcards_and_any_character() {
        let tokens = tokenize("*.c?").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Wildcard,
                Token::Literal(".c".to_string()),
                Token::AnyCharacter,
            ]
        );
    }

    #[test]
    fn directory_wildcard_absorbs_both_separators() {
        let tokens = tokenize("a/**/b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("a".to_string()),
                Token::WildcardDirectory {
                    leading_separator: Some('/'),
                    trailing_separator: Some('/'),
                },
                Token::Literal("b".to_string()),
            ]
        );
    }

    #[test]
    fn directory_wildcard_absorbs_only_trailing_separator_at_start() {
        let tokens = tokenize("**/b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::WildcardDirectory {
                    leading_separator: None,
                    trailing_separator: Some('/'),
                },
                Token::Literal("b".to_string()),
            ]
        );
    }

    #[test]
    fn directory_wildcard_absorbs_only_leading_separator_at_end() {
        let tokens = tokenize("a/**").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("a".to_string()),
                Token::WildcardDirectory {
                    leading_separator: Some('/'),
                    trailing_separator: None,
                },
            ]
        );
    }

    #[test]
    fn bare_directory_wildcard() {
        let tokens = tokenize("**").unwrap();
        assert_eq!(
            tokens,
            vec![Token::WildcardDirectory {
                leading_separator: None,
                trailing_separator: None,
            }]
        );
    }

    #[test]
    fn backslash_separators_are_preserved_in_tokens() {
        let tokens = tokenize("a\\**\\b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("a".to_string()),
                Token::WildcardDirectory {
                    leading_separator: Some('\\'),
                    trailing_separator: Some('\\'),
                },
                Token::Literal("b".to_string()),
            ]
        );
    }

    #[test]
    fn character_list() {
        let tokens = tokenize("[abc]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::CharacterList {
                chars: vec!['a', 'b', 'c'],
                negated: false,
            }]
        );
    }

    #[test]
    fn negated_character_list() {
        let tokens = tokenize("[!abc]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::CharacterList {
                chars: vec!['a', 'b', 'c'],
                negated: true,
            }]
        );
    }

    #[test]
    fn letter_and_number_ranges() {
        assert_eq!(
            tokenize("[a-z]").unwrap(),
            vec![Token::LetterRange {
                start: 'a',
                end: 'z',
                negated: false,
            }]
        );
        assert_eq!(
            tokenize("[!0-9]").unwrap(),
            vec![Token::NumberRange {
                start: '0',
                end: '9',
                negated: true,
            }]
        );
    }

    #[test]
    fn doubled_close_bracket_escapes_a_literal_bracket() {
        let tokens = tokenize("[a]]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::CharacterList {
                chars: vec!['a', ']'],
                negated: false,
            }]
        );
    }

    #[test]
    fn unterminated_class_is_accepted_permissively() {
        let tokens = tokenize("[abc").unwrap();
        assert_eq!(
            tokens,
            vec![Token::CharacterList {
                chars: vec!['a', 'b', 'c'],
                negated: false,
            }]
        );
    }

    #[test]
    fn unterminated_range_without_end_degrades_to_a_list() {
        let tokens = tokenize("[a-").unwrap();
        assert_eq!(
            tokens,
            vec![Token::CharacterList {
                chars: vec!['a'],
                negated: false,
            }]
        );
    }

    #[test]
    fn range_with_extra_characters_keeps_the_first_two_bounds() {
        let tokens = tokenize("[a-zX]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::LetterRange {
                start: 'a',
                end: 'z',
                negated: false,
            }]
        );
    }

    #[test]
    fn dash_after_non_alphanumeric_first_char_stays_a_list() {
        let tokens = tokenize("[--.]").unwrap();
        assert_eq!(
            tokens,
            vec![Token::CharacterList {
                chars: vec!['-', '-', '.'],
                negated: false,
            }]
        );
    }

    #[test]
    fn exclamation_outside_a_class_is_a_literal() {
        let tokens = tokenize("a!b").unwrap();
        assert_eq!(tokens, vec![Token::Literal("a!b".to_string())]);
    }
}
