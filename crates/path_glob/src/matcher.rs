//! Evaluates a compiled token sequence against a subject string.

use crate::cursor::Cursor;
use crate::token::{Token, TokenMatch};

/// The outcome of evaluating a compiled pattern against one subject string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    /// Whether the whole subject matched the whole pattern.
    pub success: bool,

    /// The tokens that matched, in pattern order, paired with the subject
    /// text each one consumed. On failure this is a best-effort partial list
    /// kept for diagnostics.
    pub matches: Vec<TokenMatch>,

    /// The token at which matching first failed. `None` on success, and also
    /// `None` when the failure was subject text left over after every token
    /// had matched.
    pub failing_token: Option<Token>,

    /// Subject text that was never consumed.
    pub unmatched_text: String,
}

/// Matches a token sequence against subject text.
///
/// The matcher itself holds only the shared token slice and the
/// case-sensitivity choice fixed at compile time; every piece of mutable
/// state (cursor, queue position, match accumulator) lives inside a single
/// [`Matcher::evaluate`] call, so one matcher can serve any number of
/// concurrent evaluations.
///
/// Each wildcard triggers up to one nested re-evaluation of the remaining
/// tokens per character of its horizon, so patterns with many adjacent
/// wildcards are worst-case exponential. Typical file globs (short segments,
/// few wildcards) stay far away from that bound and no memoization is needed
/// for correctness.
pub(crate) struct Matcher<'g> {
    tokens: &'g [Token],
    case_insensitive: bool,
}

impl<'g> Matcher<'g> {
    pub(crate) fn new(tokens: &'g [Token], case_insensitive: bool) -> Self {
        Self {
            tokens,
            case_insensitive,
        }
    }

    /// Evaluates the token sequence against `text`, consuming tokens as a
    /// queue. Success requires both the queue and the subject text to be
    /// fully consumed.
    pub(crate) fn evaluate(&self, text: &str) -> MatchInfo {
        let mut cursor = Cursor::new(text);
        let mut matches = Vec::with_capacity(self.tokens.len());

        for (index, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Wildcard | Token::WildcardDirectory { .. } => {
                    return self.match_wildcard(
                        token,
                        &self.tokens[index + 1..],
                        &mut cursor,
                        matches,
                    );
                }
                _ => match self.match_single(token, &mut cursor) {
                    Some(consumed) => matches.push(TokenMatch {
                        token: token.clone(),
                        text: consumed,
                    }),
                    None => {
                        return MatchInfo {
                            success: false,
                            matches,
                            failing_token: Some(token.clone()),
                            unmatched_text: cursor.read_to_end().to_string(),
                        }
                    }
                },
            }
        }

        if !cursor.at_end() {
            // All tokens matched but subject text remains.
            return MatchInfo {
                success: false,
                matches,
                failing_token: None,
                unmatched_text: cursor.read_to_end().to_string(),
            };
        }

        MatchInfo {
            success: true,
            matches,
            failing_token: None,
            unmatched_text: String::new(),
        }
    }

    /// Matches one non-wildcard token, returning the text it consumed.
    fn match_single(&self, token: &Token, cursor: &mut Cursor<'_>) -> Option<String> {
        match token {
            Token::Literal(expected) => {
                for expected_char in expected.chars() {
                    let c = cursor.read()?;
                    if !self.chars_equal(expected_char, c) {
                        return None;
                    }
                }
                Some(expected.clone())
            }
            Token::AnyCharacter => {
                let c = cursor.read()?;
                if Cursor::is_separator(c) {
                    return None;
                }
                Some(c.to_string())
            }
            Token::PathSeparator(_) => {
                let c = cursor.read()?;
                if !Cursor::is_separator(c) {
                    return None;
                }
                Some(c.to_string())
            }
            Token::CharacterList { chars, negated } => {
                let c = cursor.read()?;
                let member = chars.iter().any(|&m| self.chars_equal(m, c));
                if member == *negated {
                    return None;
                }
                Some(c.to_string())
            }
            Token::LetterRange {
                start,
                end,
                negated,
            } => {
                let c = cursor.read()?;
                let member = self.letter_in_range(c, *start, *end);
                if member == *negated {
                    return None;
                }
                Some(c.to_string())
            }
            Token::NumberRange {
                start,
                end,
                negated,
            } => {
                let c = cursor.read()?;
                let member = (*start..=*end).contains(&c);
                if member == *negated {
                    return None;
                }
                Some(c.to_string())
            }
            Token::Wildcard | Token::WildcardDirectory { .. } => {
                unreachable!("wildcard tokens are handled by match_wildcard")
            }
        }
    }

    /// Greedy shortest-prefix-first backtracking for `*` and `**`.
    ///
    /// The wildcard captures everything left in the cursor, then searches for
    /// the smallest prefix it can consume such that a fresh nested matcher
    /// accepts the remaining tokens against the rest of the text. `*` may only
    /// consume up to the end of the current path segment; `**` may consume the
    /// entire remaining text.
    fn match_wildcard(
        &self,
        token: &Token,
        remaining_tokens: &[Token],
        cursor: &mut Cursor<'_>,
        mut matches: Vec<TokenMatch>,
    ) -> MatchInfo {
        // Placeholder recorded up front so the match list stays in pattern
        // order; its text is filled in once the consumed prefix is known.
        let placeholder = matches.len();
        matches.push(TokenMatch {
            token: token.clone(),
            text: String::new(),
        });

        let remaining_text = cursor.read_to_end();
        let horizon = match token {
            Token::WildcardDirectory { .. } => remaining_text.len(),
            _ => Cursor::new(remaining_text).read_path_segment().len(),
        };

        if remaining_tokens.is_empty() {
            // The wildcard consumes its whole horizon. Text beyond the
            // horizon (past the current segment for `*`) is extra trailing
            // input.
            matches[placeholder].text = remaining_text[..horizon].to_string();
            if horizon == remaining_text.len() {
                return MatchInfo {
                    success: true,
                    matches,
                    failing_token: None,
                    unmatched_text: String::new(),
                };
            }
            return MatchInfo {
                success: false,
                matches,
                failing_token: None,
                unmatched_text: remaining_text[horizon..].to_string(),
            };
        }

        let nested = Matcher::new(remaining_tokens, self.case_insensitive);
        let mut best: Option<Vec<TokenMatch>> = None;
        let mut consumed = 0;

        loop {
            let attempt = nested.evaluate(&remaining_text[consumed..]);
            if attempt.success {
                matches[placeholder].text = remaining_text[..consumed].to_string();
                matches.extend(attempt.matches);
                return MatchInfo {
                    success: true,
                    matches,
                    failing_token: None,
                    unmatched_text: String::new(),
                };
            }

            // Keep the attempt that got furthest, for diagnostics. A later
            // attempt replaces it only by matching strictly more tokens.
            let improved = match &best {
                None => !attempt.matches.is_empty(),
                Some(best) => best.len() < attempt.matches.len(),
            };
            if improved {
                best = Some(attempt.matches);
            }

            if consumed >= horizon {
                break;
            }
            match remaining_text[consumed..].chars().next() {
                Some(c) => consumed += c.len_utf8(),
                None => break,
            }
        }

        matches[placeholder].text = remaining_text[..consumed].to_string();
        if let Some(best) = best {
            matches.extend(best);
        }
        MatchInfo {
            success: false,
            matches,
            failing_token: Some(token.clone()),
            unmatched_text: remaining_text[consumed..].to_string(),
        }
    }

    fn chars_equal(&self, a: char, b: char) -> bool {
        if a == b {
            return true;
        }
        self.case_insensitive && a.to_lowercase().eq(b.to_lowercase())
    }

    fn letter_in_range(&self, c: char, start: char, end: char) -> bool {
        let in_range = |c: char| (start..=end).contains(&c);
        if in_range(c) {
            return true;
        }
        self.case_insensitive
            && (c.to_lowercase().any(in_range) || c.to_uppercase().any(in_range))
    }
}
