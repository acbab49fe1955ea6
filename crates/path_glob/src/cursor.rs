//! A single-pass, lookahead-capable reader over pattern and subject text.

/// Characters that begin a non-literal token in a glob pattern.
const TOKEN_START_CHARS: [char; 3] = ['*', '[', '?'];

/// The two path separator characters, treated as equivalent everywhere.
const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// A forward-only cursor over a string with one character of lookahead.
///
/// The cursor is an explicit value: it carries the text it reads together with
/// its byte position and the current/previous character. A fresh cursor is
/// created for every tokenization or match evaluation, so no reader state ever
/// survives a call.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'t> {
    text: &'t str,
    /// Byte offset of the next unread character.
    pos: usize,
    current: Option<char>,
    previous: Option<char>,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor positioned before the first character of `text`.
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            pos: 0,
            current: None,
            previous: None,
        }
    }

    /// Advances to the next character and returns it, or `None` at end of input.
    pub(crate) fn read(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.pos += next.len_utf8();
        self.previous = self.current;
        self.current = Some(next);
        Some(next)
    }

    /// Returns the next character without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// The character most recently returned by [`Cursor::read`].
    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    /// The character read before the current one.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn previous(&self) -> Option<char> {
        self.previous
    }

    /// True once every character has been consumed.
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Reads up to, but not including, the next path separator and returns the
    /// run. The separator itself becomes the current character.
    pub(crate) fn read_path_segment(&mut self) -> &'t str {
        let start = self.pos;
        let mut end = self.pos;
        while let Some(c) = self.read() {
            if Self::is_separator(c) {
                break;
            }
            end = self.pos;
        }
        &self.text[start..end]
    }

    /// Consumes and returns all remaining text.
    pub(crate) fn read_to_end(&mut self) -> &'t str {
        let rest = &self.text[self.pos..];
        self.pos = self.text.len();
        if let Some(c) = rest.chars().last() {
            self.previous = self.current;
            self.current = Some(c);
        }
        rest
    }

    /// Is `c` one of the two path separator characters?
    pub(crate) fn is_separator(c: char) -> bool {
        PATH_SEPARATORS.contains(&c)
    }

    /// Can `c` begin a non-literal token?
    pub(crate) fn is_start_of_token(c: char) -> bool {
        TOKEN_START_CHARS.contains(&c)
    }

    // The predicates below classify the current character and centralize the
    // tokenizer's dispatch priority: character class, then single-character
    // wildcard, then segment wildcard, then path separator, then directory
    // wildcard, then literal fallback.

    /// Does the current character open a character class or range (`[`)?
    pub(crate) fn is_start_of_character_class(&self) -> bool {
        self.current == Some('[')
    }

    /// Is the current character the single-character wildcard (`?`)?
    pub(crate) fn is_single_char_wildcard(&self) -> bool {
        self.current == Some('?')
    }

    /// Is the current character a `*` that is not part of a `**`?
    pub(crate) fn is_segment_wildcard(&self) -> bool {
        self.current == Some('*') && self.peek() != Some('*')
    }

    /// Is the current character a path separator?
    pub(crate) fn is_path_separator(&self) -> bool {
        self.current.is_some_and(Self::is_separator)
    }

    /// Does the current character begin a directory wildcard (`**`)?
    pub(crate) fn is_directory_wildcard(&self) -> bool {
        self.current == Some('*') && self.peek() == Some('*')
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn read_advances_and_tracks_previous() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.read(), Some('b'));
        assert_eq!(cursor.previous(), Some('a'));
        assert_eq!(cursor.read(), None);
        assert!(cursor.at_end());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.read(), Some('x'));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn read_path_segment_stops_at_separator() {
        let mut cursor = Cursor::new("abc/def");
        assert_eq!(cursor.read_path_segment(), "abc");
        assert_eq!(cursor.current(), Some('/'));
        assert_eq!(cursor.read_to_end(), "def");
        assert!(cursor.at_end());
    }

    #[test]
    fn read_path_segment_runs_to_end_without_separator() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.read_path_segment(), "abc");
        assert!(cursor.at_end());
    }

    #[test]
    fn backslash_is_a_separator_too() {
        let mut cursor = Cursor::new("a\\b");
        assert_eq!(cursor.read_path_segment(), "a");
        assert!(Cursor::is_separator('\\'));
        assert!(Cursor::is_separator('/'));
    }

    #[test]
    fn wildcard_classification_depends_on_lookahead() {
        let mut cursor = Cursor::new("**");
        cursor.read();
        assert!(cursor.is_directory_wildcard());
        assert!(!cursor.is_segment_wildcard());

        let mut cursor = Cursor::new("*a");
        cursor.read();
        assert!(cursor.is_segment_wildcard());
        assert!(!cursor.is_directory_wildcard());
    }

    #[test]
    fn empty_input_is_immediately_at_end() {
        let mut cursor = Cursor::new("");
        assert!(cursor.at_end());
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.read_to_end(), "");
    }
}
