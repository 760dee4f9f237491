//! Forward-only tokenizing cursor over a borrowed byte buffer.
//!
//! A [`TokenCursor`] walks `[0, len)` of its input and yields sub-slices
//! (tokens) without copying. It is a small explicit state machine:
//!
//! ```text
//! Initial --advance--> Active --advance--> Active ...
//!    |                   |
//!    |                   +--buffer ends--> LastPending --advance--> Exhausted
//!    +--empty input------------------------------------------------> Exhausted
//! ```
//!
//! `LastPending` holds the trailing token: the bytes after the final
//! separator, or an empty token when the buffer ends in a delimiter (unless
//! compression is on). The cursor yields exactly the same tokens, in the
//! same order, as [`split_with`](crate::split_with).
//!
//! The predicate is held by shared reference; the borrow checker enforces
//! that it outlives every cursor copied from the tokenizer.

use crate::delimiter::Delimiter;
use crate::options::SplitOptions;
use core::iter::FusedIterator;
use core::ops::Range;

/// Resolves one separator event for a delimiter found at `at`.
///
/// Returns `(token_end, resume)`: where the preceding token stops, and where
/// scanning for the next token begins.
#[inline(always)]
pub(crate) fn separator<D: Delimiter + ?Sized>(
    input: &[u8],
    at: usize,
    predicate: &D,
    options: SplitOptions,
) -> (usize, usize) {
    let run_end = |mut i: usize| {
        while i < input.len() && predicate.is_delimiter(input[i]) {
            i += 1;
        }
        i
    };

    if options.include_all() {
        let stop = run_end(at);
        (stop, stop)
    } else if options.include_first() {
        let token_end = at + 1;
        let resume = if options.compress() {
            run_end(token_end)
        } else {
            token_end
        };
        (token_end, resume)
    } else {
        let resume = if options.compress() {
            run_end(at + 1)
        } else {
            at + 1
        };
        (at, resume)
    }
}

/// Cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Constructed but not yet advanced onto a token.
    Initial,
    /// Holds a token that was terminated by a separator.
    Active,
    /// Holds the trailing token; the next advance exhausts the cursor.
    LastPending,
    /// No more tokens.
    Exhausted,
}

/// A tokenizer binding input, predicate and options; hands out cursors.
pub struct Tokenizer<'a, 'd, D: Delimiter + ?Sized> {
    input: &'a [u8],
    predicate: &'d D,
    options: SplitOptions,
}

impl<D: Delimiter + ?Sized> Clone for Tokenizer<'_, '_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Delimiter + ?Sized> Copy for Tokenizer<'_, '_, D> {}

impl<'a, 'd, D: Delimiter + ?Sized> Tokenizer<'a, 'd, D> {
    /// Tokenizer with default options.
    pub fn new(input: &'a [u8], predicate: &'d D) -> Self {
        Self::with_options(input, predicate, SplitOptions::DEFAULT)
    }

    /// Tokenizer with explicit options.
    pub fn with_options(input: &'a [u8], predicate: &'d D, options: SplitOptions) -> Self {
        Tokenizer {
            input,
            predicate,
            options,
        }
    }

    /// Cursor positioned on the first token (or exhausted for empty input).
    pub fn begin(&self) -> TokenCursor<'a, 'd, D> {
        TokenCursor::new(self.input, self.predicate, self.options)
    }

    /// The end sentinel every cursor from this tokenizer converges to.
    pub fn end(&self) -> TokenCursor<'a, 'd, D> {
        TokenCursor::end(self.input, self.predicate, self.options)
    }

    /// Alias for [`begin`](Self::begin), for iterator-style use.
    pub fn iter(&self) -> TokenCursor<'a, 'd, D> {
        self.begin()
    }

    /// Number of tokens; walks the whole input.
    pub fn count_tokens(&self) -> usize {
        self.begin().count()
    }
}

impl<'a, 'd, D: Delimiter + ?Sized> IntoIterator for Tokenizer<'a, 'd, D> {
    type Item = &'a [u8];
    type IntoIter = TokenCursor<'a, 'd, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// Forward cursor producing successive tokens.
pub struct TokenCursor<'a, 'd, D: Delimiter + ?Sized> {
    input: &'a [u8],
    predicate: &'d D,
    options: SplitOptions,
    state: CursorState,
    /// Where the next scan starts.
    pos: usize,
    current: (usize, usize),
}

impl<D: Delimiter + ?Sized> Clone for TokenCursor<'_, '_, D> {
    fn clone(&self) -> Self {
        TokenCursor {
            input: self.input,
            predicate: self.predicate,
            options: self.options,
            state: self.state,
            pos: self.pos,
            current: self.current,
        }
    }
}

impl<'a, 'd, D: Delimiter + ?Sized> TokenCursor<'a, 'd, D> {
    /// Cursor over `input`, already advanced onto its first token.
    pub fn new(input: &'a [u8], predicate: &'d D, options: SplitOptions) -> Self {
        let len = input.len();
        let mut cursor = TokenCursor {
            input,
            predicate,
            options,
            state: CursorState::Initial,
            pos: 0,
            current: (len, len),
        };
        if input.is_empty() {
            cursor.state = CursorState::Exhausted;
        } else {
            cursor.advance();
        }
        cursor
    }

    /// An exhausted cursor bound to `input`.
    pub fn end(input: &'a [u8], predicate: &'d D, options: SplitOptions) -> Self {
        let len = input.len();
        TokenCursor {
            input,
            predicate,
            options,
            state: CursorState::Exhausted,
            pos: len,
            current: (len, len),
        }
    }

    /// Current state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// True once every token has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// The current token, if the cursor holds one.
    pub fn token(&self) -> Option<&'a [u8]> {
        self.span()
            .map(|span| &self.input[span])
    }

    /// Offsets of the current token within the input.
    pub fn span(&self) -> Option<Range<usize>> {
        match self.state {
            CursorState::Active | CursorState::LastPending => Some(self.current.0..self.current.1),
            CursorState::Initial | CursorState::Exhausted => None,
        }
    }

    /// The bytes not yet scanned.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Moves onto the next token.
    pub fn advance(&mut self) {
        match self.state {
            CursorState::Exhausted => return,
            CursorState::LastPending => {
                self.finish();
                return;
            }
            CursorState::Initial | CursorState::Active => {}
        }

        let len = self.input.len();
        let start = self.pos;

        if start == len {
            // The previous separator ran to the end of the buffer.
            if self.state == CursorState::Active && !self.options.compress() {
                self.current = (len, len);
                self.state = CursorState::LastPending;
            } else {
                self.finish();
            }
            return;
        }

        match self
            .predicate
            .find_in(&self.input[start..])
        {
            Some(offset) => {
                let (token_end, resume) =
                    separator(self.input, start + offset, self.predicate, self.options);
                self.current = (start, token_end);
                self.pos = resume;
                self.state = CursorState::Active;
            }
            None => {
                self.current = (start, len);
                self.pos = len;
                self.state = CursorState::LastPending;
            }
        }
    }

    fn finish(&mut self) {
        let len = self.input.len();
        self.state = CursorState::Exhausted;
        self.pos = len;
        self.current = (len, len);
    }
}

impl<'a, D: Delimiter + ?Sized> Iterator for TokenCursor<'a, '_, D> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.token()?;
        self.advance();
        Some(token)
    }
}

impl<D: Delimiter + ?Sized> FusedIterator for TokenCursor<'_, '_, D> {}

impl<D: Delimiter + ?Sized> PartialEq for TokenCursor<'_, '_, D> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.input, other.input)
            && self.current == other.current
            && self.is_exhausted() == other.is_exhausted()
    }
}

impl<D: Delimiter + ?Sized> core::fmt::Debug for TokenCursor<'_, '_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenCursor")
            .field("state", &self.state)
            .field("current", &(self.current.0..self.current.1))
            .field("pos", &self.pos)
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::{DelimiterTable, SingleDelimiter};
    use pretty_assertions::assert_eq;

    fn tokens(input: &[u8], delim: u8, options: SplitOptions) -> Vec<&[u8]> {
        let d = SingleDelimiter(delim);
        Tokenizer::with_options(input, &d, options)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_empty_input_is_exhausted() {
        let d = SingleDelimiter(b',');
        let t = Tokenizer::new(b"", &d);
        assert!(t.begin().is_exhausted());
        assert_eq!(t.begin(), t.end());
        assert_eq!(t.count_tokens(), 0);
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            tokens(b"10,20,,30", b',', SplitOptions::DEFAULT),
            vec![&b"10"[..], b"20", b"", b"30"]
        );
        assert_eq!(
            tokens(b"10,20,,30", b',', SplitOptions::COMPRESS_DELIMITERS),
            vec![&b"10"[..], b"20", b"30"]
        );
    }

    #[test]
    fn test_trailing_delimiter() {
        assert_eq!(
            tokens(b"foo,bar,", b',', SplitOptions::DEFAULT),
            vec![&b"foo"[..], b"bar", b""]
        );
        assert_eq!(
            tokens(b"foo,bar,", b',', SplitOptions::COMPRESS_DELIMITERS),
            vec![&b"foo"[..], b"bar"]
        );
        assert_eq!(tokens(b",", b',', SplitOptions::DEFAULT), vec![&b""[..], b""]);
    }

    #[test]
    fn test_leading_delimiter_survives_compression() {
        assert_eq!(
            tokens(b",,a", b',', SplitOptions::COMPRESS_DELIMITERS),
            vec![&b""[..], b"a"]
        );
    }

    #[test]
    fn test_include_delimiters() {
        assert_eq!(
            tokens(b"a,,b", b',', SplitOptions::INCLUDE_1ST_DELIMITER),
            vec![&b"a,"[..], b",", b"b"]
        );
        assert_eq!(
            tokens(
                b"a,,b",
                b',',
                SplitOptions::INCLUDE_1ST_DELIMITER | SplitOptions::COMPRESS_DELIMITERS
            ),
            vec![&b"a,"[..], b"b"]
        );
        assert_eq!(
            tokens(b"a,,b,", b',', SplitOptions::INCLUDE_ALL_DELIMITERS),
            vec![&b"a,,"[..], b"b,", b""]
        );
    }

    #[test]
    fn test_state_transitions() {
        let d = SingleDelimiter(b',');
        let t = Tokenizer::new(b"a,b", &d);
        let mut cursor = t.begin();
        assert_eq!(cursor.state(), CursorState::Active);
        assert_eq!(cursor.token(), Some(&b"a"[..]));
        assert_eq!(cursor.span(), Some(0..1));
        cursor.advance();
        assert_eq!(cursor.state(), CursorState::LastPending);
        assert_eq!(cursor.token(), Some(&b"b"[..]));
        cursor.advance();
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.token(), None);
        assert_eq!(cursor, t.end());
        cursor.advance();
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_empty_trailing_token_is_not_end() {
        let d = SingleDelimiter(b',');
        let t = Tokenizer::new(b"a,", &d);
        let mut cursor = t.begin();
        cursor.advance();
        assert_eq!(cursor.token(), Some(&b""[..]));
        assert_ne!(cursor, t.end());
        cursor.advance();
        assert_eq!(cursor, t.end());
    }

    #[test]
    fn test_clone_shares_predicate_and_position() {
        let d = DelimiterTable::from_bytes(b" ;");
        let t = Tokenizer::new(b"x y;z", &d);
        let mut a = t.begin();
        a.advance();
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.collect::<Vec<_>>(), vec![&b"y"[..], b"z"]);
        assert_eq!(a.remaining(), b"z");
    }

    #[test]
    fn test_cursors_on_different_buffers_differ() {
        let d = SingleDelimiter(b',');
        let first = b"a".to_vec();
        let second = b"a".to_vec();
        let a = Tokenizer::new(&first, &d).end();
        let b = Tokenizer::new(&second, &d).end();
        assert_ne!(a, b);
    }
}
