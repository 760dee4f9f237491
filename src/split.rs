//! Bulk split engine.
//!
//! [`split_with`] walks the input with a manually maintained
//! `[token_start, scan)` window and hands each token's span to a
//! [`TokenSink`]. It produces exactly the tokens a
//! [`TokenCursor`](crate::TokenCursor) would, without the per-token state
//! machine.
//!
//! Trailing token rule: after the scan, a final token is emitted if the
//! window is non-empty, or if the last scanned byte was a delimiter. In the
//! latter case the token is empty and compression suppresses it.
//!
//! # Example
//!
//! ```
//! use strkit::{split, SplitOptions};
//!
//! let mut tokens: Vec<&[u8]> = Vec::new();
//! assert_eq!(split(b",", b"10,20,,30", &mut tokens, SplitOptions::DEFAULT), 4);
//! assert_eq!(tokens, [&b"10"[..], b"20", b"", b"30"]);
//!
//! tokens.clear();
//! assert_eq!(split(b",", b"10,20,,30", &mut tokens, SplitOptions::COMPRESS_DELIMITERS), 3);
//! assert_eq!(tokens, [&b"10"[..], b"20", b"30"]);
//! ```

use crate::convert::FromBytes;
use crate::delimiter::{Delimiter, Delimiters};
use crate::options::SplitOptions;
use crate::tokenizer::separator;
use core::ops::Range;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Receiver of split tokens.
///
/// Each token arrives as its span within `input`, so sinks can store
/// offsets, borrow sub-slices, or materialize owned copies. Returning
/// `false` aborts the split; the token is then not counted.
pub trait TokenSink<'a> {
    /// Accepts the token `input[span]`.
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool;
}

impl<'a, S: TokenSink<'a> + ?Sized> TokenSink<'a> for &mut S {
    #[inline(always)]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        (**self).accept(input, span)
    }
}

impl<'a> TokenSink<'a> for Vec<&'a [u8]> {
    #[inline]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        self.push(&input[span]);
        true
    }
}

impl<'a> TokenSink<'a> for Vec<Range<usize>> {
    #[inline]
    fn accept(&mut self, _input: &'a [u8], span: Range<usize>) -> bool {
        self.push(span);
        true
    }
}

impl<'a> TokenSink<'a> for Vec<Vec<u8>> {
    #[inline]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        self.push(input[span].to_vec());
        true
    }
}

/// Invalid UTF-8 is replaced with U+FFFD.
impl<'a> TokenSink<'a> for Vec<String> {
    #[inline]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        self.push(String::from_utf8_lossy(&input[span]).into_owned());
        true
    }
}

impl<'a> TokenSink<'a> for BTreeSet<&'a [u8]> {
    #[inline]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        self.insert(&input[span]);
        true
    }
}

impl<'a> TokenSink<'a> for HashSet<&'a [u8]> {
    #[inline]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        self.insert(&input[span]);
        true
    }
}

/// Writes tokens directly into a caller-provided slice; stops when full.
#[derive(Debug)]
pub struct SliceSink<'s, 'a> {
    slots: &'s mut [&'a [u8]],
    filled: usize,
}

impl<'s, 'a> SliceSink<'s, 'a> {
    /// Sink over `slots`.
    pub fn new(slots: &'s mut [&'a [u8]]) -> Self {
        SliceSink { slots, filled: 0 }
    }

    /// Number of slots written.
    pub fn filled(&self) -> usize {
        self.filled
    }
}

impl<'a> TokenSink<'a> for SliceSink<'_, 'a> {
    #[inline]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        match self.slots.get_mut(self.filled) {
            Some(slot) => {
                *slot = &input[span];
                self.filled += 1;
                true
            }
            None => false,
        }
    }
}

/// Closure adapter; the closure returns `false` to stop.
#[derive(Debug)]
pub struct FnSink<F>(pub F);

impl<'a, F: FnMut(&'a [u8]) -> bool> TokenSink<'a> for FnSink<F> {
    #[inline(always)]
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        (self.0)(&input[span])
    }
}

/// Discards tokens; useful for counting.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountSink;

impl<'a> TokenSink<'a> for CountSink {
    #[inline(always)]
    fn accept(&mut self, _input: &'a [u8], _span: Range<usize>) -> bool {
        true
    }
}

/// Splits `input` on any byte of `delimiters`.
///
/// One delimiter byte uses the `memchr` predicate, more use a lookup table.
/// Returns the number of tokens accepted by `sink`.
pub fn split<'a, S: TokenSink<'a>>(
    delimiters: &[u8],
    input: &'a [u8],
    sink: S,
    options: SplitOptions,
) -> usize {
    split_n_with(&Delimiters::new(delimiters), input, usize::MAX, sink, options)
}

/// Splits `input` with an explicit predicate.
pub fn split_with<'a, D: Delimiter + ?Sized, S: TokenSink<'a>>(
    predicate: &D,
    input: &'a [u8],
    sink: S,
    options: SplitOptions,
) -> usize {
    split_n_with(predicate, input, usize::MAX, sink, options)
}

/// Like [`split`], but stops after `n` tokens.
pub fn split_n<'a, S: TokenSink<'a>>(
    delimiters: &[u8],
    input: &'a [u8],
    n: usize,
    sink: S,
    options: SplitOptions,
) -> usize {
    split_n_with(&Delimiters::new(delimiters), input, n, sink, options)
}

/// Like [`split_with`], but stops after `n` tokens.
///
/// A count below `n` means the input ran out (or the sink refused a token).
pub fn split_n_with<'a, D: Delimiter + ?Sized, S: TokenSink<'a>>(
    predicate: &D,
    input: &'a [u8],
    n: usize,
    mut sink: S,
    options: SplitOptions,
) -> usize {
    let len = input.len();
    if len == 0 || n == 0 {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    loop {
        let Some(offset) = predicate.find_in(&input[start..]) else {
            // No more delimiters: the window [start, len) is non-empty here.
            if sink.accept(input, start..len) {
                count += 1;
            }
            break;
        };

        let (token_end, resume) = separator(input, start + offset, predicate, options);
        if !sink.accept(input, start..token_end) {
            break;
        }
        count += 1;
        start = resume;

        if count == n {
            break;
        }
        if start == len {
            if !options.compress() && sink.accept(input, len..len) {
                count += 1;
            }
            break;
        }
    }

    if n != usize::MAX && count < n {
        trace!(requested = n, produced = count, "split_n ran short");
    }
    count
}

struct ConvertSink<'v, T> {
    out: &'v mut Vec<T>,
    failed: bool,
}

impl<'a, T: FromBytes> TokenSink<'a> for ConvertSink<'_, T> {
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        match T::from_bytes(&input[span]) {
            Ok(value) => {
                self.out.push(value);
                true
            }
            Err(_) => {
                self.failed = true;
                false
            }
        }
    }
}

struct CheckedConvertSink<'v, T> {
    out: &'v mut Vec<T>,
    parsed: usize,
}

impl<'a, T: FromBytes> TokenSink<'a> for CheckedConvertSink<'_, T> {
    fn accept(&mut self, input: &'a [u8], span: Range<usize>) -> bool {
        let token = &input[span];
        match T::from_bytes(token) {
            Ok(value) => {
                self.out.push(value);
                self.parsed += 1;
            }
            Err(error) => trace!(token = %token.escape_ascii(), %error, "skipping token"),
        }
        true
    }
}

/// Splits `input` (compressing delimiters) and converts every token into `out`.
///
/// Returns the number of values appended, or 0 if any token fails to
/// convert; on failure `out` is restored to its original length.
pub fn parse_all<T: FromBytes>(input: &[u8], delimiters: &[u8], out: &mut Vec<T>) -> usize {
    parse_n_all(input, delimiters, usize::MAX, out)
}

/// Like [`parse_all`], converting at most `n` tokens.
pub fn parse_n_all<T: FromBytes>(
    input: &[u8],
    delimiters: &[u8],
    n: usize,
    out: &mut Vec<T>,
) -> usize {
    let original = out.len();
    let mut sink = ConvertSink {
        out: &mut *out,
        failed: false,
    };
    let count = split_n(delimiters, input, n, &mut sink, SplitOptions::COMPRESS_DELIMITERS);
    if sink.failed {
        out.truncate(original);
        return 0;
    }
    count
}

/// Lenient variant of [`parse_all`]: tokens that fail to convert are skipped.
///
/// Returns the number of values appended.
pub fn parse_all_checked<T: FromBytes>(input: &[u8], delimiters: &[u8], out: &mut Vec<T>) -> usize {
    let mut sink = CheckedConvertSink { out, parsed: 0 };
    split(delimiters, input, &mut sink, SplitOptions::COMPRESS_DELIMITERS);
    sink.parsed
}
