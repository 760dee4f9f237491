//! Wildcard, prefix/suffix and substring matching over bytes.
//!
//! Case-insensitive variants fold ASCII letters only.

use crate::split::TokenSink;
use memchr::memmem;

#[inline(always)]
fn exact(a: u8, b: u8) -> bool {
    a == b
}

#[inline(always)]
fn folded(a: u8, b: u8) -> bool {
    a.eq_ignore_ascii_case(&b)
}

fn wildcard_match_by(pattern: &[u8], data: &[u8], eq: impl Fn(u8, u8) -> bool) -> bool {
    let (mut p, mut d) = (0, 0);
    // Position of the last `*` seen, and the data offset it is currently
    // assumed to cover up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while d < data.len() {
        match pattern.get(p) {
            Some(b'*') => {
                backtrack = Some((p, d));
                p += 1;
            }
            Some(&c) if c == b'?' || eq(c, data[d]) => {
                p += 1;
                d += 1;
            }
            _ => match backtrack {
                Some((star, covered)) => {
                    p = star + 1;
                    d = covered + 1;
                    backtrack = Some((star, covered + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

/// Matches `data` against `pattern`, where `*` matches any run of bytes
/// (including none) and `?` matches exactly one byte.
///
/// ```
/// # use strkit::wildcard_match;
/// assert!(wildcard_match(b"*.tar.??", b"backup.tar.gz"));
/// assert!(!wildcard_match(b"a?c", b"ac"));
/// ```
pub fn wildcard_match(pattern: &[u8], data: &[u8]) -> bool {
    wildcard_match_by(pattern, data, exact)
}

/// [`wildcard_match`] with ASCII case folding.
pub fn wildcard_match_ignore_case(pattern: &[u8], data: &[u8]) -> bool {
    wildcard_match_by(pattern, data, folded)
}

#[inline]
pub fn begins_with(data: &[u8], prefix: &[u8]) -> bool {
    data.starts_with(prefix)
}

#[inline]
pub fn ends_with(data: &[u8], suffix: &[u8]) -> bool {
    data.ends_with(suffix)
}

/// ASCII case-insensitive [`begins_with`].
#[inline]
pub fn ibegins_with(data: &[u8], prefix: &[u8]) -> bool {
    data.len() >= prefix.len() && data[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// ASCII case-insensitive [`ends_with`].
#[inline]
pub fn iends_with(data: &[u8], suffix: &[u8]) -> bool {
    data.len() >= suffix.len() && data[data.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// True if `needle` occurs in `haystack`. The empty needle occurs everywhere.
#[inline]
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    memmem::find(haystack, needle).is_some()
}

/// Reports every non-overlapping occurrence of `needle` to `sink`, left to
/// right, as a span of `haystack`.
///
/// Returns the number of occurrences the sink accepted. An empty needle
/// matches nothing.
///
/// ```
/// # use strkit::find_all;
/// # use core::ops::Range;
/// let mut hits: Vec<Range<usize>> = Vec::new();
/// assert_eq!(find_all(b"aa", b"aaaaa", &mut hits), 2);
/// assert_eq!(hits, [0..2, 2..4]);
/// ```
pub fn find_all<'a, S: TokenSink<'a>>(needle: &[u8], haystack: &'a [u8], mut sink: S) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    for start in memmem::find_iter(haystack, needle) {
        if !sink.accept(haystack, start..start + needle.len()) {
            break;
        }
        count += 1;
    }
    count
}
