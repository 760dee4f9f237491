//! Delimiter predicates: "is this byte a delimiter?"
//!
//! Three variants by cardinality of the delimiter set:
//!
//! - [`SingleDelimiter`]: one byte, equality test, `memchr` scanning.
//! - [`MultiDelimiter`]: a handful of bytes held inline (heap beyond 32),
//!   linear membership test.
//! - [`DelimiterTable`]: a 256-entry lookup table, O(1) membership test.
//!
//! [`Delimiters`] picks between the single-byte and table variants from a
//! byte set; the choice never changes token boundaries.

use memchr::{memchr, memchr2, memchr3};
use smallvec::SmallVec;

/// Inline capacity of [`MultiDelimiter`] before it spills to the heap.
pub const MULTI_DELIMITER_INLINE: usize = 32;

/// A pure byte classifier used by the tokenizer and the split engine.
pub trait Delimiter {
    /// Returns true iff `b` is a delimiter.
    fn is_delimiter(&self, b: u8) -> bool;

    /// Offset of the first delimiter in `haystack`.
    ///
    /// Implementations may override this with a vectorized search; the
    /// result must equal the first `i` for which `is_delimiter` holds.
    #[inline]
    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        haystack
            .iter()
            .position(|&b| self.is_delimiter(b))
    }
}

impl<D: Delimiter + ?Sized> Delimiter for &D {
    #[inline(always)]
    fn is_delimiter(&self, b: u8) -> bool {
        (**self).is_delimiter(b)
    }

    #[inline(always)]
    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        (**self).find_in(haystack)
    }
}

/// Single-byte delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleDelimiter(pub u8);

impl Delimiter for SingleDelimiter {
    #[inline(always)]
    fn is_delimiter(&self, b: u8) -> bool {
        b == self.0
    }

    #[inline(always)]
    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        memchr(self.0, haystack)
    }
}

/// Small delimiter set stored inline.
///
/// Up to [`MULTI_DELIMITER_INLINE`] bytes live in the struct itself; larger
/// sets spill to the heap. Not `Clone`: build one per use site, or use a
/// [`DelimiterTable`] when value semantics are needed.
#[derive(Debug)]
pub struct MultiDelimiter {
    bytes: SmallVec<[u8; MULTI_DELIMITER_INLINE]>,
}

impl MultiDelimiter {
    /// Builds the set from any byte source; duplicates are kept out.
    pub fn new<I: IntoIterator<Item = u8>>(bytes: I) -> Self {
        let mut set: SmallVec<[u8; MULTI_DELIMITER_INLINE]> = SmallVec::new();
        for b in bytes {
            if !set.contains(&b) {
                set.push(b);
            }
        }
        MultiDelimiter { bytes: set }
    }

    /// The distinct delimiter bytes in insertion order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True if the set outgrew its inline buffer.
    pub fn spilled(&self) -> bool {
        self.bytes.spilled()
    }
}

impl From<&[u8]> for MultiDelimiter {
    fn from(bytes: &[u8]) -> Self {
        MultiDelimiter::new(bytes.iter().copied())
    }
}

impl Delimiter for MultiDelimiter {
    #[inline]
    fn is_delimiter(&self, b: u8) -> bool {
        self.bytes.contains(&b)
    }

    #[inline]
    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        match self.bytes.as_slice() {
            [] => None,
            [a] => memchr(*a, haystack),
            [a, b] => memchr2(*a, *b, haystack),
            [a, b, c] => memchr3(*a, *b, *c, haystack),
            _ => haystack
                .iter()
                .position(|&b| self.is_delimiter(b)),
        }
    }
}

/// 256-entry membership table.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DelimiterTable {
    table: [bool; 256],
}

impl DelimiterTable {
    /// Space, tab, carriage return, line feed, vertical tab, form feed.
    pub const WHITESPACE: DelimiterTable = DelimiterTable::from_bytes(b" \t\r\n\x0B\x0C");

    /// A table matching nothing.
    pub const fn new() -> Self {
        DelimiterTable {
            table: [false; 256],
        }
    }

    /// Builds the table from an arbitrary byte set.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            i += 1;
        }
        DelimiterTable { table }
    }

    /// Adds `b` to the set.
    pub fn insert(&mut self, b: u8) {
        self.table[b as usize] = true;
    }

    /// Removes `b` from the set.
    pub fn remove(&mut self, b: u8) {
        self.table[b as usize] = false;
    }

    /// Whether `b` is in the set.
    #[inline(always)]
    pub const fn contains(&self, b: u8) -> bool {
        self.table[b as usize]
    }

    /// Number of bytes in the set.
    pub fn len(&self) -> usize {
        self.table
            .iter()
            .filter(|&&hit| hit)
            .count()
    }

    /// True if no byte is a delimiter.
    pub fn is_empty(&self) -> bool {
        !self.table.contains(&true)
    }
}

impl Default for DelimiterTable {
    fn default() -> Self {
        DelimiterTable::new()
    }
}

impl core::fmt::Debug for DelimiterTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let members: Vec<u8> = (0..=255u8)
            .filter(|&b| self.contains(b))
            .collect();
        f.debug_struct("DelimiterTable")
            .field("members", &members.escape_ascii().to_string())
            .finish()
    }
}

impl Delimiter for DelimiterTable {
    #[inline(always)]
    fn is_delimiter(&self, b: u8) -> bool {
        self.contains(b)
    }
}

/// Closure adapter: any `Fn(u8) -> bool` as a delimiter predicate.
#[derive(Debug, Clone, Copy)]
pub struct FnDelimiter<F>(pub F);

impl<F: Fn(u8) -> bool> Delimiter for FnDelimiter<F> {
    #[inline(always)]
    fn is_delimiter(&self, b: u8) -> bool {
        (self.0)(b)
    }
}

/// Delimiter set with automatic representation choice.
///
/// Exactly one byte selects [`SingleDelimiter`]; anything else (including
/// an empty set, which matches nothing) selects [`DelimiterTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiters {
    /// One delimiter byte.
    Single(SingleDelimiter),
    /// Arbitrary delimiter set.
    Table(DelimiterTable),
}

impl Delimiters {
    /// Picks the cheapest predicate for `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        match bytes {
            [b] => Delimiters::Single(SingleDelimiter(*b)),
            _ => Delimiters::Table(DelimiterTable::from_bytes(bytes)),
        }
    }
}

impl From<u8> for Delimiters {
    fn from(b: u8) -> Self {
        Delimiters::Single(SingleDelimiter(b))
    }
}

impl From<&[u8]> for Delimiters {
    fn from(bytes: &[u8]) -> Self {
        Delimiters::new(bytes)
    }
}

impl Delimiter for Delimiters {
    #[inline(always)]
    fn is_delimiter(&self, b: u8) -> bool {
        match self {
            Delimiters::Single(single) => single.is_delimiter(b),
            Delimiters::Table(table) => table.is_delimiter(b),
        }
    }

    #[inline(always)]
    fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        match self {
            Delimiters::Single(single) => single.find_in(haystack),
            Delimiters::Table(table) => table.find_in(haystack),
        }
    }
}
