//! # strkit
//!
//! Zero-copy string toolkit for byte-oriented (ASCII / Latin-1) text.
//!
//! The crate splits buffers into tokens and converts tokens to and from
//! numbers without copying the input or allocating in the hot path.
//!
//! - [`delimiter`]: delimiter predicates (single byte, small set, 256-entry table)
//! - [`tokenizer`]: forward cursor producing tokens one at a time
//! - [`split`]: bulk splitting into any [`TokenSink`]
//! - [`reading`] / [`writing`]: bounds-checked text ⇄ number conversion
//! - [`fast`]: fixed-width unrolled digit conversion
//! - [`parse`]: fixed-arity structured field parsing
//! - [`matching`]: wildcard and substring matching
//!
//! ## Performance Philosophy
//!
//! - Tokens are sub-slices of the caller's buffer; nothing is copied until
//!   the caller asks for an owned value
//! - Single-byte delimiters are found with `memchr`, sets with a lookup table
//! - Digit conversion goes four digits at a time and checks overflow only on
//!   the one digit that can overflow
//! - Failure is a value (`Result` / `Option` / `bool`), never a panic, except
//!   in the explicitly named [`convert::strict`] tier
//!
//! # Example
//!
//! ```rust
//! use strkit::*;
//!
//! // Splitting
//! let mut tokens: Vec<&[u8]> = Vec::new();
//! let count = split(b",", b"10,20,,30", &mut tokens, SplitOptions::COMPRESS_DELIMITERS);
//! assert_eq!(count, 3);
//!
//! // Structured parsing
//! let (d, i, j): (f64, i32, i32) = parse(b"3.14,42,-7", b",").unwrap();
//! assert_eq!((d, i, j), (3.14, 42, -7));
//!
//! // Conversion both ways
//! assert_eq!(string_to_type::<u32>(b"4294967295"), Some(u32::MAX));
//! assert_eq!(type_to_string(&-17i64), "-17");
//! ```

pub mod combinatorics;
pub mod convert;
pub mod delimiter;
pub mod encoding;
pub mod errors;
pub mod fast;
pub mod grid;
pub mod lines;
pub mod matching;
pub mod options;
pub mod parse;
pub mod reading;
pub mod split;
pub mod tokenizer;
pub mod writing;

// Re-export all public items for convenience
pub use combinatorics::*;
pub use convert::*;
pub use delimiter::*;
pub use encoding::*;
pub use errors::*;
pub use grid::*;
pub use lines::*;
pub use matching::*;
pub use options::*;
pub use parse::*;
pub use reading::*;
pub use split::*;
pub use tokenizer::*;
pub use writing::*;

// Common constants used across modules
pub(crate) const DIGIT_PAIRS: &[u8; 200] = &[
    48, 48, 48, 49, 48, 50, 48, 51, 48, 52, 48, 53, 48, 54, 48, 55, 48, 56, 48, 57, 49, 48, 49, 49,
    49, 50, 49, 51, 49, 52, 49, 53, 49, 54, 49, 55, 49, 56, 49, 57, 50, 48, 50, 49, 50, 50, 50, 51,
    50, 52, 50, 53, 50, 54, 50, 55, 50, 56, 50, 57, 51, 48, 51, 49, 51, 50, 51, 51, 51, 52, 51, 53,
    51, 54, 51, 55, 51, 56, 51, 57, 52, 48, 52, 49, 52, 50, 52, 51, 52, 52, 52, 53, 52, 54, 52, 55,
    52, 56, 52, 57, 53, 48, 53, 49, 53, 50, 53, 51, 53, 52, 53, 53, 53, 54, 53, 55, 53, 56, 53, 57,
    54, 48, 54, 49, 54, 50, 54, 51, 54, 52, 54, 53, 54, 54, 54, 55, 54, 56, 54, 57, 55, 48, 55, 49,
    55, 50, 55, 51, 55, 52, 55, 53, 55, 54, 55, 55, 55, 56, 55, 57, 56, 48, 56, 49, 56, 50, 56, 51,
    56, 52, 56, 53, 56, 54, 56, 55, 56, 56, 56, 57, 57, 48, 57, 49, 57, 50, 57, 51, 57, 52, 57, 53,
    57, 54, 57, 55, 57, 56, 57, 57,
];

/// "000" through "999", three ASCII bytes per entry.
pub(crate) static DIGIT_TRIPLES: [u8; 3000] = build_digit_triples();

const fn build_digit_triples() -> [u8; 3000] {
    let mut table = [0u8; 3000];
    let mut n = 0;
    while n < 1000 {
        table[n * 3] = b'0' + (n / 100) as u8;
        table[n * 3 + 1] = b'0' + ((n / 10) % 10) as u8;
        table[n * 3 + 2] = b'0' + (n % 10) as u8;
        n += 1;
    }
    table
}
