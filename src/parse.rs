//! Structured multi-field parsing.
//!
//! A line such as `"3.14,42,-7"` is split into exactly as many tokens as the
//! target tuple has fields, and each token is converted into its field's
//! type. Tokens live in a fixed stack array; nothing is allocated unless a
//! field type itself owns memory (`String`, `Vec<u8>`).
//!
//! Delimiter runs are compressed by default. Input past the N-th token is
//! ignored: the N-th token ends at the next delimiter.
//!
//! ```
//! use strkit::{parse, parse_into, Ignore};
//!
//! let (d, i, j): (f64, i32, i32) = parse(b"3.14,42,-7", b",").unwrap();
//! assert_eq!((d, i, j), (3.14, 42, -7));
//!
//! let (mut name, mut age) = (String::new(), 0u8);
//! assert!(parse_into(b"ada 36 london", b" ", (&mut name, &mut age)));
//! assert_eq!((name.as_str(), age), ("ada", 36));
//!
//! let (_, port): (Ignore, u16) = parse(b"localhost:8080", b":").unwrap();
//! assert_eq!(port, 8080);
//! ```

use crate::convert::FromBytes;
use crate::errors::{ConvertError, ParseError};
use crate::options::SplitOptions;
use crate::split::{SliceSink, split_n};
use tracing::debug;

/// Most fields a single structured parse can fill.
pub const MAX_FIELDS: usize = 12;

/// Placeholder field that accepts any token and keeps nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

impl FromBytes for Ignore {
    #[inline(always)]
    fn from_bytes(_token: &[u8]) -> Result<Self, ConvertError> {
        Ok(Ignore)
    }
}

/// Tuples that can be built from a fixed number of tokens.
pub trait FieldTuple: Sized {
    /// Number of fields.
    const ARITY: usize;

    /// Converts `tokens[..ARITY]` field by field, stopping at the first failure.
    fn from_tokens(tokens: &[&[u8]]) -> Result<Self, ParseError>;
}

/// Tuples of mutable references that a parse result can be committed to.
pub trait FieldTargets {
    /// The owned tuple parsed before committing.
    type Values: FieldTuple;

    /// Stores every value through its reference.
    fn assign(self, values: Self::Values);
}

macro_rules! field_tuple {
    ($n:literal => $($t:ident $i:tt),+) => {
        impl<$($t: FromBytes),+> FieldTuple for ($($t,)+) {
            const ARITY: usize = $n;

            #[inline]
            fn from_tokens(tokens: &[&[u8]]) -> Result<Self, ParseError> {
                Ok(($(
                    $t::from_bytes(tokens[$i])
                        .map_err(|source| ParseError::Field { index: $i, source })?,
                )+))
            }
        }

        impl<'x, $($t: FromBytes),+> FieldTargets for ($(&'x mut $t,)+) {
            type Values = ($($t,)+);

            #[inline]
            fn assign(self, values: Self::Values) {
                $(*self.$i = values.$i;)+
            }
        }
    };
}

field_tuple!(1 => A 0);
field_tuple!(2 => A 0, B 1);
field_tuple!(3 => A 0, B 1, C 2);
field_tuple!(4 => A 0, B 1, C 2, D 3);
field_tuple!(5 => A 0, B 1, C 2, D 3, E 4);
field_tuple!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
field_tuple!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
field_tuple!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
field_tuple!(9 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
field_tuple!(10 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
field_tuple!(11 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
field_tuple!(12 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

/// Parses `input` into a tuple, compressing delimiter runs.
#[inline]
pub fn parse<F: FieldTuple>(input: &[u8], delimiters: &[u8]) -> Result<F, ParseError> {
    parse_with_options(input, delimiters, SplitOptions::COMPRESS_DELIMITERS)
}

/// Parses `input` into a tuple with explicit split options.
///
/// ```
/// use strkit::{parse_with_options, SplitOptions};
///
/// let strict: Result<(u8, u8, u8), _> = parse_with_options(b"1,,3", b",", SplitOptions::DEFAULT);
/// assert_eq!(strict.unwrap_err().field_index(), Some(1));
/// ```
pub fn parse_with_options<F: FieldTuple>(
    input: &[u8],
    delimiters: &[u8],
    options: SplitOptions,
) -> Result<F, ParseError> {
    let mut slots: [&[u8]; MAX_FIELDS] = [<&[u8]>::default(); MAX_FIELDS];
    let arity = F::ARITY;
    let found = split_n(
        delimiters,
        input,
        arity,
        SliceSink::new(&mut slots[..arity]),
        options,
    );
    if found != arity {
        debug!(expected = arity, found, "structured parse: token count mismatch");
        return Err(ParseError::TokenCount {
            expected: arity,
            found,
        });
    }
    F::from_tokens(&slots[..arity]).inspect_err(|error| {
        debug!(field = ?error.field_index(), %error, "structured parse: field conversion failed");
    })
}

/// Parses `input` and commits every field through `targets`.
///
/// Either all targets are written or none are.
pub fn parse_into<T: FieldTargets>(input: &[u8], delimiters: &[u8], targets: T) -> bool {
    match parse::<T::Values>(input, delimiters) {
        Ok(values) => {
            targets.assign(values);
            true
        }
        Err(_) => false,
    }
}
