//! Generic conversion between tokens and typed values.
//!
//! [`FromBytes`] and [`ToText`] are the two seams every higher layer goes
//! through: the split engine's converting sinks, the structured parser, the
//! token grid. Both are implemented for the integer widths, floats, `bool`,
//! `char` and the owned string types.
//!
//! Three failure tiers are offered on top of the `Result`-returning trait:
//!
//! - [`string_to_type`] returns `Option`
//! - [`string_to_type_into`] returns `bool` and leaves the destination
//!   untouched on failure
//! - [`strict::string_to_type`] panics, for callers that have already
//!   validated their input

use crate::errors::ConvertError;
use crate::reading::{
    read_bool, read_f32, read_f64, read_i8, read_i16, read_i32, read_i64, read_i128, read_isize,
    read_u8, read_u16, read_u32, read_u64, read_u128, read_usize,
};
use crate::writing::WriteDecimal;

/// Types that can be read from a whole token.
///
/// The entire token must be consumed; there is no whitespace trimming.
pub trait FromBytes: Sized {
    /// Converts `token`.
    fn from_bytes(token: &[u8]) -> Result<Self, ConvertError>;
}

macro_rules! from_bytes_via {
    ($($t:ty => $read:ident),* $(,)?) => {$(
        impl FromBytes for $t {
            #[inline(always)]
            fn from_bytes(token: &[u8]) -> Result<Self, ConvertError> {
                $read(token)
            }
        }
    )*};
}

from_bytes_via! {
    u8 => read_u8, u16 => read_u16, u32 => read_u32, u64 => read_u64,
    u128 => read_u128, usize => read_usize,
    i8 => read_i8, i16 => read_i16, i32 => read_i32, i64 => read_i64,
    i128 => read_i128, isize => read_isize,
    f32 => read_f32, f64 => read_f64, bool => read_bool,
}

/// Exactly one byte, taken as Latin-1.
impl FromBytes for char {
    fn from_bytes(token: &[u8]) -> Result<Self, ConvertError> {
        match token {
            [] => Err(ConvertError::Empty),
            [b] => Ok(char::from(*b)),
            [_, ..] => Err(ConvertError::TrailingBytes { position: 1 }),
        }
    }
}

impl FromBytes for String {
    fn from_bytes(token: &[u8]) -> Result<Self, ConvertError> {
        core::str::from_utf8(token)
            .map(str::to_owned)
            .map_err(|_| ConvertError::Malformed)
    }
}

impl FromBytes for Vec<u8> {
    #[inline]
    fn from_bytes(token: &[u8]) -> Result<Self, ConvertError> {
        Ok(token.to_vec())
    }
}

/// An empty token reads as `None`; anything else must convert.
impl<T: FromBytes> FromBytes for Option<T> {
    fn from_bytes(token: &[u8]) -> Result<Self, ConvertError> {
        if token.is_empty() {
            return Ok(None);
        }
        T::from_bytes(token).map(Some)
    }
}

/// Types with a text form that can be appended to a `String`.
pub trait ToText {
    /// Appends the text form of `self` to `out`.
    fn append_to(&self, out: &mut String);
}

macro_rules! to_text_decimal {
    ($($t:ty),*) => {$(
        impl ToText for $t {
            #[inline]
            fn append_to(&self, out: &mut String) {
                self.decimal().push_to(out);
            }
        }
    )*};
}

to_text_decimal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl ToText for bool {
    #[inline]
    fn append_to(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl ToText for char {
    #[inline]
    fn append_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl ToText for str {
    #[inline]
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl ToText for String {
    #[inline]
    fn append_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// Bytes are taken as Latin-1.
impl ToText for [u8] {
    fn append_to(&self, out: &mut String) {
        out.reserve(self.len());
        out.extend(self.iter().map(|&b| char::from(b)));
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    #[inline(always)]
    fn append_to(&self, out: &mut String) {
        (**self).append_to(out);
    }
}

/// Converts `token`, keeping the failure reason.
#[inline]
pub fn try_string_to_type<T: FromBytes>(token: &[u8]) -> Result<T, ConvertError> {
    T::from_bytes(token)
}

/// Converts `token`, or `None` if it is not a valid `T`.
///
/// ```
/// # use strkit::string_to_type;
/// assert_eq!(string_to_type::<i8>(b"-128"), Some(-128));
/// assert_eq!(string_to_type::<i8>(b"128"), None);
/// ```
#[inline]
pub fn string_to_type<T: FromBytes>(token: &[u8]) -> Option<T> {
    T::from_bytes(token).ok()
}

/// Converts `token` into `*dst`. On failure `*dst` is left as it was.
#[inline]
pub fn string_to_type_into<T: FromBytes>(token: &[u8], dst: &mut T) -> bool {
    match T::from_bytes(token) {
        Ok(value) => {
            *dst = value;
            true
        }
        Err(_) => false,
    }
}

/// Text form of `value`.
pub fn type_to_string<T: ToText + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.append_to(&mut out);
    out
}

/// Replaces the contents of `out` with the text form of `value`.
///
/// Always succeeds for the provided [`ToText`] impls; the `bool` mirrors
/// [`string_to_type_into`].
pub fn type_to_string_into<T: ToText + ?Sized>(value: &T, out: &mut String) -> bool {
    out.clear();
    value.append_to(out);
    true
}

/// Appends the text form of `value` to `out`.
#[inline]
pub fn append_to_string<T: ToText + ?Sized>(value: &T, out: &mut String) {
    value.append_to(out);
}

/// Panicking conversions for input that is already known to be valid.
pub mod strict {
    use super::FromBytes;
    use crate::parse::FieldTuple;

    /// Converts `token`.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not a valid `T`.
    #[track_caller]
    pub fn string_to_type<T: FromBytes>(token: &[u8]) -> T {
        T::from_bytes(token).unwrap_or_else(|error| {
            panic!("cannot convert \"{}\": {error}", token.escape_ascii())
        })
    }

    /// Parses `input` into a tuple of fields.
    ///
    /// # Panics
    ///
    /// Panics on a token count mismatch or a field conversion failure.
    #[track_caller]
    pub fn parse<F: FieldTuple>(input: &[u8], delimiters: &[u8]) -> F {
        crate::parse::parse(input, delimiters).unwrap_or_else(|error| {
            panic!("cannot parse \"{}\": {error}", input.escape_ascii())
        })
    }
}
