//! Fixed-width integer conversion.
//!
//! When the digit count of a field is known up front (fixed-layout records,
//! zero-padded timestamps, packed identifiers) the length can be a const
//! generic. Each width in `0..=19` then compiles to a straight-line
//! multiply-accumulate with no loop and no per-digit branch.
//!
//! Validation is opt-in through [`DigitCheck`]. With
//! [`DigitCheck::Unchecked`] a non-digit byte produces an unspecified value
//! (never a panic or undefined behavior); with [`DigitCheck::Checked`] it
//! produces `None`, as does a value that does not fit the target type.
//!
//! For valid input every function here agrees with the general
//! [`reading`](crate::reading) path.
//!
//! ```
//! use strkit::fast::{numeric_convert, DigitCheck};
//!
//! let year: Option<u16> = numeric_convert::<4, u16>(b"2024", DigitCheck::Checked);
//! assert_eq!(year, Some(2024));
//! assert_eq!(numeric_convert::<4, u16>(b"20x4", DigitCheck::Checked), None);
//! ```

/// Largest supported width: every 19-digit decimal fits a `u64`.
pub const MAX_FAST_DIGITS: usize = 19;

/// Whether the fast path validates its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigitCheck {
    /// Trust the caller; non-digit input yields an unspecified value.
    #[default]
    Unchecked,
    /// Reject non-digit bytes and out-of-range values.
    Checked,
}

/// Integer targets of the fast path.
pub trait FastInteger: Copy {
    /// Truncating conversion from the accumulated magnitude.
    fn from_magnitude(magnitude: u64, negative: bool) -> Self;
    /// Range-checked conversion from the accumulated magnitude.
    fn checked_from_magnitude(magnitude: u64, negative: bool) -> Option<Self>;
}

macro_rules! fast_unsigned {
    ($($t:ty),*) => {$(
        impl FastInteger for $t {
            #[inline(always)]
            fn from_magnitude(magnitude: u64, negative: bool) -> Self {
                let value = magnitude as $t;
                if negative { value.wrapping_neg() } else { value }
            }

            #[inline]
            fn checked_from_magnitude(magnitude: u64, negative: bool) -> Option<Self> {
                match (negative, magnitude) {
                    (true, 0) => Some(0),
                    (true, _) => None,
                    (false, m) => <$t>::try_from(m).ok(),
                }
            }
        }
    )*};
}

macro_rules! fast_signed {
    ($($t:ty),*) => {$(
        impl FastInteger for $t {
            #[inline(always)]
            fn from_magnitude(magnitude: u64, negative: bool) -> Self {
                let value = magnitude as $t;
                if negative { value.wrapping_neg() } else { value }
            }

            #[inline]
            fn checked_from_magnitude(magnitude: u64, negative: bool) -> Option<Self> {
                if negative {
                    if u128::from(magnitude) > <$t>::MIN.unsigned_abs() as u128 {
                        return None;
                    }
                    Some((magnitude as $t).wrapping_neg())
                } else {
                    <$t>::try_from(magnitude).ok()
                }
            }
        }
    )*};
}

fast_unsigned!(u8, u16, u32, u64, u128, usize);
fast_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! horner {
    ($d:ident;) => {
        0u64
    };
    ($d:ident; $($i:literal),+) => {
        0u64 $(.wrapping_mul(10).wrapping_add($d[$i].wrapping_sub(b'0') as u64))+
    };
}

/// Accumulates exactly `N` digits; the caller guarantees `digits.len() == N`.
#[inline(always)]
fn accumulate<const N: usize>(digits: &[u8]) -> u64 {
    let d = digits;
    match N {
        0 => horner!(d;),
        1 => horner!(d; 0),
        2 => horner!(d; 0, 1),
        3 => horner!(d; 0, 1, 2),
        4 => horner!(d; 0, 1, 2, 3),
        5 => horner!(d; 0, 1, 2, 3, 4),
        6 => horner!(d; 0, 1, 2, 3, 4, 5),
        7 => horner!(d; 0, 1, 2, 3, 4, 5, 6),
        8 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7),
        9 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8),
        10 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9),
        11 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10),
        12 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11),
        13 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12),
        14 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13),
        15 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14),
        16 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15),
        17 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16),
        18 => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17),
        _ => horner!(d; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18),
    }
}

/// True if the first `N` bytes of `digits` exist and are all ASCII digits.
#[inline]
pub fn all_digits<const N: usize>(digits: &[u8]) -> bool {
    digits.len() >= N && digits[..N].iter().all(u8::is_ascii_digit)
}

/// Converts exactly `N` unsigned digits.
///
/// Returns `None` if `digits.len() != N`, or under [`DigitCheck::Checked`]
/// if a byte is not a digit or the value does not fit `T`.
#[inline]
pub fn numeric_convert<const N: usize, T: FastInteger>(
    digits: &[u8],
    check: DigitCheck,
) -> Option<T> {
    const { assert!(N <= MAX_FAST_DIGITS, "fast conversion supports at most 19 digits") };
    if digits.len() != N {
        return None;
    }
    finish::<N, T>(digits, false, check)
}

/// Converts an optional sign followed by exactly `N` digits.
///
/// ```
/// use strkit::fast::{signed_numeric_convert, DigitCheck};
///
/// assert_eq!(signed_numeric_convert::<3, i16>(b"-042", DigitCheck::Checked), Some(-42));
/// assert_eq!(signed_numeric_convert::<3, i16>(b"+042", DigitCheck::Checked), Some(42));
/// ```
#[inline]
pub fn signed_numeric_convert<const N: usize, T: FastInteger>(
    token: &[u8],
    check: DigitCheck,
) -> Option<T> {
    const { assert!(N <= MAX_FAST_DIGITS, "fast conversion supports at most 19 digits") };
    let (negative, digits) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, token),
    };
    if digits.len() != N {
        return None;
    }
    finish::<N, T>(digits, negative, check)
}

/// Converts a fixed array of digits without validation.
///
/// The length is part of the type, so there is nothing to fail on; non-digit
/// bytes yield an unspecified value.
#[inline]
pub fn convert_digits<const N: usize, T: FastInteger>(digits: &[u8; N]) -> T {
    const { assert!(N <= MAX_FAST_DIGITS, "fast conversion supports at most 19 digits") };
    T::from_magnitude(accumulate::<N>(digits), false)
}

#[inline(always)]
fn finish<const N: usize, T: FastInteger>(
    digits: &[u8],
    negative: bool,
    check: DigitCheck,
) -> Option<T> {
    match check {
        DigitCheck::Unchecked => Some(T::from_magnitude(accumulate::<N>(digits), negative)),
        DigitCheck::Checked => {
            if !all_digits::<N>(digits) {
                return None;
            }
            T::checked_from_magnitude(accumulate::<N>(digits), negative)
        }
    }
}
