//! Bounds-checked conversion from decimal text to numbers.
//!
//! Every reader takes the whole token and either converts all of it or
//! fails; nothing is written anywhere on failure. Malformed input is a normal
//! outcome reported through [`ConvertError`], never a panic.
//!
//! # Integer grammar
//!
//! `[+]? [0-9]+` for unsigned types, `[+-]? [0-9]+` for signed types.
//! Leading zeros are free and do not count toward the digit bound.
//!
//! Digits are consumed four, then two, then one at a time. A type whose
//! maximum has `L` decimal digits accepts at most `L` significant digits;
//! the first `L - 1` can never overflow, so only the `L`-th digit is checked
//! against `MAX / 10` and `MAX % 10`.
//!
//! # Float grammar
//!
//! ```text
//! [+-]? ( inf | infinity | nan
//!       | digits? ('.' digits?)? ([eE] [+-]? digits)? [fFlL]?
//!       | "1.0#" (inf | nan) )
//! ```
//!
//! Matching of `inf`/`nan` is ASCII case-insensitive. At least one mantissa
//! digit is required. The net decimal exponent (explicit exponent minus
//! fraction digits) must lie within the target type's decimal exponent range.
//!
//! Results are correctly rounded. A mantissa that fits the target's
//! significand, with a net exponent inside the exact power table, is scaled
//! by one multiply or divide; anything else goes through `core`'s decimal
//! parser.

use crate::errors::ConvertError;

/// Exact powers of ten representable in an f64.
const POW10_F64: [f64; 23] = [
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
    1_000_000_000.0,
    10_000_000_000.0,
    100_000_000_000.0,
    1_000_000_000_000.0,
    10_000_000_000_000.0,
    100_000_000_000_000.0,
    1_000_000_000_000_000.0,
    10_000_000_000_000_000.0,
    100_000_000_000_000_000.0,
    1_000_000_000_000_000_000.0,
    10_000_000_000_000_000_000.0,
    100_000_000_000_000_000_000.0,
    1_000_000_000_000_000_000_000.0,
    10_000_000_000_000_000_000_000.0,
];

/// Decimal exponent range of f32 (`min_exponent10`, `max_exponent10`).
const F32_EXP10: (i32, i32) = (-37, 38);

/// Decimal exponent range of f64.
const F64_EXP10: (i32, i32) = (-307, 308);

/// Fast check if a byte is an ASCII digit
#[inline(always)]
fn is_digit(b: u8) -> bool {
    b'0' <= b && b <= b'9'
}

/// Number of decimal digits in `n`.
pub(crate) const fn decimal_len(mut n: u128) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

/// Unsigned accumulator used by the integer readers.
pub(crate) trait Magnitude: Copy + PartialOrd {
    const ZERO: Self;
    /// Decimal digits in `MAX`.
    const LENGTH: usize;

    fn push1(self, d: u8) -> Self;
    fn push2(self, v: u8) -> Self;
    fn push4(self, v: u16) -> Self;
    /// `self * 10 + d`, or `None` past `MAX`.
    fn push_last(self, d: u8) -> Option<Self>;
}

macro_rules! magnitude {
    ($($t:ty),*) => {$(
        impl Magnitude for $t {
            const ZERO: Self = 0;
            const LENGTH: usize = decimal_len(<$t>::MAX as u128);

            #[inline(always)]
            fn push1(self, d: u8) -> Self {
                self.wrapping_mul(10).wrapping_add(d as $t)
            }

            #[inline(always)]
            fn push2(self, v: u8) -> Self {
                self.wrapping_mul(100).wrapping_add(v as $t)
            }

            #[inline(always)]
            fn push4(self, v: u16) -> Self {
                self.wrapping_mul(10_000u16 as $t).wrapping_add(v as $t)
            }

            #[inline(always)]
            fn push_last(self, d: u8) -> Option<Self> {
                let limit = <$t>::MAX / 10;
                if self > limit || (self == limit && (d as $t) > <$t>::MAX % 10) {
                    None
                } else {
                    Some(self * 10 + d as $t)
                }
            }
        }
    )*};
}

magnitude!(u8, u16, u32, u64, u128, usize);

/// Digit value of `buf[i]`, or the error naming its absolute position.
#[inline(always)]
fn digit_at(buf: &[u8], i: usize, base: usize) -> Result<u8, ConvertError> {
    let d = buf[i].wrapping_sub(b'0');
    if d > 9 {
        return Err(ConvertError::InvalidDigit { position: base + i });
    }
    Ok(d)
}

/// Converts an unsigned digit run. `base` is the offset of `digits` within
/// the caller's token, used for error positions.
pub(crate) fn read_magnitude<T: Magnitude>(digits: &[u8], base: usize) -> Result<T, ConvertError> {
    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }

    let zeros = digits
        .iter()
        .take_while(|&&b| b == b'0')
        .count();
    let base = base + zeros;
    let s = &digits[zeros..];
    let len = s.len();

    if len > T::LENGTH {
        return match s.iter().position(|&b| !is_digit(b)) {
            Some(i) => Err(ConvertError::InvalidDigit { position: base + i }),
            None => Err(ConvertError::Overflow),
        };
    }

    let body = if len == T::LENGTH { len - 1 } else { len };
    let mut acc = T::ZERO;
    let mut i = 0;

    while body - i >= 4 {
        let v = digit_at(s, i, base)? as u16 * 1000
            + digit_at(s, i + 1, base)? as u16 * 100
            + digit_at(s, i + 2, base)? as u16 * 10
            + digit_at(s, i + 3, base)? as u16;
        acc = acc.push4(v);
        i += 4;
    }
    if body - i >= 2 {
        let v = digit_at(s, i, base)? * 10 + digit_at(s, i + 1, base)?;
        acc = acc.push2(v);
        i += 2;
    }
    if body - i == 1 {
        acc = acc.push1(digit_at(s, i, base)?);
        i += 1;
    }

    if i < len {
        let d = digit_at(s, i, base)?;
        acc = acc
            .push_last(d)
            .ok_or(ConvertError::Overflow)?;
    }
    Ok(acc)
}

macro_rules! unsigned_reader {
    ($($(#[$doc:meta])* $name:ident => $t:ty;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(buf: &[u8]) -> Result<$t, ConvertError> {
            match buf.first() {
                Some(b'+') => read_magnitude::<$t>(&buf[1..], 1),
                _ => read_magnitude::<$t>(buf, 0),
            }
        }
    )*};
}

macro_rules! signed_reader {
    ($($(#[$doc:meta])* $name:ident => $t:ty, $u:ty;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(buf: &[u8]) -> Result<$t, ConvertError> {
            let (negative, digits, base) = match buf.first() {
                Some(b'-') => (true, &buf[1..], 1),
                Some(b'+') => (false, &buf[1..], 1),
                _ => (false, buf, 0),
            };
            let mag = read_magnitude::<$u>(digits, base)?;
            if negative {
                if mag > <$t>::MIN.unsigned_abs() {
                    return Err(ConvertError::Overflow);
                }
                Ok((mag as $t).wrapping_neg())
            } else {
                if mag > <$t>::MAX as $u {
                    return Err(ConvertError::Overflow);
                }
                Ok(mag as $t)
            }
        }
    )*};
}

unsigned_reader! {
    /// Parse a u8 from decimal bytes.
    read_u8 => u8;
    /// Parse a u16 from decimal bytes.
    ///
    /// # Example
    /// ```
    /// # use strkit::read_u16;
    /// assert_eq!(read_u16(b"65535"), Ok(65535));
    /// assert!(read_u16(b"65536").is_err());
    /// assert!(read_u16(b"123abc").is_err());
    /// ```
    read_u16 => u16;
    /// Parse a u32 from decimal bytes.
    read_u32 => u32;
    /// Parse a u64 from decimal bytes.
    read_u64 => u64;
    /// Parse a u128 from decimal bytes.
    read_u128 => u128;
    /// Parse a usize from decimal bytes.
    read_usize => usize;
}

signed_reader! {
    /// Parse an i8 from decimal bytes.
    read_i8 => i8, u8;
    /// Parse an i16 from decimal bytes.
    read_i16 => i16, u16;
    /// Parse an i32 from decimal bytes.
    ///
    /// Handles `i32::MIN` without overflow.
    ///
    /// # Example
    /// ```
    /// # use strkit::read_i32;
    /// assert_eq!(read_i32(b"-2147483648"), Ok(i32::MIN));
    /// assert_eq!(read_i32(b"+42"), Ok(42));
    /// assert!(read_i32(b"21474836479").is_err());
    /// ```
    read_i32 => i32, u32;
    /// Parse an i64 from decimal bytes.
    read_i64 => i64, u64;
    /// Parse an i128 from decimal bytes.
    read_i128 => i128, u128;
    /// Parse an isize from decimal bytes.
    read_isize => isize, usize;
}

/// Parse a boolean: `true`/`false` (any ASCII case) or `1`/`0`.
///
/// # Example
/// ```
/// # use strkit::read_bool;
/// assert_eq!(read_bool(b"TRUE"), Ok(true));
/// assert_eq!(read_bool(b"0"), Ok(false));
/// assert!(read_bool(b"yes").is_err());
/// ```
pub fn read_bool(buf: &[u8]) -> Result<bool, ConvertError> {
    match buf {
        [] => Err(ConvertError::Empty),
        b"1" => Ok(true),
        b"0" => Ok(false),
        _ if buf.eq_ignore_ascii_case(b"true") => Ok(true),
        _ if buf.eq_ignore_ascii_case(b"false") => Ok(false),
        _ => Err(ConvertError::Malformed),
    }
}

/// `inf`, `infinity` or `nan`, ASCII case-insensitive.
fn special_literal(s: &[u8], negative: bool) -> Option<f64> {
    if s.eq_ignore_ascii_case(b"inf") || s.eq_ignore_ascii_case(b"infinity") {
        Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    } else if s.eq_ignore_ascii_case(b"nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Largest mantissa an f64 holds exactly.
const F64_EXACT_MANTISSA: u64 = 1 << 53;

/// Largest mantissa an f32 holds exactly.
const F32_EXACT_MANTISSA: u64 = 1 << 24;

/// Exact powers of ten representable in an f32.
const POW10_F32: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];

/// A float token that passed the grammar and exponent-range checks.
enum FloatToken<'a> {
    Special(f64),
    Decimal {
        negative: bool,
        /// `digits ('.' digits)? (e exp)?`, without sign or suffix.
        text: &'a [u8],
        /// All mantissa digits as an integer, `None` past `u64::MAX`.
        mantissa: Option<u64>,
        /// Net decimal exponent: explicit exponent minus fraction digits.
        exponent: i32,
    },
}

fn scan_float(
    buf: &[u8],
    (min_exp10, max_exp10): (i32, i32),
) -> Result<FloatToken<'_>, ConvertError> {
    let (negative, s, base) = match buf.first() {
        None => return Err(ConvertError::Empty),
        Some(b'-') => (true, &buf[1..], 1),
        Some(b'+') => (false, &buf[1..], 1),
        Some(_) => (false, buf, 0),
    };
    if s.is_empty() {
        return Err(ConvertError::Empty);
    }

    if matches!(s[0], b'i' | b'I' | b'n' | b'N') {
        return special_literal(s, negative)
            .map(FloatToken::Special)
            .ok_or(ConvertError::Malformed);
    }

    let len = s.len();
    let mut i = 0usize;
    let mut mantissa = Some(0u64);
    let mut exponent: i32 = 0;
    let mut digits = 0usize;
    let push = |mantissa: Option<u64>, b: u8| {
        mantissa
            .and_then(|m| m.checked_mul(10))
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
    };

    while i < len && is_digit(s[i]) {
        mantissa = push(mantissa, s[i]);
        digits += 1;
        i += 1;
    }

    if i < len && s[i] == b'.' {
        i += 1;
        while i < len && is_digit(s[i]) {
            mantissa = push(mantissa, s[i]);
            exponent = exponent.saturating_sub(1);
            digits += 1;
            i += 1;
        }
    }

    if digits == 0 {
        return Err(ConvertError::Malformed);
    }

    if i < len && matches!(s[i], b'e' | b'E') {
        i += 1;
        let start = i;
        if i < len && matches!(s[i], b'+' | b'-') {
            i += 1;
        }
        while i < len && is_digit(s[i]) {
            i += 1;
        }
        let exp = read_i32(&s[start..i]).map_err(|error| match error {
            ConvertError::Overflow => ConvertError::Overflow,
            _ => ConvertError::Malformed,
        })?;
        exponent = exponent.saturating_add(exp);
    }
    let text = &s[..i];

    if i < len {
        match s[i] {
            b'f' | b'F' | b'l' | b'L' => i += 1,
            b'#' => {
                // "1.0#INF" / "1.0#NAN" marker emitted by some C runtimes.
                if mantissa != Some(10) || exponent != -1 {
                    return Err(ConvertError::Malformed);
                }
                let tail = &s[i + 1..];
                return if tail.eq_ignore_ascii_case(b"inf") {
                    Ok(FloatToken::Special(if negative {
                        f64::NEG_INFINITY
                    } else {
                        f64::INFINITY
                    }))
                } else if tail.eq_ignore_ascii_case(b"nan") {
                    Ok(FloatToken::Special(f64::NAN))
                } else {
                    Err(ConvertError::Malformed)
                };
            }
            _ => {}
        }
    }

    if i < len {
        return Err(ConvertError::TrailingBytes { position: base + i });
    }

    if exponent < min_exp10 || exponent > max_exp10 {
        return Err(ConvertError::Overflow);
    }

    Ok(FloatToken::Decimal {
        negative,
        text,
        mantissa,
        exponent,
    })
}

/// Correctly rounded conversion of a validated decimal literal.
fn parse_literal<T: core::str::FromStr>(text: &[u8]) -> Result<T, ConvertError> {
    core::str::from_utf8(text)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(ConvertError::Malformed)
}

/// Parse an f64 from decimal text.
///
/// # Example
/// ```
/// # use strkit::read_f64;
/// assert_eq!(read_f64(b"3.14"), Ok(3.14));
/// assert_eq!(read_f64(b"-1.5e3"), Ok(-1500.0));
/// assert_eq!(read_f64(b"2.5f"), Ok(2.5));
/// assert!(read_f64(b"-Infinity").unwrap().is_infinite());
/// assert!(read_f64(b".").is_err());
/// ```
pub fn read_f64(buf: &[u8]) -> Result<f64, ConvertError> {
    let (negative, text, mantissa, exponent) = match scan_float(buf, F64_EXP10)? {
        FloatToken::Special(value) => return Ok(value),
        FloatToken::Decimal {
            negative,
            text,
            mantissa,
            exponent,
        } => (negative, text, mantissa, exponent),
    };

    let magnitude = exponent.unsigned_abs() as usize;
    let value = match mantissa {
        Some(m) if m <= F64_EXACT_MANTISSA && magnitude < POW10_F64.len() => {
            if exponent < 0 {
                m as f64 / POW10_F64[magnitude]
            } else {
                m as f64 * POW10_F64[magnitude]
            }
        }
        _ => parse_literal::<f64>(text)?,
    };
    if !value.is_finite() {
        return Err(ConvertError::Overflow);
    }
    Ok(if negative { -value } else { value })
}

/// Parse an f32 from decimal text.
///
/// # Example
/// ```
/// # use strkit::read_f32;
/// assert_eq!(read_f32(b"123.456"), Ok(123.456));
/// assert!(read_f32(b"1e39").is_err());
/// ```
pub fn read_f32(buf: &[u8]) -> Result<f32, ConvertError> {
    let (negative, text, mantissa, exponent) = match scan_float(buf, F32_EXP10)? {
        FloatToken::Special(value) => return Ok(value as f32),
        FloatToken::Decimal {
            negative,
            text,
            mantissa,
            exponent,
        } => (negative, text, mantissa, exponent),
    };

    let magnitude = exponent.unsigned_abs() as usize;
    let value = match mantissa {
        Some(m) if m <= F32_EXACT_MANTISSA && magnitude < POW10_F32.len() => {
            if exponent < 0 {
                m as f32 / POW10_F32[magnitude]
            } else {
                m as f32 * POW10_F32[magnitude]
            }
        }
        _ => parse_literal::<f32>(text)?,
    };
    if !value.is_finite() {
        return Err(ConvertError::Overflow);
    }
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal_len() {
        assert_eq!(<u8 as Magnitude>::LENGTH, 3);
        assert_eq!(<u16 as Magnitude>::LENGTH, 5);
        assert_eq!(<u32 as Magnitude>::LENGTH, 10);
        assert_eq!(<u64 as Magnitude>::LENGTH, 20);
        assert_eq!(<u128 as Magnitude>::LENGTH, 39);
    }

    #[test]
    fn test_read_bool() {
        assert_eq!(read_bool(b"true"), Ok(true));
        assert_eq!(read_bool(b"False"), Ok(false));
        assert_eq!(read_bool(b"1"), Ok(true));
        assert_eq!(read_bool(b""), Err(ConvertError::Empty));
        assert_eq!(read_bool(b"Y"), Err(ConvertError::Malformed));
    }

    #[test]
    fn test_read_u16() {
        assert_eq!(read_u16(b"0"), Ok(0));
        assert_eq!(read_u16(b"123"), Ok(123));
        assert_eq!(read_u16(b"65535"), Ok(65535));
        assert_eq!(read_u16(b"65536"), Err(ConvertError::Overflow));
        assert_eq!(read_u16(b"99999"), Err(ConvertError::Overflow));
        assert_eq!(read_u16(b"123abc"), Err(ConvertError::InvalidDigit { position: 3 }));
        assert_eq!(read_u16(b""), Err(ConvertError::Empty));
        assert_eq!(read_u16(b"abc"), Err(ConvertError::InvalidDigit { position: 0 }));
    }

    #[test]
    fn test_read_u32() {
        assert_eq!(read_u32(b"0"), Ok(0));
        assert_eq!(read_u32(b"123456789"), Ok(123456789));
        assert_eq!(read_u32(b"4294967295"), Ok(4294967295));
        assert_eq!(read_u32(b"4294967296"), Err(ConvertError::Overflow));
        assert_eq!(read_u32(b"+17"), Ok(17));
        assert_eq!(read_u32(b"+"), Err(ConvertError::Empty));
        assert_eq!(read_u32(b"-1"), Err(ConvertError::InvalidDigit { position: 0 }));
    }

    #[test]
    fn test_leading_zeros_do_not_count() {
        assert_eq!(read_u8(b"000000255"), Ok(255));
        assert_eq!(read_u32(b"0000000000004294967295"), Ok(u32::MAX));
        assert_eq!(read_u64(b"0000"), Ok(0));
    }

    #[test]
    fn test_overlong_reports_bad_digit_first() {
        assert_eq!(
            read_u8(b"12x45"),
            Err(ConvertError::InvalidDigit { position: 2 })
        );
        assert_eq!(read_u8(b"12345"), Err(ConvertError::Overflow));
    }

    #[test]
    fn test_read_u64() {
        assert_eq!(read_u64(b"123456789012345"), Ok(123456789012345));
        assert_eq!(read_u64(b"18446744073709551615"), Ok(u64::MAX));
        assert_eq!(read_u64(b"18446744073709551616"), Err(ConvertError::Overflow));
        assert_eq!(read_u64(b"123abc"), Err(ConvertError::InvalidDigit { position: 3 }));
    }

    #[test]
    fn test_read_u128() {
        assert_eq!(
            read_u128(b"340282366920938463463374607431768211455"),
            Ok(u128::MAX)
        );
        assert_eq!(
            read_u128(b"340282366920938463463374607431768211456"),
            Err(ConvertError::Overflow)
        );
    }

    #[test]
    fn test_read_i16() {
        assert_eq!(read_i16(b"0"), Ok(0));
        assert_eq!(read_i16(b"-123"), Ok(-123));
        assert_eq!(read_i16(b"32767"), Ok(32767));
        assert_eq!(read_i16(b"-32768"), Ok(-32768));
        assert_eq!(read_i16(b"32768"), Err(ConvertError::Overflow));
        assert_eq!(read_i16(b"-32769"), Err(ConvertError::Overflow));
        assert_eq!(read_i16(b"-"), Err(ConvertError::Empty));
        assert_eq!(read_i16(b"--1"), Err(ConvertError::InvalidDigit { position: 1 }));
    }

    #[test]
    fn test_read_i32_boundary() {
        assert_eq!(read_i32(b"2147483647"), Ok(i32::MAX));
        assert_eq!(read_i32(b"21474836479"), Err(ConvertError::Overflow));
        assert_eq!(read_i32(b"-2147483648"), Ok(i32::MIN));
        assert_eq!(read_i32(b"-2147483649"), Err(ConvertError::Overflow));
        assert_eq!(read_i32(b"-0"), Ok(0));
    }

    #[test]
    fn test_read_i64() {
        assert_eq!(read_i64(b"9223372036854775807"), Ok(i64::MAX));
        assert_eq!(read_i64(b"-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(read_i64(b"9223372036854775808"), Err(ConvertError::Overflow));
    }

    #[test]
    fn test_read_f64() {
        assert_eq!(read_f64(b"0"), Ok(0.0));
        assert_eq!(read_f64(b"123.456789012345"), Ok(123.456789012345));
        assert_eq!(read_f64(b"-123.456"), Ok(-123.456));
        assert_eq!(read_f64(b"123"), Ok(123.0));
        assert_eq!(read_f64(b".456"), Ok(0.456));
        assert_eq!(read_f64(b"123."), Ok(123.0));
        assert_eq!(read_f64(b"+1e2"), Ok(100.0));
        assert_eq!(read_f64(b"1E-2"), Ok(0.01));
        assert_eq!(read_f64(b"2.5L"), Ok(2.5));
        assert!(read_f64(b"-0").unwrap().is_sign_negative());
    }

    #[test]
    fn test_read_f64_failures() {
        assert_eq!(read_f64(b""), Err(ConvertError::Empty));
        assert_eq!(read_f64(b"-"), Err(ConvertError::Empty));
        assert_eq!(read_f64(b"."), Err(ConvertError::Malformed));
        assert_eq!(read_f64(b"-.e5"), Err(ConvertError::Malformed));
        assert_eq!(read_f64(b"1e"), Err(ConvertError::Malformed));
        assert_eq!(read_f64(b"1.5x"), Err(ConvertError::TrailingBytes { position: 3 }));
        assert_eq!(read_f64(b"1.5ff"), Err(ConvertError::TrailingBytes { position: 4 }));
        assert_eq!(read_f64(b"1e309"), Err(ConvertError::Overflow));
        assert_eq!(read_f64(b"1e-400"), Err(ConvertError::Overflow));
        assert_eq!(read_f64(b"infx"), Err(ConvertError::Malformed));
    }

    #[test]
    fn test_read_f64_special_literals() {
        assert_eq!(read_f64(b"inf"), Ok(f64::INFINITY));
        assert_eq!(read_f64(b"-INFINITY"), Ok(f64::NEG_INFINITY));
        assert!(read_f64(b"NaN").unwrap().is_nan());
        assert_eq!(read_f64(b"1.0#INF"), Ok(f64::INFINITY));
        assert_eq!(read_f64(b"-1.0#inf"), Ok(f64::NEG_INFINITY));
        assert!(read_f64(b"1.0#NAN").unwrap().is_nan());
        assert_eq!(read_f64(b"2.0#INF"), Err(ConvertError::Malformed));
        assert_eq!(read_f64(b"1.0#XYZ"), Err(ConvertError::Malformed));
    }

    #[test]
    fn test_read_f64_correctly_rounded() {
        assert_eq!(read_f64(b"1.7976931348623157e308"), Ok(f64::MAX));
        assert_eq!(read_f64(b"-1.7976931348623157e308"), Ok(f64::MIN));
        assert_eq!(read_f64(b"1.23456789e205"), Ok(1.23456789e205));
        assert_eq!(read_f64(b"188.94988582774553"), Ok(188.94988582774553));
        assert_eq!(read_f64(b"0.1"), Ok(0.1));
        let long = "123456789012345678901234567890.5";
        assert_eq!(read_f64(long.as_bytes()).ok(), long.parse::<f64>().ok());
        assert_eq!(read_f64(b"2.5e-300"), Ok(2.5e-300));
        assert_eq!(read_f64(b"2.2250738585072014e-308"), Err(ConvertError::Overflow));
        assert_eq!(read_f64(b"1.8e308"), Err(ConvertError::Overflow));
    }

    #[test]
    fn test_read_f32_correctly_rounded() {
        assert_eq!(read_f32(b"3.4028235e38"), Ok(f32::MAX));
        assert_eq!(read_f32(b"16777217"), Ok(16777216.0));
        assert_eq!(read_f32(b"0.3"), Ok(0.3));
        assert_eq!(read_f32(b"1.1754944e-30"), Ok(1.1754944e-30));
    }

    #[test]
    fn test_read_f32() {
        assert_eq!(read_f32(b"0"), Ok(0.0));
        assert_eq!(read_f32(b"123.456"), Ok(123.456));
        assert_eq!(read_f32(b"-123.456"), Ok(-123.456));
        assert_eq!(read_f32(b"1e10"), Ok(1e10));
        assert!(read_f32(b"3.4e38").is_ok());
        assert_eq!(read_f32(b"1e39"), Err(ConvertError::Overflow));
        assert_eq!(read_f32(b"9e38"), Err(ConvertError::Overflow));
        assert!(read_f32(b"-0").unwrap().is_sign_negative());
    }
}
