//! Number to text conversion.
//!
//! Integers are rendered back-to-front into a fixed stack buffer, three
//! digits per division through [`DIGIT_TRIPLES`](crate::DIGIT_TRIPLES) and a
//! final one or two digits through [`DIGIT_PAIRS`](crate::DIGIT_PAIRS). The
//! used suffix is then copied to the destination. Signed values render the
//! magnitude first and prefix `-`, so `MIN` needs no special case.
//!
//! Floats use the shortest text that reads back to the same value, with
//! `inf`, `-inf` and `nan` for the non-finite cases. The readers in
//! [`reading`](crate::reading) reject a literal whose net decimal exponent
//! (exponent minus fraction digits) is below -307 for `f64` or -37 for
//! `f32`. Values below `1e-307` (`f32`: `1e-37`) are therefore written but
//! not read back, and so are full-precision values within about 16 (`f32`:
//! 8) orders of magnitude of that bound.
//!
//! # Capacity Requirements
//!
//! The `write_*` functions copy into `buf[pos..]` and panic if it is too
//! short. Worst cases:
//!
//! - `u8`: 3 bytes, `u16`: 5, `u32`: 10, `u64`: 20, `u128`: 39
//! - Signed integers: +1 byte for the minus sign
//! - `f32` / `f64`: at most 24 bytes

use crate::{DIGIT_PAIRS, DIGIT_TRIPLES};
use core::fmt;

/// Size of the scratch buffer behind [`DecimalBuf`].
pub const DECIMAL_CAPACITY: usize = 48;

/// Rendered decimal text held on the stack.
#[derive(Clone, Copy)]
pub struct DecimalBuf {
    bytes: [u8; DECIMAL_CAPACITY],
    start: usize,
    end: usize,
}

impl DecimalBuf {
    /// The rendered ASCII bytes.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..self.end]
    }

    /// Length of the rendered text.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Never true: every value renders at least one byte.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Appends the text to `out`.
    #[inline]
    pub fn push_to(&self, out: &mut String) {
        out.extend(
            self.as_bytes()
                .iter()
                .map(|&b| b as char),
        );
    }

    /// Copies the text into `buf` at `pos`, returning the bytes written.
    #[inline]
    pub fn copy_to(&self, buf: &mut [u8], pos: usize) -> usize {
        let bytes = self.as_bytes();
        buf[pos..pos + bytes.len()].copy_from_slice(bytes);
        bytes.len()
    }
}

impl fmt::Display for DecimalBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bytes()
            .iter()
            .try_for_each(|&b| fmt::Write::write_char(f, b as char))
    }
}

impl fmt::Debug for DecimalBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalBuf({})", self)
    }
}

/// Renders `n` right-aligned in `out`; returns the index of the first digit.
#[inline]
fn fill_u64(mut n: u64, out: &mut [u8; DECIMAL_CAPACITY]) -> usize {
    let mut i = DECIMAL_CAPACITY;
    if n == 0 {
        i -= 1;
        out[i] = b'0';
        return i;
    }
    while n >= 1000 {
        let rem = (n % 1000) as usize;
        n /= 1000;
        i -= 3;
        out[i..i + 3].copy_from_slice(&DIGIT_TRIPLES[rem * 3..rem * 3 + 3]);
    }
    fill_head(n as usize, out, i)
}

/// Renders the leading 1 to 3 digits (`n < 1000`) ending at `i`.
#[inline(always)]
fn fill_head(n: usize, out: &mut [u8; DECIMAL_CAPACITY], mut i: usize) -> usize {
    if n >= 100 {
        i -= 3;
        out[i..i + 3].copy_from_slice(&DIGIT_TRIPLES[n * 3..n * 3 + 3]);
    } else if n >= 10 {
        i -= 2;
        out[i..i + 2].copy_from_slice(&DIGIT_PAIRS[n * 2..n * 2 + 2]);
    } else {
        i -= 1;
        out[i] = b'0' + n as u8;
    }
    i
}

#[inline]
fn fill_u128(mut n: u128, out: &mut [u8; DECIMAL_CAPACITY]) -> usize {
    if n <= u64::MAX as u128 {
        return fill_u64(n as u64, out);
    }
    let mut i = DECIMAL_CAPACITY;
    while n >= 1000 {
        let rem = (n % 1000) as usize;
        n /= 1000;
        i -= 3;
        out[i..i + 3].copy_from_slice(&DIGIT_TRIPLES[rem * 3..rem * 3 + 3]);
    }
    fill_head(n as usize, out, i)
}

/// Byte writer over the scratch buffer, used for floats.
struct ScratchWriter<'b> {
    buf: &'b mut [u8; DECIMAL_CAPACITY],
    len: usize,
}

impl fmt::Write for ScratchWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self
            .buf
            .get_mut(self.len..end)
            .ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Types with a decimal text form.
pub trait WriteDecimal: Copy {
    /// Renders `self` into a stack buffer.
    fn decimal(self) -> DecimalBuf;
}

macro_rules! unsigned_decimal {
    ($fill:ident => $($t:ty),*) => {$(
        impl WriteDecimal for $t {
            #[inline]
            fn decimal(self) -> DecimalBuf {
                let mut bytes = [0u8; DECIMAL_CAPACITY];
                let start = $fill(self as _, &mut bytes);
                DecimalBuf { bytes, start, end: DECIMAL_CAPACITY }
            }
        }
    )*};
}

macro_rules! signed_decimal {
    ($fill:ident => $($t:ty),*) => {$(
        impl WriteDecimal for $t {
            #[inline]
            fn decimal(self) -> DecimalBuf {
                let mut bytes = [0u8; DECIMAL_CAPACITY];
                let mut start = $fill(self.unsigned_abs() as _, &mut bytes);
                if self < 0 {
                    start -= 1;
                    bytes[start] = b'-';
                }
                DecimalBuf { bytes, start, end: DECIMAL_CAPACITY }
            }
        }
    )*};
}

unsigned_decimal!(fill_u64 => u8, u16, u32, u64, usize);
unsigned_decimal!(fill_u128 => u128);
signed_decimal!(fill_u64 => i8, i16, i32, i64, isize);
signed_decimal!(fill_u128 => i128);

macro_rules! float_decimal {
    ($($t:ty),*) => {$(
        impl WriteDecimal for $t {
            fn decimal(self) -> DecimalBuf {
                let mut bytes = [0u8; DECIMAL_CAPACITY];
                let mut writer = ScratchWriter { buf: &mut bytes, len: 0 };
                let rendered = if self.is_nan() {
                    fmt::Write::write_str(&mut writer, "nan")
                } else {
                    // Debug keeps a ".0" on integral values and switches to
                    // exponent form for very large or small magnitudes.
                    fmt::Write::write_fmt(&mut writer, format_args!("{:?}", self))
                };
                debug_assert!(rendered.is_ok());
                let end = writer.len;
                DecimalBuf { bytes, start: 0, end }
            }
        }
    )*};
}

float_decimal!(f32, f64);

macro_rules! writer {
    ($($(#[$doc:meta])* $name:ident => $t:ty;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(buf: &mut [u8], pos: usize, n: $t) -> usize {
            n.decimal().copy_to(buf, pos)
        }
    )*};
}

writer! {
    /// Write a u8 to buffer at offset, returns bytes written.
    write_u8 => u8;
    /// Write a u16 to buffer at offset, returns bytes written.
    ///
    /// # Example
    /// ```
    /// # use strkit::write_u16;
    /// let mut buf = [0u8; 10];
    /// let written = write_u16(&mut buf, 0, 12345);
    /// assert_eq!(written, 5);
    /// assert_eq!(&buf[..written], b"12345");
    /// ```
    write_u16 => u16;
    /// Write a u32 to buffer at offset, returns bytes written.
    write_u32 => u32;
    /// Write a u64 to buffer at offset, returns bytes written.
    write_u64 => u64;
    /// Write a u128 to buffer at offset, returns bytes written.
    write_u128 => u128;
    /// Write a usize to buffer at offset, returns bytes written.
    write_usize => usize;
    /// Write an i8 to buffer at offset, returns bytes written.
    write_i8 => i8;
    /// Write an i16 to buffer at offset, returns bytes written.
    write_i16 => i16;
    /// Write an i32 to buffer at offset, returns bytes written.
    write_i32 => i32;
    /// Write an i64 to buffer at offset, returns bytes written.
    write_i64 => i64;
    /// Write an i128 to buffer at offset, returns bytes written.
    write_i128 => i128;
    /// Write an isize to buffer at offset, returns bytes written.
    write_isize => isize;
    /// Write an f32 in shortest round-trip form, returns bytes written.
    write_f32 => f32;
    /// Write an f64 in shortest round-trip form, returns bytes written.
    ///
    /// # Example
    /// ```
    /// # use strkit::write_f64;
    /// let mut buf = [0u8; 32];
    /// let written = write_f64(&mut buf, 0, -0.25);
    /// assert_eq!(&buf[..written], b"-0.25");
    /// ```
    write_f64 => f64;
}
