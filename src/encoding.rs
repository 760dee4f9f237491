//! Hex and base64 text encodings of binary data.
//!
//! Base64 uses the standard alphabet with canonical `=` padding through the
//! `base64` engine. Decoders accept exactly what the encoders produce, plus
//! upper-case hex digits.

use crate::errors::DecodeError;
use base64::{Engine, engine::general_purpose::STANDARD};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

const INVALID: u8 = 0xFF;

const fn decode_table(alphabet: &[u8]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < alphabet.len() {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static HEX_DECODE: [u8; 256] = {
    let mut table = decode_table(HEX_DIGITS);
    let upper = b"ABCDEF";
    let mut i = 0;
    while i < upper.len() {
        table[upper[i] as usize] = 10 + i as u8;
        i += 1;
    }
    table
};

/// Lower-case hex text of `bytes`.
///
/// ```
/// # use strkit::{hex_encode, hex_decode};
/// assert_eq!(hex_encode(b"\x00\xAB\xff"), "00abff");
/// assert_eq!(hex_decode(b"00ABff").unwrap(), b"\x00\xAB\xff");
/// ```
pub fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(b & 0x0F)]));
    }
    out
}

pub fn hex_decode(text: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if text.len() % 2 != 0 {
        return Err(DecodeError::OddLength);
    }
    let nibble = |position: usize| -> Result<u8, DecodeError> {
        let byte = text[position];
        match HEX_DECODE[usize::from(byte)] {
            INVALID => Err(DecodeError::InvalidByte { position, byte }),
            v => Ok(v),
        }
    };
    (0..text.len())
        .step_by(2)
        .map(|i| Ok(nibble(i)? << 4 | nibble(i + 1)?))
        .collect()
}

/// Standard base64 with padding.
///
/// ```
/// # use strkit::{base64_encode, base64_decode};
/// assert_eq!(base64_encode(b"hello"), "aGVsbG8=");
/// assert_eq!(base64_decode(b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard padded base64; non-zero trailing bits are rejected.
pub fn base64_decode(text: &[u8]) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(text)?)
}
