//! Error types for text conversion, structured field parsing and decoding.
//!
//! Malformed input is an expected outcome in this crate, so every error here
//! is a plain value: cheap to construct, `Copy` where possible, and never a
//! panic in the primary API.

use thiserror::Error;

/// Failure converting a token to a typed value.
///
/// Positions are byte offsets into the token that was being converted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The token was empty, or held only a sign.
    #[error("empty token")]
    Empty,
    /// A byte that is not a decimal digit appeared where a digit was required.
    #[error("invalid digit at byte {position}")]
    InvalidDigit {
        /// Offset of the offending byte.
        position: usize,
    },
    /// The value does not fit the target type.
    #[error("value out of range for target type")]
    Overflow,
    /// The token does not follow the grammar of the target type.
    #[error("malformed value")]
    Malformed,
    /// A valid prefix was recognized but unconsumed bytes remain.
    #[error("unexpected trailing bytes at byte {position}")]
    TrailingBytes {
        /// Offset of the first unconsumed byte.
        position: usize,
    },
}

/// Failure in a fixed-arity structured parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into the required number of tokens.
    #[error("expected {expected} tokens, found {found}")]
    TokenCount {
        /// Number of fields the caller asked for.
        expected: usize,
        /// Number of tokens actually produced.
        found: usize,
    },
    /// A token was produced but could not be converted.
    #[error("field {index}: {source}")]
    Field {
        /// Zero-based index of the failing field.
        index: usize,
        /// Underlying conversion failure.
        source: ConvertError,
    },
}

impl ParseError {
    /// Index of the field that failed conversion, if this is a field error.
    pub fn field_index(&self) -> Option<usize> {
        match self {
            ParseError::Field { index, .. } => Some(*index),
            ParseError::TokenCount { .. } => None,
        }
    }
}

/// Failure decoding hex or base64 text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex input must hold an even number of bytes.
    #[error("hex input has odd length")]
    OddLength,
    /// Base64 input does not form whole symbols.
    #[error("invalid encoded length")]
    InvalidLength,
    /// Base64 padding is missing, excessive or misplaced.
    #[error("invalid padding")]
    InvalidPadding,
    /// The final base64 symbol carries bits that no encoder would set.
    #[error("invalid last symbol 0x{byte:02X} at {position}")]
    InvalidLastSymbol {
        /// Offset of the final symbol.
        position: usize,
        /// The offending byte.
        byte: u8,
    },
    /// A byte outside the alphabet was found.
    #[error("invalid byte 0x{byte:02X} at {position}")]
    InvalidByte {
        /// Offset of the offending byte.
        position: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl From<base64::DecodeError> for DecodeError {
    fn from(error: base64::DecodeError) -> Self {
        match error {
            base64::DecodeError::InvalidByte(position, byte) => {
                DecodeError::InvalidByte { position, byte }
            }
            base64::DecodeError::InvalidLength(_) => DecodeError::InvalidLength,
            base64::DecodeError::InvalidLastSymbol(position, byte) => {
                DecodeError::InvalidLastSymbol { position, byte }
            }
            base64::DecodeError::InvalidPadding => DecodeError::InvalidPadding,
        }
    }
}
