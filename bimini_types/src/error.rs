//! Error types for parsing type strings and for encoding/decoding values.
//!
//! Every failure is terminal for the call that raised it; nothing is retried
//! and no partial result is returned.

use itertools::Itertools;
use ruint::aliases::U256;
use std::io;

/// A malformed type string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Failed to parse type string {text:?} at position {position}: expected {} but found {found}",
    .expected.iter().join(" or ")
)]
pub struct ParseError {
    /// The whole input that was being parsed.
    pub text: String,
    /// Byte offset into `text` of the offending token.
    pub position: usize,
    /// Grammar productions that would have been accepted at `position`.
    pub expected: Vec<&'static str>,
    /// Rendering of what was actually found.
    pub found: String,
}

/// A value whose shape, size or range does not match its type descriptor.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// The value is of the wrong kind altogether, eg a list where a byte string is expected.
    #[error("Cannot encode a {found} value as {ty}")]
    ShapeMismatch { ty: String, found: &'static str },

    /// A fixed-size type was given the wrong number of members or bytes.
    #[error("Cannot encode as {ty}: expected length {expected} but found {found}")]
    LengthMismatch {
        ty: String,
        expected: usize,
        found: usize,
    },

    /// An integer needs more bits than the type declares.
    #[error("Cannot encode {value} as {ty}: value exceeds {bit_size} bits")]
    OutOfRange {
        ty: String,
        value: U256,
        bit_size: usize,
    },

    /// A byte string or array is too long for its length prefix.
    #[error("Cannot encode as {ty}: length {len} exceeds the length prefix range")]
    TooLong { ty: String, len: usize },

    /// An array of zero-width items holds more items than decoding accepts.
    #[error("Cannot encode as {ty}: {len} zero-width items exceed the maximum of {max}")]
    ZeroWidthItems { ty: String, len: usize, max: usize },

    /// The sink rejected a write.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Bytes that cannot be decoded as the requested type.
#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// The source ran out before the type's bytes were all read.
    #[error("Insufficient bytes at position {position}: needed {needed}, got {got}")]
    UnexpectedEnd {
        position: usize,
        needed: usize,
        got: usize,
    },

    /// A scalar kept signalling continuation past its maximum encoded size.
    #[error("Scalar at position {position} exceeds maximum size of {max_len} bytes for {bit_size} bits")]
    ScalarTooLong {
        position: usize,
        bit_size: usize,
        max_len: usize,
    },

    /// A scalar's value needs more bits than its type declares.
    #[error("Scalar at position {position} overflows {bit_size} bits")]
    ScalarOverflow { position: usize, bit_size: usize },

    /// A multi-byte scalar ends with a redundant zero group.
    #[error("Scalar at position {position} is not canonically encoded")]
    NonCanonicalScalar { position: usize },

    /// A bit byte other than `0x00` or `0x01`.
    #[error("Invalid bit byte {byte:#04x} at position {position}")]
    InvalidBit { position: usize, byte: u8 },

    /// An optional's presence flag other than `0x00` or `0x01`.
    #[error("Invalid optional flag {byte:#04x} at position {position}")]
    InvalidFlag { position: usize, byte: u8 },

    /// An array of zero-width items declares more items than are ever materialized from input.
    #[error("Array at position {position} declares {count} zero-width items, more than {max}")]
    ZeroWidthItems {
        position: usize,
        count: usize,
        max: usize,
    },

    /// A strict top-level decode left bytes unconsumed.
    #[error("Decoding consumed {consumed} of {total} bytes")]
    TrailingBytes { consumed: usize, total: usize },

    /// The source failed for a reason other than running out of bytes.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Any failure raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}
