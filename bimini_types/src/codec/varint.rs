//! Fixed-width little-endian and LEB128-style variable-width unsigned integers.

use crate::codec::StreamCursor;
use crate::error::{DecodingError, EncodingError};
use derive_more::Deref;
use ruint::aliases::U256;
use std::fmt;
use std::io::Read;

pub const LOW_MASK: u8 = 0b0111_1111;
pub const HIGH_MASK: u8 = 0b1000_0000;

/// Width of an integer type: a multiple of 8 within `[8, 256]`.
#[derive(Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct BitSize(usize);

impl BitSize {
    pub const MIN: Self = Self(8);
    pub const MAX: Self = Self(256);
    pub const LENGTH_PREFIX: Self = Self(32);

    pub fn new(bits: usize) -> Option<Self> {
        if bits % 8 == 0 && Self::MIN.0 <= bits && bits <= Self::MAX.0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Every valid width, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).step_by(8).map(Self)
    }

    /// Bytes taken by a fixed-width integer of this width.
    pub fn byte_len(self) -> usize {
        self.0 / 8
    }

    /// Most bytes a scalar of this width may take: `ceil(bits / 7)`.
    pub fn max_scalar_len(self) -> usize {
        (self.0 + 6) / 7
    }

    pub fn fits(self, value: &U256) -> bool {
        value.bit_len() <= self.0
    }
}

impl fmt::Display for BitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* Fixed width. */

pub fn encode_uint(bit_size: BitSize, value: &U256) -> Result<Vec<u8>, EncodingError> {
    if !bit_size.fits(value) {
        return Err(EncodingError::OutOfRange {
            ty: format!("uint{bit_size}"),
            value: *value,
            bit_size: *bit_size,
        });
    }
    let mut buf = value.to_le_bytes::<32>().to_vec();
    buf.truncate(bit_size.byte_len());
    Ok(buf)
}

pub fn decode_uint<R: Read>(
    bit_size: BitSize,
    r: &mut StreamCursor<R>,
) -> Result<U256, DecodingError> {
    let body = r.read_exact(bit_size.byte_len())?;
    let mut full = [0u8; 32];
    full[..body.len()].copy_from_slice(&body);
    Ok(U256::from_le_bytes(full))
}

/* Variable width. */

/// Splits `value` into 7-bit groups, low-order group first.
/// Every byte but the last carries [`HIGH_MASK`].
pub fn encode_scalar(bit_size: BitSize, value: &U256) -> Result<Vec<u8>, EncodingError> {
    if !bit_size.fits(value) {
        return Err(EncodingError::OutOfRange {
            ty: format!("scalar{bit_size}"),
            value: *value,
            bit_size: *bit_size,
        });
    }

    let mut buf = Vec::with_capacity(scalar_len(value));
    let mut rest = *value;
    loop {
        let group = (rest.as_limbs()[0] as u8) & LOW_MASK;
        rest = rest >> 7_usize;
        if rest.is_zero() {
            buf.push(group);
            return Ok(buf);
        }
        buf.push(group | HIGH_MASK);
    }
}

/// Length of `value`'s scalar encoding.
pub fn scalar_len(value: &U256) -> usize {
    value.bit_len().max(1).div_ceil(7)
}

pub fn decode_scalar<R: Read>(
    bit_size: BitSize,
    r: &mut StreamCursor<R>,
) -> Result<U256, DecodingError> {
    let position = r.position();
    let bits = *bit_size;

    let mut value = U256::ZERO;
    for idx in 0..bit_size.max_scalar_len() {
        let byte = r.read_byte()?;
        let group = byte & LOW_MASK;
        let shift = idx * 7;

        if group != 0 {
            let overflows = shift >= bits || (bits - shift < 7 && group >> (bits - shift) != 0);
            if overflows {
                return Err(DecodingError::ScalarOverflow {
                    position,
                    bit_size: bits,
                });
            }
            value |= U256::from(group) << shift;
        }

        if byte & HIGH_MASK == 0 {
            if idx > 0 && byte == 0 {
                return Err(DecodingError::NonCanonicalScalar { position });
            }
            return Ok(value);
        }
    }

    Err(DecodingError::ScalarTooLong {
        position,
        bit_size: bits,
        max_len: bit_size.max_scalar_len(),
    })
}
