use crate::codec::varint::{self, BitSize};
use crate::codec::StreamCursor;
use crate::error::{DecodingError, EncodingError};
use derive_more::Deref;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use ruint::aliases::U256;
use std::io::{Read, Write};

/// Bit size of the scalar prefixing `bytes` and arrays with their length.
pub const LENGTH_PREFIX_BITS: BitSize = BitSize::LENGTH_PREFIX;

/// Count of bytes written by an encoder.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(pub(crate) usize);

pub(crate) fn write_buf(w: &mut impl Write, buf: &[u8]) -> Result<WriteLen, EncodingError> {
    w.write_all(buf)?;
    Ok(WriteLen(buf.len()))
}

/// The one-byte representation shared by bits and optional presence flags.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, Debug)]
pub enum Flag {
    Unset = 0,
    Set = 1,
}
impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        if b {
            Self::Set
        } else {
            Self::Unset
        }
    }
}
impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        flag == Flag::Set
    }
}
impl Flag {
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Reads one byte, then returns it as a `Flag` if it is `0x00` or `0x01`
    /// and as the raw byte otherwise.
    fn deser<R: Read>(r: &mut StreamCursor<R>) -> Result<Result<Self, u8>, DecodingError> {
        let byte = r.read_byte()?;
        Ok(Self::from_u8(byte).ok_or(byte))
    }
}

/* Bit */

pub fn encode_bit(w: &mut impl Write, b: bool) -> Result<WriteLen, EncodingError> {
    write_buf(w, &[Flag::from(b).to_byte()])
}

pub fn decode_bit<R: Read>(r: &mut StreamCursor<R>) -> Result<bool, DecodingError> {
    let position = r.position();
    match Flag::deser(r)? {
        Ok(flag) => Ok(flag.into()),
        Err(byte) => Err(DecodingError::InvalidBit { position, byte }),
    }
}

/// Presence flag of an optional.
pub fn decode_flag<R: Read>(r: &mut StreamCursor<R>) -> Result<bool, DecodingError> {
    let position = r.position();
    match Flag::deser(r)? {
        Ok(flag) => Ok(flag.into()),
        Err(byte) => Err(DecodingError::InvalidFlag { position, byte }),
    }
}

/* Byte */

pub fn encode_byte(w: &mut impl Write, byte: u8) -> Result<WriteLen, EncodingError> {
    write_buf(w, &[byte])
}

pub fn decode_byte<R: Read>(r: &mut StreamCursor<R>) -> Result<u8, DecodingError> {
    r.read_byte()
}

/* Fixed-length bytes: no prefix. */

pub fn encode_fixed_bytes(
    w: &mut impl Write,
    len: usize,
    buf: &[u8],
) -> Result<WriteLen, EncodingError> {
    if buf.len() != len {
        return Err(EncodingError::LengthMismatch {
            ty: format!("bytes{len}"),
            expected: len,
            found: buf.len(),
        });
    }
    write_buf(w, buf)
}

pub fn decode_fixed_bytes<R: Read>(
    r: &mut StreamCursor<R>,
    len: usize,
) -> Result<Vec<u8>, DecodingError> {
    r.read_exact(len)
}

/* Length prefix, shared by `bytes` and arrays. */

/// Writes `len` as a `scalar32`. `ty` names the prefixed type in errors.
pub fn encode_length_prefix(
    w: &mut impl Write,
    len: usize,
    ty: impl FnOnce() -> String,
) -> Result<WriteLen, EncodingError> {
    let bit_size = LENGTH_PREFIX_BITS;
    let len_int = U256::from(len);
    if !bit_size.fits(&len_int) {
        return Err(EncodingError::TooLong { ty: ty(), len });
    }
    let buf = varint::encode_scalar(bit_size, &len_int)?;
    write_buf(w, &buf)
}

pub fn decode_length_prefix<R: Read>(r: &mut StreamCursor<R>) -> Result<usize, DecodingError> {
    let len = varint::decode_scalar(LENGTH_PREFIX_BITS, r)?;
    // A 32-bit scalar fits in one limb.
    Ok(len.as_limbs()[0] as usize)
}

/* Length-prefixed bytes. */

pub fn encode_bytes(w: &mut impl Write, buf: &[u8]) -> Result<WriteLen, EncodingError> {
    let mut w_len = encode_length_prefix(w, buf.len(), || String::from("bytes"))?;
    w_len.0 += write_buf(w, buf)?.0;
    Ok(w_len)
}

pub fn decode_bytes<R: Read>(r: &mut StreamCursor<R>) -> Result<Vec<u8>, DecodingError> {
    let len = decode_length_prefix(r)?;
    r.read_exact(len)
}
