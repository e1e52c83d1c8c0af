use crate::codec::primitives::{self, write_buf};
use crate::codec::{varint, WriteLen};
use crate::error::EncodingError;
use crate::types::{TypeDescriptor, MAX_PREALLOC_ITEMS};
use crate::value::Value;
use std::io::{self, Write};

impl TypeDescriptor {
    /// Encodes `value` into a fresh buffer.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodingError> {
        let mut buf = vec![];
        self.encode_to(value, &mut buf)?;
        Ok(buf)
    }

    /// Size of `value`'s encoding, without keeping the encoded bytes.
    pub fn encoded_len(&self, value: &Value) -> Result<usize, EncodingError> {
        let w_len = self.encode_to(value, &mut io::sink())?;
        Ok(*w_len)
    }

    /// Encodes `value` into `w`.
    ///
    /// On error, a prefix of the encoding may already have been written.
    pub fn encode_to(&self, value: &Value, w: &mut impl Write) -> Result<WriteLen, EncodingError> {
        match (self, value) {
            (Self::Bit { .. }, Value::Bool(b)) => primitives::encode_bit(w, *b),
            (Self::UnsignedInteger(bit_size), Value::Uint(i)) => {
                write_buf(w, &varint::encode_uint(*bit_size, i)?)
            }
            (Self::Scalar(bit_size), Value::Uint(i)) => {
                write_buf(w, &varint::encode_scalar(*bit_size, i)?)
            }
            (Self::Byte, Value::Byte(byte)) => primitives::encode_byte(w, *byte),
            (Self::Bytes, Value::Bytes(buf)) => primitives::encode_bytes(w, buf),
            (Self::FixedBytes(len), Value::Bytes(buf)) => {
                primitives::encode_fixed_bytes(w, len.get(), buf)
            }
            (Self::Container(member_types), Value::Record(members)) => {
                if member_types.len() != members.len() {
                    return Err(self.length_mismatch(member_types.len(), members.len()));
                }
                let mut w_len = 0;
                for (member_type, member) in member_types.iter().zip(members) {
                    w_len += *member_type.encode_to(member, w)?;
                }
                Ok(WriteLen(w_len))
            }
            (Self::Tuple(item_type, len), Value::List(items)) => {
                if len.get() != items.len() {
                    return Err(self.length_mismatch(len.get(), items.len()));
                }
                item_type.encode_items(items, w)
            }
            (Self::Array(item_type), Value::List(items)) => {
                if items.len() > MAX_PREALLOC_ITEMS && item_type.is_zero_width() {
                    return Err(EncodingError::ZeroWidthItems {
                        ty: self.to_string(),
                        len: items.len(),
                        max: MAX_PREALLOC_ITEMS,
                    });
                }
                let mut w_len = *primitives::encode_length_prefix(w, items.len(), || {
                    self.to_string()
                })?;
                w_len += *item_type.encode_items(items, w)?;
                Ok(WriteLen(w_len))
            }
            (Self::Optional(_), Value::Absent) => primitives::encode_bit(w, false),
            (Self::Optional(value_type), Value::Present(inner)) => {
                let mut w_len = *primitives::encode_bit(w, true)?;
                w_len += *value_type.encode_to(inner, w)?;
                Ok(WriteLen(w_len))
            }
            (_, value) => Err(EncodingError::ShapeMismatch {
                ty: self.to_string(),
                found: value.kind(),
            }),
        }
    }

    fn encode_items(&self, items: &[Value], w: &mut impl Write) -> Result<WriteLen, EncodingError> {
        let mut w_len = 0;
        for item in items {
            w_len += *self.encode_to(item, w)?;
        }
        Ok(WriteLen(w_len))
    }

    fn length_mismatch(&self, expected: usize, found: usize) -> EncodingError {
        EncodingError::LengthMismatch {
            ty: self.to_string(),
            expected,
            found,
        }
    }
}
