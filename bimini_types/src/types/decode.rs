use crate::codec::{primitives, varint, StreamCursor};
use crate::error::DecodingError;
use crate::types::TypeDescriptor;
use crate::value::Value;
use std::io::Read;
use tracing::debug;

/// Upper bound on the capacity reserved up front for a decoded tuple or array.
///
/// Item counts are read from untrusted input; beyond this bound the list grows
/// only as items are actually decoded.
pub const MAX_PREALLOC_ITEMS: usize = 1024;

impl TypeDescriptor {
    /// Decodes all of `buf` as one value.
    ///
    /// Fails with [`DecodingError::TrailingBytes`] if `buf` holds more than one value's encoding.
    pub fn decode(&self, buf: &[u8]) -> Result<Value, DecodingError> {
        let (value, rest) = self.decode_prefix(buf)?;
        if !rest.is_empty() {
            let consumed = buf.len() - rest.len();
            debug!(ty = %self, consumed, total = buf.len(), "Rejecting trailing bytes");
            return Err(DecodingError::TrailingBytes {
                consumed,
                total: buf.len(),
            });
        }
        Ok(value)
    }

    /// Decodes one value from the start of `buf`, and returns it with the unconsumed remainder.
    pub fn decode_prefix<'a>(&self, buf: &'a [u8]) -> Result<(Value, &'a [u8]), DecodingError> {
        let mut r = StreamCursor::new(buf);
        let value = self.stream_decode(&mut r)?;
        Ok((value, r.into_inner()))
    }

    /// Reads exactly the bytes of one value, advancing `r` past them.
    pub fn stream_decode<R: Read>(&self, r: &mut StreamCursor<R>) -> Result<Value, DecodingError> {
        let value = match self {
            Self::Bit { .. } => Value::Bool(primitives::decode_bit(r)?),
            Self::UnsignedInteger(bit_size) => Value::Uint(varint::decode_uint(*bit_size, r)?),
            Self::Scalar(bit_size) => Value::Uint(varint::decode_scalar(*bit_size, r)?),
            Self::Byte => Value::Byte(primitives::decode_byte(r)?),
            Self::Bytes => Value::Bytes(primitives::decode_bytes(r)?),
            Self::FixedBytes(len) => Value::Bytes(primitives::decode_fixed_bytes(r, len.get())?),
            Self::Container(member_types) => {
                let members = member_types
                    .iter()
                    .map(|member_type| member_type.stream_decode(r))
                    .collect::<Result<Vec<_>, _>>()?;
                Value::Record(members)
            }
            Self::Tuple(item_type, len) => Value::List(item_type.decode_items(len.get(), r)?),
            Self::Array(item_type) => {
                let position = r.position();
                let count = primitives::decode_length_prefix(r)?;
                // Zero-width items consume no input, so the count alone would bound the work.
                if count > MAX_PREALLOC_ITEMS && item_type.is_zero_width() {
                    return Err(DecodingError::ZeroWidthItems {
                        position,
                        count,
                        max: MAX_PREALLOC_ITEMS,
                    });
                }
                Value::List(item_type.decode_items(count, r)?)
            }
            Self::Optional(value_type) => {
                if primitives::decode_flag(r)? {
                    Value::Present(Box::new(value_type.stream_decode(r)?))
                } else {
                    Value::Absent
                }
            }
        };
        Ok(value)
    }

    fn decode_items<R: Read>(
        &self,
        count: usize,
        r: &mut StreamCursor<R>,
    ) -> Result<Vec<Value>, DecodingError> {
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOC_ITEMS));
        for _ in 0..count {
            items.push(self.stream_decode(r)?);
        }
        Ok(items)
    }
}
