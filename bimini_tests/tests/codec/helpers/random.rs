use anyhow::{anyhow, Result};
use bimini_types::codec::BitSize;
use bimini_types::{TypeDescriptor, Value, U256};
use rand::Rng;

pub fn gen_bit_size(rng: &mut impl Rng) -> Result<BitSize> {
    let bits = rng.gen_range(1..=32) * 8;
    BitSize::new(bits).ok_or(anyhow!("Invalid bit size {bits}"))
}

/// A random descriptor with at most `depth` composite layers.
pub fn gen_type(rng: &mut impl Rng, depth: usize) -> Result<TypeDescriptor> {
    if depth == 0 || rng.gen_bool(0.4) {
        let ty = match rng.gen_range(0..7) {
            0 => TypeDescriptor::bit(),
            1 => TypeDescriptor::bool(),
            2 => TypeDescriptor::UnsignedInteger(gen_bit_size(rng)?),
            3 => TypeDescriptor::Scalar(gen_bit_size(rng)?),
            4 => TypeDescriptor::Byte,
            5 => TypeDescriptor::Bytes,
            _ => TypeDescriptor::fixed_bytes(rng.gen_range(1..=40)).ok_or(anyhow!("bytesN"))?,
        };
        return Ok(ty);
    }

    let ty = match rng.gen_range(0..4) {
        0 => {
            let members_count = rng.gen_range(0..=3);
            let member_types = (0..members_count)
                .map(|_| gen_type(rng, depth - 1))
                .collect::<Result<Vec<_>>>()?;
            TypeDescriptor::container(member_types)
        }
        1 => {
            let item_type = gen_type(rng, depth - 1)?;
            let len = rng.gen_range(1..=3);
            TypeDescriptor::tuple(item_type, len).ok_or(anyhow!("T[N]"))?
        }
        2 => TypeDescriptor::array(gen_type(rng, depth - 1)?),
        _ => TypeDescriptor::optional(gen_type(rng, depth - 1)?),
    };
    Ok(ty)
}

/// A random integer of at most `bit_size` bits, favoring the extremes.
pub fn gen_uint(rng: &mut impl Rng, bit_size: BitSize) -> U256 {
    let max = U256::MAX >> (256 - *bit_size);
    match rng.gen_range(0..4) {
        0 => U256::ZERO,
        1 => max,
        _ => U256::from_le_bytes(rng.gen::<[u8; 32]>()) & max,
    }
}

pub fn gen_bytes(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// A random value of the shape `ty` describes.
pub fn gen_value(rng: &mut impl Rng, ty: &TypeDescriptor) -> Value {
    match ty {
        TypeDescriptor::Bit { .. } => Value::Bool(rng.gen()),
        TypeDescriptor::UnsignedInteger(bit_size) | TypeDescriptor::Scalar(bit_size) => {
            Value::Uint(gen_uint(rng, *bit_size))
        }
        TypeDescriptor::Byte => Value::Byte(rng.gen()),
        TypeDescriptor::Bytes => {
            // Past 127, the length prefix takes more than one byte.
            let len = rng.gen_range(0..=300);
            Value::Bytes(gen_bytes(rng, len))
        }
        TypeDescriptor::FixedBytes(len) => Value::Bytes(gen_bytes(rng, len.get())),
        TypeDescriptor::Container(member_types) => Value::Record(
            member_types
                .iter()
                .map(|member_type| gen_value(rng, member_type))
                .collect(),
        ),
        TypeDescriptor::Tuple(item_type, len) => {
            Value::List((0..len.get()).map(|_| gen_value(rng, item_type)).collect())
        }
        TypeDescriptor::Array(item_type) => {
            let count = rng.gen_range(0..=4);
            Value::List((0..count).map(|_| gen_value(rng, item_type)).collect())
        }
        TypeDescriptor::Optional(value_type) => {
            if rng.gen_bool(0.5) {
                Value::Absent
            } else {
                Value::Present(Box::new(gen_value(rng, value_type)))
            }
        }
    }
}
