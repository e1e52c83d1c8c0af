use anyhow::Result;
use bimini_types::codec::BitSize;
use bimini_types::{DecodingError, EncodingError, TypeDescriptor, Value, U256};

pub fn test_scalar_bounds() -> Result<()> {
    for bit_size in BitSize::all() {
        let ty = TypeDescriptor::Scalar(bit_size);
        let max_len = bit_size.max_scalar_len();
        let max = U256::MAX >> (256 - *bit_size);

        assert_eq!(ty.encode(&Value::from(0u8))?, b"\x00");

        let max_enc = ty.encode(&Value::Uint(max))?;
        assert_eq!(max_enc.len(), max_len);
        assert_eq!(ty.decode(&max_enc)?, Value::Uint(max));

        if *bit_size < 256 {
            let res = ty.encode(&Value::Uint(max + U256::from(1u8)));
            assert!(matches!(res, Err(EncodingError::OutOfRange { .. })), "{bit_size}");
        }

        // Every byte signals continuation, up to and past the maximum size.
        for len in [max_len, max_len + 1] {
            let res = ty.decode(&vec![0x80u8; len]);
            assert!(
                matches!(res, Err(DecodingError::ScalarTooLong { max_len: m, .. }) if m == max_len),
                "{bit_size} {len}"
            );
        }

        // When the width is not a multiple of 7, the top group has spare bits.
        if *bit_size % 7 != 0 {
            let mut overflowing = max_enc.clone();
            if let Some(last) = overflowing.last_mut() {
                *last = 0x7f;
            }
            let res = ty.decode(&overflowing);
            assert!(matches!(res, Err(DecodingError::ScalarOverflow { .. })), "{bit_size}");
        }

        let res = ty.decode(b"\x80\x00");
        assert!(matches!(res, Err(DecodingError::NonCanonicalScalar { .. })), "{bit_size}");
    }

    Ok(())
}
