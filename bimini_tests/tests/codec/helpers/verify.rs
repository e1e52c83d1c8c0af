use anyhow::Result;
use bimini_types::{DecodingError, StreamCursor, TypeDescriptor, Value};
use std::io::Cursor;

/// Checks every decode path against `val`'s encoding, and returns the encoding.
pub fn verify_round_trip(ty: &TypeDescriptor, val: &Value) -> Result<Vec<u8>> {
    let enc = ty.encode(val)?;
    assert_eq!(ty.encoded_len(val)?, enc.len(), "\n{ty}\n{val:?}\n");
    assert_eq!(&ty.decode(&enc)?, val, "\n{ty}\n{enc:?}\n");

    let mut padded = enc.clone();
    padded.extend_from_slice(b"\xde\xad");

    let (dec, rest) = ty.decode_prefix(&padded)?;
    assert_eq!(&dec, val, "\n{ty}\n{padded:?}\n");
    assert_eq!(rest, b"\xde\xad");
    assert!(matches!(
        ty.decode(&padded),
        Err(DecodingError::TrailingBytes { consumed, total }) if consumed == enc.len() && total == padded.len()
    ));

    let mut r = StreamCursor::buffered(Cursor::new(padded));
    assert_eq!(&ty.stream_decode(&mut r)?, val, "\n{ty}\n{enc:?}\n");
    assert_eq!(r.position(), enc.len());

    let step = (enc.len() / 16).max(1);
    for trunc_len in (0..enc.len()).step_by(step) {
        assert!(
            matches!(
                ty.decode(&enc[..trunc_len]),
                Err(DecodingError::UnexpectedEnd { .. })
            ),
            "\n{ty}\n{enc:?}\n{trunc_len}\n"
        );
    }

    Ok(enc)
}
