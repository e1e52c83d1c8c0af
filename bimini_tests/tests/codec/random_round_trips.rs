use super::helpers::random::{gen_type, gen_value};
use super::helpers::verify::verify_round_trip;
use anyhow::Result;
use bimini_types::{parse, StreamCursor};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

const MAX_DEPTH: usize = 4;

pub fn test_random_round_trips(rng: &mut impl Rng, types_count: usize) -> Result<()> {
    let mut types = vec![];
    for _ in 0..types_count {
        let ty = gen_type(rng, MAX_DEPTH)?;
        assert_eq!(parse(&ty.to_string())?, ty);

        for _ in 0..3 {
            let val = gen_value(rng, &ty);
            verify_round_trip(&ty, &val)?;
        }

        types.push(ty);
    }

    test_back_to_back(rng, &mut types)?;

    Ok(())
}

/// Values of many types encoded into one stream are decoded in the same order.
fn test_back_to_back(
    rng: &mut impl Rng,
    types: &mut [bimini_types::TypeDescriptor],
) -> Result<()> {
    types.shuffle(rng);
    let values = types.iter().map(|ty| gen_value(rng, ty)).collect::<Vec<_>>();

    let mut serialized = vec![];
    let mut w_len_at_each_val = vec![];
    let mut w_len = 0;
    for (ty, val) in types.iter().zip_eq(&values) {
        w_len += *ty.encode_to(val, &mut serialized)?;
        w_len_at_each_val.push(w_len);
    }
    assert_eq!(serialized.len(), w_len);

    let mut r = StreamCursor::new(&serialized[..]);
    for ((ty, val), w_len) in types.iter().zip_eq(&values).zip_eq(w_len_at_each_val) {
        assert_eq!(&ty.stream_decode(&mut r)?, val);
        assert_eq!(r.position(), w_len);
    }
    assert!(r.into_inner().is_empty());

    Ok(())
}
