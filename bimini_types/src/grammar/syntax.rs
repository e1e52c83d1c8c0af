use crate::codec::BitSize;
use std::num::NonZeroUsize;

/// Parse tree of one type: a base form, then suffixes in source order.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TypeExpr {
    pub base: BaseForm,
    pub suffixes: Vec<Suffix>,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum BaseForm {
    Uint(BitSize),
    Scalar(BitSize),
    Bit,
    Bool,
    Byte,
    Bytes,
    FixedBytes(NonZeroUsize),
    Container(Vec<TypeExpr>),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Suffix {
    /// `?`
    Optional,
    /// `[N]`
    Tuple(NonZeroUsize),
    /// `[]`
    Array,
}
