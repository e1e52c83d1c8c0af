use crate::codec::BitSize;
use crate::error::ParseError;
use crate::grammar;
use itertools::Itertools;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// The shape of a value and its wire encoding.
///
/// Descriptors are immutable. Composite shapes are expressed by nesting only,
/// so a descriptor may be shared across threads and reused for any number of
/// encodes and decodes.
///
/// Two descriptors are equal iff their variants and all attributes match,
/// recursively. The [`Display`](fmt::Display) rendering is canonical, and
/// [`grammar::parse`] inverts it.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum TypeDescriptor {
    /// A one-byte `0x00`/`0x01` flag: `bit`, or `bool` if `is_bool`.
    Bit { is_bool: bool },
    /// `uintN`: fixed width, little-endian.
    UnsignedInteger(BitSize),
    /// `scalarN`: variable width, LEB128-style.
    Scalar(BitSize),
    /// `byte`: one raw byte.
    Byte,
    /// `bytes`: a length-prefixed byte string.
    Bytes,
    /// `bytesN`: exactly N raw bytes.
    FixedBytes(NonZeroUsize),
    /// `{T1,T2,...}`: a heterogeneous record of fixed arity.
    Container(Vec<TypeDescriptor>),
    /// `T[N]`: exactly N items.
    Tuple(Box<TypeDescriptor>, NonZeroUsize),
    /// `T[]`: a count-prefixed run of items.
    Array(Box<TypeDescriptor>),
    /// `T?`: a presence flag, then the value if present.
    Optional(Box<TypeDescriptor>),
}

/* Shorthand constructors. */
impl TypeDescriptor {
    pub fn bit() -> Self {
        Self::Bit { is_bool: false }
    }

    pub fn bool() -> Self {
        Self::Bit { is_bool: true }
    }

    /// `None` unless `bits` is a multiple of 8 within `[8, 256]`.
    pub fn uint(bits: usize) -> Option<Self> {
        BitSize::new(bits).map(Self::UnsignedInteger)
    }

    /// `None` unless `bits` is a multiple of 8 within `[8, 256]`.
    pub fn scalar(bits: usize) -> Option<Self> {
        BitSize::new(bits).map(Self::Scalar)
    }

    /// `None` if `len` is zero.
    pub fn fixed_bytes(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(Self::FixedBytes)
    }

    pub fn container(member_types: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self::Container(member_types.into_iter().collect())
    }

    /// `None` if `len` is zero.
    pub fn tuple(item_type: TypeDescriptor, len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self::Tuple(Box::new(item_type), len))
    }

    pub fn array(item_type: TypeDescriptor) -> Self {
        Self::Array(Box::new(item_type))
    }

    pub fn optional(value_type: TypeDescriptor) -> Self {
        Self::Optional(Box::new(value_type))
    }
}

impl TypeDescriptor {
    /// Whether every value of this type encodes to zero bytes, eg `{}` or `{{}}[3]`.
    pub fn is_zero_width(&self) -> bool {
        match self {
            Self::Container(member_types) => member_types.iter().all(Self::is_zero_width),
            Self::Tuple(item_type, _) => item_type.is_zero_width(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bit { is_bool: false } => write!(f, "bit"),
            Self::Bit { is_bool: true } => write!(f, "bool"),
            Self::UnsignedInteger(bit_size) => write!(f, "uint{bit_size}"),
            Self::Scalar(bit_size) => write!(f, "scalar{bit_size}"),
            Self::Byte => write!(f, "byte"),
            Self::Bytes => write!(f, "bytes"),
            Self::FixedBytes(len) => write!(f, "bytes{len}"),
            Self::Container(member_types) => write!(f, "{{{}}}", member_types.iter().join(",")),
            Self::Tuple(item_type, len) => write!(f, "{item_type}[{len}]"),
            Self::Array(item_type) => write!(f, "{item_type}[]"),
            Self::Optional(value_type) => write!(f, "{value_type}?"),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = ParseError;
    fn from_str(type_str: &str) -> Result<Self, ParseError> {
        grammar::parse(type_str)
    }
}
