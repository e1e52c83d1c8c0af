use ruint::aliases::U256;

/// An in-memory value matching the shape of some [`TypeDescriptor`](crate::types::TypeDescriptor).
///
/// The codec never stores values. It transforms them to and from bytes against
/// whichever descriptor the caller hands it.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Value {
    /// `bit` and `bool`.
    Bool(bool),
    /// `uintN` and `scalarN`.
    Uint(U256),
    /// `byte`.
    Byte(u8),
    /// `bytes` and `bytesN`.
    Bytes(Vec<u8>),
    /// Members of a container, heterogeneous, in declaration order.
    Record(Vec<Value>),
    /// Items of a tuple or an array.
    List(Vec<Value>),
    /// An optional without a value.
    Absent,
    /// An optional with a value.
    Present(Box<Value>),
}

impl Value {
    /// Name of this value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Uint(_) => "uint",
            Self::Byte(_) => "byte",
            Self::Bytes(_) => "bytes",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::Absent => "absent",
            Self::Present(_) => "present",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<&U256> {
        match self {
            Self::Uint(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Members of a record or items of a list.
    pub fn as_members(&self) -> Option<&[Value]> {
        match self {
            Self::Record(members) | Self::List(members) => Some(members),
            _ => None,
        }
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Self::Uint(U256::from(i))
                }
            }
        )*
    };
}
impl_from_uint!(u8, u16, u32, u64, u128, usize);

impl From<U256> for Value {
    fn from(i: U256) -> Self {
        Self::Uint(i)
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<Vec<u8>> for Value {
    fn from(buf: Vec<u8>) -> Self {
        Self::Bytes(buf)
    }
}
impl From<&[u8]> for Value {
    fn from(buf: &[u8]) -> Self {
        Self::Bytes(buf.to_vec())
    }
}

/* Optional values convert to and from `Option`. */
impl From<Option<Value>> for Value {
    fn from(opt: Option<Value>) -> Self {
        match opt {
            None => Self::Absent,
            Some(val) => Self::Present(Box::new(val)),
        }
    }
}
impl Value {
    /// Unwraps an optional's value. Any other shape is handed back as the error.
    pub fn into_option(self) -> Result<Option<Value>, Value> {
        match self {
            Self::Absent => Ok(None),
            Self::Present(inner) => Ok(Some(*inner)),
            other => Err(other),
        }
    }
}
