//! Schema-exact binary encoding of values described by type strings.
//!
//! A type string such as `{bytes32,uint256[],bool?}` is parsed once into a
//! [`TypeDescriptor`], which then encodes [`Value`]s to bytes and decodes them back.
//!
//! ```
//! use bimini_types::{parse, Value};
//!
//! let ty = parse("{byte,uint8[]}").unwrap();
//! let val = Value::Record(vec![
//!     Value::Byte(0xab),
//!     Value::List(vec![Value::from(1u8), Value::from(2u8)]),
//! ]);
//! let buf = ty.encode(&val).unwrap();
//! assert_eq!(buf, b"\xab\x02\x01\x02");
//! assert_eq!(ty.decode(&buf).unwrap(), val);
//! ```

pub mod codec;
pub mod error;
pub mod grammar;
pub mod types;
pub mod value;

pub use codec::StreamCursor;
pub use error::{DecodingError, EncodingError, Error, ParseError};
pub use grammar::{parse, parse_cached, TypeCache};
pub use types::TypeDescriptor;
pub use value::Value;

pub use ruint::aliases::U256;
