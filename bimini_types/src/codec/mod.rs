//! # Wire format
//!
//! Leaf encodings that every type descriptor is assembled from.
//! Nothing is self-describing: the reader must already know the type.
//!
//! The below pseudocode depicts the serialized representations.
//!
//! ```text
//! bit, bool {
//!     flag:       u8,                 // 0x00 or 0x01, anything else is rejected
//! }
//!
//! uintN {
//!     body:       [u8; N / 8],        // little-endian
//! }
//!
//! scalarN {
//!     groups:     [u8; 1..=ceil(N / 7)],
//!                                     // 7 bits each, low-order group first;
//!                                     // high bit set on all but the last byte;
//!                                     // zero is the single byte 0x00
//! }
//!
//! byte {
//!     body:       u8,
//! }
//!
//! bytesL {
//!     body:       [u8; L],
//! }
//!
//! bytes {
//!     len:        scalar32,
//!     body:       [u8; len],
//! }
//! ```
//!
//! Composite types (containers, tuples, arrays, optionals) concatenate these;
//! see [`crate::types`].

mod cursor;
pub mod primitives;
pub mod varint;

pub use cursor::*;
pub use primitives::{WriteLen, LENGTH_PREFIX_BITS};
pub use varint::BitSize;
