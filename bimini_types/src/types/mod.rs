//! # Type algebra
//!
//! A [`TypeDescriptor`] owns the encoding of its shape, delegating to its
//! nested descriptors and, at the leaves, to [`crate::codec`].
//!
//! Composite shapes have no headers of their own beyond what is depicted below.
//!
//! ```text
//! {T1,T2,...,Tk} {
//!     member_1:   T1,
//!     ...
//!     member_k:   Tk,                 // arity comes from the type, not the wire
//! }
//!
//! T[L] {
//!     items:      [T; L],
//! }
//!
//! T[] {
//!     count:      scalar32,
//!     items:      [T; count],
//! }
//!
//! T? {
//!     flag:       u8,                 // 0x00 or 0x01
//!     value:      T,                  // only if flag == 0x01
//! }
//! ```

mod decode;
mod descriptor;
mod encode;

pub use decode::MAX_PREALLOC_ITEMS;
pub use descriptor::*;
