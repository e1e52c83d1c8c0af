//! # Type strings
//!
//! ```text
//! type            := base_form suffix*
//! base_form       := ("uint" | "scalar") bit_size
//!                  | "bit" | "bool" | "byte" | "bytes" | "bytes" size
//!                  | "{" "}" | "{" type ("," type)* "}"
//! suffix          := "?" | "[" size "]" | "[" "]"
//! bit_size        := multiple of 8, from 8 to 256
//! size            := [1-9][0-9]*
//! ```
//!
//! No whitespace is allowed anywhere.
//!
//! Suffixes apply left to right: each wraps everything to its left.
//! Hence `uint8[3][]` is an array of 3-tuples, and `uint8[][3]` is a 3-tuple of arrays.
//! Likewise `bool?[]` is an array of optionals, and `bool[]?` an optional array.

mod cache;
mod lexer;
mod parser;
mod reduce;
pub mod syntax;

use crate::error::ParseError;
use crate::types::TypeDescriptor;

pub use cache::*;
pub use parser::MAX_NESTING_DEPTH;

pub fn parse(type_str: &str) -> Result<TypeDescriptor, ParseError> {
    parse_tree(type_str).map(reduce::reduce)
}

/// Parses `type_str` without reducing it to a descriptor.
pub fn parse_tree(type_str: &str) -> Result<syntax::TypeExpr, ParseError> {
    parser::parse_tree(type_str)
}
