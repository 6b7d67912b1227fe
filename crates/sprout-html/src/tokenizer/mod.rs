//! Tokenizer layer: the scanner and the attribute and tag parsers built on it.
//!
//! Every function here takes the [`Scanner`] by mutable reference and either
//! advances it past what it consumed or returns a [`ParseError`](crate::ParseError).

/// Attribute parsing.
pub mod attribute;
/// Byte cursor over the input.
pub mod scanner;
/// Open and close tag parsing.
pub mod tag;

pub use attribute::parse_one_attribute;
pub use scanner::Scanner;
pub use tag::{OpenTag, parse_close_tag, parse_open_tag};
