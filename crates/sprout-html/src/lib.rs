//! HTML-subset parser for Sprout.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer layer** - a byte cursor over the input, attribute parsing,
//!   open and close tag parsing
//! - **Tree Builder** - recursive descent that matches every close tag
//!   against the innermost open element
//! - **Document Assembler** - the [`parse`] entry point
//!
//! The grammar is strict: a mismatched or missing close tag aborts the parse
//! and no partial tree is returned.
//!
//! # Not Implemented
//!
//! - Character references (`&amp;` is kept verbatim)
//! - Raw-text elements (`script`, `style`)
//! - Comments and DOCTYPE declarations
//! - Error recovery of any kind

/// Parser limits.
pub mod config;
/// Parse failures.
pub mod error;
/// Tree construction and the document entry points.
pub mod parser;
/// Scanner, attribute and tag parsing.
pub mod tokenizer;

pub use config::ParserConfig;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{Parser, parse, parse_with_config};
pub use sprout_dom as dom;
pub use sprout_dom::print_tree;
