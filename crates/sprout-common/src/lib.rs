//! Common utilities for the Sprout parser.
//!
//! This crate provides shared infrastructure used by the parser and its tools:
//! - **Warning System** - colored, de-duplicated terminal warnings
//! - **Source Locations** - mapping byte offsets back to lines and columns

pub mod location;
pub mod warning;

pub use location::SourceLocation;
