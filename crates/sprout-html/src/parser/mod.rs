//! Tree construction and the document-level entry points.

mod tree_builder;

use sprout_dom::Document;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::tokenizer::Scanner;
use tree_builder::TreeBuilder;

/// Parses one markup fragment into a [`Document`].
///
/// ```ignore
/// let document = Parser::new("<p>Hi</p>")
///     .with_config(ParserConfig::default().with_max_depth(32))
///     .parse()?;
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    source: &'a str,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source` with the default configuration.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            config: ParserConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the parse.
    ///
    /// Leading whitespace is skipped, then nodes are parsed with no element
    /// open until the input is exhausted. Failures from any depth are
    /// returned unchanged; there is no partial result.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(self) -> Result<Document, ParseError> {
        let mut scanner = Scanner::new(self.source);
        scanner.trim_left();
        let children = TreeBuilder::new(scanner, self.config).parse_nodes(None, 0)?;
        Ok(Document::new(children))
    }
}

/// Parse `source` with the default configuration.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    Parser::new(source).parse()
}

/// Parse `source` with an explicit configuration.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Document, ParseError> {
    Parser::new(source).with_config(*config).parse()
}
