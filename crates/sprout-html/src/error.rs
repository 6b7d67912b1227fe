use strum_macros::IntoStaticStr;
use thiserror::Error;

use sprout_common::SourceLocation;

/// What went wrong. Every kind aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseErrorKind {
    /// `<>` or `</ >`: a tag without an identifier.
    #[error("expected a tag name")]
    EmptyTagName,
    /// `=` or a quote where an attribute name was expected.
    #[error("expected an attribute name")]
    EmptyAttributeName,
    /// A quoted attribute value missing its closing quote.
    #[error("unterminated quoted attribute value")]
    UnterminatedQuote,
    /// `</name` not followed by `>`.
    #[error("expected '>' to end the closing tag")]
    MalformedCloseTag,
    /// The innermost open element is not the one being closed.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedCloseTag {
        /// Tag of the innermost open element.
        expected: String,
        /// Tag named by the close tag.
        found: String,
    },
    /// End of input with this element still open.
    #[error("element <{0}> is never closed")]
    UnclosedElement(String),
    /// End of input inside this element's open tag.
    #[error("open tag <{0}> is missing its '>'")]
    UnclosedTag(String),
    /// A close tag at top level, with no element open.
    #[error("closing tag </{0}> has no matching open element")]
    UnexpectedCloseTag(String),
    /// Elements nested deeper than the configured limit.
    #[error("elements nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured `max_depth`.
        limit: usize,
    },
}

/// A parse failure and the byte offset at which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (at byte {offset})")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The failure kind.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset into the original input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Stable identifier for the kind, e.g. `mismatched-close-tag`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        (&self.kind).into()
    }

    /// Line and column of the failure in `source`, which must be the text
    /// that was parsed.
    #[must_use]
    pub fn location(&self, source: &str) -> SourceLocation {
        SourceLocation::from_offset(source, self.offset)
    }
}
