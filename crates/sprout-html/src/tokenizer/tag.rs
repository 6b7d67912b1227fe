use sprout_dom::{Attr, VoidElement};

use super::attribute::parse_one_attribute;
use super::scanner::{CLOSE_TAG_NAME_STOP, Scanner, TAG_NAME_STOP};
use crate::error::{ParseError, ParseErrorKind};

/// A fully consumed open tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'a> {
    /// Tag name as written.
    pub name: &'a str,
    /// Attributes in source order.
    pub attrs: Vec<Attr>,
    /// Set for `/>` and for void elements; such tags never get children.
    pub self_closing: bool,
}

/// Consume `<name attr*>` or `<name attr*/>`.
///
/// Whitespace may separate `<` from the name.
///
/// The tag is classified against the void table as soon as its name is read.
/// Self-closing is decided exactly where the terminator is consumed: a
/// trailing `/>` or a void name marks the tag self-closing.
///
/// # Errors
///
/// - [`ParseErrorKind::EmptyTagName`] if no name follows `<`.
/// - [`ParseErrorKind::UnclosedTag`] if input ends before `>` or `/>`.
/// - Any error from [`parse_one_attribute`].
pub fn parse_open_tag<'a>(scanner: &mut Scanner<'a>) -> Result<OpenTag<'a>, ParseError> {
    let start = scanner.offset();
    if !scanner.eat("<") {
        return Err(ParseError::new(ParseErrorKind::EmptyTagName, start));
    }
    scanner.trim_left();
    let name = scanner.read_until(TAG_NAME_STOP);
    if name.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyTagName, start));
    }
    let void = VoidElement::classify(name);

    let mut attrs = Vec::new();
    let explicit_self_close = loop {
        scanner.trim_left();
        if scanner.eat("/>") {
            break true;
        }
        if scanner.eat(">") {
            break false;
        }
        if scanner.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedTag(name.to_string()),
                scanner.offset(),
            ));
        }
        attrs.push(parse_one_attribute(scanner)?);
    };

    Ok(OpenTag {
        name,
        attrs,
        self_closing: explicit_self_close || void.is_some(),
    })
}

/// Consume `</name>`, allowing whitespace around the name.
///
/// # Errors
///
/// - [`ParseErrorKind::EmptyTagName`] if no name follows `</`.
/// - [`ParseErrorKind::MalformedCloseTag`] if the name is not followed by `>`.
pub fn parse_close_tag<'a>(scanner: &mut Scanner<'a>) -> Result<&'a str, ParseError> {
    let start = scanner.offset();
    if !scanner.eat("</") {
        return Err(ParseError::new(ParseErrorKind::MalformedCloseTag, start));
    }
    scanner.trim_left();
    let name = scanner.read_until(CLOSE_TAG_NAME_STOP);
    if name.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyTagName, start));
    }
    scanner.trim_left();
    if !scanner.eat(">") {
        return Err(ParseError::new(
            ParseErrorKind::MalformedCloseTag,
            scanner.offset(),
        ));
    }
    Ok(name)
}
