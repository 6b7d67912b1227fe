use sprout_dom::Attr;

use super::scanner::{ATTRIBUTE_NAME_STOP, Scanner, UNQUOTED_VALUE_STOP};
use crate::error::{ParseError, ParseErrorKind};

/// Consume one `name[=value]` pair.
///
/// Leading whitespace is skipped. The value may be double-quoted,
/// single-quoted or unquoted; an attribute without `=` is boolean and only
/// its name is consumed. Values are kept exactly as written.
///
/// # Errors
///
/// - [`ParseErrorKind::EmptyAttributeName`] if no name precedes `=`, a quote,
///   `/` or `>`.
/// - [`ParseErrorKind::UnterminatedQuote`] if a quoted value runs to the end
///   of input.
pub fn parse_one_attribute(scanner: &mut Scanner<'_>) -> Result<Attr, ParseError> {
    scanner.trim_left();

    let name_start = scanner.offset();
    if matches!(scanner.peek(), Some(b'"' | b'\'')) {
        return Err(ParseError::new(
            ParseErrorKind::EmptyAttributeName,
            name_start,
        ));
    }
    let name = scanner.read_until(ATTRIBUTE_NAME_STOP);
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyAttributeName,
            name_start,
        ));
    }

    // Whitespace after the name is only consumed when `=` follows it.
    let mut after_name = scanner.clone();
    after_name.trim_left();
    if !after_name.eat("=") {
        return Ok(Attr::boolean(name));
    }
    *scanner = after_name;
    scanner.trim_left();

    let value = parse_value(scanner)?;
    Ok(Attr::new(name, value))
}

fn parse_value<'a>(scanner: &mut Scanner<'a>) -> Result<&'a str, ParseError> {
    match scanner.peek() {
        Some(quote @ (b'"' | b'\'')) => {
            let quote_start = scanner.offset();
            scanner.advance();
            let value = scanner.read_until(&[quote]);
            if scanner.is_at_end() {
                return Err(ParseError::new(
                    ParseErrorKind::UnterminatedQuote,
                    quote_start,
                ));
            }
            // closing quote
            scanner.advance();
            Ok(value)
        }
        _ => Ok(scanner.read_until(UNQUOTED_VALUE_STOP)),
    }
}
