//! Integration tests for the shared utilities.

use sprout_common::SourceLocation;
use sprout_common::location::line_at;
use sprout_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_location_first_line() {
    let loc = SourceLocation::from_offset("<a></a>", 3);
    assert_eq!(loc, SourceLocation { line: 1, column: 4 });
}

#[test]
fn test_location_after_newlines() {
    let source = "<ul>\n  <li>one\n</ul>";
    let offset = source.find("</ul>").unwrap();
    let loc = SourceLocation::from_offset(source, offset);
    assert_eq!(loc.line, 3);
    assert_eq!(loc.column, 1);
    assert_eq!(loc.to_string(), "3:1");
}

#[test]
fn test_location_counts_characters() {
    let source = "<p>héllo <b>";
    let offset = source.find("<b>").unwrap();
    let loc = SourceLocation::from_offset(source, offset);
    assert_eq!(loc.column, 10);
}

#[test]
fn test_location_clamps_past_end() {
    let loc = SourceLocation::from_offset("ab\ncd", 100);
    assert_eq!(loc, SourceLocation { line: 2, column: 3 });
}

#[test]
fn test_line_at() {
    let source = "first\r\nsecond line\nthird";
    assert_eq!(line_at(source, 0), "first");
    assert_eq!(line_at(source, 9), "second line");
    assert_eq!(line_at(source, source.len()), "third");
}

#[test]
fn test_warn_once_records_message() {
    clear_warnings();
    assert!(!has_warned("test", "something odd"));
    warn_once("test", "something odd");
    warn_once("test", "something odd");
    assert!(has_warned("test", "something odd"));
    assert!(!has_warned("other", "something odd"));
}
