//! Terminal rendering of parse failures.

use owo_colors::OwoColorize;
use sprout_common::location::line_at;
use sprout_html::ParseError;

/// Render `err` against the text it came from, rustc style:
///
/// ```text
/// error[mismatched-close-tag]: mismatched closing tag: expected </li>, found </ul>
///   --> page.html:1:12
///    |
///  1 | <ul><li>one</ul>
///    |            ^
/// ```
pub fn render(name: &str, source: &str, err: &ParseError) -> String {
    let location = err.location(source);
    let line_number = location.line.to_string();
    let gutter = " ".repeat(line_number.len());
    let caret_pad = " ".repeat(location.column - 1);

    let header = format!("error[{}]", err.code());
    let arrow = format!("{gutter}-->");
    let bar = format!("{gutter} |");
    let numbered = format!("{line_number} |");

    format!(
        "{}: {}\n {} {name}:{location}\n {}\n {} {}\n {} {caret_pad}{}",
        header.red().bold(),
        err.kind().bold(),
        arrow.blue().bold(),
        bar.blue().bold(),
        numbered.blue().bold(),
        line_at(source, err.offset()),
        bar.blue().bold(),
        "^".red().bold(),
    )
}
