//! Minimal markup serialization and an indented debug view.
//!
//! The markup writer is the inverse of the parser up to quoting style and
//! insignificant whitespace: parsing the output yields a structurally equal
//! tree. Values are never entity-encoded. A value holding both quote
//! characters is written unquoted when it can be; otherwise it cannot be
//! written back faithfully.

use std::fmt;

use crate::node::{Attr, AttrValue, Document, ElementNode, Node};

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            AttrValue::True => f.write_str(self.name()),
            AttrValue::Text(value) if value.contains('"') && !value.contains('\'') => {
                write!(f, "{}='{value}'", self.name())
            }
            AttrValue::Text(value) if value.contains('"') && is_unquotable(value) => {
                write!(f, "{}={value}", self.name())
            }
            AttrValue::Text(value) => write!(f, "{}=\"{value}\"", self.name()),
        }
    }
}

/// Whether `value` reads back unchanged without quotes.
fn is_unquotable(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(['"', '\''])
        && !value.contains([' ', '\t', '\n', '\r', '/', '>'])
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        for attr in self.attrs() {
            write!(f, " {attr}")?;
        }
        f.write_str(">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in self.children() {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text.value()),
            Self::Element(element) => write!(f, "{element}"),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.children() {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

impl Node {
    /// Serialize this subtree as minimal markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl Document {
    /// Serialize the document as minimal markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

struct TreeView<'a>(&'a Document);

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Document")?;
        for child in self.0.children() {
            write_tree_node(f, child, 1)?;
        }
        Ok(())
    }
}

fn write_tree_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Element(element) => {
            if element.attrs().is_empty() {
                writeln!(f, "{prefix}<{}>", element.tag())?;
            } else {
                let attrs: Vec<String> = element.attrs().iter().map(ToString::to_string).collect();
                writeln!(f, "{prefix}<{} {}>", element.tag(), attrs.join(" "))?;
            }
            for child in element.children() {
                write_tree_node(f, child, indent + 1)?;
            }
        }
        Node::Text(text) => {
            let display = text.value().replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(f, "{prefix}\"{display}\"")?;
        }
    }
    Ok(())
}

/// Render the document as an indented outline, one node per line.
///
/// Spaces in text are shown as `·` and newlines as `\n` so whitespace is
/// visible.
#[must_use]
pub fn print_tree(document: &Document) -> String {
    TreeView(document).to_string()
}
