//! Document tree for the Sprout parser.
//!
//! # Design
//!
//! The tree is a strict ownership hierarchy: a [`Document`] owns its child
//! [`Node`]s and every [`ElementNode`] owns its children. There are no parent
//! pointers and no sharing, so dropping the document releases the whole tree.
//!
//! Nodes are immutable once built. Fields are private and only read
//! accessors are exposed; the parser assembles nodes bottom-up through the
//! constructors.

/// Markup and debug renderings of the tree.
pub mod render;
/// The static table of void elements.
pub mod void;

mod node;

pub use node::{Attr, AttrValue, Descendants, Document, ElementNode, Node, TextNode};
pub use render::print_tree;
pub use void::{VoidElement, is_void_element};
