use serde::{Serialize, Serializer};

use crate::void::is_void_element;

/// The value of an attribute.
///
/// A valueless attribute such as `disabled` carries [`AttrValue::True`]
/// rather than a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    /// The characters between the quotes (or the unquoted run), undecoded.
    Text(String),
    /// Boolean attribute written without `=`.
    True,
}

impl AttrValue {
    /// The textual value, or `None` for a boolean attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::True => None,
        }
    }

    /// Returns true for a boolean (valueless) attribute.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::True)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::True => serializer.serialize_bool(true),
        }
    }
}

/// An attribute on an element, in the order it was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attr {
    name: String,
    value: AttrValue,
}

impl Attr {
    /// Create an attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a boolean attribute.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::True,
        }
    }

    /// The attribute name, case preserved.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value.
    #[must_use]
    pub const fn value(&self) -> &AttrValue {
        &self.value
    }
}

/// Literal character data between tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    value: String,
}

impl TextNode {
    /// Create a text node holding `value` verbatim.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The original, untrimmed text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementNode {
    tag: String,
    attrs: Vec<Attr>,
    children: Vec<Node>,
}

impl ElementNode {
    /// Create an element.
    ///
    /// Void elements never hold children, so `children` is discarded when
    /// `tag` names one.
    #[must_use]
    pub fn new(tag: impl Into<String>, attrs: Vec<Attr>, children: Vec<Node>) -> Self {
        let tag = tag.into();
        let children = if is_void_element(&tag) {
            Vec::new()
        } else {
            children
        };
        Self {
            tag,
            attrs,
            children,
        }
    }

    /// The tag name, case preserved.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in source order, duplicates included.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Child nodes in source order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The first attribute named `name`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(Attr::value)
    }

    /// Every attribute named `name`, in source order.
    pub fn attrs_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AttrValue> + 'a {
        self.attrs
            .iter()
            .filter(move |attr| attr.name == name)
            .map(Attr::value)
    }

    /// Returns true if at least one attribute is named `name`.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    /// The `id` attribute's text, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id").and_then(AttrValue::as_str)
    }

    /// Whitespace-separated class names from the `class` attribute.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .and_then(AttrValue::as_str)
            .map(|classes| classes.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// Returns true if this element's tag is in the void table.
    #[must_use]
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

/// A node in the tree: either a text run or an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Character data.
    Text(TextNode),
    /// An element and its subtree.
    Element(ElementNode),
}

impl Node {
    /// The element payload, if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.value()),
            Self::Element(_) => None,
        }
    }

    /// Child nodes; always empty for text.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => element.children(),
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.value.clone(),
            Self::Element(element) => element.text_content(),
        }
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

/// The root of a parsed fragment. It has no tag or attributes of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "document")]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    /// Wrap top-level nodes into a document.
    #[must_use]
    pub const fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Top-level nodes in source order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns true if the document holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The first top-level element.
    #[must_use]
    pub fn document_element(&self) -> Option<&ElementNode> {
        self.children.iter().find_map(Node::as_element)
    }

    /// Every node in depth-first pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// Every element whose tag is exactly `tag`, in document order.
    pub fn elements_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a ElementNode> + 'a {
        self.descendants()
            .filter_map(Node::as_element)
            .filter(move |element| element.tag == tag)
    }

    /// Concatenated text of every text node in the document.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Unwrap into the top-level nodes.
    #[must_use]
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(&text.value),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

/// Depth-first pre-order iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    fn new(roots: &'a [Node]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
