use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Elements whose grammar forbids a closing tag and children.
///
/// Matching is case-sensitive: `br` is void, `BR` is an ordinary element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum VoidElement {
    /// `<area>`
    Area,
    /// `<base>`
    Base,
    /// `<br>`
    Br,
    /// `<col>`
    Col,
    /// `<embed>`
    Embed,
    /// `<hr>`
    Hr,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<link>`
    Link,
    /// `<meta>`
    Meta,
    /// `<param>`
    Param,
    /// `<source>`
    Source,
    /// `<track>`
    Track,
    /// `<wbr>`
    Wbr,
}

impl VoidElement {
    /// Classify a tag name, returning `None` for non-void tags.
    #[must_use]
    pub fn classify(tag: &str) -> Option<Self> {
        Self::from_str(tag).ok()
    }

    /// The tag name as written in markup.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        self.into()
    }
}

/// Returns true if `tag` never admits children.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VoidElement::classify(tag).is_some()
}
