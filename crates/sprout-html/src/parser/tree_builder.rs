use sprout_dom::{ElementNode, Node, TextNode};

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::tokenizer::scanner::trim;
use crate::tokenizer::{Scanner, parse_close_tag, parse_open_tag};

/// Recursive-descent tree construction.
///
/// Each call to [`TreeBuilder::parse_nodes`] is one frame, armed with the tag
/// whose close ends it. Recursion depth equals element nesting depth and is
/// capped by [`ParserConfig::max_depth`].
pub(crate) struct TreeBuilder<'a> {
    scanner: Scanner<'a>,
    config: ParserConfig,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) const fn new(scanner: Scanner<'a>, config: ParserConfig) -> Self {
        Self { scanner, config }
    }

    /// Parse sibling nodes until the close tag for `armed`, or until end of
    /// input when nothing is armed.
    ///
    /// `depth` is the nesting depth of the frame's own element (0 at top
    /// level).
    pub(crate) fn parse_nodes(
        &mut self,
        armed: Option<&str>,
        depth: usize,
    ) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();

        loop {
            // Dispatch on the next construct, but leave leading whitespace in
            // place so a text run keeps it verbatim.
            let next = self.scanner.lookahead();

            if next.is_empty() {
                return match armed {
                    Some(tag) => Err(ParseError::new(
                        ParseErrorKind::UnclosedElement(tag.to_string()),
                        self.scanner.offset() + self.scanner.rest().len(),
                    )),
                    None => Ok(children),
                };
            }

            if next.starts_with("</") {
                self.scanner.trim_left();
                let close_start = self.scanner.offset();
                let found = parse_close_tag(&mut self.scanner)?;
                return match armed {
                    Some(expected) if expected == found => Ok(children),
                    Some(expected) => Err(ParseError::new(
                        ParseErrorKind::MismatchedCloseTag {
                            expected: expected.to_string(),
                            found: found.to_string(),
                        },
                        close_start,
                    )),
                    None => Err(ParseError::new(
                        ParseErrorKind::UnexpectedCloseTag(found.to_string()),
                        close_start,
                    )),
                };
            }

            if next.starts_with('<') {
                self.scanner.trim_left();
                children.push(self.parse_element(depth + 1)?);
                continue;
            }

            let raw = self.scanner.read_until(b"<");
            if !trim(raw).is_empty() {
                children.push(Node::Text(TextNode::new(raw)));
            }
        }
    }

    /// Parse one element whose open tag starts at the cursor.
    fn parse_element(&mut self, depth: usize) -> Result<Node, ParseError> {
        let open_start = self.scanner.offset();
        let tag = parse_open_tag(&mut self.scanner)?;

        if depth > self.config.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                open_start,
            ));
        }

        let children = if tag.self_closing {
            Vec::new()
        } else {
            self.parse_nodes(Some(tag.name), depth)?
        };
        Ok(Node::Element(ElementNode::new(tag.name, tag.attrs, children)))
    }
}
