/// The whitespace class: space, tab, newline and carriage return.
macro_rules! space_chars {
    () => {
        b' ' | b'\t' | b'\n' | b'\r'
    };
}

/// Stop set for tag names in open tags.
pub const TAG_NAME_STOP: &[u8] = b" \t\n\r/>";
/// Stop set for tag names in close tags.
pub const CLOSE_TAG_NAME_STOP: &[u8] = b" \t\n\r>";
/// Stop set for attribute names.
pub const ATTRIBUTE_NAME_STOP: &[u8] = b" \t\n\r=/>";
/// Stop set for unquoted attribute values.
pub const UNQUOTED_VALUE_STOP: &[u8] = b" \t\n\r/>";

const fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Strip leading whitespace.
#[must_use]
pub fn trim_left(text: &str) -> &str {
    text.trim_start_matches(is_whitespace_char)
}

/// Strip trailing whitespace.
#[must_use]
pub fn trim_right(text: &str) -> &str {
    text.trim_end_matches(is_whitespace_char)
}

/// Strip whitespace from both edges.
#[must_use]
pub fn trim(text: &str) -> &str {
    trim_left(trim_right(text))
}

/// Cursor over an immutable input.
///
/// All stop characters are ASCII, so every position the scanner stops at is
/// a UTF-8 character boundary and slices never split a character.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Start scanning at the beginning of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the cursor in the original input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Everything not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns true once the whole input is consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The next byte, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Whether the unconsumed input begins with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Step over the next byte. Only called on ASCII bytes.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consume `prefix` if the input begins with it.
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume up to, not including, the first byte in `stop`.
    ///
    /// Without a stop byte the rest of the input is consumed.
    pub fn read_until(&mut self, stop: &[u8]) -> &'a str {
        let start = self.pos;
        let len = self.source.as_bytes()[start..]
            .iter()
            .position(|byte| stop.contains(byte))
            .unwrap_or(self.source.len() - start);
        self.pos += len;
        &self.source[start..self.pos]
    }

    /// Skip leading whitespace.
    pub fn trim_left(&mut self) {
        while let Some(space_chars!()) = self.peek() {
            self.pos += 1;
        }
    }

    /// The unconsumed input with leading whitespace skipped, leaving the
    /// cursor where it is.
    #[must_use]
    pub fn lookahead(&self) -> &'a str {
        trim_left(self.rest())
    }
}
