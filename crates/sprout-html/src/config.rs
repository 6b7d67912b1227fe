/// Nesting limit used when no configuration is given.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest element nesting accepted. Top-level elements are at depth 1,
    /// so a limit of 0 rejects every element. Each level of nesting costs
    /// one recursion frame on the calling thread's stack, so the limit must
    /// stay small enough for that stack to hold.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Replace the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
