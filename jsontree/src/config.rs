// SPDX-License-Identifier: Apache-2.0

/// Nesting limit used by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for a single parse.
///
/// ```
/// use jsontree::{try_parse_with_config, ErrKind, ParserConfig};
///
/// let config = ParserConfig::new().with_max_depth(2);
/// assert!(try_parse_with_config(b"[[1]]", &config).is_ok());
/// let error = try_parse_with_config(b"[[[1]]]", &config).unwrap_err();
/// assert_eq!(error.kind(), ErrKind::MaxDepthReached);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of arrays and objects; the root aggregate is 1.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
