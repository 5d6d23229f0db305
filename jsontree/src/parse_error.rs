// SPDX-License-Identifier: Apache-2.0

/// What went wrong while building the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    /// No JSON value starts with this byte.
    InvalidToken,
    /// A `true` / `false` / `null` literal was misspelled or not properly delimited.
    InvalidLiteral,
    /// Malformed number lexeme.
    InvalidNumber,
    /// Integer outside the i64 range, or a decimal whose magnitude is not finite.
    NumericOverflow,
    /// `\u` not followed by four hex digits.
    InvalidUnicodeEscape,
    /// Content ended before the closing quote.
    UnterminatedString,
    /// Two array elements or object members without a separating comma.
    ExpectedComma,
    /// An object key not followed by a colon.
    ExpectedColon,
    /// A non-string token where an object key belongs.
    ExpectedObjectKey,
    /// A colon outside of the key/value boundary.
    UnexpectedColon,
    /// Content ended before the closing `]`.
    UnterminatedArray,
    /// Content ended before the closing `}`.
    UnterminatedObject,
    /// Nesting went past [`ParserConfig::max_depth`](crate::ParserConfig).
    MaxDepthReached,
    /// Non-whitespace bytes after the root value.
    TrailingContent,
    /// Input holds nothing but whitespace.
    EmptyDocument,
    /// A NUL-terminated buffer did not end with NUL.
    MissingSentinel,
}

/// Lexical errors come from a single lexeme, structural ones from token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Structural,
}

impl ErrKind {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrKind::InvalidToken
            | ErrKind::InvalidLiteral
            | ErrKind::InvalidNumber
            | ErrKind::NumericOverflow
            | ErrKind::InvalidUnicodeEscape
            | ErrKind::UnterminatedString => ErrorCategory::Lexical,
            ErrKind::ExpectedComma
            | ErrKind::ExpectedColon
            | ErrKind::ExpectedObjectKey
            | ErrKind::UnexpectedColon
            | ErrKind::UnterminatedArray
            | ErrKind::UnterminatedObject
            | ErrKind::MaxDepthReached
            | ErrKind::TrailingContent
            | ErrKind::EmptyDocument
            | ErrKind::MissingSentinel => ErrorCategory::Structural,
        }
    }
}

/// Error produced by [`try_parse`](crate::try_parse).
///
/// [`parse`](crate::parse) collapses every one of these into
/// [`Value::Invalid`](crate::Value::Invalid); this type keeps the detail.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrKind,
    character: u8,
    position: usize,
}

impl ParseError {
    pub fn new<T>(kind: ErrKind, character: u8, position: usize) -> Result<T, Self> {
        Err(Self::at(kind, character, position))
    }

    pub const fn at(kind: ErrKind, character: u8, position: usize) -> Self {
        Self {
            kind,
            character,
            position,
        }
    }

    pub const fn kind(&self) -> ErrKind {
        self.kind
    }

    /// The byte found at [`position`](Self::position); `0` at end of content.
    pub const fn character(&self) -> u8 {
        self.character
    }

    /// Byte offset into the input.
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl core::fmt::Debug for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?}({}) at {}",
            self.kind,
            self.character.escape_ascii(),
            self.position
        )
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let category = match self.category() {
            ErrorCategory::Lexical => "lexical",
            ErrorCategory::Structural => "structural",
        };
        write!(
            f,
            "{category} error {:?} at byte {} ('{}')",
            self.kind,
            self.position,
            self.character.escape_ascii()
        )
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructor() {
        let result: Result<(), ParseError> = ParseError::new(ErrKind::ExpectedComma, b'2', 3);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrKind::ExpectedComma);
        assert_eq!(error.character(), b'2');
        assert_eq!(error.position(), 3);
    }

    #[test]
    fn test_categories() {
        assert_eq!(ErrKind::InvalidLiteral.category(), ErrorCategory::Lexical);
        assert_eq!(
            ErrKind::UnterminatedString.category(),
            ErrorCategory::Lexical
        );
        assert_eq!(
            ErrKind::ExpectedObjectKey.category(),
            ErrorCategory::Structural
        );
        assert_eq!(
            ErrKind::MaxDepthReached.category(),
            ErrorCategory::Structural
        );
    }

    #[test]
    fn test_display_and_debug() {
        let error = ParseError::at(ErrKind::InvalidLiteral, b't', 7);
        assert_eq!(
            format!("{error}"),
            "lexical error InvalidLiteral at byte 7 ('t')"
        );
        assert_eq!(format!("{error:?}"), "InvalidLiteral(t) at 7");

        let error = ParseError::at(ErrKind::UnterminatedArray, 0, 4);
        assert_eq!(format!("{error:?}"), "UnterminatedArray(\\x00) at 4");
    }
}
