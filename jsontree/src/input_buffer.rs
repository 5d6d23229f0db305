// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrKind, ParseError};
use crate::shared::{is_whitespace, SENTINEL};

/// Read-only view of a fully materialised JSON document.
///
/// Every position at or past the end of content reads as the NUL sentinel, so
/// lookahead may probe beyond the last byte without bounds bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct InputBuffer<'a> {
    data: &'a [u8],
}

impl<'a> InputBuffer<'a> {
    /// Wraps `data`, which must not include a trailing sentinel.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Wraps a buffer whose last byte is the NUL sentinel.
    ///
    /// The sentinel is verified and excluded from the content.
    pub fn from_nul_terminated(buffer: &'a [u8]) -> Result<Self, ParseError> {
        match buffer.split_last() {
            Some((&SENTINEL, content)) => Ok(Self::new(content)),
            Some((&other, _)) => {
                ParseError::new(ErrKind::MissingSentinel, other, buffer.len().saturating_sub(1))
            }
            None => ParseError::new(ErrKind::MissingSentinel, SENTINEL, 0),
        }
    }

    /// The byte at `pos`, or [`SENTINEL`] past the end of content.
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.data.get(pos).copied().unwrap_or(SENTINEL)
    }

    pub fn is_past_content(&self, pos: usize) -> bool {
        pos >= self.data.len()
    }

    /// Gets a slice of the content from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.data.get(start..end)
    }

    /// First position at or after `pos` that is not whitespace.
    pub fn skip_whitespace(&self, mut pos: usize) -> usize {
        while is_whitespace(self.byte_at(pos)) {
            pos = pos.saturating_add(1);
        }
        pos
    }

    /// Length of the content, sentinel excluded.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
