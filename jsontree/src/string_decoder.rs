// SPDX-License-Identifier: Apache-2.0

//! Two-pass decoding of quoted strings.
//!
//! The first pass measures the decoded length, the second fills a buffer
//! allocated exactly once. Both passes share one walker, so they agree on
//! where the string ends.

use alloc::vec::Vec;

use crate::escape_processor::EscapeProcessor;
use crate::input_buffer::InputBuffer;
use crate::parse_error::{ErrKind, ParseError};

/// Walks the string whose opening quote sits at `start`, handing every
/// decoded run of bytes to `emit`.
///
/// Returns the source length including both quotes.
fn walk<F>(input: &InputBuffer<'_>, start: usize, mut emit: F) -> Result<usize, ParseError>
where
    F: FnMut(&[u8]),
{
    let mut cursor = start + 1;
    loop {
        if input.is_past_content(cursor) {
            return ParseError::new(ErrKind::UnterminatedString, input.byte_at(start), start);
        }
        match input.byte_at(cursor) {
            b'"' => return Ok(cursor + 1 - start),
            b'\\' => {
                let escape = EscapeProcessor::unescape(input, cursor)?;
                emit(escape.as_bytes());
                cursor += escape.consumed();
            }
            _ => {
                let run_start = cursor;
                while !input.is_past_content(cursor)
                    && !matches!(input.byte_at(cursor), b'"' | b'\\')
                {
                    cursor += 1;
                }
                if let Some(run) = input.slice(run_start, cursor) {
                    emit(run);
                }
            }
        }
    }
}

/// Decoded length of the string at `start`, without allocating.
pub fn decoded_len(input: &InputBuffer<'_>, start: usize) -> Result<usize, ParseError> {
    let mut length = 0;
    walk(input, start, |bytes| length += bytes.len())?;
    Ok(length)
}

/// Decodes the string whose opening quote sits at `start`.
///
/// Returns the decoded bytes and the source length including both quotes.
/// Bytes other than escapes are copied through unchanged.
pub fn decode_string(
    input: &InputBuffer<'_>,
    start: usize,
) -> Result<(Vec<u8>, usize), ParseError> {
    let length = decoded_len(input, start)?;
    let mut bytes = Vec::with_capacity(length);
    let consumed = walk(input, start, |run| bytes.extend_from_slice(run))?;
    debug_assert_eq!(bytes.len(), length);
    Ok((bytes, consumed))
}
