// SPDX-License-Identifier: Apache-2.0

use crate::input_buffer::InputBuffer;
use crate::parse_error::{ErrKind, ParseError};

/// Output of decoding one backslash sequence.
///
/// Holds at most two bytes, plus how many source bytes the sequence spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unescaped {
    bytes: [u8; 2],
    produced: usize,
    consumed: usize,
}

impl Unescaped {
    const fn one(byte: u8, consumed: usize) -> Self {
        Self {
            bytes: [byte, 0],
            produced: 1,
            consumed,
        }
    }

    const fn two(first: u8, second: u8, consumed: usize) -> Self {
        Self {
            bytes: [first, second],
            produced: 2,
            consumed,
        }
    }

    /// Decoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.produced]
    }

    /// Source bytes covered, backslash included.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

/// Pure functions for JSON escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or None when `escape_char` is not one of the
    /// two-character escapes.
    pub const fn process_simple_escape(escape_char: u8) -> Option<u8> {
        match escape_char {
            b'"' => Some(b'"'),
            b'\\' => Some(b'\\'),
            b'/' => Some(b'/'),
            b'b' => Some(0x08),
            b'f' => Some(0x0C),
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            b't' => Some(b'\t'),
            _ => None,
        }
    }

    /// Numeric value (0-15) of a hexadecimal digit.
    pub const fn hex_value(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    /// Decodes the four hex digits of a `\uXXXX` escape into raw bytes.
    ///
    /// The code unit is emitted as its big-endian byte pair, not as UTF-8, and
    /// surrogates are not combined. When the high pair of digits is `00`
    /// only the low byte is emitted.
    pub fn process_unicode_escape(hex: &[u8; 4]) -> Option<([u8; 2], usize)> {
        let mut nibbles = [0u8; 4];
        for (nibble, &digit) in nibbles.iter_mut().zip(hex) {
            *nibble = Self::hex_value(digit)?;
        }
        let high = (nibbles[0] << 4) | nibbles[1];
        let low = (nibbles[2] << 4) | nibbles[3];
        if hex[0] == b'0' && hex[1] == b'0' {
            Some(([low, 0], 1))
        } else {
            Some(([high, low], 2))
        }
    }

    /// Decodes the escape sequence whose backslash sits at `pos`.
    ///
    /// A backslash followed by anything other than a known escape decodes to a
    /// literal backslash and consumes only itself, so the following byte is
    /// read again as ordinary content.
    pub fn unescape(input: &InputBuffer<'_>, pos: usize) -> Result<Unescaped, ParseError> {
        let escape_char = input.byte_at(pos + 1);
        if let Some(byte) = Self::process_simple_escape(escape_char) {
            return Ok(Unescaped::one(byte, 2));
        }
        if escape_char != b'u' {
            return Ok(Unescaped::one(b'\\', 1));
        }

        let hex_start = pos + 2;
        let hex = [
            input.byte_at(hex_start),
            input.byte_at(hex_start + 1),
            input.byte_at(hex_start + 2),
            input.byte_at(hex_start + 3),
        ];
        match Self::process_unicode_escape(&hex) {
            Some(([first, _], 1)) => Ok(Unescaped::one(first, 6)),
            Some(([first, second], _)) => Ok(Unescaped::two(first, second, 6)),
            None => {
                let bad = hex
                    .iter()
                    .position(|&digit| Self::hex_value(digit).is_none())
                    .unwrap_or(0);
                ParseError::new(ErrKind::InvalidUnicodeEscape, hex[bad], hex_start + bad)
            }
        }
    }
}
