// SPDX-License-Identifier: Apache-2.0

//! Lookahead-only detection of which JSON value starts at a given offset.

use crate::input_buffer::InputBuffer;
use crate::shared::{is_delimiter, is_digit};

/// Refinements gathered while scanning a number lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFlags {
    /// Leading `-`.
    pub negative: bool,
    /// A `.` appeared in the mantissa.
    pub decimal: bool,
    /// An `e` / `E` marker appeared.
    pub exponent: bool,
}

impl NumberFlags {
    /// Whether the lexeme decodes to a floating value rather than an integer.
    pub const fn is_decimal(&self) -> bool {
        self.decimal || self.exponent
    }
}

/// The kind of value that begins at an offset.
///
/// The `Empty*` variants let the builder skip the child scan for `""`, `[]` and `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Number(NumberFlags),
    True,
    False,
    Null,
    String,
    EmptyString,
    Array,
    EmptyArray,
    Object,
    EmptyObject,
    Invalid,
}

impl Classification {
    /// The exact source length of the fixed-width forms.
    ///
    /// `0` for numbers, non-empty strings and aggregates, whose length is only
    /// known once they are decoded.
    pub const fn fixed_len(&self) -> usize {
        match self {
            Classification::True | Classification::Null => 4,
            Classification::False => 5,
            Classification::EmptyString
            | Classification::EmptyArray
            | Classification::EmptyObject => 2,
            _ => 0,
        }
    }
}

/// Classifies the value starting at `pos`. Does not consume anything.
///
/// `pos` must point at the first byte of a value, never at whitespace.
pub fn classify(input: &InputBuffer<'_>, pos: usize) -> Classification {
    let next = input.byte_at(pos.saturating_add(1));
    match input.byte_at(pos) {
        b'"' if next == b'"' => Classification::EmptyString,
        b'"' => Classification::String,
        b'[' if next == b']' => Classification::EmptyArray,
        b'[' => Classification::Array,
        b'{' if next == b'}' => Classification::EmptyObject,
        b'{' => Classification::Object,
        b'-' | b'0'..=b'9' => classify_number(input, pos),
        b't' => classify_literal(input, pos, b"true", Classification::True),
        b'f' => classify_literal(input, pos, b"false", Classification::False),
        b'n' => classify_literal(input, pos, b"null", Classification::Null),
        _ => Classification::Invalid,
    }
}

fn classify_literal(
    input: &InputBuffer<'_>,
    pos: usize,
    literal: &[u8],
    class: Classification,
) -> Classification {
    let spelled = literal
        .iter()
        .enumerate()
        .all(|(i, &expected)| input.byte_at(pos.saturating_add(i)) == expected);
    if spelled && is_delimiter(input.byte_at(pos.saturating_add(literal.len()))) {
        class
    } else {
        Classification::Invalid
    }
}

fn classify_number(input: &InputBuffer<'_>, pos: usize) -> Classification {
    let mut flags = NumberFlags::default();
    let mut cursor = pos;
    if input.byte_at(cursor) == b'-' {
        flags.negative = true;
        cursor += 1;
    }

    // Digit counts per part: integer, fraction, exponent
    let mut digits = [0usize; 3];
    loop {
        let byte = input.byte_at(cursor);
        match byte {
            _ if is_digit(byte) => {
                let part = if flags.exponent {
                    2
                } else if flags.decimal {
                    1
                } else {
                    0
                };
                digits[part] += 1;
            }
            b'.' => {
                if flags.decimal || flags.exponent {
                    return Classification::Invalid;
                }
                flags.decimal = true;
            }
            b'e' | b'E' => {
                if flags.exponent {
                    return Classification::Invalid;
                }
                flags.exponent = true;
                if matches!(input.byte_at(cursor + 1), b'+' | b'-') {
                    cursor += 1;
                }
            }
            _ if is_delimiter(byte) => break,
            _ => return Classification::Invalid,
        }
        cursor += 1;
    }

    let [integer, fraction, exponent] = digits;
    if integer == 0 || (flags.decimal && fraction == 0) || (flags.exponent && exponent == 0) {
        return Classification::Invalid;
    }
    Classification::Number(flags)
}
