// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::classifier::NumberFlags;
use crate::input_buffer::InputBuffer;
use crate::parse_error::{ErrKind, ParseError};
use crate::shared::is_digit;
use crate::value::Value;

/// Decodes the number lexeme starting at `start`.
///
/// Returns the node and the exact number of source bytes the lexeme spans:
/// sign, digits, decimal point, exponent marker, exponent sign and exponent
/// digits. `flags` must come from classifying the same position.
pub fn decode_number(
    flags: NumberFlags,
    input: &InputBuffer<'_>,
    start: usize,
) -> Result<(Value, usize), ParseError> {
    if flags.is_decimal() {
        decode_decimal(input, start)
    } else {
        decode_integer(input, start)
    }
}

/// Accumulates an integer directly in i64.
///
/// Negative values are built downwards from zero so `i64::MIN` is reachable.
fn decode_integer(input: &InputBuffer<'_>, start: usize) -> Result<(Value, usize), ParseError> {
    let mut cursor = start;
    let negative = input.byte_at(cursor) == b'-';
    if negative {
        cursor += 1;
    }

    let mut result: i64 = 0;
    while is_digit(input.byte_at(cursor)) {
        let byte = input.byte_at(cursor);
        let digit = i64::from(byte - b'0');
        let next = result.checked_mul(10).and_then(|scaled| {
            if negative {
                scaled.checked_sub(digit)
            } else {
                scaled.checked_add(digit)
            }
        });
        result = match next {
            Some(value) => value,
            None => return ParseError::new(ErrKind::NumericOverflow, byte, cursor),
        };
        cursor += 1;
    }

    Ok((Value::Integer(result), cursor - start))
}

/// Finds the end of the lexeme, then hands the bytes to `f64::from_str`.
///
/// A value that does not fit in f64 is rejected rather than kept as infinity.
fn decode_decimal(input: &InputBuffer<'_>, start: usize) -> Result<(Value, usize), ParseError> {
    let mut cursor = start;
    if input.byte_at(cursor) == b'-' {
        cursor += 1;
    }
    while is_digit(input.byte_at(cursor)) || input.byte_at(cursor) == b'.' {
        cursor += 1;
    }
    if matches!(input.byte_at(cursor), b'e' | b'E') {
        cursor += 1;
        if matches!(input.byte_at(cursor), b'+' | b'-') {
            cursor += 1;
        }
        while is_digit(input.byte_at(cursor)) {
            cursor += 1;
        }
    }

    let lexeme = input
        .slice(start, cursor)
        .and_then(|bytes| core::str::from_utf8(bytes).ok());
    let value = match lexeme.map(f64::from_str) {
        Some(Ok(value)) => value,
        _ => return ParseError::new(ErrKind::InvalidNumber, input.byte_at(start), start),
    };
    if !value.is_finite() {
        return ParseError::new(ErrKind::NumericOverflow, input.byte_at(start), start);
    }
    Ok((Value::Decimal(value), cursor - start))
}
