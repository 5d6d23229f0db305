// SPDX-License-Identifier: Apache-2.0

//! Recursive construction of the value tree.
//!
//! Each step classifies the byte at the current offset, builds the value that
//! starts there and reports how many bytes it spanned. Aggregates loop over
//! their children with a small state machine. Any error unwinds through every
//! enclosing aggregate, dropping what was built so far.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::classifier::{classify, Classification};
use crate::config::ParserConfig;
use crate::dyn_array::DynArray;
use crate::input_buffer::InputBuffer;
use crate::number_decoder::decode_number;
use crate::parse_error::{ErrKind, ParseError};
use crate::shared::SENTINEL;
use crate::string_decoder::decode_string;
use crate::value::{Object, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    /// Right after `[`.
    Open,
    /// After a `,`; a `,` or `]` here stands for an elided element.
    AwaitingElement,
    AwaitingCommaOrClose,
}

#[derive(Debug)]
enum ObjectState {
    AwaitingKey,
    AwaitingColon(Vec<u8>),
    AwaitingValue(Vec<u8>),
    AwaitingCommaOrClose,
}

pub struct TreeBuilder<'a> {
    input: InputBuffer<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(input: InputBuffer<'a>, config: &ParserConfig) -> Self {
        Self {
            input,
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    /// Builds the single root value; only whitespace may surround it.
    pub fn build_document(&mut self) -> Result<Value, ParseError> {
        let start = self.input.skip_whitespace(0);
        if self.input.is_past_content(start) {
            return ParseError::new(ErrKind::EmptyDocument, SENTINEL, start);
        }

        let class = classify(&self.input, start);
        let (value, consumed) = self.build(class, start)?;

        let end = self.input.skip_whitespace(start + consumed);
        if !self.input.is_past_content(end) {
            return ParseError::new(ErrKind::TrailingContent, self.input.byte_at(end), end);
        }
        debug!(
            "document finished: {:?} root spanning bytes {}..{}",
            value.kind(),
            start,
            start + consumed
        );
        Ok(value)
    }

    /// Builds the value classified as `class` at `start`.
    ///
    /// Returns the node and the number of source bytes it spans.
    pub fn build(
        &mut self,
        class: Classification,
        start: usize,
    ) -> Result<(Value, usize), ParseError> {
        match class {
            Classification::Number(flags) => decode_number(flags, &self.input, start),
            Classification::String => {
                let (bytes, consumed) = decode_string(&self.input, start)?;
                Ok((Value::String(bytes), consumed))
            }
            Classification::EmptyString => {
                Ok((Value::String(Vec::new()), class.fixed_len()))
            }
            Classification::True => Ok((Value::Boolean(true), class.fixed_len())),
            Classification::False => Ok((Value::Boolean(false), class.fixed_len())),
            Classification::Null => Ok((Value::Null, class.fixed_len())),
            Classification::EmptyArray => {
                self.descend(start)?;
                self.ascend();
                Ok((Value::Array(DynArray::new()), class.fixed_len()))
            }
            Classification::EmptyObject => {
                self.descend(start)?;
                self.ascend();
                Ok((Value::Object(Object::new()), class.fixed_len()))
            }
            Classification::Array => {
                self.descend(start)?;
                let result = self.build_array(start);
                self.ascend();
                result.inspect_err(|error| {
                    debug!("discarding array opened at {start}: {error}");
                })
            }
            Classification::Object => {
                self.descend(start)?;
                let result = self.build_object(start);
                self.ascend();
                result.inspect_err(|error| {
                    debug!("discarding object opened at {start}: {error}");
                })
            }
            Classification::Invalid => Err(self.invalid_lexeme(start)),
        }
    }

    fn build_array(&mut self, start: usize) -> Result<(Value, usize), ParseError> {
        let mut items = DynArray::new();
        let mut state = ArrayState::Open;
        let mut cursor = start + 1;
        loop {
            cursor = self.input.skip_whitespace(cursor);
            if self.input.is_past_content(cursor) {
                return ParseError::new(ErrKind::UnterminatedArray, SENTINEL, cursor);
            }
            let byte = self.input.byte_at(cursor);
            state = match (state, byte) {
                (_, b']') => {
                    if state == ArrayState::AwaitingElement {
                        items.push(Value::Null);
                    }
                    cursor += 1;
                    break;
                }
                (ArrayState::AwaitingCommaOrClose, b',') => {
                    cursor += 1;
                    ArrayState::AwaitingElement
                }
                (ArrayState::AwaitingCommaOrClose, _) => {
                    return ParseError::new(ErrKind::ExpectedComma, byte, cursor);
                }
                (_, b',') => {
                    items.push(Value::Null);
                    cursor += 1;
                    ArrayState::AwaitingElement
                }
                _ => {
                    let class = classify(&self.input, cursor);
                    let (item, consumed) = self.build(class, cursor)?;
                    items.push(item);
                    cursor += consumed;
                    ArrayState::AwaitingCommaOrClose
                }
            };
        }
        Ok((Value::Array(items), cursor - start))
    }

    fn build_object(&mut self, start: usize) -> Result<(Value, usize), ParseError> {
        let mut object = Object::new();
        let mut state = ObjectState::AwaitingKey;
        let mut cursor = start + 1;
        loop {
            cursor = self.input.skip_whitespace(cursor);
            if self.input.is_past_content(cursor) {
                return ParseError::new(ErrKind::UnterminatedObject, SENTINEL, cursor);
            }
            let byte = self.input.byte_at(cursor);
            state = match (state, byte) {
                (ObjectState::AwaitingKey | ObjectState::AwaitingCommaOrClose, b'}') => {
                    cursor += 1;
                    break;
                }
                (ObjectState::AwaitingKey, b',') => {
                    cursor += 1;
                    ObjectState::AwaitingKey
                }
                (ObjectState::AwaitingKey, b'"') => {
                    let (key, consumed) = decode_string(&self.input, cursor)?;
                    cursor += consumed;
                    ObjectState::AwaitingColon(key)
                }
                (ObjectState::AwaitingKey | ObjectState::AwaitingValue(_), b':') => {
                    return ParseError::new(ErrKind::UnexpectedColon, byte, cursor);
                }
                (ObjectState::AwaitingKey, _) => {
                    return ParseError::new(ErrKind::ExpectedObjectKey, byte, cursor);
                }
                (ObjectState::AwaitingColon(key), b':') => {
                    cursor += 1;
                    ObjectState::AwaitingValue(key)
                }
                (ObjectState::AwaitingColon(_), _) => {
                    return ParseError::new(ErrKind::ExpectedColon, byte, cursor);
                }
                (ObjectState::AwaitingValue(key), b',') => {
                    object.push(key, Value::Null);
                    cursor += 1;
                    ObjectState::AwaitingKey
                }
                (ObjectState::AwaitingValue(key), b'}') => {
                    object.push(key, Value::Null);
                    cursor += 1;
                    break;
                }
                (ObjectState::AwaitingValue(key), _) => {
                    let class = classify(&self.input, cursor);
                    let (value, consumed) = self.build(class, cursor)?;
                    object.push(key, value);
                    cursor += consumed;
                    ObjectState::AwaitingCommaOrClose
                }
                (ObjectState::AwaitingCommaOrClose, b',') => {
                    cursor += 1;
                    ObjectState::AwaitingKey
                }
                (ObjectState::AwaitingCommaOrClose, _) => {
                    return ParseError::new(ErrKind::ExpectedComma, byte, cursor);
                }
            };
        }
        Ok((Value::Object(object), cursor - start))
    }

    fn descend(&mut self, start: usize) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return ParseError::new(ErrKind::MaxDepthReached, self.input.byte_at(start), start);
        }
        self.depth += 1;
        trace!("descending at {start} to depth {}", self.depth);
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Names the error for a lexeme the classifier rejected, by its lead byte.
    fn invalid_lexeme(&self, pos: usize) -> ParseError {
        let byte = self.input.byte_at(pos);
        let kind = match byte {
            b'-' | b'0'..=b'9' => ErrKind::InvalidNumber,
            b't' | b'f' | b'n' => ErrKind::InvalidLiteral,
            _ => ErrKind::InvalidToken,
        };
        ParseError::at(kind, byte, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn build(json: &[u8]) -> Result<Value, ParseError> {
        build_with_depth(json, ParserConfig::default().max_depth)
    }

    fn build_with_depth(json: &[u8], max_depth: usize) -> Result<Value, ParseError> {
        let config = ParserConfig::new().with_max_depth(max_depth);
        TreeBuilder::new(InputBuffer::new(json), &config).build_document()
    }

    fn array(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(items.into_iter().collect())
    }

    fn error_at(json: &[u8]) -> (ErrKind, usize) {
        let error = build(json).unwrap_err();
        (error.kind(), error.position())
    }

    #[test]
    fn test_root_scalars() {
        assert_eq!(build(b"0"), Ok(Value::Integer(0)));
        assert_eq!(build(b" -12.5e1 "), Ok(Value::Decimal(-125.0)));
        assert_eq!(build(b"true"), Ok(Value::Boolean(true)));
        assert_eq!(build(b"\nfalse\t"), Ok(Value::Boolean(false)));
        assert_eq!(build(b"null"), Ok(Value::Null));
        assert_eq!(build(br#""""#), Ok(Value::from("")));
        assert_eq!(build(br#" "abc" "#), Ok(Value::from("abc")));
    }

    #[test]
    fn test_array_elision() {
        let one = || Value::Integer(1);
        assert_eq!(
            build(b"[1,,3]"),
            Ok(array([one(), Value::Null, Value::Integer(3)]))
        );
        assert_eq!(
            build(b"[1,2,]"),
            Ok(array([one(), Value::Integer(2), Value::Null]))
        );
        assert_eq!(build(b"[,1]"), Ok(array([Value::Null, one()])));
        assert_eq!(build(b"[ , ]"), Ok(array([Value::Null, Value::Null])));
        assert_eq!(build(b"[ ]"), Ok(array([])));
    }

    #[test]
    fn test_nested_lengths_line_up() {
        let value = build(br#" [ [1] , {"a" : [] , "b":-2}, "x" ] "#).unwrap();
        assert_eq!(value.array_len(), 3);
        assert_eq!(value.get_index(0), Some(&array([Value::Integer(1)])));
        let object = value.get_index(1).unwrap();
        assert_eq!(object.get_member(b"a"), Some(&array([])));
        assert_eq!(object.get_member(b"b"), Some(&Value::Integer(-2)));
        assert_eq!(value.get_index(2), Some(&Value::from("x")));
    }

    #[test]
    fn test_fixed_width_siblings() {
        let value = build(br#"[true,false,null,"",[],{},7]"#).unwrap();
        assert_eq!(value.array_len(), 7);
        assert_eq!(value.get_index(0), Some(&Value::Boolean(true)));
        assert_eq!(value.get_index(1), Some(&Value::Boolean(false)));
        assert_eq!(value.get_index(2), Some(&Value::Null));
        assert_eq!(value.get_index(3), Some(&Value::from("")));
        assert_eq!(value.get_index(4), Some(&array([])));
        assert_eq!(value.get_index(5), Some(&Value::Object(Object::new())));
        assert_eq!(value.get_index(6), Some(&Value::Integer(7)));
    }

    #[test]
    fn test_object_null_fill() {
        let value = build(br#"{"a":,"b":}"#).unwrap();
        assert_eq!(value.member_count(), 2);
        assert_eq!(value.get_member(b"a"), Some(&Value::Null));
        assert_eq!(value.get_member(b"b"), Some(&Value::Null));

        // Stray commas where a key belongs are skipped
        let value = build(br#"{,"a":1,,}"#).unwrap();
        assert_eq!(value.member_count(), 1);
    }

    #[test]
    fn test_object_errors() {
        assert_eq!(error_at(br#"{"a" 1}"#), (ErrKind::ExpectedColon, 5));
        assert_eq!(error_at(br#"{"a",}"#), (ErrKind::ExpectedColon, 4));
        assert_eq!(error_at(br#"{1:2}"#), (ErrKind::ExpectedObjectKey, 1));
        assert_eq!(error_at(br#"{:1}"#), (ErrKind::UnexpectedColon, 1));
        assert_eq!(error_at(br#"{"a"::1}"#), (ErrKind::UnexpectedColon, 5));
        assert_eq!(error_at(br#"{"a":1 "b":2}"#), (ErrKind::ExpectedComma, 7));
        assert_eq!(error_at(br#"{"a":1"#), (ErrKind::UnterminatedObject, 6));
        assert_eq!(error_at(br#"{"x": tru}"#), (ErrKind::InvalidLiteral, 6));
    }

    #[test]
    fn test_array_errors() {
        assert_eq!(error_at(b"[1 2]"), (ErrKind::ExpectedComma, 3));
        assert_eq!(error_at(b"[1, 2"), (ErrKind::UnterminatedArray, 5));
        assert_eq!(error_at(b"[:]"), (ErrKind::InvalidToken, 1));
        assert_eq!(error_at(b"[1, -]"), (ErrKind::InvalidNumber, 4));
        assert_eq!(error_at(b"[[1]"), (ErrKind::UnterminatedArray, 4));
    }

    #[test]
    fn test_document_errors() {
        assert_eq!(error_at(b""), (ErrKind::EmptyDocument, 0));
        assert_eq!(error_at(b" \n "), (ErrKind::EmptyDocument, 3));
        assert_eq!(error_at(b"1 2"), (ErrKind::TrailingContent, 2));
        assert_eq!(error_at(b"[] x"), (ErrKind::TrailingContent, 3));
        assert_eq!(error_at(b"@"), (ErrKind::InvalidToken, 0));
    }

    #[test]
    fn test_depth_limit() {
        assert!(build_with_depth(b"[[1]]", 2).is_ok());
        assert!(build_with_depth(br#"{"a":{}}"#, 2).is_ok());

        let error = build_with_depth(b"[[[1]]]", 2).unwrap_err();
        assert_eq!(error.kind(), ErrKind::MaxDepthReached);
        assert_eq!(error.position(), 2);

        // Empty aggregates count as a level too
        let error = build_with_depth(b"[[{}]]", 2).unwrap_err();
        assert_eq!(error.kind(), ErrKind::MaxDepthReached);

        // Scalars never count
        assert_eq!(build_with_depth(b"7", 0), Ok(Value::Integer(7)));
        assert!(build_with_depth(b"[]", 0).is_err());
    }

    #[test]
    fn test_depth_resets_between_siblings() {
        assert!(build_with_depth(b"[[1],[2],[[3]]]", 3).is_ok());
        assert!(build_with_depth(b"[[1],[2],[[[3]]]]", 3).is_err());
    }
}
