// SPDX-License-Identifier: Apache-2.0

//! Parses a JSON document held in a byte buffer into an owned tree of typed
//! values.
//!
//! ```
//! use jsontree::{parse, Value};
//!
//! let doc = parse(br#"{"name": "probe", "readings": [1, 2.5, null]}"#);
//! assert_eq!(doc.get_member(b"name").and_then(Value::as_str), Some("probe"));
//! let readings = doc.get_member(b"readings").unwrap();
//! assert_eq!(readings.array_len(), 3);
//! assert_eq!(readings.get_index(1).unwrap().as_f64(), 2.5);
//!
//! // Any malformed input yields a single Invalid root
//! assert!(parse(br#"{"x": tru}"#).is_invalid());
//! ```
//!
//! [`try_parse`] runs the same engine but reports what went wrong and where.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use log::debug;

mod classifier;
pub use classifier::{classify, Classification, NumberFlags};

mod config;
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};

mod dyn_array;
pub use dyn_array::{DynArray, DynArrayError};

mod escape_processor;

mod input_buffer;
pub use input_buffer::InputBuffer;

mod number_decoder;

mod parse_error;
pub use parse_error::{ErrKind, ErrorCategory, ParseError};

mod shared;
pub use shared::SENTINEL;

mod string_decoder;

mod tree_builder;
use tree_builder::TreeBuilder;

mod value;
pub use value::{Kind, Object, Value};

/// Parses `input`, returning [`Value::Invalid`] for malformed documents.
pub fn parse(input: &[u8]) -> Value {
    parse_with_config(input, &ParserConfig::default())
}

pub fn parse_with_config(input: &[u8], config: &ParserConfig) -> Value {
    try_parse_with_config(input, config).unwrap_or_else(|error| {
        debug!("document rejected: {error}");
        Value::Invalid
    })
}

/// Parses `input`, keeping the reason for a rejection.
pub fn try_parse(input: &[u8]) -> Result<Value, ParseError> {
    try_parse_with_config(input, &ParserConfig::default())
}

pub fn try_parse_with_config(input: &[u8], config: &ParserConfig) -> Result<Value, ParseError> {
    TreeBuilder::new(InputBuffer::new(input), config).build_document()
}

/// Parses a buffer whose final byte is the NUL sentinel.
///
/// The sentinel is checked and excluded; a buffer without it is rejected with
/// [`ErrKind::MissingSentinel`].
pub fn parse_nul_terminated(buffer: &[u8]) -> Result<Value, ParseError> {
    parse_nul_terminated_with_config(buffer, &ParserConfig::default())
}

pub fn parse_nul_terminated_with_config(
    buffer: &[u8],
    config: &ParserConfig,
) -> Result<Value, ParseError> {
    let input = InputBuffer::from_nul_terminated(buffer)?;
    TreeBuilder::new(input, config).build_document()
}
