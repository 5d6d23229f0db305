// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::dyn_array::DynArray;

/// Which variant a [`Value`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Decimal,
    Boolean,
    Null,
    String,
    Array,
    Object,
    Invalid,
}

/// A node of the parse tree.
///
/// Children are owned exclusively by their parent; dropping a node drops its
/// whole subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    #[default]
    Null,
    /// Decoded bytes; not necessarily UTF-8.
    String(Vec<u8>),
    Array(DynArray<Value>),
    Object(Object),
    /// Result of a malformed document.
    Invalid,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Decimal(_) => Kind::Decimal,
            Value::Boolean(_) => Kind::Boolean,
            Value::Null => Kind::Null,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Invalid => Kind::Invalid,
        }
    }

    /// Integer value; decimals truncate toward zero, every other kind is `0`.
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Integer(value) => *value,
            Value::Decimal(value) => *value as i64,
            _ => 0,
        }
    }

    /// Floating value; integers widen, every other kind is `0.0`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Integer(value) => *value as f64,
            Value::Decimal(value) => *value,
            _ => 0.0,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// String contents, when they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    /// `false` for anything but `Boolean(true)`.
    pub fn as_bool(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    pub fn as_array(&self) -> Option<&DynArray<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Array element at `index`; `None` out of range or on non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index).ok())
    }

    /// First member named `key`; `None` when absent or on non-objects.
    pub fn get_member(&self, key: &[u8]) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Element count of an array, `0` for every other kind.
    pub fn array_len(&self) -> usize {
        self.as_array().map_or(0, DynArray::len)
    }

    /// Member count of an object, `0` for every other kind.
    pub fn member_count(&self) -> usize {
        self.as_object().map_or(0, Object::len)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Value::Decimal(_))
    }

    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_decimal()
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Decimal(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::String(value.to_vec())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.as_bytes().to_vec())
    }
}

impl From<DynArray<Value>> for Value {
    fn from(value: DynArray<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

/// Object members in document order.
///
/// Keys and values live in two parallel arrays that always have the same
/// length. Duplicate keys are all kept; lookups return the first.
#[derive(Clone, PartialEq, Default)]
pub struct Object {
    keys: DynArray<Vec<u8>>,
    values: DynArray<Value>,
}

impl Object {
    pub const fn new() -> Self {
        Self {
            keys: DynArray::new(),
            values: DynArray::new(),
        }
    }

    /// Appends a member, even if `key` is already present.
    pub fn push(&mut self, key: Vec<u8>, value: Value) {
        self.keys.push(key);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Linear scan; the earliest member named `key` wins.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Value)> {
        self.keys
            .iter()
            .map(Vec::as_slice)
            .zip(self.values.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.keys.iter().map(Vec::as_slice)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

struct EscapedKey<'a>(&'a [u8]);

impl core::fmt::Debug for EscapedKey<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

impl core::fmt::Debug for Object {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (EscapedKey(key), value)))
            .finish()
    }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.push(key.into(), value);
        }
        object
    }
}
