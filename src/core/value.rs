// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bencodex value type system.
//!
//! [`Value`] is the decoded in-memory form of one Bencodex item. It is a
//! closed union: every consumer matches on it exhaustively, so a value of
//! an unknown shape cannot exist.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Serialize;

use super::key::Key;

/// Dictionary mapping as decoded, ordered by [`Key`]'s display order.
pub type Dictionary = BTreeMap<Key, Value>;

/// A decoded Bencodex value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    // Null marker
    Null,

    // Boolean
    Boolean(bool),

    // Arbitrary-precision integer
    Integer(BigInt),

    // UTF-8 text
    Text(String),

    // Byte string
    Binary(Vec<u8>),

    // Ordered list
    List(Vec<Value>),

    // Key-ordered mapping
    Dictionary(Dictionary),
}

impl Value {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a scalar (anything but a list or dictionary).
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Check if this value is a container type (list or dictionary).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Dictionary(_))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Get the shape name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Binary(_) => "binary",
            Value::List(_) => "list",
            Value::Dictionary(_) => "dictionary",
        }
    }

    /// Number of scalar values reachable from this value.
    ///
    /// Dictionary keys count as scalars: each key is rendered as its own
    /// leaf next to its value.
    pub fn scalar_count(&self) -> usize {
        match self {
            Value::List(items) => items.iter().map(Value::scalar_count).sum(),
            Value::Dictionary(d) => d.values().map(|v| 1 + v.scalar_count()).sum(),
            _ => 1,
        }
    }

    /// Nesting depth; scalars have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Value::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            Value::Dictionary(d) => 1 + d.values().map(Value::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Collect shape statistics for this value and everything below it.
    pub fn stats(&self) -> ValueStats {
        let mut stats = ValueStats::default();
        stats.visit(self, 0);
        stats
    }
}

/// Shape counts for a decoded value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueStats {
    pub nulls: usize,
    pub booleans: usize,
    pub integers: usize,
    pub texts: usize,
    pub binaries: usize,
    pub lists: usize,
    pub dictionaries: usize,
    /// Dictionary keys, counted separately from values
    pub keys: usize,
    /// Total bytes held by binary values and binary keys
    pub binary_bytes: usize,
    pub max_depth: usize,
}

impl ValueStats {
    fn visit(&mut self, value: &Value, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match value {
            Value::Null => self.nulls += 1,
            Value::Boolean(_) => self.booleans += 1,
            Value::Integer(_) => self.integers += 1,
            Value::Text(_) => self.texts += 1,
            Value::Binary(b) => {
                self.binaries += 1;
                self.binary_bytes += b.len();
            }
            Value::List(items) => {
                self.lists += 1;
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Dictionary(d) => {
                self.dictionaries += 1;
                for (key, item) in d {
                    self.keys += 1;
                    if let Key::Binary(b) = key {
                        self.binary_bytes += b.len();
                    }
                    self.visit(item, depth + 1);
                }
            }
        }
    }

    /// Number of scalar leaves, keys included.
    pub fn leaf_count(&self) -> usize {
        self.nulls + self.booleans + self.integers + self.texts + self.binaries + self.keys
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(BigInt::from(i))
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Binary(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Binary(b.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dictionary(d)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Binary(b) => Value::Binary(b),
            Key::Text(s) => Value::Text(s),
        }
    }
}
