// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dictionary keys and their display order.
//!
//! Bencodex dictionaries are keyed by byte strings or text strings. Rows are
//! always shown in the order defined by [`compare_keys`]:
//!
//! - binary vs binary: byte-by-byte, a strict prefix sorts first
//! - text vs text: ordinary string order
//! - binary vs text: binary always sorts first, regardless of content

use std::cmp::Ordering;
use std::fmt;

/// A Bencodex dictionary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Byte string key
    Binary(Vec<u8>),
    /// UTF-8 text key
    Text(String),
}

/// Compare two dictionary keys for display.
///
/// The binary/text tie-break is content independent: `Binary(b"a")` sorts
/// before `Text("a")` even though both print as `a`.
pub fn compare_keys(a: &Key, b: &Key) -> Ordering {
    match (a, b) {
        (Key::Binary(a), Key::Binary(b)) => a.as_slice().cmp(b.as_slice()),
        (Key::Text(a), Key::Text(b)) => a.as_str().cmp(b.as_str()),
        (Key::Binary(_), Key::Text(_)) => Ordering::Less,
        (Key::Text(_), Key::Binary(_)) => Ordering::Greater,
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_keys(self, other)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Key {
    /// Check if this is a byte string key.
    pub fn is_binary(&self) -> bool {
        matches!(self, Key::Binary(_))
    }

    /// Check if this is a text key.
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Text(_))
    }

    /// Raw bytes of the key (UTF-8 bytes for text keys).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Key::Binary(b) => b,
            Key::Text(s) => s.as_bytes(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Binary(b) => write!(f, "0x{}", hex::encode(b)),
            Key::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<&[u8]> for Key {
    fn from(b: &[u8]) -> Self {
        Key::Binary(b.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(b: Vec<u8>) -> Self {
        Key::Binary(b)
    }
}
