// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bencodex_viewer::{Key, Value};

// ============================================================================
// Fixture Encoding
// ============================================================================

/// Encode a value as Bencodex, for building fixtures.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(value, &mut out);
    out
}

fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.push(b'n'),
        Value::Boolean(true) => out.push(b't'),
        Value::Boolean(false) => out.push(b'f'),
        Value::Integer(i) => out.extend(format!("i{i}e").into_bytes()),
        Value::Text(s) => {
            out.extend(format!("u{}:", s.len()).into_bytes());
            out.extend(s.as_bytes());
        }
        Value::Binary(b) => encode_binary(b, out),
        Value::List(items) => {
            out.push(b'l');
            for item in items {
                encode_into(item, out);
            }
            out.push(b'e');
        }
        Value::Dictionary(d) => {
            out.push(b'd');
            for (key, item) in d {
                match key {
                    Key::Binary(b) => encode_binary(b, out),
                    Key::Text(s) => {
                        out.extend(format!("u{}:", s.len()).into_bytes());
                        out.extend(s.as_bytes());
                    }
                }
                encode_into(item, out);
            }
            out.push(b'e');
        }
    }
}

fn encode_binary(b: &[u8], out: &mut Vec<u8>) {
    out.extend(format!("{}:", b.len()).into_bytes());
    out.extend(b);
}

// ============================================================================
// Files
// ============================================================================

/// Write `bytes` to `name` inside `dir` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
