// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bencodex decoder implementation.
//!
//! Token grammar:
//!
//! | Token                  | Value                          |
//! |------------------------|--------------------------------|
//! | `n`                    | null                           |
//! | `t` / `f`              | boolean                        |
//! | `i<decimal>e`          | integer, arbitrary precision   |
//! | `<len>:<bytes>`        | binary                         |
//! | `u<len>:<utf-8 bytes>` | text, `len` counts UTF-8 bytes |
//! | `l<values>e`           | list                           |
//! | `d(<key><value>)*e`    | dictionary                     |

use std::collections::btree_map::Entry;

use num_bigint::BigInt;
use tracing::{debug, warn};

use crate::core::{Dictionary, Key, Value};

use super::cursor::BencodexCursor;
use super::error::DecodeError;

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Upper bound for a configured nesting limit.
///
/// Decoding and rendering both recurse once per container level, so the
/// limit bounds stack use on the main thread.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Bencodex decoder.
#[derive(Debug, Clone)]
pub struct BencodexDecoder {
    /// Maximum container nesting accepted before giving up
    max_depth: usize,
}

impl Default for BencodexDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BencodexDecoder {
    /// Create a decoder with the default nesting limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the nesting limit, capped at [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        if max_depth > MAX_DEPTH_LIMIT {
            warn!(
                requested = max_depth,
                limit = MAX_DEPTH_LIMIT,
                "nesting limit capped"
            );
        }
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Get the nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decode exactly one value spanning the whole buffer.
    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodeError> {
        let mut cursor = BencodexCursor::new(data);
        let value = self.decode_value(&mut cursor, 0)?;

        if !cursor.is_at_end() {
            return Err(DecodeError::TrailingData {
                offset: cursor.position(),
            });
        }

        debug!(
            bytes = data.len(),
            shape = value.type_name(),
            "decoded bencodex value"
        );
        Ok(value)
    }

    fn decode_value(
        &self,
        cursor: &mut BencodexCursor<'_>,
        depth: usize,
    ) -> Result<Value, DecodeError> {
        let offset = cursor.position();
        match cursor.peek_required()? {
            b'n' => {
                cursor.read_u8()?;
                Ok(Value::Null)
            }
            b't' => {
                cursor.read_u8()?;
                Ok(Value::Boolean(true))
            }
            b'f' => {
                cursor.read_u8()?;
                Ok(Value::Boolean(false))
            }
            b'i' => self.decode_integer(cursor).map(Value::Integer),
            b'u' => self.decode_text(cursor).map(Value::Text),
            b'0'..=b'9' => self.decode_binary(cursor).map(Value::Binary),
            b'l' => {
                self.check_depth(offset, depth)?;
                self.decode_list(cursor, depth)
            }
            b'd' => {
                self.check_depth(offset, depth)?;
                self.decode_dictionary(cursor, depth)
            }
            byte => Err(DecodeError::UnexpectedByte { byte, offset }),
        }
    }

    fn check_depth(&self, offset: usize, depth: usize) -> Result<(), DecodeError> {
        if depth >= self.max_depth {
            return Err(DecodeError::NestingTooDeep {
                offset,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn decode_integer(&self, cursor: &mut BencodexCursor<'_>) -> Result<BigInt, DecodeError> {
        cursor.expect(b'i')?;
        let offset = cursor.position();
        let digits = cursor.read_until(b'e')?;
        parse_integer(digits, offset)
    }

    fn decode_binary(&self, cursor: &mut BencodexCursor<'_>) -> Result<Vec<u8>, DecodeError> {
        let len = read_length(cursor)?;
        Ok(cursor.read_bytes(len)?.to_vec())
    }

    fn decode_text(&self, cursor: &mut BencodexCursor<'_>) -> Result<String, DecodeError> {
        cursor.expect(b'u')?;
        let len = read_length(cursor)?;
        let offset = cursor.position();
        let bytes = cursor.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { offset })
    }

    fn decode_list(
        &self,
        cursor: &mut BencodexCursor<'_>,
        depth: usize,
    ) -> Result<Value, DecodeError> {
        cursor.expect(b'l')?;
        let mut items = Vec::new();
        while cursor.peek_required()? != b'e' {
            items.push(self.decode_value(cursor, depth + 1)?);
        }
        cursor.expect(b'e')?;
        Ok(Value::List(items))
    }

    fn decode_dictionary(
        &self,
        cursor: &mut BencodexCursor<'_>,
        depth: usize,
    ) -> Result<Value, DecodeError> {
        cursor.expect(b'd')?;
        let mut dict = Dictionary::new();
        while cursor.peek_required()? != b'e' {
            let key_offset = cursor.position();
            let key = self.decode_key(cursor)?;
            let value = self.decode_value(cursor, depth + 1)?;
            match dict.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(slot) => {
                    return Err(DecodeError::DuplicateKey {
                        offset: key_offset,
                        key: slot.key().to_string(),
                    });
                }
            }
        }
        cursor.expect(b'e')?;
        Ok(Value::Dictionary(dict))
    }

    fn decode_key(&self, cursor: &mut BencodexCursor<'_>) -> Result<Key, DecodeError> {
        let offset = cursor.position();
        match cursor.peek_required()? {
            b'0'..=b'9' => self.decode_binary(cursor).map(Key::Binary),
            b'u' => self.decode_text(cursor).map(Key::Text),
            byte => Err(DecodeError::InvalidKey {
                offset,
                found: token_name(byte),
            }),
        }
    }
}

/// Decode a Bencodex buffer with the default decoder.
pub fn decode(data: &[u8]) -> Result<Value, DecodeError> {
    BencodexDecoder::new().decode(data)
}

fn parse_integer(digits: &[u8], offset: usize) -> Result<BigInt, DecodeError> {
    let invalid = |reason: &str| DecodeError::InvalidInteger {
        offset,
        reason: reason.to_string(),
    };

    let magnitude = digits.strip_prefix(b"-").unwrap_or(digits);
    if magnitude.is_empty() {
        return Err(invalid("no digits"));
    }
    if !magnitude.iter().all(u8::is_ascii_digit) {
        return Err(invalid("non-digit character"));
    }
    if magnitude.len() > 1 && magnitude[0] == b'0' {
        return Err(invalid("leading zeros"));
    }
    if digits[0] == b'-' && magnitude == b"0" {
        return Err(invalid("negative zero"));
    }

    BigInt::parse_bytes(digits, 10).ok_or_else(|| invalid("unparseable digits"))
}

fn read_length(cursor: &mut BencodexCursor<'_>) -> Result<usize, DecodeError> {
    let offset = cursor.position();
    let digits = cursor.read_until(b':')?;
    let invalid = |reason: &str| DecodeError::InvalidLength {
        offset,
        reason: reason.to_string(),
    };

    if digits.is_empty() {
        return Err(invalid("no digits"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("non-digit character"));
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(invalid("leading zeros"));
    }

    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| invalid("length overflows"))
}

fn token_name(byte: u8) -> &'static str {
    match byte {
        b'n' => "null",
        b't' | b'f' => "boolean",
        b'i' => "integer",
        b'l' => "list",
        b'd' => "dictionary",
        _ => "an unknown token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(b: &[u8]) -> Value {
        Value::Binary(b.to_vec())
    }

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode(b"n").unwrap(), Value::Null);
        assert_eq!(decode(b"t").unwrap(), Value::Boolean(true));
        assert_eq!(decode(b"f").unwrap(), Value::Boolean(false));
        assert_eq!(decode(b"i42e").unwrap(), Value::from(42));
        assert_eq!(decode(b"i-42e").unwrap(), Value::from(-42));
        assert_eq!(decode(b"i0e").unwrap(), Value::from(0));
        assert_eq!(decode(b"2:hi").unwrap(), bin(b"hi"));
        assert_eq!(decode(b"0:").unwrap(), bin(b""));
        assert_eq!(decode(b"u5:hello").unwrap(), Value::from("hello"));
        assert_eq!(decode(b"u0:").unwrap(), Value::from(""));
    }

    #[test]
    fn test_decode_big_integer() {
        let digits = "123456789012345678901234567890123456789";
        let encoded = format!("i-{digits}e");
        let value = decode(encoded.as_bytes()).unwrap();
        assert_eq!(
            value.as_integer().unwrap().to_string(),
            format!("-{digits}")
        );
    }

    #[test]
    fn test_decode_text_counts_bytes() {
        // "é" is two UTF-8 bytes
        assert_eq!(decode("u2:\u{e9}".as_bytes()).unwrap(), Value::from("\u{e9}"));
        assert!(matches!(
            decode(b"u2:\xff\xfe"),
            Err(DecodeError::InvalidUtf8 { offset: 3 })
        ));
    }

    #[test]
    fn test_decode_integer_invalid() {
        for input in [&b"i-0e"[..], b"i03e", b"ie", b"i-e", b"i1x2e"] {
            assert!(
                matches!(decode(input), Err(DecodeError::InvalidInteger { offset: 1, .. })),
                "{:?}",
                String::from_utf8_lossy(input)
            );
        }
        assert_eq!(decode(b"i12"), Err(DecodeError::UnexpectedEof { offset: 3 }));
    }

    #[test]
    fn test_decode_length_invalid() {
        assert!(matches!(decode(b"01:a"), Err(DecodeError::InvalidLength { .. })));
        assert!(matches!(decode(b"u:"), Err(DecodeError::InvalidLength { offset: 1, .. })));
        assert!(matches!(
            decode(b"99999999999999999999999:"),
            Err(DecodeError::InvalidLength { .. })
        ));
        assert_eq!(
            decode(b"5:abc"),
            Err(DecodeError::LengthExceeded {
                offset: 2,
                length: 5,
                available: 3
            })
        );
    }

    #[test]
    fn test_decode_list() {
        let value = decode(b"ltne").unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::Boolean(true), Value::Null])
        );
        assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
        assert_eq!(
            decode(b"lli1eee").unwrap(),
            Value::List(vec![Value::List(vec![Value::from(1)])])
        );
    }

    #[test]
    fn test_decode_dictionary() {
        assert_eq!(decode(b"de").unwrap(), Value::Dictionary(Dictionary::new()));

        let value = decode(b"d1:ai1eu1:bu1:ce").unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(&Key::from(&b"a"[..])), Some(&Value::from(1)));
        assert_eq!(dict.get(&Key::from("b")), Some(&Value::from("c")));
    }

    #[test]
    fn test_decode_dictionary_accepts_any_key_order() {
        let value = decode(b"du1:bn1:ane").unwrap();
        let keys: Vec<_> = value.as_dictionary().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Key::from(&b"a"[..]), Key::from("b")]);
    }

    #[test]
    fn test_decode_dictionary_invalid_key() {
        assert_eq!(
            decode(b"di1ei2ee"),
            Err(DecodeError::InvalidKey {
                offset: 1,
                found: "integer"
            })
        );
        assert_eq!(
            decode(b"dnne"),
            Err(DecodeError::InvalidKey {
                offset: 1,
                found: "null"
            })
        );
    }

    #[test]
    fn test_decode_dictionary_duplicate_key() {
        assert_eq!(
            decode(b"du1:ani1eu1:ane"),
            Err(DecodeError::DuplicateKey {
                offset: 9,
                key: "\"a\"".to_string()
            })
        );
        // same spelling, different key kinds: not a duplicate
        assert!(decode(b"d1:anu1:ane").is_ok());
    }

    #[test]
    fn test_decode_unterminated_containers() {
        assert_eq!(decode(b"l"), Err(DecodeError::UnexpectedEof { offset: 1 }));
        assert_eq!(decode(b"lt"), Err(DecodeError::UnexpectedEof { offset: 2 }));
        assert_eq!(decode(b"d1:a"), Err(DecodeError::UnexpectedEof { offset: 4 }));
    }

    #[test]
    fn test_decode_rejects_trailing_and_garbage() {
        assert_eq!(decode(b"nn"), Err(DecodeError::TrailingData { offset: 1 }));
        assert_eq!(
            decode(b"x"),
            Err(DecodeError::UnexpectedByte {
                byte: b'x',
                offset: 0
            })
        );
        assert_eq!(decode(b""), Err(DecodeError::UnexpectedEof { offset: 0 }));
    }

    #[test]
    fn test_decode_nesting_limit() {
        let decoder = BencodexDecoder::new().with_max_depth(2);
        assert!(decoder.decode(b"llee").is_ok());
        assert_eq!(
            decoder.decode(b"llleee"),
            Err(DecodeError::NestingTooDeep {
                offset: 2,
                limit: 2
            })
        );
        assert_eq!(BencodexDecoder::default().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_nesting_limit_is_capped() {
        let decoder = BencodexDecoder::new().with_max_depth(usize::MAX);
        assert_eq!(decoder.max_depth(), MAX_DEPTH_LIMIT);
        assert_eq!(
            BencodexDecoder::new()
                .with_max_depth(MAX_DEPTH_LIMIT)
                .max_depth(),
            MAX_DEPTH_LIMIT
        );

        let depth = MAX_DEPTH_LIMIT + 1;
        let mut input = vec![b'l'; depth];
        input.extend(std::iter::repeat(b'e').take(depth));
        let result = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(move || decoder.decode(&input))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(
            result,
            Err(DecodeError::NestingTooDeep {
                offset: MAX_DEPTH_LIMIT,
                limit: MAX_DEPTH_LIMIT
            })
        );
    }
}
