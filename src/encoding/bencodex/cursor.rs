// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte cursor for reading Bencodex tokens.

use super::error::DecodeError;

/// Cursor over a Bencodex buffer.
///
/// Tracks the read offset so every error can report where it happened.
pub struct BencodexCursor<'a> {
    /// The input buffer
    data: &'a [u8],
    /// Current read position
    offset: usize,
}

impl<'a> BencodexCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Check if all bytes have been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    /// Look at the next byte, failing at end of input.
    pub fn peek_required(&self) -> Result<u8, DecodeError> {
        self.peek().ok_or(DecodeError::UnexpectedEof {
            offset: self.offset,
        })
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = self.peek_required()?;
        self.offset += 1;
        Ok(byte)
    }

    /// Consume `expected` or fail with the byte actually found.
    pub fn expect(&mut self, expected: u8) -> Result<(), DecodeError> {
        let offset = self.offset;
        let byte = self.read_u8()?;
        if byte != expected {
            return Err(DecodeError::UnexpectedByte { byte, offset });
        }
        Ok(())
    }

    /// Read exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        if count > self.remaining() {
            return Err(DecodeError::LengthExceeded {
                offset: self.offset,
                length: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }

    /// Read bytes up to (not including) `terminator`, then consume the terminator.
    pub fn read_until(&mut self, terminator: u8) -> Result<&'a [u8], DecodeError> {
        let start = self.offset;
        match self.data[start.min(self.data.len())..]
            .iter()
            .position(|&b| b == terminator)
        {
            Some(len) => {
                self.offset = start + len + 1;
                Ok(&self.data[start..start + len])
            }
            None => Err(DecodeError::UnexpectedEof {
                offset: self.data.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u8_and_eof() {
        let mut cursor = BencodexCursor::new(b"n");
        assert_eq!(cursor.read_u8().unwrap(), b'n');
        assert!(cursor.is_at_end());
        assert_eq!(
            cursor.read_u8(),
            Err(DecodeError::UnexpectedEof { offset: 1 })
        );
    }

    #[test]
    fn test_expect() {
        let mut cursor = BencodexCursor::new(b"ex");
        cursor.expect(b'e').unwrap();
        assert_eq!(
            cursor.expect(b'e'),
            Err(DecodeError::UnexpectedByte {
                byte: b'x',
                offset: 1
            })
        );
    }

    #[test]
    fn test_read_bytes_bounds() {
        let mut cursor = BencodexCursor::new(b"abc");
        assert_eq!(cursor.read_bytes(2).unwrap(), b"ab");
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(
            cursor.read_bytes(5),
            Err(DecodeError::LengthExceeded {
                offset: 2,
                length: 5,
                available: 1
            })
        );
    }

    #[test]
    fn test_read_until() {
        let mut cursor = BencodexCursor::new(b"12:rest");
        assert_eq!(cursor.read_until(b':').unwrap(), b"12");
        assert_eq!(cursor.position(), 3);
        assert_eq!(
            cursor.read_until(b'e'),
            Err(DecodeError::UnexpectedEof { offset: 7 })
        );
    }
}
