// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bencodex decode errors.

use thiserror::Error;

/// Errors produced while decoding Bencodex input.
///
/// Every variant records the byte offset at which the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },

    #[error("invalid integer at offset {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: String },

    #[error("invalid length at offset {offset}: {reason}")]
    InvalidLength { offset: usize, reason: String },

    #[error("length {length} at offset {offset} exceeds the {available} remaining bytes")]
    LengthExceeded {
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("invalid UTF-8 in text at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("dictionary key at offset {offset} must be binary or text, found {found}")]
    InvalidKey { offset: usize, found: &'static str },

    #[error("duplicate dictionary key {key} at offset {offset}")]
    DuplicateKey { offset: usize, key: String },

    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },

    #[error("nesting deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },
}

impl DecodeError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnexpectedEof { offset }
            | DecodeError::UnexpectedByte { offset, .. }
            | DecodeError::InvalidInteger { offset, .. }
            | DecodeError::InvalidLength { offset, .. }
            | DecodeError::LengthExceeded { offset, .. }
            | DecodeError::InvalidUtf8 { offset }
            | DecodeError::InvalidKey { offset, .. }
            | DecodeError::DuplicateKey { offset, .. }
            | DecodeError::TrailingData { offset }
            | DecodeError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
