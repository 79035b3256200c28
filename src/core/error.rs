// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for bencodex-viewer.
//!
//! Provides error types for viewer operations:
//! - Decoding Bencodex input
//! - Reading input files
//! - Loading configuration
//! - Addressing nodes in a rendered tree

use std::fmt;

use crate::encoding::bencodex::DecodeError;

/// Errors that can occur while loading and viewing Bencodex data.
#[derive(Debug, Clone)]
pub enum ViewerError {
    /// Input bytes are not valid Bencodex
    Decode(DecodeError),

    /// Input file could not be read
    Io {
        /// Path of the file being read
        path: String,
        /// Error message
        message: String,
    },

    /// Configuration could not be parsed
    Config {
        /// Where the configuration came from (file path or "inline")
        source: String,
        /// Error message
        message: String,
    },

    /// Node path does not address a node in the rendered tree
    InvalidPath {
        /// Path as written by the user
        path: String,
        /// Why the path could not be resolved
        reason: String,
    },
}

impl ViewerError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        ViewerError::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(source: impl Into<String>, message: impl Into<String>) -> Self {
        ViewerError::Config {
            source: source.into(),
            message: message.into(),
        }
    }

    /// Create an invalid node path error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from the decoder.
    pub fn is_decode(&self) -> bool {
        matches!(self, ViewerError::Decode(_))
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ViewerError::Decode(err) => vec![
                ("offset", err.offset().to_string()),
                ("message", err.to_string()),
            ],
            ViewerError::Io { path, message } => {
                vec![("path", path.clone()), ("message", message.clone())]
            }
            ViewerError::Config { source, message } => {
                vec![("source", source.clone()), ("message", message.clone())]
            }
            ViewerError::InvalidPath { path, reason } => {
                vec![("path", path.clone()), ("reason", reason.clone())]
            }
        }
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Decode(err) => write!(f, "Decode error: {err}"),
            ViewerError::Io { path, message } => {
                write!(f, "Failed to read '{path}': {message}")
            }
            ViewerError::Config { source, message } => {
                write!(f, "Invalid configuration in {source}: {message}")
            }
            ViewerError::InvalidPath { path, reason } => {
                write!(f, "Invalid node path '{path}': {reason}")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for ViewerError {
    fn from(err: DecodeError) -> Self {
        ViewerError::Decode(err)
    }
}

/// Result type for bencodex-viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
