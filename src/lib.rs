// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # bencodex-viewer
//!
//! Viewer for Bencodex-encoded binary data.
//!
//! Input bytes are decoded into a [`Value`] tree, which is rendered into a
//! [`VisualNode`] tree and written out as text, JSON, or a standalone HTML
//! page.
//!
//! ## Architecture
//!
//! - `core/` - Value, dictionary key ordering, errors
//! - `encoding/` - Bencodex decoder
//! - `render/` - Visual tree, text and HTML backends, hover state
//! - `config` - TOML configuration
//! - `viewer` - Session holding the currently displayed value
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bencodex_viewer::{decode, render, RenderOptions};
//! use bencodex_viewer::render::text::to_text;
//!
//! let value = decode(b"ltne")?;
//! let tree = render(&value, &RenderOptions::default());
//! assert_eq!(to_text(&tree), "2 elements\n  [0] true\n  [1] null\n");
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use crate::core::{
    compare_keys, Dictionary, Key, Result, Value, ValueStats, Variant, ViewerError,
};

// Decoding
pub mod encoding;

pub use crate::encoding::bencodex::{decode, BencodexDecoder, DecodeError};

// Rendering
pub mod render;

pub use crate::render::{render, BinaryView, ByteHover, RenderOptions, VisualNode};

// Configuration
pub mod config;

pub use crate::config::ViewerConfig;

// Session
pub mod viewer;

pub use crate::viewer::Viewer;
