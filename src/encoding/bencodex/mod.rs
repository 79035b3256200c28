// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bencodex decoding.
//!
//! The decoder is the only producer of [`Value`](crate::core::Value)s from raw
//! bytes; everything downstream trusts its output.

pub mod cursor;
pub mod decoder;
pub mod error;

pub use cursor::BencodexCursor;
pub use decoder::{decode, BencodexDecoder, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use error::DecodeError;
