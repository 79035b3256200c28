// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire format decoding.
//!
//! - [`bencodex`] - Bencodex decoding into [`Value`](crate::core::Value)

pub mod bencodex;

pub use bencodex::{decode, BencodexDecoder, DecodeError};
