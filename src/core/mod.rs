// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout bencodex-viewer.
//!
//! This module provides the foundational types for the library:
//! - [`ViewerError`] - Error handling
//! - [`Value`] - Decoded Bencodex value
//! - [`Key`] - Dictionary key and its display order
//! - [`Variant`] - Presentation level identifier

pub mod error;
pub mod key;
pub mod value;

use serde::{Deserialize, Serialize};

pub use error::{Result, ViewerError};
pub use key::{compare_keys, Key};
pub use value::{Dictionary, Value, ValueStats};

/// Presentation level of a rendered view.
///
/// Variants only change presentation; the rendered rows and their order are
/// the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Bare markup
    Plain,
    /// Markup with a stylesheet
    Styled,
    /// Styled markup with binary grids, element indices and hover highlighting
    #[default]
    Rich,
}

/// Error returned when parsing a `Variant` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseVariantError {
    _private: (),
}

impl std::fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid variant name, expected 'plain', 'styled', or 'rich'"
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl std::str::FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Variant::Plain),
            "styled" => Ok(Variant::Styled),
            "rich" => Ok(Variant::Rich),
            _ => Err(ParseVariantError { _private: () }),
        }
    }
}

impl Variant {
    /// Check if this variant carries a stylesheet.
    pub fn is_styled(&self) -> bool {
        !matches!(self, Variant::Plain)
    }

    /// Check if this variant is the richest one.
    pub fn is_rich(&self) -> bool {
        matches!(self, Variant::Rich)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Styled => "styled",
            Variant::Rich => "rich",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("plain".parse::<Variant>(), Ok(Variant::Plain));
        assert_eq!("Styled".parse::<Variant>(), Ok(Variant::Styled));
        assert_eq!("RICH".parse::<Variant>(), Ok(Variant::Rich));
        assert!("fancy".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_round_trips_through_name() {
        for variant in [Variant::Plain, Variant::Styled, Variant::Rich] {
            assert_eq!(variant.as_str().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_variant_flags() {
        assert!(!Variant::Plain.is_styled());
        assert!(Variant::Styled.is_styled());
        assert!(!Variant::Styled.is_rich());
        assert!(Variant::Rich.is_rich());
        assert_eq!(Variant::default(), Variant::Rich);
    }
}
