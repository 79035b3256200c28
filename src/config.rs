// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Viewer configuration.
//!
//! Configuration is read from TOML. Every field is optional:
//!
//! ```toml
//! [render]
//! variant = "styled"
//! grid_threshold = 256
//! grid_columns = 16
//!
//! [decoder]
//! max_depth = 128
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Result, ViewerError};
use crate::encoding::bencodex::{BencodexDecoder, DEFAULT_MAX_DEPTH};
use crate::render::RenderOptions;

/// Decoder settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum container nesting, capped at `MAX_DEPTH_LIMIT`
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Build a decoder from these settings.
    pub fn decoder(&self) -> BencodexDecoder {
        BencodexDecoder::new().with_max_depth(self.max_depth)
    }
}

/// Top-level viewer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub render: RenderOptions,
    pub decoder: DecoderConfig,
}

impl ViewerConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ViewerError::config("inline", e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ViewerError::io(path.display().to_string(), e.to_string()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ViewerError::config(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), variant = %config.render.variant, "loaded configuration");
        Ok(config)
    }

    /// Load configuration from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ViewerError::config("serialize", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::core::Variant;
    use crate::encoding::bencodex::MAX_DEPTH_LIMIT;
    use crate::render::{DEFAULT_GRID_COLUMNS, DEFAULT_GRID_THRESHOLD};

    #[test]
    fn test_empty_config_is_default() {
        let config = ViewerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.render.variant, Variant::Rich);
        assert_eq!(config.render.grid_threshold, DEFAULT_GRID_THRESHOLD);
        assert_eq!(config.render.grid_columns, DEFAULT_GRID_COLUMNS);
        assert_eq!(config.decoder.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_partial_config() {
        let config = ViewerConfig::from_toml_str(
            r#"
            [render]
            variant = "plain"
            grid_threshold = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.render.variant, Variant::Plain);
        assert_eq!(config.render.grid_threshold, 8);
        assert_eq!(config.render.grid_columns, DEFAULT_GRID_COLUMNS);
    }

    #[test]
    fn test_decoder_config() {
        let config = ViewerConfig::from_toml_str("[decoder]\nmax_depth = 1\n").unwrap();
        let decoder = config.decoder.decoder();
        assert_eq!(decoder.max_depth(), 1);
        assert!(decoder.decode(b"le").is_ok());
        assert!(decoder.decode(b"llee").is_err());
    }

    #[test]
    fn test_decoder_depth_is_capped() {
        let config = ViewerConfig::from_toml_str("[decoder]\nmax_depth = 100000000\n").unwrap();
        assert_eq!(config.decoder.decoder().max_depth(), MAX_DEPTH_LIMIT);
    }

    #[test]
    fn test_invalid_config() {
        let err = ViewerConfig::from_toml_str("[render]\nvariant = \"fancy\"\n").unwrap_err();
        assert!(matches!(err, ViewerError::Config { .. }));
        assert!(ViewerConfig::from_toml_str("[colors]\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nvariant = \"styled\"").unwrap();
        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.render.variant, Variant::Styled);

        let missing = ViewerConfig::load("/nonexistent/viewer.toml").unwrap_err();
        assert!(matches!(missing, ViewerError::Io { .. }));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(
            ViewerConfig::load_or_default(None).unwrap(),
            ViewerConfig::default()
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ViewerConfig::default();
        config.render.variant = Variant::Styled;
        let text = config.to_toml_string().unwrap();
        assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), config);
    }
}
