// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Args;
use tracing::Level;

use bencodex_viewer::render::parse_node_path;
use bencodex_viewer::{Variant, ViewerConfig, VisualNode};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install the stderr log subscriber.
///
/// `verbose` counts `-v` flags: none logs warnings, one adds debug output,
/// two or more add trace output.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Rendering flags shared by the commands that display a value.
#[derive(Args, Clone, Debug, Default)]
pub struct RenderArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Presentation level: plain, styled or rich
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Byte strings longer than this are shown as a grid (rich variant)
    #[arg(long, value_name = "BYTES")]
    pub grid_threshold: Option<usize>,

    /// Bytes per grid row
    #[arg(long, value_name = "N")]
    pub grid_columns: Option<usize>,
}

impl RenderArgs {
    /// Configuration file settings with command-line overrides applied.
    pub fn config(&self) -> Result<ViewerConfig> {
        let mut config = ViewerConfig::load_or_default(self.config.as_deref())?;
        if let Some(variant) = self.variant {
            config.render.variant = variant;
        }
        if let Some(threshold) = self.grid_threshold {
            config.render.grid_threshold = threshold;
        }
        if let Some(columns) = self.grid_columns {
            config.render.grid_columns = columns;
        }
        Ok(config)
    }
}

/// Parse a hover target written as `PATH:INDEX`, e.g. `0/3:5`.
///
/// The path may be empty (`:5`) to address the root.
pub fn parse_hover(s: &str) -> Result<(Vec<usize>, usize)> {
    let (path, index) = s
        .rsplit_once(':')
        .with_context(|| format!("Hover target must be PATH:INDEX, got '{s}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid byte index in hover target '{s}'"))?;
    Ok((parse_node_path(path)?, index))
}

/// Apply a hover target to a rendered tree.
pub fn apply_hover(tree: &mut VisualNode, target: &str) -> Result<()> {
    let (path, index) = parse_hover(target)?;
    let node = tree.node_at_mut(&path)?;
    let view = node
        .as_binary_mut()
        .with_context(|| format!("Node '{target}' is not a byte string"))?;
    if !view.hover_enter(index) {
        anyhow::bail!(
            "Byte index {index} is out of range for a {}-byte value",
            view.length
        );
    }
    Ok(())
}

/// Format a byte count to a human-readable string.
pub fn format_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;

    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Title for a page showing `path`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bencodex_viewer::{decode, render, RenderOptions};

    #[test]
    fn test_parse_hover() {
        assert_eq!(parse_hover("0/3:5").unwrap(), (vec![0, 3], 5));
        assert_eq!(parse_hover(":0").unwrap(), (vec![], 0));
        assert!(parse_hover("0/3").is_err());
        assert!(parse_hover("0:x").is_err());
    }

    #[test]
    fn test_apply_hover() {
        let value = decode(b"l2:hie").unwrap();
        let mut tree = render(&value, &RenderOptions::default());
        apply_hover(&mut tree, "0:1").unwrap();
        assert!(apply_hover(&mut tree, "0:2").is_err());
        assert!(apply_hover(&mut tree, ":0").is_err());
        assert!(apply_hover(&mut tree, "4:0").is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn test_render_args_override_config() {
        let args = RenderArgs {
            variant: Some(Variant::Plain),
            grid_threshold: Some(4),
            ..RenderArgs::default()
        };
        let config = args.config().unwrap();
        assert_eq!(config.render.variant, Variant::Plain);
        assert_eq!(config.render.grid_threshold, 4);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/a.bin")), "a.bin");
    }
}
