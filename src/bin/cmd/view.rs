// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! View command - decode a file and print its tree.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use crate::common::{apply_hover, RenderArgs, Result};
use bencodex_viewer::render::text::to_text;
use bencodex_viewer::Viewer;

/// Output format of the view command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid format '{s}', expected 'text' or 'json'")),
        }
    }
}

/// Decode a file and print its visual tree.
#[derive(Args, Clone, Debug)]
pub struct ViewCmd {
    /// Input file (Bencodex)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Highlight a byte, as PATH:INDEX (e.g. "0/3:5"; ":5" for the root)
    #[arg(long, value_name = "PATH:INDEX")]
    hover: Option<String>,

    #[command(flatten)]
    render: RenderArgs,
}

impl ViewCmd {
    pub fn run(self) -> Result<()> {
        let config = self.render.config()?;
        let mut viewer = Viewer::from_config(&config);
        let tree = viewer.load_file(&self.input)?;

        if let Some(target) = &self.hover {
            apply_hover(tree, target)?;
        }

        match self.format {
            OutputFormat::Text => print!("{}", to_text(tree)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*tree)?),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
