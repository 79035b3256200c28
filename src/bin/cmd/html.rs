// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! HTML command - write a standalone page showing a file's tree.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Args;

use crate::common::{display_name, format_size, RenderArgs, Result};
use bencodex_viewer::render::html::to_html_page;
use bencodex_viewer::Viewer;

/// Write an HTML page showing a file's visual tree.
#[derive(Args, Clone, Debug)]
pub struct HtmlCmd {
    /// Input file (Bencodex)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to the input path with an .html extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Page title (defaults to the input file name)
    #[arg(long)]
    title: Option<String>,

    #[command(flatten)]
    render: RenderArgs,
}

impl HtmlCmd {
    pub fn run(self) -> Result<()> {
        let output = self
            .output
            .unwrap_or_else(|| self.input.with_extension("html"));
        if is_same_file(&output, &self.input) {
            anyhow::bail!(
                "Output {} would overwrite the input file; choose another path with -o",
                output.display()
            );
        }

        let config = self.render.config()?;
        let variant = config.render.variant;
        let mut viewer = Viewer::from_config(&config);
        let tree = viewer.load_file(&self.input)?;

        let title = self.title.unwrap_or_else(|| display_name(&self.input));
        let page = to_html_page(tree, variant, &title);

        std::fs::write(&output, &page)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        println!(
            "Wrote {} ({}, {} variant)",
            output.display(),
            format_size(page.len()),
            variant
        );
        Ok(())
    }
}

/// Check whether two paths name the same file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
