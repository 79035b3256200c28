// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Stats command - summarize the shapes in a file.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use crate::common::{format_size, Result};
use bencodex_viewer::decode;

/// Show value shape counts for a file.
#[derive(Args, Clone, Debug)]
pub struct StatsCmd {
    /// Input file (Bencodex)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

impl StatsCmd {
    pub fn run(self) -> Result<()> {
        let bytes = std::fs::read(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        let value = decode(&bytes)?;
        let stats = value.stats();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        println!("=== Statistics for {} ===", self.input.display());
        println!("Size: {}", format_size(bytes.len()));
        println!("Root: {}", value.type_name());
        println!("Max depth: {}", stats.max_depth);
        println!("Leaves: {}", stats.leaf_count());
        println!();
        println!("Nulls: {}", stats.nulls);
        println!("Booleans: {}", stats.booleans);
        println!("Integers: {}", stats.integers);
        println!("Texts: {}", stats.texts);
        println!(
            "Binaries: {} ({})",
            stats.binaries,
            format_size(stats.binary_bytes)
        );
        println!("Lists: {}", stats.lists);
        println!("Dictionaries: {} ({} keys)", stats.dictionaries, stats.keys);

        Ok(())
    }
}
