// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Check command - verify that files decode.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::common::{format_size, Result};
use bencodex_viewer::config::DecoderConfig;

/// Decode each file and report whether it is valid Bencodex.
#[derive(Args, Clone, Debug)]
pub struct CheckCmd {
    /// Input files
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum container nesting (at most 1024)
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

impl CheckCmd {
    pub fn run(self) -> Result<()> {
        let mut config = DecoderConfig::default();
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        let decoder = config.decoder();

        let mut failed = 0usize;
        for input in &self.inputs {
            let outcome = std::fs::read(input)
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    decoder
                        .decode(&bytes)
                        .map(|value| (value, bytes.len()))
                        .map_err(|e| e.to_string())
                });

            match outcome {
                Ok((value, len)) => {
                    debug!(path = %input.display(), shape = value.type_name(), "check passed");
                    println!(
                        "OK    {} ({}, {})",
                        input.display(),
                        value.type_name(),
                        format_size(len)
                    );
                }
                Err(message) => {
                    failed += 1;
                    println!("FAIL  {}: {}", input.display(), message);
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{failed} of {} files failed to decode", self.inputs.len());
        }
        Ok(())
    }
}
