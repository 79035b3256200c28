// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # bencodex-viewer CLI
//!
//! Command-line viewer for Bencodex files.
//!
//! ## Usage
//!
//! ```sh
//! # Print the tree of a file
//! bencodex-viewer view block.bin
//!
//! # Highlight byte 5 of the byte string at child path 0/3
//! bencodex-viewer view block.bin --hover 0/3:5
//!
//! # Write a standalone HTML page
//! bencodex-viewer html block.bin -o block.html --variant styled
//!
//! # Verify that files decode
//! bencodex-viewer check *.bin
//!
//! # Count value shapes
//! bencodex-viewer stats block.bin
//! ```

mod cmd;
mod common;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use cmd::{CheckCmd, HtmlCmd, StatsCmd, ViewCmd};
use common::Result;

/// bencodex-viewer - Bencodex data viewer
///
/// Decode Bencodex files and show them as trees, in the terminal or as
/// HTML pages.
#[derive(Parser, Clone)]
#[command(name = "bencodex-viewer")]
#[command(about = "Viewer for Bencodex-encoded binary data", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode a file and print its tree (text or JSON)
    View(ViewCmd),

    /// Write a standalone HTML page for a file
    Html(HtmlCmd),

    /// Check that files are valid Bencodex
    Check(CheckCmd),

    /// Show value shape statistics for a file
    Stats(StatsCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.verbose);

    match cli.command {
        Commands::View(cmd) => cmd.run(),
        Commands::Html(cmd) => cmd.run(),
        Commands::Check(cmd) => cmd.run(),
        Commands::Stats(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
