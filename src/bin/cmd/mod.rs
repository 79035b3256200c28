// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod check;
mod html;
mod stats;
mod view;

pub use check::CheckCmd;
pub use html::HtmlCmd;
pub use stats::StatsCmd;
pub use view::ViewCmd;
