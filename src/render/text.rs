// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Plain-text output of a visual tree.
//!
//! ```text
//! 2 keys
//!   61 "a": null
//!   "b":
//!     2 elements
//!       [0] true
//!       [1] null
//! ```

use super::bytes::{BinaryLayout, BinaryView, GridRow};
use super::node::VisualNode;

/// Render a visual tree as indented text, one line per row.
pub fn to_text(node: &VisualNode) -> String {
    let mut out = lines(node).join("\n");
    out.push('\n');
    out
}

fn lines(node: &VisualNode) -> Vec<String> {
    match node {
        VisualNode::Binary(view) => binary_lines(view),
        VisualNode::List { caption, items } => {
            let mut out = vec![caption.clone()];
            for item in items {
                let marker = match item.index {
                    Some(i) => format!("[{i}] "),
                    None => "- ".to_string(),
                };
                out.extend(prefixed(lines(&item.node), &marker, 2));
            }
            out
        }
        VisualNode::Dictionary { caption, rows } => {
            let mut out = vec![caption.clone()];
            for row in rows {
                let key = lines(&row.key);
                let value = lines(&row.value);
                if key.len() == 1 && value.len() == 1 {
                    out.push(format!("  {}: {}", key[0], value[0]));
                    continue;
                }
                let last = key.len() - 1;
                for (i, line) in key.into_iter().enumerate() {
                    if i == last {
                        out.push(format!("  {line}:"));
                    } else {
                        out.push(format!("  {line}"));
                    }
                }
                out.extend(value.into_iter().map(|line| format!("    {line}")));
            }
            out
        }
        leaf => vec![leaf.literal().unwrap_or_default()],
    }
}

/// Prefix the first line with `marker` and align the rest under it.
fn prefixed(lines: Vec<String>, marker: &str, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let hang = " ".repeat(marker.len());
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{pad}{marker}{line}")
            } else {
                format!("{pad}{hang}{line}")
            }
        })
        .collect()
}

fn binary_lines(view: &BinaryView) -> Vec<String> {
    if view.is_grid() {
        return view.rows().iter().map(|row| grid_line(view, row)).collect();
    }

    let hex = mark_each(view, |b| format!("{b:02x}"));
    match &view.ascii {
        Some(_) if hex.is_empty() => vec!["\"\"".to_string()],
        Some(_) => {
            let ascii = mark_each(view, |b| (b as char).to_string());
            vec![format!("{hex} \"{ascii}\"")]
        }
        None => vec![hex],
    }
}

/// Render each byte with `cell`, bracketing the hovered one.
fn mark_each(view: &BinaryView, cell: impl Fn(u8) -> String) -> String {
    view.bytes()
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let rendered = cell(b);
            if view.hover().is_highlighted(i) {
                format!("[{rendered}]")
            } else {
                rendered
            }
        })
        .collect()
}

fn grid_line(view: &BinaryView, row: &GridRow<'_>) -> String {
    let columns = match view.layout {
        BinaryLayout::Grid { columns } => columns,
        BinaryLayout::Inline => row.bytes.len(),
    };
    let mut cells: Vec<String> = row
        .hex_cells()
        .into_iter()
        .enumerate()
        .map(|(i, cell)| {
            if view.hover().is_highlighted(row.offset + i) {
                format!("[{cell}]")
            } else {
                format!(" {cell} ")
            }
        })
        .collect();
    cells.resize(columns, "    ".to_string());
    let gutter: String = row
        .gutter()
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if view.hover().is_highlighted(row.offset + i) {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect();
    format!("{:08x} {} |{}|", row.offset, cells.join(""), gutter)
}
