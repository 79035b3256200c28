// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Standalone HTML pages for a visual tree.
//!
//! Markup per variant:
//! - `plain`: tables and divs only
//! - `styled`: adds an embedded stylesheet
//! - `rich`: adds binary grids, element indices, text length tooltips and a
//!   small script that highlights the hovered byte in both the hex and the
//!   ASCII rendering of the same value

use std::fmt::Write as _;

use crate::core::Variant;

use super::bytes::{BinaryView, GridRow};
use super::node::VisualNode;

const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 1.5em; }
table { border-collapse: collapse; margin: 2px 0; }
caption { text-align: left; font-size: 0.8em; color: #777; padding: 0 0 2px 2px; }
table.list > tbody > tr > td, table.list > tr > td,
table.dictionary > tbody > tr > td, table.dictionary > tr > td,
table.dictionary > tbody > tr > th, table.dictionary > tr > th {
  border: 1px solid #ccc; padding: 3px 6px; vertical-align: top; text-align: left;
}
table.dictionary th { background: #f4f4f8; font-weight: normal; }
th.index { color: #999; font-weight: normal; font-size: 0.8em; padding-right: 6px; }
.null { color: #999; font-style: italic; }
.boolean { color: #a0522d; }
.integer { color: #1e6fb8; }
.string { color: #2e7d32; }
.binary { font-family: monospace; color: #6a1b9a; word-break: break-all; }
.binary .ascii { color: #555; }
table.grid { font-family: monospace; font-size: 0.9em; }
table.grid th { color: #999; font-weight: normal; padding-right: 1em; }
table.grid td { padding: 0 2px; }
table.grid td.gutter { padding-left: 1em; color: #555; }
.hover { background: #ffe082; }
"#;

const HOVER_SCRIPT: &str = r#"
document.querySelectorAll('.binary').forEach(function (view) {
  function clear() {
    view.querySelectorAll('.hover').forEach(function (el) { el.classList.remove('hover'); });
  }
  view.addEventListener('mouseover', function (event) {
    var cell = event.target.closest('[data-byte]');
    if (!cell || !view.contains(cell)) return;
    clear();
    view.querySelectorAll('[data-byte="' + cell.dataset.byte + '"]').forEach(function (el) {
      el.classList.add('hover');
    });
  });
  view.addEventListener('mouseleave', clear);
});
"#;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a full HTML document showing `node`.
pub fn to_html_page(node: &VisualNode, variant: Variant, title: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{}</title>", escape_html(title));
    if variant.is_styled() {
        let _ = writeln!(page, "<style>{STYLESHEET}</style>");
    }
    page.push_str("</head>\n<body>\n<div id=\"app\">\n");
    page.push_str(&to_html(node, variant));
    page.push_str("\n</div>\n");
    if variant.is_rich() {
        let _ = writeln!(page, "<script>{HOVER_SCRIPT}</script>");
    }
    page.push_str("</body>\n</html>\n");
    page
}

/// Render `node` as an HTML fragment.
pub fn to_html(node: &VisualNode, variant: Variant) -> String {
    let mut out = String::new();
    write_node(&mut out, node, variant);
    out
}

fn write_node(out: &mut String, node: &VisualNode, variant: Variant) {
    match node {
        VisualNode::Null => out.push_str("<div class=\"null\">null</div>"),
        VisualNode::Boolean { value } => {
            let _ = write!(out, "<div class=\"boolean\">{value}</div>");
        }
        VisualNode::Integer { digits } => {
            let _ = write!(out, "<div class=\"integer\">{digits}</div>");
        }
        VisualNode::Text {
            value,
            length,
            show_length,
        } => {
            if *show_length {
                let _ = write!(
                    out,
                    "<div class=\"string\" title=\"{length} characters\">&quot;{}&quot;</div>",
                    escape_html(value)
                );
            } else {
                let _ = write!(
                    out,
                    "<div class=\"string\">&quot;{}&quot;</div>",
                    escape_html(value)
                );
            }
        }
        VisualNode::Binary(view) => write_binary(out, view, variant),
        VisualNode::List { caption, items } => {
            let _ = write!(
                out,
                "<table class=\"list\"><caption>{}</caption>",
                escape_html(caption)
            );
            for item in items {
                out.push_str("<tr>");
                if let Some(index) = item.index {
                    let _ = write!(out, "<th class=\"index\">{index}</th>");
                }
                out.push_str("<td>");
                write_node(out, &item.node, variant);
                out.push_str("</td></tr>");
            }
            out.push_str("</table>");
        }
        VisualNode::Dictionary { caption, rows } => {
            let _ = write!(
                out,
                "<table class=\"dictionary\"><caption>{}</caption>",
                escape_html(caption)
            );
            for row in rows {
                out.push_str("<tr><th>");
                write_node(out, &row.key, variant);
                out.push_str("</th><td>");
                write_node(out, &row.value, variant);
                out.push_str("</td></tr>");
            }
            out.push_str("</table>");
        }
    }
}

fn write_binary(out: &mut String, view: &BinaryView, variant: Variant) {
    if view.is_grid() {
        write_grid(out, view);
        return;
    }

    out.push_str("<div class=\"binary\">");
    if variant.is_rich() {
        for (i, b) in view.bytes().iter().enumerate() {
            let _ = write!(
                out,
                "<span data-byte=\"{i}\"{}>{b:02x}</span>",
                hover_class(view, i)
            );
        }
    } else {
        out.push_str(&view.hex);
    }

    if let Some(ascii) = &view.ascii {
        out.push_str("<br><span class=\"ascii\">&quot;");
        if variant.is_rich() {
            for (i, c) in ascii.chars().enumerate() {
                let _ = write!(
                    out,
                    "<span data-byte=\"{i}\"{}>{}</span>",
                    hover_class(view, i),
                    escape_html(&c.to_string())
                );
            }
        } else {
            out.push_str(&escape_html(ascii));
        }
        out.push_str("&quot;</span>");
    }
    out.push_str("</div>");
}

fn write_grid(out: &mut String, view: &BinaryView) {
    let _ = write!(
        out,
        "<div class=\"binary\"><table class=\"grid\"><caption>{} bytes</caption>",
        view.length
    );
    for row in view.rows() {
        write_grid_row(out, view, &row);
    }
    out.push_str("</table></div>");
}

fn write_grid_row(out: &mut String, view: &BinaryView, row: &GridRow<'_>) {
    let _ = write!(out, "<tr><th>{:08x}</th>", row.offset);
    for (i, cell) in row.hex_cells().iter().enumerate() {
        let index = row.offset + i;
        let _ = write!(
            out,
            "<td data-byte=\"{index}\"{}>{cell}</td>",
            hover_class(view, index)
        );
    }
    out.push_str("<td class=\"gutter\">");
    for (i, c) in row.gutter().chars().enumerate() {
        let index = row.offset + i;
        let _ = write!(
            out,
            "<span data-byte=\"{index}\"{}>{}</span>",
            hover_class(view, index),
            escape_html(&c.to_string())
        );
    }
    out.push_str("</td></tr>");
}

fn hover_class(view: &BinaryView, index: usize) -> &'static str {
    if view.hover().is_highlighted(index) {
        " class=\"hover\""
    } else {
        ""
    }
}
