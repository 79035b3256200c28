// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte string presentation: hex, ASCII, and binary grids.

use serde::Serialize;

use super::hover::ByteHover;

/// Lowest printable ASCII byte (space).
pub const PRINTABLE_MIN: u8 = 0x20;

/// Highest printable ASCII byte (`~`).
pub const PRINTABLE_MAX: u8 = 0x7e;

/// Check if a byte is printable ASCII.
pub fn is_printable(byte: u8) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte)
}

/// Check if every byte is printable ASCII.
///
/// An empty slice qualifies.
pub fn is_printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| is_printable(b))
}

/// Lowercase hex, two zero-padded digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// ASCII rendering, only when every byte is printable.
pub fn ascii_text(bytes: &[u8]) -> Option<String> {
    if is_printable_ascii(bytes) {
        Some(bytes.iter().map(|&b| b as char).collect())
    } else {
        None
    }
}

/// How a byte string is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum BinaryLayout {
    /// Hex inline, with an ASCII line when printable
    Inline,
    /// Hex-editor style grid
    Grid { columns: usize },
}

/// One row of a binary grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow<'a> {
    /// Offset of the first byte in the row
    pub offset: usize,
    /// Bytes of the row (the last row may be short)
    pub bytes: &'a [u8],
}

impl GridRow<'_> {
    /// Hex cells of the row.
    pub fn hex_cells(&self) -> Vec<String> {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// ASCII gutter; non-printable bytes show as `.`.
    pub fn gutter(&self) -> String {
        self.bytes
            .iter()
            .map(|&b| if is_printable(b) { b as char } else { '.' })
            .collect()
    }
}

/// Rendered byte string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryView {
    #[serde(skip)]
    bytes: Vec<u8>,
    /// Length in bytes
    pub length: usize,
    /// Lowercase hex of all bytes
    pub hex: String,
    /// Parallel ASCII rendering, present iff every byte is printable
    pub ascii: Option<String>,
    #[serde(flatten)]
    pub layout: BinaryLayout,
    /// Highlighted byte index, omitted when nothing is hovered
    #[serde(rename = "hovered", skip_serializing_if = "is_idle")]
    hover: ByteHover,
}

fn is_idle(hover: &ByteHover) -> bool {
    !hover.is_active()
}

impl BinaryView {
    /// Build a view of `bytes` with the given layout.
    pub fn new(bytes: &[u8], layout: BinaryLayout) -> Self {
        Self {
            bytes: bytes.to_vec(),
            length: bytes.len(),
            hex: to_hex(bytes),
            ascii: ascii_text(bytes),
            layout,
            hover: ByteHover::default(),
        }
    }

    /// Raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_grid(&self) -> bool {
        matches!(self.layout, BinaryLayout::Grid { .. })
    }

    /// Grid rows; inline views yield a single row holding every byte.
    pub fn rows(&self) -> Vec<GridRow<'_>> {
        let columns = match self.layout {
            BinaryLayout::Grid { columns } => columns.max(1),
            BinaryLayout::Inline => self.bytes.len().max(1),
        };
        self.bytes
            .chunks(columns)
            .enumerate()
            .map(|(i, chunk)| GridRow {
                offset: i * columns,
                bytes: chunk,
            })
            .collect()
    }

    /// Hover state of this view.
    pub fn hover(&self) -> &ByteHover {
        &self.hover
    }

    /// Highlight byte `index` in both renderings.
    pub fn hover_enter(&mut self, index: usize) -> bool {
        self.hover.enter(index, self.bytes.len())
    }

    /// Clear the highlight.
    pub fn hover_leave(&mut self) {
        self.hover.leave();
    }
}
