// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Rendering decoded values into visual trees.
//!
//! - [`render`] maps a [`Value`] to a [`VisualNode`] in one depth-first pass
//! - [`text`] - Terminal output
//! - [`html`] - Standalone HTML pages
//!
//! Dispatch on the value's shape:
//!
//! | Shape      | Rendering                                            |
//! |------------|------------------------------------------------------|
//! | null       | `null`                                               |
//! | boolean    | `true` / `false`                                     |
//! | integer    | exact decimal                                        |
//! | text       | quoted; rich variant adds the length as metadata     |
//! | binary     | hex, plus ASCII when printable; grid when large      |
//! | list       | `N elements`, each element rendered recursively      |
//! | dictionary | `N keys`, rows in key display order                  |

pub mod bytes;
pub mod hover;
pub mod html;
pub mod node;
pub mod text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Value, Variant};

pub use bytes::{BinaryLayout, BinaryView};
pub use hover::ByteHover;
pub use node::{
    dictionary_caption, format_node_path, list_caption, parse_node_path, DictionaryRow, ListItem,
    VisualNode,
};

/// Byte strings longer than this are shown as a grid by the rich variant.
pub const DEFAULT_GRID_THRESHOLD: usize = 100;

/// Columns of a binary grid.
pub const DEFAULT_GRID_COLUMNS: usize = 16;

/// Options for rendering a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Presentation level
    pub variant: Variant,

    /// Length in bytes above which the rich variant switches to a grid
    pub grid_threshold: usize,

    /// Bytes per grid row
    pub grid_columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            grid_threshold: DEFAULT_GRID_THRESHOLD,
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

impl RenderOptions {
    /// Set the presentation level.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the grid threshold.
    pub fn with_grid_threshold(mut self, threshold: usize) -> Self {
        self.grid_threshold = threshold;
        self
    }

    /// Layout for a byte string of `len` bytes.
    pub fn binary_layout(&self, len: usize) -> BinaryLayout {
        if self.variant.is_rich() && len > self.grid_threshold {
            BinaryLayout::Grid {
                columns: self.grid_columns.max(1),
            }
        } else {
            BinaryLayout::Inline
        }
    }
}

/// Render a decoded value.
pub fn render(value: &Value, options: &RenderOptions) -> VisualNode {
    let node = render_value(value, options);
    debug!(
        variant = %options.variant,
        leaves = node.leaf_count(),
        "rendered visual tree"
    );
    node
}

fn render_value(value: &Value, options: &RenderOptions) -> VisualNode {
    let rich = options.variant.is_rich();
    match value {
        Value::Null => VisualNode::Null,
        Value::Boolean(b) => VisualNode::Boolean { value: *b },
        Value::Integer(i) => VisualNode::Integer {
            digits: i.to_string(),
        },
        Value::Text(s) => VisualNode::Text {
            value: s.clone(),
            length: s.chars().count(),
            show_length: rich,
        },
        Value::Binary(b) => render_binary(b, options),
        Value::List(items) => VisualNode::List {
            caption: list_caption(items.len()),
            items: items
                .iter()
                .enumerate()
                .map(|(i, item)| ListItem {
                    index: rich.then_some(i),
                    node: render_value(item, options),
                })
                .collect(),
        },
        Value::Dictionary(dict) => {
            // BTreeMap iteration already follows the key display order.
            let rows = dict
                .iter()
                .map(|(key, item)| DictionaryRow {
                    key: render_value(&Value::from(key.clone()), options),
                    value: render_value(item, options),
                })
                .collect();
            VisualNode::Dictionary {
                caption: dictionary_caption(dict.len()),
                rows,
            }
        }
    }
}

fn render_binary(bytes: &[u8], options: &RenderOptions) -> VisualNode {
    VisualNode::Binary(BinaryView::new(bytes, options.binary_layout(bytes.len())))
}
