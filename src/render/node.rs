// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Visual tree produced by rendering a value.

use serde::Serialize;

use crate::core::{Result, ViewerError};

use super::bytes::BinaryView;

/// A node of the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualNode {
    Null,
    Boolean {
        value: bool,
    },
    Integer {
        /// Exact decimal representation
        digits: String,
    },
    Text {
        value: String,
        /// Length in characters, shown as metadata by the rich variant
        length: usize,
        show_length: bool,
    },
    Binary(BinaryView),
    List {
        caption: String,
        items: Vec<ListItem>,
    },
    Dictionary {
        caption: String,
        rows: Vec<DictionaryRow>,
    },
}

/// One element of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Element index, shown by the rich variant only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub node: VisualNode,
}

/// One key/value row of a rendered dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryRow {
    pub key: VisualNode,
    pub value: VisualNode,
}

/// Caption of a list with `len` elements.
pub fn list_caption(len: usize) -> String {
    format!("{len} elements")
}

/// Caption of a dictionary with `len` keys.
pub fn dictionary_caption(len: usize) -> String {
    if len == 1 {
        "1 key".to_string()
    } else {
        format!("{len} keys")
    }
}

impl VisualNode {
    /// Scalar literal as displayed, for leaf nodes other than binary.
    pub fn literal(&self) -> Option<String> {
        match self {
            VisualNode::Null => Some("null".to_string()),
            VisualNode::Boolean { value } => {
                let literal = if *value { "true" } else { "false" };
                Some(literal.to_string())
            }
            VisualNode::Integer { digits } => Some(digits.clone()),
            VisualNode::Text { value, .. } => Some(format!("\"{value}\"")),
            VisualNode::Binary(_) | VisualNode::List { .. } | VisualNode::Dictionary { .. } => {
                None
            }
        }
    }

    /// Caption of a container node.
    pub fn caption(&self) -> Option<&str> {
        match self {
            VisualNode::List { caption, .. } | VisualNode::Dictionary { caption, .. } => {
                Some(caption)
            }
            _ => None,
        }
    }

    /// Number of leaf nodes, dictionary keys included.
    pub fn leaf_count(&self) -> usize {
        match self {
            VisualNode::List { items, .. } => items.iter().map(|i| i.node.leaf_count()).sum(),
            VisualNode::Dictionary { rows, .. } => rows
                .iter()
                .map(|r| r.key.leaf_count() + r.value.leaf_count())
                .sum(),
            _ => 1,
        }
    }

    /// Number of addressable children.
    ///
    /// Dictionary row `i` contributes its key as child `2i` and its value as
    /// child `2i + 1`.
    pub fn child_count(&self) -> usize {
        match self {
            VisualNode::List { items, .. } => items.len(),
            VisualNode::Dictionary { rows, .. } => rows.len() * 2,
            _ => 0,
        }
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut VisualNode> {
        match self {
            VisualNode::List { items, .. } => items.get_mut(index).map(|i| &mut i.node),
            VisualNode::Dictionary { rows, .. } => rows.get_mut(index / 2).map(|r| {
                if index % 2 == 0 {
                    &mut r.key
                } else {
                    &mut r.value
                }
            }),
            _ => None,
        }
    }

    /// Walk child indices from this node.
    pub fn node_at_mut(&mut self, path: &[usize]) -> Result<&mut VisualNode> {
        let mut node = self;
        for (depth, &index) in path.iter().enumerate() {
            let count = node.child_count();
            node = node.child_mut(index).ok_or_else(|| {
                ViewerError::invalid_path(
                    format_node_path(path),
                    format!("index {index} at depth {depth} is out of range ({count} children)"),
                )
            })?;
        }
        Ok(node)
    }

    /// Binary view of this node, if it is a byte string.
    pub fn as_binary_mut(&mut self) -> Option<&mut BinaryView> {
        match self {
            VisualNode::Binary(view) => Some(view),
            _ => None,
        }
    }
}

/// Parse a node path such as `0/3/1`; an empty string addresses the root.
pub fn parse_node_path(s: &str) -> Result<Vec<usize>> {
    let trimmed = s.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split('/')
        .map(|part| {
            part.trim().parse::<usize>().map_err(|_| {
                ViewerError::invalid_path(s, format!("'{part}' is not a child index"))
            })
        })
        .collect()
}

/// Format a node path as written by [`parse_node_path`].
pub fn format_node_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::bytes::BinaryLayout;

    fn text(s: &str) -> VisualNode {
        VisualNode::Text {
            value: s.to_string(),
            length: s.chars().count(),
            show_length: false,
        }
    }

    fn sample() -> VisualNode {
        VisualNode::Dictionary {
            caption: dictionary_caption(1),
            rows: vec![DictionaryRow {
                key: text("k"),
                value: VisualNode::List {
                    caption: list_caption(2),
                    items: vec![
                        ListItem {
                            index: None,
                            node: VisualNode::Null,
                        },
                        ListItem {
                            index: None,
                            node: VisualNode::Binary(BinaryView::new(b"ab", BinaryLayout::Inline)),
                        },
                    ],
                },
            }],
        }
    }

    #[test]
    fn test_captions() {
        assert_eq!(list_caption(0), "0 elements");
        assert_eq!(list_caption(1), "1 elements");
        assert_eq!(list_caption(2), "2 elements");
        assert_eq!(dictionary_caption(0), "0 keys");
        assert_eq!(dictionary_caption(1), "1 key");
        assert_eq!(dictionary_caption(5), "5 keys");
    }

    #[test]
    fn test_literals() {
        assert_eq!(VisualNode::Null.literal().as_deref(), Some("null"));
        assert_eq!(
            VisualNode::Boolean { value: false }.literal().as_deref(),
            Some("false")
        );
        assert_eq!(text("a b").literal().as_deref(), Some("\"a b\""));
        assert!(sample().literal().is_none());
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(sample().leaf_count(), 3);
        assert_eq!(VisualNode::Null.leaf_count(), 1);
    }

    #[test]
    fn test_node_at_mut() {
        let mut tree = sample();
        assert_eq!(*tree.node_at_mut(&[0]).unwrap(), text("k"));
        assert_eq!(*tree.node_at_mut(&[1, 0]).unwrap(), VisualNode::Null);
        assert!(tree.node_at_mut(&[1, 1]).unwrap().as_binary_mut().is_some());
        assert!(tree.node_at_mut(&[]).unwrap().caption().is_some());
    }

    #[test]
    fn test_node_at_mut_out_of_range() {
        let mut tree = sample();
        let err = tree.node_at_mut(&[1, 5]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid node path '1/5': index 5 at depth 1 is out of range (2 children)"
        );
        assert!(tree.node_at_mut(&[0, 0]).is_err());
    }

    #[test]
    fn test_parse_node_path() {
        assert_eq!(parse_node_path("").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_node_path("/").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_node_path("0/3/1").unwrap(), vec![0, 3, 1]);
        assert_eq!(parse_node_path("/2/").unwrap(), vec![2]);
        assert!(parse_node_path("0/x").is_err());
        assert_eq!(format_node_path(&[0, 3, 1]), "0/3/1");
    }
}
