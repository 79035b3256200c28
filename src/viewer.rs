// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Viewer session.
//!
//! A [`Viewer`] shows at most one value at a time. Each successful load
//! replaces the displayed value and its visual tree; a failed load leaves
//! the current view as it was.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bencodex_viewer::{RenderOptions, Viewer};
//! use bencodex_viewer::render::text::to_text;
//!
//! let mut viewer = Viewer::new(RenderOptions::default());
//! let tree = viewer.load_file("block.bin")?;
//! print!("{}", to_text(tree));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tracing::{debug, warn};

use crate::config::ViewerConfig;
use crate::core::{Result, Value, ViewerError};
use crate::encoding::bencodex::BencodexDecoder;
use crate::render::{render, RenderOptions, VisualNode};

/// Currently displayed value and its rendering.
#[derive(Debug, Clone)]
struct Displayed {
    value: Value,
    tree: VisualNode,
}

/// Decode-and-render session holding the currently displayed value.
#[derive(Debug, Clone)]
pub struct Viewer {
    decoder: BencodexDecoder,
    options: RenderOptions,
    displayed: Option<Displayed>,
}

impl Viewer {
    /// Create an empty viewer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            decoder: BencodexDecoder::new(),
            options,
            displayed: None,
        }
    }

    /// Create an empty viewer from configuration.
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            decoder: config.decoder.decoder(),
            options: config.render.clone(),
            displayed: None,
        }
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Decode `bytes` and display the result, replacing the current view.
    pub fn load(&mut self, bytes: &[u8]) -> Result<&mut VisualNode> {
        let value = self.decoder.decode(bytes).map_err(|e| {
            let err = ViewerError::from(e);
            warn!(fields = ?err.log_fields(), "decode failed; keeping current view");
            err
        })?;
        Ok(self.show(value))
    }

    /// Read a file and load its contents.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&mut VisualNode> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ViewerError::io(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read input file");
        self.load(&bytes)
    }

    /// Display an already decoded value, replacing the current view.
    pub fn show(&mut self, value: Value) -> &mut VisualNode {
        let tree = render(&value, &self.options);
        let displayed = self.displayed.insert(Displayed { value, tree });
        &mut displayed.tree
    }

    /// Currently displayed value.
    pub fn current(&self) -> Option<&Value> {
        self.displayed.as_ref().map(|d| &d.value)
    }

    /// Visual tree of the currently displayed value.
    pub fn tree(&self) -> Option<&VisualNode> {
        self.displayed.as_ref().map(|d| &d.tree)
    }

    /// Mutable visual tree, for presentation state such as hover.
    pub fn tree_mut(&mut self) -> Option<&mut VisualNode> {
        self.displayed.as_mut().map(|d| &mut d.tree)
    }

    /// Drop the displayed value.
    pub fn clear(&mut self) {
        self.displayed = None;
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
