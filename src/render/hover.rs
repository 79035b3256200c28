// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Transient per-byte hover state for binary views.
//!
//! The state belongs to one rendered binary node and only affects how that
//! node is drawn: the byte under the pointer is highlighted in both the hex
//! and the ASCII rendering. The decoded value is never touched.

use serde::Serialize;
use tracing::warn;

/// Currently hovered byte of one binary view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ByteHover {
    index: Option<usize>,
}

impl ByteHover {
    /// Pointer entered byte `index` of a view holding `len` bytes.
    ///
    /// Out-of-range indices are ignored and leave the state unchanged.
    /// Returns whether the index was accepted.
    pub fn enter(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            warn!(index, len, "ignoring hover outside of binary value");
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Pointer left the view.
    pub fn leave(&mut self) {
        self.index = None;
    }

    /// Index of the hovered byte, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Check if byte `index` should be highlighted.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.index == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let hover = ByteHover::default();
        assert!(!hover.is_active());
        assert_eq!(hover.index(), None);
        assert!(!hover.is_highlighted(0));
    }

    #[test]
    fn test_enter_and_leave() {
        let mut hover = ByteHover::default();
        assert!(hover.enter(2, 4));
        assert_eq!(hover.index(), Some(2));
        assert!(hover.is_highlighted(2));
        assert!(!hover.is_highlighted(1));

        assert!(hover.enter(0, 4));
        assert!(hover.is_highlighted(0));
        assert!(!hover.is_highlighted(2));

        hover.leave();
        assert!(!hover.is_active());
    }

    #[test]
    fn test_enter_out_of_range_is_ignored() {
        let mut hover = ByteHover::default();
        assert!(hover.enter(1, 2));
        assert!(!hover.enter(2, 2));
        assert_eq!(hover.index(), Some(1));

        let mut empty = ByteHover::default();
        assert!(!empty.enter(0, 0));
        assert!(!empty.is_active());
    }
}
