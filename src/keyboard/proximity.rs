//! Key positions and the proximity cost between two keys.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::keyboard::layout::Layout;

/// Position of a key on a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPosition {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index within the row.
    pub col: usize,
}

impl KeyPosition {
    /// Create a new key position.
    pub fn new(row: usize, col: usize) -> Self {
        KeyPosition { row, col }
    }
}

/// Substitution cost model over a single layout.
///
/// The cost between two located keys is `1` when they are diagonal neighbours
/// and `colDelta + rowDelta²` otherwise. Rows on physical keyboards are
/// horizontally staggered, so a jump between rows is penalised quadratically
/// while a jump along a row grows linearly. An explicit misspell entry for
/// the pair, or an unlocated character, costs `1`.
#[derive(Debug, Clone)]
pub struct KeyboardModel {
    layout: Arc<Layout>,
    misspells: BTreeMap<char, char>,
}

impl KeyboardModel {
    /// Create a model over the given layout with no misspell overrides.
    pub fn new(layout: Arc<Layout>) -> Self {
        KeyboardModel {
            layout,
            misspells: BTreeMap::new(),
        }
    }

    /// Create a model with misspell overrides.
    pub fn with_misspells(layout: Arc<Layout>, misspells: BTreeMap<char, char>) -> Self {
        KeyboardModel { layout, misspells }
    }

    /// Get the active layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Find the position of a character on the active layout.
    pub fn locate(&self, ch: char) -> Option<KeyPosition> {
        self.layout.locate(ch)
    }

    /// Cost of typing `actual` where `intended` was expected. Always at least 1.
    ///
    /// The misspell lookup is directional: only an entry keyed by `intended`
    /// whose value is `actual` short-circuits the geometry.
    pub fn key_cost(&self, intended: char, actual: char) -> usize {
        if self.misspells.get(&intended) == Some(&actual) {
            return 1;
        }

        let (Some(a), Some(b)) = (self.locate(intended), self.locate(actual)) else {
            return 1;
        };

        let col_delta = a.col.abs_diff(b.col);
        let row_delta = a.row.abs_diff(b.row);
        if col_delta == 1 && row_delta == 1 {
            return 1;
        }

        (col_delta + row_delta * row_delta).max(1)
    }
}
