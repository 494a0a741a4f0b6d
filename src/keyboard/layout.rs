//! Keyboard layouts and the process-wide table of built-in layouts.
//!
//! A layout is an ordered sequence of rows, each row an ordered sequence of
//! key characters. A character's position is `(row, column within row)` of
//! its first occurrence. Layouts are immutable once built.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::keyboard::proximity::KeyPosition;

/// Name of the Latin QWERTY layout.
pub const QWERTY: &str = "qwerty";

/// Name of the Latin AZERTY layout.
pub const AZERTY: &str = "azerty";

/// Name of the Cyrillic ЙЦУКЕН layout.
pub const JCUKEN: &str = "йцукен";

const QWERTY_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm,."];

const AZERTY_ROWS: &[&str] = &["azertyuiop", "qsdfghjklmù", "wxcvbn.,"];

const JCUKEN_ROWS: &[&str] = &["йцукенгшщзхъ", "фывапролджэ", "ячсмитьбю."];

/// Built-in layouts, constructed once on first use.
pub static BUILTIN_LAYOUTS: LazyLock<LayoutRegistry> = LazyLock::new(|| {
    let mut registry = LayoutRegistry::new();
    registry.register(Layout::new(QWERTY, QWERTY_ROWS));
    registry.register(Layout::new(AZERTY, AZERTY_ROWS));
    registry.register(Layout::new(JCUKEN, JCUKEN_ROWS));
    registry
});

/// A named keyboard layout.
#[derive(Debug, Clone)]
pub struct Layout {
    name: String,
    rows: Vec<Vec<char>>,
    index: AHashMap<char, KeyPosition>,
}

impl Layout {
    /// Create a layout from its rows.
    pub fn new<N, I, R>(name: N, rows: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let mut index = AHashMap::new();
        for (row, keys) in rows.iter().enumerate() {
            for (col, &key) in keys.iter().enumerate() {
                // First occurrence wins.
                index.entry(key).or_insert(KeyPosition::new(row, col));
            }
        }

        Layout {
            name: name.into(),
            rows,
            index,
        }
    }

    /// Create a layout with no keys. Every character is unlocated.
    pub fn empty<N: Into<String>>(name: N) -> Self {
        Layout::new(name, std::iter::empty::<&str>())
    }

    /// Get the layout name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rows of the layout.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Check whether the layout has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Find the position of a character, if any row contains it.
    pub fn locate(&self, ch: char) -> Option<KeyPosition> {
        self.index.get(&ch).copied()
    }
}

/// A set of layouts addressable by name.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: BTreeMap<String, Arc<Layout>>,
}

impl LayoutRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry of built-in layouts.
    pub fn builtin() -> &'static LayoutRegistry {
        &BUILTIN_LAYOUTS
    }

    /// Add a layout, replacing any layout with the same name.
    pub fn register(&mut self, layout: Layout) {
        self.layouts
            .insert(layout.name().to_string(), Arc::new(layout));
    }

    /// Look up a layout by name.
    pub fn get(&self, name: &str) -> Option<Arc<Layout>> {
        self.layouts.get(name).cloned()
    }

    /// Check whether a layout with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    /// Names of all registered layouts, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }

    /// Number of registered layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
