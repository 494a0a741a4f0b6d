//! Keyboard-aware distance computation with diff rendering.
//!
//! [`KeyboardDistance::compute`] runs the whole pipeline: lowercase both
//! strings, build the unweighted table, backtrace it while re-weighting
//! replacements by key proximity, and render the comparison string.
//!
//! ```
//! use keydist::engine::KeyboardDistance;
//!
//! let result = KeyboardDistance::new().compute("cat", "cot");
//! assert_eq!(result.distance, 9);
//! assert_eq!(result.comparison.as_deref(), Some("c<u>o</u>t"));
//! ```

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DistanceConfig;
use crate::distance::backtrace::classify;
use crate::distance::change::ChangeSet;
use crate::distance::matrix::DistanceMatrix;
use crate::keyboard::proximity::{KeyPosition, KeyboardModel};
use crate::render::{Renderer, TagSet};

/// Result of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Edit distance with replacements weighted by key proximity.
    pub distance: usize,
    /// Classified edits keyed by source position.
    pub changes: ChangeSet,
    /// Annotated source, when rendering is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
}

impl DistanceResult {
    /// Check whether the two strings compared equal.
    pub fn is_identical(&self) -> bool {
        self.distance == 0
    }
}

/// Compares strings under a keyboard-proximity cost model.
///
/// Configuration is read-only after construction, so one instance can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct KeyboardDistance {
    keyboard: KeyboardModel,
    renderer: Option<Renderer>,
}

impl Default for KeyboardDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardDistance {
    /// Create with the default configuration (qwerty, underlined replacements).
    pub fn new() -> Self {
        Self::with_config(&DistanceConfig::default())
    }

    /// Create from a configuration.
    pub fn with_config(config: &DistanceConfig) -> Self {
        let renderer = config
            .comparer
            .enabled
            .then(|| Renderer::new(config.comparer.tags.to_tag_set()));

        KeyboardDistance {
            keyboard: config.keyboard_model(),
            renderer,
        }
    }

    /// Create from a keyboard model and optional tags. `None` disables rendering.
    pub fn with_parts(keyboard: KeyboardModel, tags: Option<TagSet>) -> Self {
        KeyboardDistance {
            keyboard,
            renderer: tags.map(Renderer::new),
        }
    }

    /// Get the keyboard model.
    pub fn keyboard(&self) -> &KeyboardModel {
        &self.keyboard
    }

    /// Position of a character on the active layout.
    pub fn key_position(&self, ch: char) -> Option<KeyPosition> {
        self.keyboard.locate(ch)
    }

    /// Substitution cost between two characters on the active layout.
    pub fn key_cost(&self, intended: char, actual: char) -> usize {
        self.keyboard.key_cost(intended, actual)
    }

    /// Compare `source` against `target`, case-insensitively.
    ///
    /// When either string is empty the result only carries the length of the
    /// other one: no changes are classified and no comparison is rendered.
    pub fn compute(&self, source: &str, target: &str) -> DistanceResult {
        let s = lowercase(source);
        let t = lowercase(target);

        if s.is_empty() || t.is_empty() {
            return DistanceResult {
                distance: s.len().max(t.len()),
                changes: ChangeSet::new(),
                comparison: None,
            };
        }

        let matrix = DistanceMatrix::build(&s, &t);
        debug!(
            "compute: source {} chars, target {} chars, matrix distance {}",
            s.len(),
            t.len(),
            matrix.distance()
        );

        let backtrace = classify(&s, &t, &matrix, &self.keyboard);
        let comparison = self
            .renderer
            .as_ref()
            .map(|renderer| renderer.render(source, &backtrace.changes));

        DistanceResult {
            distance: backtrace.distance,
            changes: backtrace.changes,
            comparison,
        }
    }

    /// Compare many independent pairs in parallel. Output order follows input.
    pub fn compute_batch<S, T>(&self, pairs: &[(S, T)]) -> Vec<DistanceResult>
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(source, target)| self.compute(source.as_ref(), target.as_ref()))
            .collect()
    }
}

/// Lowercase per character, keeping one character per source slot so that
/// positions stay aligned with the original string.
fn lowercase(s: &str) -> Vec<char> {
    s.chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::change::{ChangeKind, ChangeRecord};
    use crate::render::Tag;

    #[test]
    fn test_empty_inputs() {
        let engine = KeyboardDistance::new();
        assert_eq!(engine.compute("", "abc").distance, 3);
        assert_eq!(engine.compute("abc", "").distance, 3);

        let result = engine.compute("", "");
        assert_eq!(result.distance, 0);
        assert!(result.changes.is_empty());
        assert_eq!(result.comparison, None);
    }

    #[test]
    fn test_identity() {
        let result = KeyboardDistance::new().compute("hello", "hello");
        assert!(result.is_identical());
        assert!(result.changes.is_empty());
        assert_eq!(result.comparison.as_deref(), Some("hello"));
    }

    #[test]
    fn test_case_insensitive() {
        let result = KeyboardDistance::new().compute("Hello", "hELLO");
        assert_eq!(result.distance, 0);
        assert_eq!(result.comparison.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_cat_cot() {
        let engine = KeyboardDistance::new();
        let result = engine.compute("cat", "cot");
        assert_eq!(result.distance, 1 + engine.key_cost('a', 'o') - 1);
        assert_eq!(result.distance, 9);
        assert_eq!(result.comparison.as_deref(), Some("c<u>o</u>t"));
    }

    #[test]
    fn test_diagonal_replacement_adds_one() {
        let result = KeyboardDistance::new().compute("was", "wqs");
        // a (1,0) and q (0,0) share a column: 0 + 1
        assert_eq!(result.distance, 1);

        let result = KeyboardDistance::new().compute("sw", "sa");
        // w (0,1) and a (1,0) are diagonal neighbours
        assert_eq!(result.distance, 1);
    }

    #[test]
    fn test_misspell_override() {
        let config = DistanceConfig::from_json_str(r#"{ "misspells": { "a": "o" } }"#).unwrap();
        let result = KeyboardDistance::with_config(&config).compute("cat", "cot");
        assert_eq!(result.distance, 1);
    }

    #[test]
    fn test_rendering_disabled() {
        let config =
            DistanceConfig::from_json_str(r#"{ "comparer": { "enabled": false } }"#).unwrap();
        let result = KeyboardDistance::with_config(&config).compute("cat", "cot");
        assert_eq!(result.distance, 9);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.comparison, None);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("comparison").is_none());
    }

    #[test]
    fn test_unknown_layout_degrades() {
        let config = DistanceConfig::from_json_str(r#"{ "layout": "colemak" }"#).unwrap();
        let engine = KeyboardDistance::with_config(&config);
        assert_eq!(engine.key_position('q'), None);
        assert_eq!(engine.compute("cat", "cot").distance, 1);
    }

    #[test]
    fn test_cyrillic_layout() {
        let config = DistanceConfig::from_json_str(r#"{ "layout": "йцукен" }"#).unwrap();
        let engine = KeyboardDistance::with_config(&config);
        // к (0,3) -> л (1,7): 4 + 1
        let result = engine.compute("кот", "лот");
        assert_eq!(result.distance, 5);
        assert_eq!(result.comparison.as_deref(), Some("<u>л</u>от"));
    }

    #[test]
    fn test_deletion_with_tag() {
        let engine = KeyboardDistance::with_parts(
            KeyboardDistance::new().keyboard().clone(),
            Some(TagSet {
                deletion: Some(Tag::template("<s>{}</s>")),
                ..TagSet::underline()
            }),
        );
        let result = engine.compute("abc", "ab");
        assert_eq!(result.distance, 1);
        assert_eq!(
            result.changes.get(2),
            Some(&ChangeRecord {
                chars: vec!['c'],
                kind: ChangeKind::Deletion
            })
        );
        assert_eq!(result.comparison.as_deref(), Some("ab<s>c</s>"));
    }

    #[test]
    fn test_default_drops_insertions() {
        let engine = KeyboardDistance::new();

        let result = engine.compute("ac", "axyc");
        assert_eq!(result.changes.get(0).unwrap().text(), "xy");
        assert_eq!(result.comparison.as_deref(), Some("ac"));

        assert_eq!(engine.compute("ab", "xab").comparison.as_deref(), Some("ab"));
        assert_eq!(engine.compute("xab", "ab").comparison.as_deref(), Some("xab"));
    }

    #[test]
    fn test_compute_batch_preserves_order() {
        let engine = KeyboardDistance::new();
        let pairs = vec![("cat", "cot"), ("hello", "hello"), ("", "abc")];
        let results = engine.compute_batch(&pairs);
        let distances: Vec<usize> = results.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![9, 0, 3]);
    }
}
