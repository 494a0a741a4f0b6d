//! Configuration for [`KeyboardDistance`](crate::engine::KeyboardDistance).
//!
//! Every struct is `#[serde(default)]`, so a partial JSON document overlays
//! the documented defaults field by field:
//!
//! ```
//! use keydist::config::DistanceConfig;
//!
//! let config = DistanceConfig::from_json_str(r#"{ "layout": "azerty" }"#).unwrap();
//! assert_eq!(config.layout, "azerty");
//! assert!(config.comparer.enabled);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{KeydistError, Result};
use crate::keyboard::layout::{Layout, LayoutRegistry, QWERTY};
use crate::keyboard::proximity::KeyboardModel;
use crate::render::{Tag, TagSet};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Intended character mapped to a typo considered one unit away.
    pub misspells: BTreeMap<char, char>,
    /// Name of the active layout.
    pub layout: String,
    /// Additional named layouts, each a list of rows. Shadows built-ins.
    pub layouts: BTreeMap<String, Vec<String>>,
    /// Comparison string rendering.
    pub comparer: ComparerConfig,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        DistanceConfig {
            misspells: BTreeMap::new(),
            layout: QWERTY.to_string(),
            layouts: BTreeMap::new(),
            comparer: ComparerConfig::default(),
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparerConfig {
    /// Whether results carry a comparison string.
    pub enabled: bool,
    /// Tag templates per change kind.
    pub tags: TagTemplates,
}

impl Default for ComparerConfig {
    fn default() -> Self {
        ComparerConfig {
            enabled: true,
            tags: TagTemplates::default(),
        }
    }
}

/// Template per change kind; `{}` is replaced by the changed characters.
/// `None` (JSON `null`) disables wrapping for that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagTemplates {
    pub insertion: Option<String>,
    pub deletion: Option<String>,
    pub replacement: Option<String>,
}

impl Default for TagTemplates {
    fn default() -> Self {
        TagTemplates {
            insertion: None,
            deletion: None,
            replacement: Some("<u>{}</u>".to_string()),
        }
    }
}

impl TagTemplates {
    /// Convert templates into renderer tags.
    pub fn to_tag_set(&self) -> TagSet {
        TagSet {
            insertion: self.insertion.clone().map(Tag::Template),
            deletion: self.deletion.clone().map(Tag::Template),
            replacement: self.replacement.clone().map(Tag::Template),
        }
    }
}

impl DistanceConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that the layout name resolves and custom layouts have keys.
    ///
    /// The computation itself never requires this: an unknown layout leaves
    /// every character unlocated.
    pub fn validate(&self) -> Result<()> {
        for (name, rows) in &self.layouts {
            if rows.iter().all(|row| row.is_empty()) {
                return Err(KeydistError::invalid_layout(format!(
                    "layout '{name}' has no keys"
                )));
            }
        }

        if !self.layouts.contains_key(&self.layout)
            && !LayoutRegistry::builtin().contains(&self.layout)
        {
            return Err(KeydistError::unknown_layout(self.layout.clone()));
        }

        Ok(())
    }

    /// Names of all layouts visible to this configuration, sorted.
    pub fn layout_names(&self) -> Vec<String> {
        let mut names: Vec<String> = LayoutRegistry::builtin()
            .names()
            .map(str::to_string)
            .chain(self.layouts.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Resolve the active layout, custom layouts first.
    ///
    /// An unknown name resolves to an empty layout.
    pub fn resolve_layout(&self) -> Arc<Layout> {
        if let Some(rows) = self.layouts.get(&self.layout) {
            return Arc::new(Layout::new(self.layout.clone(), rows));
        }

        LayoutRegistry::builtin()
            .get(&self.layout)
            .unwrap_or_else(|| {
                warn!(
                    "unknown layout '{}', every character will be unlocated",
                    self.layout
                );
                Arc::new(Layout::empty(self.layout.clone()))
            })
    }

    /// Build the keyboard model for this configuration.
    pub fn keyboard_model(&self) -> KeyboardModel {
        KeyboardModel::with_misspells(self.resolve_layout(), self.misspells.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::keyboard::proximity::KeyPosition;

    #[test]
    fn test_defaults() {
        let config = DistanceConfig::default();
        assert_eq!(config.layout, "qwerty");
        assert!(config.misspells.is_empty());
        assert!(config.comparer.enabled);
        assert_eq!(config.comparer.tags.insertion, None);
        assert_eq!(config.comparer.tags.deletion, None);
        assert_eq!(
            config.comparer.tags.replacement.as_deref(),
            Some("<u>{}</u>")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_overlay() {
        let config = DistanceConfig::from_json_str(
            r#"{
                "misspells": { "a": "o" },
                "comparer": { "tags": { "deletion": "<s>{}</s>", "insertion": "<i>{}</i>", "replacement": null } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.layout, "qwerty");
        assert_eq!(config.misspells.get(&'a'), Some(&'o'));
        assert!(config.comparer.enabled);
        assert_eq!(config.comparer.tags.insertion.as_deref(), Some("<i>{}</i>"));
        assert_eq!(config.comparer.tags.deletion.as_deref(), Some("<s>{}</s>"));
        assert_eq!(config.comparer.tags.replacement, None);
    }

    #[test]
    fn test_invalid_json() {
        let err = DistanceConfig::from_json_str(r#"{ "misspells": { "ab": "c" } }"#).unwrap_err();
        assert!(matches!(err, KeydistError::Json(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "layout": "йцукен" }}"#).unwrap();

        let config = DistanceConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.layout, "йцукен");
        assert!(config.validate().is_ok());

        let err = DistanceConfig::from_json_file("/nonexistent/keydist.json").unwrap_err();
        assert!(matches!(err, KeydistError::Io(_)));
    }

    #[test]
    fn test_validate_unknown_layout() {
        let config = DistanceConfig {
            layout: "dvorak".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(KeydistError::UnknownLayout(name)) if name == "dvorak"
        ));

        let layout = config.resolve_layout();
        assert!(layout.is_empty());
        assert_eq!(config.keyboard_model().key_cost('q', 'p'), 1);
    }

    #[test]
    fn test_custom_layout() {
        let config = DistanceConfig {
            layout: "grid".to_string(),
            layouts: BTreeMap::from([(
                "grid".to_string(),
                vec!["xa".to_string(), "bc".to_string(), "y".to_string()],
            )]),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.resolve_layout().locate('y'),
            Some(KeyPosition::new(2, 0))
        );
        assert_eq!(config.keyboard_model().key_cost('x', 'y'), 4);
        assert_eq!(
            config.layout_names(),
            vec!["azerty", "grid", "qwerty", "йцукен"]
        );
    }

    #[test]
    fn test_validate_empty_custom_layout() {
        let config = DistanceConfig {
            layouts: BTreeMap::from([("blank".to_string(), vec![String::new()])]),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(KeydistError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_tag_set() {
        let tags = DistanceConfig::default().comparer.tags.to_tag_set();
        assert!(tags.insertion.is_none());
        assert!(tags.deletion.is_none());
        assert_eq!(tags.replacement.unwrap().wrap("ab"), "<u>ab</u>");
    }
}
