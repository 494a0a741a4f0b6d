//! Diff rendering.
//!
//! Turns a [`ChangeSet`] and the original source string into an annotated
//! comparison string, wrapping changed characters with per-kind tags.

use std::fmt;
use std::sync::Arc;

use crate::distance::change::{ChangeKind, ChangeRecord, ChangeSet};

/// Placeholder substituted by template tags.
pub const TEMPLATE_PLACEHOLDER: &str = "{}";

/// Signature of a custom wrapping function.
pub type TagFn = dyn Fn(&str) -> String + Send + Sync;

/// Wraps the changed characters of one record.
#[derive(Clone)]
pub enum Tag {
    /// Every `{}` in the template is replaced by the changed characters.
    Template(String),
    /// Arbitrary wrapping function.
    Custom(Arc<TagFn>),
}

impl Tag {
    /// Create a template tag such as `"<u>{}</u>"`.
    pub fn template<S: Into<String>>(template: S) -> Self {
        Tag::Template(template.into())
    }

    /// Create a tag from a closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Tag::Custom(Arc::new(f))
    }

    /// Wrap the given text.
    pub fn wrap(&self, text: &str) -> String {
        match self {
            Tag::Template(template) => template.replace(TEMPLATE_PLACEHOLDER, text),
            Tag::Custom(f) => f(text),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Tag::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Optional tag per change kind.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    pub insertion: Option<Tag>,
    pub deletion: Option<Tag>,
    pub replacement: Option<Tag>,
}

impl TagSet {
    /// Tag set with every kind disabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Underline replacements, drop insertions and blank deletions.
    pub fn underline() -> Self {
        TagSet {
            insertion: None,
            deletion: None,
            replacement: Some(Tag::template("<u>{}</u>")),
        }
    }

    /// Get the tag configured for a kind.
    pub fn get(&self, kind: ChangeKind) -> Option<&Tag> {
        match kind {
            ChangeKind::Insertion => self.insertion.as_ref(),
            ChangeKind::Deletion => self.deletion.as_ref(),
            ChangeKind::Replacement => self.replacement.as_ref(),
            ChangeKind::Unchanged => None,
        }
    }
}

/// Renders comparison strings.
#[derive(Debug, Clone)]
pub struct Renderer {
    tags: TagSet,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(TagSet::underline())
    }
}

impl Renderer {
    /// Create a renderer with the given tags.
    pub fn new(tags: TagSet) -> Self {
        Renderer { tags }
    }

    /// Render `changes` over the original (not lowercased) `source`.
    ///
    /// Positions are applied in descending order so that an insertion never
    /// shifts a slot that still has to be visited.
    pub fn render(&self, source: &str, changes: &ChangeSet) -> String {
        self.apply(source, changes.iter_descending())
    }

    fn apply<'a, I>(&self, source: &str, changes: I) -> String
    where
        I: Iterator<Item = (isize, &'a ChangeRecord)>,
    {
        // Slots are blanked rather than removed to keep smaller indices valid.
        let mut slots: Vec<String> = source.chars().map(String::from).collect();

        for (position, record) in changes {
            let tag = self.tags.get(record.kind);
            match record.kind {
                ChangeKind::Insertion => {
                    if let Some(tag) = tag {
                        let at = usize::try_from(position + 1)
                            .unwrap_or(0)
                            .min(slots.len());
                        slots.insert(at, tag.wrap(&record.text()));
                    }
                }
                ChangeKind::Deletion | ChangeKind::Replacement => {
                    let Some(slot) = usize::try_from(position)
                        .ok()
                        .and_then(|i| slots.get_mut(i))
                    else {
                        continue;
                    };
                    *slot = match tag {
                        Some(tag) => tag.wrap(&record.text()),
                        None => String::new(),
                    };
                }
                ChangeKind::Unchanged => {}
            }
        }

        slots.concat()
    }
}
