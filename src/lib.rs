//! # keydist
//!
//! Keyboard-proximity weighted edit distance with a positional diff.
//!
//! ## Features
//!
//! - Case-insensitive Levenshtein alignment
//! - Substitution costs weighted by key distance on a chosen layout
//! - Built-in QWERTY, AZERTY and ЙЦУКЕН layouts, extensible with custom ones
//! - Classified edit script (insertions, deletions, replacements)
//! - Annotated comparison strings with configurable tags
//!
//! Substitutions are re-weighted along the alignment that is optimal under
//! unit costs. The reported distance is therefore an approximation: a
//! different alignment may be cheaper under the keyboard metric.

pub mod cli;
pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod keyboard;
pub mod render;

pub mod prelude {
    pub use crate::config::{ComparerConfig, DistanceConfig, TagTemplates};
    pub use crate::distance::{ChangeKind, ChangeRecord, ChangeSet};
    pub use crate::engine::{DistanceResult, KeyboardDistance};
    pub use crate::error::{KeydistError, Result};
    pub use crate::keyboard::{KeyPosition, KeyboardModel, Layout, LayoutRegistry};
    pub use crate::render::{Renderer, Tag, TagSet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
