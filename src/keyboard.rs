//! Keyboard proximity model.
//!
//! Maps characters to physical key positions on a named layout and derives a
//! substitution cost from the distance between two keys, so that typo-likely
//! substitutions (neighbouring keys) are cheaper than distant ones.

pub mod layout;
pub mod proximity;

pub use layout::*;
pub use proximity::*;
