//! Edit distance pipeline.
//!
//! The matrix is built under uniform unit costs and fixes the alignment. The
//! backtrace then walks that alignment once, classifying every edit and
//! re-weighting substitutions by keyboard proximity. The re-weighted total is
//! therefore not a true weighted shortest path: another alignment could be
//! cheaper under the proximity metric.

pub mod backtrace;
pub mod change;
pub mod matrix;

pub use backtrace::*;
pub use change::*;
pub use matrix::*;
