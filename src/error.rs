//! Error types for the keydist library.
//!
//! The distance computation itself is total over all string inputs and never
//! fails. Errors only arise on the outer surfaces: loading configuration,
//! strict layout validation and the command-line interface.
//!
//! # Examples
//!
//! ```
//! use keydist::error::{KeydistError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KeydistError::unknown_layout("dvorak"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for keydist operations.
#[derive(Error, Debug)]
pub enum KeydistError {
    /// I/O errors (reading configuration or batch files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A layout name that resolves to neither a custom nor a built-in layout
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// A custom layout definition that cannot be used
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Invalid caller-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with KeydistError.
pub type Result<T> = std::result::Result<T, KeydistError>;

impl KeydistError {
    /// Create a new unknown layout error.
    pub fn unknown_layout<S: Into<String>>(name: S) -> Self {
        KeydistError::UnknownLayout(name.into())
    }

    /// Create a new invalid layout error.
    pub fn invalid_layout<S: Into<String>>(msg: S) -> Self {
        KeydistError::InvalidLayout(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KeydistError::InvalidArgument(msg.into())
    }
}
