//! Error types for the pinyin-transform library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`PinyinError`] enum.
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::error::{PinyinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PinyinError::config("minChineseLength must be at least 1"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use thiserror::Error;

/// The main error type for pinyin-transform operations.
#[derive(Error, Debug)]
pub enum PinyinError {
    /// Invalid or unknown configuration options
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading dictionary errors (lookup failures, malformed entries)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Unsupported combination of pinyin output format options
    #[error("Bad pinyin output format combination: {0}")]
    Format(String),

    /// Parse errors for textual inputs
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PinyinError.
pub type Result<T> = std::result::Result<T, PinyinError>;

impl PinyinError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PinyinError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        PinyinError::Dictionary(msg.into())
    }

    /// Create a new output format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        PinyinError::Format(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        PinyinError::Parse(msg.into())
    }
}
