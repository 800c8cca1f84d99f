//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! modify, remove, or add tokens.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`pinyin::PinyinTransformFilter`] - Adds pinyin variants of Chinese tokens
//!
//! # Filter Chaining
//!
//! Filters are chained in an analyzer:
//!
//! ```text
//! Tokenizer → Lowercase → Pinyin Transform → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. The trait
/// requires `Send + Sync` so a configured filter can be shared between
/// analyzers; any per-stream state belongs in the returned stream.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use pinyin_transform::analysis::token::{Token, TokenStream};
/// use pinyin_transform::analysis::token_filter::Filter;
/// use pinyin_transform::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(tokens.map(|mut t| {
///             t.text = t.text.chars().rev().collect();
///             t
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod pinyin;

pub use lowercase::LowercaseFilter;
pub use pinyin::{PinyinTokenStream, PinyinTransformFilter};
