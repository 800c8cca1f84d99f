//! Pinyin expansion of Chinese text.
//!
//! This module holds everything the pinyin token filter needs besides the
//! token stream plumbing:
//!
//! - [`chars`]: ideographic / alphanumeric classification
//! - [`dictionary`]: the [`ReadingDictionary`](dictionary::ReadingDictionary) lookup seam
//! - [`format`]: rendering of raw readings (case, tone, `ü` spelling)
//! - [`config`]: filter options and their loading
//! - [`expander`]: candidate sets and the capped cross-product

pub mod chars;
pub mod config;
pub mod dictionary;
pub mod expander;
pub mod format;

pub use config::{PinyinFilterConfig, PinyinMode};
pub use dictionary::{MapReadingDictionary, ReadingDictionary};
pub use expander::{ExpansionSet, PhoneticExpander};
pub use format::{PinyinFormat, PinyinFormatter};
