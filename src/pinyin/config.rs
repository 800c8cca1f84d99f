//! Configuration for the pinyin transform filter.
//!
//! A [`PinyinFilterConfig`] can be built in code, deserialized from JSON, or
//! parsed from a string argument map (the form used by analyzer factories).
//! Every construction path validates the result, and unknown options are
//! rejected.
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::pinyin::config::{PinyinFilterConfig, PinyinMode};
//!
//! let config = PinyinFilterConfig::from_json_str(
//!     r#"{"mode": "short", "emitOriginal": false, "minChineseLength": 1}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.mode, PinyinMode::Short);
//! assert!(!config.emit_original);
//! assert_eq!(config.max_chinese_length, 50);
//!
//! assert!(PinyinFilterConfig::from_json_str(r#"{"tone": 1}"#).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenType;
use crate::error::{PinyinError, Result};
use crate::pinyin::format::PinyinFormat;

/// Default minimum number of ideographic characters that triggers expansion.
pub const DEFAULT_MIN_CHINESE_LENGTH: usize = 2;

/// Default truncation bound applied before expansion.
pub const DEFAULT_MAX_CHINESE_LENGTH: usize = 50;

/// Which romanizations are generated for a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinyinMode {
    /// Full readings and abbreviations.
    #[default]
    All,
    /// Abbreviations (initials) only.
    Short,
    /// Full readings only.
    #[serde(alias = "quan")]
    Full,
}

impl PinyinMode {
    /// Token type assigned to the variants emitted in this mode.
    pub fn token_type(self) -> TokenType {
        match self {
            PinyinMode::All => TokenType::AllPinyin,
            PinyinMode::Short => TokenType::ShortPinyin,
            PinyinMode::Full => TokenType::QuanPinyin,
        }
    }

    /// Configuration name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            PinyinMode::All => "all",
            PinyinMode::Short => "short",
            PinyinMode::Full => "full",
        }
    }
}

impl fmt::Display for PinyinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PinyinMode {
    type Err = PinyinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PinyinMode::All),
            "short" => Ok(PinyinMode::Short),
            "full" | "quan" => Ok(PinyinMode::Full),
            other => Err(PinyinError::config(format!(
                "unknown pinyin mode '{other}' (expected all, short or full)"
            ))),
        }
    }
}

/// Options of the pinyin transform filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PinyinFilterConfig {
    /// Emit the original token before its variants.
    #[serde(alias = "isOutChinese")]
    pub emit_original: bool,

    /// Which romanizations to generate.
    #[serde(alias = "charType")]
    pub mode: PinyinMode,

    /// Minimum number of ideographic characters needed to expand a token.
    #[serde(alias = "minTermLength")]
    pub min_chinese_length: usize,

    /// Longer tokens are cut to this many characters before expansion.
    #[serde(alias = "maxTermLength")]
    pub max_chinese_length: usize,

    /// ASCII letters and digits take part in the expansion as themselves.
    #[serde(alias = "needEnglish")]
    pub include_alphanumeric: bool,

    /// Rendering of dictionary readings.
    pub format: PinyinFormat,
}

impl Default for PinyinFilterConfig {
    fn default() -> Self {
        PinyinFilterConfig {
            emit_original: true,
            mode: PinyinMode::All,
            min_chinese_length: DEFAULT_MIN_CHINESE_LENGTH,
            max_chinese_length: DEFAULT_MAX_CHINESE_LENGTH,
            include_alphanumeric: true,
            format: PinyinFormat::default(),
        }
    }
}

impl PinyinFilterConfig {
    /// Create a configuration with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the original token is emitted.
    pub fn with_emit_original(mut self, emit_original: bool) -> Self {
        self.emit_original = emit_original;
        self
    }

    /// Set the expansion mode.
    pub fn with_mode(mut self, mode: PinyinMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the minimum ideographic length.
    pub fn with_min_chinese_length(mut self, length: usize) -> Self {
        self.min_chinese_length = length;
        self
    }

    /// Set the truncation bound.
    pub fn with_max_chinese_length(mut self, length: usize) -> Self {
        self.max_chinese_length = length;
        self
    }

    /// Set alphanumeric pass-through.
    pub fn with_include_alphanumeric(mut self, include: bool) -> Self {
        self.include_alphanumeric = include;
        self
    }

    /// Set the reading output format.
    pub fn with_format(mut self, format: PinyinFormat) -> Self {
        self.format = format;
        self
    }

    /// Check option ranges and the output format combination.
    pub fn validate(&self) -> Result<()> {
        if self.min_chinese_length < 1 {
            return Err(PinyinError::config("minChineseLength must be at least 1"));
        }
        if self.max_chinese_length < 1 {
            return Err(PinyinError::config("maxChineseLength must be at least 1"));
        }
        self.format.validate()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: PinyinFilterConfig = serde_json::from_str(content)
            .map_err(|e| PinyinError::config(format!("Failed to parse filter config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PinyinError::config(format!(
                "Failed to read filter config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Build a configuration from factory-style string arguments.
    ///
    /// Recognised keys are the camelCase option names and their legacy
    /// aliases (`isOutChinese`, `charType`, `minTermLength`, `maxTermLength`,
    /// `needEnglish`). Any other key is an error.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use pinyin_transform::pinyin::config::{PinyinFilterConfig, PinyinMode};
    ///
    /// let args = HashMap::from([
    ///     ("charType".to_string(), "quan".to_string()),
    ///     ("minTermLength".to_string(), "1".to_string()),
    /// ]);
    /// let config = PinyinFilterConfig::from_args(&args).unwrap();
    /// assert_eq!(config.mode, PinyinMode::Full);
    /// assert_eq!(config.min_chinese_length, 1);
    /// ```
    pub fn from_args(args: &HashMap<String, String>) -> Result<Self> {
        let mut config = PinyinFilterConfig::default();
        let mut unknown = Vec::new();

        for (key, value) in args {
            match key.as_str() {
                "emitOriginal" | "isOutChinese" => config.emit_original = parse_bool(key, value)?,
                "mode" | "charType" => config.mode = value.parse()?,
                "minChineseLength" | "minTermLength" => {
                    config.min_chinese_length = parse_usize(key, value)?
                }
                "maxChineseLength" | "maxTermLength" => {
                    config.max_chinese_length = parse_usize(key, value)?
                }
                "includeAlphanumeric" | "needEnglish" => {
                    config.include_alphanumeric = parse_bool(key, value)?
                }
                _ => unknown.push(key.as_str()),
            }
        }

        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(PinyinError::config(format!(
                "Unknown parameters: {}",
                unknown.join(", ")
            )));
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PinyinError::config(format!(
            "{key} expects true or false, got '{value}'"
        ))),
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| PinyinError::config(format!("{key} expects an integer, got '{value}'")))
}
