//! Command line argument parsing for the pinyin-transform CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pinyin::config::{PinyinFilterConfig, PinyinMode};

/// pinyin-transform - Expand Chinese text into pinyin search variants
#[derive(Parser, Debug, Clone)]
#[command(name = "pinyin-transform")]
#[command(about = "Expand Chinese text into pinyin search variants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PinyinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PinyinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run text through a tokenizer and the pinyin transform filter
    Analyze(AnalyzeArgs),

    /// Print the pinyin expansion set of a single text
    Expand(ExpandArgs),
}

/// Options shared by every command that builds a pinyin filter.
#[derive(Args, Debug, Clone)]
pub struct ExpansionArgs {
    /// Reading dictionary (.json, or a pinyin4j style table)
    #[arg(short, long, value_name = "FILE", env = "PINYIN_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Filter configuration file (JSON); flags below override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Which romanizations to generate
    #[arg(short, long)]
    pub mode: Option<ModeArg>,

    /// Do not emit the original token before its variants
    #[arg(long)]
    pub no_original: bool,

    /// Minimum number of Chinese characters that triggers expansion
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Number of characters kept when the text has more Chinese characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Drop ASCII letters and digits instead of passing them through
    #[arg(long)]
    pub no_alphanumeric: bool,
}

impl ExpansionArgs {
    /// Build the filter configuration: the config file (or defaults) with
    /// command line overrides applied.
    pub fn filter_config(&self) -> Result<PinyinFilterConfig> {
        let mut config = match &self.config {
            Some(path) => PinyinFilterConfig::from_file(path)?,
            None => PinyinFilterConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if self.no_original {
            config.emit_original = false;
        }
        if let Some(length) = self.min_length {
            config.min_chinese_length = length;
        }
        if let Some(length) = self.max_length {
            config.max_chinese_length = length;
        }
        if self.no_alphanumeric {
            config.include_alphanumeric = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub expansion: ExpansionArgs,

    /// Tokenizer run before the pinyin filter
    #[arg(short, long, default_value = "whole")]
    pub tokenizer: TokenizerArg,

    /// Lowercase tokens before expansion
    #[arg(long)]
    pub lowercase: bool,
}

/// Arguments for expanding text
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Text to expand
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub expansion: ExpansionArgs,
}

/// Expansion modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeArg {
    /// Full readings and abbreviations
    All,
    /// Abbreviations only
    Short,
    /// Full readings only
    #[value(alias = "quan")]
    Full,
}

impl From<ModeArg> for PinyinMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::All => PinyinMode::All,
            ModeArg::Short => PinyinMode::Short,
            ModeArg::Full => PinyinMode::Full,
        }
    }
}

/// Tokenizers available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerArg {
    /// The whole input is one token
    Whole,
    /// Split on whitespace
    Whitespace,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
