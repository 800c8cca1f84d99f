//! Analyzer implementations that combine tokenizers and filters.
//!
//! # Available Analyzers
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`pinyin::PinyinAnalyzer`] - Keyword tokenization followed by pinyin expansion

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pinyin;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use pinyin::PinyinAnalyzer;
pub use pipeline::PipelineAnalyzer;
