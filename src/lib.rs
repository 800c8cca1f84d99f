//! # pinyin-transform
//!
//! A token filter that augments analysis token streams with pinyin
//! romanizations of Chinese text, so that `"西游记"` can also be found by
//! `"xiyouji"` or `"xyj"`.
//!
//! ## Features
//!
//! - Full, abbreviated and combined pinyin expansion of polyphonic text
//! - Bounded cross-product for texts with many polyphonic characters
//! - Pluggable reading dictionaries (JSON or pinyin4j style tables)
//! - Configurable tone, case and `ü` rendering
//! - Tokenizer / filter / analyzer pipeline in the style of Lucene
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pinyin_transform::analysis::analyzer::{Analyzer, PinyinAnalyzer};
//! use pinyin_transform::pinyin::{MapReadingDictionary, PinyinFilterConfig, PinyinMode};
//!
//! let mut dict = MapReadingDictionary::new();
//! dict.insert('大', ["da4", "dai4"]);
//! dict.insert('学', ["xue2"]);
//!
//! let config = PinyinFilterConfig::default().with_mode(PinyinMode::Full);
//! let analyzer = PinyinAnalyzer::new(Arc::new(dict), config).unwrap();
//! let texts: Vec<_> = analyzer.analyze("大学").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(texts, vec!["大学", "daxue", "daixue"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod pinyin;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PinyinAnalyzer, PipelineAnalyzer};
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::{Filter, PinyinTransformFilter};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{PinyinError, Result};
    pub use crate::pinyin::{
        MapReadingDictionary, PinyinFilterConfig, PinyinMode, ReadingDictionary,
    };
}
