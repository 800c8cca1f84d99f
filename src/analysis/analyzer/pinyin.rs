//! Pinyin analyzer for name and title fields.
//!
//! Treats the whole field value as one keyword token, optionally lowercases
//! it, then expands it with [`PinyinTransformFilter`]. A field holding
//! `"西游记"` therefore matches queries for `"西游记"`, `"xiyouji"` and
//! `"xyj"`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
//! use pinyin_transform::analysis::analyzer::pinyin::PinyinAnalyzer;
//! use pinyin_transform::pinyin::{MapReadingDictionary, PinyinFilterConfig};
//!
//! let mut dict = MapReadingDictionary::new();
//! dict.insert('西', ["xi1"]);
//! dict.insert('游', ["you2"]);
//! dict.insert('记', ["ji4"]);
//!
//! let analyzer = PinyinAnalyzer::new(Arc::new(dict), PinyinFilterConfig::default()).unwrap();
//! let texts: Vec<_> = analyzer.analyze("西游记").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(texts, vec!["西游记", "xiyouji", "xyj"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::pinyin::PinyinTransformFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whole::WholeTokenizer;
use crate::error::Result;
use crate::pinyin::config::PinyinFilterConfig;
use crate::pinyin::dictionary::ReadingDictionary;

/// An analyzer that romanizes Chinese text into pinyin variants.
pub struct PinyinAnalyzer {
    inner: PipelineAnalyzer,
    filter: Arc<PinyinTransformFilter>,
}

impl PinyinAnalyzer {
    /// Create a pinyin analyzer with whole-input tokenization and lowercasing.
    pub fn new(dictionary: Arc<dyn ReadingDictionary>, config: PinyinFilterConfig) -> Result<Self> {
        Self::with_tokenizer(Arc::new(WholeTokenizer::new()), true, dictionary, config)
    }

    /// Create a pinyin analyzer on top of a custom tokenizer.
    ///
    /// With `lowercase` set, a [`LowercaseFilter`] runs before the pinyin
    /// filter so alphanumeric pass-through is case-insensitive.
    pub fn with_tokenizer(
        tokenizer: Arc<dyn Tokenizer>,
        lowercase: bool,
        dictionary: Arc<dyn ReadingDictionary>,
        config: PinyinFilterConfig,
    ) -> Result<Self> {
        let filter = Arc::new(PinyinTransformFilter::new(dictionary, config)?);

        let mut inner = PipelineAnalyzer::new(tokenizer);
        if lowercase {
            inner = inner.add_filter(Arc::new(LowercaseFilter::new()));
        }
        let inner = inner.add_filter(filter.clone()).with_name("pinyin");

        Ok(PinyinAnalyzer { inner, filter })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Get the pinyin filter at the end of the pipeline.
    pub fn filter(&self) -> &Arc<PinyinTransformFilter> {
        &self.filter
    }
}

impl Analyzer for PinyinAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "pinyin"
    }
}

impl std::fmt::Debug for PinyinAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinyinAnalyzer")
            .field("inner", &self.inner)
            .field("config", self.filter.config())
            .finish()
    }
}
