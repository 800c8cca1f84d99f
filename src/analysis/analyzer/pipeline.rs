//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Tokenizer: Splits text into tokens
//! 2. Token Filters: Applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
//! use pinyin_transform::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use pinyin_transform::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use pinyin_transform::analysis::token_filter::lowercase::LowercaseFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(WhitespaceTokenizer::new());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .with_name("my_custom_analyzer".to_string());
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello WORLD").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configured name of this analyzer.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        // self.name is not 'static
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::pinyin::PinyinTransformFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
    use crate::pinyin::{MapReadingDictionary, PinyinFilterConfig, PinyinMode};

    fn dictionary() -> Arc<MapReadingDictionary> {
        let mut dictionary = MapReadingDictionary::new();
        dictionary.insert('西', ["xi1"]);
        dictionary.insert('游', ["you2"]);
        dictionary.insert('大', ["da4", "dai4"]);
        dictionary.insert('学', ["xue2"]);
        Arc::new(dictionary)
    }

    #[test]
    fn test_pipeline_analyzer() {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer =
            PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(LowercaseFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("Hello THE world").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "the");
        assert_eq!(tokens[2].text, "world");
    }

    #[test]
    fn test_pipeline_with_pinyin_filter() {
        let config = PinyinFilterConfig::default().with_mode(PinyinMode::Full);
        let pinyin = PinyinTransformFilter::new(dictionary(), config).unwrap();
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(pinyin));

        let tokens: Vec<Token> = analyzer.analyze("西游 abc 大学").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["西游", "xiyou", "abc", "大学", "daxue", "daixue"]);
        assert_eq!(tokens[4].start_offset, tokens[3].start_offset);
        assert_eq!(tokens[4].position_increment, 0);
    }

    #[test]
    fn test_pipeline_debug_and_names() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        assert_eq!(analyzer.name(), "pipeline");
        assert_eq!(analyzer.pipeline_name(), "pipeline_whitespace");
        assert_eq!(analyzer.filters().len(), 1);

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("whitespace"));
        assert!(debug.contains("lowercase"));

        let renamed = analyzer.with_name("custom");
        assert_eq!(renamed.pipeline_name(), "custom");
    }
}
