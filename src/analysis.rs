//! Text analysis module.
//!
//! Tokenizers split text into tokens, filters transform token streams and
//! analyzers tie both together into a pipeline. The pinyin transform filter
//! lives in [`token_filter::pinyin`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
