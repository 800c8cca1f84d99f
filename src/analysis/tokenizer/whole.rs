//! Whole-field tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;
use crate::pinyin::chars::contains_ideographic;

/// A tokenizer that keeps a whole field value as one keyword token.
///
/// This is the usual upstream for pinyin expansion of short fields such as
/// names or titles, where the value should be romanized as one word.
/// Surrounding whitespace is dropped and the offsets cover the remaining
/// span, so a blank value produces no token at all. Values that contain an
/// ideograph are tagged [`TokenType::Cjk`].
#[derive(Clone, Debug, Default)]
pub struct WholeTokenizer;

impl WholeTokenizer {
    /// Create a new whole-field tokenizer.
    pub fn new() -> Self {
        WholeTokenizer
    }
}

impl Tokenizer for WholeTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let value = text.trim();
        if value.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let start = text.len() - text.trim_start().len();
        let end = start + value.len();
        let mut token = Token::with_offsets(value, 0, start, end);
        if contains_ideographic(value) {
            token = token.with_token_type(TokenType::Cjk);
        }

        Ok(Box::new(std::iter::once(token)))
    }

    fn name(&self) -> &'static str {
        "whole"
    }
}
