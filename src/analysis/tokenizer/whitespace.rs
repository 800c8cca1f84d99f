//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;
use crate::pinyin::chars::contains_ideographic;

/// A tokenizer that splits text on whitespace.
///
/// Tokens carry byte offsets into the input and a [`TokenType`] guessed from
/// their content.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Detect token type based on the content of the word.
    fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            return TokenType::Num;
        }

        if contains_ideographic(word) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (index, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(word_start)) => {
                    tokens.push(Self::make_token(text, word_start, index, tokens.len()));
                    start = None;
                }
                (false, None) => start = Some(index),
                _ => {}
            }
        }
        if let Some(word_start) = start {
            tokens.push(Self::make_token(text, word_start, text.len(), tokens.len()));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

impl WhitespaceTokenizer {
    fn make_token(text: &str, start: usize, end: usize, position: usize) -> Token {
        let word = &text[start..end];
        Token::with_offsets(word, position, start, end)
            .with_token_type(Self::detect_token_type(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_offsets_with_repeated_and_multibyte_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize(" 西游 abc 西游").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (1, 7));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (8, 11));
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (12, 18));
    }

    #[test]
    fn test_token_types() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer
            .tokenize("2024 大学 rust-lang !! café")
            .unwrap()
            .collect();

        assert_eq!(tokens[0].token_type(), Some(TokenType::Num));
        assert_eq!(tokens[1].token_type(), Some(TokenType::Cjk));
        assert_eq!(tokens[2].token_type(), Some(TokenType::Alphanum));
        assert_eq!(tokens[3].token_type(), Some(TokenType::Punctuation));
        assert_eq!(tokens[4].token_type(), Some(TokenType::Other));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
