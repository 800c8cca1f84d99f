//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the filter
//! chain. Besides its text it carries the positional data that downstream
//! indexing relies on:
//!
//! - `position_increment`: distance from the previous token (`0` stacks the
//!   token on the previous position, as pinyin variants do)
//! - `start_offset` / `end_offset`: byte offsets into the analyzed text
//!
//! ```text
//! Input: "大学"
//!
//! Token Graph:
//!   Position 0: "大学"  (pos_inc=1)
//!   Position 0: "daxue" (pos_inc=0)  ← stacked variant, same offsets
//!   Position 0: "dx"    (pos_inc=0)
//! ```
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("大学", 0, 0, 6).with_token_type(TokenType::Cjk);
//! assert_eq!(token.text, "大学");
//! assert_eq!(token.end_offset, 6);
//! assert_eq!(token.token_type(), Some(TokenType::Cjk));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): next position
    /// - 0: same position as the previous token (synonyms, pinyin variants)
    /// - >1: skipped positions
    pub position_increment: usize,

    /// Additional metadata that can be attached to tokens
    pub metadata: Option<TokenMetadata>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK ideographs
    Cjk,
    /// Punctuation marks
    Punctuation,
    /// Pinyin variant emitted in `all` mode
    AllPinyin,
    /// Pinyin abbreviation emitted in `short` mode
    ShortPinyin,
    /// Full pinyin emitted in `full` mode
    QuanPinyin,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Type tag used at the pipeline boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Alphanum => "alphanum",
            TokenType::Num => "num",
            TokenType::Cjk => "cjk",
            TokenType::Punctuation => "punctuation",
            TokenType::AllPinyin => "all_pinyin",
            TokenType::ShortPinyin => "short_pinyin",
            TokenType::QuanPinyin => "quan_pinyin",
            TokenType::Other => "word",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The text this token was derived from (useful for highlighting)
    pub original_text: Option<String>,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            metadata: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get a reference to the metadata.
    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.metadata.as_ref()
    }

    /// Token type from the metadata, if any.
    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    /// Type tag of this token, `"word"` when untyped.
    pub fn type_tag(&self) -> &'static str {
        self.token_type().unwrap_or(TokenType::Other).as_str()
    }

    /// Set the original text in metadata.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.original_text = Some(original.into());
        self
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.token_type = Some(token_type);
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
