//! Pinyin transform filter.
//!
//! Adds romanized variants of Chinese tokens to a token stream. For each
//! upstream token the filter emits, in order:
//!
//! 1. the original token (unless `emit_original` is off), unchanged;
//! 2. every pinyin variant produced by the
//!    [`PhoneticExpander`](crate::pinyin::expander::PhoneticExpander), sharing
//!    the original's offsets and tagged `all_pinyin`, `short_pinyin` or
//!    `quan_pinyin` depending on the mode.
//!
//! Variants stack on the original's position (`position_increment = 0`). When
//! originals are suppressed, the first variant inherits the original's
//! increment so the stream still advances once per upstream token.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pinyin_transform::analysis::token::Token;
//! use pinyin_transform::analysis::token_filter::Filter;
//! use pinyin_transform::analysis::token_filter::pinyin::PinyinTransformFilter;
//! use pinyin_transform::pinyin::config::PinyinFilterConfig;
//! use pinyin_transform::pinyin::dictionary::MapReadingDictionary;
//!
//! let mut dict = MapReadingDictionary::new();
//! dict.insert('西', ["xi1"]);
//! dict.insert('游', ["you2"]);
//!
//! let filter = PinyinTransformFilter::new(Arc::new(dict), PinyinFilterConfig::default()).unwrap();
//! let tokens = vec![Token::with_offsets("西游", 0, 0, 6)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! let texts: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["西游", "xiyou", "xy"]);
//! assert_eq!(result[1].position_increment, 0);
//! assert_eq!(result[1].type_tag(), "all_pinyin");
//! ```

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::pinyin::config::PinyinFilterConfig;
use crate::pinyin::dictionary::ReadingDictionary;
use crate::pinyin::expander::PhoneticExpander;

/// A filter that augments Chinese tokens with pinyin variants.
///
/// The filter itself is stateless and can be shared between pipelines; every
/// call to [`Filter::filter`] creates a fresh [`PinyinTokenStream`].
#[derive(Clone, Debug)]
pub struct PinyinTransformFilter {
    expander: Arc<PhoneticExpander>,
    emit_original: bool,
    config: PinyinFilterConfig,
}

impl PinyinTransformFilter {
    /// Create a filter, validating the configuration.
    pub fn new(dictionary: Arc<dyn ReadingDictionary>, config: PinyinFilterConfig) -> Result<Self> {
        let expander = PhoneticExpander::new(dictionary, &config)?;
        Ok(PinyinTransformFilter {
            expander: Arc::new(expander),
            emit_original: config.emit_original,
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &PinyinFilterConfig {
        &self.config
    }

    /// Get the expander shared by the streams of this filter.
    pub fn expander(&self) -> &Arc<PhoneticExpander> {
        &self.expander
    }

    /// Wrap `input` in a pinyin token stream.
    pub fn stream(&self, input: TokenStream) -> PinyinTokenStream {
        PinyinTokenStream::new(input, Arc::clone(&self.expander), self.emit_original)
    }
}

impl Filter for PinyinTransformFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(self.stream(tokens)))
    }

    fn name(&self) -> &'static str {
        "pinyin_transform"
    }
}

/// The upstream token currently being expanded.
struct BufferedToken {
    token: Token,
    original_emitted: bool,
    variants: Option<std::vec::IntoIter<String>>,
    variants_started: bool,
}

impl BufferedToken {
    fn new(token: Token) -> Self {
        BufferedToken {
            token,
            original_emitted: false,
            variants: None,
            variants_started: false,
        }
    }
}

/// Pull-based state machine turning each upstream token into its original
/// and pinyin variants.
///
/// The stream is either waiting for input (`current` is `None`) or holds one
/// buffered upstream token. Once upstream runs dry it keeps returning `None`
/// until [`reset`](Self::reset) installs a new upstream.
pub struct PinyinTokenStream {
    input: TokenStream,
    expander: Arc<PhoneticExpander>,
    emit_original: bool,
    variant_type: TokenType,
    current: Option<BufferedToken>,
    exhausted: bool,
}

impl PinyinTokenStream {
    /// Create a stream over `input`.
    pub fn new(input: TokenStream, expander: Arc<PhoneticExpander>, emit_original: bool) -> Self {
        let variant_type = expander.mode().token_type();
        PinyinTokenStream {
            input,
            expander,
            emit_original,
            variant_type,
            current: None,
            exhausted: false,
        }
    }

    /// Produce the next output token, or `None` once upstream is exhausted.
    pub fn produce_next(&mut self) -> Option<Token> {
        loop {
            let mut current = match self.current.take() {
                Some(current) => current,
                None => {
                    if self.exhausted {
                        return None;
                    }
                    match self.input.next() {
                        Some(token) => {
                            log::debug!("buffered token '{}'", token.text);
                            BufferedToken::new(token)
                        }
                        None => {
                            self.exhausted = true;
                            return None;
                        }
                    }
                }
            };

            if self.emit_original && !current.original_emitted && current.variants.is_none() {
                current.original_emitted = true;
                let original = current.token.clone();
                self.current = Some(current);
                return Some(original);
            }

            if current.variants.is_none() {
                match self.expander.expand(&current.token.text) {
                    Ok(expansion) if !expansion.is_empty() => {
                        current.variants = Some(expansion.into_iter());
                        current.variants_started = false;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!(
                            "pinyin expansion of '{}' failed, emitting no variants: {}",
                            current.token.text,
                            e
                        );
                    }
                }
            }

            if let Some(text) = current.variants.as_mut().and_then(|variants| variants.next()) {
                let variant = self.variant(&current, text);
                current.variants_started = true;
                self.current = Some(current);
                return Some(variant);
            }

            // Nothing left for this token; drop it and pull the next one.
        }
    }

    /// Replace the upstream and clear all buffered state.
    pub fn reset(&mut self, input: TokenStream) {
        self.input = input;
        self.current = None;
        self.exhausted = false;
    }

    fn variant(&self, current: &BufferedToken, text: String) -> Token {
        let position_increment = if self.emit_original || current.variants_started {
            0
        } else {
            current.token.position_increment
        };

        let mut variant = current.token.with_text(text);
        variant.position_increment = position_increment;
        variant
            .with_original_text(current.token.text.clone())
            .with_token_type(self.variant_type)
    }
}

impl Iterator for PinyinTokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.produce_next()
    }
}

impl FusedIterator for PinyinTokenStream {}

impl std::fmt::Debug for PinyinTokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinyinTokenStream")
            .field("expander", &self.expander)
            .field("emit_original", &self.emit_original)
            .field(
                "current",
                &self.current.as_ref().map(|c| c.token.text.as_str()),
            )
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
