//! Phonetic expansion of ideographic text.
//!
//! Expansion works in two stages:
//!
//! 1. Every character of the input becomes a [`CandidateSet`] of readings
//!    (dictionary readings for ideographs, the character itself for ASCII
//!    alphanumerics when pass-through is enabled). Characters without any
//!    candidate are dropped, so the resulting [`CandidateSequence`] may be
//!    shorter than the input.
//! 2. The sequence is folded into a cross-product of full readings
//!    (`"daxue"`) and/or abbreviations (`"dx"`).
//!
//! Polyphonic characters multiply the number of outputs. When the product of
//! all candidate set sizes exceeds [`MAX_POLYPHONE_PRODUCT`], every step after
//! the first keeps only the first two candidates of its set, which bounds the
//! output to `first_set_size * 2^(n - 1)` strings.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pinyin_transform::pinyin::config::{PinyinFilterConfig, PinyinMode};
//! use pinyin_transform::pinyin::dictionary::MapReadingDictionary;
//! use pinyin_transform::pinyin::expander::PhoneticExpander;
//!
//! let mut dict = MapReadingDictionary::new();
//! dict.insert('大', ["da4", "de5"]);
//! dict.insert('学', ["xue2"]);
//!
//! let config = PinyinFilterConfig::new().with_mode(PinyinMode::All);
//! let expander = PhoneticExpander::new(Arc::new(dict), &config).unwrap();
//!
//! let expansion = expander.expand("大学").unwrap();
//! assert_eq!(expansion.to_vec(), vec!["daxue", "dexue", "dx"]);
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;

use crate::error::Result;
use crate::pinyin::chars::{ideographic_count, is_alphanumeric};
use crate::pinyin::config::{PinyinFilterConfig, PinyinMode};
use crate::pinyin::dictionary::ReadingDictionary;
use crate::pinyin::format::PinyinFormatter;

/// Candidate product above which branching is capped (2^15).
pub const MAX_POLYPHONE_PRODUCT: usize = 1 << 15;

/// Candidates kept per step once the product exceeds the cap.
const CAPPED_BRANCHING: usize = 2;

/// Readings for one surviving character, duplicate-free and never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<String>,
}

impl CandidateSet {
    /// Build a set from candidates in preference order.
    ///
    /// Duplicates and empty strings are skipped; returns `None` if nothing is left.
    pub fn new<I, S>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for candidate in candidates {
            let candidate = candidate.into();
            if !candidate.is_empty() && !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(CandidateSet { candidates: unique })
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the set has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterate over the candidates in preference order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }
}

/// Candidate sets of the surviving characters, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSequence {
    sets: Vec<CandidateSet>,
}

impl CandidateSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a set.
    pub fn push(&mut self, set: CandidateSet) {
        self.sets.push(set);
    }

    /// Number of surviving characters.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if no character survived.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate over the candidate sets.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateSet> {
        self.sets.iter()
    }

    /// Product of all set sizes, saturating at `usize::MAX`.
    pub fn product(&self) -> usize {
        self.sets
            .iter()
            .fold(1usize, |acc, set| acc.saturating_mul(set.len()))
    }

    /// Whether the naive cross-product exceeds [`MAX_POLYPHONE_PRODUCT`].
    pub fn overflows(&self) -> bool {
        self.product() > MAX_POLYPHONE_PRODUCT
    }
}

impl FromIterator<CandidateSet> for CandidateSequence {
    fn from_iter<T: IntoIterator<Item = CandidateSet>>(iter: T) -> Self {
        CandidateSequence {
            sets: iter.into_iter().collect(),
        }
    }
}

/// Deduplicated expansion strings in insertion order.
#[derive(Clone, Default)]
pub struct ExpansionSet {
    items: Vec<String>,
    seen: AHashSet<String>,
}

impl ExpansionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        ExpansionSet {
            items: Vec::with_capacity(capacity),
            seen: AHashSet::with_capacity(capacity),
        }
    }

    /// Insert a string; returns `false` if it was already present.
    pub fn insert(&mut self, item: String) -> bool {
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    /// Check membership.
    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Copy the strings out in insertion order.
    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

impl PartialEq for ExpansionSet {
    /// Set equality; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|item| other.seen.contains(item))
    }
}

impl Eq for ExpansionSet {}

impl fmt::Debug for ExpansionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl Extend<String> for ExpansionSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl FromIterator<String> for ExpansionSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = ExpansionSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ExpansionSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExpansionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// What each candidate contributes to an expansion string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flavor {
    /// The whole reading.
    Full,
    /// The first character of the reading.
    Abbreviated,
}

impl Flavor {
    fn piece(self, candidate: &str) -> &str {
        match self {
            Flavor::Full => candidate,
            Flavor::Abbreviated => candidate
                .chars()
                .next()
                .map_or("", |c| &candidate[..c.len_utf8()]),
        }
    }
}

/// Fold a candidate sequence into its cross-product.
///
/// With `overflow` set, each set after the first contributes at most its
/// first two candidates.
pub fn cross_product(sequence: &CandidateSequence, flavor: Flavor, overflow: bool) -> ExpansionSet {
    let mut sets = sequence.iter();
    let Some(first) = sets.next() else {
        return ExpansionSet::new();
    };

    let mut accumulator: ExpansionSet = first
        .iter()
        .map(|candidate| flavor.piece(candidate).to_string())
        .collect();

    let branching = if overflow { CAPPED_BRANCHING } else { usize::MAX };
    for set in sets {
        let width = set.len().min(branching);
        let mut next = ExpansionSet::with_capacity(accumulator.len().saturating_mul(width));
        for prefix in accumulator.iter() {
            for candidate in set.iter().take(branching) {
                let piece = flavor.piece(candidate);
                let mut expanded = String::with_capacity(prefix.len() + piece.len());
                expanded.push_str(prefix);
                expanded.push_str(piece);
                next.insert(expanded);
            }
        }
        accumulator = next;
    }

    accumulator
}

/// Turns token text into pinyin variants.
#[derive(Clone)]
pub struct PhoneticExpander {
    dictionary: Arc<dyn ReadingDictionary>,
    formatter: PinyinFormatter,
    mode: PinyinMode,
    min_chinese_length: usize,
    max_chinese_length: usize,
    include_alphanumeric: bool,
}

impl PhoneticExpander {
    /// Create an expander for the given configuration.
    ///
    /// Fails if the configuration or its output format is invalid.
    pub fn new(
        dictionary: Arc<dyn ReadingDictionary>,
        config: &PinyinFilterConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(PhoneticExpander {
            dictionary,
            formatter: PinyinFormatter::new(config.format)?,
            mode: config.mode,
            min_chinese_length: config.min_chinese_length,
            max_chinese_length: config.max_chinese_length,
            include_alphanumeric: config.include_alphanumeric,
        })
    }

    /// Get the expansion mode.
    pub fn mode(&self) -> PinyinMode {
        self.mode
    }

    /// Get the reading dictionary.
    pub fn dictionary(&self) -> &Arc<dyn ReadingDictionary> {
        &self.dictionary
    }

    /// Expand `text` according to the configured mode.
    ///
    /// Returns an empty set when `text` has fewer ideographic code units than
    /// the configured minimum, or when no character has a candidate. Texts
    /// with more ideographic code units than the maximum are cut to their
    /// first `max_chinese_length` UTF-16 code units, whatever those units are.
    pub fn expand(&self, text: &str) -> Result<ExpansionSet> {
        let count = ideographic_count(text);
        if count < self.min_chinese_length {
            return Ok(ExpansionSet::new());
        }

        let text = if count > self.max_chinese_length {
            truncate_code_units(text, self.max_chinese_length)
        } else {
            text
        };

        let sequence = self.candidate_sequence(text)?;
        let overflow = sequence.overflows();
        if overflow {
            log::debug!(
                "candidate product of '{}' exceeds {}, capping branching to {}",
                text,
                MAX_POLYPHONE_PRODUCT,
                CAPPED_BRANCHING
            );
        }

        let expansion = match self.mode {
            PinyinMode::Full => cross_product(&sequence, Flavor::Full, overflow),
            PinyinMode::Short => cross_product(&sequence, Flavor::Abbreviated, overflow),
            PinyinMode::All => {
                let mut all = cross_product(&sequence, Flavor::Full, overflow);
                all.extend(cross_product(&sequence, Flavor::Abbreviated, overflow));
                all
            }
        };
        Ok(expansion)
    }

    /// Build the candidate sequence of `text` without applying length bounds.
    pub fn candidate_sequence(&self, text: &str) -> Result<CandidateSequence> {
        let mut sequence = CandidateSequence::new();
        for c in text.chars() {
            let set = if self.include_alphanumeric && is_alphanumeric(c) {
                CandidateSet::new([c.to_string()])
            } else {
                let readings = self.dictionary.readings(c)?;
                CandidateSet::new(
                    readings
                        .iter()
                        .map(|reading| self.formatter.format_reading(reading)),
                )
            };
            if let Some(set) = set {
                sequence.push(set);
            }
        }
        Ok(sequence)
    }
}

impl fmt::Debug for PhoneticExpander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneticExpander")
            .field("dictionary", &self.dictionary.name())
            .field("formatter", &self.formatter)
            .field("mode", &self.mode)
            .field("min_chinese_length", &self.min_chinese_length)
            .field("max_chinese_length", &self.max_chinese_length)
            .field("include_alphanumeric", &self.include_alphanumeric)
            .finish()
    }
}

/// Longest prefix of `text` spanning at most `max` UTF-16 code units.
///
/// A supplementary-plane character straddling the limit is dropped whole.
fn truncate_code_units(text: &str, max: usize) -> &str {
    let mut units = 0;
    for (index, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max {
            return &text[..index];
        }
    }
    text
}
