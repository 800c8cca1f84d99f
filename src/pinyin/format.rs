//! Pinyin output formatting.
//!
//! Reading dictionaries store readings in the numbered-tone form used by
//! pinyin4j-style tables: lowercase ASCII letters, `u:` for `ü` and a trailing
//! tone digit `1`-`5` (`5` being the neutral tone), e.g. `"zhong1"` or
//! `"lu:4"`. [`PinyinFormatter`] rewrites such raw readings according to a
//! [`PinyinFormat`].
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::pinyin::format::{PinyinFormat, PinyinFormatter, ToneType, VCharType};
//!
//! let formatter = PinyinFormatter::new(PinyinFormat::default()).unwrap();
//! assert_eq!(formatter.format_reading("zhong1"), "zhong");
//!
//! let marks = PinyinFormat::default()
//!     .with_tone(ToneType::WithToneMark)
//!     .with_v_char(VCharType::WithUUnicode);
//! let formatter = PinyinFormatter::new(marks).unwrap();
//! assert_eq!(formatter.format_reading("lu:4"), "lǜ");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PinyinError, Result};

/// Letter case of formatted readings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    #[default]
    Lowercase,
    Uppercase,
}

/// How the tone of a reading is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneType {
    /// Tone digit dropped: `zhong`.
    #[default]
    WithoutTone,
    /// Tone digit kept: `zhong1`.
    WithToneNumber,
    /// Diacritic on the main vowel: `zhōng`.
    WithToneMark,
}

/// How `ü` is spelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VCharType {
    /// `lu:`
    #[default]
    WithUAndColon,
    /// `lv`
    WithV,
    /// `lü`
    WithUUnicode,
}

/// Output format for readings produced by the reading dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinyinFormat {
    pub case: CaseType,
    pub tone: ToneType,
    pub v_char: VCharType,
}

impl PinyinFormat {
    /// Set the letter case.
    pub fn with_case(mut self, case: CaseType) -> Self {
        self.case = case;
        self
    }

    /// Set the tone rendering.
    pub fn with_tone(mut self, tone: ToneType) -> Self {
        self.tone = tone;
        self
    }

    /// Set the spelling of `ü`.
    pub fn with_v_char(mut self, v_char: VCharType) -> Self {
        self.v_char = v_char;
        self
    }

    /// Check that the options can be combined.
    ///
    /// Tone marks are only representable together with the `ü` spelling.
    pub fn validate(&self) -> Result<()> {
        if self.tone == ToneType::WithToneMark && self.v_char != VCharType::WithUUnicode {
            return Err(PinyinError::format(format!(
                "tone marks require v_char 'with_u_unicode', got {:?}",
                self.v_char
            )));
        }
        Ok(())
    }
}

/// Formats raw numbered-tone readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinyinFormatter {
    format: PinyinFormat,
}

impl PinyinFormatter {
    /// Create a formatter, rejecting invalid option combinations.
    pub fn new(format: PinyinFormat) -> Result<Self> {
        format.validate()?;
        Ok(PinyinFormatter { format })
    }

    /// Get the output format.
    pub fn format(&self) -> PinyinFormat {
        self.format
    }

    /// Format one raw reading such as `"lu:4"`.
    pub fn format_reading(&self, raw: &str) -> String {
        let mut reading = raw.trim().to_ascii_lowercase();

        match self.format.tone {
            ToneType::WithoutTone => reading.retain(|c| !is_tone_digit(c)),
            ToneType::WithToneNumber => {}
            ToneType::WithToneMark => reading = mark_tone(&reading.replace("u:", "v")),
        }

        match self.format.v_char {
            VCharType::WithUAndColon => {}
            VCharType::WithV => reading = reading.replace("u:", "v"),
            VCharType::WithUUnicode => reading = reading.replace("u:", "ü"),
        }

        match self.format.case {
            CaseType::Lowercase => reading,
            CaseType::Uppercase => reading.to_uppercase(),
        }
    }
}

fn is_tone_digit(c: char) -> bool {
    ('1'..='5').contains(&c)
}

const TONE_MARKS: [(char, [char; 4]); 6] = [
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('v', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

/// Place the tone mark of a `v`-spelled reading like `"lve4"` on its main vowel.
///
/// `a` or `e` take the mark when present, `ou` marks the `o`, otherwise the
/// last vowel is marked. Every remaining `v` becomes `ü`.
fn mark_tone(reading: &str) -> String {
    let (syllable, tone) = match reading.chars().last() {
        Some(d) if is_tone_digit(d) => (&reading[..reading.len() - 1], d as u8 - b'0'),
        _ => (reading, 5),
    };

    let target = syllable
        .find('a')
        .or_else(|| syllable.find('e'))
        .or_else(|| syllable.find("ou"))
        .or_else(|| syllable.rfind(|c: char| "aeiouv".contains(c)));

    let mut marked = String::with_capacity(syllable.len() + 2);
    for (index, c) in syllable.char_indices() {
        if Some(index) == target && tone < 5 {
            let mark = TONE_MARKS
                .iter()
                .find(|(vowel, _)| *vowel == c)
                .map(|(_, marks)| marks[usize::from(tone - 1)]);
            match mark {
                Some(m) => marked.push(m),
                None => marked.push(c),
            }
        } else if c == 'v' {
            marked.push('ü');
        } else {
            marked.push(c);
        }
    }
    marked
}
