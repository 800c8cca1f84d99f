//! Reading dictionaries mapping a single character to its pinyin readings.
//!
//! The expander only ever asks one question of a dictionary: "what are the
//! readings of this character?". Implementations return raw numbered-tone
//! readings (`"da4"`, `"lu:4"`) which are then rendered by
//! [`PinyinFormatter`](super::format::PinyinFormatter).

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;

use crate::error::{PinyinError, Result};

/// Trait for character-to-readings lookups.
///
/// A character with several readings is polyphonic. Returning an empty list
/// means the character has no reading and will be dropped from the expansion.
/// Returning an error aborts the expansion of the token being processed; the
/// token filter logs it and moves on.
pub trait ReadingDictionary: Send + Sync {
    /// Raw readings of `c`, in the dictionary's preferred order.
    fn readings(&self, c: char) -> Result<Vec<String>>;

    /// Get the name of this dictionary (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// In-memory reading dictionary.
///
/// # Examples
///
/// ```
/// use pinyin_transform::pinyin::dictionary::{MapReadingDictionary, ReadingDictionary};
///
/// let mut dict = MapReadingDictionary::new();
/// dict.insert('大', ["da4", "dai4"]);
///
/// assert_eq!(dict.readings('大').unwrap(), vec!["da4", "dai4"]);
/// assert!(dict.readings('小').unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapReadingDictionary {
    entries: AHashMap<char, Vec<String>>,
}

impl MapReadingDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add readings for a character, keeping first-seen order and skipping duplicates.
    pub fn insert<I, S>(&mut self, c: char, readings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entries.entry(c).or_default();
        for reading in readings {
            let reading = reading.into();
            if !reading.is_empty() && !entry.contains(&reading) {
                entry.push(reading);
            }
        }
    }

    /// Number of characters with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a dictionary file.
    ///
    /// Files ending in `.json` are read with [`from_json_str`](Self::from_json_str),
    /// anything else as a pinyin4j table with
    /// [`from_pinyin4j_table`](Self::from_pinyin4j_table).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PinyinError::dictionary(format!(
                "Failed to read reading dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_pinyin4j_table(&content)
        }
    }

    /// Build a dictionary from a JSON object of character to readings.
    ///
    /// ```json
    /// { "大": ["da4", "dai4"], "学": ["xue2"] }
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(content).map_err(|e| {
            PinyinError::parse(format!("Failed to parse reading dictionary JSON: {e}"))
        })?;

        let mut dictionary = Self::new();
        for (key, readings) in raw {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => dictionary.insert(c, readings),
                _ => {
                    return Err(PinyinError::parse(format!(
                        "Dictionary key '{key}' must be exactly one character"
                    )));
                }
            }
        }
        Ok(dictionary)
    }

    /// Build a dictionary from a pinyin4j-style code point table.
    ///
    /// Each line holds a hexadecimal code point followed by a parenthesised,
    /// comma-separated reading list. `(none0)` marks a character without
    /// reading; blank lines and `#` comments are skipped.
    ///
    /// ```text
    /// 4E00 (yi1,yi2,yi4)
    /// 5927 (da4,dai4)
    /// ```
    pub fn from_pinyin4j_table(content: &str) -> Result<Self> {
        let mut dictionary = Self::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = || {
                PinyinError::parse(format!("Malformed dictionary line {}: '{line}'", line_no + 1))
            };

            let (code, rest) = line.split_once(char::is_whitespace).ok_or_else(malformed)?;
            let c = u32::from_str_radix(code.trim(), 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(malformed)?;
            let list = rest
                .trim()
                .strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .ok_or_else(malformed)?;

            let readings: Vec<&str> = list
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty() && *r != "none0")
                .collect();
            if !readings.is_empty() {
                dictionary.insert(c, readings);
            }
        }

        Ok(dictionary)
    }
}

impl ReadingDictionary for MapReadingDictionary {
    fn readings(&self, c: char) -> Result<Vec<String>> {
        Ok(self.entries.get(&c).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_insert_dedupes_in_order() {
        let mut dict = MapReadingDictionary::new();
        dict.insert('长', ["chang2", "zhang3"]);
        dict.insert('长', ["zhang3", "chang2", ""]);

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.readings('长').unwrap(), vec!["chang2", "zhang3"]);
    }

    #[test]
    fn test_from_json_str() {
        let dict =
            MapReadingDictionary::from_json_str(r#"{"西": ["xi1"], "游": ["you2"]}"#).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.readings('游').unwrap(), vec!["you2"]);
    }

    #[test]
    fn test_from_json_str_rejects_multi_char_keys() {
        let result = MapReadingDictionary::from_json_str(r#"{"西游": ["xi1"]}"#);
        assert!(matches!(result, Err(PinyinError::Parse(_))));
    }

    #[test]
    fn test_from_pinyin4j_table() {
        let table = "# sample\n4E00 (yi1,yi2,yi4)\n\n5927 (da4,dai4)\n3007 (none0)\n";
        let dict = MapReadingDictionary::from_pinyin4j_table(table).unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.readings('一').unwrap(), vec!["yi1", "yi2", "yi4"]);
        assert_eq!(dict.readings('大').unwrap(), vec!["da4", "dai4"]);
        assert!(dict.readings('〇').unwrap().is_empty());
    }

    #[test]
    fn test_from_pinyin4j_table_malformed() {
        let result = MapReadingDictionary::from_pinyin4j_table("ZZZZ (da4)");
        assert!(result.is_err());

        let result = MapReadingDictionary::from_pinyin4j_table("5927 da4");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "5B66 (xue2)").unwrap();

        let dict = MapReadingDictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.readings('学').unwrap(), vec!["xue2"]);

        let missing = MapReadingDictionary::load_from_file("does/not/exist.json");
        assert!(matches!(missing, Err(PinyinError::Dictionary(_))));
    }
}
