//! Character classification for pinyin expansion.
//!
//! Every character of a buffered token falls into one of three classes:
//! ideographic (looked up in the reading dictionary), alphanumeric (optionally
//! passed through literally) or other (dropped).

/// First code point treated as ideographic (U+4E00, start of CJK Unified Ideographs).
pub const IDEOGRAPHIC_START: u32 = 0x4E00;

/// Last code point treated as ideographic (U+29FA5).
pub const IDEOGRAPHIC_END: u32 = 0x29FA5;

/// Returns `true` if `c` is subject to phonetic expansion.
///
/// The range also covers blocks such as Hangul syllables or fullwidth forms.
/// Those count towards the ideographic length threshold but are usually
/// dropped later because the dictionary has no reading for them.
///
/// ```
/// use pinyin_transform::pinyin::chars::is_ideographic;
///
/// assert!(is_ideographic('中'));
/// assert!(!is_ideographic('a'));
/// ```
pub fn is_ideographic(c: char) -> bool {
    (IDEOGRAPHIC_START..=IDEOGRAPHIC_END).contains(&(c as u32))
}

/// Returns `true` for ASCII letters and digits.
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Number of ideographic UTF-16 code units in `text`.
///
/// Lengths are measured in UTF-16 code units. Both surrogates of a
/// supplementary-plane character lie inside the ideographic range, so such a
/// character counts twice whatever its block.
pub fn ideographic_count(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.chars().map(ideographic_units).sum()
}

fn ideographic_units(c: char) -> usize {
    match c.len_utf16() {
        1 if is_ideographic(c) => 1,
        1 => 0,
        units => units,
    }
}

/// Returns `true` if `text` contains at least one ideographic character.
pub fn contains_ideographic(text: &str) -> bool {
    text.chars().any(is_ideographic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ideographic() {
        assert!(is_ideographic('\u{4E00}'));
        assert!(is_ideographic('西'));
        assert!(is_ideographic('\u{29FA5}'));
        assert!(!is_ideographic('\u{4DFF}'));
        assert!(!is_ideographic('\u{29FA6}'));
        assert!(!is_ideographic('あ'));
        assert!(!is_ideographic('1'));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric('a'));
        assert!(is_alphanumeric('Z'));
        assert!(is_alphanumeric('7'));
        assert!(!is_alphanumeric('-'));
        assert!(!is_alphanumeric('é'));
        assert!(!is_alphanumeric('中'));
    }

    #[test]
    fn test_ideographic_count() {
        assert_eq!(ideographic_count("西游记"), 3);
        assert_eq!(ideographic_count("iphone手机2"), 2);
        assert_eq!(ideographic_count("hello"), 0);
        assert_eq!(ideographic_count("   "), 0);
        assert_eq!(ideographic_count(""), 0);
    }

    #[test]
    fn test_ideographic_count_supplementary_planes() {
        assert_eq!(ideographic_count("\u{20000}"), 2);
        assert_eq!(ideographic_count("\u{20000}西"), 3);
        assert_eq!(ideographic_count("a\u{1F600}"), 2);
    }
}
