//! Property tests for pinyin expansion.

use std::sync::Arc;

use pinyin_transform::analysis::token::Token;
use pinyin_transform::analysis::token_filter::Filter;
use pinyin_transform::analysis::token_filter::pinyin::PinyinTransformFilter;
use pinyin_transform::pinyin::expander::MAX_POLYPHONE_PRODUCT;
use pinyin_transform::pinyin::{
    MapReadingDictionary, PhoneticExpander, PinyinFilterConfig, PinyinMode,
};
use proptest::prelude::*;

const ALPHABET: &[(char, &[&str])] = &[
    ('大', &["da4", "dai4"]),
    ('学', &["xue2"]),
    ('长', &["chang2", "zhang3"]),
    ('行', &["xing2", "hang2", "heng2"]),
    ('乐', &["le4", "yue4"]),
    ('单', &["dan1", "shan4", "chan2"]),
    ('西', &["xi1"]),
];

fn dictionary() -> Arc<MapReadingDictionary> {
    let mut dictionary = MapReadingDictionary::new();
    for (c, readings) in ALPHABET {
        dictionary.insert(*c, readings.iter().copied());
    }
    Arc::new(dictionary)
}

fn expander(mode: PinyinMode) -> PhoneticExpander {
    let config = PinyinFilterConfig::default()
        .with_mode(mode)
        .with_min_chinese_length(1);
    PhoneticExpander::new(dictionary(), &config).unwrap()
}

/// Distinct readings per character, after tones are dropped.
fn width(c: char) -> usize {
    ALPHABET
        .iter()
        .find(|(k, _)| *k == c)
        .map_or(0, |(_, readings)| readings.len())
}

fn arb_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 1..=max_len)
        .prop_map(|entries| entries.into_iter().map(|(c, _)| c).collect())
}

fn arb_mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(ALPHABET.to_vec()).prop_map(|(c, _)| c),
            prop::sample::select(vec!['a', 'Z', '7', ' ', '-', '猫']),
        ],
        0..10,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn all_mode_is_union_of_full_and_short(text in arb_text(7)) {
        let all = expander(PinyinMode::All).expand(&text).unwrap();
        let full = expander(PinyinMode::Full).expand(&text).unwrap();
        let short = expander(PinyinMode::Short).expand(&text).unwrap();

        for variant in full.iter().chain(short.iter()) {
            prop_assert!(all.contains(variant));
        }
        for variant in &all {
            prop_assert!(full.contains(variant) || short.contains(variant));
        }
    }

    #[test]
    fn full_expansion_size_is_product_of_widths(text in arb_text(7)) {
        let full = expander(PinyinMode::Full).expand(&text).unwrap();
        let product: usize = text.chars().map(width).product();

        prop_assert!(product <= MAX_POLYPHONE_PRODUCT);
        prop_assert_eq!(full.len(), product);
    }

    #[test]
    fn overflowing_expansion_is_bounded(text in arb_text(12)) {
        let full = expander(PinyinMode::Full).expand(&text).unwrap();
        let widths: Vec<usize> = text.chars().map(width).collect();
        let product = widths.iter().fold(1usize, |acc, w| acc.saturating_mul(*w));

        if product > MAX_POLYPHONE_PRODUCT {
            let bound = widths[0] * 2usize.pow(widths.len() as u32 - 1);
            prop_assert!(full.len() <= bound);
        } else {
            prop_assert_eq!(full.len(), product);
        }
    }

    #[test]
    fn expansion_is_deterministic(text in arb_mixed_text()) {
        let expander = expander(PinyinMode::All);
        let first = expander.expand(&text).unwrap();
        let second = expander.expand(&text).unwrap();
        prop_assert_eq!(first.to_vec(), second.to_vec());
    }

    #[test]
    fn filter_groups_variants_behind_each_input(
        words in prop::collection::vec(arb_mixed_text(), 0..6),
        emit_original in any::<bool>(),
    ) {
        let config = PinyinFilterConfig::default().with_emit_original(emit_original);
        let expander = PhoneticExpander::new(dictionary(), &config).unwrap();
        let filter = PinyinTransformFilter::new(dictionary(), config).unwrap();

        let mut offset = 0;
        let input: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let end = offset + word.len();
                let token = Token::with_offsets(word.clone(), position, offset, end);
                offset = end + 1;
                token
            })
            .collect();

        let output: Vec<Token> = filter
            .filter(Box::new(input.clone().into_iter()))
            .unwrap()
            .collect();

        let mut rest = output.as_slice();
        for token in &input {
            let variants = expander.expand(&token.text).unwrap();
            let expected = usize::from(emit_original) + variants.len();
            prop_assert!(rest.len() >= expected);

            let (emitted, tail) = rest.split_at(expected);
            rest = tail;
            for (index, out) in emitted.iter().enumerate() {
                prop_assert_eq!(out.start_offset, token.start_offset);
                prop_assert_eq!(out.end_offset, token.end_offset);
                let increment = if index == 0 { token.position_increment } else { 0 };
                prop_assert_eq!(out.position_increment, increment);
            }
            if emit_original {
                prop_assert_eq!(&emitted[0].text, &token.text);
            } else {
                let texts: Vec<String> = emitted.iter().map(|t| t.text.clone()).collect();
                prop_assert_eq!(texts, variants.to_vec());
            }
        }
        prop_assert!(rest.is_empty());
    }
}
