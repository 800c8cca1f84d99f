//! Criterion benchmarks for pinyin expansion.
//!
//! Covers:
//! - Expansion of short titles in each mode
//! - Capped expansion of long polyphonic text
//! - Filter throughput over a stream of mixed tokens

use std::hint::black_box;
use std::path::PathBuf;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use pinyin_transform::analysis::analyzer::{Analyzer, PinyinAnalyzer};
use pinyin_transform::analysis::tokenizer::WhitespaceTokenizer;
use pinyin_transform::pinyin::{
    MapReadingDictionary, PhoneticExpander, PinyinFilterConfig, PinyinMode,
};

fn load_dictionary() -> Arc<MapReadingDictionary> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resource/pinyin/readings.json");
    Arc::new(MapReadingDictionary::load_from_file(path).unwrap())
}

/// Generate whitespace separated text mixing Chinese words and ASCII words.
fn generate_test_text(words: usize) -> String {
    let vocabulary = [
        "西游记", "红楼梦", "水浒传", "北京", "上海", "重庆", "银行", "长大", "音乐",
        "中国人民", "hello", "rust", "天安门", "和平", "朝阳", "会计", "单行", "曾都",
    ];
    (0..words)
        .map(|i| vocabulary[i % vocabulary.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Benchmark expansion of short titles.
fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");
    let dictionary = load_dictionary();

    for mode in [PinyinMode::Full, PinyinMode::Short, PinyinMode::All] {
        let config = PinyinFilterConfig::default().with_mode(mode);
        let expander = PhoneticExpander::new(dictionary.clone(), &config).unwrap();
        group.bench_function(format!("expand_title_{mode}"), |b| {
            b.iter(|| black_box(expander.expand(black_box("重庆银行单行会计"))))
        });
    }

    group.finish();
}

/// Benchmark expansion that hits the polyphone cap.
fn bench_capped_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("capped_expansion");
    group.sample_size(20);

    let config = PinyinFilterConfig::default().with_mode(PinyinMode::Full);
    let expander = PhoneticExpander::new(load_dictionary(), &config).unwrap();
    let text = "和行单".repeat(4);

    group.bench_function("expand_overflowing_text", |b| {
        b.iter(|| black_box(expander.expand(black_box(&text))))
    });

    group.finish();
}

/// Benchmark the whole analyzer over a token stream.
fn bench_filter_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_throughput");

    let analyzer = PinyinAnalyzer::with_tokenizer(
        Arc::new(WhitespaceTokenizer::new()),
        true,
        load_dictionary(),
        PinyinFilterConfig::default(),
    )
    .unwrap();
    let text = generate_test_text(100);

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_100_words", |b| {
        b.iter(|| {
            let count = analyzer.analyze(black_box(&text)).unwrap().count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_expansion,
    bench_capped_expansion,
    bench_filter_throughput
);

criterion_main!(benches);
