//! Kilo Search Benchmarks
//!
//! Benchmarks for the name trie and the text analyzer, implemented with the
//! Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use kilo_search_lib::analysis::{ngram_tokenizer, sanitize};
use kilo_search_lib::data_structures::{NameIndex, NameTrie, UserName};

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Alan", "Grace", "John", "Jane", "Anna", "Linus", "Barbara",
];
const LAST_NAMES: [&str; 8] = [
    "Lovelace", "Turing", "Hopper", "Smith", "Doe", "Anderson", "Torvalds", "Liskov",
];

/// Builds a roster of `size` distinct users.
fn roster(size: usize) -> Vec<UserName> {
    (0..size)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            UserName::new(format!("{first}{i}"), last)
        })
        .collect()
}

/// Benchmark the name trie
fn bench_name_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let users = roster(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &users, |b, users| {
            b.iter(|| black_box(users.iter().collect::<NameTrie>()));
        });
    }

    let trie: NameTrie = roster(10_000).iter().collect();
    for prefix in ["a", "gra", "torv", "zz"].iter() {
        group.bench_with_input(BenchmarkId::new("search", prefix), prefix, |b, prefix| {
            b.iter(|| black_box(trie.search_by_prefix(black_box(prefix))));
        });
    }

    let index = NameIndex::default();
    index.rebuild(roster(10_000));
    group.bench_function("suggest", |b| {
        b.iter(|| black_box(index.suggest(black_box("jo"))));
    });

    group.finish();
}

/// Benchmark the text analyzer
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    group.measurement_time(Duration::from_secs(2));

    let sentence = "Don't you dare skip the challenge! It's only 2 miles, and we'll all be there. ";
    for repeat in [1, 10, 100].iter() {
        let text = sentence.repeat(*repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("sanitize", repeat), &text, |b, text| {
            b.iter(|| black_box(sanitize(black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("ngrams", repeat), &text, |b, text| {
            b.iter(|| black_box(ngram_tokenizer(black_box(text))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_name_trie, bench_text_analysis);
criterion_main!(benches);
