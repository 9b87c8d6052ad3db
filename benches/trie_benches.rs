use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use alphanumeric_trie::AlphanumericTrie;

#[path = "../tests/common/mod.rs"]
mod common;

const CORPUS_BYTES: usize = 512 * 1024;

pub fn bulk_insert(c: &mut Criterion) {
    let corpus = common::build_corpus(42, CORPUS_BYTES);

    let mut group = c.benchmark_group("bulk_insert");
    group.throughput(Throughput::Elements(corpus.tokens.len() as u64));
    group.sample_size(20);
    group.bench_function("alphanumeric_trie", |b| {
        b.iter_batched(
            AlphanumericTrie::new,
            |mut trie| {
                for (index, token) in corpus.tokens.iter().enumerate() {
                    trie.add(token, index);
                }
                assert_eq!(trie.total_added_chars(), corpus.total_characters);
                trie
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

pub fn lookup(c: &mut Criterion) {
    let corpus = common::build_corpus(43, CORPUS_BYTES);
    let mut trie = AlphanumericTrie::new();
    for (index, token) in corpus.tokens.iter().enumerate() {
        trie.add(token, index);
    }

    let mut hits: Vec<String> = corpus.tokens.iter().map(|t| t.to_ascii_lowercase()).collect();
    hits.shuffle(&mut StdRng::seed_from_u64(44));
    let misses: Vec<String> = common::build_corpus(45, CORPUS_BYTES / 8)
        .tokens
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(1));
    group.bench_function("hit", |b| {
        let mut rng = thread_rng();
        b.iter(|| {
            let key = hits.choose(&mut rng).unwrap();
            black_box(trie.get(key))
        })
    });
    group.bench_function("miss", |b| {
        let mut rng = thread_rng();
        b.iter(|| {
            let key = misses.choose(&mut rng).unwrap();
            black_box(trie.has(key))
        })
    });

    group.finish();
}

criterion_group!(benches, bulk_insert, lookup);
criterion_main!(benches);
