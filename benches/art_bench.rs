//! Simple performance bench over a static set of keys in a few scenarios.
//! Here to quickly test for regressions.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rand::{Rng, rng};

use art_index::AdaptiveRadixTree;

// Tree sizes for the benchmarks that measure retrievals.
const TREE_SIZES: [u64; 3] = [1 << 12, 1 << 16, 1 << 20];

fn gen_keys(l1_prefix: usize, l2_prefix: usize, suffix: usize) -> Vec<String> {
    let mut keys = Vec::new();
    let chars: Vec<char> = ('a'..='z').collect();
    for i in 0..chars.len() {
        let level1_prefix = chars[i].to_string().repeat(l1_prefix);
        for i in 0..chars.len() {
            let level2_prefix = chars[i].to_string().repeat(l2_prefix);
            let key_prefix = level1_prefix.clone() + &level2_prefix;
            for _ in 0..=u8::MAX {
                let suffix: String = (0..suffix)
                    .map(|_| chars[rng().random_range(0..chars.len())])
                    .collect();
                keys.push(key_prefix.clone() + &suffix);
            }
        }
    }

    keys.shuffle(&mut rng());
    keys
}

pub fn rand_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_insert");
    group.throughput(Throughput::Elements(1));

    let keys = gen_keys(3, 2, 3);

    group.bench_function("string_keys", |b| {
        let mut tree = AdaptiveRadixTree::new();
        let mut rng = rng();
        b.iter(|| {
            let key = &keys[rng.random_range(0..keys.len())];
            tree.insert(key, key);
        })
    });

    group.finish();
}

pub fn seq_insert(c: &mut Criterion) {
    c.bench_function("seq_insert", |b| {
        let mut tree = AdaptiveRadixTree::new();
        let mut key = 0u64;
        b.iter(|| {
            tree.insert(key.to_be_bytes(), key.to_be_bytes());
            key += 1;
        })
    });
}

pub fn rand_get(c: &mut Criterion) {
    for size in TREE_SIZES {
        c.bench_with_input(BenchmarkId::new("rand_get", size), &size, |b, size| {
            let mut tree = AdaptiveRadixTree::new();
            for i in 0..*size {
                tree.insert(i.to_be_bytes(), i.to_be_bytes());
            }
            let mut rng = rng();
            b.iter(|| {
                let key = rng.random_range(0..*size);
                criterion::black_box(tree.get(key.to_be_bytes()));
            })
        });
    }
}

pub fn rand_get_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_get_str");
    group.throughput(Throughput::Elements(1));

    let keys = gen_keys(3, 2, 3);
    let mut tree = AdaptiveRadixTree::new();
    for (i, key) in keys.iter().enumerate() {
        tree.insert(key, (i as u64).to_be_bytes());
    }

    group.bench_function("string_keys", |b| {
        let mut rng = rng();
        b.iter(|| {
            let key = &keys[rng.random_range(0..keys.len())];
            criterion::black_box(tree.get(key));
        })
    });

    group.finish();
}

criterion_group!(seq_benches, seq_insert);
criterion_group!(rand_benches, rand_get, rand_get_str, rand_insert);
criterion_main!(seq_benches, rand_benches);
