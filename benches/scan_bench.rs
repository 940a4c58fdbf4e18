//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tandem::*;

fn benchmark_scans(c: &mut Criterion) {
    let sorted: Vec<i64> = (0..10_000).map(|i| i / 4).collect();
    let bits: Vec<u8> = (0..10_000).map(|i| (i % 3 == 0) as u8).collect();
    let evens: Vec<i64> = (0..5_000).map(|i| i * 2).collect();
    let odds: Vec<i64> = (0..5_000).map(|i| i * 2 + 1).collect();
    let text: String = "abcd".chars().cycle().take(10_000).collect();
    let mirrored: String = text.chars().chain(text.chars().rev()).collect();

    c.bench_function("dedup_10k", |b| {
        b.iter(|| {
            let mut seq = sorted.clone();
            black_box(dedup_in_place(&mut seq));
        });
    });

    c.bench_function("partition_10k", |b| {
        b.iter(|| {
            let mut seq = bits.clone();
            partition_binary(&mut seq);
            black_box(seq);
        });
    });

    c.bench_function("merge_5k_5k", |b| {
        b.iter(|| black_box(merge_sorted(&evens, &odds)));
    });

    c.bench_function("subsequence_10k", |b| {
        b.iter(|| black_box(is_subsequence("abcdabcd", &text)));
    });

    c.bench_function("two_sum_10k", |b| {
        b.iter(|| black_box(two_sum_sorted(&evens, 19_994)));
    });

    c.bench_function("palindrome_20k", |b| {
        b.iter(|| black_box(is_palindrome(&mirrored)));
    });
}

criterion_group!(benches, benchmark_scans);
criterion_main!(benches);
