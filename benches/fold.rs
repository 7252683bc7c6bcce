//! Typed fold against the equivalent iterator code.
//!
//! The typed fold unrolls at compile time, so it should match a plain loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfold::dynamic::{append_checked, map_checked};
use dfold::{append, foldr, map, reverse, sum, vect, Vect, N16};

fn sixteen() -> Vect<u64, N16> {
    vect![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
}

fn bench_sum(c: &mut Criterion) {
    let v = sixteen();
    let arr: [u64; 16] = core::array::from_fn(|i| i as u64 + 1);

    c.bench_function("dfold_sum_16", |b| b.iter(|| sum(black_box(v.clone()))));
    c.bench_function("iter_sum_16", |b| {
        b.iter(|| black_box(arr).iter().sum::<u64>())
    });
}

fn bench_foldr(c: &mut Criterion) {
    let v = sixteen();

    c.bench_function("dfold_foldr_sub_16", |b| {
        b.iter(|| foldr(|x, acc: u64| x.wrapping_sub(acc), 0, black_box(v.clone())))
    });
}

fn bench_map(c: &mut Criterion) {
    let v = sixteen();
    let raw = v.to_vec();

    c.bench_function("dfold_map_16", |b| {
        b.iter(|| map(|x| x * 3, black_box(v.clone())))
    });
    c.bench_function("checked_map_16", |b| {
        b.iter(|| map_checked(|x| x * 3, black_box(raw.clone())))
    });
}

fn bench_append(c: &mut Criterion) {
    let v = sixteen();
    let raw = v.to_vec();

    c.bench_function("dfold_append_16_16", |b| {
        b.iter(|| append(black_box(v.clone()), black_box(v.clone())))
    });
    c.bench_function("checked_append_16_16", |b| {
        b.iter(|| append_checked(black_box(raw.clone()), black_box(raw.clone())))
    });
}

fn bench_reverse(c: &mut Criterion) {
    let v = sixteen();

    c.bench_function("dfold_reverse_16", |b| b.iter(|| reverse(black_box(v.clone()))));
}

criterion_group!(
    benches,
    bench_sum,
    bench_foldr,
    bench_map,
    bench_append,
    bench_reverse,
);
criterion_main!(benches);
