use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use entry_core::{FloatEntry, FloatEntryOptions, Key};

fn filter_benchmark(c: &mut Criterion) {
    let mut entry = FloatEntry::new(FloatEntryOptions {
        initial: "50.00".to_string(),
        min: Some(0.0),
        max: Some(100.0),
        precision: Some(2),
        ..Default::default()
    });

    c.bench_function("on_key_digit", |b| {
        b.iter(|| black_box(&entry).on_key(Key::Char('7'), 2));
    });

    c.bench_function("on_key_rejected_sign", |b| {
        b.iter(|| black_box(&entry).on_key(Key::Char('-'), 2));
    });

    c.bench_function("commit_in_range", |b| {
        b.iter(|| entry.commit(Some(black_box("42.50"))));
    });
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
