use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZE: usize = 10_000;

#[derive(Clone, Copy)]
struct RandomKeys {
    state: u64,
}

impl RandomKeys {
    fn new() -> Self {
        RandomKeys { state: 0 }
    }
}

impl Iterator for RandomKeys {
    type Item = u64;
    fn next(&mut self) -> Option<u64> {
        // Add 1 then multiply by some 32 bit prime.
        self.state = self.state.wrapping_add(1).wrapping_mul(3_787_392_781);
        Some(self.state)
    }
}

fn read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    group.bench_function("kumquat", |b| {
        let mut set = kumquat::ProbeSet::with_capacity(SIZE * 2);
        for key in RandomKeys::new().take(SIZE) {
            set.insert(key);
        }

        b.iter(|| {
            for key in RandomKeys::new().take(SIZE) {
                black_box(assert!(set.contains(key)));
            }
        });
    });

    group.bench_function("std", |b| {
        let mut set = HashSet::new();
        for key in RandomKeys::new().take(SIZE) {
            set.insert(key);
        }

        b.iter(|| {
            for key in RandomKeys::new().take(SIZE) {
                black_box(assert!(set.contains(&key)));
            }
        });
    });

    group.finish();
}

fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    group.bench_function("kumquat", |b| {
        b.iter(|| {
            let mut set = kumquat::ProbeSet::new();
            for key in RandomKeys::new().take(SIZE) {
                set.insert(key);
            }
            black_box(set)
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let mut set = HashSet::new();
            for key in RandomKeys::new().take(SIZE) {
                set.insert(key);
            }
            black_box(set)
        });
    });

    group.finish();
}

criterion_group!(benches, read, insert);
criterion_main!(benches);
