/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::atoms::neighbor_shell;
use abacuskit_rs::symmetry::{classify_hm, crystal_system_from_number, hall_from_hm, tables};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn symmetry_lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Symmetry Lookups");

    group.bench_function("hall_from_hm_all_keys", |b| {
        b.iter(|| {
            for &(hm, _) in tables::HM_TO_HALL {
                black_box(hall_from_hm(black_box(hm)).ok());
            }
        })
    });

    group.bench_function("classify_hm", |b| {
        b.iter(|| black_box(classify_hm(black_box("P21/c")).ok()))
    });

    group.bench_function("crystal_system_from_number", |b| {
        b.iter(|| {
            for number in 1..=230u16 {
                black_box(crystal_system_from_number(black_box(number)).ok());
            }
        })
    });

    group.finish();
}

fn distance_benchmark(c: &mut Criterion) {
    c.bench_function("neighbor_shell", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(neighbor_shell(black_box("Fe"), black_box(i as f64 * 0.05)).ok());
            }
        })
    });
}

criterion_group!(benches, symmetry_lookup_benchmark, distance_benchmark);
criterion_main!(benches);
