//! Criterion benchmarks for multiplication strategies.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use widecalc_core::{Calculator, Options, SchoolbookStrategy, TransformKind, WideInt};

fn operand(digits: usize, seed: u8) -> WideInt {
    let s: String = (0..digits)
        .map(|i| char::from(b'1' + u8::try_from((i * 7 + usize::from(seed)) % 9).unwrap()))
        .collect();
    s.parse().unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let calculators = [
        ("FFT", Calculator::from_options(&Options { parallel: false, ..Default::default() })),
        ("ParallelFFT", Calculator::default()),
        (
            "NTT",
            Calculator::from_options(&Options {
                transform: TransformKind::Modular,
                parallel: false,
                ..Default::default()
            }),
        ),
        ("Schoolbook", Calculator::new(Arc::new(SchoolbookStrategy::new()))),
    ];

    let sizes: Vec<usize> = vec![100, 1_000, 10_000];

    for (name, calc) in &calculators {
        let mut group = c.benchmark_group(*name);
        for &digits in &sizes {
            if *name == "Schoolbook" && digits > 1_000 {
                continue;
            }
            let (a, b) = (operand(digits, 1), operand(digits, 4));
            group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
                bench.iter(|| calc.multiply(&a, &b));
            });
        }
        group.finish();
    }
}

fn bench_division(c: &mut Criterion) {
    let calc = Calculator::default();
    let mut group = c.benchmark_group("DivRem");
    for &digits in &[50usize, 200] {
        let a = operand(digits * 2, 2);
        let b = operand(digits, 5);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| calc.div_rem(&a, &b).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_division);
criterion_main!(benches);
