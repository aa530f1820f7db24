//! rootfft benchmarks
//!
//! Usage:
//!   cargo bench                    # run all benchmarks
//!   cargo bench -- evaluate        # forward transform only
//!   cargo bench -- 2^12            # one size only

use ark_bls12_381::Fr;
use ark_ff::FftField;
use ark_poly::Polynomial;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rootfft::field::vec_to_poly;
use rootfft::{Complex64, evaluate, interpolate};

fn complex_poly(size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|i| Complex64::new((i % 7) as f64 - 3.0, (i % 3) as f64))
        .collect()
}

fn bench_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for log_n in [8u32, 12, 16] {
        let poly = complex_poly(1 << log_n);
        group.bench_function(BenchmarkId::new("complex", format!("2^{log_n}")), |b| {
            b.iter(|| black_box(evaluate(black_box(&poly)).unwrap()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("interpolate");
    for log_n in [8u32, 12, 16] {
        let values = evaluate(&complex_poly(1 << log_n)).unwrap();
        group.bench_function(BenchmarkId::new("complex", format!("2^{log_n}")), |b| {
            b.iter(|| black_box(interpolate(black_box(&values)).unwrap()))
        });
    }
    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for log_n in [8u32, 12] {
        let poly: Vec<Fr> = (0..1u64 << log_n).map(Fr::from).collect();
        group.bench_function(BenchmarkId::new("bls12-381", format!("2^{log_n}")), |b| {
            b.iter(|| black_box(evaluate(black_box(&poly)).unwrap()))
        });
    }
    group.finish();

    // point-by-point evaluation of the same polynomial over the same domain
    let mut group = c.benchmark_group("naive");
    group.sample_size(10);
    for log_n in [8u32, 12] {
        let n = 1usize << log_n;
        let poly = vec_to_poly((0..n as u64).map(Fr::from).collect());
        let omega = Fr::get_root_of_unity(n as u64).unwrap();
        group.bench_function(BenchmarkId::new("bls12-381", format!("2^{log_n}")), |b| {
            b.iter(|| {
                let mut x = Fr::from(1u64);
                let mut values = Vec::with_capacity(n);
                for _ in 0..n {
                    values.push(poly.evaluate(&x));
                    x *= omega;
                }
                black_box(values)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_complex, bench_field);
criterion_main!(benches);
