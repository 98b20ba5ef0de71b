use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polycalc::{function, Polynomial};
use std::hint::black_box;

/// A dense polynomial of the given degree, with coefficients alternating in sign
fn gen_polynomial(degree: usize) -> Polynomial {
    let coefficients: Vec<f64> = (0..=degree)
        .map(|i| if i % 2 == 0 { 1.5 } else { -0.5 })
        .collect();
    Polynomial::new(coefficients).expect("Leading coefficient is non-zero")
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // Horner evaluation should scale linearly with degree
    println!("Benchmarking evaluation vs degree...");
    let mut group = c.benchmark_group("value_vs_degree");
    for degree in [1, 2, 3, 5, 10, 20, 50, 100] {
        let poly = gen_polynomial(degree);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &poly, |b, poly| {
            b.iter(|| poly.value(black_box(0.75)));
        });
    }
    group.finish();

    //
    // Sampling a curve the way a plot would
    println!("Benchmarking sampling (10_000 points)...");
    function!(cubic(x) = 1.0 x^3 - 1.5 x^2 - 5.0 x + 5.5);
    c.bench_function("linspace_10_000", |b| {
        b.iter(|| cubic.linspace(black_box(-3.0..=3.0), 10_000));
    });

    //
    // Arithmetic and calculus at a fixed degree
    println!("Benchmarking arithmetic (Degree=10)...");
    let p = gen_polynomial(10);
    let q = gen_polynomial(7);
    let mut group = c.benchmark_group("arithmetic");
    group.bench_function("add", |b| b.iter(|| black_box(&p) + black_box(&q)));
    group.bench_function("add_scalar", |b| b.iter(|| black_box(&p) + black_box(2.0)));
    group.bench_function("sub_cancel", |b| b.iter(|| black_box(&p) - black_box(&p)));
    group.bench_function("scale", |b| b.iter(|| black_box(&p) * black_box(3.0)));
    group.bench_function("differentiate", |b| b.iter(|| black_box(&p).differentiate()));
    group.bench_function("integrate", |b| b.iter(|| black_box(&p).integrate(1.0)));
    group.bench_function("tangent", |b| b.iter(|| black_box(&p).tangent(0.5)));
    group.finish();

    //
    // Rendering
    println!("Benchmarking display...");
    let mut group = c.benchmark_group("display");
    group.bench_function("Degree=10", |b| b.iter(|| black_box(&p).equation()));
    group.bench_function("Degree=100", |b| {
        let poly = gen_polynomial(100);
        b.iter(|| black_box(&poly).equation());
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
