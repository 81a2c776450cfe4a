use criterion::{criterion_group, criterion_main, Criterion};
use densemat::Matrix;
use nalgebra::DMatrix;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize, n: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + if i == j { 4.0 * n as f64 } else { 0.0 }
}

fn densemat_square(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| entry(i, j, n))
}

fn nalgebra_square(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| entry(i, j, n))
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion, n: usize) {
    let mut g = c.benchmark_group(format!("matmul_{n}x{n}"));

    g.bench_function("densemat", |b| {
        let a = Matrix::from_fn(n, n, |i, j| (i * n + j + 1) as f64);
        let m = Matrix::from_fn(n, n, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("densemat_into", |b| {
        let a = Matrix::from_fn(n, n, |i, j| (i * n + j + 1) as f64);
        let m = Matrix::from_fn(n, n, |i, j| (i + j + 1) as f64);
        let mut out = Matrix::from_fn(n, n, |_, _| 0.0);
        b.iter(|| densemat::multiply_into(std::hint::black_box(&a), std::hint::black_box(&m), &mut out))
    });

    g.bench_function("nalgebra", |b| {
        let a = DMatrix::from_fn(n, n, |i, j| (i * n + j + 1) as f64);
        let m = DMatrix::from_fn(n, n, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

fn matmul_6x6(c: &mut Criterion) {
    matmul(c, 6);
}

fn matmul_50x50(c: &mut Criterion) {
    matmul(c, 50);
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

fn inverse(c: &mut Criterion, n: usize) {
    let mut g = c.benchmark_group(format!("inverse_{n}x{n}"));

    g.bench_function("densemat", |b| {
        let a = densemat_square(n);
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_square(n);
        b.iter(|| std::hint::black_box(&a).clone().try_inverse())
    });

    g.finish();
}

fn inverse_6x6(c: &mut Criterion) {
    inverse(c, 6);
}

fn inverse_50x50(c: &mut Criterion) {
    inverse(c, 50);
}

// ---------------------------------------------------------------------------
// SVD
// ---------------------------------------------------------------------------

fn svd_2x2(c: &mut Criterion) {
    let mut g = c.benchmark_group("svd_2x2");

    g.bench_function("densemat_closed_form", |b| {
        b.iter(|| densemat::svd_2x2(std::hint::black_box(1.0_f64), 2.0, 3.0, 4.0))
    });

    g.bench_function("densemat_jacobi", |b| {
        let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        b.iter(|| std::hint::black_box(&a).svd())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix2::new(1.0_f64, 2.0, 3.0, 4.0);
        b.iter(|| std::hint::black_box(&a).svd(true, true))
    });

    g.finish();
}

fn svd(c: &mut Criterion, m: usize, n: usize) {
    let mut g = c.benchmark_group(format!("svd_{m}x{n}"));

    g.bench_function("densemat", |b| {
        let a = Matrix::from_fn(m, n, |i, j| ((i + 1) * 10 + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a).svd())
    });

    g.bench_function("nalgebra", |b| {
        let a = DMatrix::from_fn(m, n, |i, j| ((i + 1) * 10 + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a).clone().svd(true, true))
    });

    g.finish();
}

fn svd_6x6(c: &mut Criterion) {
    svd(c, 6, 6);
}

fn svd_40x10(c: &mut Criterion) {
    svd(c, 40, 10);
}

// ---------------------------------------------------------------------------
// Pseudo-inverse
// ---------------------------------------------------------------------------

fn pinv_20x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("pinv_20x8");

    g.bench_function("densemat", |b| {
        let a = Matrix::from_fn(20, 8, |i, j| ((i * 3 + j * 7) % 11) as f64 - 5.0);
        b.iter(|| std::hint::black_box(&a).pinv())
    });

    g.bench_function("nalgebra", |b| {
        let a = DMatrix::from_fn(20, 8, |i, j| ((i * 3 + j * 7) % 11) as f64 - 5.0);
        b.iter(|| std::hint::black_box(&a).clone().pseudo_inverse(1e-12))
    });

    g.finish();
}

criterion_group!(
    benches,
    matmul_6x6,
    matmul_50x50,
    inverse_6x6,
    inverse_50x50,
    svd_2x2,
    svd_6x6,
    svd_40x10,
    pinv_20x8,
);
criterion_main!(benches);
