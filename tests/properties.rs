use densemat::linalg::SvdOptions;
use densemat::{multiply, svd_2x2, LinalgError, Matrix};

const TOL: f64 = 1e-10;

/// Deterministic pseudo-random fill (LCG) so cases cover more than toy shapes.
fn filled(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let data = (0..rows * cols)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as f64 / (1u64 << 31) as f64) * 2.0 - 1.0
        })
        .collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn assert_orthonormal_cols(q: &Matrix<f64>, tol: f64, what: &str) {
    let k = q.ncols();
    let qtq = &q.transpose() * q;
    assert!(qtq.approx_eq(&Matrix::eye(k), tol), "{}: columns not orthonormal\n{}", what, qtq);
}

const SHAPES: [(usize, usize); 8] = [(1, 1), (2, 2), (3, 3), (5, 5), (6, 3), (3, 6), (1, 4), (7, 2)];

// ── Multiply / transpose / resize ───────────────────────────────────

#[test]
fn multiply_shape_and_identity() {
    for (seed, &(m, n)) in SHAPES.iter().enumerate() {
        let a = filled(m, n, seed as u64);
        let b = filled(n, 4, seed as u64 + 100);
        assert_eq!(multiply(&a, &b).unwrap().shape(), (m, 4));
        assert_eq!(multiply(&Matrix::eye(m), &a).unwrap(), a);
        assert_eq!(multiply(&a, &Matrix::eye(n)).unwrap(), a);
    }
}

#[test]
fn multiply_rejects_mismatch() {
    let a = filled(2, 3, 1);
    assert_eq!(
        multiply(&a, &a).unwrap_err(),
        LinalgError::DimensionMismatch {
            expected: (3, 3),
            got: (2, 3)
        }
    );
}

#[test]
fn transpose_involution() {
    for (seed, &(m, n)) in SHAPES.iter().enumerate() {
        let a = filled(m, n, seed as u64);
        assert_eq!(a.transpose().shape(), (n, m));
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn transpose_of_product() {
    let a = filled(3, 4, 7);
    let b = filled(4, 2, 8);
    let lhs = (&a * &b).transpose();
    let rhs = &b.transpose() * &a.transpose();
    assert!(lhs.approx_eq(&rhs, 1e-14));
}

#[test]
fn resize_round_trip_keeps_overlap() {
    let orig = filled(4, 5, 3);
    for &(r, c) in &[(2, 3), (6, 7), (4, 1), (1, 9)] {
        let mut m = orig.clone();
        m.resize(r, c).unwrap();
        assert_eq!(m.shape(), (r, c));
        m.resize(4, 5).unwrap();
        for i in 0..4 {
            for j in 0..5 {
                let expected = if i < r && j < c { orig[(i, j)] } else { 0.0 };
                assert_eq!(m.get(i, j).unwrap(), expected, "({}, {}) after {}x{}", i, j, r, c);
            }
        }
    }
}

#[test]
fn resize_to_zero_is_rejected() {
    let mut m = filled(2, 2, 5);
    let before = m.clone();
    assert_eq!(
        m.resize(0, 2).unwrap_err(),
        LinalgError::InvalidDimension { rows: 0, cols: 2 }
    );
    assert_eq!(m, before);
}

// ── Inverse ─────────────────────────────────────────────────────────

#[test]
fn inverse_times_original_is_identity() {
    for n in 1..=8 {
        // Diagonal shift keeps these well conditioned
        let a = &filled(n, n, n as u64) + &(Matrix::eye(n) * (n as f64));
        let inv = a.inverse().unwrap();
        let tol = 1e-9 * a.norm_inf() * inv.norm_inf();
        assert!((&a * &inv).approx_eq(&Matrix::eye(n), tol), "n = {}", n);
    }
}

#[test]
fn inverse_zero_row_is_singular() {
    let mut a = filled(4, 4, 11);
    for j in 0..4 {
        a.set(2, j, 0.0).unwrap();
    }
    assert_eq!(a.inverse().unwrap_err(), LinalgError::Singular);
}

#[test]
fn inverse_of_inverse() {
    let a = &filled(5, 5, 21) + &(Matrix::eye(5) * 3.0);
    let back = a.inverse().unwrap().inverse().unwrap();
    assert!(back.approx_eq(&a, 1e-10));
}

// ── SVD ─────────────────────────────────────────────────────────────

#[test]
fn svd_factors() {
    for (seed, &(m, n)) in SHAPES.iter().enumerate() {
        let a = filled(m, n, seed as u64 + 40);
        let svd = a.svd();
        let k = m.min(n);
        assert_eq!(svd.u().shape(), (m, k));
        assert_eq!(svd.s().shape(), (k, k));
        assert_eq!(svd.v().shape(), (n, k));

        assert!(svd.reconstruct().approx_eq(&a, TOL), "{}x{}: U·S·Vᵗ != A", m, n);
        assert_orthonormal_cols(svd.u(), TOL, "U");
        assert_orthonormal_cols(svd.v(), TOL, "V");

        let s = svd.s();
        for i in 0..k {
            for j in 0..k {
                if i != j {
                    assert_eq!(s[(i, j)], 0.0);
                }
            }
            assert!(s[(i, i)] >= 0.0);
            if i + 1 < k {
                assert!(s[(i, i)] >= s[(i + 1, i + 1)]);
            }
        }
    }
}

#[test]
fn svd_rank_deficient() {
    // Rank 2: third column is the sum of the first two
    let mut a = filled(6, 3, 77);
    for i in 0..6 {
        let v = a[(i, 0)] + a[(i, 1)];
        a.set(i, 2, v).unwrap();
    }
    let svd = a.svd();
    assert_eq!(svd.rank(1e-10), 2);
    assert!(svd.reconstruct().approx_eq(&a, TOL));
    assert_orthonormal_cols(svd.u(), TOL, "U");
}

#[test]
fn svd_frobenius_matches_singular_values() {
    let a = filled(5, 4, 9);
    let sum_sq: f64 = a.svd().singular_values().iter().map(|s| s * s).sum();
    assert!((sum_sq.sqrt() - a.frobenius_norm()).abs() < 1e-12);
}

#[test]
fn svd_tolerance_and_sweep_cap() {
    let a = filled(8, 8, 13);
    let tight = a.svd_with(&SvdOptions {
        tolerance: Some(1e-13),
        max_sweeps: 60,
    });
    let capped = a.svd_with(&SvdOptions {
        tolerance: None,
        max_sweeps: 1,
    });
    assert_eq!(capped.sweeps(), 1);
    assert!(tight.sweeps() > 1);
    // A capped run still returns orthogonal V
    assert_orthonormal_cols(capped.v(), 1e-12, "V");
}

#[test]
fn svd_2x2_properties() {
    let svd = svd_2x2(1.0_f64, 2.0, 3.0, 4.0);
    assert!(svd.sx > 0.0 && svd.sy > 0.0);
    assert!(svd.sx > svd.sy);
    let r = svd.reconstruct();
    let a = [[1.0, 2.0], [3.0, 4.0]];
    for i in 0..2 {
        for j in 0..2 {
            assert!((r[i][j] - a[i][j]).abs() < 1e-6);
        }
    }

    for seed in 0..20 {
        let m = filled(2, 2, 500 + seed);
        let closed = svd_2x2(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        let jacobi = m.svd();
        assert!((closed.sx - jacobi.singular_values()[0]).abs() < 1e-12);
        assert!((closed.sy - jacobi.singular_values()[1]).abs() < 1e-12);
        let r = closed.reconstruct();
        for i in 0..2 {
            for j in 0..2 {
                assert!((r[i][j] - m[(i, j)]).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn svd_and_pinv_far_from_unit_scale() {
    let tiny: Matrix<f64> = Matrix::from_rows(2, 2, &[2e-170, 0.0, 0.0, 1e-170]).unwrap();
    let huge = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap() * 1e160;
    for a in [tiny, huge] {
        let scale = a.max_abs();
        let svd = a.svd();
        assert!(svd.singular_values().iter().all(|s| s.is_finite() && *s > 0.0));
        assert!(svd.reconstruct().approx_eq(&a, 1e-12 * scale), "U·S·Vᵗ != A at {:e}", scale);
        assert_orthonormal_cols(svd.u(), TOL, "U");
        assert_orthonormal_cols(svd.v(), TOL, "V");

        let inv = a.inverse().unwrap();
        assert!(a.pinv().approx_eq(&inv, 1e-10 * inv.max_abs()), "pinv != inverse at {:e}", scale);
    }
}

// ── Pseudo-inverse ──────────────────────────────────────────────────

#[test]
fn pinv_of_invertible_is_inverse() {
    let a = &filled(4, 4, 31) + &(Matrix::eye(4) * 2.0);
    assert!(a.pinv().approx_eq(&a.inverse().unwrap(), 1e-9));
}

#[test]
fn pinv_penrose_conditions() {
    let mut deficient = filled(5, 4, 61);
    for i in 0..5 {
        let v = 2.0 * deficient[(i, 0)] - deficient[(i, 3)];
        deficient.set(i, 1, v).unwrap();
    }
    for a in [filled(6, 3, 51), filled(3, 6, 52), deficient] {
        let p = a.pinv();
        assert_eq!(p.shape(), (a.ncols(), a.nrows()));
        assert!((&(&a * &p) * &a).approx_eq(&a, 1e-9));
        assert!((&(&p * &a) * &p).approx_eq(&p, 1e-9));
        // A·A⁺ and A⁺·A are symmetric
        let ap = &a * &p;
        let pa = &p * &a;
        assert!(ap.approx_eq(&ap.transpose(), 1e-9));
        assert!(pa.approx_eq(&pa.transpose(), 1e-9));
    }
}
