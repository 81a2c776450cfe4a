use crate::traits::{size_as, FloatScalar, MatrixMut, MatrixRef};

/// Moore-Penrose pseudo-inverse from a thin SVD `A = U · diag(sigma) · Vᵗ`.
///
/// `u` is `m × k`, `v` is `n × k` and `sigma` holds `k` non-negative singular
/// values. Writes `A⁺ = V · diag(1/σ) · Uᵗ` (`n × m`) into `out`, skipping
/// every `σ <= tol`. With `tol = None` the threshold is
/// `max(m, n) · ε · max(σ)`. Returns the number of singular values inverted
/// (the numerical rank).
pub fn pseudo_inverse<T: FloatScalar>(
    u: &impl MatrixRef<T>,
    sigma: &[T],
    v: &impl MatrixRef<T>,
    out: &mut impl MatrixMut<T>,
    tol: Option<T>,
) -> usize {
    let (m, n) = (u.nrows(), v.nrows());
    let k = sigma.len();
    assert_eq!(u.ncols(), k, "U must have one column per singular value");
    assert_eq!(v.ncols(), k, "V must have one column per singular value");
    assert_eq!((out.nrows(), out.ncols()), (n, m), "output must be n x m");

    let s_max = sigma
        .iter()
        .fold(T::zero(), |max, &s| if s > max { s } else { max });
    let tol = tol.unwrap_or_else(|| size_as::<T>(m.max(n)) * T::epsilon() * s_max);

    for i in 0..n {
        for j in 0..m {
            *out.entry_mut(i, j) = T::zero();
        }
    }

    let mut rank = 0;
    for (kk, &s) in sigma.iter().enumerate() {
        if s <= tol {
            continue;
        }
        rank += 1;
        let inv = T::one() / s;
        for i in 0..n {
            let vik = *v.entry(i, kk) * inv;
            if vik == T::zero() {
                continue;
            }
            for j in 0..m {
                *out.entry_mut(i, j) = *out.entry(i, j) + vik * *u.entry(j, kk);
            }
        }
    }

    log::debug!("pseudo-inverse: rank {} of {} (tolerance {:?})", rank, k, tol);
    rank
}
