use alloc::vec;

use crate::traits::{size_as, FloatScalar, MatrixMut, MatrixRef};

// ── Closed-form 2×2 ─────────────────────────────────────────────────

/// Closed-form SVD of `[[a, b], [c, d]]`.
///
/// `A = R(theta) · diag(sx, sy) · Vᵗ` where `R(x) = [[cos x, -sin x], [sin x, cos x]]`
/// and `Vᵗ = R(phi)`, or `diag(1, -1) · R(phi)` when `reflect` is set.
/// Rotations alone cannot represent a matrix with negative determinant once
/// both singular values are non-negative, so the reflection is folded into `V`.
///
/// ```
/// use densemat::linalg::svd_2x2;
///
/// let svd = svd_2x2(1.0_f64, 2.0, 3.0, 4.0);
/// assert!(svd.sx > svd.sy && svd.sy > 0.0);
/// let r = svd.reconstruct();
/// assert!((r[0][1] - 2.0).abs() < 1e-12);
/// assert!((r[1][0] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svd2x2<T> {
    /// Larger singular value.
    pub sx: T,
    /// Smaller singular value, `0 <= sy <= sx`.
    pub sy: T,
    /// Right rotation angle (defines `V`).
    pub phi: T,
    /// Left rotation angle (defines `U`).
    pub theta: T,
    /// `V` carries a reflection (`det(A) < 0`).
    pub reflect: bool,
}

/// Closed-form SVD of the 2×2 matrix `[[a, b], [c, d]]`. See [`Svd2x2`].
///
/// Splits the matrix into a scaled rotation `[[e, -h], [h, e]]` and a scaled
/// reflection `[[f, g], [g, -f]]`. Their magnitudes `q` and `r` give the
/// singular values `q + r` and `|q - r|`; their `atan2` angles give the two
/// rotations. No iteration.
pub fn svd_2x2<T: FloatScalar>(a: T, b: T, c: T, d: T) -> Svd2x2<T> {
    let two = T::one() + T::one();
    let e = (a + d) / two;
    let f = (a - d) / two;
    let g = (c + b) / two;
    let h = (c - b) / two;

    let q = e.hypot(h);
    let r = f.hypot(g);

    let a1 = g.atan2(f);
    let a2 = h.atan2(e);

    let sy = q - r;
    Svd2x2 {
        sx: q + r,
        sy: sy.abs(),
        phi: (a2 - a1) / two,
        theta: (a2 + a1) / two,
        reflect: sy < T::zero(),
    }
}

impl<T: FloatScalar> Svd2x2<T> {
    /// Left singular vectors as columns of a row-major 2×2 array.
    pub fn u(&self) -> [[T; 2]; 2] {
        let (s, c) = self.theta.sin_cos();
        [[c, T::zero() - s], [s, c]]
    }

    /// Right singular vectors as rows of a row-major 2×2 array.
    pub fn vt(&self) -> [[T; 2]; 2] {
        let (s, c) = self.phi.sin_cos();
        let sign = if self.reflect {
            T::zero() - T::one()
        } else {
            T::one()
        };
        [[c, T::zero() - s], [sign * s, sign * c]]
    }

    /// `U · diag(sx, sy) · Vᵗ`.
    pub fn reconstruct(&self) -> [[T; 2]; 2] {
        let u = self.u();
        let vt = self.vt();
        let sv = [self.sx, self.sy];
        let mut out = [[T::zero(); 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                out[i][j] = u[i][0] * sv[0] * vt[0][j] + u[i][1] * sv[1] * vt[1][j];
            }
        }
        out
    }
}

// ── One-sided Jacobi ────────────────────────────────────────────────

/// Convergence controls for the one-sided Jacobi SVD.
///
/// ```
/// use densemat::linalg::SvdOptions;
/// let opts = SvdOptions::<f64> { max_sweeps: 10, ..SvdOptions::default() };
/// assert!(opts.tolerance.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvdOptions<T> {
    /// Relative orthogonality threshold: columns `p`, `q` count as converged
    /// once `|aₚ·a_q| <= tolerance · ‖aₚ‖‖a_q‖`. `None` means `rows · ε`.
    pub tolerance: Option<T>,
    /// Hard cap on the number of sweeps over all column pairs.
    pub max_sweeps: usize,
}

/// Sweep cap used by [`SvdOptions::default`].
pub const DEFAULT_MAX_SWEEPS: usize = 60;

impl<T> Default for SvdOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: None,
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

/// One-sided (Hestenes) Jacobi SVD, in place.
///
/// On entry `work` holds the `m × n` matrix `A` with `m >= n`. On return:
/// - `work` holds `U` (`m × n`, orthonormal columns),
/// - `v` (`n × n`) holds `V` (orthogonal),
/// - `sigma[0..n]` holds the singular values, sorted descending,
///
/// so that `A = U · diag(sigma) · Vᵗ`. Returns the number of sweeps run.
///
/// The rotations run on `A / max|aᵢⱼ|`, so entries near the edges of the
/// floating-point range do not overflow or underflow in the Gram sums.
///
/// Pairs whose inner product falls below `m · (ε · ‖A‖_F)²` also count as
/// converged.
///
/// Columns of `U` belonging to (numerically) zero singular values are
/// completed to an orthonormal set by Gram-Schmidt against the others.
/// Reaching `max_sweeps` is not an error; the current factors are returned and
/// a warning is logged.
pub fn jacobi_svd_in_place<T: FloatScalar>(
    work: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    sigma: &mut [T],
    options: &SvdOptions<T>,
) -> usize {
    let m = work.nrows();
    let n = work.ncols();
    assert!(m >= n, "one-sided Jacobi requires rows >= cols; transpose first");
    assert_eq!((v.nrows(), v.ncols()), (n, n), "V must be n x n");
    assert!(sigma.len() >= n, "sigma must hold n values");

    for i in 0..n {
        for j in 0..n {
            *v.entry_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    let tol = options
        .tolerance
        .unwrap_or_else(|| size_as::<T>(m) * T::epsilon());

    // Work on A / max|aᵢⱼ| so the Gram sums neither overflow nor underflow
    let mut scale = T::zero();
    for i in 0..m {
        for &w in work.row_as_slice(i) {
            if w.abs() > scale {
                scale = w.abs();
            }
        }
    }
    let rescale = scale > T::zero() && scale.is_finite() && scale != T::one();
    if rescale {
        // Divide rather than multiply by 1/scale: that reciprocal overflows
        // for subnormal scales.
        for i in 0..m {
            for w in work.row_as_mut_slice(i) {
                *w = *w / scale;
            }
        }
    }

    // Absolute floor on |aₚ·a_q|: below it one of the columns is rounding
    // noise and rotating it again cannot make progress.
    let mut frob_sq = T::zero();
    for i in 0..m {
        for j in 0..n {
            let w = *work.entry(i, j);
            frob_sq = frob_sq + w * w;
        }
    }
    let floor = size_as::<T>(m) * T::epsilon() * T::epsilon() * frob_sq;

    let mut sweeps = 0;
    let mut converged = n < 2;
    while !converged && sweeps < options.max_sweeps {
        sweeps += 1;
        converged = true;

        for p in 0..n {
            for q in (p + 1)..n {
                // Gram matrix entries for columns p and q
                let mut app = T::zero();
                let mut aqq = T::zero();
                let mut apq = T::zero();
                for i in 0..m {
                    let wp = *work.entry(i, p);
                    let wq = *work.entry(i, q);
                    app = app + wp * wp;
                    aqq = aqq + wq * wq;
                    apq = apq + wp * wq;
                }

                if apq.abs() <= tol * app.sqrt() * aqq.sqrt() || apq.abs() <= floor {
                    continue;
                }
                converged = false;

                let tau = (aqq - app) / (apq + apq);
                let t = if tau >= T::zero() {
                    T::one() / (tau + (T::one() + tau * tau).sqrt())
                } else {
                    T::zero() - T::one() / (T::zero() - tau + (T::one() + tau * tau).sqrt())
                };
                let cs = T::one() / (T::one() + t * t).sqrt();
                let sn = t * cs;

                rotate_cols(work, p, q, cs, sn);
                rotate_cols(v, p, q, cs, sn);
            }
        }
    }

    if converged {
        log::debug!("jacobi svd: {}x{} converged after {} sweeps", m, n, sweeps);
    } else {
        log::warn!(
            "jacobi svd: {}x{} not converged after {} sweeps (tolerance {:?})",
            m,
            n,
            sweeps,
            tol
        );
    }

    // Singular values are the column norms of the rotated matrix
    for j in 0..n {
        let mut norm_sq = T::zero();
        for i in 0..m {
            let w = *work.entry(i, j);
            norm_sq = norm_sq + w * w;
        }
        sigma[j] = norm_sq.sqrt();
    }

    // Sort descending, permuting U and V columns alongside
    for i in 0..n {
        let mut max_idx = i;
        for j in (i + 1)..n {
            if sigma[j] > sigma[max_idx] {
                max_idx = j;
            }
        }
        if max_idx != i {
            sigma.swap(i, max_idx);
            work.swap_cols(i, max_idx);
            v.swap_cols(i, max_idx);
        }
    }

    // Normalize columns into U; complete the null-space columns
    let zero_tol = if n > 0 {
        sigma[0] * size_as::<T>(m) * T::epsilon()
    } else {
        T::zero()
    };
    let half = T::one() / (T::one() + T::one());
    let mut x = vec![T::zero(); m];
    for j in 0..n {
        let mut keep = false;
        if sigma[j] > zero_tol {
            let inv = T::one() / sigma[j];
            for (i, xi) in x.iter_mut().enumerate() {
                *xi = *work.entry(i, j) * inv;
            }
            // Tiny columns are mostly rounding noise; drop them if little
            // survives re-orthogonalization.
            let norm = orthogonalize(&*work, j, &mut x);
            if norm > half {
                for (i, &xi) in x.iter().enumerate() {
                    *work.entry_mut(i, j) = xi / norm;
                }
                keep = true;
            }
        }
        if !keep {
            complete_column(work, j, &mut x);
        }
    }

    if rescale {
        for s in sigma[..n].iter_mut() {
            *s = *s * scale;
        }
    }

    sweeps
}

/// Apply the plane rotation `[[c, s], [-s, c]]` to columns `p`, `q`.
#[inline]
fn rotate_cols<T: FloatScalar>(a: &mut impl MatrixMut<T>, p: usize, q: usize, c: T, s: T) {
    for i in 0..a.nrows() {
        let ap = *a.entry(i, p);
        let aq = *a.entry(i, q);
        *a.entry_mut(i, p) = c * ap - s * aq;
        *a.entry_mut(i, q) = s * ap + c * aq;
    }
}

/// Remove from `x` its components along columns `0..j` of `u` (two
/// Gram-Schmidt passes). Returns the norm of what is left.
fn orthogonalize<T: FloatScalar>(u: &impl MatrixRef<T>, j: usize, x: &mut [T]) -> T {
    for _ in 0..2 {
        for k in 0..j {
            let mut dot = T::zero();
            for (i, &xi) in x.iter().enumerate() {
                dot = dot + *u.entry(i, k) * xi;
            }
            for (i, xi) in x.iter_mut().enumerate() {
                *xi = *xi - dot * *u.entry(i, k);
            }
        }
    }
    x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).sqrt()
}

/// Replace column `j` with a unit vector orthogonal to columns `0..j`.
///
/// Tries each standard basis vector and keeps the one with the largest
/// remainder after orthogonalization.
fn complete_column<T: FloatScalar>(u: &mut impl MatrixMut<T>, j: usize, x: &mut [T]) {
    let m = u.nrows();
    let mut best = vec![T::zero(); m];
    let mut best_norm = T::zero();

    for cand in 0..m {
        for (i, xi) in x.iter_mut().enumerate() {
            *xi = if i == cand { T::one() } else { T::zero() };
        }
        let norm = orthogonalize(&*u, j, x);
        if norm > best_norm {
            best_norm = norm;
            best.copy_from_slice(x);
        }
    }

    for i in 0..m {
        *u.entry_mut(i, j) = if best_norm > T::zero() {
            best[i] / best_norm
        } else {
            T::zero()
        };
    }
}
