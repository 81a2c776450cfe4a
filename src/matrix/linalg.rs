use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::{gauss_jordan_in_place, jacobi_svd_in_place, pseudo_inverse, LinalgError, SvdOptions};
use crate::traits::FloatScalar;

use super::Matrix;

// ── Inversion ───────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns `DimensionMismatch` for non-square input and `Singular` when a
    /// pivot falls below `n · ε · ‖A‖∞`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert!((&a * &inv).approx_eq(&Matrix::eye(2), 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.require_square()?;
        let mut work = self.clone();
        let mut inv = Matrix::zeros(self.nrows(), self.ncols());
        gauss_jordan_in_place(&mut work, &mut inv)?;
        Ok(inv)
    }

    /// Determinant from the same elimination as [`inverse`](Self::inverse).
    ///
    /// Singular matrices give `Ok(0)`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert!((a.determinant().unwrap() + 2.0).abs() < 1e-12);
    /// ```
    pub fn determinant(&self) -> Result<T, LinalgError> {
        self.require_square()?;
        let mut work = self.clone();
        let mut inv = Matrix::zeros(self.nrows(), self.ncols());
        match gauss_jordan_in_place(&mut work, &mut inv) {
            Ok(det) => Ok(det),
            Err(LinalgError::Singular) => Ok(T::zero()),
            Err(e) => Err(e),
        }
    }

    fn require_square(&self) -> Result<(), LinalgError> {
        if self.is_square() {
            Ok(())
        } else {
            let n = self.nrows();
            Err(LinalgError::DimensionMismatch {
                expected: (n, n),
                got: self.shape(),
            })
        }
    }
}

// ── Svd ─────────────────────────────────────────────────────────────

/// Thin singular value decomposition `A = U · S · Vᵗ`.
///
/// For an `m × n` input and `k = min(m, n)`: `U` is `m × k`, `S` is `k × k`
/// diagonal with non-negative entries sorted descending, `V` is `n × k`.
/// Columns of `U` and `V` are orthonormal.
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 3, &[3.0_f64, 2.0, 2.0, 2.0, 3.0, -2.0]).unwrap();
/// let svd = a.svd();
/// assert_eq!(svd.u().shape(), (2, 2));
/// assert_eq!(svd.s().shape(), (2, 2));
/// assert_eq!(svd.v().shape(), (3, 2));
/// assert!((svd.singular_values()[0] - 5.0).abs() < 1e-10);
/// assert!((svd.singular_values()[1] - 3.0).abs() < 1e-10);
/// assert!(svd.reconstruct().approx_eq(&a, 1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct Svd<T> {
    u: Matrix<T>,
    s: Matrix<T>,
    v: Matrix<T>,
    singular_values: Vec<T>,
    sweeps: usize,
}

impl<T: FloatScalar> Svd<T> {
    /// Decompose `a` with default [`SvdOptions`].
    pub fn new(a: &Matrix<T>) -> Self {
        Self::with_options(a, &SvdOptions::default())
    }

    /// Decompose `a` with explicit convergence controls.
    pub fn with_options(a: &Matrix<T>, options: &SvdOptions<T>) -> Self {
        let (m, n) = a.shape();
        let k = m.min(n);

        // Wide input: decompose Aᵗ = U'ΣV'ᵗ, then A = V'ΣU'ᵗ
        let transposed = m < n;
        let mut work = if transposed { a.transpose() } else { a.clone() };
        let mut v_work = Matrix::zeros(k, k);
        let mut sigma = vec![T::zero(); k];

        let sweeps = jacobi_svd_in_place(&mut work, &mut v_work, &mut sigma, options);

        let (u, v) = if transposed {
            (v_work, work)
        } else {
            (work, v_work)
        };

        let mut s = Matrix::zeros(k, k);
        for (i, &sv) in sigma.iter().enumerate() {
            s[(i, i)] = sv;
        }

        Self {
            u,
            s,
            v,
            singular_values: sigma,
            sweeps,
        }
    }

    /// Left singular vectors as columns (`m × k`).
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Diagonal matrix of singular values (`k × k`).
    pub fn s(&self) -> &Matrix<T> {
        &self.s
    }

    /// Right singular vectors as columns (`n × k`).
    pub fn v(&self) -> &Matrix<T> {
        &self.v
    }

    /// Singular values, descending.
    pub fn singular_values(&self) -> &[T] {
        &self.singular_values
    }

    /// Number of Jacobi sweeps the decomposition took.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Count of singular values strictly above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        self.singular_values.iter().filter(|&&s| s > tol).count()
    }

    /// `σ_max / σ_min`; infinite when the smallest singular value is zero.
    pub fn condition_number(&self) -> T {
        let first = self.singular_values.first().copied().unwrap_or_else(T::zero);
        let last = self.singular_values.last().copied().unwrap_or_else(T::zero);
        if last == T::zero() {
            T::infinity()
        } else {
            first / last
        }
    }

    /// `U · S · Vᵗ`.
    pub fn reconstruct(&self) -> Matrix<T> {
        let (m, n) = (self.u.nrows(), self.v.nrows());
        Matrix::from_fn(m, n, |i, j| {
            self.singular_values
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (k, &sv)| {
                    acc + self.u[(i, k)] * sv * self.v[(j, k)]
                })
        })
    }

    /// Split into `(U, S, V)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>, Matrix<T>) {
        (self.u, self.s, self.v)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Thin SVD by one-sided Jacobi. See [`Svd`].
    pub fn svd(&self) -> Svd<T> {
        Svd::new(self)
    }

    /// Thin SVD with explicit tolerance and sweep cap.
    ///
    /// ```
    /// use densemat::Matrix;
    /// use densemat::linalg::SvdOptions;
    ///
    /// let a = Matrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 1.0]).unwrap();
    /// let svd = a.svd_with(&SvdOptions { tolerance: Some(1e-14), max_sweeps: 5 });
    /// assert_eq!(svd.singular_values(), &[2.0, 1.0]);
    /// ```
    pub fn svd_with(&self, options: &SvdOptions<T>) -> Svd<T> {
        Svd::with_options(self, options)
    }

    /// Singular values only, descending.
    pub fn singular_values(&self) -> Vec<T> {
        self.svd().singular_values
    }

    /// Moore-Penrose pseudo-inverse (`ncols × nrows`).
    ///
    /// Singular values at or below `max(m, n) · ε · σ_max` are treated as zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(1, 2, &[3.0_f64, 4.0]).unwrap();
    /// let p = a.pinv();
    /// assert_eq!(p.shape(), (2, 1));
    /// assert!((p[(0, 0)] - 0.12).abs() < 1e-12);
    /// assert!((p[(1, 0)] - 0.16).abs() < 1e-12);
    /// ```
    pub fn pinv(&self) -> Self {
        self.pinv_impl(None)
    }

    /// Pseudo-inverse with an explicit zero threshold on the singular values.
    pub fn pinv_with_tolerance(&self, tol: T) -> Self {
        self.pinv_impl(Some(tol))
    }

    fn pinv_impl(&self, tol: Option<T>) -> Self {
        let svd = self.svd();
        let mut out = Matrix::zeros(self.ncols(), self.nrows());
        pseudo_inverse(&svd.u, &svd.singular_values, &svd.v, &mut out, tol);
        out
    }
}
