use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::Matrix;

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

/// Multiply `left * right` into the caller-supplied `out`.
///
/// Requires `left.ncols() == right.nrows()` and `out` shaped
/// `left.nrows() x right.ncols()`; anything else is `DimensionMismatch`.
/// `out` is overwritten. Since it is borrowed mutably it can never alias an
/// operand.
///
/// ```
/// use densemat::{multiply_into, Matrix};
/// let a = Matrix::from_rows(1, 2, &[1.0, 2.0]).unwrap();
/// let b = Matrix::from_rows(2, 1, &[3.0, 4.0]).unwrap();
/// let mut out = Matrix::new(1, 1).unwrap();
/// multiply_into(&a, &b, &mut out).unwrap();
/// assert_eq!(out[(0, 0)], 11.0);
/// ```
pub fn multiply_into<T: Scalar>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    out: &mut Matrix<T>,
) -> Result<(), LinalgError> {
    if left.ncols != right.nrows {
        return Err(LinalgError::DimensionMismatch {
            expected: (left.ncols, right.ncols),
            got: (right.nrows, right.ncols),
        });
    }
    if out.nrows != left.nrows || out.ncols != right.ncols {
        return Err(LinalgError::DimensionMismatch {
            expected: (left.nrows, right.ncols),
            got: (out.nrows, out.ncols),
        });
    }
    multiply_unchecked(left, right, out);
    Ok(())
}

/// i-k-j product over row slices. Shapes are the caller's responsibility.
fn multiply_unchecked<T: Scalar>(left: &Matrix<T>, right: &Matrix<T>, out: &mut Matrix<T>) {
    let n = left.ncols;
    let p = right.ncols;
    for x in out.data.iter_mut() {
        *x = T::zero();
    }
    for i in 0..left.nrows {
        let out_row = &mut out.data[i * p..(i + 1) * p];
        for k in 0..n {
            let a_ik = left.data[i * n + k];
            let b_row = &right.data[k * p..(k + 1) * p];
            for (o, &b) in out_row.iter_mut().zip(b_row) {
                *o = *o + a_ik * b;
            }
        }
    }
}

/// Allocating form of [`multiply_into`].
///
/// ```
/// use densemat::{multiply, Matrix};
/// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.shape(), (2, 2));
/// assert_eq!(c[(0, 0)], 58.0);
/// assert!(multiply(&a, &a).is_err());
/// ```
pub fn multiply<T: Scalar>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let mut out = Matrix::zeros(left.nrows, right.ncols);
    multiply_into(left, right, &mut out)?;
    Ok(out)
}

/// Transpose `input` into the caller-supplied `out`, shaped
/// `input.ncols() x input.nrows()`.
pub fn transpose_into<T: Copy>(input: &Matrix<T>, out: &mut Matrix<T>) -> Result<(), LinalgError> {
    if out.nrows != input.ncols || out.ncols != input.nrows {
        return Err(LinalgError::DimensionMismatch {
            expected: (input.ncols, input.nrows),
            got: (out.nrows, out.ncols),
        });
    }
    let m = input.nrows;
    let n = input.ncols;
    for i in 0..m {
        for j in 0..n {
            out.data[j * m + i] = input.data[i * n + j];
        }
    }
    Ok(())
}

impl<T: Copy> Matrix<T> {
    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let n = self.ncols;
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self.data[j * n + i])
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Panics on a dimension mismatch; use [`multiply`] for a `Result`.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut out = Matrix::zeros(self.nrows, rhs.ncols);
        multiply_unchecked(self, rhs, &mut out);
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, op: &str, f: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows, self.ncols, op, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, "+", |a, b| a + b)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, "-", |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}
