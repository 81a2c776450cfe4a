use crate::traits::FloatScalar;

use super::Matrix;

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squares).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]).unwrap();
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for row in self.rows() {
            let row_sum = row.iter().fold(T::zero(), |acc, &x| acc + x.abs());
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// Largest absolute element.
    pub fn max_abs(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc })
    }

    /// Whether every element is within `tol` of the matching element of `other`.
    ///
    /// Shapes must match, otherwise this is `false`.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}
