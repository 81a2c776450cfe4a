mod linalg;
mod norm;
mod ops;
mod util;

pub use linalg::Svd;
pub use ops::{multiply, multiply_into, transpose_into};

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage of exactly `nrows * ncols` elements. Both
/// dimensions are at least one. The buffer is owned exclusively and released
/// on drop. Implements [`MatrixRef`] and [`MatrixMut`], so the linalg free
/// functions work on it directly.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

#[inline]
fn check_dims(rows: usize, cols: usize) -> Result<(), LinalgError> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::InvalidDimension { rows, cols });
    }
    Ok(())
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// Fails with `InvalidDimension` if either dimension is zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::new(2, 3).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// assert!(Matrix::<f64>::new(2, 0).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        check_dims(rows, cols)?;
        Ok(Self::zeros(rows, cols))
    }

    /// Zero matrix for dimensions already known to be valid.
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            data: vec![T::zero(); rows * cols],
            nrows: rows,
            ncols: cols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// Panics if `n == 0`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        assert!(n > 0, "identity matrix must be at least 1x1");
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(rows: usize, cols: usize, row_major: &[T]) -> Result<Self, LinalgError> {
        Self::from_vec(rows, cols, row_major.to_vec())
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Fails with `DimensionMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(LinalgError::DimensionMismatch {
                expected: (rows, cols),
                got: (1, data.len()),
            });
        }
        Ok(Self {
            data,
            nrows: rows,
            ncols: cols,
        })
    }

    /// Bounds-checked element read.
    ///
    /// ```
    /// use densemat::Matrix;
    /// use densemat::linalg::LinalgError;
    /// let m = Matrix::from_rows(1, 2, &[5.0, 6.0]).unwrap();
    /// assert_eq!(m.get(0, 1), Ok(6.0));
    /// assert!(matches!(m.get(1, 0), Err(LinalgError::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.ncols + col])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), LinalgError> {
        self.check_index(row, col)?;
        self.data[row * self.ncols + col] = value;
        Ok(())
    }

    /// Reshape to `rows x cols`, keeping the overlapping top-left block.
    ///
    /// A new buffer replaces the old one. Cells outside the old extent are
    /// zero. On error the matrix is left unchanged.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.resize(1, 3).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 0.0]);
    /// ```
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), LinalgError> {
        check_dims(rows, cols)?;
        let mut data = vec![T::zero(); rows * cols];
        let keep_rows = rows.min(self.nrows);
        let keep_cols = cols.min(self.ncols);
        for i in 0..keep_rows {
            let src = i * self.ncols;
            let dst = i * cols;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.data = data;
        self.nrows = rows;
        self.ncols = cols;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), LinalgError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(LinalgError::IndexOutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "invalid matrix dimension {}x{}",
            rows,
            cols
        );
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            nrows: rows,
            ncols: cols,
        }
    }

    /// The whole buffer in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a slice.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> core::slice::Chunks<'_, T> {
        self.data.chunks(self.ncols)
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn entry(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize) -> &[T] {
        self.row_slice(row)
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn entry_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_mut_slice(&mut self, row: usize) -> &mut [T] {
        let start = row * self.ncols;
        let end = start + self.ncols;
        &mut self.data[start..end]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &mut self.data[row * self.ncols + col]
    }
}
