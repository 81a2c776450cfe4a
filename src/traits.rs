use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that needs `sqrt`, `abs`, `atan2` or a machine
/// epsilon: inversion, the SVD engine, the pseudo-inverse and norms.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Convert a size into a float for size-scaled tolerances (`n · ε`).
#[inline]
pub(crate) fn size_as<T: FloatScalar>(n: usize) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::infinity)
}

/// Read-only access to a dense matrix buffer.
///
/// The linalg kernels are free functions over this trait so they can run on
/// scratch buffers as well as on [`Matrix`](crate::Matrix).
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    /// Element at `(row, col)`. Panics when out of bounds.
    fn entry(&self, row: usize, col: usize) -> &T;

    /// Row `row` as a contiguous slice.
    fn row_as_slice(&self, row: usize) -> &[T];
}

/// Mutable access to a dense matrix buffer.
///
/// Extends `MatrixRef` with mutable element access, enabling the in-place
/// kernels (Gauss-Jordan, Jacobi rotations) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn entry_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Row `row` as a contiguous mutable slice.
    fn row_as_mut_slice(&mut self, row: usize) -> &mut [T];

    /// Swap two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a != b {
            for j in 0..self.ncols() {
                let tmp = *self.entry(a, j);
                *self.entry_mut(a, j) = *self.entry(b, j);
                *self.entry_mut(b, j) = tmp;
            }
        }
    }

    /// Swap two columns in place.
    fn swap_cols(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a != b {
            for i in 0..self.nrows() {
                let tmp = *self.entry(i, a);
                *self.entry_mut(i, a) = *self.entry(i, b);
                *self.entry_mut(i, b) = tmp;
            }
        }
    }
}
