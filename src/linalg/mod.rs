pub(crate) mod gauss_jordan;
pub(crate) mod pinv;
pub(crate) mod svd;

pub use gauss_jordan::gauss_jordan_in_place;
pub use pinv::pseudo_inverse;
pub use svd::{jacobi_svd_in_place, svd_2x2, Svd2x2, SvdOptions};

/// Errors from matrix construction, access and linear algebra operations.
///
/// ```
/// use densemat::Matrix;
/// use densemat::linalg::LinalgError;
///
/// assert_eq!(
///     Matrix::<f64>::new(0, 3).unwrap_err(),
///     LinalgError::InvalidDimension { rows: 0, cols: 3 },
/// );
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]).unwrap();
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// A matrix was requested with a zero row or column count.
    InvalidDimension { rows: usize, cols: usize },
    /// Element access outside `[0, nrows) × [0, ncols)`.
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible. Both fields are `(rows, cols)`.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Matrix is singular or nearly singular.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::InvalidDimension { rows, cols } => {
                write!(f, "invalid matrix dimension {}x{}", rows, cols)
            }
            LinalgError::IndexOutOfRange {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, nrows, ncols
            ),
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
