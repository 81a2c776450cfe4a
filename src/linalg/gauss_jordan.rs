use crate::linalg::LinalgError;
use crate::traits::{size_as, FloatScalar, MatrixMut, MatrixRef};

/// Invert a square matrix by augmented Gauss-Jordan elimination with partial
/// pivoting, in place.
///
/// `a` is destroyed (reduced to the identity on success). `inv` receives the
/// inverse; its prior contents are ignored. Returns the determinant of the
/// original `a`, accumulated from the pivots.
///
/// A pivot whose magnitude is at or below `n · ε · ‖a‖∞` marks the matrix as
/// singular and the call returns `Err(Singular)`. `inv` then holds a partial
/// reduction and must not be used as an inverse.
///
/// Panics if `a` is not square or `inv` has a different shape.
pub fn gauss_jordan_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    inv: &mut impl MatrixMut<T>,
) -> Result<T, LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "Gauss-Jordan inversion requires a square matrix");
    assert_eq!(
        (inv.nrows(), inv.ncols()),
        (n, n),
        "inverse buffer must match the input shape"
    );

    for i in 0..n {
        for j in 0..n {
            *inv.entry_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    let tol = size_as::<T>(n) * T::epsilon() * row_sum_norm(a);
    let mut det = T::one();

    for col in 0..n {
        // Partial pivoting: largest magnitude in this column among remaining rows
        let mut max_row = col;
        let mut max_val = a.entry(col, col).abs();
        for row in (col + 1)..n {
            let val = a.entry(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val <= tol {
            log::debug!(
                "gauss-jordan: pivot {:?} in column {} is below tolerance {:?}",
                max_val,
                col,
                tol
            );
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            a.swap_rows(col, max_row);
            inv.swap_rows(col, max_row);
            det = T::zero() - det;
        }

        let pivot = *a.entry(col, col);
        det = det * pivot;

        // Normalize the pivot row. Entries left of `col` in `a` are already zero.
        let inv_pivot = T::one() / pivot;
        for j in col..n {
            *a.entry_mut(col, j) = *a.entry(col, j) * inv_pivot;
        }
        for j in 0..n {
            *inv.entry_mut(col, j) = *inv.entry(col, j) * inv_pivot;
        }

        // Eliminate this column from every other row, above and below.
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = *a.entry(row, col);
            if factor == T::zero() {
                continue;
            }
            for j in col..n {
                *a.entry_mut(row, j) = *a.entry(row, j) - factor * *a.entry(col, j);
            }
            for j in 0..n {
                *inv.entry_mut(row, j) = *inv.entry(row, j) - factor * *inv.entry(col, j);
            }
        }
    }

    Ok(det)
}

fn row_sum_norm<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let mut max = T::zero();
    for i in 0..a.nrows() {
        let sum = a
            .row_as_slice(i)
            .iter()
            .fold(T::zero(), |acc, &x| acc + x.abs());
        if sum > max {
            max = sum;
        }
    }
    max
}
