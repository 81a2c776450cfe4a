use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};
use core::fmt;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Boxed rows with right-aligned columns. A precision (`{:.3}`) is applied
/// to every element.
///
/// ```
/// use densemat::Matrix;
/// let m = Matrix::from_rows(2, 2, &[1.0_f64, -20.5, 300.0, 4.0]).unwrap();
/// assert_eq!(format!("{}", m), "│  1  -20.5│\n│300      4│");
/// assert_eq!(format!("{:.1}", m), "│  1.0  -20.5│\n│300.0    4.0│");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|x| match f.precision() {
                Some(p) => format!("{:.*}", p, x),
                None => format!("{}", x),
            })
            .collect();

        let mut widths = vec![0; self.ncols];
        for (k, cell) in cells.iter().enumerate() {
            let j = k % self.ncols;
            widths[j] = widths[j].max(cell.chars().count());
        }

        for (i, row) in cells.chunks(self.ncols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("│")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{:>w$}", cell, w = widths[j])?;
            }
            f.write_str("│")?;
        }
        Ok(())
    }
}
