//! # densemat
//!
//! Dense, heap-allocated matrices of runtime size with the handful of kernels
//! needed to go from a CSV file to a least-squares answer: multiply,
//! transpose, resize, Gauss-Jordan inverse, SVD and the Moore-Penrose
//! pseudo-inverse. `no_std` compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from_rows(3, 2, &[
//!     1.0_f64, 1.0,
//!     1.0, 2.0,
//!     1.0, 3.0,
//! ]).unwrap();
//!
//! // Least-squares fit of y = c0 + c1 x through (1, 2), (2, 3), (3, 5)
//! let y = Matrix::from_rows(3, 1, &[2.0, 3.0, 5.0]).unwrap();
//! let c = &a.pinv() * &y;
//! assert!((c[(1, 0)] - 1.5).abs() < 1e-12);
//!
//! let svd = a.svd();
//! assert!(svd.reconstruct().approx_eq(&a, 1e-12));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T>` with `Vec<T>` row-major storage and runtime
//!   dimensions. Checked `get`/`set`/`resize`, arithmetic operators, norms,
//!   and the convenience methods `inverse()`, `determinant()`, `svd()` and
//!   `pinv()`.
//!
//! - [`linalg`]: Free-function kernels over `&mut impl MatrixMut<T>`:
//!   [`linalg::gauss_jordan_in_place`], [`linalg::jacobi_svd_in_place`],
//!   [`linalg::pseudo_inverse`], plus the closed-form [`linalg::svd_2x2`].
//!   Also home of [`LinalgError`].
//!
//! - [`csv`]: `Matrix::from_csv` / `write_csv` / `to_text`. Requires `std`.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by every decomposition
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug!`
//! for singular pivots, sweep counts and file loads, `warn!` when the Jacobi
//! SVD hits its sweep cap. Install any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls, CSV I/O |
//! | `libm`    | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
pub mod csv;
pub mod linalg;
pub mod matrix;
pub mod traits;

#[cfg(feature = "std")]
pub use crate::csv::CsvError;
pub use linalg::{svd_2x2, LinalgError, Svd2x2, SvdOptions};
pub use matrix::{multiply, multiply_into, transpose_into, Matrix, Svd};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
