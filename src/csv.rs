//! CSV loading and saving for [`Matrix`].
//!
//! The format is plain: one matrix row per line, comma-separated decimal
//! fields, no header. Every row must have the same number of fields.
//! Whitespace around fields is ignored and blank lines are skipped.
//!
//! ```
//! use densemat::Matrix;
//!
//! let m = Matrix::from_csv_reader("1, 2, 3\n4, 5, 6\n".as_bytes()).unwrap();
//! assert_eq!(m.shape(), (2, 3));
//! assert_eq!(m.get(1, 2).unwrap(), 6.0);
//!
//! assert_eq!(m.to_text("m"), "m\n1,2,3\n4,5,6\n");
//! ```

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::traits::Scalar;
use crate::Matrix;

/// Errors from reading or writing matrix CSV files.
#[derive(Debug)]
pub enum CsvError {
    /// The file could not be opened, read or written.
    Io(io::Error),
    /// The input is not a rectangular grid of numbers. `line` is 1-based
    /// (0 when unknown).
    MalformedInput { line: usize, reason: String },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Io(e) => write!(f, "csv i/o error: {}", e),
            CsvError::MalformedInput { line, reason } => {
                write!(f, "malformed csv at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::Io(e) => Some(e),
            CsvError::MalformedInput { .. } => None,
        }
    }
}

impl From<io::Error> for CsvError {
    fn from(e: io::Error) -> Self {
        CsvError::Io(e)
    }
}

impl From<::csv::Error> for CsvError {
    fn from(e: ::csv::Error) -> Self {
        let line = e.position().map_or(0, |p| p.line() as usize);
        match e.into_kind() {
            ::csv::ErrorKind::Io(e) => CsvError::Io(e),
            ::csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => CsvError::MalformedInput {
                line,
                reason: format!("expected {} fields, found {}", expected_len, len),
            },
            ::csv::ErrorKind::Utf8 { err, .. } => CsvError::MalformedInput {
                line,
                reason: err.to_string(),
            },
            other => CsvError::MalformedInput {
                line,
                reason: format!("{:?}", other),
            },
        }
    }
}

impl Matrix<f64> {
    /// Load a matrix from a CSV file.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, CsvError> {
        let path = path.as_ref();
        let m = Self::from_csv_reader(File::open(path)?)?;
        log::debug!(
            "loaded {}x{} matrix from {}",
            m.nrows(),
            m.ncols(),
            path.display()
        );
        Ok(m)
    }

    /// Parse a matrix from any CSV byte stream.
    pub fn from_csv_reader(reader: impl io::Read) -> Result<Self, CsvError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut data = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            for (j, field) in record.iter().enumerate() {
                let value = field.parse::<f64>().map_err(|e| CsvError::MalformedInput {
                    line,
                    reason: format!("field {} ({:?}): {}", j + 1, field, e),
                })?;
                data.push(value);
            }
            cols = record.len();
            rows += 1;
        }

        if rows == 0 {
            return Err(CsvError::MalformedInput {
                line: 0,
                reason: "no data rows".to_string(),
            });
        }

        // Non-empty records always carry at least one field.
        Self::from_vec(rows, cols, data).map_err(|e| CsvError::MalformedInput {
            line: 0,
            reason: e.to_string(),
        })
    }
}

impl<T: Scalar + fmt::Display> Matrix<T> {
    /// Write the matrix to a CSV file, creating or truncating it.
    ///
    /// Floats are written in their shortest round-trip form, so
    /// [`from_csv`](Matrix::from_csv) reads back the exact values.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), CsvError> {
        self.to_csv_writer(File::create(path)?)
    }

    /// Write the matrix as CSV to any byte sink.
    pub fn to_csv_writer(&self, writer: impl io::Write) -> Result<(), CsvError> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        for row in self.rows() {
            wtr.write_record(row.iter().map(|x| x.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Diagnostic dump: `label` on its own line, then one comma-separated
    /// line per row.
    pub fn to_text(&self, label: &str) -> String {
        let mut out = String::new();
        out.push_str(label);
        out.push('\n');
        for row in self.rows() {
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                // Writing into a String cannot fail
                let _ = write!(out, "{}", x);
            }
            out.push('\n');
        }
        out
    }
}
