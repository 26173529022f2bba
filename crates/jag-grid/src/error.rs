//! Error types for grid construction and element access.

use std::fmt;

/// Errors arising from grid construction or indexed access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// The allocator could not satisfy a request during construction.
    ///
    /// No partial grid is returned: any rows allocated before the failure
    /// are released before this error propagates.
    AllocationFailed {
        /// Number of bytes that could not be allocated.
        requested: usize,
    },
    /// A row index is outside the bounds of the grid.
    ///
    /// Reported by whole-row access, where no column index is involved.
    RowOutOfBounds {
        /// The offending row index.
        row: usize,
        /// Number of rows in the grid.
        rows: usize,
    },
    /// An index is outside the bounds of the grid.
    ///
    /// The grid is left unmodified and remains valid for further use.
    IndexOutOfBounds {
        /// The offending row index.
        row: usize,
        /// The offending column index.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
            Self::RowOutOfBounds { row, rows } => {
                write!(f, "row {row} out of bounds: [0, {rows})")
            }
            Self::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
