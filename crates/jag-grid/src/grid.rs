//! The owned jagged grid and its checked accessors.

use crate::error::GridError;
use crate::rows::Rows;

/// An exclusively owned, fixed-shape 2D buffer of `f64` values.
///
/// The layout is jagged: a contiguous row table holds one handle per row,
/// and each row is its own heap allocation of exactly `cols` elements.
/// Rows are never shared between grids and never resized after construction.
///
/// All element access goes through checked accessors — there is no
/// unchecked or offset-based path. Releasing the grid (explicitly via
/// [`JaggedGrid::release`] or implicitly via drop) frees every row and
/// then the row table; use-after-release and double-release cannot be
/// expressed because both consume the value.
///
/// # Examples
///
/// ```
/// use jag_grid::JaggedGrid;
///
/// let mut grid = JaggedGrid::new(2, 3).unwrap();
/// grid.set(0, 1, 5.0).unwrap();
/// assert_eq!(grid.get(0, 1).unwrap(), 5.0);
/// assert_eq!(grid.get(1, 2).unwrap(), 0.0);
/// grid.release();
/// ```
#[derive(Debug)]
pub struct JaggedGrid {
    /// Row table: one independently allocated row per entry.
    table: Vec<Box<[f64]>>,
    cols: usize,
}

impl JaggedGrid {
    /// Create a new grid with `rows * cols` zero-initialised cells.
    ///
    /// The row table and every row are reserved through the checked
    /// allocator path: on allocation failure the partially built grid is
    /// released and `Err(GridError::AllocationFailed)` is returned.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use jag_grid::JaggedGrid;
    ///
    /// let grid = JaggedGrid::new(4, 8).unwrap();
    /// assert_eq!(grid.rows(), 4);
    /// assert_eq!(grid.cols(), 8);
    /// assert_eq!(grid.cell_count(), 32);
    ///
    /// assert!(JaggedGrid::new(0, 8).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut table: Vec<Box<[f64]>> = Vec::new();
        table
            .try_reserve_exact(rows)
            .map_err(|_| GridError::AllocationFailed {
                requested: rows.saturating_mul(std::mem::size_of::<Box<[f64]>>()),
            })?;
        for _ in 0..rows {
            let mut row: Vec<f64> = Vec::new();
            // On failure, dropping `table` releases the rows built so far.
            row.try_reserve_exact(cols)
                .map_err(|_| GridError::AllocationFailed {
                    // Saturating: an overflowing request is what failed.
                    requested: cols.saturating_mul(std::mem::size_of::<f64>()),
                })?;
            row.resize(cols, 0.0);
            table.push(row.into_boxed_slice());
        }

        Ok(Self { table, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.table.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.table.len() * self.cols
    }

    /// Check that `(row, col)` is in bounds.
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.table.len() || col >= self.cols {
            return Err(GridError::IndexOutOfBounds {
                row,
                col,
                rows: self.table.len(),
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Read the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.table[row][col])
    }

    /// Replace the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.table[row][col] = value;
        Ok(())
    }

    /// Check that `row` is a valid row index.
    fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row >= self.table.len() {
            return Err(GridError::RowOutOfBounds {
                row,
                rows: self.table.len(),
            });
        }
        Ok(())
    }

    /// Borrow a whole row as a slice.
    pub fn row(&self, row: usize) -> Result<&[f64], GridError> {
        self.check_row(row)?;
        Ok(&self.table[row])
    }

    /// Borrow a whole row mutably.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [f64], GridError> {
        self.check_row(row)?;
        Ok(&mut self.table[row])
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: f64) {
        for row in &mut self.table {
            row.fill(value);
        }
    }

    /// Iterate over the rows in row-major order.
    ///
    /// Yields each row as a `&[f64]` slice; iterate the slice for the
    /// per-row element sequence. This is the read-only traversal that
    /// renderers and other collaborators are built on.
    pub fn iter_rows(&self) -> Rows<'_> {
        Rows::new(&self.table)
    }

    /// Release the grid, freeing every row and then the row table.
    ///
    /// This is ordinary drop made explicit: early-exit paths that let a
    /// grid fall out of scope release it the same way.
    pub fn release(self) {}
}
