//! Exclusively owned, fixed-shape jagged 2D buffers of `f64` values.
//!
//! A [`JaggedGrid`] is a rectangular grid backed by a row table whose rows
//! are each their own heap allocation (jagged layout). The grid exclusively
//! owns the table and every row; releasing it frees the rows and then the
//! table. Construction is checked (allocation failure and zero dimensions
//! are errors, not UB), all element access is bounds-checked, and the shape
//! is fixed for the lifetime of the grid — there is no resizing.
//!
//! ```
//! use jag_grid::{render, JaggedGrid};
//!
//! let mut grid = JaggedGrid::new(2, 3)?;
//! grid.row_mut(0)?.copy_from_slice(&[3.0, 5.0, 4.0]);
//! grid.row_mut(1)?.copy_from_slice(&[1.0, 7.0, 6.0]);
//!
//! for row in grid.iter_rows() {
//!     assert_eq!(row.len(), 3);
//! }
//! print!("{}", render::to_table_string(&grid));
//! grid.release();
//! # Ok::<(), jag_grid::GridError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod render;
pub mod rows;

pub use error::GridError;
pub use grid::JaggedGrid;
pub use rows::Rows;
