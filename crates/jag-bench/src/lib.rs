//! Benchmark profiles and helpers for `jag-grid`.
//!
//! Provides pre-built grids at the sizes the benchmarks sweep:
//!
//! - [`small_grid`]: 16x16 (256 cells)
//! - [`large_grid`]: 512x512 (~262K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use jag_grid::JaggedGrid;

/// Build a 16x16 grid with every cell set to its row-major rank.
pub fn small_grid() -> JaggedGrid {
    ranked_grid(16, 16)
}

/// Build a 512x512 grid with every cell set to its row-major rank.
pub fn large_grid() -> JaggedGrid {
    ranked_grid(512, 512)
}

/// Build a `rows x cols` grid where cell `(r, c)` holds `r * cols + c`.
pub fn ranked_grid(rows: usize, cols: usize) -> JaggedGrid {
    let mut grid = JaggedGrid::new(rows, cols).unwrap();
    for r in 0..rows {
        let row = grid.row_mut(r).unwrap();
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = (r * cols + c) as f64;
        }
    }
    grid
}
