//! Tab-separated text rendering of a grid.
//!
//! Built strictly on the read-only row traversal — rendering is a
//! collaborator of the grid, not part of its owned core.

use std::fmt::{self, Write};

use crate::grid::JaggedGrid;

/// Write the grid as tab-separated text, one line per row.
///
/// Each value is formatted with six decimal places and followed by a tab
/// (including the last value in a row); each row is terminated by a
/// newline.
///
/// # Examples
///
/// ```
/// use jag_grid::{render, JaggedGrid};
///
/// let mut grid = JaggedGrid::new(1, 2).unwrap();
/// grid.set(0, 0, 3.0).unwrap();
/// grid.set(0, 1, 5.0).unwrap();
/// assert_eq!(render::to_table_string(&grid), "3.000000\t5.000000\t\n");
/// ```
pub fn write_table<W: Write>(grid: &JaggedGrid, out: &mut W) -> fmt::Result {
    for row in grid.iter_rows() {
        for value in row {
            write!(out, "{value:.6}\t")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the grid to an owned `String`.
pub fn to_table_string(grid: &JaggedGrid) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_table(grid, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_decimal_tab_separated_rows() {
        let mut grid = JaggedGrid::new(2, 3).unwrap();
        grid.row_mut(0).unwrap().copy_from_slice(&[3.0, 5.0, 4.0]);
        grid.row_mut(1).unwrap().copy_from_slice(&[1.0, 7.0, 6.0]);
        assert_eq!(
            to_table_string(&grid),
            "3.000000\t5.000000\t4.000000\t\n1.000000\t7.000000\t6.000000\t\n"
        );
    }

    #[test]
    fn fractional_values_keep_six_places() {
        let mut grid = JaggedGrid::new(1, 2).unwrap();
        grid.set(0, 0, 0.5).unwrap();
        grid.set(0, 1, -2.125).unwrap();
        assert_eq!(to_table_string(&grid), "0.500000\t-2.125000\t\n");
    }

    #[test]
    fn one_line_per_row() {
        let grid = JaggedGrid::new(4, 1).unwrap();
        let text = to_table_string(&grid);
        assert_eq!(text.lines().count(), 4);
        for line in text.lines() {
            assert_eq!(line, "0.000000\t");
        }
    }
}
