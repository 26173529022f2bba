//! Construct a 2x3 grid, populate it, print it, release it.

use jag_grid::{render, GridError, JaggedGrid};

fn main() -> Result<(), GridError> {
    let mut grid = JaggedGrid::new(2, 3)?;

    grid.set(0, 0, 3.0)?;
    grid.set(0, 1, 5.0)?;
    grid.set(0, 2, 4.0)?;
    grid.set(1, 0, 1.0)?;
    grid.set(1, 1, 7.0)?;
    grid.set(1, 2, 6.0)?;

    print!("{}", render::to_table_string(&grid));

    grid.release();
    Ok(())
}
