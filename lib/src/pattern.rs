#![cfg(feature = "read-rle")]
//! Loads patterns in RLE format.

use crate::{
    automaton::Automaton,
    cells::ALIVE,
    error::Error,
    grid::Boundary,
    rules::Rule,
};
use ca_formats::rle::Rle;
use log::debug;

/// Positions of the living cells of an RLE pattern.
fn living_cells(input: &str) -> Result<Vec<(i64, i64)>, Error> {
    let rle = Rle::new(input).map_err(|e| Error::RleError(e.to_string()))?;
    let mut cells = Vec::new();
    for data in rle {
        let data = data.map_err(|e| Error::RleError(e.to_string()))?;
        if data.state != 0 {
            cells.push(data.position);
        }
    }
    Ok(cells)
}

impl<R: Rule, B: Boundary> Automaton<R, B> {
    /// Sets the cells of an [RLE](https://conwaylife.com/wiki/Rle) pattern
    /// in the current generation, with the top-left corner of the pattern
    /// at `(x, y)`.
    ///
    /// Cells with a non-zero state become alive, the others are left as
    /// they are. Returns an error if the pattern cannot be parsed, or if
    /// a living cell falls outside of a free boundary.
    pub fn load_rle(&mut self, input: &str, x: i32, y: i32) -> Result<(), Error> {
        let cells = living_cells(input)?;
        self.place(&cells, x.into(), y.into())?;
        debug!("loaded {} living cells at ({}, {})", cells.len(), x, y);
        Ok(())
    }

    /// Same as [`load_rle`](Automaton::load_rle), but places the bounding
    /// box of the living cells at the center of the grid.
    pub fn load_rle_centered(&mut self, input: &str) -> Result<(), Error> {
        let cells = living_cells(input)?;
        if cells.is_empty() {
            return Ok(());
        }
        let (min_x, max_x, min_y, max_y) = cells.iter().fold(
            (i64::MAX, i64::MIN, i64::MAX, i64::MIN),
            |(min_x, max_x, min_y, max_y), &(x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );
        let x = (i64::from(self.config.width) - (max_x - min_x + 1)) / 2 - min_x;
        let y = (i64::from(self.config.height) - (max_y - min_y + 1)) / 2 - min_y;
        self.place(&cells, x, y)?;
        debug!("loaded {} living cells at the center", cells.len());
        Ok(())
    }

    /// Sets the cells at `(x + dx, y + dy)` alive for each `(dx, dy)`.
    ///
    /// Every position is checked before any cell is written, so on error
    /// the grid is left untouched.
    fn place(&mut self, cells: &[(i64, i64)], x: i64, y: i64) -> Result<(), Error> {
        let grid = self.buffer.get_mut::<0>();
        let mut indices = Vec::with_capacity(cells.len());
        for &(dx, dy) in cells {
            let coord = (offset(x, dx)?, offset(y, dy)?);
            let index = grid
                .index_of(coord.0, coord.1)
                .ok_or(Error::SetCellError(coord))?;
            indices.push(index);
        }
        for index in indices {
            grid[index] = ALIVE;
        }
        Ok(())
    }
}

/// `base + delta`, or an error if it does not fit in a coordinate.
fn offset(base: i64, delta: i64) -> Result<i32, Error> {
    base.checked_add(delta)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| Error::RleError(format!("cell offset {} out of range", delta)))
}
