//! Read-only snapshots of a generation, for rendering.

use crate::{
    cells::{State, ALIVE, DEAD},
    grid::{Boundary, Grid},
};
use std::fmt::{self, Display, Formatter};

/// A read-only view of one generation: dimensions plus a flat,
/// row-major sequence of states.
///
/// It holds no reference to the boundary policy or the buffer,
/// so a renderer can be written and tested against plain values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View<'a> {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
    /// States in row-major order, `width * height` of them.
    pub cells: &'a [State],
}

impl<'a> View<'a> {
    /// A view of the whole grid.
    pub fn new<B: Boundary>(grid: &'a Grid<State, B>) -> Self {
        View {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells(),
        }
    }

    /// The state at `(x, y)`, dead outside of the view.
    pub fn get(&self, x: i32, y: i32) -> State {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return DEAD;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(DEAD)
    }

    /// Rows of the view, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [State]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of living cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Writes one pixel per cell into `pixels`, row-major:
    /// `alive` for living cells, `dead` for all others.
    ///
    /// Stops at the shorter of the two sequences.
    pub fn write_pixels(&self, pixels: &mut [u32], alive: u32, dead: u32) {
        for (pixel, state) in pixels.iter_mut().zip(self.cells) {
            *pixel = if state.is_alive() { alive } else { dead };
        }
    }

    /// One pixel per cell, row-major: `alive` for living cells,
    /// `dead` for all others.
    pub fn to_pixels(&self, alive: u32, dead: u32) -> Vec<u32> {
        let mut pixels = vec![dead; self.cells.len()];
        self.write_pixels(&mut pixels, alive, dead);
        pixels
    }

    /// Copies the states out of the view.
    pub fn to_vec(&self) -> Vec<State> {
        self.cells.to_vec()
    }
}

/// Displays the view in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format, without header: `.` for dead cells, `o` for living cells.
impl Display for View<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.rows() {
            for &state in row {
                let c = match state {
                    ALIVE => 'o',
                    _ => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
