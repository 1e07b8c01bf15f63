//! Two-dimensional grids with a boundary policy.
//!
//! A [`Grid`] stores `width * height` cells in row-major order:
//! the cell at `(x, y)` lives at index `y * width + x`.
//!
//! What happens outside of `[0, width) × [0, height)` is decided by
//! the boundary policy `B`:
//!
//! - [`FreeBoundary`]: reads give the default value of the grid,
//!   writes are ignored. There is no "out of grid" error.
//! - [`PeriodicBoundary`]: coordinates wrap around, so every pair of
//!   integers denotes a cell.

mod boundary;

pub use boundary::{Boundary, BoundaryKind, FreeBoundary, PeriodicBoundary};

use crate::{cells::Coord, error::Error};
use educe::Educe;
use log::debug;
use std::{
    fmt::Debug,
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice,
};

/// Offsets of the Von Neumann neighborhood, in the order returned by
/// [`Grid::neumann`]: north, west, center, east, south.
pub const NEUMANN: [Coord; 5] = [(0, -1), (-1, 0), (0, 0), (1, 0), (0, 1)];

/// Position of the cell itself in the Von Neumann neighborhood.
pub const NEUMANN_CENTER: usize = 2;

/// Offsets of the Moore neighborhood, in the order returned by
/// [`Grid::moore`]: the `3 × 3` block in row-major order,
/// so that `(dx, dy)` sits at `(dy + 1) * 3 + (dx + 1)`.
pub const MOORE: [Coord; 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Position of the cell itself in the Moore neighborhood.
pub const MOORE_CENTER: usize = 4;

/// A grid with free boundary.
pub type FreeBoundaryGrid<T> = Grid<T, FreeBoundary>;

/// A grid with periodic boundary.
pub type PeriodicBoundaryGrid<T> = Grid<T, PeriodicBoundary>;

/// A two-dimensional grid over cells of type `T`,
/// with boundary policy `B`.
///
/// Neighborhood queries hand out references borrowed from the grid,
/// so they cannot outlive a [`resize`](Grid::resize).
#[derive(Educe)]
#[educe(
    Clone(bound = "T: Clone"),
    Debug(bound = "T: Debug"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq")
)]
pub struct Grid<T, B: Boundary> {
    /// Width. Always positive.
    width: i32,

    /// Height. Always positive.
    height: i32,

    /// Cells in row-major order.
    ///
    /// Its length is always `width * height`.
    cells: Vec<T>,

    /// The value that fills the grid on creation and resize,
    /// and that is read outside of a free boundary.
    default: T,

    #[educe(Debug(ignore))]
    boundary: PhantomData<B>,
}

/// Rejects non-positive dimensions, returns the number of cells.
pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<usize, Error> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(width as usize * height as usize)
}

impl<T: Clone, B: Boundary> Grid<T, B> {
    /// Creates a new grid filled with `default`.
    ///
    /// Returns an error if `width` or `height` is not positive.
    pub fn new(width: i32, height: i32, default: T) -> Result<Self, Error> {
        let len = check_dimensions(width, height)?;
        Ok(Grid {
            width,
            height,
            cells: vec![default.clone(); len],
            default,
            boundary: PhantomData,
        })
    }

    /// Reallocates the grid to the new dimensions and refills it with
    /// the default value.
    ///
    /// Prior contents are always discarded, even if the dimensions
    /// do not change.
    ///
    /// Returns an error if `width` or `height` is not positive,
    /// in which case the grid is left untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        let len = check_dimensions(width, height)?;
        debug!(
            "resizing grid from {}x{} to {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(len, self.default.clone());
        Ok(())
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for cell in &mut self.cells {
            *cell = value.clone();
        }
    }

    /// Sets every cell to the default value.
    pub fn clear(&mut self) {
        let default = self.default.clone();
        self.fill(default);
    }
}

impl<T, B: Boundary> Grid<T, B> {
    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`. A grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The default value.
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Whether `(x, y)` is inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    /// Index of `(x, y)` in [`cells`](Grid::cells) under the boundary
    /// policy, or `None` if it denotes no cell.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        B::index(x.into(), y.into(), self.width, self.height)
    }

    /// The cell at `(x + dx, y + dy)`, without overflow at the extremes
    /// of `i32`.
    #[inline]
    fn offset(&self, x: i32, y: i32, (dx, dy): Coord) -> &T {
        let x = i64::from(x) + i64::from(dx);
        let y = i64::from(y) + i64::from(dy);
        match B::index(x, y, self.width, self.height) {
            Some(index) => &self.cells[index],
            None => &self.default,
        }
    }

    /// Coordinates of the cell at `index` in [`cells`](Grid::cells).
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let width = self.width as usize;
        ((index % width) as i32, (index / width) as i32)
    }

    /// Gets the cell at `(x, y)`.
    ///
    /// Never fails: with a free boundary, positions outside of the grid
    /// give the default value.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &T {
        match self.index_of(x, y) {
            Some(index) => &self.cells[index],
            None => &self.default,
        }
    }

    /// Gets a mutable reference to the cell at `(x, y)`.
    ///
    /// Returns `None` for positions outside of a free boundary.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let index = self.index_of(x, y)?;
        Some(&mut self.cells[index])
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// Returns `false` and does nothing for positions outside of
    /// a free boundary.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// The Von Neumann neighborhood of `(x, y)`, including the cell itself.
    ///
    /// The order is given by [`NEUMANN`]: north, west, center, east, south.
    /// The center is at [`NEUMANN_CENTER`].
    #[inline]
    pub fn neumann(&self, x: i32, y: i32) -> [&T; 5] {
        NEUMANN.map(move |delta| self.offset(x, y, delta))
    }

    /// The Moore neighborhood of `(x, y)`, including the cell itself.
    ///
    /// The order is given by [`MOORE`]: row-major over the `3 × 3` block.
    /// The center is at [`MOORE_CENTER`].
    #[inline]
    pub fn moore(&self, x: i32, y: i32) -> [&T; 9] {
        MOORE.map(move |delta| self.offset(x, y, delta))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// All cells in row-major order, mutable.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterates over all cells in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates mutably over all cells in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }
}

impl<T, B: Boundary> Index<usize> for Grid<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl<T, B: Boundary> IndexMut<usize> for Grid<T, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

/// Same as [`Grid::get`].
impl<T, B: Boundary> Index<Coord> for Grid<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): Coord) -> &Self::Output {
        self.get(x, y)
    }
}

impl<'a, T, B: Boundary> IntoIterator for &'a Grid<T, B> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, B: Boundary> IntoIterator for &'a mut Grid<T, B> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
