//! Two-state cellular automata on finite grids.
//!
//! The current generation lives in one slot of a two-slot
//! [`RotatingBuffer`], the next one is written into the other slot,
//! then the buffer rotates. The grid is either bounded by dead cells
//! ([`FreeBoundary`]) or wraps around like a torus ([`PeriodicBoundary`]).
//!
//! # Example
//!
//! A blinker on a `5 × 5` torus:
//!
//! ```rust
//! use cellauto_lib::{BoundaryKind, Config, ALIVE, DEAD};
//!
//! let config = Config::new(5, 5).set_boundary(BoundaryKind::Periodic);
//! let mut automaton = config.automaton().unwrap();
//!
//! automaton.clear();
//! for x in 1..=3 {
//!     automaton.set_cell(x, 2, ALIVE).unwrap();
//! }
//! automaton.tick();
//!
//! for y in 1..=3 {
//!     assert_eq!(automaton.get_cell(2, y), ALIVE);
//! }
//! assert_eq!(automaton.get_cell(1, 2), DEAD);
//! assert_eq!(automaton.cell_count(), 3);
//! ```

mod automaton;
mod buffer;
mod cells;
mod config;
mod error;
pub mod grid;
mod pattern;
mod poly;
pub mod rules;
mod save;
mod view;

pub use automaton::Automaton;
pub use buffer::RotatingBuffer;
pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{Config, DEFAULT_SEED};
pub use error::Error;
pub use grid::{
    BoundaryKind, FreeBoundary, FreeBoundaryGrid, Grid, PeriodicBoundary, PeriodicBoundaryGrid,
};
pub use poly::PolyAutomaton;
pub use rules::{Life, Rule};
pub use view::View;

#[cfg(feature = "serde")]
pub use save::AutomatonSer;
