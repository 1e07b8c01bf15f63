//! A polymorphic automaton.

use crate::{
    automaton::Automaton,
    cells::State,
    config::Config,
    error::Error,
    grid::{BoundaryKind, FreeBoundary, PeriodicBoundary},
    rules::Life,
    view::View,
};
use from_variants::FromVariants;

#[cfg(feature = "serde")]
use crate::save::AutomatonSer;

/// A polymorphic [`Automaton`], one variant per boundary policy.
///
/// The boundary policy can thus be chosen at runtime,
/// while the update loop of each variant stays monomorphic.
#[non_exhaustive]
#[derive(FromVariants)]
pub enum PolyAutomaton {
    /// An [`Automaton`] with [`Life`] rule and [`FreeBoundary`].
    Free(Automaton<Life, FreeBoundary>),
    /// An [`Automaton`] with [`Life`] rule and [`PeriodicBoundary`].
    Periodic(Automaton<Life, PeriodicBoundary>),
}

macro_rules! dispatch {
    ($self: expr, $automaton: ident => $action: expr) => {
        match $self {
            PolyAutomaton::Free($automaton) => $action,
            PolyAutomaton::Periodic($automaton) => $action,
        }
    };
}

impl PolyAutomaton {
    /// Advances one generation.
    #[inline]
    pub fn tick(&mut self) {
        dispatch!(self, automaton => automaton.tick())
    }

    /// Advances `n` generations.
    #[inline]
    pub fn step(&mut self, n: u64) {
        dispatch!(self, automaton => automaton.step(n))
    }

    /// A read-only view of the current generation.
    #[inline]
    pub fn view(&self) -> View<'_> {
        dispatch!(self, automaton => automaton.view())
    }

    /// Reallocates both generations to the new dimensions.
    ///
    /// All cells become dead and the generation count is reset.
    #[inline]
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        dispatch!(self, automaton => automaton.resize(width, height))
    }

    /// Reseeds the random generator and refills the current generation
    /// from it.
    #[inline]
    pub fn seed(&mut self, seed: u64) {
        dispatch!(self, automaton => automaton.seed(seed))
    }

    /// Refills the current generation from the random generator.
    #[inline]
    pub fn randomize(&mut self) {
        dispatch!(self, automaton => automaton.randomize())
    }

    /// Kills every cell of the current generation.
    #[inline]
    pub fn clear(&mut self) {
        dispatch!(self, automaton => automaton.clear())
    }

    /// Gets the state of a cell in the current generation.
    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> State {
        dispatch!(self, automaton => automaton.get_cell(x, y))
    }

    /// Sets the state of a cell in the current generation.
    #[inline]
    pub fn set_cell(&mut self, x: i32, y: i32, state: State) -> Result<(), Error> {
        dispatch!(self, automaton => automaton.set_cell(x, y, state))
    }

    /// Number of ticks since the last seeding, resize or restore.
    #[inline]
    pub fn generation(&self) -> u64 {
        dispatch!(self, automaton => automaton.generation())
    }

    /// Number of living cells in the current generation.
    #[inline]
    pub fn cell_count(&self) -> usize {
        dispatch!(self, automaton => automaton.cell_count())
    }

    /// Automaton configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        dispatch!(self, automaton => automaton.config())
    }

    /// The rule.
    #[inline]
    pub fn rule(&self) -> &Life {
        dispatch!(self, automaton => automaton.rule())
    }

    /// The boundary policy.
    #[inline]
    pub fn boundary(&self) -> BoundaryKind {
        match self {
            PolyAutomaton::Free(_) => BoundaryKind::Free,
            PolyAutomaton::Periodic(_) => BoundaryKind::Periodic,
        }
    }

    /// Displays the current generation.
    ///
    /// See [`Automaton::display`].
    #[inline]
    pub fn display(&self) -> String {
        dispatch!(self, automaton => automaton.display())
    }

    /// Saves the current generation as an [`AutomatonSer`],
    /// which can be easily serialized.
    #[cfg(feature = "serde")]
    #[inline]
    pub fn ser(&self) -> AutomatonSer {
        dispatch!(self, automaton => automaton.ser())
    }

    /// Sets the cells of an RLE pattern alive, with the top-left corner
    /// of the pattern at `(x, y)`.
    ///
    /// See [`Automaton::load_rle`].
    #[cfg(feature = "read-rle")]
    #[inline]
    pub fn load_rle(&mut self, input: &str, x: i32, y: i32) -> Result<(), Error> {
        dispatch!(self, automaton => automaton.load_rle(input, x, y))
    }

    /// Sets the cells of an RLE pattern alive, centered in the grid.
    ///
    /// See [`Automaton::load_rle_centered`].
    #[cfg(feature = "read-rle")]
    #[inline]
    pub fn load_rle_centered(&mut self, input: &str) -> Result<(), Error> {
        dispatch!(self, automaton => automaton.load_rle_centered(input))
    }
}
