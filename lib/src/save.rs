#![cfg(feature = "serde")]
//! Saves the automaton.

use crate::{
    automaton::Automaton,
    cells::State,
    config::Config,
    error::Error,
    grid::{check_dimensions, Boundary},
    poly::PolyAutomaton,
    rules::Rule,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// A representation of the automaton which can be easily serialized.
///
/// Only the current generation is kept. The random generator is
/// not saved: restoring reseeds it from [`config.seed`](Config::seed).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonSer {
    /// Automaton configuration.
    pub config: Config,

    /// Number of ticks since the last seeding, resize or restore.
    pub generation: u64,

    /// States of the current generation in row-major order.
    pub cells: Vec<State>,
}

impl AutomatonSer {
    /// Restores the automaton from the `AutomatonSer`.
    ///
    /// Returns an error if the configuration is invalid, if the number
    /// of saved cells does not match the dimensions, or if a saved state
    /// is neither dead nor alive.
    pub fn automaton(&self) -> Result<PolyAutomaton, Error> {
        let expected = check_dimensions(self.config.width, self.config.height)?;
        if self.cells.len() != expected {
            return Err(Error::SnapshotSizeError {
                expected,
                found: self.cells.len(),
            });
        }
        if let Some(index) = self.cells.iter().position(|state| !state.is_binary()) {
            let width = self.config.width as usize;
            let coord = ((index % width) as i32, (index / width) as i32);
            return Err(Error::InvalidState(coord, self.cells[index]));
        }
        let mut automaton = self.config.automaton()?;
        match &mut automaton {
            PolyAutomaton::Free(automaton) => self.restore(automaton),
            PolyAutomaton::Periodic(automaton) => self.restore(automaton),
        }
        debug!(
            "restored a {}x{} automaton at generation {}",
            self.config.width, self.config.height, self.generation
        );
        Ok(automaton)
    }

    /// Copies the saved cells into the current generation.
    fn restore<R: Rule, B: Boundary>(&self, automaton: &mut Automaton<R, B>) {
        automaton
            .buffer
            .get_mut::<0>()
            .cells_mut()
            .copy_from_slice(&self.cells);
        automaton.generation = self.generation;
    }
}

impl<R: Rule, B: Boundary> Automaton<R, B> {
    /// Saves the automaton as an [`AutomatonSer`].
    pub fn ser(&self) -> AutomatonSer {
        AutomatonSer {
            config: self.config.clone(),
            generation: self.generation,
            cells: self.current().cells().to_vec(),
        }
    }
}
