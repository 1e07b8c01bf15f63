//! Automaton configuration.

use crate::{
    automaton::Automaton,
    error::Error,
    grid::{check_dimensions, BoundaryKind, FreeBoundary, PeriodicBoundary},
    poly::PolyAutomaton,
    rules::Life,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The seed used when none is given.
pub const DEFAULT_SEED: u64 = 5489;

/// Automaton configuration.
///
/// The automaton will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 64)]
    pub width: i32,

    /// Height.
    #[educe(Default = 32)]
    pub height: i32,

    /// What happens at the edges of the grid.
    pub boundary: BoundaryKind,

    /// The rule string of the cellular automaton.
    #[educe(Default(expression = "String::from(\"B3/S23\")"))]
    pub rule_string: String,

    /// Seed of the random generator that fills the first generation.
    ///
    /// The same seed and the same dimensions always give
    /// the same generations.
    #[educe(Default(expression = "DEFAULT_SEED"))]
    pub seed: u64,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: BoundaryKind) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the seed.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Creates a new automaton from the configuration.
    ///
    /// Returns an error if the dimensions are not positive
    /// or the rule string is invalid.
    pub fn automaton(&self) -> Result<PolyAutomaton, Error> {
        check_dimensions(self.width, self.height)?;
        let rule = self.rule_string.parse::<Life>()?;
        let automaton = match self.boundary {
            BoundaryKind::Free => {
                PolyAutomaton::from(Automaton::<Life, FreeBoundary>::new(self, rule)?)
            }
            BoundaryKind::Periodic => {
                PolyAutomaton::from(Automaton::<Life, PeriodicBoundary>::new(self, rule)?)
            }
        };
        Ok(automaton)
    }
}
