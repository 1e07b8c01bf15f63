//! Cellular automata rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;

use crate::cells::State;
pub use life::Life;

/// A cellular automaton rule on the Moore neighborhood.
pub trait Rule {
    /// The state of a cell in the next generation, given its current
    /// state and the sum of the states of its eight neighbors.
    fn transition(&self, state: State, neighbors: usize) -> State;
}
