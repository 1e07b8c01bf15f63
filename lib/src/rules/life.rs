//! Totalistic Life-like rules.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
    rules::Rule,
};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// A dead cell with `n` living neighbors is born if `n` is in the
/// birth set, a living cell with `n` living neighbors survives if `n`
/// is in the survival set. All other cells are dead in the next
/// generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `birth[n]`: whether a dead cell with `n` living neighbors is born.
    birth: [bool; 9],
    /// `survival[n]`: whether a living cell with `n` living neighbors
    /// survives.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Numbers larger than 8 are ignored.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in b.iter().filter(|&&n| n <= 8) {
            birth[n as usize] = true;
        }
        for &n in s.iter().filter(|&&n| n <= 8) {
            survival[n as usize] = true;
        }
        Life { birth, survival }
    }

    /// Conway's Game of Life, `B3/S23`.
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// Whether the rule contains `B0`.
    ///
    /// Under such a rule, the dead area outside of a free boundary
    /// does not evolve like the inside of the grid.
    pub fn has_b0(&self) -> bool {
        self.birth[0]
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule for Life {
    #[inline]
    fn transition(&self, state: State, neighbors: usize) -> State {
        let table = if state == ALIVE {
            &self.survival
        } else {
            &self.birth
        };
        match table.get(neighbors) {
            Some(true) => ALIVE,
            _ => DEAD,
        }
    }
}

impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        Ok(rule)
    }
}

/// Displays the rule in the `B3/S23` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
