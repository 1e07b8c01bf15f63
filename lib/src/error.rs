//! All kinds of errors in this crate.

use crate::cells::{Coord, State};
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width and height should be positive, got {width} x {height}.
    InvalidDimension { width: i32, height: i32 },
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
    /// Cell at {0:?} has invalid state: {1:?}.
    InvalidState(Coord, State),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Saved state has {found} cells, expected {expected}.
    SnapshotSizeError { expected: usize, found: usize },
    #[cfg(feature = "read-rle")]
    /// Invalid RLE pattern: {0}.
    RleError(String),
}
