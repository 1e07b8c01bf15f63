//! Boundary policies.
//!
//! A boundary policy decides how a coordinate is mapped to a position in the
//! backing storage of a [`Grid`](super::Grid).

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How coordinates outside of the grid are treated.
///
/// Some details of this trait is hidden in the doc.
/// Please use the following structs instead of implementing by yourself:
/// - [`FreeBoundary`]
/// - [`PeriodicBoundary`]
pub trait Boundary {
    /// The runtime tag of the policy.
    const KIND: BoundaryKind;

    /// Maps `(x, y)` to an index into a row-major storage of
    /// `width * height` cells.
    ///
    /// Returns `None` if the coordinates do not denote any cell.
    ///
    /// `width` and `height` are always positive. The coordinates are
    /// wider than the dimensions so that a neighbor of any `i32` position
    /// can be mapped without overflow.
    #[doc(hidden)]
    fn index(x: i64, y: i64, width: i32, height: i32) -> Option<usize>;
}

/// Positions outside of the grid read as the default value
/// and ignore writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FreeBoundary;

impl Boundary for FreeBoundary {
    const KIND: BoundaryKind = BoundaryKind::Free;

    #[inline]
    fn index(x: i64, y: i64, width: i32, height: i32) -> Option<usize> {
        if x < 0 || x >= i64::from(width) || y < 0 || y >= i64::from(height) {
            None
        } else {
            Some(y as usize * width as usize + x as usize)
        }
    }
}

/// Positions outside of the grid wrap around, so that opposite edges
/// are adjacent (a torus).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PeriodicBoundary;

impl Boundary for PeriodicBoundary {
    const KIND: BoundaryKind = BoundaryKind::Periodic;

    #[inline]
    fn index(x: i64, y: i64, width: i32, height: i32) -> Option<usize> {
        let x = x.rem_euclid(i64::from(width));
        let y = y.rem_euclid(i64::from(height));
        Some(y as usize * width as usize + x as usize)
    }
}

/// Runtime tag of a boundary policy, used in the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryKind {
    /// [`FreeBoundary`].
    Free,
    /// [`PeriodicBoundary`].
    #[default]
    Periodic,
}

impl FromStr for BoundaryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" | "Free" | "f" => Ok(BoundaryKind::Free),
            "periodic" | "Periodic" | "torus" | "p" => Ok(BoundaryKind::Periodic),
            _ => Err(String::from("invalid boundary")),
        }
    }
}

impl Display for BoundaryKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            BoundaryKind::Free => "free",
            BoundaryKind::Periodic => "periodic",
        };
        write!(f, "{}", s)
    }
}
