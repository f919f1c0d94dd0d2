//! The cell integer.
//!
//! A resolution 15 cell, seen as its hierarchical path with the base cell
//! remapped through the Hamiltonian ordering, packs into a single integer
//! in a mixed-radix system: the ordered base cell is the most significant
//! digit (radix 122), followed by fifteen child digits (radix 7).

use crate::{
    error::InvalidCellNumber,
    grid::{CellPath, DEPTH},
    ordering::CellOrdering,
    CELL_SPACE, CHILD_SPAN,
};
use std::fmt;

/// A packed cell identifier in `[0, CELL_SPACE)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct CellNumber(u64);

impl CellNumber {
    /// Initializes a new cell number using a value that may be out of range.
    ///
    /// # Safety
    ///
    /// The value must be below `CELL_SPACE`.
    pub(crate) const fn new_unchecked(value: u64) -> Self {
        debug_assert!(value < CELL_SPACE, "cell number out of range");
        Self(value)
    }

    /// Packs a hierarchical path into its cell number.
    ///
    /// The base cell is remapped to its position on the Hamiltonian path
    /// before packing, so that numerically close cell numbers are spatially
    /// close at the coarsest level.
    #[must_use]
    pub fn from_path(path: &CellPath, ordering: &CellOrdering) -> Self {
        let base = u64::from(ordering.position_of(path.base()));
        let children = path
            .digits()
            .iter()
            .fold(0_u64, |acc, &digit| acc * 7 + u64::from(digit));

        Self(base * CHILD_SPAN + children)
    }

    /// Unpacks a cell number into its hierarchical path.
    #[must_use]
    pub fn to_path(self, ordering: &CellOrdering) -> CellPath {
        let position =
            u8::try_from(self.0 / CHILD_SPAN).expect("ordered base cell");
        let mut children = self.0 % CHILD_SPAN;

        let mut digits = [0; DEPTH];
        for slot in digits.iter_mut().rev() {
            *slot = u8::try_from(children % 7).expect("septary digit");
            children /= 7;
        }
        CellPath::new_unchecked(ordering.cell_at(position), digits)
    }
}

impl TryFrom<u64> for CellNumber {
    type Error = InvalidCellNumber;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value >= CELL_SPACE {
            return Err(Self::Error::new(value, "out of range"));
        }
        Ok(Self(value))
    }
}

impl From<CellNumber> for u64 {
    fn from(value: CellNumber) -> Self {
        value.0
    }
}

impl fmt::Display for CellNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "./number_tests.rs"]
mod tests;
