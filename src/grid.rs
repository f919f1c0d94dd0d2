//! Boundary over the hexagonal grid.
//!
//! Everything the crate needs from H3 goes through [`Grid`]: coordinate to
//! cell (and back), the hierarchical decomposition of a cell into its base
//! cell and child digits, and same-resolution neighbors. The rest of the
//! crate never touches `h3o` directly, so the grid engine could be swapped
//! behind this boundary.

use crate::error::{
    InvalidBaseCell, InvalidCoordinate, InvalidDigit, PathError,
};
use h3o::{error::InvalidCellIndex, CellIndex, LatLng, Resolution};
use std::fmt;

/// Addressing resolution: every full address names a resolution 15 cell.
pub(crate) const RESOLUTION: Resolution = Resolution::Fifteen;

/// Number of child digits below a base cell.
pub(crate) const DEPTH: usize = 15;

// H3 index bit layout, cell mode (see the H3 index reference).
const CELL_MODE: u64 = 1;
const MODE_OFFSET: u64 = 59;
const RESOLUTION_OFFSET: u64 = 52;
const BASE_CELL_OFFSET: u64 = 45;
const DIGIT_BITSIZE: u64 = 3;
// The 45 digit bits, all set to the unused marker (0b111).
const UNUSED_DIGITS: u64 = 0x1FFF_FFFF_FFFF;

// -----------------------------------------------------------------------------

/// Hierarchical decomposition of a resolution 15 cell.
///
/// A path is the base cell number (`0..=121`) followed by the fifteen child
/// digits (`0..=6`), most significant first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CellPath {
    /// Base cell number.
    base: u8,
    /// Child digits, from resolution 1 down to 15.
    digits: [u8; DEPTH],
}

impl CellPath {
    /// Initializes a new cell path.
    ///
    /// # Errors
    ///
    /// [`PathError`] when the base cell is not in `0..=121` or a digit is
    /// not in `0..=6`.
    pub fn new(base: u8, digits: [u8; DEPTH]) -> Result<Self, PathError> {
        if base > crate::BASE_CELL_COUNT - 1 {
            return Err(InvalidBaseCell::new(base, "out of range").into());
        }
        for &digit in &digits {
            if digit > 6 {
                return Err(InvalidDigit::new(digit, "out of range").into());
            }
        }
        Ok(Self { base, digits })
    }

    /// Initializes a new cell path using values that may be out of range.
    ///
    /// # Safety
    ///
    /// The base cell and digits must be in range.
    pub(crate) const fn new_unchecked(base: u8, digits: [u8; DEPTH]) -> Self {
        debug_assert!(base < crate::BASE_CELL_COUNT, "base cell out of range");
        Self { base, digits }
    }

    /// Base cell number.
    #[must_use]
    pub const fn base(&self) -> u8 {
        self.base
    }

    /// Child digits, from resolution 1 down to 15.
    #[must_use]
    pub const fn digits(&self) -> [u8; DEPTH] {
        self.digits
    }

    /// Length of the digit prefix shared with another path.
    pub(crate) fn common_depth(&self, other: &Self) -> u8 {
        debug_assert_eq!(self.base, other.base);
        let depth = self
            .digits
            .iter()
            .zip(other.digits.iter())
            .take_while(|(lhs, rhs)| lhs == rhs)
            .count();
        u8::try_from(depth).expect("depth fits in 8 bits")
    }
}

impl fmt::Display for CellPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for digit in self.digits {
            write!(f, "-{digit}")?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------

/// Thin adapter over the H3 grid at the addressing resolution.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Grid;

impl Grid {
    /// Initializes a new grid adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the resolution 15 cell containing the coordinate.
    ///
    /// # Errors
    ///
    /// [`InvalidCoordinate`] when the latitude is outside `[-90, 90]` or
    /// the longitude outside `[-180, 180]` (non-finite values included).
    ///
    /// # Example
    ///
    /// ```
    /// use h3syl::Grid;
    ///
    /// let grid = Grid::new();
    /// let cell = grid.cell(48.8566, 2.3522)?;
    /// assert_eq!(cell.resolution(), h3syl::Resolution::Fifteen);
    /// # Ok::<(), h3syl::error::InvalidCoordinate>(())
    /// ```
    pub fn cell(self, lat: f64, lon: f64) -> Result<CellIndex, InvalidCoordinate> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::new(lat, "latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate::new(lon, "longitude out of range"));
        }
        let ll = LatLng::new(lat, lon).expect("finite coordinate");
        Ok(ll.to_cell(RESOLUTION))
    }

    /// Returns the canonical center of a cell.
    #[must_use]
    pub fn center(self, cell: CellIndex) -> LatLng {
        LatLng::from(cell)
    }

    /// Decomposes a resolution 15 cell into its hierarchical path.
    #[must_use]
    pub fn path(self, cell: CellIndex) -> CellPath {
        debug_assert_eq!(cell.resolution(), RESOLUTION, "resolution 15 cell");

        let mut digits = [0; DEPTH];
        for (slot, resolution) in digits
            .iter_mut()
            .zip(Resolution::range(Resolution::One, RESOLUTION))
        {
            *slot = cell
                .direction_at(resolution)
                .map(u8::from)
                .expect("leaf cells have all digits");
        }
        CellPath::new_unchecked(u8::from(cell.base_cell()), digits)
    }

    /// Recomposes a resolution 15 cell from its hierarchical path.
    ///
    /// # Errors
    ///
    /// [`InvalidCellIndex`] when the digit sequence enters a deleted
    /// pentagon subsequence: such paths name no cell.
    pub fn cell_from_path(
        self,
        path: &CellPath,
    ) -> Result<CellIndex, InvalidCellIndex> {
        self.ancestor(path, DEPTH as u8)
    }

    /// Recomposes the ancestor cell at the given depth of a path.
    ///
    /// Depth 0 is the base cell, depth 15 the full leaf.
    pub(crate) fn ancestor(
        self,
        path: &CellPath,
        depth: u8,
    ) -> Result<CellIndex, InvalidCellIndex> {
        debug_assert!(usize::from(depth) <= DEPTH, "depth out of range");

        let mut bits = (CELL_MODE << MODE_OFFSET)
            | (u64::from(depth) << RESOLUTION_OFFSET)
            | (u64::from(path.base) << BASE_CELL_OFFSET)
            | UNUSED_DIGITS;
        for (index, &digit) in
            path.digits.iter().take(usize::from(depth)).enumerate()
        {
            let offset = DIGIT_BITSIZE * (DEPTH as u64 - 1 - index as u64);
            bits &= !(0b111 << offset);
            bits |= u64::from(digit) << offset;
        }
        CellIndex::try_from(bits)
    }

    /// Returns the cells sharing an edge with the given cell.
    ///
    /// Hexagons have six neighbors, pentagons five.
    #[must_use]
    pub fn neighbors(self, cell: CellIndex) -> Vec<CellIndex> {
        cell.grid_disk::<Vec<_>>(1)
            .into_iter()
            .filter(|&neighbor| neighbor != cell)
            .collect()
    }

    /// Returns the resolution 0 cell of a base cell number.
    ///
    /// # Errors
    ///
    /// [`InvalidBaseCell`] when the number is not in `0..=121`.
    pub fn base_cell(self, base: u8) -> Result<CellIndex, InvalidBaseCell> {
        if base > crate::BASE_CELL_COUNT - 1 {
            return Err(InvalidBaseCell::new(base, "out of range"));
        }
        let bits = (CELL_MODE << MODE_OFFSET)
            | (u64::from(base) << BASE_CELL_OFFSET)
            | UNUSED_DIGITS;
        Ok(CellIndex::try_from(bits).expect("base cells are valid cells"))
    }

    /// Returns every resolution 0 cell, in base cell order.
    #[must_use]
    pub fn base_cells(self) -> impl Iterator<Item = CellIndex> {
        CellIndex::base_cells()
    }
}

#[cfg(test)]
#[path = "./grid_tests.rs"]
mod tests;
