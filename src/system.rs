//! The syllable addressing facade.

use crate::{
    address,
    config::Config,
    error::{AddressError, InvalidCoordinate, OrderingError, PrefixError},
    estimate::{self, PrefixEstimate},
    grid::Grid,
    number::CellNumber,
    ordering::CellOrdering,
};
use h3o::LatLng;

/// A complete addressing system: a configuration, the base-cell ordering
/// and the grid adapter.
///
/// Construction loads and verifies the immutable state once; every
/// operation afterwards is a pure function of its inputs. A system can be
/// shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct SyllableSystem {
    /// The syllable configuration.
    config: Config,
    /// The Hamiltonian base-cell ordering.
    ordering: CellOrdering,
    /// The grid adapter.
    grid: Grid,
}

impl SyllableSystem {
    /// Initializes a system with the canonical bundled ordering.
    ///
    /// # Errors
    ///
    /// [`OrderingError`] when the ordering fails verification against the
    /// grid (it never does for the bundled record).
    ///
    /// # Example
    ///
    /// ```
    /// use h3syl::{Config, SyllableSystem};
    ///
    /// let config = Config::bundled("ascii-dnqqwn")?;
    /// let system = SyllableSystem::new(config)?;
    ///
    /// let address = system.encode(48.8566, 2.3522)?;
    /// assert_eq!(address.len(), 16);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(config: Config) -> Result<Self, OrderingError> {
        Self::with_ordering(config, CellOrdering::bundled().clone())
    }

    /// Initializes a system with an explicit base-cell ordering.
    ///
    /// Interoperability warning: two systems produce identical addresses
    /// only when they share both the configuration and the ordering.
    ///
    /// # Errors
    ///
    /// [`OrderingError::BrokenPath`] when consecutive cells of the
    /// ordering are not spatial neighbors.
    pub fn with_ordering(
        config: Config,
        ordering: CellOrdering,
    ) -> Result<Self, OrderingError> {
        let grid = Grid::new();
        ordering.verify(grid)?;

        Ok(Self {
            config,
            ordering,
            grid,
        })
    }

    /// Returns the syllable address of a coordinate.
    ///
    /// # Errors
    ///
    /// [`InvalidCoordinate`] when the latitude is outside `[-90, 90]` or
    /// the longitude outside `[-180, 180]`.
    pub fn encode(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<String, InvalidCoordinate> {
        let cell = self.grid.cell(lat, lon)?;
        let path = self.grid.path(cell);
        let number = CellNumber::from_path(&path, &self.ordering);

        Ok(address::encode(number, &self.config))
    }

    /// Returns the coordinate at the center of the addressed cell.
    ///
    /// # Errors
    ///
    /// [`AddressError`] when the address is malformed, out of range, or
    /// names no cell.
    ///
    /// # Example
    ///
    /// ```
    /// use h3syl::{Config, SyllableSystem};
    ///
    /// let config = Config::bundled("ascii-dnqqwn")?;
    /// let system = SyllableSystem::new(config)?;
    ///
    /// let address = system.encode(48.8566, 2.3522)?;
    /// let center = system.decode(&address)?;
    /// assert_eq!(system.encode(center.lat(), center.lng())?, address);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode(&self, address: &str) -> Result<LatLng, AddressError> {
        let number = address::decode(address, &self.config)?;
        let path = number.to_path(&self.ordering);
        let cell = self.grid.cell_from_path(&path)?;

        Ok(self.grid.center(cell))
    }

    /// Returns true if the address decodes to a cell.
    #[must_use]
    pub fn is_valid(&self, address: &str) -> bool {
        self.decode(address).is_ok()
    }

    /// Estimates the region covered by a syllable prefix.
    ///
    /// # Errors
    ///
    /// [`PrefixError`] when the prefix is empty, malformed, or not shorter
    /// than a complete address.
    pub fn estimate(&self, prefix: &str) -> Result<PrefixEstimate, PrefixError> {
        estimate::estimate(prefix, &self.config, &self.ordering, self.grid)
    }

    /// The system's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The system's base-cell ordering.
    #[must_use]
    pub const fn ordering(&self) -> &CellOrdering {
        &self.ordering
    }
}

#[cfg(test)]
#[path = "./system_tests.rs"]
mod tests;
