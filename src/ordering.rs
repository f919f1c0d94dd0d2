//! Hamiltonian ordering of the base cells.
//!
//! Cell numbers put the base cell in the most significant digit, so the
//! numeric distance between addresses of nearby places is dominated by the
//! base cell indices. Reordering the 122 base cells along a Hamiltonian
//! path of their adjacency graph makes every consecutive pair of indices a
//! pair of spatial neighbors (100% adjacency).
//!
//! The search runs at generation time only. Runtime code loads the
//! canonical persisted record: every implementation must use the same
//! stored permutation, since each address depends on it.

use crate::{error::OrderingError, grid::Grid, BASE_CELL_COUNT};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::OnceLock,
    time::{Duration, Instant},
};

const COUNT: usize = BASE_CELL_COUNT as usize;

/// The canonical ordering record shipped with the crate.
const BUNDLED: &str = include_str!("../configs/hamiltonian-ordering.json");

// -----------------------------------------------------------------------------

/// A Hamiltonian permutation of the 122 base cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellOrdering {
    /// Base cell at each path position.
    order: [u8; COUNT],
    /// Path position of each base cell.
    position: [u8; COUNT],
}

impl CellOrdering {
    /// Returns the canonical ordering shipped with the crate.
    ///
    /// The record is parsed once per process and shared afterwards.
    #[must_use]
    pub fn bundled() -> &'static Self {
        static ORDERING: OnceLock<CellOrdering> = OnceLock::new();
        ORDERING.get_or_init(|| {
            Self::from_json(BUNDLED).expect("bundled ordering record")
        })
    }

    /// Rebuilds an ordering from a persisted record.
    ///
    /// # Errors
    ///
    /// [`OrderingError::Record`] when the record does not describe a
    /// permutation of the 122 base cells with a consistent position map
    /// and a perfect adjacency rate.
    pub fn from_record(record: &OrderingRecord) -> Result<Self, OrderingError> {
        if record.cell_order.len() != COUNT {
            return Err(record_error(format!(
                "expected {COUNT} cells, got {}",
                record.cell_order.len()
            )));
        }

        let mut order = [0; COUNT];
        let mut position = [u8::MAX; COUNT];
        for (index, &cell) in record.cell_order.iter().enumerate() {
            if cell >= BASE_CELL_COUNT {
                return Err(record_error(format!(
                    "base cell {cell} out of range"
                )));
            }
            if position[usize::from(cell)] != u8::MAX {
                return Err(record_error(format!(
                    "base cell {cell} appears twice"
                )));
            }
            order[index] = cell;
            position[usize::from(cell)] =
                u8::try_from(index).expect("position fits in 8 bits");
        }

        if record.position_map.len() != COUNT {
            return Err(record_error(format!(
                "expected {COUNT} position entries, got {}",
                record.position_map.len()
            )));
        }
        for (key, &value) in &record.position_map {
            let cell = key.parse::<u8>().map_err(|_| {
                record_error(format!("invalid position key {key:?}"))
            })?;
            if cell >= BASE_CELL_COUNT
                || position[usize::from(cell)] != value
            {
                return Err(record_error(format!(
                    "position map disagrees with cell order at cell {cell}"
                )));
            }
        }

        if (record.adjacency_rate - 100.0).abs() > f64::EPSILON {
            return Err(record_error(format!(
                "adjacency rate {} is not 100",
                record.adjacency_rate
            )));
        }

        Ok(Self { order, position })
    }

    /// Parses and validates an ordering from its JSON record.
    ///
    /// # Errors
    ///
    /// [`OrderingError::Syntax`] on malformed JSON, otherwise the errors of
    /// [`CellOrdering::from_record`].
    pub fn from_json(json: &str) -> Result<Self, OrderingError> {
        let record = serde_json::from_str::<OrderingRecord>(json)?;
        Self::from_record(&record)
    }

    /// Converts the ordering back into its persistable record.
    #[must_use]
    pub fn to_record(&self) -> OrderingRecord {
        OrderingRecord {
            cell_order: self.order.to_vec(),
            position_map: self
                .order
                .iter()
                .enumerate()
                .map(|(index, &cell)| {
                    (
                        cell.to_string(),
                        u8::try_from(index).expect("position fits in 8 bits"),
                    )
                })
                .collect(),
            adjacency_rate: 100.0,
        }
    }

    /// Searches a Hamiltonian path through the base-cell adjacency graph.
    ///
    /// Backtracking depth-first search: starting nodes are tried in
    /// ascending order of degree, and at every step the unvisited neighbors
    /// are tried most-constrained first (fewest remaining unvisited
    /// neighbors, ties by cell number). The search is deterministic; the
    /// first path found is verified and returned.
    ///
    /// This runs at generation time only — prefer [`CellOrdering::bundled`]
    /// everywhere else.
    ///
    /// # Errors
    ///
    /// [`OrderingError::Deadline`] when the wall-clock budget is exhausted
    /// before a path is found.
    pub fn search(grid: Grid, budget: Duration) -> Result<Self, OrderingError> {
        let adjacency = adjacency_graph(grid);
        let deadline = Instant::now() + budget;

        let mut starts: [u8; COUNT] = std::array::from_fn(|cell| {
            u8::try_from(cell).expect("base cell number")
        });
        starts.sort_unstable_by_key(|&cell| {
            (adjacency[usize::from(cell)].len(), cell)
        });

        let search = Search {
            adjacency,
            deadline,
        };
        for start in starts {
            let mut path = Vec::with_capacity(COUNT);
            let mut visited = [false; COUNT];
            path.push(start);
            visited[usize::from(start)] = true;

            match search.extend(&mut path, &mut visited) {
                Some(true) => {
                    let ordering = Self::from_path(&path);
                    ordering.verify(grid)?;
                    return Ok(ordering);
                }
                Some(false) => {}
                None => {
                    return Err(OrderingError::Deadline {
                        seconds: budget.as_secs(),
                    })
                }
            }
        }

        // Every start exhausted without success (cannot happen on the real
        // base-cell graph, but the search does not assume that).
        Err(OrderingError::Deadline {
            seconds: budget.as_secs(),
        })
    }

    /// Checks the Hamiltonian property through the grid adapter.
    ///
    /// # Errors
    ///
    /// [`OrderingError::BrokenPath`] at the first consecutive pair of cells
    /// that are not spatial neighbors.
    pub fn verify(&self, grid: Grid) -> Result<(), OrderingError> {
        for (index, pair) in self.order.windows(2).enumerate() {
            let cell = grid
                .base_cell(pair[0])
                .expect("ordering contains valid base cells");
            let next = grid
                .base_cell(pair[1])
                .expect("ordering contains valid base cells");

            if !grid.neighbors(cell).contains(&next) {
                return Err(OrderingError::BrokenPath { position: index });
            }
        }
        Ok(())
    }

    /// Path position of a base cell (the permutation π).
    #[must_use]
    pub fn position_of(&self, base: u8) -> u8 {
        self.position[usize::from(base)]
    }

    /// Base cell at a path position (the inverse permutation π⁻¹).
    #[must_use]
    pub fn cell_at(&self, position: u8) -> u8 {
        self.order[usize::from(position)]
    }

    /// Base cells in path order.
    #[must_use]
    pub fn cell_order(&self) -> &[u8] {
        &self.order
    }

    /// Builds the ordering from a complete path.
    fn from_path(path: &[u8]) -> Self {
        debug_assert_eq!(path.len(), COUNT, "complete path");

        let mut order = [0; COUNT];
        let mut position = [0; COUNT];
        for (index, &cell) in path.iter().enumerate() {
            order[index] = cell;
            position[usize::from(cell)] =
                u8::try_from(index).expect("position fits in 8 bits");
        }
        Self { order, position }
    }
}

// -----------------------------------------------------------------------------

/// Persisted form of a [`CellOrdering`], with stable JSON keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderingRecord {
    /// Base cells along the Hamiltonian path.
    pub cell_order: Vec<u8>,
    /// Path position of each base cell, keyed by its decimal number.
    pub position_map: BTreeMap<String, u8>,
    /// Share of consecutive pairs that are spatial neighbors, in percent.
    pub adjacency_rate: f64,
}

// -----------------------------------------------------------------------------

/// Neighbor lists of the 122 base cells, by base cell number.
fn adjacency_graph(grid: Grid) -> [Vec<u8>; COUNT] {
    std::array::from_fn(|base| {
        let cell = grid
            .base_cell(u8::try_from(base).expect("base cell number"))
            .expect("base cell number in range");
        let mut neighbors = grid
            .neighbors(cell)
            .into_iter()
            .map(|neighbor| u8::from(neighbor.base_cell()))
            .collect::<Vec<_>>();
        neighbors.sort_unstable();
        neighbors
    })
}

/// Backtracking state of the Hamiltonian search.
struct Search {
    adjacency: [Vec<u8>; COUNT],
    deadline: Instant,
}

impl Search {
    /// Extends the path by one cell, backtracking on dead ends.
    ///
    /// Returns `Some(true)` when the path is complete, `Some(false)` when
    /// this branch is exhausted and `None` on deadline expiry.
    fn extend(
        &self,
        path: &mut Vec<u8>,
        visited: &mut [bool; COUNT],
    ) -> Option<bool> {
        if path.len() == COUNT {
            return Some(true);
        }
        if Instant::now() > self.deadline {
            return None;
        }

        let current = *path.last().expect("non-empty path");
        let mut candidates = self.adjacency[usize::from(current)]
            .iter()
            .copied()
            .filter(|&cell| !visited[usize::from(cell)])
            .collect::<Vec<_>>();
        candidates.sort_unstable_by_key(|&cell| {
            (self.remaining_degree(cell, visited), cell)
        });

        for next in candidates {
            visited[usize::from(next)] = true;
            path.push(next);
            match self.extend(path, visited) {
                Some(true) => return Some(true),
                Some(false) => {
                    path.pop();
                    visited[usize::from(next)] = false;
                }
                None => return None,
            }
        }
        Some(false)
    }

    /// Number of unvisited neighbors of a cell.
    fn remaining_degree(&self, cell: u8, visited: &[bool; COUNT]) -> usize {
        self.adjacency[usize::from(cell)]
            .iter()
            .filter(|&&neighbor| !visited[usize::from(neighbor)])
            .count()
    }
}

fn record_error(reason: String) -> OrderingError {
    OrderingError::Record { reason }
}

#[cfg(test)]
#[path = "./ordering_tests.rs"]
mod tests;
