use std::collections::HashSet;

use crate::rng::SessionRng;
use super::grid::Grid;
use super::types::Cell;

const SAMPLE_ATTEMPTS: usize = 100;

/// A collection of cells a new placement must avoid.
pub trait Occupancy {
    fn contains(&self, cell: Cell) -> bool;
    fn occupied_count(&self) -> usize;
}

impl Occupancy for HashSet<Cell> {
    fn contains(&self, cell: Cell) -> bool {
        HashSet::contains(self, &cell)
    }

    fn occupied_count(&self) -> usize {
        self.len()
    }
}

/// Draws uniformly random cells that are absent from every excluded set.
///
/// The sampler holds no state besides the board shape; randomness comes from
/// the caller so results are reproducible per seed.
#[derive(Clone, Copy, Debug)]
pub struct PositionSampler {
    grid: Grid,
}

impl PositionSampler {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    fn is_free(cell: Cell, excluded: &[&dyn Occupancy]) -> bool {
        !excluded.iter().any(|set| set.contains(cell))
    }

    fn random_cell(&self, rng: &mut SessionRng) -> Cell {
        Cell::new(
            rng.random_range(0..self.grid.width()),
            rng.random_range(0..self.grid.height()),
        )
    }

    /// Rejection sampling over the whole board.
    ///
    /// Does not terminate if the excluded sets cover every cell: callers must
    /// keep the excluded count well below the board size.
    pub fn sample_excluding(&self, rng: &mut SessionRng, excluded: &[&dyn Occupancy]) -> Cell {
        loop {
            let cell = self.random_cell(rng);
            if Self::is_free(cell, excluded) {
                return cell;
            }
        }
    }

    /// Like [`sample_excluding`](Self::sample_excluding) but total: after a
    /// bounded number of random draws it picks uniformly among the remaining
    /// free cells, returning `None` only when the board is full.
    pub fn try_sample_excluding(
        &self,
        rng: &mut SessionRng,
        excluded: &[&dyn Occupancy],
    ) -> Option<Cell> {
        for _ in 0..SAMPLE_ATTEMPTS {
            let cell = self.random_cell(rng);
            if Self::is_free(cell, excluded) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = self
            .grid
            .cells()
            .filter(|&cell| Self::is_free(cell, excluded))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.random_range(0..free.len())])
    }
}
