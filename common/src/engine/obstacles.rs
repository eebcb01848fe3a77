use std::collections::HashSet;

use crate::rng::SessionRng;
use super::grid::Grid;
use super::sampler::{Occupancy, PositionSampler};
use super::types::{Cell, CellKind, Drawable};

/// Static blocking cells, re-sampled as a whole at every round start.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    count: usize,
    cells: HashSet<Cell>,
}

impl ObstacleSet {
    /// One obstacle per hundred cells, rounded down.
    pub fn count_for(grid: &Grid) -> usize {
        grid.cell_count() / 100
    }

    pub fn new(count: usize) -> Self {
        Self {
            count,
            cells: HashSet::with_capacity(count),
        }
    }

    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Replaces every obstacle. Each draw also avoids the obstacles placed
    /// before it, so the set ends up internally distinct and disjoint from
    /// `excluding`. Stops early only if the board runs out of free cells.
    pub fn reseed(
        &mut self,
        sampler: &PositionSampler,
        rng: &mut SessionRng,
        excluding: &[&dyn Occupancy],
    ) {
        self.cells.clear();

        for _ in 0..self.count {
            let next = {
                let mut exclusions: Vec<&dyn Occupancy> = Vec::with_capacity(excluding.len() + 1);
                exclusions.extend_from_slice(excluding);
                exclusions.push(&self.cells);
                sampler.try_sample_excluding(rng, &exclusions)
            };

            match next {
                Some(cell) => {
                    self.cells.insert(cell);
                }
                None => break,
            }
        }
    }

    pub fn collides_with(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    #[cfg(test)]
    pub(crate) fn set_cells(&mut self, cells: &[Cell]) {
        self.cells = cells.iter().copied().collect();
        self.count = self.cells.len();
    }
}

impl Occupancy for ObstacleSet {
    fn contains(&self, cell: Cell) -> bool {
        self.collides_with(cell)
    }

    fn occupied_count(&self) -> usize {
        self.cells.len()
    }
}

impl Drawable for ObstacleSet {
    fn kind(&self) -> CellKind {
        CellKind::Obstacle
    }

    fn cells(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::food::Food;

    #[test]
    fn test_count_is_one_percent_rounded_down() {
        assert_eq!(ObstacleSet::count_for(&Grid::new(32, 24)), 7);
        assert_eq!(ObstacleSet::count_for(&Grid::new(10, 10)), 1);
        assert_eq!(ObstacleSet::count_for(&Grid::new(9, 11)), 0);
    }

    #[test]
    fn test_reseed_places_exact_count_disjoint_from_exclusions() {
        let grid = Grid::new(32, 24);
        let sampler = PositionSampler::new(grid);
        let mut rng = SessionRng::new(42);
        let blocked: HashSet<Cell> = (0..32).map(|x| Cell::new(x, 5)).collect();
        let food = Food::new(Cell::new(3, 3));
        let mut obstacles = ObstacleSet::new(ObstacleSet::count_for(&grid));

        for _ in 0..50 {
            let excluded: [&dyn Occupancy; 2] = [&blocked, &food];
            obstacles.reseed(&sampler, &mut rng, &excluded);
            assert_eq!(obstacles.len(), 7);
            assert!(obstacles.iter().all(|cell| !blocked.contains(cell)));
            assert!(!obstacles.collides_with(food.position()));
        }
    }

    #[test]
    fn test_reseed_fills_crowded_board_without_duplicates() {
        let grid = Grid::new(4, 4);
        let sampler = PositionSampler::new(grid);
        let mut rng = SessionRng::new(42);
        let mut obstacles = ObstacleSet::new(15);
        let food = Food::new(Cell::new(0, 0));

        obstacles.reseed(&sampler, &mut rng, &[&food]);
        assert_eq!(obstacles.len(), 15);
        assert!(!obstacles.collides_with(Cell::new(0, 0)));
    }

    #[test]
    fn test_disabled_set_never_collides() {
        let grid = Grid::new(10, 10);
        let sampler = PositionSampler::new(grid);
        let mut rng = SessionRng::new(42);
        let mut obstacles = ObstacleSet::disabled();
        obstacles.reseed(&sampler, &mut rng, &[]);

        assert!(obstacles.is_empty());
        assert!(grid.cells().all(|cell| !obstacles.collides_with(cell)));
    }
}
