use crate::rng::SessionRng;
use super::sampler::{Occupancy, PositionSampler};
use super::types::{Cell, CellKind, Drawable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a free cell. Returns `false`, leaving the position
    /// untouched, when every cell is occupied.
    pub fn relocate(
        &mut self,
        sampler: &PositionSampler,
        rng: &mut SessionRng,
        occupied: &[&dyn Occupancy],
    ) -> bool {
        match sampler.try_sample_excluding(rng, occupied) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_consumed_by(&self, head: Cell) -> bool {
        self.position == head
    }
}

impl Occupancy for Food {
    fn contains(&self, cell: Cell) -> bool {
        self.position == cell
    }

    fn occupied_count(&self) -> usize {
        1
    }
}

impl Drawable for Food {
    fn kind(&self) -> CellKind {
        CellKind::Food
    }

    fn cells(&self) -> Vec<Cell> {
        vec![self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::Grid;
    use crate::engine::snake::Snake;
    use crate::engine::types::{Direction, TurnRules};

    #[test]
    fn test_relocate_avoids_snake() {
        let grid = Grid::new(4, 4);
        let sampler = PositionSampler::new(grid);
        let mut rng = SessionRng::new(42);
        let body: Vec<Cell> = grid.cells().take(15).collect();
        let snake = Snake::from_body(&body, Direction::Right, TurnRules::default());
        let mut food = Food::new(Cell::new(0, 0));

        assert!(food.relocate(&sampler, &mut rng, &[&snake]));
        assert_eq!(food.position(), Cell::new(3, 3));
    }

    #[test]
    fn test_relocate_on_full_board_keeps_position() {
        let grid = Grid::new(2, 2);
        let sampler = PositionSampler::new(grid);
        let mut rng = SessionRng::new(42);
        let body: Vec<Cell> = grid.cells().collect();
        let snake = Snake::from_body(&body, Direction::Right, TurnRules::default());
        let mut food = Food::new(Cell::new(1, 1));

        assert!(!food.relocate(&sampler, &mut rng, &[&snake]));
        assert_eq!(food.position(), Cell::new(1, 1));
    }

    #[test]
    fn test_is_consumed_only_at_its_cell() {
        let food = Food::new(Cell::new(5, 4));
        assert!(food.is_consumed_by(Cell::new(5, 4)));
        assert!(!food.is_consumed_by(Cell::new(4, 5)));
    }
}
