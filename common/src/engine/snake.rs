use std::collections::{HashMap, VecDeque};

use super::grid::Grid;
use super::sampler::Occupancy;
use super::types::{Cell, CellKind, Direction, Drawable, ReversalRule, RequestPolicy, TurnRules};

/// Result of one movement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub head: Cell,
    /// Tail cell given up by this step, if the snake was not growing.
    pub vacated: Option<Cell>,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    // Segments per cell; fewer keys than segments means the body overlaps.
    occupancy: HashMap<Cell, usize>,
    target_length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    rules: TurnRules,
}

impl Snake {
    pub fn new(start: Cell, direction: Direction, rules: TurnRules) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            occupancy: HashMap::new(),
            target_length: 1,
            direction,
            pending_direction: None,
            rules,
        };
        snake.reset(start, direction);
        snake
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always `false` for a constructed snake; it starts with one segment
    /// and never sheds its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body size the snake is growing towards; exceeds `len()` right after
    /// eating until the next steps have been taken.
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Records a turn to apply on the next [`advance`](Self::advance).
    ///
    /// Returns `false` when the request is dropped: a reversal while
    /// reversals are rejected, or any request after the first one of a tick
    /// under [`RequestPolicy::FirstWins`].
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.rules.reversal == ReversalRule::Reject && direction.is_opposite(&self.direction) {
            return false;
        }

        match self.rules.requests {
            RequestPolicy::LatestWins => {
                self.pending_direction = Some(direction);
                true
            }
            RequestPolicy::FirstWins => {
                if self.pending_direction.is_some() {
                    return false;
                }
                self.pending_direction = Some(direction);
                true
            }
        }
    }

    pub fn advance(&mut self, grid: &Grid) -> Step {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let head = grid.step(self.head(), self.direction);
        self.body.push_front(head);
        *self.occupancy.entry(head).or_insert(0) += 1;

        let vacated = if self.body.len() > self.target_length {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.release(tail);
            Some(tail)
        } else {
            None
        };

        Step { head, vacated }
    }

    fn release(&mut self, cell: Cell) {
        if let Some(count) = self.occupancy.get_mut(&cell) {
            *count -= 1;
            if *count == 0 {
                self.occupancy.remove(&cell);
            }
        }
    }

    pub fn has_self_collision(&self) -> bool {
        self.occupancy.len() < self.body.len()
    }

    /// Takes effect lazily: the next step keeps its tail.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn reset(&mut self, start: Cell, direction: Direction) {
        self.body.clear();
        self.body.push_back(start);
        self.occupancy.clear();
        self.occupancy.insert(start, 1);
        self.target_length = 1;
        self.direction = direction;
        self.pending_direction = None;
    }

    /// Builds a snake with an explicit body, head first.
    #[cfg(test)]
    pub(crate) fn from_body(body: &[Cell], direction: Direction, rules: TurnRules) -> Self {
        let mut snake = Self::new(body[0], direction, rules);
        snake.body = body.iter().copied().collect();
        snake.occupancy.clear();
        for &cell in body {
            *snake.occupancy.entry(cell).or_insert(0) += 1;
        }
        snake.target_length = body.len();
        snake
    }
}

impl Occupancy for Snake {
    fn contains(&self, cell: Cell) -> bool {
        self.occupancy.contains_key(&cell)
    }

    fn occupied_count(&self) -> usize {
        self.occupancy.len()
    }
}

impl Drawable for Snake {
    fn kind(&self) -> CellKind {
        CellKind::Snake
    }

    fn cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }
}
