use crate::rng::SessionRng;
use crate::{log, log_debug};
use super::food::Food;
use super::grid::Grid;
use super::io::{Frame, InputSource, Renderer, RoundEndReason, RoundSummary, ScoreDisplay, TickOutcome};
use super::obstacles::ObstacleSet;
use super::sampler::{Occupancy, PositionSampler};
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Cell, Direction};

struct SilentDisplay;

impl ScoreDisplay for SilentDisplay {
    fn round_ended(&mut self, _summary: &RoundSummary) {}
}

/// Owns the snake, the food and the obstacles and advances them one tick at
/// a time. Round loss is handled internally by resetting everything in place.
pub struct RoundController {
    grid: Grid,
    sampler: PositionSampler,
    rng: SessionRng,
    snake: Snake,
    food: Food,
    obstacles: ObstacleSet,
    score: u32,
    best_score: u32,
    round: u32,
    last_vacated: Option<Cell>,
}

impl RoundController {
    /// Expects settings that already passed validation.
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Self {
        let grid = settings.grid();
        let start = grid.center();
        let direction = rng.choose_direction();

        let mut controller = Self {
            grid,
            sampler: PositionSampler::new(grid),
            rng,
            snake: Snake::new(start, direction, settings.turn_rules()),
            food: Food::new(start),
            obstacles: ObstacleSet::new(settings.obstacle_count()),
            score: 0,
            best_score: 0,
            round: 1,
            last_vacated: None,
        };
        controller.place_food_and_obstacles();

        log!(
            "New game on {}x{} grid: {} obstacles, seed {}",
            grid.width(),
            grid.height(),
            controller.obstacles.len(),
            controller.rng.seed()
        );
        controller
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.snake.request_direction(direction)
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid: self.grid,
            snake: &self.snake,
            vacated: self.last_vacated,
            food: &self.food,
            obstacles: &self.obstacles,
            score: self.score,
            best_score: self.best_score,
            round: self.round,
        }
    }

    /// Advances the game by one tick without any collaborators attached.
    pub fn tick(&mut self) -> TickOutcome {
        self.step(&mut SilentDisplay)
    }

    /// One full tick: collect input, advance, resolve collisions and food,
    /// then render. Nothing changes when the input asks to quit.
    pub fn run_tick<I, R, D>(&mut self, input: &mut I, renderer: &mut R, display: &mut D) -> TickOutcome
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        D: ScoreDisplay + ?Sized,
    {
        if input.quit_requested() {
            return TickOutcome::Terminated;
        }

        while let Some(direction) = input.next_request() {
            self.snake.request_direction(direction);
        }

        let outcome = self.step(display);
        renderer.render(&self.frame());
        outcome
    }

    fn step<D: ScoreDisplay + ?Sized>(&mut self, display: &mut D) -> TickOutcome {
        let step = self.snake.advance(&self.grid);
        self.last_vacated = step.vacated;

        if let Some(reason) = self.detect_collision() {
            return TickOutcome::RoundEnded(self.end_round(reason, display));
        }

        if !self.food.is_consumed_by(step.head) {
            return TickOutcome::Moved;
        }

        self.snake.grow();
        self.score += 1;
        self.best_score = self.best_score.max(self.score);
        log_debug!(
            "Ate food at ({}, {}), score {}",
            step.head.x,
            step.head.y,
            self.score
        );

        let occupied: [&dyn Occupancy; 2] = [&self.snake, &self.obstacles];
        if !self.food.relocate(&self.sampler, &mut self.rng, &occupied) {
            return TickOutcome::RoundEnded(self.end_round(RoundEndReason::BoardFilled, display));
        }
        log_debug!(
            "Food moved to ({}, {})",
            self.food.position().x,
            self.food.position().y
        );
        TickOutcome::AteFood
    }

    fn detect_collision(&self) -> Option<RoundEndReason> {
        if self.snake.has_self_collision() {
            Some(RoundEndReason::SelfCollision)
        } else if self.obstacles.collides_with(self.snake.head()) {
            Some(RoundEndReason::ObstacleCollision)
        } else {
            None
        }
    }

    /// Reports the score before anything is reset, then starts a new round.
    fn end_round<D: ScoreDisplay + ?Sized>(&mut self, reason: RoundEndReason, display: &mut D) -> RoundSummary {
        let summary = RoundSummary {
            round: self.round,
            final_score: self.score,
            reason,
        };
        log!(
            "Round {} over: snake {} with score {} (best {})",
            summary.round,
            reason.describe(),
            summary.final_score,
            self.best_score
        );
        display.round_ended(&summary);

        let direction = self.rng.choose_direction();
        self.snake.reset(self.grid.center(), direction);
        self.place_food_and_obstacles();
        self.score = 0;
        self.round += 1;
        self.last_vacated = None;
        summary
    }

    /// Snake first, then food against it, then obstacles against both.
    fn place_food_and_obstacles(&mut self) {
        let occupied: [&dyn Occupancy; 2] = [&self.snake, &self.obstacles];
        self.food.relocate(&self.sampler, &mut self.rng, &occupied);

        let occupied: [&dyn Occupancy; 2] = [&self.snake, &self.food];
        self.obstacles.reseed(&self.sampler, &mut self.rng, &occupied);
        log_debug!(
            "Food at ({}, {}), {} obstacles placed",
            self.food.position().x,
            self.food.position().y,
            self.obstacles.len()
        );
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    fn set_food(&mut self, cell: Cell) {
        self.food = Food::new(cell);
    }

    #[cfg(test)]
    fn set_obstacles(&mut self, cells: &[Cell]) {
        self.obstacles.set_cells(cells);
    }
}
