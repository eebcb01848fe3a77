use super::food::Food;
use super::grid::Grid;
use super::obstacles::ObstacleSet;
use super::snake::Snake;
use super::types::{Cell, Direction, Drawable};

/// Supplies turn requests and the quit signal, already mapped from raw events.
pub trait InputSource {
    /// Checked before each tick; a quit request stops the game before any
    /// state changes.
    fn quit_requested(&self) -> bool;

    /// Drained once per tick, oldest request first.
    fn next_request(&mut self) -> Option<Direction>;
}

/// Receives the fully settled state after every tick.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Presents the final score of a finished round.
pub trait ScoreDisplay {
    fn round_ended(&mut self, summary: &RoundSummary);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEndReason {
    SelfCollision,
    ObstacleCollision,
    /// Food could not be placed because the snake covers every free cell.
    BoardFilled,
}

impl RoundEndReason {
    pub fn describe(&self) -> &'static str {
        match self {
            RoundEndReason::SelfCollision => "ran into itself",
            RoundEndReason::ObstacleCollision => "hit an obstacle",
            RoundEndReason::BoardFilled => "filled the board",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub final_score: u32,
    pub reason: RoundEndReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteFood,
    RoundEnded(RoundSummary),
    Terminated,
}

/// Read-only view of the game handed to the renderer.
pub struct Frame<'a> {
    pub grid: Grid,
    pub snake: &'a Snake,
    pub vacated: Option<Cell>,
    pub food: &'a Food,
    pub obstacles: &'a ObstacleSet,
    pub score: u32,
    pub best_score: u32,
    pub round: u32,
}

impl Frame<'_> {
    /// Paint order: obstacles, then food, then the snake on top.
    pub fn drawables(&self) -> [&dyn Drawable; 3] {
        [self.obstacles, self.food, self.snake]
    }
}
