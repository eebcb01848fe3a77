//! Grid simulation: a snake on a wrap-around board, food, static obstacles
//! and the per-tick round logic tying them together.

mod food;
mod grid;
mod io;
mod obstacles;
mod round;
mod sampler;
mod settings;
mod snake;
mod types;

pub use food::Food;
pub use grid::Grid;
pub use io::{Frame, InputSource, Renderer, RoundEndReason, RoundSummary, ScoreDisplay, TickOutcome};
pub use obstacles::ObstacleSet;
pub use round::RoundController;
pub use sampler::{Occupancy, PositionSampler};
pub use settings::{GameSettings, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICKS_PER_SECOND};
pub use snake::{Snake, Step};
pub use types::{Cell, CellKind, Direction, Drawable, RequestPolicy, ReversalRule, TurnRules};
