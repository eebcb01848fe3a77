mod app;
mod board;
mod score_board;

pub use app::SnakeApp;
pub use board::BoardView;
pub use score_board::ScoreBoard;
