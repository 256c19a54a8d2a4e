mod score_board;
mod snake_runner;

pub use score_board::ScoreBoard;
pub use snake_runner::SnakeRunner;
