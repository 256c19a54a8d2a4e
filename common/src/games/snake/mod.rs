mod bot_controller;
mod game_state;
mod settings;
mod snake;
mod types;

pub use bot_controller::BotController;
pub use game_state::SnakeGameState;
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{Difficulty, Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};
