use super::game_state::SnakeGameState;
use super::types::{Direction, Point};

/// One-step greedy controller: closes the x distance first, then y.
pub struct BotController;

impl BotController {
    pub fn calculate_move(state: &SnakeGameState) -> Direction {
        Self::decide_direction(state.snake().head(), state.food())
    }

    /// Falls back to `Down` when food and head share a cell.
    pub fn decide_direction(head: Point, food: Point) -> Direction {
        if food.x < head.x {
            Direction::Left
        } else if food.x > head.x {
            Direction::Right
        } else if food.y < head.y {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
