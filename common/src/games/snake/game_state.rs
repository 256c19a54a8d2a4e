use std::collections::VecDeque;

use crate::games::SessionRng;
use crate::{debug_log, log};
use super::bot_controller::BotController;
use super::snake::Snake;
use super::types::{Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};

/// Complete state of one single-player session. Owned by the driver and
/// advanced only through [`SnakeGameState::tick`].
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    field_size: FieldSize,
    snake: Snake,
    food: Point,
    direction: Direction,
    score: u32,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
    ticks: u64,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize, rng: &mut SessionRng) -> Self {
        debug_assert!(field_size.cell_count() >= 2, "board needs room for snake and food");

        let snake = Snake::new(field_size.center());
        let food = Self::pick_food(&field_size, &snake, rng).unwrap_or(Point::new(0, 0));

        Self {
            field_size,
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            status: GameStatus::NotStarted,
            end_reason: None,
            ticks: 0,
        }
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn start(&mut self) -> bool {
        self.transition(GameStatus::NotStarted, GameStatus::Running)
    }

    pub fn pause(&mut self) -> bool {
        self.transition(GameStatus::Running, GameStatus::Paused)
    }

    pub fn resume(&mut self) -> bool {
        self.transition(GameStatus::Paused, GameStatus::Running)
    }

    /// Manual end. Accepted while running or paused.
    pub fn end(&mut self) -> bool {
        match self.status {
            GameStatus::Running | GameStatus::Paused => {
                self.finish(GameEndReason::EndedManually);
                true
            }
            GameStatus::NotStarted | GameStatus::Over => false,
        }
    }

    /// Back to a fresh, not yet started game on the same board.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.field_size, rng);
        log!("Game restarted on {}x{} board", self.field_size.width, self.field_size.height);
    }

    /// Advances the snake by one cell. A no-op unless the game is running.
    ///
    /// A move that would collide is rejected: the body and score stay as they
    /// were before the tick and only the status flips to `Over`.
    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.direction = BotController::calculate_move(self);
        let next_head = self.snake.head().step(self.direction);

        // A head already resting on food consumes it on this tick.
        let ate = next_head == self.food || self.snake.head() == self.food;
        let candidate = self.snake.moved_to(next_head, ate);

        if let Some(reason) = self.collision_reason(candidate.body()) {
            log!(
                "Snake {} at ({}, {}). Final score: {}",
                reason.describe(),
                next_head.x,
                next_head.y,
                self.score
            );
            self.finish(reason);
            return TickOutcome::Collided(reason);
        }

        self.snake = candidate;
        self.ticks += 1;

        if !ate {
            debug_log!("Tick {}: head -> ({}, {})", self.ticks, next_head.x, next_head.y);
            return TickOutcome::Moved;
        }

        self.score += 1;
        log!("Ate food at ({}, {}). Score: {}", self.food.x, self.food.y, self.score);

        match Self::pick_food(&self.field_size, &self.snake, rng) {
            Some(food) => {
                self.food = food;
                debug_log!("Food spawned at ({}, {})", food.x, food.y);
                TickOutcome::AteFood
            }
            None => {
                log!("No free cell left for food. Final score: {}", self.score);
                self.finish(GameEndReason::BoardFilled);
                TickOutcome::BoardFilled
            }
        }
    }

    /// True if the head of `body` is off the board or overlaps the rest of it.
    pub fn collides(&self, body: &VecDeque<Point>) -> bool {
        self.collision_reason(body).is_some()
    }

    fn collision_reason(&self, body: &VecDeque<Point>) -> Option<GameEndReason> {
        let head = *body.front()?;

        if !self.field_size.contains(head) {
            return Some(GameEndReason::WallCollision);
        }

        if body.iter().skip(1).any(|segment| *segment == head) {
            return Some(GameEndReason::SelfCollision);
        }

        None
    }

    fn transition(&mut self, from: GameStatus, to: GameStatus) -> bool {
        if self.status != from {
            return false;
        }
        self.status = to;
        debug_log!("Game status {:?} -> {:?}", from, to);
        true
    }

    fn finish(&mut self, reason: GameEndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
    }

    fn pick_food(field_size: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
        let free: Vec<Point> = field_size
            .cells()
            .filter(|cell| !snake.contains(*cell))
            .collect();
        rng.choose(&free)
    }

    #[cfg(test)]
    pub(crate) fn with_layout(
        field_size: FieldSize,
        body: &[Point],
        food: Point,
        status: GameStatus,
    ) -> Self {
        Self {
            field_size,
            snake: Snake::from_cells(body),
            food,
            direction: Direction::Right,
            score: (body.len() - 1) as u32,
            status,
            end_reason: None,
            ticks: 0,
        }
    }
}
