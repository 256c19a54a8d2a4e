use std::time::{Duration, Instant};

use ai_snake_common::games::SessionRng;
use ai_snake_common::games::snake::{
    Difficulty, GameStatus, SnakeGameState, SnakeSessionSettings, TickOutcome,
};
use ai_snake_common::{debug_log, log};

/// Drives one local session: owns the game state and decides when the next
/// tick is due. The UI calls [`SnakeRunner::advance`] once per frame.
pub struct SnakeRunner {
    state: SnakeGameState,
    rng: SessionRng,
    difficulty: Difficulty,
    last_tick: Option<Instant>,
}

impl SnakeRunner {
    pub fn new(settings: &SnakeSessionSettings, mut rng: SessionRng) -> Self {
        let state = SnakeGameState::new(settings.field_size(), &mut rng);
        Self {
            state,
            rng,
            difficulty: settings.difficulty,
            last_tick: None,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Applies from the next wait on; a tick already scheduled is not rushed.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log!("Difficulty set to {}", difficulty.label());
            self.difficulty = difficulty;
        }
    }

    pub fn start(&mut self, now: Instant) -> bool {
        if !self.state.start() {
            return false;
        }
        self.last_tick = Some(now);
        log!("Game started ({}, seed {})", self.difficulty.label(), self.rng.seed());
        true
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.state.pause();
        if paused {
            log!("Game paused at score {}", self.state.score());
        }
        paused
    }

    pub fn resume(&mut self, now: Instant) -> bool {
        if !self.state.resume() {
            return false;
        }
        self.last_tick = Some(now);
        log!("Game resumed");
        true
    }

    pub fn end(&mut self) -> bool {
        let ended = self.state.end();
        if ended {
            log!("Game ended manually at score {}", self.state.score());
        }
        ended
    }

    pub fn restart(&mut self) {
        self.state.restart(&mut self.rng);
        self.last_tick = None;
    }

    /// Discards the session and builds a new one from `settings`.
    pub fn reset_session(&mut self, settings: &SnakeSessionSettings) {
        self.state = SnakeGameState::new(settings.field_size(), &mut self.rng);
        self.difficulty = settings.difficulty;
        self.last_tick = None;
        log!("Session reset");
    }

    /// Runs at most one tick, and only once the difficulty delay has passed
    /// since the previous one. Missed intervals are not caught up.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.state.status() != GameStatus::Running {
            return None;
        }

        let last_tick = *self.last_tick.get_or_insert(now);
        if now.saturating_duration_since(last_tick) < self.difficulty.tick_interval() {
            return None;
        }

        self.last_tick = Some(now);
        let outcome = self.state.tick(&mut self.rng);
        debug_log!("Tick outcome: {:?}", outcome);
        Some(outcome)
    }

    /// How long the UI may sleep before the next tick is due.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        if self.state.status() != GameStatus::Running {
            return None;
        }
        let interval = self.difficulty.tick_interval();
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        Some(interval.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> SnakeRunner {
        SnakeRunner::new(&SnakeSessionSettings::default(), SessionRng::new(42))
    }

    #[test]
    fn test_no_tick_before_start() {
        let mut runner = runner();
        let now = Instant::now();
        assert_eq!(runner.advance(now + Duration::from_secs(5)), None);
        assert_eq!(runner.time_until_next_tick(now), None);
    }

    #[test]
    fn test_ticks_only_after_delay() {
        let mut runner = runner();
        let t0 = Instant::now();
        assert!(runner.start(t0));

        assert_eq!(runner.advance(t0 + Duration::from_millis(150)), None);
        assert!(runner.advance(t0 + Duration::from_millis(200)).is_some());
        assert_eq!(runner.state().ticks(), 1);
    }

    #[test]
    fn test_at_most_one_tick_per_call() {
        let mut runner = runner();
        let t0 = Instant::now();
        runner.start(t0);

        let later = t0 + Duration::from_secs(10);
        assert!(runner.advance(later).is_some());
        assert_eq!(runner.state().ticks(), 1);
        assert_eq!(runner.advance(later), None);
    }

    #[test]
    fn test_pause_stops_ticking() {
        let mut runner = runner();
        let t0 = Instant::now();
        runner.start(t0);
        assert!(runner.pause());

        assert_eq!(runner.advance(t0 + Duration::from_secs(1)), None);

        let t1 = t0 + Duration::from_secs(2);
        assert!(runner.resume(t1));
        assert_eq!(runner.advance(t1 + Duration::from_millis(50)), None);
        assert!(runner.advance(t1 + Duration::from_millis(200)).is_some());
    }

    #[test]
    fn test_harder_difficulty_ticks_sooner() {
        let mut runner = runner();
        runner.set_difficulty(Difficulty::Hard);
        let t0 = Instant::now();
        runner.start(t0);

        assert_eq!(runner.time_until_next_tick(t0), Some(Duration::from_millis(100)));
        assert!(runner.advance(t0 + Duration::from_millis(100)).is_some());
    }

    #[test]
    fn test_end_then_restart() {
        let mut runner = runner();
        runner.start(Instant::now());
        assert!(runner.end());
        assert!(runner.state().is_over());

        runner.restart();
        assert_eq!(runner.state().status(), GameStatus::NotStarted);
        assert_eq!(runner.state().score(), 0);
        assert_eq!(runner.state().snake().len(), 1);
    }

    #[test]
    fn test_reset_session_applies_new_settings() {
        let mut runner = runner();
        let settings = SnakeSessionSettings {
            field_width: 10,
            field_height: 12,
            difficulty: Difficulty::Easy,
        };
        runner.reset_session(&settings);
        assert_eq!(runner.state().field_size().width, 10);
        assert_eq!(runner.state().field_size().height, 12);
        assert_eq!(runner.difficulty(), Difficulty::Easy);
    }
}
