use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, MAX_FIELD_SIDE, MIN_FIELD_SIDE};
use super::types::{Difficulty, FieldSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub difficulty: Difficulty,
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            difficulty: Difficulty::default(),
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        let range = MIN_FIELD_SIDE..=MAX_FIELD_SIDE;
        if !range.contains(&self.field_width) {
            return Err(format!(
                "Field width must be between {} and {}",
                MIN_FIELD_SIDE, MAX_FIELD_SIDE
            ));
        }
        if !range.contains(&self.field_height) {
            return Err(format!(
                "Field height must be between {} and {}",
                MIN_FIELD_SIDE, MAX_FIELD_SIDE
            ));
        }
        Ok(())
    }
}
