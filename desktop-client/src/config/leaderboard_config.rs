use std::path::PathBuf;

use ai_snake_common::config::Validate;
use ai_snake_common::defaults::{DEFAULT_CHART_COUNT, DEFAULT_DATABASE_PATH, DEFAULT_TOP_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardConfig {
    pub database_path: PathBuf,
    pub top_count: usize,
    pub chart_count: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            top_count: DEFAULT_TOP_COUNT,
            chart_count: DEFAULT_CHART_COUNT,
        }
    }
}

impl Validate for LeaderboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.database_path.as_os_str().is_empty() {
            return Err("leaderboard database_path must not be empty".to_string());
        }
        if self.top_count == 0 || self.top_count > 100 {
            return Err("leaderboard top_count must be between 1 and 100".to_string());
        }
        if self.chart_count == 0 || self.chart_count > 100 {
            return Err("leaderboard chart_count must be between 1 and 100".to_string());
        }
        Ok(())
    }
}
