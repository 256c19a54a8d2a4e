use std::path::Path;

use ai_snake_common::config::Validate;
use ai_snake_common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

use super::{AdminConfig, AppearanceConfig, ClientConfigManager, ConfigManager, LeaderboardConfig};

pub const DEFAULT_CONFIG_FILE: &str = "ai_snake_config.yaml";

pub fn get_config_manager(path: &Path) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: SnakeSessionSettings,
    pub appearance: AppearanceConfig,
    pub leaderboard: LeaderboardConfig,
    pub admin: AdminConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.leaderboard.validate()?;
        self.admin.validate()?;
        Ok(())
    }
}
