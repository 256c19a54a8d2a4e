mod admin_config;
mod appearance_config;
mod leaderboard_config;
mod main_config;

pub(crate) use ai_snake_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use admin_config::AdminConfig;
pub use appearance_config::{AppearanceConfig, FoodSkin, SnakeSkin, Theme};
pub use leaderboard_config::LeaderboardConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;
