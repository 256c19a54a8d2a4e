pub const DEFAULT_FIELD_WIDTH: usize = 20;
pub const DEFAULT_FIELD_HEIGHT: usize = 20;
pub const MIN_FIELD_SIDE: usize = 5;
pub const MAX_FIELD_SIDE: usize = 100;

pub const DEFAULT_DATABASE_PATH: &str = "snake_leaderboard.db";
pub const DEFAULT_TOP_COUNT: usize = 5;
pub const DEFAULT_CHART_COUNT: usize = 10;
pub const MAX_PLAYER_NAME_LEN: usize = 32;
