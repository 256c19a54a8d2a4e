use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Invalid score record: {0}")]
    Validation(String),

    #[error("Leaderboard unavailable at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

impl LeaderboardError {
    /// Storage failures may clear up on the next attempt; bad input will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LeaderboardError::StoreUnavailable { .. })
    }
}
