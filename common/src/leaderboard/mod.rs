//! Persistent high-score table shared by all game sessions.

mod error;
mod record;
mod store;

pub use error::LeaderboardError;
pub use record::ScoreRecord;
pub use store::LeaderboardStore;
