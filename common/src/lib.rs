//! Core of the auto-playing snake: the tick engine with its greedy
//! controller, and the persistent leaderboard.

pub mod config;
pub mod defaults;
pub mod games;
pub mod leaderboard;
pub mod logger;
