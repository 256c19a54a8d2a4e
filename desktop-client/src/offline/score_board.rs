use ai_snake_common::leaderboard::{LeaderboardError, LeaderboardStore, ScoreRecord};
use ai_snake_common::log;

use crate::admin::AdminCapability;

/// Cached view of the leaderboard for the sidebar. Storage failures are kept
/// as a message instead of being propagated; gameplay never depends on them.
pub struct ScoreBoard {
    store: LeaderboardStore,
    top_count: usize,
    chart_count: usize,
    top: Vec<ScoreRecord>,
    chart: Vec<ScoreRecord>,
    unavailable: Option<String>,
}

impl ScoreBoard {
    pub fn new(store: LeaderboardStore, top_count: usize, chart_count: usize) -> Self {
        let mut board = Self {
            store,
            top_count,
            chart_count,
            top: Vec::new(),
            chart: Vec::new(),
            unavailable: None,
        };
        board.refresh();
        board
    }

    pub fn top(&self) -> &[ScoreRecord] {
        &self.top
    }

    pub fn chart(&self) -> &[ScoreRecord] {
        &self.chart
    }

    /// Last storage failure, cleared by the next successful read.
    pub fn unavailable(&self) -> Option<&str> {
        self.unavailable.as_deref()
    }

    pub fn refresh(&mut self) {
        let result = self
            .store
            .top_scores(self.top_count)
            .and_then(|top| Ok((top, self.store.all_scores_for_chart(self.chart_count)?)));

        match result {
            Ok((top, chart)) => {
                self.top = top;
                self.chart = chart;
                self.unavailable = None;
            }
            Err(e) => self.mark_unavailable(&e),
        }
    }

    pub fn save_score(&mut self, name: &str, score: u32) -> Result<ScoreRecord, LeaderboardError> {
        let result = self.store.record_score(name, score);
        match &result {
            Ok(_) => self.refresh(),
            Err(e) if e.is_retryable() => self.mark_unavailable(e),
            Err(_) => {}
        }
        result
    }

    pub fn clear_all(&mut self, _capability: &AdminCapability) -> Result<usize, LeaderboardError> {
        let result = self.store.clear_all();
        match &result {
            Ok(_) => self.refresh(),
            Err(e) => self.mark_unavailable(e),
        }
        result
    }

    fn mark_unavailable(&mut self, error: &LeaderboardError) {
        log!("{}", error);
        self.unavailable = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::AdminGate;

    fn create_board(dir: &tempfile::TempDir) -> ScoreBoard {
        let store = LeaderboardStore::new(dir.path().join("scores.db"));
        ScoreBoard::new(store, 5, 10)
    }

    #[test]
    fn test_save_refreshes_cached_lists() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = create_board(&dir);
        assert!(board.top().is_empty());

        board.save_score("Alice", 10).unwrap();
        board.save_score("Bob", 20).unwrap();

        let names: Vec<&str> = board.top().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
        assert_eq!(board.chart().len(), 2);
        assert!(board.unavailable().is_none());
    }

    #[test]
    fn test_top_list_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = create_board(&dir);
        for score in 0..8 {
            board.save_score("p", score).unwrap();
        }
        assert_eq!(board.top().len(), 5);
        assert_eq!(board.chart().len(), 8);
    }

    #[test]
    fn test_empty_name_does_not_mark_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = create_board(&dir);
        assert!(board.save_score("", 3).is_err());
        assert!(board.unavailable().is_none());
    }

    #[test]
    fn test_clear_requires_capability_and_empties() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = create_board(&dir);
        board.save_score("Alice", 10).unwrap();

        let capability = AdminGate::new("secret").unlock("secret").unwrap();
        assert_eq!(board.clear_all(&capability).unwrap(), 1);
        assert!(board.top().is_empty());
    }

    #[test]
    fn test_broken_store_degrades_to_message() {
        let dir = tempfile::tempdir().unwrap();
        let store = LeaderboardStore::new(dir.path().join("no_such_dir").join("scores.db"));
        let mut board = ScoreBoard::new(store, 5, 10);

        assert!(board.unavailable().is_some());
        assert!(board.save_score("Alice", 4).is_err());
        assert!(board.top().is_empty());
    }
}
