use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, params};

use crate::defaults::MAX_PLAYER_NAME_LEN;
use crate::log;
use super::{LeaderboardError, ScoreRecord};

const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// SQLite-backed leaderboard.
///
/// Every call opens its own connection and drops it before returning, so
/// several processes can share the same file without holding a lock between
/// calls.
#[derive(Clone, Debug)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the table if it does not exist yet. Safe to call repeatedly.
    pub fn init(&self) -> Result<(), LeaderboardError> {
        self.connect().map(|_| ())
    }

    /// Appends a score. The name is trimmed and must not be empty.
    pub fn record_score(&self, name: &str, score: u32) -> Result<ScoreRecord, LeaderboardError> {
        let name = Self::validate_name(name)?;
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO leaderboard (name, score) VALUES (?1, ?2)",
            params![name, score],
        )
        .map_err(|e| self.unavailable(e))?;

        let record = ScoreRecord {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            score,
        };
        log!("Saved score {} for {}", record.score, record.name);
        Ok(record)
    }

    /// Highest scores first; equal scores keep insertion order.
    pub fn top_scores(&self, n: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, score FROM leaderboard
                 ORDER BY score DESC, id ASC
                 LIMIT ?1",
            )
            .map_err(|e| self.unavailable(e))?;

        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(ScoreRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    score: row.get(2)?,
                })
            })
            .map_err(|e| self.unavailable(e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.unavailable(e))
    }

    /// Same ordering as [`top_scores`](Self::top_scores), sized for the score chart.
    pub fn all_scores_for_chart(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        self.top_scores(limit)
    }

    pub fn count(&self) -> Result<usize, LeaderboardError> {
        let conn = self.connect()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM leaderboard", [], |row| row.get(0))
            .map_err(|e| self.unavailable(e))?;
        Ok(count as usize)
    }

    /// Deletes every record. Irreversible.
    pub fn clear_all(&self) -> Result<usize, LeaderboardError> {
        let conn = self.connect()?;
        let deleted = conn
            .execute("DELETE FROM leaderboard", [])
            .map_err(|e| self.unavailable(e))?;
        log!("Leaderboard cleared ({} records removed)", deleted);
        Ok(deleted)
    }

    fn connect(&self) -> Result<Connection, LeaderboardError> {
        let conn = Connection::open(&self.path).map_err(|e| self.unavailable(e))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| self.unavailable(e))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS leaderboard (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                score INTEGER NOT NULL
            )",
            [],
        )
        .map_err(|e| self.unavailable(e))?;
        Ok(conn)
    }

    fn validate_name(name: &str) -> Result<&str, LeaderboardError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LeaderboardError::Validation(
                "player name must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(LeaderboardError::Validation(format!(
                "player name must be at most {} characters",
                MAX_PLAYER_NAME_LEN
            )));
        }
        Ok(trimmed)
    }

    fn unavailable(&self, source: rusqlite::Error) -> LeaderboardError {
        LeaderboardError::StoreUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_store() -> (TempDir, LeaderboardStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LeaderboardStore::new(dir.path().join("leaderboard.db"));
        store.init().unwrap();
        (dir, store)
    }

    fn pairs(records: &[ScoreRecord]) -> Vec<(&str, u32)> {
        records.iter().map(|r| (r.name.as_str(), r.score)).collect()
    }

    #[test]
    fn test_top_scores_sorted_descending() {
        let (_dir, store) = create_store();
        store.record_score("Alice", 10).unwrap();
        store.record_score("Bob", 20).unwrap();

        let top = store.top_scores(5).unwrap();
        assert_eq!(pairs(&top), vec![("Bob", 20), ("Alice", 10)]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let (_dir, store) = create_store();
        store.record_score("A", 15).unwrap();
        store.record_score("B", 15).unwrap();

        let top = store.top_scores(5).unwrap();
        assert_eq!(pairs(&top), vec![("A", 15), ("B", 15)]);
    }

    #[test]
    fn test_top_scores_respects_limit() {
        let (_dir, store) = create_store();
        for (i, name) in ["p1", "p2", "p3", "p4", "p5", "p6", "p7"].iter().enumerate() {
            store.record_score(name, i as u32).unwrap();
        }

        let top = store.top_scores(5).unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "p7");
        assert!(store.top_scores(0).unwrap().is_empty());
        assert_eq!(store.all_scores_for_chart(10).unwrap().len(), 7);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let (_dir, store) = create_store();
        store.record_score("Alice", 3).unwrap();
        store.record_score("Alice", 8).unwrap();

        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(pairs(&store.top_scores(5).unwrap()), vec![("Alice", 8), ("Alice", 3)]);
    }

    #[test]
    fn test_clear_all_empties_table() {
        let (_dir, store) = create_store();
        store.record_score("Alice", 10).unwrap();
        store.record_score("Bob", 20).unwrap();

        assert_eq!(store.clear_all().unwrap(), 2);
        assert!(store.top_scores(5).unwrap().is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let (_dir, store) = create_store();
        let result = store.record_score("   ", 4);
        assert!(matches!(result, Err(LeaderboardError::Validation(_))));
        assert!(!result.unwrap_err().is_retryable());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let (_dir, store) = create_store();
        let name = "x".repeat(MAX_PLAYER_NAME_LEN + 1);
        assert!(matches!(store.record_score(&name, 1), Err(LeaderboardError::Validation(_))));
    }

    #[test]
    fn test_name_is_trimmed() {
        let (_dir, store) = create_store();
        let record = store.record_score("  Carol ", 5).unwrap();
        assert_eq!(record.name, "Carol");
        assert!(record.id > 0);
    }

    #[test]
    fn test_init_is_idempotent_and_keeps_data() {
        let (_dir, store) = create_store();
        store.record_score("Alice", 10).unwrap();

        store.init().unwrap();
        let reopened = LeaderboardStore::new(store.path());
        reopened.init().unwrap();

        assert_eq!(pairs(&reopened.top_scores(5).unwrap()), vec![("Alice", 10)]);
    }

    #[test]
    fn test_unreachable_path_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = LeaderboardStore::new(dir.path().join("missing").join("scores.db"));

        let result = store.record_score("Alice", 1);
        assert!(matches!(result, Err(LeaderboardError::StoreUnavailable { .. })));
        assert!(result.unwrap_err().is_retryable());
    }
}
