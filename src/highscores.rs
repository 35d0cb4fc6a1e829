//! High score persistence collaborator
//!
//! The simulation never blocks on score I/O: results are recorded
//! fire-and-forget through [`record_result`], which logs failures and
//! falls back to defaults instead of disturbing the in-memory game.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable persistence failures. A timeout on the save path is handled
/// exactly like any other failure by callers.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("score save timed out")]
    Timeout,
}

/// Persisted score bookkeeping: the best run and the most recent one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub high_score: u32,
    pub last_score: u32,
}

/// Storage backend for the score record
pub trait ScoreStore {
    fn load(&self) -> Result<ScoreRecord, ScoreError>;
    fn save(&mut self, record: ScoreRecord) -> Result<(), ScoreError>;
}

/// Best known high score, falling back to 0 when the store fails.
pub fn load_high_score(store: &dyn ScoreStore) -> u32 {
    match store.load() {
        Ok(record) => record.high_score,
        Err(err) => {
            log::warn!("high score load failed, using 0: {err}");
            0
        }
    }
}

/// Record a finished run's score. Returns whether it became the new high
/// score. Storage failures are logged and reported as `false`; they never
/// propagate into the game flow.
pub fn record_result(store: &mut dyn ScoreStore, final_score: u32) -> bool {
    let mut record = match store.load() {
        Ok(record) => record,
        Err(err) => {
            log::warn!("score load failed, starting from an empty record: {err}");
            ScoreRecord::default()
        }
    };

    let new_record = final_score > record.high_score;
    record.last_score = final_score;
    if new_record {
        record.high_score = final_score;
    }

    match store.save(record) {
        Ok(()) => {
            if new_record {
                log::info!("new high score saved: {final_score}");
            }
            new_record
        }
        Err(err) => {
            log::warn!("score save failed: {err}");
            false
        }
    }
}

/// JSON-file-backed store. A missing file reads as a fresh record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<ScoreRecord, ScoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no score file at {:?}, starting fresh", self.path);
                return Ok(ScoreRecord::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&mut self, record: ScoreRecord) -> Result<(), ScoreError> {
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store, with optional failure injection for tests and hosts
/// that do not persist anything.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: ScoreRecord,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves always time out.
    pub fn failing() -> Self {
        Self {
            record: ScoreRecord::default(),
            fail_saves: true,
        }
    }

    pub fn record(&self) -> ScoreRecord {
        self.record
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<ScoreRecord, ScoreError> {
        Ok(self.record)
    }

    fn save(&mut self, record: ScoreRecord) -> Result<(), ScoreError> {
        if self.fail_saves {
            return Err(ScoreError::Timeout);
        }
        self.record = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_result_tracks_high_and_last() {
        let mut store = MemoryStore::new();
        assert!(record_result(&mut store, 150));
        assert_eq!(
            store.record(),
            ScoreRecord {
                high_score: 150,
                last_score: 150
            }
        );

        // A lower run updates last but not high, and is not a new record
        assert!(!record_result(&mut store, 90));
        assert_eq!(
            store.record(),
            ScoreRecord {
                high_score: 150,
                last_score: 90
            }
        );

        // Equal score does not beat the record
        assert!(!record_result(&mut store, 150));
        assert_eq!(store.record().high_score, 150);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut store = MemoryStore::failing();
        // Would be a new record, but the save timed out
        assert!(!record_result(&mut store, 500));
        assert_eq!(store.record(), ScoreRecord::default());
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn test_json_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "grid-chase-scores-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        // Missing file reads as a fresh record
        assert_eq!(store.load().unwrap(), ScoreRecord::default());
        assert_eq!(load_high_score(&store), 0);

        assert!(record_result(&mut store, 210));
        let reopened = JsonFileStore::new(&path);
        assert_eq!(load_high_score(&reopened), 210);
        assert_eq!(reopened.load().unwrap().last_score, 210);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_panic() {
        let path = std::env::temp_dir().join(format!(
            "grid-chase-corrupt-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(ScoreError::Corrupt(_))));
        // The fallback path still hands the caller a usable default
        assert_eq!(load_high_score(&store), 0);

        let _ = fs::remove_file(&path);
    }
}
