use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::Result;

/// Persists the best score as a single number in a file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored score, or 0 when the file is missing or unreadable.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => score,
            Err(e) => {
                warn!("Error loading high score from {:?}: {}", self.path, e);
                0
            }
        }
    }

    /// Write `score` if it beats the stored value. Failures are logged and
    /// reported as `false`.
    pub fn save(&self, score: u32) -> bool {
        match self.try_save(score) {
            Ok(improved) => improved,
            Err(e) => {
                error!("Error saving high score to {:?}: {}", self.path, e);
                false
            }
        }
    }

    pub fn try_load(&self) -> Result<u32> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(text.trim())?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No high score file at {:?}", self.path);
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn try_save(&self, score: u32) -> Result<bool> {
        // A corrupt file must not block a fresh record.
        let stored = self.try_load().unwrap_or(0);
        if score <= stored {
            return Ok(false);
        }
        fs::write(&self.path, serde_json::to_string(&score)?)?;
        info!("New high score {} (was {})", score, stored);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("highscore.txt"))
    }

    #[test]
    fn test_missing_file_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).load(), 0);
    }

    #[test]
    fn test_save_only_on_improvement() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(store.save(50));
        assert_eq!(store.load(), 50);

        assert!(!store.save(30));
        assert_eq!(store.load(), 50);

        assert!(!store.save(50));
        assert!(store.save(51));
        assert_eq!(store.load(), 51);
    }

    #[test]
    fn test_plain_text_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "120\n").unwrap();
        assert_eq!(store.load(), 120);

        store.save(130);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "130");
    }

    #[test]
    fn test_corrupt_file_is_zero_and_overwritten() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "not a number").unwrap();
        assert_eq!(store.load(), 0);
        assert!(store.try_load().is_err());

        assert!(store.save(10));
        assert_eq!(store.load(), 10);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("missing").join("highscore.txt"));
        assert!(!store.save(99));
        assert_eq!(store.load(), 0);
    }
}
