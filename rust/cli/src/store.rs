//! High score persisted as a small JSON file: `{"high": 120}`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use powerpoker_engine::errors::GameError;
use powerpoker_engine::store::HighScoreStore;

use crate::io_utils::ensure_parent_dir;

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high: u32,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    /// A missing file means no game has been finished yet.
    fn high_score(&self) -> Result<u32, GameError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(GameError::Store(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        let parsed: HighScoreFile = serde_json::from_str(&text).map_err(|e| {
            GameError::Store(format!("corrupt high score file {}: {}", self.path.display(), e))
        })?;
        Ok(parsed.high)
    }

    fn set_high_score(&mut self, value: u32) -> Result<(), GameError> {
        ensure_parent_dir(&self.path).map_err(GameError::Store)?;
        let body = serde_json::to_string(&HighScoreFile { high: value })
            .map_err(|e| GameError::Store(e.to_string()))?;
        std::fs::write(&self.path, body).map_err(|e| {
            GameError::Store(format!("cannot write {}: {}", self.path.display(), e))
        })
    }
}
