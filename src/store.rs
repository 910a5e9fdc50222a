//! High score slot backed by a small JSON file.
//!
//! Stands in for the controller's EEPROM cell. The engine treats the slot as
//! infallible, so read problems count as an empty slot and write problems are
//! logged and dropped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ScoreStore;
use crate::types::HighScore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SlotFile {
    high_score: HighScore,
}

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<HighScore> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let slot: SlotFile = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(slot.high_score)
    }

    pub fn write(&self, value: HighScore) -> Result<()> {
        let text = serde_json::to_string_pretty(&SlotFile { high_score: value })?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("write {}", self.path.display()))
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> HighScore {
        if !self.path.exists() {
            return 0;
        }
        self.read().unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "high score unreadable, treating as 0");
            0
        })
    }

    fn store(&mut self, value: HighScore) {
        if let Err(err) = self.write(value) {
            warn!(error = %format!("{err:#}"), value, "high score not saved");
        }
    }
}
