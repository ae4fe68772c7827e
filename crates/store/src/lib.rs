//! High score persistence.
//!
//! The game core never touches storage. The session loads the best score once
//! at startup through a [`HighScoreStore`] and saves it whenever it changes.
//!
//! [`JsonFileStore`] keeps the value in a small JSON object under the fixed
//! key [`STORAGE_KEY`]:
//!
//! ```json
//! {"highScore": 12}
//! ```
//!
//! A file holding just a bare integer (`12`) is also accepted on load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Key the high score is stored under.
pub const STORAGE_KEY: &str = "highScore";

/// Durable storage for the best score.
pub trait HighScoreStore {
    /// Read the stored high score. Missing storage reads as 0.
    fn load(&self) -> Result<u32>;

    /// Persist a new high score.
    fn save(&mut self, high_score: u32) -> Result<()>;
}

/// Load the stored high score, treating unreadable storage as 0.
pub fn load_or_zero(store: &impl HighScoreStore) -> u32 {
    match store.load() {
        Ok(score) => score,
        Err(e) => {
            log::warn!("High score unavailable, starting from 0: {:#}", e);
            0
        }
    }
}

/// On-disk layout read by [`JsonFileStore::load`].
#[derive(Debug, Deserialize)]
struct ScoreFile {
    #[serde(rename = "highScore", default)]
    high_score: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Stored {
    Bare(u32),
    Object(ScoreFile),
}

/// High score kept in a JSON file.
///
/// Keys other than [`STORAGE_KEY`] are carried through saves, even when the
/// stored score itself is malformed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents, or `None` when missing or blank.
    fn read_text(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }

    /// Fields already in the file. Anything that is not a JSON object
    /// (a bare integer, or no file) contributes none.
    fn read_fields(&self) -> Result<Map<String, Value>> {
        let Some(text) = self.read_text()? else {
            return Ok(Map::new());
        };
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(match value {
            Value::Object(map) => map,
            _ => Map::new(),
        })
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let Some(text) = self.read_text()? else {
            return Ok(0);
        };
        let stored: Stored = serde_json::from_str(&text).map_err(|e| {
            anyhow!(
                "{}: expected {{\"{}\": <non-negative integer>}} or a bare integer ({})",
                self.path.display(),
                STORAGE_KEY,
                e
            )
        })?;
        let score = match stored {
            Stored::Bare(n) => n,
            Stored::Object(file) => file.high_score,
        };
        log::info!("Loaded high score {} from {}", score, self.path.display());
        Ok(score)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        let mut fields = match self.read_fields() {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("Replacing unreadable high score file: {:#}", e);
                Map::new()
            }
        };
        fields.insert(STORAGE_KEY.to_string(), Value::from(high_score));

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }

        // Write then rename so a crash never leaves a truncated file.
        let tmp = self.path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(&Value::Object(fields))?;
        fs::write(&tmp, text).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        log::info!("High score {} saved to {}", high_score, self.path.display());
        Ok(())
    }
}

/// In-memory store recording every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: u32,
    saves: Vec<u32>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// A store whose saves always fail.
    pub fn failing(value: u32) -> Self {
        Self {
            value,
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn saves(&self) -> &[u32] {
        &self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("memory store: save refused"));
        }
        self.value = high_score;
        self.saves.push(high_score);
        Ok(())
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> Result<u32> {
        (**self).load()
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        (**self).save(high_score)
    }
}
