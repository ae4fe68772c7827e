//! Startup configuration read from `SNAKE_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};

use crate::core::GameConfig;
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub grid_size: u8,
    pub tick_interval: Duration,
    pub seed: u64,
    pub highscore_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// Unset or blank variables take their defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let grid_size = match var("SNAKE_GRID_SIZE") {
            Some(s) => {
                let n: u8 = s
                    .parse()
                    .with_context(|| format!("SNAKE_GRID_SIZE: invalid number {:?}", s))?;
                if !GameConfig::is_valid_grid_size(n) {
                    bail!(
                        "SNAKE_GRID_SIZE: {} is outside {}..={}",
                        n,
                        MIN_GRID_SIZE,
                        MAX_GRID_SIZE
                    );
                }
                n
            }
            None => DEFAULT_GRID_SIZE,
        };

        let tick_ms = match var("SNAKE_TICK_MS") {
            Some(s) => s.parse::<u64>().ok().filter(|&ms| ms > 0).ok_or_else(|| {
                anyhow!("SNAKE_TICK_MS: expected a positive integer, got {:?}", s)
            })?,
            None => TICK_MS as u64,
        };

        let seed = match var("SNAKE_SEED") {
            Some(s) => s
                .parse()
                .with_context(|| format!("SNAKE_SEED: invalid number {:?}", s))?,
            None => clock_seed(),
        };

        let highscore_path = var("SNAKE_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_highscore_path(var("HOME")));

        Ok(Self {
            grid_size,
            tick_interval: Duration::from_millis(tick_ms),
            seed,
            highscore_path,
            log_path: var("SNAKE_LOG_PATH").map(PathBuf::from),
        })
    }

    pub fn game(&self) -> GameConfig {
        GameConfig::new(self.grid_size, self.seed)
    }
}

fn default_highscore_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home).join(".tui-snake").join("highscore.json"),
        None => PathBuf::from("tui-snake-highscore.json"),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ (d.subsec_nanos() as u64).rotate_left(32))
        .unwrap_or(1)
}
