//! Session configuration
//!
//! # Environment Variables
//!
//! - `GRID_TETRIS_ROWS`: grid height (default: 10)
//! - `GRID_TETRIS_COLS`: grid width (default: 10)
//! - `GRID_TETRIS_TICK_MS`: fall timer period in milliseconds (default: 10)
//! - `GRID_TETRIS_SEED`: spawn RNG seed (default: 1)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_TICK_INTERVAL_MS};

pub const ENV_ROWS: &str = "GRID_TETRIS_ROWS";
pub const ENV_COLS: &str = "GRID_TETRIS_COLS";
pub const ENV_TICK_MS: &str = "GRID_TETRIS_TICK_MS";
pub const ENV_SEED: &str = "GRID_TETRIS_SEED";

/// Construction parameters for a [`Session`](crate::Session)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval_ms: u64,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SessionConfig {
    pub fn new(rows: usize, cols: usize, tick_interval_ms: u64) -> Self {
        Self {
            rows,
            cols,
            tick_interval_ms,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject zero-sized grids and a zero tick period
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Defaults overlaid with `GRID_TETRIS_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overlaid with values from `lookup`; unset keys keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, ENV_ROWS)? {
            config.rows = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_COLS)? {
            config.cols = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_TICK_MS)? {
            config.tick_interval_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_SEED)? {
            config.seed = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Env { var, value: raw })
}
