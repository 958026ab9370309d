//! Config loading.
//!
//! A JSON file may name any subset of the [`SessionConfig`] fields; the rest
//! keep their defaults.
//!
//! ```text
//! {"rows": 20, "cols": 10, "tick_interval_ms": 500}
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::SessionConfig;

pub fn parse_config(json: &str) -> Result<SessionConfig> {
    let config: SessionConfig = serde_json::from_str(json).context("invalid session config")?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<SessionConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&json).with_context(|| format!("failed to load {}", path.display()))
}

/// `path` if given, otherwise `GRID_TETRIS_*` environment overrides
pub fn load_or_env(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(SessionConfig::from_env()?),
    }
}
