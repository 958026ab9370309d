//! Error types
//!
//! Rejected moves and rotations are not errors (they return `false`); the only
//! runtime failure is a blocked spawn.

use thiserror::Error;

/// Spawn was blocked at the designated cell. Terminal until reset.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("game over: spawn blocked at row {row}, column {col}")]
pub struct GameOver {
    pub row: i32,
    pub col: i32,
}

/// Invalid session or grid configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one row")]
    ZeroRows,
    #[error("grid must have at least one column")]
    ZeroCols,
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },
}
