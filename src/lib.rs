//! Grid Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `grid_tetris::{core, driver, types}`; the
//! implementation lives in dedicated crates under `crates/`.

pub use grid_tetris_core as core;
pub use grid_tetris_driver as driver;
pub use grid_tetris_types as types;
