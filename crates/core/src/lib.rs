//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of a small falling-block game played on a
//! rectangular grid. It has **no dependencies** on rendering, input, or
//! timers, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Any collaborator (terminal, GUI, async driver) can host it
//!
//! # Module Structure
//!
//! - [`grid`]: occupancy grid with bounds handling, row collapse, and the
//!   notification queue
//! - [`shape`]: the three piece variants and their cell geometry
//! - [`controller`]: spawn plus collision-checked movement of the live piece
//! - [`session`]: game lifecycle, fall step, scoring
//! - [`rng`]: seeded spawn randomness
//! - [`config`]: session construction parameters
//! - [`snapshot`]: owned state copy for collaborators
//!
//! # Game Rules
//!
//! - Pieces spawn on row 0 at a random column; a blocked spawn ends the game.
//! - Pieces move left, right, and toggle orientation; there is no wall kick.
//! - Each tick moves the piece down one row. A piece with any bottom cell on
//!   the floor or a settled cell stays where it is and the next one spawns.
//! - Every complete row is collapsed and scores one point.
//!
//! # Example
//!
//! ```
//! use grid_tetris_core::{Session, SessionConfig};
//! use grid_tetris_types::TickOutcome;
//!
//! let mut game = Session::new(SessionConfig::new(10, 10, 10)).unwrap();
//! game.start().unwrap();
//!
//! game.move_left();
//! game.rotate();
//! while game.tick() == TickOutcome::Fell {}
//!
//! assert!(!game.drain_events().is_empty());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use grid_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use controller::{PieceController, PieceProbe};
pub use error::{ConfigError, GameOver};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use session::Session;
pub use shape::{CellList, Shape};
pub use snapshot::{GameSnapshot, PieceSnapshot};
