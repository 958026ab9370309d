//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no required dependencies, so they can be used
//! by the rules engine, the timer driver, and any presentation collaborator.
//!
//! # Coordinates
//!
//! Every coordinate is `(row, col)`:
//!
//! - **Row 0** is the spawn row; rows increase downward.
//! - **Col 0** is the leftmost column.
//! - Coordinates are signed so geometry probes may step outside the grid
//!   (e.g. one column left of column 0) without wrapping.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 10 | Grid height |
//! | `DEFAULT_COLS` | 10 | Grid width |
//! | `DEFAULT_TICK_INTERVAL_MS` | 10 | Fall timer period |
//! | `DEFAULT_SEED` | 1 | Spawn RNG seed |
//!
//! # Examples
//!
//! ```
//! use grid_tetris_types::{Orientation, ShapeKind};
//!
//! let kind = ShapeKind::from_str("stick").unwrap();
//! assert_eq!(kind, ShapeKind::Stick);
//! assert_eq!(kind.spawn_orientation(), Orientation::Horizontal);
//!
//! assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default grid height (rows)
pub const DEFAULT_ROWS: usize = 10;

/// Default grid width (columns)
pub const DEFAULT_COLS: usize = 10;

/// Default fall timer period in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

/// Default spawn RNG seed
pub const DEFAULT_SEED: u32 = 1;

/// A grid coordinate as `(row, col)`.
pub type Coord = (i32, i32);

/// Orientation of an asymmetric shape.
///
/// Only `Stick` and `BrokenStick` change geometry with orientation; a
/// `Square` ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    ///
    /// ```
    /// use grid_tetris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
    /// assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
    /// ```
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// The three piece variants
///
/// - **Square**: 2x2 block, orientation-invariant
/// - **Stick**: 2-cell line
/// - **BrokenStick**: 4-cell S/Z-like zigzag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    Square,
    Stick,
    BrokenStick,
}

impl ShapeKind {
    /// Every variant, in spawn-table order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Stick, ShapeKind::BrokenStick];

    /// Orientation a freshly spawned piece of this kind starts in.
    pub fn spawn_orientation(&self) -> Orientation {
        match self {
            ShapeKind::Square | ShapeKind::Stick => Orientation::Horizontal,
            ShapeKind::BrokenStick => Orientation::Vertical,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("broken_stick"), Some(ShapeKind::BrokenStick));
    /// assert_eq!(ShapeKind::from_str("t"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "stick" => Some(ShapeKind::Stick),
            "broken_stick" | "brokenstick" => Some(ShapeKind::BrokenStick),
            _ => None,
        }
    }

    /// Convert to snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Stick => "stick",
            ShapeKind::BrokenStick => "broken_stick",
        }
    }
}

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellState {
    Empty,
    Occupied,
}

impl CellState {
    pub fn is_occupied(&self) -> bool {
        *self == CellState::Occupied
    }
}

/// Session lifecycle
///
/// `Idle -> Falling -> Settling -> {Falling | GameOver}`; `GameOver` is
/// terminal until a reset passes back through `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    Idle,
    Falling,
    Settling,
    GameOver,
}

/// Notification emitted by the engine for the presentation collaborator.
///
/// Events are queued in emission order and pulled with
/// `Session::drain_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum GameEvent {
    /// Cell became occupied
    CellActivated { row: usize, col: usize },
    /// Cell became empty
    CellCleared { row: usize, col: usize },
    /// A complete row was collapsed
    RowCleared { row: usize },
    /// Score changed to the new total
    ScoreChanged { score: u32 },
    /// Spawn was blocked; the session is over
    GameOver,
}

/// Commands a collaborator can apply to a session
///
/// Key and button bindings are the collaborator's business; these are the
/// operations they map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Command {
    /// Begin play (resets a finished or running game)
    Start,
    /// Empty the grid, zero the score, spawn a fresh piece
    Reset,
    /// Halt the fall timer
    Stop,
    /// Re-arm the fall timer
    Resume,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Toggle piece orientation
    Rotate,
    /// Advance one fall step
    Tick,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "reset" => Some(Command::Reset),
            "stop" => Some(Command::Stop),
            "resume" => Some(Command::Resume),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Reset => "reset",
            Command::Stop => "stop",
            Command::Resume => "resume",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
        }
    }
}

/// What a single fall step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No piece was falling, or the timer is stopped
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece settled and the next piece spawned
    Settled { rows_cleared: u32 },
    /// The piece settled and the next spawn was blocked
    GameOver { rows_cleared: u32 },
}

impl TickOutcome {
    pub fn rows_cleared(&self) -> u32 {
        match self {
            TickOutcome::Settled { rows_cleared } | TickOutcome::GameOver { rows_cleared } => {
                *rows_cleared
            }
            TickOutcome::Idle | TickOutcome::Fell => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_string_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_command_string_roundtrip() {
        for cmd in [
            Command::Start,
            Command::Reset,
            Command::Stop,
            Command::Resume,
            Command::MoveLeft,
            Command::MoveRight,
            Command::Rotate,
            Command::Tick,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn test_spawn_orientations() {
        assert_eq!(ShapeKind::Square.spawn_orientation(), Orientation::Horizontal);
        assert_eq!(ShapeKind::Stick.spawn_orientation(), Orientation::Horizontal);
        assert_eq!(ShapeKind::BrokenStick.spawn_orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_tick_outcome_rows_cleared() {
        assert_eq!(TickOutcome::Fell.rows_cleared(), 0);
        assert_eq!(TickOutcome::Settled { rows_cleared: 2 }.rows_cleared(), 2);
        assert_eq!(TickOutcome::GameOver { rows_cleared: 1 }.rows_cleared(), 1);
    }
}
