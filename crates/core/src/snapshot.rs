//! Snapshot module - owned, serializable copy of the session state for collaborators

use serde::Serialize;

use crate::shape::Shape;
use crate::types::{Orientation, Phase, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

impl From<Shape> for PieceSnapshot {
    fn from(value: Shape) -> Self {
        Self {
            kind: value.kind,
            row: value.row,
            col: value.col,
            orientation: value.orientation,
        }
    }
}

/// Owned copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Occupancy rows, live piece included
    pub board: Vec<Vec<u8>>,
    pub piece: Option<PieceSnapshot>,
    pub score: u32,
    pub phase: Phase,
    pub running: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling && self.running
    }

    pub fn rows(&self) -> usize {
        self.board.len()
    }

    pub fn cols(&self) -> usize {
        self.board.first().map_or(0, Vec::len)
    }
}
