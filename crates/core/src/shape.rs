//! Shape module - piece geometry
//!
//! A shape is an anchor `(row, col)`, an orientation, and a variant tag.
//! Every query here is a pure function of those three fields: shapes never
//! look at the grid.
//!
//! Cell layouts (anchor marked `A`):
//!
//! ```text
//! Square          Stick (H)   Stick (V)   BrokenStick (V)   BrokenStick (H)
//! A #             A #         A           A                 A #
//! # #                         #           # #                 # #
//!                                           #
//! ```
//!
//! The edge subsets (`bottom_cells`, `left_cells`, `right_cells`) are the
//! cells whose neighbour decides collision in that direction. They are
//! intentionally not symmetric for `BrokenStick`.

use arrayvec::ArrayVec;

use crate::types::{Coord, Orientation, ShapeKind};

/// Up to 4 coordinates, stack allocated
pub type CellList = ArrayVec<Coord, 4>;

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: ShapeKind,
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

fn list(cells: &[Coord]) -> CellList {
    cells.iter().copied().collect()
}

impl Shape {
    /// Create a shape at `(row, col)` in the kind's spawn orientation
    pub fn new(kind: ShapeKind, row: i32, col: i32) -> Self {
        Self::with_orientation(kind, row, col, kind.spawn_orientation())
    }

    pub fn with_orientation(kind: ShapeKind, row: i32, col: i32, orientation: Orientation) -> Self {
        Self {
            kind,
            row,
            col,
            orientation,
        }
    }

    /// All occupied cells in the current orientation
    pub fn cells(&self) -> CellList {
        self.cells_with(self.orientation)
    }

    /// All occupied cells as if the shape had `orientation`.
    ///
    /// This is the side-effect free probe used to validate a rotation.
    pub fn cells_with(&self, orientation: Orientation) -> CellList {
        let (r, c) = (self.row, self.col);
        match (self.kind, orientation) {
            (ShapeKind::Square, _) => list(&[(r, c), (r, c + 1), (r + 1, c), (r + 1, c + 1)]),
            (ShapeKind::Stick, Orientation::Horizontal) => list(&[(r, c), (r, c + 1)]),
            (ShapeKind::Stick, Orientation::Vertical) => list(&[(r, c), (r + 1, c)]),
            (ShapeKind::BrokenStick, Orientation::Vertical) => {
                list(&[(r, c), (r + 1, c), (r + 1, c + 1), (r + 2, c + 1)])
            }
            (ShapeKind::BrokenStick, Orientation::Horizontal) => {
                list(&[(r, c), (r, c + 1), (r + 1, c + 1), (r + 1, c + 2)])
            }
        }
    }

    /// Cells whose downward neighbour decides whether the shape can fall
    pub fn bottom_cells(&self) -> CellList {
        let (r, c) = (self.row, self.col);
        match (self.kind, self.orientation) {
            (ShapeKind::Square, _) => list(&[(r + 1, c), (r + 1, c + 1)]),
            (ShapeKind::Stick, Orientation::Horizontal) => self.cells(),
            (ShapeKind::Stick, Orientation::Vertical) => list(&[(r + 1, c)]),
            (ShapeKind::BrokenStick, Orientation::Vertical) => list(&[(r + 1, c), (r + 2, c + 1)]),
            (ShapeKind::BrokenStick, Orientation::Horizontal) => {
                list(&[(r + 1, c + 1), (r + 1, c + 2)])
            }
        }
    }

    /// Cells whose left neighbour decides lateral collision
    pub fn left_cells(&self) -> CellList {
        let (r, c) = (self.row, self.col);
        match (self.kind, self.orientation) {
            (ShapeKind::Square, _) => list(&[(r, c), (r + 1, c)]),
            (ShapeKind::Stick, Orientation::Horizontal) => list(&[(r, c)]),
            (ShapeKind::Stick, Orientation::Vertical) => list(&[(r, c), (r + 1, c)]),
            (ShapeKind::BrokenStick, Orientation::Vertical) => list(&[(r, c), (r + 1, c)]),
            (ShapeKind::BrokenStick, Orientation::Horizontal) => list(&[(r, c)]),
        }
    }

    /// Cells whose right neighbour decides lateral collision
    pub fn right_cells(&self) -> CellList {
        let (r, c) = (self.row, self.col);
        match (self.kind, self.orientation) {
            (ShapeKind::Square, _) => list(&[(r, c + 1), (r + 1, c + 1)]),
            (ShapeKind::Stick, Orientation::Horizontal) => list(&[(r, c + 1)]),
            (ShapeKind::Stick, Orientation::Vertical) => list(&[(r, c), (r + 1, c)]),
            (ShapeKind::BrokenStick, Orientation::Vertical) => {
                list(&[(r + 1, c + 1), (r + 2, c + 1)])
            }
            (ShapeKind::BrokenStick, Orientation::Horizontal) => list(&[(r + 1, c + 2)]),
        }
    }

    /// Toggle orientation in place. The anchor never moves; `Square` is unaffected.
    pub fn rotate(&mut self) {
        if self.kind != ShapeKind::Square {
            self.orientation = self.orientation.flipped();
        }
    }

    /// Orientation the shape would have after `rotate`
    pub fn rotated_orientation(&self) -> Orientation {
        match self.kind {
            ShapeKind::Square => self.orientation,
            _ => self.orientation.flipped(),
        }
    }

    /// Bounding box width in `orientation`
    pub fn width(&self, orientation: Orientation) -> i32 {
        match (self.kind, orientation) {
            (ShapeKind::Square, _) => 2,
            (ShapeKind::Stick, Orientation::Horizontal) => 2,
            (ShapeKind::Stick, Orientation::Vertical) => 1,
            (ShapeKind::BrokenStick, Orientation::Horizontal) => 3,
            (ShapeKind::BrokenStick, Orientation::Vertical) => 2,
        }
    }

    /// Bounding box height in `orientation`
    pub fn height(&self, orientation: Orientation) -> i32 {
        match (self.kind, orientation) {
            (ShapeKind::Square, _) => 2,
            (ShapeKind::Stick, Orientation::Horizontal) => 1,
            (ShapeKind::Stick, Orientation::Vertical) => 2,
            (ShapeKind::BrokenStick, Orientation::Horizontal) => 2,
            (ShapeKind::BrokenStick, Orientation::Vertical) => 3,
        }
    }

    /// True if `(row, col)` is one of the shape's own cells
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.cells().iter().any(|&(r, c)| r == row && c == col)
    }

    pub fn move_left(&mut self) {
        self.col -= 1;
    }

    pub fn move_right(&mut self) {
        self.col += 1;
    }

    pub fn move_down(&mut self) {
        self.row += 1;
    }
}
