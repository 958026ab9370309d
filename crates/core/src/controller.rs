//! Piece controller - moves the live piece against the grid
//!
//! The live piece is drawn into the grid, so its own cells read as occupied.
//! Every collision probe here therefore ignores the piece's own cells and only
//! reacts to the floor, the walls, and settled cells.
//!
//! All probes check bounds before touching the grid (`col <= 0` is tested
//! before looking at `col - 1`, and so on).

use crate::error::GameOver;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shape::Shape;

/// Pick a random column and variant and draw the new piece at row 0.
///
/// Fails with [`GameOver`] when `(0, column)` is occupied. Other columns are
/// not retried. A piece wider than the room right of the column is shifted
/// left until it fits; if it still cannot be placed the spawn fails as well.
pub fn spawn(grid: &mut Grid, rng: &mut SimpleRng) -> Result<Shape, GameOver> {
    let col = rng.spawn_column(grid.cols());
    if grid.is_occupied(0, col) {
        return Err(GameOver { row: 0, col });
    }

    let kind = rng.shape_kind();
    let mut shape = Shape::new(kind, 0, col);
    let width = shape.width(shape.orientation);
    let cols = grid.cols() as i32;
    if shape.col + width > cols {
        shape.col = (cols - width).max(0);
    }

    place(grid, shape).map_err(|_| GameOver { row: 0, col })
}

/// Draw `shape` exactly where it is.
///
/// Every cell must be in bounds and empty, otherwise nothing is drawn and the
/// anchor is reported as the blocked spawn cell. The anchor is bounds-checked
/// before any cell offsets are computed.
pub fn place(grid: &mut Grid, shape: Shape) -> Result<Shape, GameOver> {
    let blocked = GameOver {
        row: shape.row,
        col: shape.col,
    };
    if !grid.in_bounds(shape.row, shape.col) {
        return Err(blocked);
    }
    let fits = shape
        .cells()
        .iter()
        .all(|&(r, c)| grid.in_bounds(r, c) && !grid.is_occupied(r, c));
    if !fits {
        return Err(blocked);
    }

    for &(r, c) in shape.cells().iter() {
        grid.activate(r, c);
    }
    log::debug!(
        "spawned {} at ({}, {}) {}",
        shape.kind.as_str(),
        shape.row,
        shape.col,
        shape.orientation.as_str()
    );
    Ok(shape)
}

/// Read-only collision queries for the live piece
#[derive(Clone, Copy)]
pub struct PieceProbe<'a> {
    grid: &'a Grid,
    piece: &'a Shape,
}

impl<'a> PieceProbe<'a> {
    pub fn new(grid: &'a Grid, piece: &'a Shape) -> Self {
        Self { grid, piece }
    }

    /// Occupied by something other than the live piece (in-bounds only)
    fn foreign_occupied(&self, row: i32, col: i32) -> bool {
        self.grid.is_occupied(row, col) && !self.piece.contains(row, col)
    }

    /// Floor, wall, or settled cell
    fn foreign_blocked(&self, row: i32, col: i32) -> bool {
        self.grid.is_blocked(row, col) && !self.piece.contains(row, col)
    }

    pub fn can_move_left(&self) -> bool {
        !self
            .piece
            .left_cells()
            .iter()
            .any(|&(r, c)| c <= 0 || self.foreign_occupied(r, c - 1))
    }

    pub fn can_move_right(&self) -> bool {
        let last_col = self.grid.cols() as i32 - 1;
        !self
            .piece
            .right_cells()
            .iter()
            .any(|&(r, c)| c >= last_col || self.foreign_occupied(r, c + 1))
    }

    /// Would the rotated cell set fit? The piece itself is not touched.
    pub fn can_rotate(&self) -> bool {
        self.piece
            .cells_with(self.piece.rotated_orientation())
            .iter()
            .all(|&(r, c)| self.grid.in_bounds(r, c) && !self.foreign_occupied(r, c))
    }

    /// True if any bottom cell rests on the floor or a settled cell
    pub fn is_grounded(&self) -> bool {
        self.piece
            .bottom_cells()
            .iter()
            .any(|&(r, c)| self.foreign_blocked(r + 1, c))
    }
}

/// Mutable view of the grid and the live piece drawn into it
pub struct PieceController<'a> {
    grid: &'a mut Grid,
    piece: &'a mut Shape,
}

impl<'a> PieceController<'a> {
    pub fn new(grid: &'a mut Grid, piece: &'a mut Shape) -> Self {
        Self { grid, piece }
    }

    pub fn piece(&self) -> &Shape {
        &*self.piece
    }

    pub fn probe(&self) -> PieceProbe<'_> {
        PieceProbe::new(&*self.grid, &*self.piece)
    }

    pub fn can_move_left(&self) -> bool {
        self.probe().can_move_left()
    }

    pub fn can_move_right(&self) -> bool {
        self.probe().can_move_right()
    }

    pub fn can_rotate(&self) -> bool {
        self.probe().can_rotate()
    }

    pub fn is_grounded(&self) -> bool {
        self.probe().is_grounded()
    }

    /// Shift one column left. Returns false (and changes nothing) if blocked.
    pub fn move_left(&mut self) -> bool {
        if !self.can_move_left() {
            return false;
        }
        self.erase();
        self.piece.move_left();
        self.draw();
        true
    }

    /// Shift one column right. Returns false (and changes nothing) if blocked.
    pub fn move_right(&mut self) -> bool {
        if !self.can_move_right() {
            return false;
        }
        self.erase();
        self.piece.move_right();
        self.draw();
        true
    }

    /// Toggle orientation in place (no wall kick). Returns false if blocked.
    pub fn rotate(&mut self) -> bool {
        if !self.can_rotate() {
            return false;
        }
        if self.piece.rotated_orientation() == self.piece.orientation {
            return true;
        }
        self.erase();
        self.piece.rotate();
        self.draw();
        true
    }

    /// Advance one row unless grounded. Returns whether the piece moved.
    pub fn step_down(&mut self) -> bool {
        if self.is_grounded() {
            return false;
        }
        self.erase();
        self.piece.move_down();
        self.draw();
        true
    }

    fn erase(&mut self) {
        for &(r, c) in self.piece.cells().iter() {
            self.grid.clear(r, c);
        }
    }

    fn draw(&mut self) {
        for &(r, c) in self.piece.cells().iter() {
            self.grid.activate(r, c);
        }
    }
}
