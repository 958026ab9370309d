//! Grid module - the occupancy matrix
//!
//! The grid is an `nrow x ncol` matrix where each cell is 0 (empty) or 1
//! (occupied). Uses a flat row-major buffer (`row * ncol + col`).
//! Coordinates: `(row, col)`, row 0 is the spawn row and rows grow downward.
//!
//! Every mutation records a [`GameEvent`] in an internal journal so a
//! presentation layer can mirror the grid without polling it.

use crate::error::ConfigError;
use crate::types::{CellState, GameEvent};

/// The board - fixed size for the lifetime of a session
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<u8>,
    /// Notifications not yet drained by the owner
    events: Vec<GameEvent>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
            events: Vec::new(),
        }
    }

    /// Build a grid from explicit rows; any non-zero value counts as occupied.
    ///
    /// No events are recorded for the initial contents.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, ConfigError> {
        let nrow = rows.len();
        if nrow == 0 {
            return Err(ConfigError::ZeroRows);
        }
        let ncol = rows[0].len();
        if ncol == 0 {
            return Err(ConfigError::ZeroCols);
        }

        let mut cells = Vec::with_capacity(nrow * ncol);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != ncol {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected: ncol,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| u8::from(v != 0)));
        }

        Ok(Self {
            rows: nrow,
            cols: ncol,
            cells,
            events: Vec::new(),
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Occupancy at (row, col); None if out of bounds
    pub fn cell_state(&self, row: i32, col: i32) -> Option<CellState> {
        self.index(row, col).map(|idx| {
            if self.cells[idx] != 0 {
                CellState::Occupied
            } else {
                CellState::Empty
            }
        })
    }

    /// True only for in-bounds occupied cells
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.cell_state(row, col), Some(CellState::Occupied))
    }

    /// Collision predicate for a piece about to enter (row, col).
    ///
    /// Anything at or below the floor (`row >= nrow`) is blocked regardless of
    /// column. Other out-of-range coordinates are blocked too; in range it is
    /// plain occupancy.
    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        if row >= 0 && row as usize >= self.rows {
            return true;
        }
        match self.index(row, col) {
            Some(idx) => self.cells[idx] != 0,
            None => true,
        }
    }

    /// Mark (row, col) occupied. Returns false if out of bounds.
    pub fn activate(&mut self, row: i32, col: i32) -> bool {
        let Some(idx) = self.index(row, col) else {
            return false;
        };
        self.cells[idx] = 1;
        self.events.push(GameEvent::CellActivated {
            row: row as usize,
            col: col as usize,
        });
        true
    }

    /// Mark (row, col) empty. Returns false if out of bounds.
    pub fn clear(&mut self, row: i32, col: i32) -> bool {
        let Some(idx) = self.index(row, col) else {
            return false;
        };
        self.cells[idx] = 0;
        self.events.push(GameEvent::CellCleared {
            row: row as usize,
            col: col as usize,
        });
        true
    }

    /// Check if every column of a row is occupied
    pub fn row_is_complete(&self, row: usize) -> bool {
        if row >= self.rows || self.cols == 0 {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].iter().all(|&cell| cell != 0)
    }

    /// Zero `row` and move it to the top; rows above it shift down by one.
    ///
    /// Rows below `row` are untouched. Records `RowCleared` followed by a cell
    /// event for every cell whose occupancy changed.
    pub fn collapse_row(&mut self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }

        let width = self.cols;
        self.events.push(GameEvent::RowCleared { row });

        for r in 0..=row {
            for c in 0..width {
                let old = self.cells[r * width + c];
                let new = if r == 0 {
                    0
                } else {
                    self.cells[(r - 1) * width + c]
                };
                if old != new {
                    self.events.push(if new != 0 {
                        GameEvent::CellActivated { row: r, col: c }
                    } else {
                        GameEvent::CellCleared { row: r, col: c }
                    });
                }
            }
        }

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(0);

        true
    }

    /// Scan top to bottom once, collapsing each complete row as it is found.
    ///
    /// Returns the indices that were cleared, in scan order. Collapsing row `k`
    /// only rewrites rows `0..=k`, so later rows keep their indices.
    pub fn clear_complete_rows(&mut self) -> Vec<usize> {
        let mut cleared = Vec::new();
        for row in 0..self.rows {
            if self.row_is_complete(row) {
                self.collapse_row(row);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells[idx] != 0 {
                self.cells[idx] = 0;
                self.events.push(GameEvent::CellCleared {
                    row: idx / self.cols,
                    col: idx % self.cols,
                });
            }
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Copy of the occupancy matrix, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Queue an engine-level notification behind the cell events
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Notifications recorded since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all recorded notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Grid {}
