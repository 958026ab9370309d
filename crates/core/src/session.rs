//! Session module - the game loop
//!
//! Ties the grid, the live piece, spawn randomness, and the score together.
//! The session never owns a clock: a collaborator (real timer, test harness,
//! turn-based driver) calls [`Session::tick`] once per fall interval while
//! [`Session::is_running`] is true.
//!
//! Lifecycle: `Idle -> Falling -> Settling -> {Falling | GameOver}`.
//! `GameOver` is left only through [`Session::reset`] / [`Session::start`].

use std::time::Duration;

use crate::config::SessionConfig;
use crate::controller::{self, PieceController, PieceProbe};
use crate::error::{ConfigError, GameOver};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{CellState, Command, GameEvent, Phase, TickOutcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    current: Option<Shape>,
    score: u32,
    phase: Phase,
    /// Fall timer armed; at most one per session
    running: bool,
    rng: SimpleRng,
}

impl Session {
    /// Create an idle session with an empty grid
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols);
        Ok(Self::from_parts(config, grid))
    }

    /// Create an idle session on a pre-filled grid.
    ///
    /// The grid's dimensions replace `rows`/`cols` from `config`.
    pub fn with_grid(config: SessionConfig, grid: Grid) -> Result<Self, ConfigError> {
        let config = SessionConfig {
            rows: grid.rows(),
            cols: grid.cols(),
            ..config
        };
        config.validate()?;
        Ok(Self::from_parts(config, grid))
    }

    fn from_parts(config: SessionConfig, grid: Grid) -> Self {
        let rng = SimpleRng::new(config.seed);
        Self {
            config,
            grid,
            current: None,
            score: 0,
            phase: Phase::Idle,
            running: false,
            rng,
        }
    }

    /// Begin play.
    ///
    /// From `Idle` this spawns onto the grid as it is; otherwise it is a
    /// [`reset`](Self::reset).
    pub fn start(&mut self) -> Result<(), GameOver> {
        if self.phase == Phase::Idle {
            return self.spawn_next();
        }
        self.reset()
    }

    /// Empty the grid, zero the score, and spawn a fresh piece.
    pub fn reset(&mut self) -> Result<(), GameOver> {
        self.running = false;
        self.current = None;
        self.phase = Phase::Idle;
        self.grid.reset();
        if self.score != 0 {
            self.score = 0;
            self.grid.push_event(GameEvent::ScoreChanged { score: 0 });
        }
        log::debug!("session reset ({}x{})", self.grid.rows(), self.grid.cols());
        self.spawn_next()
    }

    /// Halt the fall timer. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Re-arm the fall timer if a piece is falling.
    pub fn resume(&mut self) -> bool {
        if self.phase == Phase::Falling && self.current.is_some() {
            self.running = true;
        }
        self.running
    }

    /// Put `shape` on the grid as the live piece, replacing any current one.
    ///
    /// Follows the spawn rules: every cell must be in bounds and empty, a
    /// blocked placement ends the game.
    pub fn place_piece(&mut self, shape: Shape) -> Result<(), GameOver> {
        if let Some(old) = self.current.take() {
            for &(r, c) in old.cells().iter() {
                self.grid.clear(r, c);
            }
        }
        match controller::place(&mut self.grid, shape) {
            Ok(shape) => {
                self.arm(shape);
                Ok(())
            }
            Err(err) => self.end_game(err),
        }
    }

    fn spawn_next(&mut self) -> Result<(), GameOver> {
        match controller::spawn(&mut self.grid, &mut self.rng) {
            Ok(shape) => {
                self.arm(shape);
                Ok(())
            }
            Err(err) => self.end_game(err),
        }
    }

    /// A new piece always replaces the previous fall timer
    fn arm(&mut self, shape: Shape) {
        self.current = Some(shape);
        self.phase = Phase::Falling;
        self.running = true;
    }

    fn end_game(&mut self, err: GameOver) -> Result<(), GameOver> {
        self.current = None;
        self.running = false;
        self.phase = Phase::GameOver;
        self.grid.push_event(GameEvent::GameOver);
        log::info!("{err}; final score {}", self.score);
        Err(err)
    }

    /// Input is accepted only while a piece is falling and the timer is armed
    fn accepts_input(&self) -> bool {
        self.running && self.phase == Phase::Falling
    }

    fn controller(&mut self) -> Option<PieceController<'_>> {
        if !self.accepts_input() {
            return None;
        }
        let piece = self.current.as_mut()?;
        Some(PieceController::new(&mut self.grid, piece))
    }

    /// Same gate as [`controller`](Self::controller), so every `can_*` query
    /// agrees with its move
    fn probe(&self) -> Option<PieceProbe<'_>> {
        if !self.accepts_input() {
            return None;
        }
        let piece = self.current.as_ref()?;
        Some(PieceProbe::new(&self.grid, piece))
    }

    pub fn can_move_left(&self) -> bool {
        self.probe().is_some_and(|p| p.can_move_left())
    }

    pub fn can_move_right(&self) -> bool {
        self.probe().is_some_and(|p| p.can_move_right())
    }

    pub fn can_rotate(&self) -> bool {
        self.probe().is_some_and(|p| p.can_rotate())
    }

    /// Returns whether the piece moved
    pub fn move_left(&mut self) -> bool {
        self.controller().is_some_and(|mut c| c.move_left())
    }

    /// Returns whether the piece moved
    pub fn move_right(&mut self) -> bool {
        self.controller().is_some_and(|mut c| c.move_right())
    }

    /// Returns whether the rotation was accepted
    pub fn rotate(&mut self) -> bool {
        self.controller().is_some_and(|mut c| c.rotate())
    }

    /// One fall step.
    ///
    /// Moves the piece down one row, or if any bottom cell is resting on the
    /// floor or a settled cell: halts the timer, clears complete rows, and
    /// spawns the next piece (which may end the game).
    pub fn tick(&mut self) -> TickOutcome {
        let Some(mut ctl) = self.controller() else {
            return TickOutcome::Idle;
        };
        if ctl.step_down() {
            return TickOutcome::Fell;
        }

        self.running = false;
        self.phase = Phase::Settling;
        if let Some(piece) = self.current.take() {
            log::debug!(
                "{} settled at ({}, {})",
                piece.kind.as_str(),
                piece.row,
                piece.col
            );
        }

        let rows_cleared = self.resolve_rows();
        match self.spawn_next() {
            Ok(()) => TickOutcome::Settled { rows_cleared },
            Err(_) => TickOutcome::GameOver { rows_cleared },
        }
    }

    /// Top-to-bottom scan; every complete row is collapsed and scored on its own
    fn resolve_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..self.grid.rows() {
            if self.grid.row_is_complete(row) {
                self.grid.collapse_row(row);
                self.score += 1;
                cleared += 1;
                self.grid.push_event(GameEvent::ScoreChanged { score: self.score });
                log::debug!("row {row} cleared, score {}", self.score);
            }
        }
        cleared
    }

    /// Apply a collaborator command. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start().is_ok(),
            Command::Reset => self.reset().is_ok(),
            Command::Stop => {
                let was_running = self.running;
                self.stop();
                was_running
            }
            Command::Resume => {
                let was_running = self.running;
                !was_running && self.resume()
            }
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::Tick => self.tick() != TickOutcome::Idle,
        }
    }

    pub fn cell_state(&self, row: i32, col: i32) -> Option<CellState> {
        self.grid.cell_state(row, col)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_piece(&self) -> Option<Shape> {
        self.current
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Take all pending notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.grid.drain_events()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.grid.to_rows(),
            piece: self.current.map(PieceSnapshot::from),
            score: self.score,
            phase: self.phase,
            running: self.running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, ShapeKind};

    fn session(rows: usize, cols: usize) -> Session {
        Session::new(SessionConfig::new(rows, cols, 10)).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session(4, 4);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.is_running());
        assert_eq!(s.current_piece(), None);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Session::new(SessionConfig::new(0, 4, 10)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroRows);
    }

    #[test]
    fn test_start_spawns_on_row_zero() {
        let mut s = session(10, 10);
        s.start().unwrap();

        assert_eq!(s.phase(), Phase::Falling);
        assert!(s.is_running());
        let piece = s.current_piece().unwrap();
        assert_eq!(piece.row, 0);
        assert_eq!(piece.orientation, piece.kind.spawn_orientation());
        for &(r, c) in piece.cells().iter() {
            assert_eq!(s.cell_state(r, c), Some(CellState::Occupied));
        }
    }

    #[test]
    fn test_tick_is_idle_until_started() {
        let mut s = session(4, 4);
        assert_eq!(s.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_stopped_session_ignores_ticks_and_input() {
        let mut s = session(6, 6);
        s.place_piece(Shape::new(ShapeKind::Stick, 0, 2)).unwrap();
        s.stop();
        s.stop();

        assert_eq!(s.tick(), TickOutcome::Idle);
        assert!(!s.move_left());
        assert_eq!(s.current_piece().unwrap().row, 0);
        assert_eq!(s.current_piece().unwrap().col, 2);

        assert!(s.resume());
        assert_eq!(s.tick(), TickOutcome::Fell);
    }

    #[test]
    fn test_queries_agree_with_moves_when_stopped() {
        let mut s = session(6, 6);
        s.place_piece(Shape::new(ShapeKind::Stick, 0, 2)).unwrap();
        s.stop();

        assert_eq!(s.can_move_left(), s.move_left());
        assert_eq!(s.can_move_right(), s.move_right());
        assert_eq!(s.can_rotate(), s.rotate());
        assert!(!s.can_move_left());
        assert_eq!(s.current_piece().unwrap().col, 2);

        s.resume();
        assert!(s.can_move_left());
        assert_eq!(s.can_move_left(), s.move_left());
    }

    #[test]
    fn test_place_piece_replaces_current() {
        let mut s = session(6, 6);
        s.place_piece(Shape::new(ShapeKind::Square, 0, 0)).unwrap();
        s.place_piece(Shape::new(ShapeKind::Stick, 3, 3)).unwrap();

        assert_eq!(s.grid().occupied_count(), 2);
        assert_eq!(s.cell_state(0, 0), Some(CellState::Empty));
        assert_eq!(s.cell_state(3, 4), Some(CellState::Occupied));
    }

    #[test]
    fn test_blocked_placement_ends_game() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 0]]).unwrap();
        let mut s = Session::with_grid(SessionConfig::default(), grid).unwrap();

        let err = s.place_piece(Shape::new(ShapeKind::Stick, 0, 0)).unwrap_err();
        assert_eq!(err, GameOver { row: 0, col: 0 });
        assert!(s.is_game_over());
        assert!(!s.is_running());
        assert_eq!(s.drain_events().last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn test_with_grid_takes_grid_dimensions() {
        let grid = Grid::new(3, 7);
        let s = Session::with_grid(SessionConfig::default(), grid).unwrap();
        assert_eq!(s.config().rows, 3);
        assert_eq!(s.config().cols, 7);
    }

    #[test]
    fn test_rotate_square_records_nothing() {
        let mut s = session(4, 4);
        s.place_piece(Shape::new(ShapeKind::Square, 0, 0)).unwrap();
        s.drain_events();

        assert!(s.rotate());
        assert!(s.drain_events().is_empty());
        assert_eq!(s.current_piece().unwrap().orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_apply_commands() {
        let mut s = session(6, 6);
        assert!(s.apply(Command::Start));
        assert!(s.apply(Command::Stop));
        assert!(!s.apply(Command::Stop));
        assert!(!s.apply(Command::Tick));
        assert!(s.apply(Command::Resume));
        assert!(!s.apply(Command::Resume));
        assert!(s.apply(Command::Tick));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = session(4, 5);
        s.place_piece(Shape::new(ShapeKind::Stick, 0, 1)).unwrap();

        let snap = s.snapshot();
        assert_eq!(snap.rows(), 4);
        assert_eq!(snap.cols(), 5);
        assert_eq!(snap.board[0], vec![0, 1, 1, 0, 0]);
        assert_eq!(snap.piece.unwrap().kind, ShapeKind::Stick);
        assert!(snap.playable());
    }
}
