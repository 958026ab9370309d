//! Fall timer
//!
//! One tokio task per session ticks it on a fixed period. The task ends on
//! its own once the session stops running (stopped, or game over).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::core::Session;
use crate::types::TickOutcome;

/// Session handle shared between the timer task and input handling
pub type SharedSession = Arc<RwLock<Session>>;

pub fn shared(session: Session) -> SharedSession {
    Arc::new(RwLock::new(session))
}

/// Owns the background tick task. Dropping the timer aborts it.
#[derive(Debug, Default)]
pub struct FallTimer {
    task: Option<JoinHandle<()>>,
}

impl FallTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking `session` at its configured interval.
    ///
    /// A previously started task is aborted first, so at most one timer
    /// drives a session. The first tick fires one period after this call.
    pub async fn start(&mut self, session: SharedSession) {
        self.stop();
        let period = session.read().await.tick_interval();
        log::debug!("fall timer started ({period:?})");
        self.task = Some(tokio::spawn(run(session, period)));
    }

    /// Abort the task. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                let live = !task.is_finished();
                task.abort();
                if live {
                    log::debug!("fall timer stopped");
                }
                live
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for FallTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run(session: SharedSession, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let mut game = session.write().await;
        let outcome = game.tick();
        if let TickOutcome::Settled { rows_cleared } = outcome {
            if rows_cleared > 0 {
                log::debug!("{rows_cleared} row(s) cleared, score {}", game.score());
            }
        }
        if !game.is_running() {
            if game.is_game_over() {
                log::info!("fall timer exiting: game over");
            } else {
                log::debug!("fall timer exiting: session stopped");
            }
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, SessionConfig, Shape};
    use crate::types::ShapeKind;

    const PERIOD: Duration = Duration::from_millis(10);

    fn falling_stick() -> SharedSession {
        let mut session = Session::new(SessionConfig::new(10, 10, 10)).unwrap();
        session.place_piece(Shape::new(ShapeKind::Stick, 0, 4)).unwrap();
        shared(session)
    }

    async fn piece_row(session: &SharedSession) -> i32 {
        session.read().await.current_piece().unwrap().row
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let session = falling_stick();
        let mut timer = FallTimer::new();
        timer.start(session.clone()).await;

        tokio::time::sleep(PERIOD / 2).await;
        assert_eq!(piece_row(&session).await, 0);

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(piece_row(&session).await, 3);
        assert!(timer.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_task() {
        let session = falling_stick();
        let mut timer = FallTimer::new();
        timer.start(session.clone()).await;
        timer.start(session.clone()).await;

        tokio::time::sleep(PERIOD * 2 + PERIOD / 2).await;
        assert_eq!(piece_row(&session).await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let session = falling_stick();
        let mut timer = FallTimer::new();
        assert!(!timer.stop());

        timer.start(session.clone()).await;
        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.is_active());

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(piece_row(&session).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_when_session_stops() {
        let session = falling_stick();
        let mut timer = FallTimer::new();
        timer.start(session.clone()).await;

        session.write().await.stop();
        tokio::time::sleep(PERIOD * 2).await;
        assert!(!timer.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_on_game_over() {
        // One row: the stick settles at once and no column is free to spawn.
        let grid = Grid::new(1, 3);
        let mut session = Session::with_grid(SessionConfig::default(), grid).unwrap();
        session.place_piece(Shape::new(ShapeKind::Stick, 0, 0)).unwrap();
        let session = shared(session);

        let mut timer = FallTimer::new();
        timer.start(session.clone()).await;
        tokio::time::sleep(PERIOD * 2 + PERIOD / 2).await;

        assert!(!timer.is_active());
        assert!(session.read().await.is_game_over());
    }
}
