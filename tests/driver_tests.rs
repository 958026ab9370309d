//! Driver tests - timer-driven play observed only through JSON lines

use std::time::Duration;

use grid_tetris::core::{Session, SessionConfig};
use grid_tetris::driver::protocol::{apply_line, drain_encoded};
use grid_tetris::driver::timer::{shared, FallTimer};

fn replay(board: &mut [Vec<u8>], line: &str) {
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    let cell = |key: &str| value[key].as_u64().unwrap() as usize;
    match value["type"].as_str().unwrap() {
        "cell_activated" => board[cell("row")][cell("col")] = 1,
        "cell_cleared" => board[cell("row")][cell("col")] = 0,
        "row_cleared" | "score_changed" | "game_over" => {}
        other => panic!("unexpected event type {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_event_stream_mirrors_board() {
    let config = SessionConfig::new(8, 6, 20).with_seed(9);
    let period = Duration::from_millis(config.tick_interval_ms);
    let session = shared(Session::new(config).unwrap());
    let mut board = vec![vec![0u8; 6]; 8];

    assert!(apply_line(&session, "start").await.unwrap());
    let mut timer = FallTimer::new();
    timer.start(session.clone()).await;

    for step in 0..2_000 {
        tokio::time::sleep(period).await;
        if step % 4 == 0 {
            apply_line(&session, "rotate").await.unwrap();
        }
        for line in drain_encoded(&session).await.unwrap() {
            replay(&mut board, &line);
        }
        if session.read().await.is_game_over() {
            break;
        }
    }

    let game = session.read().await;
    assert_eq!(board, game.grid().to_rows());
    assert_eq!(timer.is_active(), game.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_stop_command_halts_timer_task() {
    let session = shared(Session::new(SessionConfig::new(10, 10, 10)).unwrap());
    apply_line(&session, "start").await.unwrap();

    let mut timer = FallTimer::new();
    timer.start(session.clone()).await;
    assert!(apply_line(&session, "stop").await.unwrap());

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(!timer.is_active());
    assert_eq!(session.read().await.current_piece().unwrap().row, 0);
}
