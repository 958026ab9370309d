//! Headless runner (default binary).
//!
//! Reads one command name per stdin line (`start`, `moveLeft`, `rotate`, ...)
//! and writes every notification as one JSON line on stdout. The fall timer
//! is armed whenever the session is running without one.
//!
//! Config comes from the JSON file named by the first argument, or from
//! `GRID_TETRIS_*` environment variables.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

use grid_tetris::core::Session;
use grid_tetris::driver::config::load_or_env;
use grid_tetris::driver::protocol;
use grid_tetris::driver::timer::{shared, FallTimer, SharedSession};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_or_env(path.as_deref())?;
    let period = config.tick_interval();
    let session = shared(Session::new(config)?);

    let mut timer = FallTimer::new();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut flush = tokio::time::interval(period);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = protocol::apply_line(&session, &line).await {
                    eprintln!("{err:#}");
                    continue;
                }
                if session.read().await.is_running() && !timer.is_active() {
                    timer.start(session.clone()).await;
                }
            }
            _ = flush.tick() => {}
        }
        write_events(&session, &mut stdout).await?;
    }

    timer.stop();
    write_events(&session, &mut stdout).await
}

async fn write_events(session: &SharedSession, stdout: &mut Stdout) -> Result<()> {
    let lines = protocol::drain_encoded(session).await?;
    if lines.is_empty() {
        return Ok(());
    }
    for line in lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
