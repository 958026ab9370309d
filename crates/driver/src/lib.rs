//! Driver module - async edge around the rules engine
//!
//! The core session never owns a clock. This crate supplies the pieces a
//! host needs to actually play:
//!
//! - [`timer`]: a tokio task calling `Session::tick` every fall interval
//! - [`protocol`]: line-delimited JSON for notifications and command names
//! - [`config`]: loading a [`SessionConfig`](grid_tetris_core::SessionConfig)
//!   from a JSON file or the environment
//!
//! # Example
//!
//! ```no_run
//! use grid_tetris_core::{Session, SessionConfig};
//! use grid_tetris_driver::{protocol, timer};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let session = timer::shared(Session::new(SessionConfig::from_env()?)?);
//! session.write().await.start()?;
//!
//! let mut fall = timer::FallTimer::new();
//! fall.start(session.clone()).await;
//!
//! protocol::apply_line(&session, "moveLeft").await?;
//! for line in protocol::drain_encoded(&session).await? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod protocol;
pub mod timer;

pub use grid_tetris_core as core;
pub use grid_tetris_types as types;

pub use config::{load_config, parse_config};
pub use timer::{FallTimer, SharedSession};
