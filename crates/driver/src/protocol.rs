//! Line-delimited JSON for a presentation collaborator.
//!
//! Outbound, every notification becomes one JSON object tagged by `type`:
//!
//! ```text
//! {"type":"cell_activated","row":0,"col":1}
//! {"type":"row_cleared","row":9}
//! {"type":"score_changed","score":3}
//! {"type":"game_over"}
//! ```
//!
//! Inbound, one command name per line (`start`, `moveLeft`, `rotate`, ...).

use anyhow::{Context, Result};

use crate::timer::SharedSession;
use crate::types::{Command, GameEvent};

pub fn encode_event(event: &GameEvent) -> Result<String> {
    serde_json::to_string(event).with_context(|| format!("failed to encode {event:?}"))
}

pub fn decode_command(line: &str) -> Result<Command> {
    let name = line.trim();
    Command::from_str(name).with_context(|| format!("unknown command: {name:?}"))
}

/// Take the session's pending notifications and encode each as one line
pub async fn drain_encoded(session: &SharedSession) -> Result<Vec<String>> {
    let events = session.write().await.drain_events();
    events.iter().map(encode_event).collect()
}

/// Parse and apply one command line. Returns whether the session changed.
pub async fn apply_line(session: &SharedSession, line: &str) -> Result<bool> {
    let command = decode_command(line)?;
    let changed = session.write().await.apply(command);
    log::trace!("{} -> {changed}", command.as_str());
    Ok(changed)
}
