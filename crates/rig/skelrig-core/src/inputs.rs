//! Input contracts for the rig.
//!
//! Hosts translate their own input (keys, UI) into these commands and pass them
//! to `Rig::apply` or `Rig::update` each tick.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackCommand {
    Play,
    /// Stop advancing, keep the current time.
    Pause,
    /// Pause and rewind to 0.
    Stop,
    /// Jump to a time, clamped into [0, duration].
    Seek { time: f32 },
}
