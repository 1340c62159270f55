//! Core configuration for skelrig-core.

use serde::{Deserialize, Serialize};

/// What a track returns for a query time that precedes its first keyframe.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Same as past the end: the last keyframe's transform.
    #[default]
    HoldLast,
    /// The first keyframe's transform.
    HoldFirst,
}

/// How the sampled scale reaches a bone's `world_scale` each tick.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// `world_scale *= sample.scale` every tick. Drifts unless tracks keep
    /// their scale at 1.0.
    #[default]
    Accumulate,
    /// `world_scale = sample.scale`, recomputed from the base scale 1.0.
    Fresh,
}

/// Rig-wide defaults and behavior switches.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Duration in seconds used until an animation document provides one.
    pub default_duration: f32,
    /// Informational frame rate used until an animation document provides one.
    pub default_fps: u32,
    pub before_first: Extrapolation,
    pub scale_mode: ScaleMode,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            default_duration: 5.0,
            default_fps: 30,
            before_first: Extrapolation::default(),
            scale_mode: ScaleMode::default(),
        }
    }
}
