//! Keyframe tracks and time-based sampling.
//!
//! Model:
//! - A track animates one bone and holds keyframes in rig-relative seconds.
//! - Segment [Ki -> K(i+1)] progress is remapped by Ki's easing, then each
//!   transform component is blended linearly.
//! - Times outside every segment hold the last keyframe (see `Extrapolation`
//!   for the pre-start variant).
//!
//! Keyframe order is taken as given. Loaders keep document order and do not sort.

use serde::{Deserialize, Serialize};

use crate::config::Extrapolation;
use crate::interp::Easing;
use crate::transform::Transform;

/// One absolute pose sample of a track.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Seconds; may exceed the rig duration.
    pub time: f32,
    pub transform: Transform,
    /// Easing of the segment leaving this keyframe.
    #[serde(default, rename = "interpolation")]
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(time: f32, transform: Transform, easing: Easing) -> Self {
        Self {
            time,
            transform,
            easing,
        }
    }
}

/// Ordered keyframes driving one bone.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyframeTrack {
    /// Bone this track drives. Need not exist; unmatched tracks are skipped at apply time.
    pub bone_name: String,
    pub keyframes: Vec<Keyframe>,
}

/// Find the first segment [i, i+1] whose stamps bracket `time` inclusively and
/// return (i, raw progress). Zero-length segments report progress 0.
fn find_segment(keys: &[Keyframe], time: f32) -> Option<(usize, f32)> {
    keys.windows(2).enumerate().find_map(|(i, pair)| {
        let (k0, k1) = (&pair[0], &pair[1]);
        if k0.time <= time && time <= k1.time {
            let span = k1.time - k0.time;
            let t = if span > 0.0 { (time - k0.time) / span } else { 0.0 };
            Some((i, t))
        } else {
            None
        }
    })
}

impl KeyframeTrack {
    pub fn new(bone_name: impl Into<String>, keyframes: Vec<Keyframe>) -> Self {
        Self {
            bone_name: bone_name.into(),
            keyframes,
        }
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Sample at `time` seconds with the default pre-start rule (hold last).
    pub fn sample(&self, time: f32) -> Transform {
        self.sample_with(time, Extrapolation::HoldLast)
    }

    /// Sample at `time` seconds, choosing what a time before the first keyframe yields.
    pub fn sample_with(&self, time: f32, before_first: Extrapolation) -> Transform {
        let keys = &self.keyframes;
        match keys.len() {
            0 => Transform::IDENTITY,
            1 => keys[0].transform,
            n => match find_segment(keys, time) {
                Some((i, t)) => {
                    let (k0, k1) = (&keys[i], &keys[i + 1]);
                    k0.transform.lerp(&k1.transform, k0.easing.apply(t))
                }
                None => {
                    if before_first == Extrapolation::HoldFirst && time < keys[0].time {
                        keys[0].transform
                    } else {
                        keys[n - 1].transform
                    }
                }
            },
        }
    }
}
