//! Plain 2D transform value: the unit of keyframe interpolation.

use serde::{Deserialize, Serialize};

use crate::interp::functions::lerp_f32;

/// Offset, rotation (degrees) and uniform scale multiplier.
///
/// Used both as an absolute keyframe pose and as the additive delta the rig
/// applies to a bone every tick. Missing fields in documents fall back to the
/// identity (0, 0, 0, 1).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Degrees.
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "one")]
    pub scale: f32,
}

fn one() -> f32 {
    1.0
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn new(x: f32, y: f32, rotation: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            rotation,
            scale,
        }
    }

    /// Component-wise linear blend. Rotation is a plain scalar: no shortest-arc
    /// wraparound across 0/360.
    #[inline]
    pub fn lerp(&self, other: &Transform, t: f32) -> Transform {
        Transform {
            x: lerp_f32(self.x, other.x, t),
            y: lerp_f32(self.y, other.y, t),
            rotation: lerp_f32(self.rotation, other.rotation, t),
            scale: lerp_f32(self.scale, other.scale, t),
        }
    }
}
