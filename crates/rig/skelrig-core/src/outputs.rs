//! Output contracts from the rig.
//!
//! Draw instructions carry final sprite placement for this tick; the host
//! renderer consumes them in order. Skeleton segments serve debug overlays.

use serde::Serialize;

use crate::bones::BoneLayer;

/// Placement of one sprite instance for the current pose.
#[derive(Clone, Debug, Serialize)]
pub struct DrawInstruction<'a, R> {
    pub instance_id: &'a str,
    pub sprite_name: &'a str,
    #[serde(skip)]
    pub region: &'a R,
    /// Bone world position plus instance offset.
    pub position: [f32; 2],
    /// Sprite size times instance scale times bone world scale.
    pub size: [f32; 2],
    /// Pivot as fractions of `size`.
    pub pivot: [f32; 2],
    /// Degrees.
    pub rotation: f32,
    pub layer: BoneLayer,
    pub layer_order: i32,
}

/// A bone's world-space segment from pivot to tip.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BoneSegment {
    pub bone: String,
    pub start: [f32; 2],
    pub end: [f32; 2],
}
