//! Document payload shapes for rig loading.
//!
//! Four documents feed a rig: sprite project, bone project, attachment config
//! (a superset of the first two plus instances) and animation. Optional fields
//! resolve to their defaults here, once, at parse time. Maps keep document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bones::{AttachmentPoint, Bone, BoneLayer};
use crate::sampling::{Keyframe, KeyframeTrack};
use crate::sprites::{SourceRect, SpriteInstance};

fn half() -> f32 {
    0.5
}

fn one() -> f32 {
    1.0
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpriteDoc {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "half")]
    pub origin_x: f32,
    #[serde(default = "half")]
    pub origin_y: f32,
}

impl SpriteDoc {
    /// Pixel rect; fractional coordinates truncate toward zero.
    pub fn rect(&self) -> SourceRect {
        SourceRect {
            x: self.x as i32,
            y: self.y as i32,
            width: self.width as i32,
            height: self.height as i32,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoneDoc {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub angle: f32,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub parent_attachment_point: AttachmentPoint,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub layer: BoneLayer,
    #[serde(default)]
    pub layer_order: i32,
}

impl BoneDoc {
    pub fn into_bone(self, name: &str) -> Bone {
        let mut bone = Bone::new(name, self.parent, self.x, self.y, self.length, self.angle)
            .with_attachment(self.parent_attachment_point)
            .with_layer(self.layer, self.layer_order);
        bone.children = self.children;
        bone
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpriteInstanceDoc {
    pub sprite_name: String,
    #[serde(default)]
    pub bone_name: Option<String>,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default, alias = "offset_rotation")]
    pub rotation: f32,
    #[serde(default = "one")]
    pub scale: f32,
}

impl SpriteInstanceDoc {
    pub fn into_instance(self, id: &str) -> SpriteInstance {
        SpriteInstance {
            id: id.to_string(),
            sprite_name: self.sprite_name,
            bone_name: self.bone_name.unwrap_or_default(),
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrackDoc {
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl TrackDoc {
    pub fn into_track(self, bone_name: &str) -> KeyframeTrack {
        KeyframeTrack::new(bone_name, self.keyframes)
    }
}

/// `{sprite_sheet_path, sprites: {name -> sprite}}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SpriteProjectDoc {
    #[serde(default)]
    pub sprite_sheet_path: String,
    #[serde(default)]
    pub sprites: IndexMap<String, SpriteDoc>,
}

/// `{bones: {name -> bone}}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BoneProjectDoc {
    #[serde(default)]
    pub bones: IndexMap<String, BoneDoc>,
}

/// Sprite project and bone project fields plus `sprite_instances`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AttachmentConfigDoc {
    #[serde(default)]
    pub sprite_sheet_path: String,
    #[serde(default)]
    pub sprites: IndexMap<String, SpriteDoc>,
    #[serde(default)]
    pub bones: IndexMap<String, BoneDoc>,
    #[serde(default)]
    pub sprite_instances: IndexMap<String, SpriteInstanceDoc>,
}

/// `{duration?, fps?, animation_tracks: {bone -> {keyframes}}, sprite_instances?}`
///
/// Editor exports name the track map `bone_tracks`; both keys are accepted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AnimationDoc {
    #[serde(default)]
    pub duration: Option<f32>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default, alias = "bone_tracks")]
    pub animation_tracks: IndexMap<String, TrackDoc>,
    #[serde(default)]
    pub sprite_instances: IndexMap<String, SpriteInstanceDoc>,
}

impl AnimationDoc {
    pub fn keyframe_count(&self) -> usize {
        self.animation_tracks.values().map(|t| t.keyframes.len()).sum()
    }
}
