//! Debug summary of a loaded rig.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rig::Rig;
use crate::sprites::ImageBackend;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpriteStatus {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    pub renderable: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoneStatus {
    pub name: String,
    pub world_x: f32,
    pub world_y: f32,
    pub world_rotation: f32,
    pub world_scale: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RigSummary {
    pub sheet_path: String,
    pub sheet_loaded: bool,
    pub sprites: Vec<SpriteStatus>,
    pub bones: Vec<BoneStatus>,
    /// (instance id, sprite name, bone name)
    pub instances: Vec<(String, String, String)>,
    pub tracks: usize,
    pub current_time: f32,
    pub duration: f32,
    pub playing: bool,
}

impl<B: ImageBackend> Rig<B> {
    pub fn debug_summary(&self) -> RigSummary {
        RigSummary {
            sheet_path: self.sheet_path().to_string(),
            sheet_loaded: self.has_sheet(),
            sprites: self
                .sprites()
                .map(|s| SpriteStatus {
                    name: s.name.clone(),
                    width: s.rect.width,
                    height: s.rect.height,
                    x: s.rect.x,
                    y: s.rect.y,
                    renderable: s.is_renderable(),
                })
                .collect(),
            bones: self
                .bones()
                .iter()
                .map(|b| BoneStatus {
                    name: b.name().to_string(),
                    world_x: b.world_x,
                    world_y: b.world_y,
                    world_rotation: b.world_rotation,
                    world_scale: b.world_scale,
                })
                .collect(),
            instances: self
                .instances()
                .map(|i| (i.id.clone(), i.sprite_name.clone(), i.bone_name.clone()))
                .collect(),
            tracks: self.tracks().count(),
            current_time: self.current_time(),
            duration: self.duration(),
            playing: self.is_playing(),
        }
    }

    /// Write the summary to the debug log.
    pub fn log_summary(&self) {
        let s = self.debug_summary();
        debug!(
            "Sprite sheet: {} ({})",
            s.sheet_path,
            if s.sheet_loaded { "loaded" } else { "none" }
        );
        debug!("Sprites: {}", s.sprites.len());
        for sp in &s.sprites {
            debug!(
                "  {}: {}x{} at ({},{}) - Region: {}",
                sp.name,
                sp.width,
                sp.height,
                sp.x,
                sp.y,
                if sp.renderable { "OK" } else { "MISSING" }
            );
        }
        debug!("Bones: {}", s.bones.len());
        for b in &s.bones {
            debug!(
                "  {}: pos=({:.1},{:.1}) rot={:.1}",
                b.name, b.world_x, b.world_y, b.world_rotation
            );
        }
        debug!("Sprite instances: {}", s.instances.len());
        for (id, sprite, bone) in &s.instances {
            debug!("  {id}: {sprite} -> {bone}");
        }
        debug!("Animation tracks: {}", s.tracks);
        debug!("Animation: {:.2}s / {:.2}s", s.current_time, s.duration);
    }
}
