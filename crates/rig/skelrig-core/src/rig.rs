//! Rig controller: data ownership, per-tick pose evaluation and draw output.
//!
//! Methods:
//! - new / headless, playback controls (play, pause, stop, seek, apply)
//! - advance (clock → sample tracks → apply deltas → recompute world transforms)
//! - pose_for_rendering, skeleton_segments
//!
//! Loading lives in `loader.rs`.

use indexmap::IndexMap;

use crate::bones::{Bone, BoneGraph};
use crate::clock::Clock;
use crate::config::{RigConfig, ScaleMode};
use crate::inputs::PlaybackCommand;
use crate::outputs::{BoneSegment, DrawInstruction};
use crate::sampling::KeyframeTrack;
use crate::sprites::{HeadlessBackend, ImageBackend, Sprite, SpriteInstance};

/// One loaded rig. Rigs share nothing; separate rigs may be driven from
/// separate threads.
pub struct Rig<B: ImageBackend = HeadlessBackend> {
    // Field order is teardown order: sprite regions, then the sheet, then the backend.
    // Reloads release the regions they replace before swapping the sheet.
    pub(crate) sprites: IndexMap<String, Sprite<B::Region>>,
    pub(crate) sheet: Option<B::Sheet>,
    pub(crate) sheet_path: String,
    pub(crate) bones: BoneGraph,
    pub(crate) instances: IndexMap<String, SpriteInstance>,
    pub(crate) tracks: IndexMap<String, KeyframeTrack>,
    pub(crate) clock: Clock,
    pub(crate) cfg: RigConfig,
    pub(crate) backend: B,
}

impl Rig<HeadlessBackend> {
    /// Rig with a geometry-only backend and no registered sheets.
    pub fn headless() -> Self {
        Self::new(HeadlessBackend::new(), RigConfig::default())
    }
}

impl<B: ImageBackend> Rig<B> {
    pub fn new(backend: B, cfg: RigConfig) -> Self {
        Self {
            sprites: IndexMap::new(),
            sheet: None,
            sheet_path: String::new(),
            bones: BoneGraph::default(),
            instances: IndexMap::new(),
            tracks: IndexMap::new(),
            clock: Clock::new(cfg.default_duration, cfg.default_fps),
            cfg,
            backend,
        }
    }

    pub fn config(&self) -> &RigConfig {
        &self.cfg
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ----- playback -----

    pub fn play(&mut self) {
        self.clock.play();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn seek(&mut self, time: f32) {
        self.clock.seek(time);
    }

    pub fn apply(&mut self, cmd: PlaybackCommand) {
        self.clock.apply(cmd);
    }

    /// Apply commands in order, then advance by `dt`.
    pub fn update(&mut self, dt: f32, cmds: &[PlaybackCommand]) {
        for cmd in cmds {
            self.apply(*cmd);
        }
        self.advance(dt);
    }

    /// Step the clock and pose the skeleton. No-op while paused.
    ///
    /// Every track whose bone exists is sampled at the new time and added onto
    /// that bone's local pose; scale goes to `world_scale` per `ScaleMode`.
    /// These deltas persist: the pose accumulates across ticks.
    pub fn advance(&mut self, dt: f32) {
        if !self.clock.advance(dt) {
            return;
        }
        let time = self.clock.current_time();
        for track in self.tracks.values() {
            let Some(bone) = self.bones.get_mut(&track.bone_name) else {
                continue;
            };
            let delta = track.sample_with(time, self.cfg.before_first);
            bone.x += delta.x;
            bone.y += delta.y;
            bone.angle += delta.rotation;
            match self.cfg.scale_mode {
                ScaleMode::Accumulate => bone.world_scale *= delta.scale,
                ScaleMode::Fresh => bone.world_scale = delta.scale,
            }
        }
        self.bones.recompute_world_transforms();
    }

    /// Recompute world transforms without advancing time.
    pub fn recompute(&mut self) {
        self.bones.recompute_world_transforms();
    }

    // ----- output -----

    /// Draw instructions for every instance whose sprite and bone resolve and
    /// whose sprite has a region, ordered by bone layer then layer order.
    /// Anything unresolved is skipped without error.
    pub fn pose_for_rendering(&self) -> Vec<DrawInstruction<'_, B::Region>> {
        let mut out: Vec<DrawInstruction<'_, B::Region>> = self
            .instances
            .values()
            .filter_map(|inst| {
                let sprite = self.sprites.get(&inst.sprite_name)?;
                let bone = self.bones.get(&inst.bone_name)?;
                let region = sprite.region.as_ref()?;
                let scale = inst.scale * bone.world_scale;
                Some(DrawInstruction {
                    instance_id: inst.id.as_str(),
                    sprite_name: sprite.name.as_str(),
                    region,
                    position: [bone.world_x + inst.offset_x, bone.world_y + inst.offset_y],
                    size: [
                        sprite.rect.width as f32 * scale,
                        sprite.rect.height as f32 * scale,
                    ],
                    pivot: [sprite.origin_x, sprite.origin_y],
                    rotation: bone.world_rotation + inst.rotation,
                    layer: bone.layer,
                    layer_order: bone.layer_order,
                })
            })
            .collect();
        out.sort_by_key(|d| (d.layer, d.layer_order));
        out
    }

    pub fn skeleton_segments(&self) -> Vec<BoneSegment> {
        self.bones.segments()
    }

    // ----- accessors -----

    #[inline]
    pub fn current_time(&self) -> f32 {
        self.clock.current_time()
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.clock.duration
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.clock.fps
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn sheet_path(&self) -> &str {
        &self.sheet_path
    }

    pub fn has_sheet(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn bones(&self) -> &BoneGraph {
        &self.bones
    }

    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.get(name)
    }

    pub fn sprite(&self, name: &str) -> Option<&Sprite<B::Region>> {
        self.sprites.get(name)
    }

    pub fn sprites(&self) -> impl Iterator<Item = &Sprite<B::Region>> {
        self.sprites.values()
    }

    pub fn instance(&self, id: &str) -> Option<&SpriteInstance> {
        self.instances.get(id)
    }

    pub fn instances(&self) -> impl Iterator<Item = &SpriteInstance> {
        self.instances.values()
    }

    pub fn track(&self, bone_name: &str) -> Option<&KeyframeTrack> {
        self.tracks.get(bone_name)
    }

    pub fn tracks(&self) -> impl Iterator<Item = &KeyframeTrack> {
        self.tracks.values()
    }

    /// Bone names in evaluation order.
    pub fn bone_order(&self) -> Vec<&str> {
        self.bones.evaluation_order().collect()
    }

    // ----- programmatic construction -----

    /// Replace the bone set. On error the previous bones stay in place.
    pub fn set_bones(&mut self, bones: impl IntoIterator<Item = Bone>) -> crate::Result<()> {
        self.bones = BoneGraph::new(bones)?;
        self.bones.recompute_world_transforms();
        Ok(())
    }

    /// Insert or replace a sprite.
    pub fn insert_sprite(&mut self, sprite: Sprite<B::Region>) {
        self.sprites.insert(sprite.name.clone(), sprite);
    }

    /// Insert or replace an instance by id.
    pub fn insert_instance(&mut self, instance: SpriteInstance) {
        self.instances.insert(instance.id.clone(), instance);
    }

    /// Insert or replace the track for `track.bone_name`.
    pub fn insert_track(&mut self, track: KeyframeTrack) {
        self.tracks.insert(track.bone_name.clone(), track);
    }

    pub fn set_timing(&mut self, duration: f32, fps: u32) {
        self.clock.duration = duration;
        self.clock.fps = fps;
    }
}
