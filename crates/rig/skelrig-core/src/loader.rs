//! Loading the four rig documents onto a [`Rig`].
//!
//! Notes:
//! - Each document is parsed in full before anything is applied, so a parse
//!   failure leaves the rig untouched. Failures after that point (bone graph
//!   validation) keep what the document already installed; nothing rolls back.
//! - Missing sheets and out-of-bounds regions are warnings; the sprite is kept
//!   without a region and never drawn.
//! - Collections merge: entries with an existing key are replaced.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::bones::Bone;
use crate::data::{
    AnimationDoc, AttachmentConfigDoc, BoneDoc, BoneProjectDoc, SpriteDoc, SpriteInstanceDoc,
    SpriteProjectDoc,
};
use crate::error::{Result, RigError};
use crate::rig::Rig;
use crate::sprites::{ImageBackend, Sprite};

/// What one document added to the rig.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct LoadReport {
    pub sprites: usize,
    /// Sprites that received a region.
    pub sprites_renderable: usize,
    pub bones: usize,
    pub instances: usize,
    pub tracks: usize,
    pub keyframes: usize,
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_document<T: DeserializeOwned>(kind: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| RigError::parse(kind, e))
}

fn logged<T>(kind: &str, res: Result<T>) -> Result<T> {
    if let Err(e) = &res {
        error!("Error loading {kind}: {e}");
    }
    res
}

impl<B: ImageBackend> Rig<B> {
    // ----- sprite project -----

    pub fn load_sprite_project(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("Loading sprite project from: {}", path.display());
        let text = logged("sprite project", read_document(path))?;
        self.load_sprite_project_str(&text)
    }

    pub fn load_sprite_project_str(&mut self, text: &str) -> Result<LoadReport> {
        let doc: SpriteProjectDoc =
            logged("sprite project", parse_document("sprite project", text))?;
        let mut report = LoadReport::default();
        self.release_replaced(doc.sprites.keys());
        self.load_sheet(&doc.sprite_sheet_path);
        self.install_sprites(doc.sprites, &mut report);
        Ok(report)
    }

    // ----- bone project -----

    pub fn load_bone_project(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("Loading bone project from: {}", path.display());
        let text = logged("bone project", read_document(path))?;
        self.load_bone_project_str(&text)
    }

    pub fn load_bone_project_str(&mut self, text: &str) -> Result<LoadReport> {
        let doc: BoneProjectDoc = logged("bone project", parse_document("bone project", text))?;
        let mut report = LoadReport::default();
        logged("bone project", self.install_bones(doc.bones, &mut report))?;
        Ok(report)
    }

    // ----- attachment config -----

    pub fn load_attachment_config(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("Loading attachment config from: {}", path.display());
        let text = logged("attachment config", read_document(path))?;
        self.load_attachment_config_str(&text)
    }

    /// Embedded sprites load only while the rig has none, embedded bones only
    /// while it has none; instances always merge.
    pub fn load_attachment_config_str(&mut self, text: &str) -> Result<LoadReport> {
        let doc: AttachmentConfigDoc =
            logged("attachment config", parse_document("attachment config", text))?;
        let mut report = LoadReport::default();

        if self.sprites.is_empty() {
            if !doc.sprite_sheet_path.is_empty() {
                self.load_sheet(&doc.sprite_sheet_path);
            }
            self.install_sprites(doc.sprites, &mut report);
        }
        if self.bones.is_empty() {
            logged("attachment config", self.install_bones(doc.bones, &mut report))?;
        }
        self.install_instances(doc.sprite_instances, true, &mut report);
        info!(
            "Loaded attachment config: {} sprite instances",
            self.instances.len()
        );
        Ok(report)
    }

    // ----- animation -----

    pub fn load_animation(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("Loading animation from: {}", path.display());
        let text = logged("animation", read_document(path))?;
        self.load_animation_str(&text)
    }

    pub fn load_animation_str(&mut self, text: &str) -> Result<LoadReport> {
        let doc: AnimationDoc = logged("animation", parse_document("animation", text))?;
        let mut report = LoadReport {
            keyframes: doc.keyframe_count(),
            ..LoadReport::default()
        };
        if let Some(d) = doc.duration {
            self.clock.duration = d;
        }
        if let Some(fps) = doc.fps {
            self.clock.fps = fps;
        }
        self.install_instances(doc.sprite_instances, false, &mut report);
        for (bone_name, track_doc) in doc.animation_tracks {
            if !self.bones.contains(&bone_name) {
                debug!("Track for unknown bone {bone_name} will be ignored");
            }
            let track = track_doc.into_track(&bone_name);
            debug!(
                "Loaded animation track for {bone_name}: {} keyframes",
                track.len()
            );
            self.tracks.insert(bone_name, track);
            report.tracks += 1;
        }
        info!(
            "Loaded animation: {}s @ {} fps, {} tracks, {} keyframes",
            self.clock.duration, self.clock.fps, report.tracks, report.keyframes
        );
        Ok(report)
    }

    // ----- installers -----

    /// Drop the regions of sprites a document is about to replace, before the
    /// sheet they were cut from is swapped out.
    fn release_replaced<'n>(&mut self, names: impl Iterator<Item = &'n String>) {
        for name in names {
            if let Some(sprite) = self.sprites.get_mut(name) {
                sprite.region = None;
            }
        }
    }

    /// Acquire the sheet at `path`. A failed load keeps any previous sheet.
    fn load_sheet(&mut self, path: &str) {
        if path.is_empty() {
            warn!("No sprite sheet path given");
            return;
        }
        match self.backend.load_sheet(path) {
            Some(sheet) => {
                let (w, h) = self.backend.sheet_size(&sheet);
                info!("Sprite sheet loaded: {path} ({w}x{h})");
                self.sheet = Some(sheet);
                self.sheet_path = path.to_string();
            }
            None => warn!("Sprite sheet not found: {path}"),
        }
    }

    fn install_sprites(&mut self, docs: IndexMap<String, SpriteDoc>, report: &mut LoadReport) {
        for (name, doc) in docs {
            let mut sprite = Sprite::new(name.as_str(), doc.rect());
            sprite.origin_x = doc.origin_x;
            sprite.origin_y = doc.origin_y;
            sprite.region = self.extract_region(&sprite);
            if sprite.region.is_some() {
                report.sprites_renderable += 1;
            }
            report.sprites += 1;
            self.sprites.insert(name, sprite);
        }
        info!(
            "Loaded {} sprite definitions, {} extracted successfully",
            report.sprites, report.sprites_renderable
        );
    }

    fn extract_region(&mut self, sprite: &Sprite<B::Region>) -> Option<B::Region> {
        let missing = |reason: String| {
            warn!(
                "{}",
                RigError::MissingResource {
                    sprite: sprite.name.clone(),
                    reason,
                }
            );
        };
        let Some(sheet) = self.sheet.as_ref() else {
            missing("no sprite sheet loaded".into());
            return None;
        };
        let (w, h) = self.backend.sheet_size(sheet);
        let r = sprite.rect;
        if !r.fits_within(w, h) {
            missing(format!(
                "bounds ({}, {}, {}, {}) are outside sprite sheet bounds (0, 0, {w}, {h})",
                r.x, r.y, r.width, r.height
            ));
            return None;
        }
        match self.backend.extract_region(sheet, r) {
            Some(region) => {
                debug!(
                    "Extracted sprite {}: {}x{} at ({}, {})",
                    sprite.name, r.width, r.height, r.x, r.y
                );
                Some(region)
            }
            None => {
                missing("backend could not extract region".into());
                None
            }
        }
    }

    /// Merge bone docs into the current set and rebuild the graph. On error
    /// the previous graph is kept.
    fn install_bones(
        &mut self,
        docs: IndexMap<String, BoneDoc>,
        report: &mut LoadReport,
    ) -> Result<()> {
        report.bones = docs.len();
        let mut merged: IndexMap<String, Bone> = self
            .bones
            .iter()
            .map(|b| (b.name().to_string(), b.clone()))
            .collect();
        for (name, doc) in docs {
            let bone = doc.into_bone(&name);
            merged.insert(name, bone);
        }
        self.set_bones(merged.into_values())?;
        info!("Loaded {} bones", self.bones.len());
        Ok(())
    }

    /// Add instances; with `replace` unset, ids already present are kept.
    fn install_instances(
        &mut self,
        docs: IndexMap<String, SpriteInstanceDoc>,
        replace: bool,
        report: &mut LoadReport,
    ) {
        for (id, doc) in docs {
            if !replace && self.instances.contains_key(&id) {
                continue;
            }
            let inst = doc.into_instance(&id);
            debug!(
                "Loaded sprite instance: {id} ({} -> {})",
                inst.sprite_name, inst.bone_name
            );
            self.instances.insert(id, inst);
            report.instances += 1;
        }
    }
}
