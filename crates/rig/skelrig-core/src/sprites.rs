//! Sprite registry data, sprite-to-bone attachments and the image backend seam.
//!
//! Image decoding and GPU upload belong to the host. The host implements
//! [`ImageBackend`]; the rig owns what the backend hands out (the sheet and one
//! region per sprite) and releases it by dropping it.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Pixel rectangle in the shared source sheet.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SourceRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SourceRect {
    /// Non-empty and fully inside a `sheet_w` x `sheet_h` image.
    pub fn fits_within(&self, sheet_w: u32, sheet_h: u32) -> bool {
        let (w, h) = (i64::from(sheet_w), i64::from(sheet_h));
        self.x >= 0
            && self.y >= 0
            && self.width > 0
            && self.height > 0
            && i64::from(self.x) + i64::from(self.width) <= w
            && i64::from(self.y) + i64::from(self.height) <= h
    }
}

/// Host image services used while loading sprite projects.
pub trait ImageBackend {
    /// Decoded source sheet.
    type Sheet;
    /// Renderable image extracted from a sheet region.
    type Region;

    fn load_sheet(&mut self, path: &str) -> Option<Self::Sheet>;
    fn sheet_size(&self, sheet: &Self::Sheet) -> (u32, u32);
    /// Called only with rects already checked against `sheet_size`.
    fn extract_region(&mut self, sheet: &Self::Sheet, rect: SourceRect) -> Option<Self::Region>;
}

/// Geometry-only backend: sheets are registered sizes, regions are their rects.
#[derive(Clone, Debug, Default)]
pub struct HeadlessBackend {
    sheets: HashMap<String, (u32, u32)>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, path: impl Into<String>, width: u32, height: u32) -> Self {
        self.sheets.insert(path.into(), (width, height));
        self
    }
}

impl ImageBackend for HeadlessBackend {
    type Sheet = (u32, u32);
    type Region = SourceRect;

    fn load_sheet(&mut self, path: &str) -> Option<(u32, u32)> {
        self.sheets.get(path).copied()
    }

    fn sheet_size(&self, sheet: &(u32, u32)) -> (u32, u32) {
        *sheet
    }

    fn extract_region(&mut self, _sheet: &(u32, u32), rect: SourceRect) -> Option<SourceRect> {
        Some(rect)
    }
}

/// Named region of the source sheet plus its pivot.
#[derive(Debug)]
pub struct Sprite<R> {
    pub name: String,
    pub rect: SourceRect,
    /// Pivot as fractions of width/height.
    pub origin_x: f32,
    pub origin_y: f32,
    /// `None` when the sheet or region was unavailable; such sprites are not drawn.
    pub region: Option<R>,
}

impl<R> Sprite<R> {
    pub fn new(name: impl Into<String>, rect: SourceRect) -> Self {
        Self {
            name: name.into(),
            rect,
            origin_x: 0.5,
            origin_y: 0.5,
            region: None,
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.region.is_some()
    }
}

/// A sprite bound to a bone with a local offset, rotation and scale.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpriteInstance {
    pub id: String,
    pub sprite_name: String,
    /// Empty when unbound.
    pub bone_name: String,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale: f32,
}

impl SpriteInstance {
    pub fn new(
        id: impl Into<String>,
        sprite_name: impl Into<String>,
        bone_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sprite_name: sprite_name.into(),
            bone_name: bone_name.into(),
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}
