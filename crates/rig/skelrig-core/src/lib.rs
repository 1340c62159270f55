//! Skelrig Core (renderer-agnostic)
//!
//! Forward evaluation of 2D skeletal rigs: sprites cut from a shared sheet are
//! attached to bones, bones form a parent hierarchy, and keyframe tracks drive
//! the bones over a looping clock. Each tick yields draw instructions for a
//! host renderer. Image decoding and presentation stay on the host side
//! behind [`ImageBackend`].

pub mod bones;
pub mod clock;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod inputs;
pub mod interp;
pub mod loader;
pub mod outputs;
pub mod rig;
pub mod sampling;
pub mod sprites;
pub mod transform;

// Re-exports for consumers (hosts)
pub use bones::{AttachmentPoint, Bone, BoneGraph, BoneLayer};
pub use clock::Clock;
pub use config::{Extrapolation, RigConfig, ScaleMode};
pub use diagnostics::RigSummary;
pub use error::{Result, RigError};
pub use inputs::PlaybackCommand;
pub use interp::Easing;
pub use loader::LoadReport;
pub use outputs::{BoneSegment, DrawInstruction};
pub use rig::Rig;
pub use sampling::{Keyframe, KeyframeTrack};
pub use sprites::{HeadlessBackend, ImageBackend, SourceRect, Sprite, SpriteInstance};
pub use transform::Transform;
