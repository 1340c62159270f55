//! Bone hierarchy and world transform propagation.
//!
//! Bones are keyed by name and linked through parent names. The graph computes a
//! parent-before-child order once, when it is built, and rejects unknown parents
//! and cycles there. Recomputing world transforms is then a single pass over that
//! order with no parent lookups by name.

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::{Result, RigError};
use crate::outputs::BoneSegment;

/// Where on the parent a child's origin is anchored.
///
/// Documents spell these `start` and `end`; anything else reads as `End`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum AttachmentPoint {
    /// Parent pivot.
    Start,
    /// Tip of the parent's segment.
    #[default]
    End,
}

impl AttachmentPoint {
    pub fn name(self) -> &'static str {
        match self {
            AttachmentPoint::Start => "start",
            AttachmentPoint::End => "end",
        }
    }
}

impl From<String> for AttachmentPoint {
    fn from(s: String) -> Self {
        match s.as_str() {
            "start" => AttachmentPoint::Start,
            "end" => AttachmentPoint::End,
            other => {
                warn!("Unknown attachment point value '{other}', defaulting to end");
                AttachmentPoint::End
            }
        }
    }
}

impl From<AttachmentPoint> for String {
    fn from(p: AttachmentPoint) -> Self {
        p.name().to_string()
    }
}

/// Coarse draw layer of a bone's attachments.
///
/// Documents spell these `behind`, `middle` and `front`; anything else reads
/// as `Middle`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "String", into = "String")]
pub enum BoneLayer {
    Behind,
    #[default]
    Middle,
    Front,
}

impl BoneLayer {
    pub fn name(self) -> &'static str {
        match self {
            BoneLayer::Behind => "behind",
            BoneLayer::Middle => "middle",
            BoneLayer::Front => "front",
        }
    }
}

impl From<String> for BoneLayer {
    fn from(s: String) -> Self {
        match s.as_str() {
            "behind" => BoneLayer::Behind,
            "middle" => BoneLayer::Middle,
            "front" => BoneLayer::Front,
            other => {
                warn!("Unknown layer value '{other}', defaulting to middle");
                BoneLayer::Middle
            }
        }
    }
}

impl From<BoneLayer> for String {
    fn from(l: BoneLayer) -> Self {
        l.name().to_string()
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Bone {
    name: String,
    parent: Option<String>,
    pub x: f32,
    pub y: f32,
    pub length: f32,
    /// Degrees.
    pub angle: f32,
    pub parent_attachment_point: AttachmentPoint,
    /// Informational only; the graph walks parent links.
    pub children: Vec<String>,
    pub layer: BoneLayer,
    pub layer_order: i32,

    pub world_x: f32,
    pub world_y: f32,
    pub world_rotation: f32,
    pub world_scale: f32,
}

impl Bone {
    /// New bone with its world pose initialised from the local pose.
    /// An empty parent name means root.
    pub fn new(
        name: impl Into<String>,
        parent: Option<String>,
        x: f32,
        y: f32,
        length: f32,
        angle: f32,
    ) -> Self {
        Self {
            name: name.into(),
            parent: parent.filter(|p| !p.is_empty()),
            x,
            y,
            length,
            angle,
            parent_attachment_point: AttachmentPoint::default(),
            children: Vec::new(),
            layer: BoneLayer::default(),
            layer_order: 0,
            world_x: x,
            world_y: y,
            world_rotation: angle,
            world_scale: 1.0,
        }
    }

    pub fn with_attachment(mut self, point: AttachmentPoint) -> Self {
        self.parent_attachment_point = point;
        self
    }

    pub fn with_layer(mut self, layer: BoneLayer, order: i32) -> Self {
        self.layer = layer;
        self.layer_order = order;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// World position of the segment tip.
    pub fn world_tip(&self) -> (f32, f32) {
        let rad = self.world_rotation.to_radians();
        (
            self.world_x + self.length * rad.cos(),
            self.world_y + self.length * rad.sin(),
        )
    }
}

/// Named bones plus a precomputed parent-before-child evaluation order.
#[derive(Clone, Debug, Default)]
pub struct BoneGraph {
    bones: IndexMap<String, Bone>,
    parent_idx: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl BoneGraph {
    /// Build the graph, rejecting unknown parents and parent cycles.
    pub fn new(bones: impl IntoIterator<Item = Bone>) -> Result<Self> {
        let bones: IndexMap<String, Bone> = bones
            .into_iter()
            .map(|b| (b.name.clone(), b))
            .collect();

        let mut parent_idx = Vec::with_capacity(bones.len());
        for bone in bones.values() {
            match bone.parent() {
                None => parent_idx.push(None),
                Some(p) => match bones.get_index_of(p) {
                    Some(i) => parent_idx.push(Some(i)),
                    None => {
                        return Err(RigError::UnknownParent {
                            bone: bone.name.clone(),
                            parent: p.to_string(),
                        })
                    }
                },
            }
        }

        let order = topo_order(&parent_idx).map_err(|stuck| RigError::ConfigurationCycle {
            bones: cycle_path(&parent_idx, stuck)
                .into_iter()
                .map(|i| bones[i].name.clone())
                .collect(),
        })?;

        Ok(Self {
            bones,
            parent_idx,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Bone> {
        self.bones.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Bone> {
        self.bones.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bones.contains_key(name)
    }

    /// Bones in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Bone> {
        self.bones.values()
    }

    /// Bone names in evaluation order (every parent precedes its children).
    pub fn evaluation_order(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|&i| self.bones[i].name.as_str())
    }

    /// Recompute every bone's world pose from its local pose and its parent.
    ///
    /// Roots copy position and angle; `world_scale` is left untouched. Children
    /// attach at the parent's pivot or tip, add their local offset unrotated, and
    /// add their angle to the parent's world rotation.
    pub fn recompute_world_transforms(&mut self) {
        for &i in &self.order {
            let anchor = self.parent_idx[i].map(|p| {
                let parent = &self.bones[p];
                (parent.world_x, parent.world_y, parent.world_rotation, parent.length)
            });
            let bone = &mut self.bones[i];
            match anchor {
                None => {
                    bone.world_x = bone.x;
                    bone.world_y = bone.y;
                    bone.world_rotation = bone.angle;
                }
                Some((px, py, prot, plen)) => {
                    let (ax, ay) = match bone.parent_attachment_point {
                        AttachmentPoint::Start => (px, py),
                        AttachmentPoint::End => {
                            let rad = prot.to_radians();
                            (px + plen * rad.cos(), py + plen * rad.sin())
                        }
                    };
                    bone.world_x = ax + bone.x;
                    bone.world_y = ay + bone.y;
                    bone.world_rotation = prot + bone.angle;
                }
            }
        }
    }

    /// World-space segment of every bone, for skeleton overlays.
    pub fn segments(&self) -> Vec<BoneSegment> {
        self.bones
            .values()
            .map(|b| {
                let (end_x, end_y) = b.world_tip();
                BoneSegment {
                    bone: b.name.clone(),
                    start: [b.world_x, b.world_y],
                    end: [end_x, end_y],
                }
            })
            .collect()
    }
}

/// Kahn's algorithm over parent links. On failure returns a bone index that is
/// on, or downstream of, a cycle.
fn topo_order(parent_idx: &[Option<usize>]) -> std::result::Result<Vec<usize>, usize> {
    let mut indeg: Vec<usize> = vec![0; parent_idx.len()];
    let mut adj: HashMap<usize, Vec<usize>> = HashMap::new();
    for (child, parent) in parent_idx.iter().enumerate() {
        if let Some(p) = *parent {
            adj.entry(p).or_default().push(child);
            indeg[child] += 1;
        }
    }

    let mut q: VecDeque<usize> = (0..parent_idx.len()).filter(|&i| indeg[i] == 0).collect();
    let mut order = Vec::with_capacity(parent_idx.len());
    while let Some(u) = q.pop_front() {
        order.push(u);
        if let Some(vs) = adj.get(&u) {
            for &v in vs {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    q.push_back(v);
                }
            }
        }
    }

    if order.len() != parent_idx.len() {
        let stuck = (0..parent_idx.len())
            .find(|&i| indeg[i] > 0)
            .unwrap_or_default();
        return Err(stuck);
    }
    Ok(order)
}

/// Follow parent links from `start` until a bone repeats; returns the loop,
/// closed with its first bone.
fn cycle_path(parent_idx: &[Option<usize>], start: usize) -> Vec<usize> {
    let mut seen = vec![false; parent_idx.len()];
    let mut cur = start;
    while !seen[cur] {
        seen[cur] = true;
        match parent_idx[cur] {
            Some(p) => cur = p,
            None => return vec![start],
        }
    }
    let mut path = vec![cur];
    let mut next = parent_idx[cur];
    while let Some(n) = next {
        path.push(n);
        if n == cur {
            break;
        }
        next = parent_idx[n];
    }
    path
}
