use std::collections::BTreeMap;

use crate::assets::texture::TextureHandle;
use crate::foundation::core::Vec3;
use crate::foundation::error::SceneResult;
use crate::scene::environment::{Lighting, SkyParams, WaterParams};

/// Handle to a node attached to a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

/// Primitive handed to the renderer at attach time.
#[derive(Clone, Debug)]
pub enum Renderable {
    /// Reflective water plane.
    Water {
        /// Material parameters.
        params: WaterParams,
        /// Normal map (repeat-wrapped).
        normals: TextureHandle,
    },
    /// Scattering sky dome.
    Sky(SkyParams),
    /// Ambient + point light rig.
    Lights(Lighting),
    /// Unit box drawn with a texture.
    FloatingObject {
        /// Index in the scene object model.
        index: usize,
        /// Rest position.
        position: Vec3,
        /// Material texture.
        texture: TextureHandle,
    },
}

/// Per-frame value pushed to an attached node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeUpdate {
    /// New object transform.
    Transform {
        /// World position.
        position: Vec3,
        /// Euler rotation (radians).
        rotation: Vec3,
        /// Uniform scale.
        scale: f64,
    },
    /// New water time uniform.
    SurfaceTime(f64),
}

/// Scene-graph collaborator provided by the renderer.
///
/// Ordering contract: within one frame, updates arrive in object-model order followed by the
/// surface update.
pub trait SceneGraph {
    /// Insert a primitive and return its handle.
    fn attach(&mut self, renderable: Renderable) -> SceneResult<NodeId>;
    /// Push a per-frame value to `id`.
    fn update(&mut self, id: NodeId, update: NodeUpdate);
    /// Remove `id`. Returns `false` if it was not attached.
    fn detach(&mut self, id: NodeId) -> bool;
}

/// In-memory scene graph for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSceneGraph {
    next_id: u64,
    nodes: BTreeMap<NodeId, Renderable>,
    latest: BTreeMap<NodeId, NodeUpdate>,
    /// Total updates received.
    pub updates: u64,
    /// Nodes detached, in detach order.
    pub detached: Vec<NodeId>,
}

impl RecordingSceneGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently attached nodes.
    pub fn nodes(&self) -> &BTreeMap<NodeId, Renderable> {
        &self.nodes
    }

    /// Number of currently attached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Most recent update pushed to `id`.
    pub fn latest(&self, id: NodeId) -> Option<NodeUpdate> {
        self.latest.get(&id).copied()
    }
}

impl SceneGraph for RecordingSceneGraph {
    fn attach(&mut self, renderable: Renderable) -> SceneResult<NodeId> {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, renderable);
        Ok(id)
    }

    fn update(&mut self, id: NodeId, update: NodeUpdate) {
        if self.nodes.contains_key(&id) {
            self.latest.insert(id, update);
            self.updates += 1;
        }
    }

    fn detach(&mut self, id: NodeId) -> bool {
        self.latest.remove(&id);
        let existed = self.nodes.remove(&id).is_some();
        if existed {
            self.detached.push(id);
        }
        existed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
