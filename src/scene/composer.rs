use std::collections::VecDeque;

use crate::assets::texture::{TextureHandle, TextureLoader, WrapMode, load_with_policy};
use crate::config::SceneConfig;
use crate::foundation::core::{FrameTick, Point, Vec3};
use crate::foundation::error::SceneResult;
use crate::input::{HitRegions, PointerEvent, PointerTarget, PointerTracker};
use crate::overlay::motion::{ButtonPointer, OverlayMotion, OverlaySnapshot};
use crate::scene::environment::{Lighting, SkyParams, WaterParams};
use crate::scene::float::{FloatMotion, ObjectTransformState};
use crate::scene::graph::{NodeId, NodeUpdate, Renderable, SceneGraph};
use crate::scene::object::{FloatingObjectDescriptor, SceneObjectModel};
use crate::scene::surface::{SurfaceAnimator, SurfaceUniformState};

/// One floating object in a [`FrameSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectSnapshot {
    /// Index in the object model.
    pub index: usize,
    /// Transform state.
    pub state: ObjectTransformState,
    /// Uniform render scale.
    pub scale: f64,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    /// Frames processed so far (1 after the first frame).
    pub frame: u64,
    /// Tick that produced this snapshot.
    pub tick: FrameTick,
    /// Floating objects in identity order.
    pub objects: Vec<ObjectSnapshot>,
    /// Water time uniform.
    pub surface: SurfaceUniformState,
    /// Overlay values.
    pub overlay: OverlaySnapshot,
}

/// What [`SeaScene::unmount`] released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Teardown {
    /// Nodes detached from the scene graph.
    pub detached: usize,
    /// Nodes the graph no longer knew about.
    pub missing: usize,
    /// Frames processed over the session.
    pub frames: u64,
}

#[derive(Debug, Default)]
struct SceneNodes {
    water: Option<NodeId>,
    sky: Option<NodeId>,
    lights: Option<NodeId>,
    objects: Vec<NodeId>,
}

impl SceneNodes {
    fn all(&self) -> Vec<NodeId> {
        self.objects
            .iter()
            .rev()
            .copied()
            .chain(self.lights)
            .chain(self.sky)
            .chain(self.water)
            .collect()
    }
}

/// The mounted scene: owns every piece of per-frame state and every scene-graph node it attached.
///
/// Lifecycle is explicit: [`SeaScene::mount`] attaches, [`SeaScene::frame`] advances, and
/// [`SeaScene::unmount`] detaches. Pointer input is queued and applied at the start of the next
/// frame.
#[derive(Debug)]
pub struct SeaScene {
    model: SceneObjectModel,
    states: Vec<ObjectTransformState>,
    motion: FloatMotion,
    surface_animator: SurfaceAnimator,
    surface: SurfaceUniformState,
    overlay: OverlayMotion,
    pointer: PointerTracker,
    pending: VecDeque<PointerEvent>,
    nodes: SceneNodes,
    last_tick: FrameTick,
    frames: u64,
}

impl SeaScene {
    /// Mount the stock scene (no configuration).
    pub fn mount_default(
        loader: &mut dyn TextureLoader,
        graph: &mut dyn SceneGraph,
    ) -> SceneResult<Self> {
        Self::mount(&SceneConfig::default(), loader, graph)
    }

    /// Validate `config`, load textures, attach primitives, and start the overlay.
    ///
    /// Textures are loaded before anything is attached. If attaching fails part-way, the nodes
    /// attached so far are detached again before the error is returned.
    #[tracing::instrument(skip_all, fields(objects = config.objects.len()))]
    pub fn mount(
        config: &SceneConfig,
        loader: &mut dyn TextureLoader,
        graph: &mut dyn SceneGraph,
    ) -> SceneResult<Self> {
        config.validate()?;
        let policy = config.asset_policy;

        let normals = load_with_policy(
            loader,
            &config.water.normals_texture,
            WrapMode::Repeat,
            policy,
        )?;
        let mut descriptors = Vec::with_capacity(config.objects.len());
        for o in &config.objects {
            let tex = load_with_policy(loader, &o.texture, WrapMode::Clamp, policy)?;
            descriptors.push(FloatingObjectDescriptor::new(o.position, tex));
        }
        let model = SceneObjectModel::new(descriptors);

        let mut nodes = SceneNodes::default();
        if let Err(e) = attach_all(
            graph,
            &mut nodes,
            &config.water,
            normals,
            &config.sky,
            &config.lighting,
            &model,
        ) {
            let rolled_back = nodes.all();
            tracing::warn!(error = %e, nodes = rolled_back.len(), "attach failed; rolling back");
            for id in rolled_back {
                graph.detach(id);
            }
            return Err(e);
        }

        let mut overlay = OverlayMotion::new(&config.overlay)?;
        overlay.mount(0.0);

        let states = model
            .objects()
            .iter()
            .map(ObjectTransformState::at_rest)
            .collect();

        tracing::info!(
            nodes = nodes.all().len(),
            placeholders = model
                .objects()
                .iter()
                .filter(|o| o.visual().is_placeholder())
                .count(),
            "scene mounted"
        );

        Ok(Self {
            model,
            states,
            motion: config.motion.clone(),
            surface_animator: config.surface.clone(),
            surface: SurfaceUniformState::default(),
            overlay,
            pointer: PointerTracker::default(),
            pending: VecDeque::new(),
            nodes,
            last_tick: FrameTick::default(),
            frames: 0,
        })
    }

    /// Queue a targeted pointer event for the next frame.
    pub fn queue_pointer(&mut self, ev: PointerEvent) {
        self.pending.push_back(ev);
    }

    /// Replace the screen-space hit regions published by the renderer.
    pub fn set_hit_regions(&mut self, regions: HitRegions) {
        let evs = self.pointer.set_regions(regions);
        self.pending.extend(evs);
    }

    /// Raw pointer moved to `p` (screen space).
    pub fn pointer_moved(&mut self, p: Point) {
        let evs = self.pointer.move_to(p);
        self.pending.extend(evs);
    }

    /// Raw pointer pressed at `p`.
    pub fn pointer_down(&mut self, p: Point) {
        let evs = self.pointer.down(p);
        self.pending.extend(evs);
    }

    /// Raw pointer released at `p`.
    pub fn pointer_up(&mut self, p: Point) {
        let evs = self.pointer.up(p);
        self.pending.extend(evs);
    }

    /// Raw pointer left the viewport.
    pub fn pointer_left(&mut self) {
        let evs = self.pointer.leave();
        self.pending.extend(evs);
    }

    /// Platform cancelled the active press.
    pub fn pointer_cancelled(&mut self) {
        let evs = self.pointer.cancel();
        self.pending.extend(evs);
    }

    /// Advance everything by one frame and push the results to `graph`.
    pub fn frame(&mut self, tick: FrameTick, graph: &mut dyn SceneGraph) -> FrameSnapshot {
        while let Some(ev) = self.pending.pop_front() {
            self.apply_pointer(ev);
        }

        for ((state, base), id) in self
            .states
            .iter_mut()
            .zip(self.model.objects())
            .zip(&self.nodes.objects)
        {
            *state = self.motion.advance(state, base, tick.elapsed, tick.delta);
            graph.update(
                *id,
                NodeUpdate::Transform {
                    position: state.position,
                    rotation: Vec3::new(state.rotation_x, state.rotation_y, 0.0),
                    scale: self.motion.scale(state),
                },
            );
        }

        self.surface = self.surface_animator.advance(self.surface, tick.delta);
        if let Some(water) = self.nodes.water {
            graph.update(water, NodeUpdate::SurfaceTime(self.surface.time));
        }

        self.overlay.tick(tick.elapsed);

        self.last_tick = tick;
        self.frames += 1;
        tracing::trace!(frame = self.frames, elapsed = tick.elapsed, "frame");
        self.snapshot()
    }

    fn apply_pointer(&mut self, ev: PointerEvent) {
        match ev {
            PointerEvent::Enter(PointerTarget::Object(i)) => self.set_hovered(i, true),
            PointerEvent::Leave(PointerTarget::Object(i)) => self.set_hovered(i, false),
            PointerEvent::Down(PointerTarget::Object(_))
            | PointerEvent::Up(PointerTarget::Object(_)) => {}
            PointerEvent::Enter(PointerTarget::Button) => {
                self.overlay.pointer(ButtonPointer::Enter)
            }
            PointerEvent::Leave(PointerTarget::Button) => {
                self.overlay.pointer(ButtonPointer::Leave)
            }
            PointerEvent::Down(PointerTarget::Button) => self.overlay.pointer(ButtonPointer::Down),
            PointerEvent::Up(PointerTarget::Button) => self.overlay.pointer(ButtonPointer::Up),
            PointerEvent::Cancel => self.overlay.pointer(ButtonPointer::Cancel),
        }
    }

    fn set_hovered(&mut self, index: usize, hovered: bool) {
        match self.states.get_mut(index) {
            Some(s) => s.hovered = hovered,
            None => tracing::debug!(index, "pointer event for unknown object"),
        }
    }

    /// Serializable view of the last processed frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frames,
            tick: self.last_tick,
            objects: self
                .states
                .iter()
                .enumerate()
                .map(|(index, state)| ObjectSnapshot {
                    index,
                    state: *state,
                    scale: self.motion.scale(state),
                })
                .collect(),
            surface: self.surface,
            overlay: self.overlay.snapshot(),
        }
    }

    /// Floating object descriptors.
    pub fn model(&self) -> &SceneObjectModel {
        &self.model
    }

    /// Per-object transform states.
    pub fn object_states(&self) -> &[ObjectTransformState] {
        &self.states
    }

    /// Water time uniform.
    pub fn surface(&self) -> SurfaceUniformState {
        self.surface
    }

    /// Overlay state machine.
    pub fn overlay(&self) -> &OverlayMotion {
        &self.overlay
    }

    /// Nodes this scene attached, in detach order.
    pub fn attached_nodes(&self) -> Vec<NodeId> {
        self.nodes.all()
    }

    /// Stop the overlay timelines and detach every node this scene attached.
    pub fn unmount(mut self, graph: &mut dyn SceneGraph) -> Teardown {
        self.overlay.unmount();
        let mut out = Teardown {
            frames: self.frames,
            ..Teardown::default()
        };
        for id in self.nodes.all() {
            if graph.detach(id) {
                out.detached += 1;
            } else {
                out.missing += 1;
            }
        }
        tracing::info!(
            detached = out.detached,
            missing = out.missing,
            frames = out.frames,
            "scene unmounted"
        );
        out
    }
}

fn attach_all(
    graph: &mut dyn SceneGraph,
    nodes: &mut SceneNodes,
    water: &WaterParams,
    normals: TextureHandle,
    sky: &SkyParams,
    lighting: &Lighting,
    model: &SceneObjectModel,
) -> SceneResult<()> {
    nodes.water = Some(graph.attach(Renderable::Water {
        params: water.clone(),
        normals,
    })?);
    nodes.sky = Some(graph.attach(Renderable::Sky(sky.clone()))?);
    nodes.lights = Some(graph.attach(Renderable::Lights(lighting.clone()))?);
    for (index, o) in model.objects().iter().enumerate() {
        let id = graph.attach(Renderable::FloatingObject {
            index,
            position: o.base_position(),
            texture: o.visual().clone(),
        })?;
        nodes.objects.push(id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
