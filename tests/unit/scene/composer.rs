use super::*;
use crate::foundation::error::SceneError;
use crate::overlay::motion::OverlayPhase;
use crate::scene::graph::RecordingSceneGraph;

/// Loader that hands out placeholders for known paths and fails otherwise.
#[derive(Default)]
struct StubLoader {
    missing: Vec<String>,
    calls: usize,
}

impl TextureLoader for StubLoader {
    fn load(&mut self, path: &str, wrap: WrapMode) -> SceneResult<TextureHandle> {
        self.calls += 1;
        if self.missing.iter().any(|m| m == path) {
            return Err(SceneError::asset_load(path, "not found"));
        }
        TextureHandle::from_rgba8(path, 1, 1, vec![200, 150, 100, 255], wrap)
    }
}

/// Graph that refuses to attach after `limit` nodes.
struct FlakyGraph {
    inner: RecordingSceneGraph,
    limit: usize,
}

impl SceneGraph for FlakyGraph {
    fn attach(&mut self, renderable: Renderable) -> SceneResult<NodeId> {
        if self.inner.len() >= self.limit {
            return Err(SceneError::validation("renderer out of slots"));
        }
        self.inner.attach(renderable)
    }

    fn update(&mut self, id: NodeId, update: NodeUpdate) {
        self.inner.update(id, update);
    }

    fn detach(&mut self, id: NodeId) -> bool {
        self.inner.detach(id)
    }
}

fn mounted() -> (SeaScene, RecordingSceneGraph) {
    let mut graph = RecordingSceneGraph::new();
    let scene = SeaScene::mount_default(&mut StubLoader::default(), &mut graph).unwrap();
    (scene, graph)
}

fn run(scene: &mut SeaScene, graph: &mut RecordingSceneGraph, from: u32, to: u32) {
    for i in from..=to {
        let elapsed = f64::from(i) / 60.0;
        let delta = if i == 0 { 0.0 } else { 1.0 / 60.0 };
        scene.frame(FrameTick::new(elapsed, delta), graph);
    }
}

#[test]
fn mount_attaches_environment_and_objects() {
    let (scene, graph) = mounted();
    // water + sky + lights + three objects
    assert_eq!(graph.len(), 6);
    assert_eq!(scene.attached_nodes().len(), 6);
    assert_eq!(scene.model().len(), 3);
    assert_eq!(scene.overlay().phase(), OverlayPhase::FadingIn);

    let objects = graph
        .nodes()
        .values()
        .filter(|r| matches!(r, Renderable::FloatingObject { .. }))
        .count();
    assert_eq!(objects, 3);
    let water_wrap = graph.nodes().values().find_map(|r| match r {
        Renderable::Water { normals, .. } => Some(normals.wrap()),
        _ => None,
    });
    assert_eq!(water_wrap, Some(WrapMode::Repeat));
}

#[test]
fn frame_pushes_transforms_and_surface_time() {
    let (mut scene, mut graph) = mounted();
    run(&mut scene, &mut graph, 0, 60);

    let snap = scene.snapshot();
    assert_eq!(snap.frame, 61);
    assert!((snap.surface.time - 0.5).abs() < 1e-9);
    // 61 frames * (3 objects + water)
    assert_eq!(graph.updates, 61 * 4);

    let first_object = scene.attached_nodes()[2];
    let Some(NodeUpdate::Transform {
        position, scale, ..
    }) = graph.latest(first_object)
    else {
        panic!("expected transform update");
    };
    assert_eq!(scale, 1.0);
    assert!((position.y - 1.0f64.sin() * 0.1).abs() < 1e-9);
}

#[test]
fn pointer_toggles_hover_without_touching_accumulators() {
    let (mut scene, mut graph) = mounted();
    run(&mut scene, &mut graph, 0, 30);
    let before = scene.object_states()[1];

    scene.queue_pointer(PointerEvent::Enter(PointerTarget::Object(1)));
    let snap = scene.frame(FrameTick::new(31.0 / 60.0, 0.0), &mut graph);
    assert!(snap.objects[1].state.hovered);
    assert_eq!(snap.objects[1].scale, 1.1);
    assert!(!snap.objects[0].state.hovered);
    assert_eq!(snap.objects[1].state.rotation_x, before.rotation_x);
    assert_eq!(snap.objects[1].state.rotation_y, before.rotation_y);

    scene.queue_pointer(PointerEvent::Leave(PointerTarget::Object(1)));
    let snap = scene.frame(FrameTick::new(31.0 / 60.0, 0.0), &mut graph);
    assert!(!snap.objects[1].state.hovered);
    assert_eq!(snap.objects[1].scale, 1.0);
    assert_eq!(snap.objects[1].state.rotation_x, before.rotation_x);
}

#[test]
fn unknown_object_index_is_ignored() {
    let (mut scene, mut graph) = mounted();
    scene.queue_pointer(PointerEvent::Enter(PointerTarget::Object(42)));
    let snap = scene.frame(FrameTick::new(0.0, 0.0), &mut graph);
    assert!(snap.objects.iter().all(|o| !o.state.hovered));
}

#[test]
fn raw_pointer_routes_through_hit_regions() {
    let (mut scene, mut graph) = mounted();
    let mut regions = HitRegions::new();
    regions.set(
        PointerTarget::Object(0),
        crate::foundation::core::Rect::new(0.0, 0.0, 50.0, 50.0),
    );
    regions.set(
        PointerTarget::Button,
        crate::foundation::core::Rect::new(100.0, 100.0, 200.0, 140.0),
    );
    scene.set_hit_regions(regions);

    scene.pointer_moved(Point::new(10.0, 10.0));
    let snap = scene.frame(FrameTick::new(0.0, 0.0), &mut graph);
    assert!(snap.objects[0].state.hovered);

    scene.pointer_down(Point::new(150.0, 120.0));
    let snap = scene.frame(FrameTick::new(0.1, 0.1), &mut graph);
    assert!(!snap.objects[0].state.hovered);
    assert!(snap.overlay.state.is_hovered);
    assert!(snap.overlay.state.is_pressed);
    assert_eq!(snap.overlay.button_scale, 0.95);

    scene.pointer_cancelled();
    scene.pointer_left();
    let snap = scene.frame(FrameTick::new(0.2, 0.1), &mut graph);
    assert!(!snap.overlay.state.is_pressed);
    assert!(!snap.overlay.state.is_hovered);
    assert_eq!(snap.overlay.button_scale, 1.0);
}

#[test]
fn overlay_reaches_idle_with_the_scene_clock() {
    let (mut scene, mut graph) = mounted();
    run(&mut scene, &mut graph, 0, 120);
    let o = scene.snapshot().overlay;
    assert_eq!(o.phase, OverlayPhase::Idle);
    assert!(o.state.heading_offset_y.abs() < 1e-9);
    assert!((o.heading_alpha - 1.0).abs() < 1e-9);
    assert!((o.state.button_offset_y + 20.0).abs() < 1e-9);
}

#[test]
fn unmount_detaches_exactly_what_was_attached() {
    let mut graph = RecordingSceneGraph::new();
    let unrelated = graph.attach(Renderable::Sky(SkyParams::default())).unwrap();

    let mut scene = SeaScene::mount_default(&mut StubLoader::default(), &mut graph).unwrap();
    run(&mut scene, &mut graph, 0, 10);
    let ours = scene.attached_nodes();

    let teardown = scene.unmount(&mut graph);
    assert_eq!(teardown.detached, 6);
    assert_eq!(teardown.missing, 0);
    assert_eq!(teardown.frames, 11);
    assert_eq!(graph.detached, ours);
    assert_eq!(graph.len(), 1);
    assert!(graph.nodes().contains_key(&unrelated));
}

#[test]
fn missing_texture_fails_mount_by_default() {
    let mut loader = StubLoader {
        missing: vec!["wood-texture.jpg".to_string()],
        ..StubLoader::default()
    };
    let mut graph = RecordingSceneGraph::new();
    let err = SeaScene::mount_default(&mut loader, &mut graph).unwrap_err();
    assert!(err.is_asset_load());
    assert!(graph.is_empty());
}

#[test]
fn placeholder_policy_substitutes_textures() {
    let mut loader = StubLoader {
        missing: vec!["wood-texture.jpg".to_string(), "waternormals.jpg".to_string()],
        ..StubLoader::default()
    };
    let config = SceneConfig {
        asset_policy: crate::assets::texture::AssetPolicy::Placeholder,
        ..SceneConfig::default()
    };
    let mut graph = RecordingSceneGraph::new();
    let scene = SeaScene::mount(&config, &mut loader, &mut graph).unwrap();
    assert_eq!(loader.calls, 4);
    assert!(
        scene
            .model()
            .objects()
            .iter()
            .all(|o| o.visual().is_placeholder())
    );
}

#[test]
fn attach_failure_rolls_back() {
    let mut graph = FlakyGraph {
        inner: RecordingSceneGraph::new(),
        limit: 4,
    };
    let err = SeaScene::mount_default(&mut StubLoader::default(), &mut graph).unwrap_err();
    assert!(matches!(err, SceneError::Validation(_)));
    assert!(graph.inner.is_empty());
    assert_eq!(graph.inner.detached.len(), 4);
}

#[test]
fn invalid_config_attaches_nothing() {
    let mut config = SceneConfig::default();
    config.motion.hover_scale = 0.0;
    let mut graph = RecordingSceneGraph::new();
    assert!(SeaScene::mount(&config, &mut StubLoader::default(), &mut graph).is_err());
    assert!(graph.is_empty());
}
