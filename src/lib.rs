//! seawave models a decorative ocean scene as deterministic, frame-driven state.
//!
//! Rendering is someone else's job. This crate owns the rules that decide what the renderer
//! draws each frame:
//!
//! 1. **Objects**: three textured crates bob on a sine of elapsed time and spin at fixed rates;
//!    hovering one scales it up.
//! 2. **Surface**: the water shader's time uniform accumulates half of each frame's delta.
//! 3. **Overlay**: a heading slides/fades in over two seconds, then an "Explore" button bobs
//!    forever; hover and press scale the button.
//! 4. **Composition**: [`SeaScene`] mounts all of the above onto a [`SceneGraph`], advances it
//!    with [`FrameTick`]s, and detaches everything on unmount.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Sampleable timelines**: every animated value is a pure function of stored start times and
//!   the current time, including infinite loops.
//! - **Fallible only at mount**: config validation and texture loading can fail; per-frame
//!   updates cannot.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod foundation;
mod overlay;
mod scene;

pub mod config;
pub mod input;

pub use animation::ease::Ease;
pub use animation::map::LinearMap;
pub use animation::tween::{Repeat, Tween, lerp};
pub use assets::texture::{
    AssetPolicy, FsTextureLoader, TextureHandle, TextureLoader, WrapMode, decode_texture,
    load_with_policy, normalize_rel_path,
};
pub use config::{ObjectConfig, SceneConfig};
pub use foundation::clock::FrameClock;
pub use foundation::core::{
    Affine, Fps, FrameTick, Point, Rect, Vec2, Vec3, wrap_angle, wrap_period,
};
pub use foundation::error::{SceneError, SceneResult};
pub use input::{HitRegions, PointerEvent, PointerTarget, PointerTracker};
pub use overlay::motion::{
    ButtonPointer, OverlayConfig, OverlayMotion, OverlayMotionState, OverlayPhase,
    OverlaySnapshot,
};
pub use scene::composer::{FrameSnapshot, ObjectSnapshot, SeaScene, Teardown};
pub use scene::environment::{Lighting, Rgb8, SkyParams, WaterParams};
pub use scene::float::{FloatMotion, ObjectTransformState};
pub use scene::graph::{NodeId, NodeUpdate, RecordingSceneGraph, Renderable, SceneGraph};
pub use scene::object::{FloatingObjectDescriptor, SceneObjectModel};
pub use scene::surface::{SurfaceAnimator, SurfaceUniformState};

/// Floating object frame updater with the stock motion rules.
pub use scene::float::advance as advance_object;
/// Water time uniform update with the stock rule.
pub use scene::surface::advance as advance_surface;
