use crate::foundation::core::{Vec3, wrap_angle};
use crate::foundation::error::{SceneError, SceneResult};
use crate::scene::object::FloatingObjectDescriptor;

/// Per-frame motion rules for floating objects.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FloatMotion {
    /// Vertical bob amplitude in scene units.
    pub bob_amplitude: f64,
    /// Rotation rate about X in radians per second.
    pub spin_x: f64,
    /// Rotation rate about Y in radians per second.
    pub spin_y: f64,
    /// Uniform render scale while hovered.
    pub hover_scale: f64,
    /// Keep rotation accumulators in `[0, 2π)`.
    pub wrap_rotation: bool,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            bob_amplitude: 0.1,
            spin_x: 0.2,
            spin_y: 0.1,
            hover_scale: 1.1,
            wrap_rotation: true,
        }
    }
}

/// Transform of one floating object as of the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectTransformState {
    /// Current world position.
    pub position: Vec3,
    /// Accumulated rotation about X (radians).
    pub rotation_x: f64,
    /// Accumulated rotation about Y (radians).
    pub rotation_y: f64,
    /// Pointer is over the object's hit area.
    pub hovered: bool,
}

impl ObjectTransformState {
    /// Initial state: at the base position, no rotation, not hovered.
    pub fn at_rest(base: &FloatingObjectDescriptor) -> Self {
        Self {
            position: base.base_position(),
            ..Self::default()
        }
    }
}

impl FloatMotion {
    /// Validate that every rate is finite.
    pub fn validate(&self) -> SceneResult<()> {
        let all = [self.bob_amplitude, self.spin_x, self.spin_y, self.hover_scale];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(SceneError::validation("float motion parameters must be finite"));
        }
        if self.hover_scale <= 0.0 {
            return Err(SceneError::validation("hover_scale must be > 0"));
        }
        Ok(())
    }

    /// Advance one object by one frame.
    ///
    /// `y` is recomputed from `elapsed` (bounded bob around the base), rotations accumulate
    /// `delta`. `hovered` passes through untouched.
    pub fn advance(
        &self,
        state: &ObjectTransformState,
        base: &FloatingObjectDescriptor,
        elapsed: f64,
        delta: f64,
    ) -> ObjectTransformState {
        let rest = base.base_position();
        let mut rotation_x = state.rotation_x + delta * self.spin_x;
        let mut rotation_y = state.rotation_y + delta * self.spin_y;
        if self.wrap_rotation {
            rotation_x = wrap_angle(rotation_x);
            rotation_y = wrap_angle(rotation_y);
        }

        ObjectTransformState {
            position: rest.with_y(rest.y + elapsed.sin() * self.bob_amplitude),
            rotation_x,
            rotation_y,
            hovered: state.hovered,
        }
    }

    /// Uniform render scale for `state`.
    pub fn scale(&self, state: &ObjectTransformState) -> f64 {
        if state.hovered { self.hover_scale } else { 1.0 }
    }
}

/// Advance one object with the default motion rules.
pub fn advance(
    state: &ObjectTransformState,
    base: &FloatingObjectDescriptor,
    elapsed: f64,
    delta: f64,
) -> ObjectTransformState {
    FloatMotion::default().advance(state, base, elapsed, delta)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/float.rs"]
mod tests;
