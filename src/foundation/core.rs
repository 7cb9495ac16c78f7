use crate::foundation::error::{SceneError, SceneResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// World-space 3D vector (scene units).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component (up).
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Construct a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a vector with all three components equal to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Return `true` when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Return a copy with `y` replaced.
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SceneResult<Self> {
        if den == 0 {
            return Err(SceneError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SceneError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Time values handed to every per-frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTick {
    /// Seconds since the scene was mounted. Never reset.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f64,
}

impl FrameTick {
    /// Build a tick, clamping negative or non-finite inputs to zero.
    pub fn new(elapsed: f64, delta: f64) -> Self {
        fn sanitize(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        Self {
            elapsed: sanitize(elapsed),
            delta: sanitize(delta),
        }
    }
}

/// Wrap `v` into `[0, period)`. Non-positive periods return `v` unchanged.
pub fn wrap_period(v: f64, period: f64) -> f64 {
    if period <= 0.0 || !period.is_finite() {
        return v;
    }
    v.rem_euclid(period)
}

/// Wrap an angle in radians into `[0, 2π)`.
pub fn wrap_angle(rad: f64) -> f64 {
    wrap_period(rad, std::f64::consts::TAU)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
