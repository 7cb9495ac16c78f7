use crate::foundation::core::wrap_period;
use crate::foundation::error::{SceneError, SceneResult};

/// Time uniform driving the water's procedural wave pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceUniformState {
    /// Accumulated shader time.
    pub time: f64,
}

/// Accumulation rule for [`SurfaceUniformState`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SurfaceAnimator {
    /// Shader seconds per wall-clock second.
    pub time_scale: f64,
    /// Wrap the accumulator modulo this period. `None` accumulates without bound.
    pub wrap_period: Option<f64>,
}

impl Default for SurfaceAnimator {
    fn default() -> Self {
        Self {
            time_scale: 0.5,
            wrap_period: None,
        }
    }
}

impl SurfaceAnimator {
    /// Validate the time scale and optional wrap period.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(SceneError::validation(
                "surface time_scale must be finite and >= 0",
            ));
        }
        if let Some(p) = self.wrap_period
            && (!p.is_finite() || p <= 0.0)
        {
            return Err(SceneError::validation(
                "surface wrap_period must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Advance the uniform by one frame of `delta` seconds.
    pub fn advance(&self, state: SurfaceUniformState, delta: f64) -> SurfaceUniformState {
        let time = state.time + delta * self.time_scale;
        SurfaceUniformState {
            time: match self.wrap_period {
                Some(p) => wrap_period(time, p),
                None => time,
            },
        }
    }
}

/// Advance with the default rule (`time += delta / 2`).
pub fn advance(state: SurfaceUniformState, delta: f64) -> SurfaceUniformState {
    SurfaceAnimator::default().advance(state, delta)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/surface.rs"]
mod tests;
