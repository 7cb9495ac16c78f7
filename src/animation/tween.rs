use crate::{
    animation::ease::Ease,
    foundation::error::{SceneError, SceneResult},
};

/// Interpolate from `a` to `b` with normalized factor `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// How many times a tween plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play once, then repeat `n` more times.
    Count(u32),
    /// Loop forever.
    Infinite,
}

/// Keyframe tween over a fixed duration.
///
/// `values` are spread evenly across `duration`; `ease` shapes each segment between adjacent
/// values. Sampling is a pure function of local time, so an infinite loop is just a phase taken
/// modulo the duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    values: Vec<f64>,
    duration: f64,
    ease: Ease,
    repeat: Repeat,
}

impl Tween {
    /// Build a validated tween through `values`.
    pub fn new(values: Vec<f64>, duration: f64, ease: Ease, repeat: Repeat) -> SceneResult<Self> {
        if values.len() < 2 {
            return Err(SceneError::validation(
                "Tween needs at least two keyframe values",
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SceneError::validation("Tween values must be finite"));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SceneError::validation(
                "Tween duration must be finite and > 0",
            ));
        }
        Ok(Self {
            values,
            duration,
            ease,
            repeat,
        })
    }

    /// Single-shot tween from `from` to `to`.
    pub fn to(from: f64, to: f64, duration: f64, ease: Ease) -> SceneResult<Self> {
        Self::new(vec![from, to], duration, ease, Repeat::Count(0))
    }

    /// Duration of one iteration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Keyframe values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total play time, or `None` when the tween loops forever.
    pub fn total_duration(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Count(n) => Some(self.duration * (f64::from(n) + 1.0)),
            Repeat::Infinite => None,
        }
    }

    /// Return `true` once local time `t` is past the final iteration.
    pub fn is_finished(&self, t: f64) -> bool {
        self.total_duration().is_some_and(|total| t >= total)
    }

    /// Sample the tween at local time `t` (seconds since it started).
    pub fn sample(&self, t: f64) -> f64 {
        let first = self.values[0];
        let last = self.values[self.values.len() - 1];
        if t.is_nan() || t <= 0.0 {
            return first;
        }
        if self.is_finished(t) {
            return last;
        }

        let local = t.rem_euclid(self.duration);
        let segments = self.values.len() - 1;
        let pos = (local / self.duration) * segments as f64;
        let idx = (pos.floor() as usize).min(segments - 1);
        let frac = pos - idx as f64;

        lerp(
            self.values[idx],
            self.values[idx + 1],
            self.ease.apply(frac),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
