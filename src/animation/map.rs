use crate::{
    animation::tween::lerp,
    foundation::error::{SceneError, SceneResult},
};

/// Piecewise-linear mapping from one scalar to another.
///
/// Inputs outside the table clamp to the first/last output. Used to derive one animated value
/// from another (heading opacity from heading offset).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearMap {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl LinearMap {
    /// Build a validated map. `input` must be strictly increasing and as long as `output`.
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> SceneResult<Self> {
        if input.len() < 2 {
            return Err(SceneError::validation(
                "LinearMap needs at least two input stops",
            ));
        }
        if input.len() != output.len() {
            return Err(SceneError::validation(
                "LinearMap input and output must have the same length",
            ));
        }
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(SceneError::validation("LinearMap stops must be finite"));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(SceneError::validation(
                "LinearMap input must be strictly increasing",
            ));
        }
        Ok(Self { input, output })
    }

    /// Map `x` through the table.
    pub fn map(&self, x: f64) -> f64 {
        let last = self.input.len() - 1;
        if x.is_nan() || x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }

        let idx = self.input.partition_point(|&k| k <= x);
        let (x0, x1) = (self.input[idx - 1], self.input[idx]);
        let t = (x - x0) / (x1 - x0);
        lerp(self.output[idx - 1], self.output[idx], t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/map.rs"]
mod tests;
