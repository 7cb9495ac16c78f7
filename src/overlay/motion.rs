use crate::animation::ease::Ease;
use crate::animation::map::LinearMap;
use crate::animation::tween::{Repeat, Tween};
use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};

/// Overlay timeline parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Heading text.
    pub heading: String,
    /// Button label.
    pub button_label: String,
    /// Heading offset before the fade-in (display units, positive is down).
    pub heading_start_offset: f64,
    /// Fade-in duration in seconds.
    pub fade_duration: f64,
    /// Easing of the heading slide.
    pub fade_ease: Ease,
    /// Easing of the overlay container's opacity ramp.
    pub container_ease: Ease,
    /// Input stops of the offset → opacity table.
    pub opacity_input: Vec<f64>,
    /// Output stops of the offset → opacity table.
    pub opacity_output: Vec<f64>,
    /// Button offset keyframes for one oscillation period.
    pub button_keyframes: Vec<f64>,
    /// Oscillation period in seconds.
    pub button_period: f64,
    /// Easing of each oscillation segment.
    pub button_ease: Ease,
    /// Button scale while hovered.
    pub hover_scale: f64,
    /// Button scale while pressed.
    pub press_scale: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            heading: "Sea Wave Animation".to_string(),
            button_label: "Explore".to_string(),
            heading_start_offset: 10.0,
            fade_duration: 2.0,
            fade_ease: Ease::OutCubic,
            container_ease: Ease::Linear,
            opacity_input: vec![-100.0, 0.0, 100.0],
            opacity_output: vec![0.0, 1.0, 0.0],
            button_keyframes: vec![-20.0, 0.0, -20.0],
            button_period: 2.0,
            button_ease: Ease::InOut,
            hover_scale: 1.05,
            press_scale: 0.95,
        }
    }
}

/// Primary timeline phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OverlayPhase {
    /// Not yet mounted; heading invisible and displaced.
    Hidden,
    /// Heading sliding into place.
    FadingIn,
    /// Heading settled; button oscillating.
    Idle,
    /// Timelines halted; state frozen.
    Unmounted,
}

/// Presented overlay values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayMotionState {
    /// Heading opacity, always derived from `heading_offset_y`.
    pub heading_opacity: f64,
    /// Heading vertical offset in display units.
    pub heading_offset_y: f64,
    /// Button vertical offset in display units.
    pub button_offset_y: f64,
    /// Pointer is over the button.
    pub is_hovered: bool,
    /// Pointer is pressed on the button.
    pub is_pressed: bool,
}

/// Pointer input routed to the overlay button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPointer {
    /// Pointer entered the button.
    Enter,
    /// Pointer left the button.
    Leave,
    /// Pointer pressed on the button.
    Down,
    /// Pointer released.
    Up,
    /// Press cancelled by the platform.
    Cancel,
}

/// Serializable view of the overlay for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlaySnapshot {
    /// Timeline phase.
    pub phase: OverlayPhase,
    /// Animated values.
    pub state: OverlayMotionState,
    /// Opacity of the whole overlay container.
    pub container_opacity: f64,
    /// Effective heading alpha (`heading_opacity * container_opacity`).
    pub heading_alpha: f64,
    /// Button presentation scale.
    pub button_scale: f64,
}

/// Heading fade/slide, button oscillation, and button hover/press.
///
/// Time is seconds since the owning scene mounted. Every value is sampled from stored phase start
/// times, so [`OverlayMotion::sample`] can be evaluated at any instant without stepping.
#[derive(Clone, Debug)]
pub struct OverlayMotion {
    heading: Tween,
    opacity: LinearMap,
    container: Tween,
    button: Tween,
    hover_scale: f64,
    press_scale: f64,

    phase: OverlayPhase,
    mounted_at: Option<f64>,
    state: OverlayMotionState,
    container_opacity: f64,
}

impl OverlayMotion {
    /// Build the machine in [`OverlayPhase::Hidden`].
    pub fn new(cfg: &OverlayConfig) -> SceneResult<Self> {
        if !cfg.heading_start_offset.is_finite() {
            return Err(SceneError::validation(
                "overlay heading_start_offset must be finite",
            ));
        }
        for (name, s) in [("hover_scale", cfg.hover_scale), ("press_scale", cfg.press_scale)] {
            if !s.is_finite() || s <= 0.0 {
                return Err(SceneError::validation(format!(
                    "overlay {name} must be finite and > 0"
                )));
            }
        }

        let heading = Tween::to(
            cfg.heading_start_offset,
            0.0,
            cfg.fade_duration,
            cfg.fade_ease,
        )?;
        let container = Tween::to(0.0, 1.0, cfg.fade_duration, cfg.container_ease)?;
        let opacity = LinearMap::new(cfg.opacity_input.clone(), cfg.opacity_output.clone())?;
        let button = Tween::new(
            cfg.button_keyframes.clone(),
            cfg.button_period,
            cfg.button_ease,
            Repeat::Infinite,
        )?;

        Ok(Self {
            heading,
            opacity,
            container,
            button,
            hover_scale: cfg.hover_scale,
            press_scale: cfg.press_scale,
            phase: OverlayPhase::Hidden,
            mounted_at: None,
            state: OverlayMotionState {
                heading_opacity: 0.0,
                heading_offset_y: cfg.heading_start_offset,
                button_offset_y: 0.0,
                is_hovered: false,
                is_pressed: false,
            },
            container_opacity: 0.0,
        })
    }

    /// Start the fade-in at `now`. Only valid from [`OverlayPhase::Hidden`].
    pub fn mount(&mut self, now: f64) {
        if self.phase != OverlayPhase::Hidden {
            tracing::debug!(phase = ?self.phase, "overlay mount ignored");
            return;
        }
        self.mounted_at = Some(now);
        self.phase = OverlayPhase::FadingIn;
        self.tick(now);
    }

    /// Halt all timelines. State stays at its last sampled values.
    pub fn unmount(&mut self) {
        if self.phase != OverlayPhase::Unmounted {
            tracing::debug!(phase = ?self.phase, "overlay unmounted");
            self.phase = OverlayPhase::Unmounted;
        }
    }

    /// Sample the timelines at `now` and store the result.
    pub fn tick(&mut self, now: f64) -> OverlayPhase {
        if matches!(self.phase, OverlayPhase::Hidden | OverlayPhase::Unmounted) {
            return self.phase;
        }
        let (phase, state, container) = self.sample(now);
        if phase != self.phase {
            tracing::debug!(from = ?self.phase, to = ?phase, now, "overlay phase change");
        }
        self.phase = phase;
        self.state = state;
        self.container_opacity = container;
        phase
    }

    /// Pure sample of `(phase, state, container opacity)` at `now`.
    ///
    /// Hidden and unmounted machines return their stored values.
    pub fn sample(&self, now: f64) -> (OverlayPhase, OverlayMotionState, f64) {
        let Some(mounted_at) = self.mounted_at else {
            return (self.phase, self.state, self.container_opacity);
        };
        if self.phase == OverlayPhase::Unmounted {
            return (self.phase, self.state, self.container_opacity);
        }

        let local = (now - mounted_at).max(0.0);
        let fade = self.heading.duration();
        let phase = if self.heading.is_finished(local) {
            OverlayPhase::Idle
        } else {
            OverlayPhase::FadingIn
        };

        let heading_offset_y = self.heading.sample(local);
        let button_offset_y = match phase {
            OverlayPhase::Idle => self.button.sample(local - fade),
            _ => 0.0,
        };
        let state = OverlayMotionState {
            heading_opacity: self.opacity.map(heading_offset_y),
            heading_offset_y,
            button_offset_y,
            ..self.state
        };
        (phase, state, self.container.sample(local))
    }

    /// Apply a pointer event to the hover/press sub-states.
    ///
    /// Ignored unless mounted; never touches the timelines.
    pub fn pointer(&mut self, ev: ButtonPointer) {
        if !matches!(self.phase, OverlayPhase::FadingIn | OverlayPhase::Idle) {
            return;
        }
        match ev {
            ButtonPointer::Enter => self.state.is_hovered = true,
            ButtonPointer::Leave => self.state.is_hovered = false,
            ButtonPointer::Down => self.state.is_pressed = true,
            ButtonPointer::Up | ButtonPointer::Cancel => self.state.is_pressed = false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Values as of the last tick.
    pub fn state(&self) -> &OverlayMotionState {
        &self.state
    }

    /// Container opacity as of the last tick.
    pub fn container_opacity(&self) -> f64 {
        self.container_opacity
    }

    /// Heading alpha as presented: derived opacity times container opacity.
    pub fn heading_alpha(&self) -> f64 {
        self.state.heading_opacity * self.container_opacity
    }

    /// Button scale: press wins over hover.
    pub fn button_scale(&self) -> f64 {
        if self.state.is_pressed {
            self.press_scale
        } else if self.state.is_hovered {
            self.hover_scale
        } else {
            1.0
        }
    }

    /// Button presentation transform: scale about `center`, then vertical offset.
    pub fn button_transform(&self, center: Point) -> Affine {
        let c = center.to_vec2();
        Affine::translate(Vec2::new(0.0, self.state.button_offset_y))
            * Affine::translate(c)
            * Affine::scale(self.button_scale())
            * Affine::translate(-c)
    }

    /// Heading presentation transform (vertical offset only).
    pub fn heading_transform(&self) -> Affine {
        Affine::translate(Vec2::new(0.0, self.state.heading_offset_y))
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            phase: self.phase,
            state: self.state,
            container_opacity: self.container_opacity,
            heading_alpha: self.heading_alpha(),
            button_scale: self.button_scale(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/motion.rs"]
mod tests;
