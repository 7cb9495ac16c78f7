use crate::foundation::core::{Fps, FrameTick};

/// Fixed-rate frame clock.
///
/// Stands in for a display's frame callback: each call yields `(elapsed, delta)` for the next
/// frame. `elapsed` is derived from the frame count rather than summed from deltas, so it does not
/// drift over long runs. The first tick reports `elapsed = 0` and `delta = 0`.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    fps: Fps,
    frame: u64,
}

impl FrameClock {
    /// Create a clock that starts at frame 0.
    pub fn new(fps: Fps) -> Self {
        Self { fps, frame: 0 }
    }

    /// Frame rate driving this clock.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Index of the next frame to be produced.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Produce the tick for the next frame and advance.
    pub fn next_tick(&mut self) -> FrameTick {
        let elapsed = self.fps.frames_to_secs(self.frame);
        let delta = if self.frame == 0 {
            0.0
        } else {
            elapsed - self.fps.frames_to_secs(self.frame - 1)
        };
        self.frame = self.frame.saturating_add(1);
        FrameTick::new(elapsed, delta)
    }
}

impl Iterator for FrameClock {
    type Item = FrameTick;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_tick())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
