//! Easing curves, keyframe tweens, and derived-value maps.

pub(crate) mod ease;
pub(crate) mod map;
pub(crate) mod tween;
