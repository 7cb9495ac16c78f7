//! Scene model and per-frame updates.
//!
//! - [`object`]: static floating object descriptors
//! - [`float`]: floating object frame updater
//! - [`surface`]: water time uniform
//! - [`environment`]: water/sky/light parameter sets
//! - [`graph`]: renderer scene-graph seam
//! - [`composer`]: mount/frame/unmount orchestration

pub(crate) mod composer;
pub(crate) mod environment;
pub(crate) mod float;
pub(crate) mod graph;
pub(crate) mod object;
pub(crate) mod surface;
