//! Shared primitives: error taxonomy, vectors/time types, and the frame clock.

pub(crate) mod clock;
pub(crate) mod core;
pub(crate) mod error;
