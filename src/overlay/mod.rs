//! Heading/button overlay motion.

pub(crate) mod motion;
