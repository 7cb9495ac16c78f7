//! Texture loading: path normalization, decoding, caching, and the load-failure policy.

pub(crate) mod texture;
