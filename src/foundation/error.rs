use std::path::PathBuf;

/// Convenience result type used across seawave.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by scene APIs.
///
/// Per-frame updates are total and never produce errors; everything here is raised while
/// loading configuration or preparing assets at mount time.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid user-provided configuration or primitive parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A texture (or normal map) could not be read or decoded.
    #[error("asset load error: '{}': {reason}", path.display())]
    AssetLoad {
        /// Path as requested by the scene, relative to the asset root.
        path: PathBuf,
        /// Human-readable failure description.
        reason: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::AssetLoad`] value.
    pub fn asset_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for asset load failures.
    pub fn is_asset_load(&self) -> bool {
        matches!(self, Self::AssetLoad { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
