use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{SceneError, SceneResult};

/// Texture addressing mode outside `[0, 1]` UVs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum WrapMode {
    /// Clamp to the edge texel.
    #[default]
    Clamp,
    /// Tile the texture.
    Repeat,
}

/// What to do when a texture cannot be loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AssetPolicy {
    /// Surface the error from mount.
    #[default]
    Fail,
    /// Log a warning and substitute a checkerboard placeholder.
    Placeholder,
}

#[derive(Debug)]
struct TextureData {
    source: String,
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
    wrap: WrapMode,
    placeholder: bool,
}

/// Opaque handle to decoded texture pixels. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct TextureHandle {
    inner: Arc<TextureData>,
}

impl TextureHandle {
    /// Wrap straight-alpha RGBA8 pixels. `rgba8.len()` must equal `width * height * 4`.
    pub fn from_rgba8(
        source: impl Into<String>,
        width: u32,
        height: u32,
        rgba8: Vec<u8>,
        wrap: WrapMode,
    ) -> SceneResult<Self> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if width == 0 || height == 0 || rgba8.len() as u64 != expected {
            return Err(SceneError::validation(format!(
                "texture pixels must be {width}x{height} RGBA8"
            )));
        }
        Ok(Self {
            inner: Arc::new(TextureData {
                source: source.into(),
                width,
                height,
                rgba8,
                wrap,
                placeholder: false,
            }),
        })
    }

    /// 2x2 magenta/black checkerboard standing in for `source`.
    pub fn placeholder(source: impl Into<String>, wrap: WrapMode) -> Self {
        const M: [u8; 4] = [255, 0, 255, 255];
        const K: [u8; 4] = [0, 0, 0, 255];
        let rgba8 = [M, K, K, M].concat();
        Self {
            inner: Arc::new(TextureData {
                source: source.into(),
                width: 2,
                height: 2,
                rgba8,
                wrap,
                placeholder: true,
            }),
        }
    }

    /// Path the texture was requested under.
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Row-major straight-alpha RGBA8 pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.inner.rgba8
    }

    /// Addressing mode requested at load time.
    pub fn wrap(&self) -> WrapMode {
        self.inner.wrap
    }

    /// Return `true` for substituted placeholder textures.
    pub fn is_placeholder(&self) -> bool {
        self.inner.placeholder
    }

    /// Return `true` when both handles point at the same decoded pixels.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Source of textures keyed by asset-root-relative path.
pub trait TextureLoader {
    /// Load (or fetch from cache) the texture at `path`.
    fn load(&mut self, path: &str, wrap: WrapMode) -> SceneResult<TextureHandle>;
}

/// Normalize and validate asset-root-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> SceneResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(SceneError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(SceneError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(SceneError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(SceneError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_texture(source: &str, bytes: &[u8], wrap: WrapMode) -> SceneResult<TextureHandle> {
    let img = image::load_from_memory(bytes)
        .with_context(|| format!("decode texture '{source}'"))
        .map_err(|e| SceneError::asset_load(source, format!("{e:#}")))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    TextureHandle::from_rgba8(source, width, height, rgba.into_raw(), wrap)
}

/// Filesystem loader rooted at an asset directory. Textures are decoded once per path and wrap
/// mode.
#[derive(Debug)]
pub struct FsTextureLoader {
    root: PathBuf,
    cache: HashMap<(String, WrapMode), TextureHandle>,
}

impl FsTextureLoader {
    /// Create a loader reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Asset root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of distinct decoded textures held by the cache.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl TextureLoader for FsTextureLoader {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&mut self, path: &str, wrap: WrapMode) -> SceneResult<TextureHandle> {
        let key = normalize_rel_path(path)?;
        if let Some(hit) = self.cache.get(&(key.clone(), wrap)) {
            return Ok(hit.clone());
        }

        let full = self.root.join(&key);
        let bytes = std::fs::read(&full)
            .map_err(|e| SceneError::asset_load(&key, format!("read '{}': {e}", full.display())))?;
        let tex = decode_texture(&key, &bytes, wrap)?;
        tracing::debug!(width = tex.width(), height = tex.height(), "texture decoded");

        self.cache.insert((key, wrap), tex.clone());
        Ok(tex)
    }
}

/// Load through `loader`, applying `policy` to asset load failures.
///
/// Path validation errors are configuration mistakes and are always returned.
pub fn load_with_policy(
    loader: &mut dyn TextureLoader,
    path: &str,
    wrap: WrapMode,
    policy: AssetPolicy,
) -> SceneResult<TextureHandle> {
    match loader.load(path, wrap) {
        Ok(tex) => Ok(tex),
        Err(e) if e.is_asset_load() && policy == AssetPolicy::Placeholder => {
            tracing::warn!(path, error = %e, "substituting placeholder texture");
            Ok(TextureHandle::placeholder(path, wrap))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/texture.rs"]
mod tests;
