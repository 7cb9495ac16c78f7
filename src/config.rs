//! JSON-facing scene configuration.
//!
//! Every field has a default equal to the stock scene, so `{}` is a valid config and partial
//! files only override what they name.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::assets::texture::AssetPolicy;
use crate::foundation::core::Vec3;
use crate::foundation::error::{SceneError, SceneResult};
use crate::overlay::motion::{OverlayConfig, OverlayMotion};
use crate::scene::environment::{Lighting, SkyParams, WaterParams};
use crate::scene::float::FloatMotion;
use crate::scene::object::SceneObjectModel;
use crate::scene::surface::SurfaceAnimator;

/// Default texture for floating objects.
pub const DEFAULT_OBJECT_TEXTURE: &str = "wood-texture.jpg";

/// One floating object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Rest position.
    pub position: Vec3,
    /// Texture path relative to the asset root.
    pub texture: String,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            texture: DEFAULT_OBJECT_TEXTURE.to_string(),
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Floating objects in identity order.
    pub objects: Vec<ObjectConfig>,
    /// Floating object motion rules.
    pub motion: FloatMotion,
    /// Water time uniform rule.
    pub surface: SurfaceAnimator,
    /// Water material.
    pub water: WaterParams,
    /// Sky dome.
    pub sky: SkyParams,
    /// Lights.
    pub lighting: Lighting,
    /// Overlay timelines.
    pub overlay: OverlayConfig,
    /// Texture load failure handling.
    pub asset_policy: AssetPolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects: SceneObjectModel::DEFAULT_POSITIONS
                .iter()
                .map(|&position| ObjectConfig {
                    position,
                    ..ObjectConfig::default()
                })
                .collect(),
            motion: FloatMotion::default(),
            surface: SurfaceAnimator::default(),
            water: WaterParams::default(),
            sky: SkyParams::default(),
            lighting: Lighting::default(),
            overlay: OverlayConfig::default(),
            asset_policy: AssetPolicy::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SceneResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SceneError::serde(format!("parse scene config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SceneError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SceneResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::serde(format!("serialize scene config: {e}")))
    }

    /// Validate every section.
    pub fn validate(&self) -> SceneResult<()> {
        for (i, o) in self.objects.iter().enumerate() {
            if !o.position.is_finite() {
                return Err(SceneError::validation(format!(
                    "object {i} position must be finite"
                )));
            }
            if o.texture.trim().is_empty() {
                return Err(SceneError::validation(format!(
                    "object {i} texture must be non-empty"
                )));
            }
        }
        self.motion.validate()?;
        self.surface.validate()?;
        self.water.validate()?;
        self.sky.validate()?;
        self.lighting.validate()?;
        OverlayMotion::new(&self.overlay)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
