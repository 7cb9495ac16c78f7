//! Parameter sets for the water surface, sky dome, and lights.
//!
//! None of these are animated except the water time uniform (see [`crate::SurfaceAnimator`]);
//! they are handed to the renderer once at mount.

use crate::foundation::core::Vec3;
use crate::foundation::error::{SceneError, SceneResult};

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> SceneResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SceneError::validation(format!(
                "color '{s}' must look like #rrggbb"
            )));
        }
        let v = u32::from_str_radix(digits, 16)
            .map_err(|e| SceneError::validation(format!("color '{s}': {e}")))?;
        Ok(Self::from_u32(v))
    }

    /// Channels normalized into `[0, 1]`.
    pub fn to_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// Water surface material parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaterParams {
    /// Side length of the square water plane.
    pub plane_size: f64,
    /// Reflection/refraction render target size in pixels.
    pub texture_size: u32,
    /// Normal map path, relative to the asset root.
    pub normals_texture: String,
    /// Sun direction fed to the shader.
    pub sun_direction: Vec3,
    /// Sun highlight color.
    pub sun_color: Rgb8,
    /// Deep water color.
    pub water_color: Rgb8,
    /// Reflection distortion scale.
    pub distortion_scale: f64,
    /// Rotation about X applied to the plane (radians).
    pub rotation_x: f64,
    /// Height of the water plane.
    pub elevation: f64,
    /// Whether the renderer should apply scene fog to the surface.
    pub fog: bool,
    /// Tint in `#rrggbb` form.
    pub tint: String,
    /// Wave pattern scale.
    pub scale: f64,
    /// Flow direction of the wave pattern.
    pub flow: [f64; 2],
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            plane_size: 10_000.0,
            texture_size: 512,
            normals_texture: "waternormals.jpg".to_string(),
            sun_direction: Vec3::ZERO,
            sun_color: Rgb8::from_u32(0xffffff),
            water_color: Rgb8::from_u32(0x001e0f),
            distortion_scale: 3.7,
            rotation_x: -std::f64::consts::FRAC_PI_2,
            elevation: -5.0,
            fog: false,
            tint: "#00ffff".to_string(),
            scale: 4.0,
            flow: [1.0, 1.0],
        }
    }
}

impl WaterParams {
    /// Validate numeric ranges and the tint string.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.plane_size.is_finite() || self.plane_size <= 0.0 {
            return Err(SceneError::validation("water plane_size must be > 0"));
        }
        if self.texture_size == 0 {
            return Err(SceneError::validation("water texture_size must be > 0"));
        }
        if self.normals_texture.trim().is_empty() {
            return Err(SceneError::validation(
                "water normals_texture must be non-empty",
            ));
        }
        let finite = [
            self.distortion_scale,
            self.rotation_x,
            self.elevation,
            self.scale,
            self.flow[0],
            self.flow[1],
        ];
        if !self.sun_direction.is_finite() || finite.iter().any(|v| !v.is_finite()) {
            return Err(SceneError::validation("water parameters must be finite"));
        }
        Rgb8::parse_hex(&self.tint)?;
        Ok(())
    }
}

/// Atmospheric scattering parameters for the sky dome.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkyParams {
    /// Uniform scale of the sky dome.
    pub scale: f64,
    /// Haze amount.
    pub turbidity: f64,
    /// Rayleigh scattering coefficient.
    pub rayleigh: f64,
    /// Mie scattering coefficient.
    pub mie_coefficient: f64,
    /// Mie directional anisotropy.
    pub mie_directional_g: f64,
}

impl Default for SkyParams {
    fn default() -> Self {
        Self {
            scale: 10_000.0,
            turbidity: 10.0,
            rayleigh: 2.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.8,
        }
    }
}

impl SkyParams {
    /// Validate numeric ranges.
    pub fn validate(&self) -> SceneResult<()> {
        let all = [
            self.scale,
            self.turbidity,
            self.rayleigh,
            self.mie_coefficient,
            self.mie_directional_g,
        ];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(SceneError::validation(
                "sky parameters must be finite and >= 0",
            ));
        }
        if self.scale == 0.0 {
            return Err(SceneError::validation("sky scale must be > 0"));
        }
        Ok(())
    }
}

/// Light rig: one ambient light plus one point light.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Lighting {
    /// Ambient light intensity.
    pub ambient_intensity: f64,
    /// Point light position.
    pub point_position: Vec3,
    /// Point light intensity.
    pub point_intensity: f64,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            point_position: Vec3::new(10.0, 10.0, 10.0),
            point_intensity: 1.0,
        }
    }
}

impl Lighting {
    /// Validate numeric ranges.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.ambient_intensity.is_finite()
            || self.ambient_intensity < 0.0
            || !self.point_intensity.is_finite()
            || self.point_intensity < 0.0
        {
            return Err(SceneError::validation(
                "light intensities must be finite and >= 0",
            ));
        }
        if !self.point_position.is_finite() {
            return Err(SceneError::validation("point light position must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/environment.rs"]
mod tests;
