use crate::assets::texture::TextureHandle;
use crate::foundation::core::Vec3;

/// Static description of one floating object.
#[derive(Clone, Debug)]
pub struct FloatingObjectDescriptor {
    base_position: Vec3,
    visual: TextureHandle,
}

impl FloatingObjectDescriptor {
    /// Describe an object resting at `base_position` drawn with `visual`.
    pub fn new(base_position: Vec3, visual: TextureHandle) -> Self {
        Self {
            base_position,
            visual,
        }
    }

    /// Rest position the object bobs around.
    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Material texture.
    pub fn visual(&self) -> &TextureHandle {
        &self.visual
    }
}

/// Ordered, read-only set of floating objects.
///
/// Order is identity: index `i` here is object `i` everywhere else (states, scene nodes, pointer
/// targets).
#[derive(Clone, Debug, Default)]
pub struct SceneObjectModel {
    objects: Vec<FloatingObjectDescriptor>,
}

impl SceneObjectModel {
    /// Default crate layout.
    pub const DEFAULT_POSITIONS: [Vec3; 3] = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, -2.0),
        Vec3::new(-2.0, 0.5, -1.0),
    ];

    /// Wrap an ordered list of descriptors.
    pub fn new(objects: Vec<FloatingObjectDescriptor>) -> Self {
        Self { objects }
    }

    /// One descriptor per position, all sharing `visual`.
    pub fn from_positions(positions: &[Vec3], visual: &TextureHandle) -> Self {
        Self::new(
            positions
                .iter()
                .map(|&p| FloatingObjectDescriptor::new(p, visual.clone()))
                .collect(),
        )
    }

    /// Descriptors in identity order.
    pub fn objects(&self) -> &[FloatingObjectDescriptor] {
        &self.objects
    }

    /// Descriptor at `index`.
    pub fn get(&self, index: usize) -> Option<&FloatingObjectDescriptor> {
        self.objects.get(index)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Return `true` when the model has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/object.rs"]
mod tests;
