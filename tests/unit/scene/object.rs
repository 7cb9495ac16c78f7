use super::*;
use crate::assets::texture::WrapMode;

#[test]
fn default_layout_shares_one_texture() {
    let wood = TextureHandle::placeholder("wood-texture.jpg", WrapMode::Clamp);
    let model = SceneObjectModel::from_positions(&SceneObjectModel::DEFAULT_POSITIONS, &wood);

    assert_eq!(model.len(), 3);
    assert!(!model.is_empty());
    assert_eq!(model.get(1).unwrap().base_position(), Vec3::new(2.0, 1.0, -2.0));
    assert_eq!(model.get(2).unwrap().base_position(), Vec3::new(-2.0, 0.5, -1.0));
    assert!(model.get(3).is_none());
    assert!(model.objects().iter().all(|o| o.visual().ptr_eq(&wood)));
}

#[test]
fn empty_model() {
    let model = SceneObjectModel::default();
    assert!(model.is_empty());
    assert!(model.objects().is_empty());
}
