use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The entity's position relative to its parent, or to the world if it doesn't have one.
///
/// Root entities (no [`super::Parent`]) have their [`super::GlobalTransform`] computed from this each
/// frame by `update_global_transform_system`. Parented entities are positioned by
/// [`super::Parent::from_child`] instead, so when an object is grabbed its [`LocalTransform`] is left
/// alone and rewritten from its global pose when it is released.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Convenience function to convert the [`LocalTransform`] into a [`glam::Affine3A`]
    #[inline]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the scale, rotation and translation from a [`glam::Affine3A`]
    #[inline]
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        (self.scale, self.rotation, self.translation) = transform.to_scale_rotation_translation();
    }
}
