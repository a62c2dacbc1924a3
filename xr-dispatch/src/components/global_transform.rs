use glam::{Affine3A, Quat, Vec3};

use super::LocalTransform;

/// Where an entity is in the world, as computed from its [`LocalTransform`] and any parents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// Split into scale, rotation and translation
    pub fn to_scale_rotation_translation(&self) -> (Vec3, Quat, Vec3) {
        self.0.to_scale_rotation_translation()
    }

    /// The entity's position in global space
    pub fn translation(&self) -> Vec3 {
        self.0.translation.into()
    }

    /// The direction the entity is facing in global space, ie. its `-Z` axis. Not affected by scale.
    pub fn forward(&self) -> Vec3 {
        let (_, rotation, _) = self.to_scale_rotation_translation();
        rotation * Vec3::NEG_Z
    }
}

impl From<LocalTransform> for GlobalTransform {
    fn from(l: LocalTransform) -> Self {
        GlobalTransform(l.to_affine())
    }
}
