use glam::Affine3A;
use hecs::Entity;

/// Component added to indicate that an entity has a parent
/// Used by `update_global_transform_with_parent_system`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parent {
    /// The parent entity
    pub entity: Entity,
    /// Transform from the child's space into the parent's space
    pub from_child: Affine3A,
}
