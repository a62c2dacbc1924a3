use hecs::World;

use crate::components::{GlobalTransform, LocalTransform, Parent};

/// Update global transform system
/// Copies each root entity's LocalTransform into its GlobalTransform. Entities with a Parent are
/// handled by `update_global_transform_with_parent_system`.
pub fn update_global_transform_system(world: &mut World) {
    for (_, (local_transform, global_transform)) in world
        .query::<(&LocalTransform, &mut GlobalTransform)>()
        .without::<&Parent>()
        .iter()
    {
        global_transform.0 = local_transform.to_affine();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Affine3A, Quat, Vec3};

    #[test]
    pub fn test_update_global_transform_system() {
        let mut world = World::new();
        let entity = world.spawn((LocalTransform::default(), GlobalTransform::default()));

        {
            let global_transform = world.get::<&GlobalTransform>(entity).unwrap();
            assert_eq!(global_transform.0, Affine3A::IDENTITY);
        }

        let translation = Vec3::new(5.0, 1.0, 2.0);
        let rotation = Quat::from_euler(glam::EulerRot::XYZ, 0.3, 0.3, 0.3);
        {
            let mut local_transform = world.get::<&mut LocalTransform>(entity).unwrap();
            local_transform.translation = translation;
            local_transform.rotation = rotation;
            local_transform.scale = translation;
        }

        update_global_transform_system(&mut world);

        let expected =
            Affine3A::from_scale_rotation_translation(translation, rotation, translation);
        let global_transform = world.get::<&GlobalTransform>(entity).unwrap();
        assert_relative_eq!(global_transform.0, expected);
    }

    #[test]
    pub fn test_parented_entities_are_skipped() {
        let mut world = World::new();
        let root = world.spawn((LocalTransform::default(), GlobalTransform::default()));
        let marker = GlobalTransform(Affine3A::from_translation(Vec3::splat(9.0)));
        let child = world.spawn((
            LocalTransform::default(),
            marker,
            Parent {
                entity: root,
                from_child: Affine3A::IDENTITY,
            },
        ));

        update_global_transform_system(&mut world);

        assert_eq!(*world.get::<&GlobalTransform>(child).unwrap(), marker);
    }
}
