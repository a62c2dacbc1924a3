use hecs::World;

use crate::components::{GlobalTransform, Parent};

/// Update global transform with parent transform system
/// Walks up from each entity that has a Parent to its root, composing the `from_child` transforms,
/// then applies the root's GlobalTransform. Hands and the headset hang off the stage this way, and
/// grabbed objects hang off a hand.
pub fn update_global_transform_with_parent_system(world: &mut World) {
    let mut parents = world.query::<&Parent>();
    let parents = parents.view();

    let mut roots = world.query::<&GlobalTransform>().without::<&Parent>();
    let roots = roots.view();

    // `roots` excludes everything with a Parent and this query requires one, so the two never
    // alias the same GlobalTransform.
    for (entity, (parent, absolute)) in world.query::<(&Parent, &mut GlobalTransform)>().iter() {
        let mut root_from_child = parent.from_child;
        let mut root = parent.entity;
        for depth in 0.. {
            let Some(next) = parents.get(root) else {
                break;
            };
            if depth == MAX_DEPTH {
                log::warn!("[XR_DISPATCH_TRANSFORM] {entity:?} has a cyclic parent chain");
                break;
            }
            root_from_child = next.from_child * root_from_child;
            root = next.entity;
        }

        // A despawned root counts as the world origin.
        absolute.0 = roots
            .get(root)
            .map_or(root_from_child, |global_from_root| global_from_root.0 * root_from_child);
    }
}

const MAX_DEPTH: usize = 64;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Affine3A, Quat, Vec3};

    use crate::{
        components::LocalTransform,
        systems::update_global_transform::update_global_transform_system,
    };

    use super::*;

    fn spawn_child(world: &mut World, parent: hecs::Entity, from_child: Affine3A) -> hecs::Entity {
        world.spawn((
            GlobalTransform::default(),
            Parent {
                entity: parent,
                from_child,
            },
        ))
    }

    #[test]
    fn test_stage_hand_object_chain() {
        let mut world = World::new();
        let stage = world.spawn((
            LocalTransform {
                translation: [10.0, 0.0, 0.0].into(),
                ..Default::default()
            },
            GlobalTransform::default(),
        ));
        let hand = spawn_child(
            &mut world,
            stage,
            Affine3A::from_translation([0.2, 1.4, -0.5].into()),
        );
        let held = spawn_child(
            &mut world,
            hand,
            Affine3A::from_translation([0.0, 0.0, -0.1].into()),
        );

        tick(&mut world);

        assert_relative_eq!(
            world.get::<&GlobalTransform>(hand).unwrap().0,
            Affine3A::from_translation([10.2, 1.4, -0.5].into()),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            world.get::<&GlobalTransform>(held).unwrap().0,
            Affine3A::from_translation([10.2, 1.4, -0.6].into()),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_turning_the_stage_carries_the_rig() {
        let mut world = World::new();
        let stage = world.spawn((
            LocalTransform {
                rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
                ..Default::default()
            },
            GlobalTransform::default(),
        ));
        let head = spawn_child(
            &mut world,
            stage,
            Affine3A::from_translation([0.0, 1.6, -1.0].into()),
        );

        tick(&mut world);

        // A quarter turn left swings "one metre ahead" round to one metre to the left.
        let global_transform = world.get::<&GlobalTransform>(head).unwrap();
        assert_relative_eq!(
            global_transform.translation(),
            Vec3::new(-1.0, 1.6, 0.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(global_transform.forward(), Vec3::NEG_X, epsilon = 1e-6);
    }

    #[test]
    fn test_missing_root_falls_back_to_relative() {
        let mut world = World::new();
        let stage = world.spawn((LocalTransform::default(), GlobalTransform::default()));
        let from_child = Affine3A::from_translation([0.3, 1.0, 0.0].into());
        let hand = spawn_child(&mut world, stage, from_child);
        world.despawn(stage).unwrap();

        tick(&mut world);

        assert_relative_eq!(world.get::<&GlobalTransform>(hand).unwrap().0, from_child);
    }

    #[test]
    fn test_cyclic_parents_terminate() {
        let mut world = World::new();
        let a = world.spawn((GlobalTransform::default(),));
        let b = spawn_child(&mut world, a, Affine3A::IDENTITY);
        world
            .insert_one(
                a,
                Parent {
                    entity: b,
                    from_child: Affine3A::IDENTITY,
                },
            )
            .unwrap();

        tick(&mut world);
    }

    #[test]
    fn test_entities_without_transforms() {
        let mut world = World::new();
        world.spawn((0,));
        tick(&mut world);
    }

    fn tick(world: &mut World) {
        update_global_transform_system(world);
        update_global_transform_with_parent_system(world);
    }
}
