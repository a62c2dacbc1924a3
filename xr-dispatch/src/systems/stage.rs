use glam::{Affine3A, Vec3};

use crate::{
    components::{GlobalTransform, Info, LocalTransform, Parent, Stage, HMD},
    hecs::{Entity, World},
};

/// Setup Stage entity to track player's frame of reference in global space
pub fn add_stage(world: &mut World) -> Entity {
    world.spawn((
        Stage,
        Info::named("Stage"),
        GlobalTransform::default(),
        LocalTransform::default(),
    ))
}

/// Setup the HMD entity, parented to the stage
pub fn add_hmd(world: &mut World, stage_entity: Entity) -> Entity {
    world.spawn((
        HMD,
        Info::named("HMD"),
        GlobalTransform::default(),
        Parent {
            entity: stage_entity,
            from_child: Affine3A::IDENTITY,
        },
    ))
}

/// Get the transform of the stage in global space. A missing stage is the world origin.
pub fn get_global_from_stage(world: &World, stage_entity: Entity) -> Affine3A {
    world
        .get::<&LocalTransform>(stage_entity)
        .map(|local_transform| local_transform.to_affine())
        .unwrap_or(Affine3A::IDENTITY)
}

/// Where the headset is in global space, computed from the current LocalTransform of the stage it
/// is parented to, so it is correct even if the stage moved earlier in the frame.
pub fn get_head_position(world: &World, hmd_entity: Entity) -> Vec3 {
    let Ok(parent) = world.get::<&Parent>(hmd_entity) else {
        return Vec3::ZERO;
    };

    (get_global_from_stage(world, parent.entity) * parent.from_child)
        .translation
        .into()
}

/// Copy the tracked headset pose into the HMD entity. If tracking was lost the last pose is kept.
pub fn hmd_system(world: &mut World, stage_from_head: Option<Affine3A>) {
    let Some(stage_from_head) = stage_from_head else {
        return;
    };

    for (_, (_, parent)) in world.query_mut::<(&HMD, &mut Parent)>() {
        parent.from_child = stage_from_head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_head_position_follows_stage() {
        let mut world = World::new();
        let stage = add_stage(&mut world);
        let hmd = add_hmd(&mut world, stage);

        hmd_system(
            &mut world,
            Some(Affine3A::from_translation([0.0, 1.6, 0.0].into())),
        );
        world
            .get::<&mut LocalTransform>(stage)
            .unwrap()
            .translation = [1.0, 0.0, -2.0].into();

        assert_relative_eq!(get_head_position(&world, hmd), Vec3::new(1.0, 1.6, -2.0));

        // Losing tracking keeps the last pose
        hmd_system(&mut world, None);
        assert_relative_eq!(get_head_position(&world, hmd), Vec3::new(1.0, 1.6, -2.0));
    }

    #[test]
    fn test_other_stages_are_ignored() {
        let mut world = World::new();
        let decoy = add_stage(&mut world);
        world.get::<&mut LocalTransform>(decoy).unwrap().translation = [50.0, 0.0, 0.0].into();
        let stage = add_stage(&mut world);
        world.get::<&mut LocalTransform>(stage).unwrap().translation = [1.0, 0.0, 0.0].into();
        let hmd = add_hmd(&mut world, stage);
        hmd_system(
            &mut world,
            Some(Affine3A::from_translation([0.0, 1.6, 0.0].into())),
        );

        assert_relative_eq!(
            get_global_from_stage(&world, stage),
            Affine3A::from_translation([1.0, 0.0, 0.0].into())
        );
        assert_relative_eq!(get_head_position(&world, hmd), Vec3::new(1.0, 1.6, 0.0));
    }
}
