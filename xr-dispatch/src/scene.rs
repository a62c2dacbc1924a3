use std::f32::consts::PI;

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use crate::{
    components::{BoundingBox, GlobalTransform, Grabbable, Info, LocalTransform, Pickable},
    DispatchError, DispatchResult,
};

/// An object to place in the scene. The mesh itself is loaded by the host; only its bounds are
/// needed here.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Name of the mesh, used to match it up with the host's asset
    pub name: String,
    /// Where to put it
    pub transform: LocalTransform,
    /// Bounds of the mesh in its own space
    pub bounds: BoundingBox,
    /// Can the player pick it up?
    pub grabbable: bool,
    /// Can the player highlight it with a pointer?
    pub pickable: bool,
}

/// The objects that make up a scene, in grab order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneDescription {
    /// Objects to spawn
    pub objects: Vec<SceneObject>,
}

/// The tutorial scene: a model standing in front of the player and the environment around them.
pub fn default_scene() -> SceneDescription {
    SceneDescription {
        objects: vec![
            SceneObject {
                name: "dragonite".to_string(),
                transform: LocalTransform {
                    translation: Vec3::new(0.0, 1.0, -2.0),
                    rotation: Quat::from_rotation_y(PI),
                    scale: Vec3::splat(2.0),
                },
                bounds: BoundingBox {
                    min: Vec3::new(-0.25, 0.0, -0.2),
                    max: Vec3::new(0.25, 0.5, 0.2),
                },
                grabbable: true,
                pickable: true,
            },
            SceneObject {
                name: "world".to_string(),
                transform: LocalTransform {
                    translation: Vec3::new(-75.0, -22.0, 50.0),
                    ..Default::default()
                },
                bounds: BoundingBox {
                    min: Vec3::new(-100.0, 0.0, -100.0),
                    max: Vec3::new(100.0, 21.0, 100.0),
                },
                grabbable: false,
                pickable: true,
            },
        ],
    }
}

/// Spawn every object in the description. Grabbable objects are given increasing
/// [`Grabbable::order`]s after any grabbables already in the world, so earlier objects win when
/// several are in reach.
pub fn add_scene(world: &mut World, scene: &SceneDescription) -> DispatchResult<Vec<Entity>> {
    let mut next_order = world
        .query::<&Grabbable>()
        .iter()
        .map(|(_, grabbable)| grabbable.order + 1)
        .max()
        .unwrap_or(0);

    let mut entities = Vec::with_capacity(scene.objects.len());
    for object in &scene.objects {
        if object.bounds.min.cmpgt(object.bounds.max).any() {
            return Err(DispatchError::Other(anyhow::anyhow!(
                "{} has inverted bounds: {:?}",
                object.name,
                object.bounds
            )));
        }

        let entity = world.spawn((
            Info::named(object.name.clone()),
            object.transform,
            GlobalTransform::from(object.transform),
            object.bounds,
        ));
        if object.grabbable {
            world.insert_one(entity, Grabbable { order: next_order })?;
            next_order += 1;
        }
        if object.pickable {
            world.insert_one(entity, Pickable)?;
        }

        log::info!("[XR_DISPATCH_SCENE] loaded mesh: {}", object.name);
        entities.push(entity);
    }

    Ok(entities)
}

/// Find an entity by the name it was spawned with
pub fn find_by_name(world: &World, name: &str) -> Option<Entity> {
    world
        .query::<&Info>()
        .iter()
        .find(|(_, info)| info.name == name)
        .map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let mut world = World::new();
        let entities = add_scene(&mut world, &default_scene()).unwrap();
        assert_eq!(entities.len(), 2);

        let dragonite = find_by_name(&world, "dragonite").unwrap();
        assert_eq!(world.get::<&Grabbable>(dragonite).unwrap().order, 0);
        assert!(world.get::<&Pickable>(dragonite).is_ok());

        let environment = find_by_name(&world, "world").unwrap();
        assert!(world.get::<&Grabbable>(environment).is_err());
        assert!(world.get::<&Pickable>(environment).is_ok());
        assert!(find_by_name(&world, "pikachu").is_none());
    }

    #[test]
    fn test_orders_continue_across_scenes() {
        let mut world = World::new();
        add_scene(&mut world, &default_scene()).unwrap();
        let entities = add_scene(&mut world, &default_scene()).unwrap();

        assert_eq!(world.get::<&Grabbable>(entities[0]).unwrap().order, 1);
    }

    #[test]
    fn test_inverted_bounds() {
        let mut scene = default_scene();
        scene.objects[0].bounds = BoundingBox {
            min: Vec3::ONE,
            max: Vec3::ZERO,
        };

        let mut world = World::new();
        assert!(matches!(
            add_scene(&mut world, &scene),
            Err(DispatchError::Other(_))
        ));
    }
}
