use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    components::{
        BoundingBox, GlobalTransform, Grabbable, Grabbed, Hand, Handedness,
        LocalTransform, Parent,
    },
    contexts::{Button, Edge, HandInput},
    intent::Intent,
};

/// Grab on the squeeze press edge, release on the release edge. A controller that disconnects also
/// lets go of whatever it was holding.
pub fn grab_intents(input: &HandInput, handedness: Handedness) -> Vec<Intent> {
    if input.just_disconnected() {
        return vec![Intent::Release(handedness)];
    }

    match input.button_edge(Button::Squeeze) {
        Some(Edge::Pressed) => vec![Intent::Grab(handedness)],
        Some(Edge::Released) => vec![Intent::Release(handedness)],
        None => Vec::new(),
    }
}

/// Attach the first free grabbable (lowest [`Grabbable::order`]) whose bounds are within `radius`
/// of the hand's grip. Does nothing if the hand is already holding something, is disconnected, or
/// nothing is in reach. The object keeps its global pose.
pub fn grab(world: &mut World, hand_entity: Entity, radius: f32) -> Option<Entity> {
    let global_from_grip = {
        let hand = world.get::<&Hand>(hand_entity).ok()?;
        if !hand.connected || hand.grabbed_entity.is_some() {
            return None;
        }
        world.get::<&GlobalTransform>(hand_entity).ok()?.0
    };
    let grip_position: Vec3 = global_from_grip.translation.into();

    let (entity, global_from_local) = {
        let mut candidates = world
            .query::<(&Grabbable, &GlobalTransform, &BoundingBox)>()
            .without::<&Grabbed>()
            .iter()
            .map(|(entity, (grabbable, global_transform, bounding_box))| {
                (grabbable.order, entity, global_transform.0, *bounding_box)
            })
            .collect::<Vec<_>>();
        candidates.sort_by_key(|(order, ..)| *order);

        candidates
            .into_iter()
            .find(|(_, _, global_from_local, bounding_box)| {
                bounding_box.distance_to_point(global_from_local, grip_position) <= radius
            })
            .map(|(_, entity, global_from_local, _)| (entity, global_from_local))?
    };

    let grip_from_local = global_from_grip.inverse() * global_from_local;
    world
        .insert(
            entity,
            (
                Parent {
                    entity: hand_entity,
                    from_child: grip_from_local,
                },
                Grabbed { hand: hand_entity },
            ),
        )
        .ok()?;

    let mut hand = world.get::<&mut Hand>(hand_entity).ok()?;
    hand.grabbed_entity = Some(entity);
    log::info!(
        "[XR_DISPATCH_GRABBING] {} hand grabbed {:?}",
        hand.handedness,
        entity
    );

    Some(entity)
}

/// Detach whatever the hand is holding and return it to the world, keeping its global pose.
pub fn release(world: &mut World, hand_entity: Entity) -> Option<Entity> {
    let entity = {
        let mut hand = world.get::<&mut Hand>(hand_entity).ok()?;
        let entity = hand.grabbed_entity.take()?;
        log::info!(
            "[XR_DISPATCH_GRABBING] {} hand released {:?}",
            hand.handedness,
            entity
        );
        entity
    };

    // If the object was despawned while held there's nothing left to do.
    let global_from_local = world.get::<&GlobalTransform>(entity).ok()?.0;
    let _ = world.remove_one::<Parent>(entity);
    let _ = world.remove_one::<Grabbed>(entity);

    let mut local_transform = LocalTransform::default();
    local_transform.update_from_affine(&global_from_local);
    world.insert_one(entity, local_transform).ok()?;

    Some(entity)
}
