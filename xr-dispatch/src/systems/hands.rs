use glam::Affine3A;
use hecs::{Entity, World};

use crate::{
    components::{GlobalTransform, Hand, Handedness, Info, Parent},
    contexts::InputContext,
};

/// Hands system
/// Moves each hand to its controller's grip pose and records whether the controller is connected.
pub fn hands_system(world: &mut World, input_context: &InputContext) {
    for (_, (hand, parent)) in world.query_mut::<(&mut Hand, &mut Parent)>() {
        let input = input_context.hand(hand.handedness);
        hand.connected = input.connected();

        // A disconnected controller leaves the hand where it was last seen.
        if let Some(stage_from_grip) = input.stage_from_grip() {
            parent.from_child = stage_from_grip;
        }
    }
}

/// Add a hand to the world, parented to the stage
pub fn add_hand(world: &mut World, handedness: Handedness, stage_entity: Entity) -> Entity {
    let (hand, name) = match handedness {
        Handedness::Left => (Hand::left(), "Left Hand"),
        Handedness::Right => (Hand::right(), "Right Hand"),
    };

    world.spawn((
        hand,
        Info::named(name),
        GlobalTransform::default(),
        Parent {
            entity: stage_entity,
            from_child: Affine3A::IDENTITY,
        },
    ))
}
