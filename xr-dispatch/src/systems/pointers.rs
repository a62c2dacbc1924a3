use glam::Affine3A;
use hecs::{Entity, World};

use crate::{
    components::{BoundingBox, GlobalTransform, Handedness, Highlight, Info, Pickable},
    contexts::{Button, InputContext, PointerEvent, PointerEventKind},
    intent::Intent,
    settings::Settings,
    util::Ray,
};

/// The host's pointer events, followed by a pointer-down along the aim ray of each controller
/// whose trigger was just pressed (if `trigger_pointer` is enabled).
pub fn collect_pointer_events(
    input_context: &InputContext,
    global_from_stage: Affine3A,
    host_events: &[PointerEvent],
    settings: &Settings,
) -> Vec<PointerEvent> {
    let mut events = host_events.to_vec();
    if !settings.trigger_pointer {
        return events;
    }

    for handedness in [Handedness::Left, Handedness::Right] {
        let input = input_context.hand(handedness);
        if !input.button_just_pressed(Button::Trigger) {
            continue;
        }
        if let Some(stage_from_aim) = input.stage_from_aim() {
            let ray = Ray::from_pose(&(global_from_stage * stage_from_aim));
            events.push(PointerEvent::down(ray));
        }
    }

    events
}

/// One [`Intent::ToggleHighlight`] per pointer-down that hits a pickable entity.
pub fn pointer_intents(world: &World, events: &[PointerEvent], settings: &Settings) -> Vec<Intent> {
    events
        .iter()
        .filter(|event| event.kind == PointerEventKind::Down)
        .filter_map(|event| pick(world, &event.ray, settings.pointer_max_distance))
        .map(|(entity, _)| Intent::ToggleHighlight(entity))
        .collect()
}

/// Cast a ray against every pickable entity. Returns the nearest hit and its distance.
pub fn pick(world: &World, ray: &Ray, max_distance: f32) -> Option<(Entity, f32)> {
    let mut closest: Option<(Entity, f32)> = None;
    for (entity, (_, global_transform, bounding_box)) in world
        .query::<(&Pickable, &GlobalTransform, &BoundingBox)>()
        .iter()
    {
        let Some(distance) = bounding_box.ray_intersection(&global_transform.0, ray, max_distance)
        else {
            continue;
        };
        if closest.map_or(true, |(_, best)| distance < best) {
            closest = Some((entity, distance));
        }
    }

    if let Some((entity, distance)) = closest {
        let name = world.get::<&Info>(entity).map(|i| i.name.clone());
        log::trace!("[XR_DISPATCH_POINTERS] Ray hit {entity:?} ({name:?}) at {distance}");
    }

    closest
}

/// Flip the entity's outline. Adds a [`Highlight`] to pickable entities that don't have one yet.
/// Returns false if the entity can't be highlighted.
pub fn toggle_highlight(world: &mut World, entity: Entity, width: f32) -> bool {
    if let Ok(mut highlight) = world.get::<&mut Highlight>(entity) {
        highlight.toggle(width);
        log::debug!(
            "[XR_DISPATCH_POINTERS] {entity:?} outlined: {}",
            highlight.outlined
        );
        return true;
    }

    if world.get::<&Pickable>(entity).is_err() {
        return false;
    }

    let mut highlight = Highlight::default();
    highlight.toggle(width);
    if world.insert_one(entity, highlight).is_err() {
        return false;
    }
    log::debug!("[XR_DISPATCH_POINTERS] {entity:?} outlined: true");
    true
}
