use glam::{Affine3A, Vec3};
use hecs::{Entity, World};

use crate::{
    components::LocalTransform,
    contexts::HandInput,
    intent::{Intent, TurnKind},
    settings::{Settings, TurnPolicy},
    systems::stage::get_head_position,
    util::yaw_right,
};

/// Work out how the thumbstick moves the player this frame.
///
/// - Pushing the stick forward or back past the dead zone moves along the camera's forward
///   direction, flattened onto the ground.
/// - Pushing it sideways past the dead zone turns smoothly.
/// - Flicking it across the snap threshold turns by a fixed step, once per crossing.
pub fn locomotion_intents(
    input: &HandInput,
    delta_time: f32,
    forward: Vec3,
    settings: &Settings,
) -> Vec<Intent> {
    let mut intents = Vec::new();
    let Some(thumbstick) = input.thumbstick() else {
        return intents;
    };

    if thumbstick.y.abs() > settings.dead_zone {
        // Pushing the stick away from you gives a negative y
        let move_distance = -thumbstick.y * delta_time * settings.move_speed;
        let direction = Vec3::new(forward.x, 0.0, forward.z);
        let offset = direction * move_distance;
        if offset != Vec3::ZERO {
            intents.push(Intent::Translate(offset));
        }
    }

    let past_snap_threshold = thumbstick.x.abs() > settings.snap_threshold;
    let smooth_allowed = settings.turn_policy == TurnPolicy::Additive || !past_snap_threshold;
    if smooth_allowed && thumbstick.x.abs() > settings.dead_zone {
        let degrees = thumbstick.x * delta_time * settings.turn_rate;
        if degrees != 0.0 {
            intents.push(Intent::Rotate {
                degrees,
                kind: TurnKind::Smooth,
            });
        }
    }

    if let Some(previous) = input.thumbstick_prev() {
        if let Some(degrees) = snap_turn(previous.x, thumbstick.x, settings) {
            intents.push(Intent::Rotate {
                degrees,
                kind: TurnKind::Snap,
            });
        }
    }

    intents
}

/// A snap turn fires when the x axis crosses the threshold outwards, and re-arms once it comes
/// back.
fn snap_turn(previous_x: f32, x: f32, settings: &Settings) -> Option<f32> {
    let threshold = settings.snap_threshold;
    if previous_x <= threshold && x > threshold {
        Some(settings.snap_angle)
    } else if previous_x >= -threshold && x < -threshold {
        Some(-settings.snap_angle)
    } else {
        None
    }
}

/// Move the stage by `offset` in global space.
pub fn translate_stage(world: &mut World, stage_entity: Entity, offset: Vec3) -> bool {
    let Ok(mut stage) = world.get::<&mut LocalTransform>(stage_entity) else {
        return false;
    };
    stage.translation += offset;
    true
}

/// Turn the stage about the vertical axis through the headset, so the player turns on the spot.
/// Positive angles turn right.
pub fn rotate_stage(
    world: &mut World,
    stage_entity: Entity,
    hmd_entity: Entity,
    degrees: f32,
) -> bool {
    let pivot = get_head_position(world, hmd_entity);
    let Ok(mut stage) = world.get::<&mut LocalTransform>(stage_entity) else {
        return false;
    };

    let turn = Affine3A::from_translation(pivot)
        * Affine3A::from_quat(yaw_right(degrees))
        * Affine3A::from_translation(-pivot);
    let global_from_stage = turn * stage.to_affine();
    stage.update_from_affine(&global_from_stage);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::{ControllerSnapshot, InputContext};
    use approx::assert_relative_eq;
    use glam::{vec2, Vec2};

    fn input_with(sticks: &[Vec2]) -> InputContext {
        let mut input_context = InputContext::default();
        for stick in sticks {
            input_context.update(
                None,
                Some(ControllerSnapshot::default().with_thumbstick(*stick)),
            );
        }
        input_context
    }

    fn intents_for(sticks: &[Vec2], delta_time: f32, settings: &Settings) -> Vec<Intent> {
        let input_context = input_with(sticks);
        locomotion_intents(&input_context.right, delta_time, Vec3::NEG_Z, settings)
    }

    fn snaps(intents: &[Intent]) -> Vec<f32> {
        intents
            .iter()
            .filter_map(|i| match i {
                Intent::Rotate {
                    degrees,
                    kind: TurnKind::Snap,
                } => Some(*degrees),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_forward_movement() {
        let settings = Settings::default();
        let intents = intents_for(&[vec2(0.0, 0.5)], 0.1, &settings);

        // 0.5 * 0.1s * 3m/s; positive y pulls the stick back, so we move against forward.
        assert_eq!(intents.len(), 1);
        let Intent::Translate(offset) = intents[0] else {
            panic!("expected a translation, got {intents:?}");
        };
        assert_relative_eq!(offset.length(), 0.15, epsilon = 1e-6);
        assert_relative_eq!(offset, Vec3::new(0.0, 0.0, 0.15), epsilon = 1e-6);

        let intents = intents_for(&[vec2(0.0, -1.0)], 0.1, &settings);
        let Intent::Translate(offset) = intents[0] else {
            panic!("expected a translation, got {intents:?}");
        };
        assert_relative_eq!(offset, Vec3::new(0.0, 0.0, -0.3), epsilon = 1e-6);
    }

    #[test]
    fn test_movement_ignores_pitch() {
        let settings = Settings::default();
        let input_context = input_with(&[vec2(0.0, -1.0)]);
        let looking_down = Vec3::new(0.0, -0.6, -0.8);

        let intents = locomotion_intents(&input_context.right, 1.0, looking_down, &settings);
        let Intent::Translate(offset) = intents[0] else {
            panic!("expected a translation, got {intents:?}");
        };
        assert_eq!(offset.y, 0.0);
        assert_relative_eq!(offset, Vec3::new(0.0, 0.0, -2.4), epsilon = 1e-5);
    }

    #[test]
    fn test_dead_zone() {
        let settings = Settings::default();
        assert!(intents_for(&[vec2(0.0, 0.05)], 0.1, &settings).is_empty());
        assert!(intents_for(&[vec2(0.0, 0.1)], 0.1, &settings).is_empty());
        assert!(intents_for(&[vec2(0.1, 0.0)], 0.1, &settings).is_empty());

        let intents = intents_for(&[vec2(0.0, 0.1001)], 0.1, &settings);
        assert!(matches!(intents[..], [Intent::Translate(offset)] if offset.length() > 0.0));
    }

    #[test]
    fn test_smooth_turn() {
        let settings = Settings::default();
        let intents = intents_for(&[vec2(-0.2, 0.0)], 0.05, &settings);

        assert_eq!(intents.len(), 1);
        let Intent::Rotate {
            degrees,
            kind: TurnKind::Smooth,
        } = intents[0]
        else {
            panic!("expected a smooth turn, got {intents:?}");
        };
        assert_relative_eq!(degrees, -0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_snap_turn_fires_once_per_crossing() {
        let settings = Settings::default();

        let intents = intents_for(&[vec2(0.5, 0.0), vec2(0.8, 0.0)], 0.1, &settings);
        assert_eq!(snaps(&intents), vec![45.0]);

        let intents = intents_for(&[vec2(0.8, 0.0), vec2(0.9, 0.0)], 0.1, &settings);
        assert!(snaps(&intents).is_empty());

        let intents = intents_for(&[vec2(-0.75, 0.0), vec2(-0.76, 0.0)], 0.1, &settings);
        assert_eq!(snaps(&intents), vec![-45.0]);

        // Re-arms after coming back inside the threshold
        let intents = intents_for(
            &[vec2(0.9, 0.0), vec2(0.2, 0.0), vec2(0.9, 0.0)],
            0.1,
            &settings,
        );
        assert_eq!(snaps(&intents), vec![45.0]);

        // A single frame has nothing to cross from
        let intents = intents_for(&[vec2(0.9, 0.0)], 0.1, &settings);
        assert!(snaps(&intents).is_empty());
    }

    #[test]
    fn test_turn_policy() {
        let settings = Settings::default();
        let intents = intents_for(&[vec2(0.5, 0.0), vec2(0.8, 0.0)], 0.1, &settings);
        assert_eq!(
            intents,
            vec![Intent::Rotate {
                degrees: 45.0,
                kind: TurnKind::Snap
            }]
        );

        let settings = Settings {
            turn_policy: TurnPolicy::Additive,
            ..Default::default()
        };
        let intents = intents_for(&[vec2(0.5, 0.0), vec2(0.8, 0.0)], 0.1, &settings);
        assert_eq!(intents.len(), 2);
        assert!(matches!(
            intents[0],
            Intent::Rotate {
                kind: TurnKind::Smooth,
                ..
            }
        ));
        assert_eq!(snaps(&intents), vec![45.0]);
    }

    #[test]
    fn test_no_thumbstick() {
        let settings = Settings::default();
        let input_context = InputContext::default();
        assert!(locomotion_intents(&input_context.right, 0.1, Vec3::NEG_Z, &settings).is_empty());
    }

    #[test]
    fn test_rotate_stage_pivots_on_head() {
        use crate::systems::stage::{add_hmd, add_stage, hmd_system};

        let mut world = World::new();
        let stage = add_stage(&mut world);
        let hmd = add_hmd(&mut world, stage);
        hmd_system(
            &mut world,
            Some(Affine3A::from_translation([1.0, 1.6, 0.0].into())),
        );

        rotate_stage(&mut world, stage, hmd, 90.0);

        // The head stays put and the stage swings around it.
        assert_relative_eq!(
            get_head_position(&world, hmd),
            Vec3::new(1.0, 1.6, 0.0),
            epsilon = 1e-5
        );
        let stage_transform = *world.get::<&LocalTransform>(stage).unwrap();
        assert_relative_eq!(
            stage_transform.rotation * Vec3::NEG_Z,
            Vec3::X,
            epsilon = 1e-5
        );

        translate_stage(&mut world, stage, Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(
            get_head_position(&world, hmd),
            Vec3::new(1.0, 1.6, -1.0),
            epsilon = 1e-5
        );
    }
}
