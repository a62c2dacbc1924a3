use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    components::{GlobalTransform, Handedness},
    contexts::{ButtonEvent, FrameInput, InputContext},
    intent::Intent,
    settings::Settings,
    systems::{
        buttons::button_events,
        grabbing::{self, grab_intents},
        hands::{add_hand, hands_system},
        locomotion::{self, locomotion_intents},
        pointers::{self, collect_pointer_events, pointer_intents},
        stage::{self, add_hmd, add_stage, hmd_system},
        update_global_transform::update_global_transform_system,
        update_global_transform_with_parent::update_global_transform_with_parent_system,
    },
};

/// What happened during a call to [`Dispatcher::update`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Buttons that changed state this frame
    pub button_events: Vec<ButtonEvent>,
    /// Every intent that took effect, in order. Grabs with nothing in reach and releases with
    /// nothing held are left out.
    pub intents: Vec<Intent>,
}

/// Owns the scene and turns each frame of input into changes to it.
///
/// On creation the world gets a stage, a headset and two hands. Add your own objects to
/// [`Dispatcher::world`] (eg. with [`crate::scene::add_scene`]), then call [`Dispatcher::update`]
/// once per rendered frame.
pub struct Dispatcher {
    /// The scene
    pub world: World,
    /// Controller state for this frame and the last
    pub input_context: InputContext,
    /// Locomotion and interaction tunables
    pub settings: Settings,
    /// The player's frame of reference
    pub stage_entity: Entity,
    /// The player's headset
    pub hmd_entity: Entity,
    /// The left hand
    pub left_hand_entity: Entity,
    /// The right hand
    pub right_hand_entity: Entity,
    frame_index: u64,
}

impl Dispatcher {
    /// Create a new dispatcher with an empty scene.
    pub fn new(settings: Settings) -> Self {
        let mut world = World::new();
        let stage_entity = add_stage(&mut world);
        let hmd_entity = add_hmd(&mut world, stage_entity);
        let left_hand_entity = add_hand(&mut world, Handedness::Left, stage_entity);
        let right_hand_entity = add_hand(&mut world, Handedness::Right, stage_entity);

        Self {
            world,
            input_context: Default::default(),
            settings,
            stage_entity,
            hmd_entity,
            left_hand_entity,
            right_hand_entity,
            frame_index: 0,
        }
    }

    /// The entity for a hand
    pub fn hand_entity(&self, handedness: Handedness) -> Entity {
        match handedness {
            Handedness::Left => self.left_hand_entity,
            Handedness::Right => self.right_hand_entity,
        }
    }

    /// How many frames have been processed
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// The direction the headset is looking, in global space.
    pub fn camera_forward(&self) -> Vec3 {
        self.world
            .get::<&GlobalTransform>(self.hmd_entity)
            .map(|global_transform| global_transform.forward())
            .unwrap_or(Vec3::NEG_Z)
    }

    /// Run one frame:
    ///
    /// 1. Store the new controller snapshots and move the headset and hands to their tracked poses.
    /// 2. Work out this frame's intents from the input.
    /// 3. Apply them: grabs and releases, then locomotion, then highlight toggles.
    /// 4. Recompute global transforms so held objects follow the hand.
    pub fn update(&mut self, frame: &FrameInput) -> FrameReport {
        self.frame_index += 1;
        self.input_context.update(frame.left, frame.right);
        hmd_system(&mut self.world, frame.stage_from_head);
        hands_system(&mut self.world, &self.input_context);
        self.update_global_transforms();

        let mut intents = dispatch_intents(
            &self.input_context,
            frame.delta_time(),
            self.camera_forward(),
            &self.settings,
        );

        let pointer_events = collect_pointer_events(
            &self.input_context,
            stage::get_global_from_stage(&self.world, self.stage_entity),
            &frame.pointer_events,
            &self.settings,
        );
        intents.extend(pointer_intents(&self.world, &pointer_events, &self.settings));

        let mut report = FrameReport::default();
        for intent in intents {
            if !self.apply(intent) {
                log::trace!("[XR_DISPATCH] {intent:?} had no effect");
                continue;
            }
            if let Intent::Button(event) = intent {
                report.button_events.push(event);
            }
            report.intents.push(intent);
        }

        self.update_global_transforms();
        log::trace!(
            "[XR_DISPATCH] Frame {} applied {} intents",
            self.frame_index,
            report.intents.len()
        );

        report
    }

    /// Apply one intent to the world. Returns whether it changed anything.
    fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Button(event) => {
                log::info!("[XR_DISPATCH] {event}");
                true
            }
            Intent::Translate(offset) => {
                log::debug!("[XR_DISPATCH] Moving by {offset:?}");
                locomotion::translate_stage(&mut self.world, self.stage_entity, offset)
            }
            Intent::Rotate { degrees, kind } => {
                log::debug!("[XR_DISPATCH] {kind:?} turn by {degrees} degrees");
                locomotion::rotate_stage(
                    &mut self.world,
                    self.stage_entity,
                    self.hmd_entity,
                    degrees,
                )
            }
            Intent::Grab(handedness) => {
                let hand_entity = self.hand_entity(handedness);
                grabbing::grab(&mut self.world, hand_entity, self.settings.grab_radius).is_some()
            }
            Intent::Release(handedness) => {
                let hand_entity = self.hand_entity(handedness);
                grabbing::release(&mut self.world, hand_entity).is_some()
            }
            Intent::ToggleHighlight(entity) => {
                pointers::toggle_highlight(&mut self.world, entity, self.settings.outline_width)
            }
        }
    }

    fn update_global_transforms(&mut self) {
        update_global_transform_system(&mut self.world);
        update_global_transform_with_parent_system(&mut self.world);
    }
}

/// Turn a frame of controller input into intents, without touching the world.
///
/// Button events come first, then grabs and releases for the grab hand, then locomotion for the
/// locomotion hand. `delta_time` is in seconds and `forward` is the camera's global forward
/// direction.
pub fn dispatch_intents(
    input_context: &InputContext,
    delta_time: f32,
    forward: Vec3,
    settings: &Settings,
) -> Vec<Intent> {
    let mut intents: Vec<Intent> = button_events(input_context)
        .into_iter()
        .map(Intent::Button)
        .collect();

    intents.extend(grab_intents(
        input_context.hand(settings.grab_hand),
        settings.grab_hand,
    ));
    intents.extend(locomotion_intents(
        input_context.hand(settings.locomotion_hand),
        delta_time,
        forward,
        settings,
    ));

    intents
}
