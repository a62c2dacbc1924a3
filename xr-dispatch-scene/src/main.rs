//! Headless run of the tutorial scene.
//!
//! Plays a scripted controller session through the dispatcher at 90Hz: walk up to the model,
//! snap turn away and back, pick it up, put it down, and highlight it with the trigger. Every
//! button event and scene change is logged. Pass a settings JSON file as the first argument to
//! override the defaults; set `RUST_LOG=debug` to see every intent.

use anyhow::anyhow;
use xr_dispatch::{
    components::{GlobalTransform, Highlight},
    glam::{vec2, Affine3A, Quat, Vec2, Vec3},
    scene,
    util::affine_from_pose,
    Button, ControllerSnapshot, DispatchError, DispatchResult, Dispatcher, FrameInput, Settings,
};

const FRAME_TIME_MS: f32 = 1000.0 / 90.0;
const HEAD_HEIGHT: f32 = 1.6;

/// One step of the script: hold this right controller state for this many frames.
struct Step {
    description: &'static str,
    frames: usize,
    right: ControllerSnapshot,
}

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("[XR_DISPATCH_SCENE] MAIN!");

    if let Err(e) = real_main() {
        log::error!("[XR_DISPATCH_SCENE] Error running scene: {e:?}");
        std::process::exit(1);
    }
    log::info!("[XR_DISPATCH_SCENE] FINISHED! Goodbye!");
}

fn real_main() -> DispatchResult<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut dispatcher = Dispatcher::new(settings);
    scene::add_scene(&mut dispatcher.world, &scene::default_scene())?;
    let dragonite = scene::find_by_name(&dispatcher.world, "dragonite")
        .ok_or_else(|| DispatchError::Other(anyhow!("the default scene has no dragonite")))?;

    // Poses arrive from the runtime as mint types
    let head = affine_from_pose(
        Vec3::new(0.0, HEAD_HEIGHT, 0.0).into(),
        Quat::IDENTITY.into(),
    );
    for step in script() {
        log::info!("[XR_DISPATCH_SCENE] {}", step.description);
        for _ in 0..step.frames {
            let frame = FrameInput::new(FRAME_TIME_MS)
                .with_head(head)
                .with_left(left_controller())
                .with_right(step.right);
            dispatcher.update(&frame);
        }
    }

    let player: Vec3 = dispatcher
        .world
        .get::<&GlobalTransform>(dispatcher.hmd_entity)?
        .translation();
    let model: Vec3 = dispatcher
        .world
        .get::<&GlobalTransform>(dragonite)?
        .translation();
    let outlined = dispatcher
        .world
        .get::<&Highlight>(dragonite)
        .map(|h| h.outlined)
        .unwrap_or(false);

    log::info!(
        "[XR_DISPATCH_SCENE] After {} frames the player is at {player:.2?}",
        dispatcher.frame_index(),
    );
    log::info!("[XR_DISPATCH_SCENE] The dragonite is at {model:.2?}, outlined: {outlined}");

    Ok(())
}

fn script() -> Vec<Step> {
    let rest = Vec3::new(0.2, 1.1, -0.2);
    let idle = right_controller(Vec2::ZERO, rest, false, false);
    // Reaching out in front of the face, into the model once we've walked up to it.
    let reach = Vec3::new(0.0, 1.3, -0.3);

    vec![
        Step {
            description: "Standing still",
            frames: 10,
            right: idle,
        },
        Step {
            description: "Walking forward",
            frames: 40,
            right: right_controller(vec2(0.0, -1.0), rest, false, false),
        },
        Step {
            description: "Snap turning right",
            frames: 5,
            right: right_controller(vec2(0.9, 0.0), reach, false, false),
        },
        Step {
            description: "Letting go of the stick",
            frames: 5,
            right: right_controller(Vec2::ZERO, reach, false, false),
        },
        Step {
            description: "Snap turning back",
            frames: 5,
            right: right_controller(vec2(-0.9, 0.0), reach, false, false),
        },
        Step {
            description: "Reaching for the dragonite",
            frames: 5,
            right: right_controller(Vec2::ZERO, reach, false, false),
        },
        Step {
            description: "Grabbing",
            frames: 5,
            right: right_controller(Vec2::ZERO, reach, true, false),
        },
        Step {
            description: "Lifting",
            frames: 20,
            right: right_controller(Vec2::ZERO, reach + Vec3::new(0.0, 0.3, 0.0), true, false),
        },
        Step {
            description: "Letting go",
            frames: 5,
            right: right_controller(Vec2::ZERO, reach + Vec3::new(0.0, 0.3, 0.0), false, false),
        },
        Step {
            description: "Pointing and pulling the trigger",
            frames: 5,
            right: right_controller(Vec2::ZERO, reach, false, true),
        },
        Step {
            description: "Releasing the trigger",
            frames: 5,
            right: right_controller(Vec2::ZERO, reach, false, false),
        },
    ]
}

fn right_controller(
    thumbstick: Vec2,
    grip: Vec3,
    squeeze: bool,
    trigger: bool,
) -> ControllerSnapshot {
    ControllerSnapshot::default()
        .with_button(Button::Trigger, trigger)
        .with_button(Button::Squeeze, squeeze)
        .with_button(Button::Thumbstick, false)
        .with_button(Button::A, false)
        .with_button(Button::B, false)
        .with_thumbstick(thumbstick)
        .with_grip(Affine3A::from_translation(grip))
        // Aim from head height so the ray passes through the model
        .with_aim(Affine3A::from_translation(Vec3::new(grip.x, HEAD_HEIGHT, grip.z)))
}

fn left_controller() -> ControllerSnapshot {
    ControllerSnapshot::default()
        .with_button(Button::Trigger, false)
        .with_button(Button::Squeeze, false)
        .with_button(Button::Thumbstick, false)
        .with_button(Button::X, false)
        .with_button(Button::Y, false)
        .with_thumbstick(Vec2::ZERO)
        .with_grip(Affine3A::from_translation(Vec3::new(-0.2, 1.1, -0.2)))
}
