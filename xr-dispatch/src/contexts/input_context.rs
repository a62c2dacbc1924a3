use std::fmt;

use glam::{Affine3A, Vec2};

use crate::components::Handedness;

/// The named digital controls on a hand controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    /// Index finger trigger
    Trigger,
    /// Grip / squeeze button
    Squeeze,
    /// Clicking the thumbstick in
    Thumbstick,
    /// X face button (left controller)
    X,
    /// Y face button (left controller)
    Y,
    /// A face button (right controller)
    A,
    /// B face button (right controller)
    B,
}

impl Button {
    /// Number of named buttons
    pub const COUNT: usize = 7;

    /// Every button, in the order events are emitted
    pub const ALL: [Button; Button::COUNT] = [
        Button::Trigger,
        Button::Squeeze,
        Button::Thumbstick,
        Button::X,
        Button::Y,
        Button::A,
        Button::B,
    ];

    /// The control's identifier, eg. `x-button`
    pub fn name(self) -> &'static str {
        match self {
            Button::Trigger => "trigger",
            Button::Squeeze => "squeeze",
            Button::Thumbstick => "thumbstick",
            Button::X => "x-button",
            Button::Y => "y-button",
            Button::A => "a-button",
            Button::B => "b-button",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way a button changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Went from not pressed to pressed
    Pressed,
    /// Went from pressed to not pressed
    Released,
}

/// A button changed state between the previous frame and this one.
///
/// Displays as eg. `right squeeze pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonEvent {
    /// The controller the button is on
    pub handedness: Handedness,
    /// The button that changed
    pub button: Button,
    /// How it changed
    pub edge: Edge,
}

impl fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Pressed => "pressed",
            Edge::Released => "released",
        };
        write!(f, "{} {} {}", self.handedness, self.button, edge)
    }
}

/// The state of one controller for one frame, as reported by the XR runtime.
///
/// Controls the device doesn't have are left as `None`, and are never reported as changing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerSnapshot {
    buttons: [Option<bool>; Button::COUNT],
    thumbstick: Option<Vec2>,
    stage_from_grip: Affine3A,
    stage_from_aim: Option<Affine3A>,
}

impl ControllerSnapshot {
    /// Set whether a button is pressed
    pub fn with_button(mut self, button: Button, pressed: bool) -> Self {
        self.buttons[button.index()] = Some(pressed);
        self
    }

    /// Set the thumbstick position. Each axis is clamped to [-1, 1].
    pub fn with_thumbstick(mut self, xy: Vec2) -> Self {
        self.thumbstick = Some(xy.clamp(Vec2::NEG_ONE, Vec2::ONE));
        self
    }

    /// Set the pose of the grip in stage space
    pub fn with_grip(mut self, stage_from_grip: Affine3A) -> Self {
        self.stage_from_grip = stage_from_grip;
        self
    }

    /// Set the pose of the aim (pointing ray) in stage space
    pub fn with_aim(mut self, stage_from_aim: Affine3A) -> Self {
        self.stage_from_aim = Some(stage_from_aim);
        self
    }

    /// Is the button pressed? `None` if the controller has no such button.
    pub fn button(&self, button: Button) -> Option<bool> {
        self.buttons[button.index()]
    }

    /// The thumbstick position, if the controller has one. Pushing the stick away from the user
    /// gives a negative `y`.
    pub fn thumbstick(&self) -> Option<Vec2> {
        self.thumbstick
    }

    /// Pose of the grip in stage space
    pub fn stage_from_grip(&self) -> Affine3A {
        self.stage_from_grip
    }

    /// Pose of the aim in stage space, if the controller reports one
    pub fn stage_from_aim(&self) -> Option<Affine3A> {
        self.stage_from_aim
    }
}

/// Input for one hand, holding this frame's and last frame's controller state.
#[derive(Debug, Clone, Default)]
pub struct HandInput {
    current: Option<ControllerSnapshot>,
    previous: Option<ControllerSnapshot>,
}

impl HandInput {
    /// This frame's controller state, or `None` if the controller is disconnected
    pub fn current(&self) -> Option<&ControllerSnapshot> {
        self.current.as_ref()
    }

    /// Last frame's controller state
    pub fn previous(&self) -> Option<&ControllerSnapshot> {
        self.previous.as_ref()
    }

    /// Is the controller connected?
    pub fn connected(&self) -> bool {
        self.current.is_some()
    }

    /// Did the controller go away this frame?
    pub fn just_disconnected(&self) -> bool {
        self.previous.is_some() && self.current.is_none()
    }

    /// Get the current state of a button. `false` if the button or controller is missing.
    pub fn button(&self, button: Button) -> bool {
        self.current
            .and_then(|c| c.button(button))
            .unwrap_or(false)
    }

    /// How did the button change this frame? `None` if it didn't, or if it wasn't present on both
    /// frames.
    pub fn button_edge(&self, button: Button) -> Option<Edge> {
        let previous = self.previous?.button(button)?;
        let current = self.current?.button(button)?;
        match (previous, current) {
            (false, true) => Some(Edge::Pressed),
            (true, false) => Some(Edge::Released),
            _ => None,
        }
    }

    /// Was the button just pressed this frame?
    pub fn button_just_pressed(&self, button: Button) -> bool {
        self.button_edge(button) == Some(Edge::Pressed)
    }

    /// Was the button just released this frame?
    pub fn button_just_released(&self, button: Button) -> bool {
        self.button_edge(button) == Some(Edge::Released)
    }

    /// The current thumbstick position
    pub fn thumbstick(&self) -> Option<Vec2> {
        self.current.and_then(|c| c.thumbstick())
    }

    /// Last frame's thumbstick position
    pub fn thumbstick_prev(&self) -> Option<Vec2> {
        self.previous.and_then(|c| c.thumbstick())
    }

    /// The current grip pose in stage space
    pub fn stage_from_grip(&self) -> Option<Affine3A> {
        self.current.map(|c| c.stage_from_grip())
    }

    /// The current aim pose in stage space
    pub fn stage_from_aim(&self) -> Option<Affine3A> {
        self.current.and_then(|c| c.stage_from_aim())
    }

    fn update(&mut self, snapshot: Option<ControllerSnapshot>) {
        self.previous = self.current.take();
        self.current = snapshot;
    }
}

/// Context that holds input state for both hands. Allows systems to query for input events
/// without having to worry about the XR runtime.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    /// Input for the left hand
    pub left: HandInput,
    /// Input for the right hand
    pub right: HandInput,
}

impl InputContext {
    /// Get the input for a hand
    pub fn hand(&self, handedness: Handedness) -> &HandInput {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Shift this frame's state into last frame's and store the new snapshots. Called by
    /// [`crate::Dispatcher::update`] at the start of each frame.
    pub fn update(
        &mut self,
        left: Option<ControllerSnapshot>,
        right: Option<ControllerSnapshot>,
    ) {
        if self.left.connected() != left.is_some() {
            log_connection(Handedness::Left, left.is_some());
        }
        if self.right.connected() != right.is_some() {
            log_connection(Handedness::Right, right.is_some());
        }

        self.left.update(left);
        self.right.update(right);
    }
}

fn log_connection(handedness: Handedness, connected: bool) {
    if connected {
        log::info!("[XR_DISPATCH_INPUT] {handedness} controller connected");
    } else {
        log::info!("[XR_DISPATCH_INPUT] {handedness} controller disconnected");
    }
}
