use glam::Vec3;
use hecs::Entity;

use crate::{components::Handedness, ButtonEvent};

/// Whether a turn came from holding the stick or from flicking it past the snap threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    /// Proportional to the stick and the frame time
    Smooth,
    /// A fixed step, once per threshold crossing
    Snap,
}

/// A change to the scene requested by the input of a single frame.
///
/// Intents are produced by [`crate::dispatch_intents`] (and the pointer system) without touching
/// the world, then applied in order by [`crate::Dispatcher::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// A button changed state. Informational only.
    Button(ButtonEvent),
    /// Move the player by this offset in global space
    Translate(Vec3),
    /// Turn the player about the vertical axis through the headset. Positive turns right.
    Rotate {
        /// Angle in degrees
        degrees: f32,
        /// Where the turn came from
        kind: TurnKind,
    },
    /// Try to pick up an object with this hand
    Grab(Handedness),
    /// Drop whatever this hand is holding
    Release(Handedness),
    /// Flip the outline of this entity
    ToggleHighlight(Entity),
}
