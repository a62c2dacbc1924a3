use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{components::hand::Handedness, DispatchError, DispatchResult};

/// What to do when the thumbstick is pushed far enough to both smooth turn and snap turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPolicy {
    /// Above the snap threshold only snap turns are applied; smooth turning stops.
    SnapSuppressesSmooth,
    /// Smooth and snap turns are both applied. A stick held past the threshold keeps smooth
    /// turning after the snap.
    Additive,
}

/// Tunables for locomotion and interaction.
///
/// Every field has a default, so a settings file only needs to name what it changes:
/// ```
/// let settings = xr_dispatch::Settings::from_json_str(r#"{ "move_speed": 1.5 }"#).unwrap();
/// assert_eq!(settings.move_speed, 1.5);
/// assert_eq!(settings.turn_rate, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Thumbstick values with a magnitude at or below this are ignored
    pub dead_zone: f32,
    /// Maximum forward speed in metres per second
    pub move_speed: f32,
    /// Maximum smooth turn rate in degrees per second
    pub turn_rate: f32,
    /// Thumbstick x value that has to be crossed to snap turn
    pub snap_threshold: f32,
    /// Size of a single snap turn in degrees
    pub snap_angle: f32,
    /// How smooth and snap turning interact
    pub turn_policy: TurnPolicy,
    /// Which thumbstick drives locomotion
    pub locomotion_hand: Handedness,
    /// Which squeeze button grabs objects
    pub grab_hand: Handedness,
    /// How close (in metres) the grip has to be to an object's bounds to grab it
    pub grab_radius: f32,
    /// Outline width applied when an object is highlighted
    pub outline_width: f32,
    /// Treat a trigger press on a controller with an aim pose as a pointer-down
    pub trigger_pointer: bool,
    /// Pointer rays stop after this many metres
    pub pointer_max_distance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dead_zone: 0.1,
            move_speed: 3.0,
            turn_rate: 60.0,
            snap_threshold: 0.75,
            snap_angle: 45.0,
            turn_policy: TurnPolicy::SnapSuppressesSmooth,
            locomotion_hand: Handedness::Right,
            grab_hand: Handedness::Right,
            grab_radius: 0.05,
            outline_width: 0.02,
            trigger_pointer: true,
            pointer_max_distance: 40.0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document, then validate them.
    pub fn from_json_str(json: &str) -> DispatchResult<Settings> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> DispatchResult<Settings> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("[XR_DISPATCH_SETTINGS] Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> DispatchResult<()> {
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(invalid(format!(
                "dead_zone must be in [0, 1), got {}",
                self.dead_zone
            )));
        }
        // Written so that NaN fails
        if !(self.snap_threshold > self.dead_zone && self.snap_threshold < 1.0) {
            return Err(invalid(format!(
                "snap_threshold must be between dead_zone and 1, got {}",
                self.snap_threshold
            )));
        }

        for (name, value) in [
            ("move_speed", self.move_speed),
            ("turn_rate", self.turn_rate),
            ("snap_angle", self.snap_angle),
            ("grab_radius", self.grab_radius),
            ("outline_width", self.outline_width),
            ("pointer_max_distance", self.pointer_max_distance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> DispatchError {
    DispatchError::InvalidSettings(message)
}
