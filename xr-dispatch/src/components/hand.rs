use std::fmt;

use hecs::Entity;
use serde::{Deserialize, Serialize};

/// Which controller an entity belongs to
/// Used by components such as `Hand` to identify which controller they should map to
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// The left controller
    Left,
    /// The right controller
    Right,
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handedness::Left => f.write_str("left"),
            Handedness::Right => f.write_str("right"),
        }
    }
}

/// A tracked controller, parented to the stage. `hands_system` keeps it on the grip pose.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Which controller this is
    pub handedness: Handedness,
    /// Is the controller for this hand connected?
    pub connected: bool,
    /// The object currently held, if any
    pub grabbed_entity: Option<Entity>,
}

impl Hand {
    /// A disconnected left hand
    pub fn left() -> Hand {
        Hand::new(Handedness::Left)
    }

    /// A disconnected right hand
    pub fn right() -> Hand {
        Hand::new(Handedness::Right)
    }

    fn new(handedness: Handedness) -> Hand {
        Hand {
            handedness,
            connected: false,
            grabbed_entity: None,
        }
    }
}
