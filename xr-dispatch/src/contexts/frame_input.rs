use glam::Affine3A;

use super::ControllerSnapshot;
use crate::util::Ray;

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// The pointer was pressed
    Down,
    /// The pointer was released
    Up,
}

/// A pointer event from the host (eg. a mouse click or a controller's select action), with the
/// ray it was cast along in global space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Down or up
    pub kind: PointerEventKind,
    /// The pick ray in global space
    pub ray: Ray,
}

impl PointerEvent {
    /// A pointer-down along `ray`
    pub fn down(ray: Ray) -> Self {
        Self {
            kind: PointerEventKind::Down,
            ray,
        }
    }
}

/// Everything the host knows about the user for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Time since the last frame, in milliseconds
    pub delta_time_ms: f32,
    /// Pose of the headset in stage space, if it is being tracked
    pub stage_from_head: Option<Affine3A>,
    /// Left controller, if connected
    pub left: Option<ControllerSnapshot>,
    /// Right controller, if connected
    pub right: Option<ControllerSnapshot>,
    /// Pointer events raised since the last frame
    pub pointer_events: Vec<PointerEvent>,
}

impl FrameInput {
    /// An empty frame lasting `delta_time_ms` milliseconds
    pub fn new(delta_time_ms: f32) -> Self {
        Self {
            delta_time_ms,
            ..Default::default()
        }
    }

    /// Set the headset pose
    pub fn with_head(mut self, stage_from_head: Affine3A) -> Self {
        self.stage_from_head = Some(stage_from_head);
        self
    }

    /// Set the left controller state
    pub fn with_left(mut self, snapshot: ControllerSnapshot) -> Self {
        self.left = Some(snapshot);
        self
    }

    /// Set the right controller state
    pub fn with_right(mut self, snapshot: ControllerSnapshot) -> Self {
        self.right = Some(snapshot);
        self
    }

    /// Add a pointer event
    pub fn with_pointer_event(mut self, event: PointerEvent) -> Self {
        self.pointer_events.push(event);
        self
    }

    /// Time since the last frame, in seconds. Negative or non-finite values are treated as zero.
    pub fn delta_time(&self) -> f32 {
        if self.delta_time_ms.is_finite() {
            self.delta_time_ms.max(0.0) / 1000.0
        } else {
            0.0
        }
    }
}
