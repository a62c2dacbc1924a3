/// Axis aligned bounds used for grabbing and picking
pub mod bounding_box;
/// Transform from local to global space
pub mod global_transform;
/// Markers for objects that can be picked up
pub mod grabbable;
/// Hand presence driven by a controller
pub mod hand;
/// Outline state for pickable objects
pub mod highlight;
/// The player's headset
pub mod hmd;
/// Debug information
pub mod info;
/// Transform relative to the parent
pub mod local_transform;
/// Transform hierarchy
pub mod parent;
/// The player's frame of reference
pub mod stage;

pub use bounding_box::BoundingBox;
pub use global_transform::GlobalTransform;
pub use grabbable::{Grabbable, Grabbed};
pub use hand::{Hand, Handedness};
pub use highlight::{Highlight, Pickable};
pub use hmd::HMD;
pub use info::Info;
pub use local_transform::LocalTransform;
pub use parent::Parent;
pub use stage::Stage;
