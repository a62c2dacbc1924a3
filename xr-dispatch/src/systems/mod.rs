#![allow(missing_docs)]
pub mod buttons;
pub mod grabbing;
pub mod hands;
pub mod locomotion;
pub mod pointers;
pub mod stage;
pub mod update_global_transform;
pub mod update_global_transform_with_parent;

pub use buttons::button_events;
pub use hands::hands_system;
pub use stage::hmd_system;
pub use update_global_transform::update_global_transform_system;
pub use update_global_transform_with_parent::update_global_transform_with_parent_system;
