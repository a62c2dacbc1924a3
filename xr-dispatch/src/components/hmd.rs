/// A marker component used to indicate the player's headset, or Head Mounted Display in the scene.
///
/// The entity marked with this component is parented to the [`super::Stage`], and its pose within the
/// stage is set each frame from [`crate::FrameInput`]. Its [`super::GlobalTransform`] is the camera:
/// locomotion moves in the direction it faces, and turns pivot around it.
#[derive(Debug, Clone, Copy)]
pub struct HMD;
