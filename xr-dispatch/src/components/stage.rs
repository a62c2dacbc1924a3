/// Marker component for the player's frame of reference.
///
/// Moving or rotating the entity with this component moves the player through the world: the
/// [`super::HMD`] and both [`super::Hand`]s are parented to it.
#[derive(Debug, Clone, Copy)]
pub struct Stage;
