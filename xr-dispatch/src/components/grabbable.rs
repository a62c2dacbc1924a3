use hecs::Entity;

/// Marks an entity as something a [`super::Hand`] can pick up.
///
/// When several grabbables are within reach of the grip, the one with the lowest `order` is taken,
/// regardless of distance. [`crate::scene::add_scene`] assigns orders in the order objects are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Grabbable {
    /// Position in the grab enumeration order
    pub order: u32,
}

/// Added to a [`Grabbable`] while it is attached to a hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grabbed {
    /// The hand entity holding this one
    pub hand: Entity,
}
