/// Component that adds some information about the entity
/// Useful for debugging - added by default by [`crate::scene::add_scene`]
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Info {
    /// A helpful name
    pub name: String,
}

impl Info {
    /// Shortcut to create an [`Info`] with the given name
    pub fn named(name: impl Into<String>) -> Info {
        Info { name: name.into() }
    }
}
