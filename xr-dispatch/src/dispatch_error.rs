use thiserror::Error;

/// Everything that can go wrong while setting up a scene or loading settings.
///
/// Per-frame dispatch never produces one of these: missing controllers, controls or poses are
/// simply skipped.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A setting is out of range
    #[error("The settings are invalid: {0}")]
    InvalidSettings(String),
    /// The settings file is not valid JSON for [`crate::Settings`]
    #[error("The settings could not be parsed")]
    SettingsFormat(#[from] serde_json::Error),
    /// An entity referenced during setup has been despawned
    #[error("The entity does not exist")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
    /// A component was missing or already borrowed
    #[error("There was a problem accessing a component")]
    Component(#[from] hecs::ComponentError),
    /// IO error
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
