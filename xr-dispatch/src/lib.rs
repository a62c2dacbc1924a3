#![deny(missing_docs)]

//! Per-frame controller input dispatch for immersive VR scenes.
//!
//! `xr-dispatch` sits between an XR runtime and a scene. Each frame the host hands a [`FrameInput`]
//! (controller snapshots, headset pose, pointer rays) to a [`Dispatcher`], which:
//!
//! - turns button state changes into [`ButtonEvent`]s,
//! - drives thumbstick locomotion (smooth movement, smooth turning and snap turning),
//! - grabs and releases [`components::Grabbable`] objects with the squeeze button,
//! - toggles the outline of [`components::Pickable`] objects hit by a pointer.
//!
//! The scene lives in a [`hecs::World`] using [`glam`] transforms, so the whole thing runs headless.
//! Rendering, asset decoding and XR session management are left to the host.
//!
//! # Getting started
//! ```
//! use xr_dispatch::{scene, ControllerSnapshot, Dispatcher, FrameInput, Settings};
//!
//! let mut dispatcher = Dispatcher::new(Settings::default());
//! scene::add_scene(&mut dispatcher.world, &scene::default_scene()).unwrap();
//!
//! let frame = FrameInput::new(11.1).with_right(ControllerSnapshot::default());
//! let report = dispatcher.update(&frame);
//! assert!(report.button_events.is_empty());
//! ```

pub use glam;
pub use hecs;

pub use contexts::{
    Button, ButtonEvent, ControllerSnapshot, Edge, FrameInput, HandInput, InputContext,
    PointerEvent, PointerEventKind,
};
pub use dispatch_error::DispatchError;
pub use dispatcher::{dispatch_intents, Dispatcher, FrameReport};
pub use intent::{Intent, TurnKind};
pub use settings::{Settings, TurnPolicy};

/// Components are the data attached to entities in the scene
pub mod components;
/// Contexts hold the per-frame state supplied by the host
pub mod contexts;
mod dispatch_error;
mod dispatcher;
mod intent;
/// Describe and spawn the objects of a scene
pub mod scene;
mod settings;
/// Systems are functions called each frame to read input or update the scene
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// xr-dispatch result type
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
