/// Everything the host supplies for a single frame
pub mod frame_input;
/// Controller state and edge detection
pub mod input_context;

pub use frame_input::{FrameInput, PointerEvent, PointerEventKind};
pub use input_context::{Button, ButtonEvent, ControllerSnapshot, Edge, HandInput, InputContext};
