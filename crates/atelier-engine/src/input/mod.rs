//! Input subsystem.
//!
//! Public API is toolkit-agnostic: hosts translate their windowing or DOM
//! events into `InputEvent`s and feed them to the control layer.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
