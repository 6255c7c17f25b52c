use atelier_engine::coords::Vec2;
use atelier_engine::input::Key;

pub use atelier_engine::input::Modifiers;

/// High-level events routed to controls.
///
/// Produced by [`crate::dispatch::Dispatcher`] from raw host input.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed and released at `pos` without travelling past
    /// the drag threshold.
    Click { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `pos` is the current position; `start` is where the press began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a drag.
    ///
    /// Fires even when `pos` is outside the control; use `rect.contains(start)`
    /// to check ownership of the drag.
    DragEnd { pos: Vec2, start: Vec2 },
    /// The host cancelled an in-flight drag. Controls keep the last position
    /// they applied and drop any per-gesture state.
    DragCancel { start: Vec2 },
    /// Named key pressed (arrows, Backspace, Delete, …).
    KeyPress { key: Key, modifiers: Modifiers },
}

/// Result returned by [`crate::control::Control::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
