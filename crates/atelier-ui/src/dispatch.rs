use atelier_engine::coords::{Rect, Vec2};
use atelier_engine::input::{
    InputEvent,
    InputState,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

use crate::control::Control;
use crate::event::{EventResult, UiEvent};
use crate::gesture::{DragConfig, DragGesture};

/// Turns raw host input into [`UiEvent`]s and routes them to a control.
///
/// Owns the [`InputState`] for one host surface and the drag gesture of the
/// primary button. Keyboard events are forwarded as `KeyPress` on press and
/// key-repeat; releases are absorbed.
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = Dispatcher::new(DragConfig::default());
/// let mut editor = GradientEditor::new(GradientConfig::default());
///
/// // In the host's event callback:
/// dispatcher.dispatch(&event, &mut editor, track_rect);
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    pub input: InputState,
    gesture: DragGesture,
}

impl Dispatcher {
    pub fn new(config: DragConfig) -> Self {
        Self { input: InputState::default(), gesture: DragGesture::new(config) }
    }

    #[inline]
    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Updates input state and returns the high-level event `ev` produces, if any.
    pub fn translate(&mut self, ev: &InputEvent) -> Option<UiEvent> {
        let transitioned = self.input.apply_event(ev);

        match ev {
            InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y, .. }) => {
                let pos = Vec2::new(*x, *y);
                match state {
                    MouseButtonState::Pressed if transitioned => {
                        self.gesture.pointer_down(pos);
                        None
                    }
                    MouseButtonState::Pressed => None,
                    MouseButtonState::Released => self.gesture.pointer_up(pos),
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.gesture.pointer_move(Vec2::new(*x, *y))
            }

            InputEvent::PointerCancel | InputEvent::Focused(false) => self.gesture.cancel(),

            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                Some(UiEvent::KeyPress { key: *key, modifiers: *modifiers })
            }

            _ => None,
        }
    }

    /// Translates `ev` and, when it yields a [`UiEvent`], routes it to `control`.
    pub fn dispatch<C: Control + ?Sized>(&mut self, ev: &InputEvent, control: &mut C, rect: Rect) -> EventResult {
        match self.translate(ev) {
            Some(ui_event) => {
                log::trace!("dispatch {ui_event:?} to control at {rect:?}");
                control.on_event(&ui_event, rect)
            }
            None => EventResult::Ignored,
        }
    }
}
