use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single host surface.
///
/// Holds "is down" information and the current pointer position.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the surface is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state.
    ///
    /// Returns `true` when the event changed the pressed set (a fresh press or
    /// release); key repeats and duplicate presses return `false`.
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
                false
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets so nothing stays stuck.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
                false
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                false
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                false
            }

            InputEvent::PointerCancel => {
                self.buttons_down.clear();
                false
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => self.keys_down.insert(*key),
                    KeyState::Released => self.keys_down.remove(key),
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(*button),
                    MouseButtonState::Released => self.buttons_down.remove(button),
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_buttons() {
        let mut state = InputState::default();
        assert!(state.apply_event(&InputEvent::primary(MouseButtonState::Pressed, 3.0, 4.0)));
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(3.0, 4.0)));

        // Duplicate press is not a transition.
        assert!(!state.apply_event(&InputEvent::primary(MouseButtonState::Pressed, 3.0, 4.0)));
        assert!(state.apply_event(&InputEvent::primary(MouseButtonState::Released, 5.0, 4.0)));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::key_press(Key::Shift, Modifiers::SHIFT));
        assert!(state.key_down(Key::Shift));
        state.apply_event(&InputEvent::Focused(false));
        assert!(!state.key_down(Key::Shift));
    }

    #[test]
    fn key_event_updates_modifiers() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::key_press(Key::ArrowUp, Modifiers::SHIFT));
        assert!(state.modifiers.shift);
    }
}
