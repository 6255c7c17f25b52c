use atelier_engine::coords::{Rect, Vec2};
use atelier_engine::input::{Key, Modifiers};

use crate::control::Control;
use crate::event::{EventResult, UiEvent};

pub const MAX_ANGLE: u16 = 360;

/// Angle in whole degrees of `pointer` around `center`, with 0° pointing up
/// and increasing clockwise. Always in [0, 360).
pub fn angle_from_pointer(center: Vec2, pointer: Vec2) -> u16 {
    let d = pointer - center;
    let radians = f64::from(d.y).atan2(f64::from(d.x));
    // Half-way values round up, towards positive infinity.
    let degrees = (radians.to_degrees() + 0.5).floor() as i32 + 90;
    if degrees < 0 { (360 + degrees) as u16 } else { degrees as u16 }
}

/// Circular angle picker.
///
/// The `rect` passed to [`Control::on_event`] is the dial; pointer angles are
/// measured from its centre.
///
/// # Example
/// ```rust,ignore
/// AngleInput::new()
///     .value(90)
///     .on_change(|deg| editor.set_angle(deg.into()))
/// ```
pub struct AngleInput {
    /// Current value, clamped to [0, 360].
    value: u16,
    step: u16,
    boost: u16,
    on_change: Option<Box<dyn FnMut(u16)>>,
}

impl AngleInput {
    pub fn new() -> Self {
        Self { value: 0, step: 1, boost: 10, on_change: None }
    }

    pub fn value(mut self, v: i32) -> Self {
        self.value = v.clamp(0, i32::from(MAX_ANGLE)) as u16;
        self
    }
    pub fn step(mut self, v: u16) -> Self { self.step = v; self }
    pub fn boost(mut self, v: u16) -> Self { self.boost = v; self }
    pub fn on_change(mut self, f: impl FnMut(u16) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn angle(&self) -> u16 {
        self.value
    }

    /// Clamps `v` and notifies when the value changes.
    pub fn set(&mut self, v: i32) {
        let next = v.clamp(0, i32::from(MAX_ANGLE)) as u16;
        if next == self.value {
            return;
        }
        self.value = next;
        if let Some(f) = &mut self.on_change {
            f(next);
        }
    }

    pub fn increment(&mut self, by: u16) {
        self.set(i32::from(self.value) + i32::from(by));
    }

    pub fn decrement(&mut self, by: u16) {
        self.set(i32::from(self.value) - i32::from(by));
    }

    pub fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        let by = if modifiers.shift { self.boost } else { self.step };
        match key {
            Key::ArrowUp | Key::ArrowRight => self.increment(by),
            Key::ArrowDown | Key::ArrowLeft => self.decrement(by),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

impl Default for AngleInput { fn default() -> Self { Self::new() } }

impl Control for AngleInput {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains_inclusive(*pos) => {
                self.set(i32::from(angle_from_pointer(rect.center(), *pos)));
                EventResult::Consumed
            }
            // The dial keeps tracking the pointer after it leaves, as long as
            // the press started on it.
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start }
                if rect.contains_inclusive(*start) =>
            {
                self.set(i32::from(angle_from_pointer(rect.center(), *pos)));
                EventResult::Consumed
            }
            UiEvent::KeyPress { key, modifiers } => self.on_key(*key, *modifiers),
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    // ── angle_from_pointer ────────────────────────────────────────────────

    #[test]
    fn compass_points() {
        let c = v(0.0, 0.0);
        assert_eq!(angle_from_pointer(c, v(0.0, -10.0)), 0);
        assert_eq!(angle_from_pointer(c, v(10.0, 0.0)), 90);
        assert_eq!(angle_from_pointer(c, v(0.0, 10.0)), 180);
        assert_eq!(angle_from_pointer(c, v(-10.0, 0.0)), 270);
    }

    #[test]
    fn upper_left_quadrant_wraps() {
        assert_eq!(angle_from_pointer(v(0.0, 0.0), v(-10.0, -10.0)), 315);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn shift_arrow_up_clamps_at_360() {
        let mut a = AngleInput::new().value(355);
        a.on_key(Key::ArrowUp, Modifiers::SHIFT);
        assert_eq!(a.angle(), 360);
    }

    #[test]
    fn arrows_step_and_clamp_at_zero() {
        let mut a = AngleInput::new().value(5);
        a.on_key(Key::ArrowRight, Modifiers::default());
        assert_eq!(a.angle(), 6);
        a.on_key(Key::ArrowDown, Modifiers::SHIFT);
        assert_eq!(a.angle(), 0);
        a.on_key(Key::ArrowLeft, Modifiers::default());
        assert_eq!(a.angle(), 0);
        assert_eq!(a.on_key(Key::Home, Modifiers::default()), EventResult::Ignored);
    }

    #[test]
    fn builder_value_is_clamped() {
        assert_eq!(AngleInput::new().value(-20).angle(), 0);
        assert_eq!(AngleInput::new().value(720).angle(), 360);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn drag_follows_pointer_around_centre() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let mut a = AngleInput::new().on_change(move |_| c.set(c.get() + 1));
        let dial = Rect::new(0.0, 0.0, 40.0, 40.0);

        a.on_event(&UiEvent::Drag { pos: v(40.0, 20.0), start: v(20.0, 5.0) }, dial);
        assert_eq!(a.angle(), 90);
        // Outside the dial, still owned by the drag.
        a.on_event(&UiEvent::DragEnd { pos: v(20.0, 100.0), start: v(20.0, 5.0) }, dial);
        assert_eq!(a.angle(), 180);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn drag_started_elsewhere_is_ignored() {
        let mut a = AngleInput::new();
        let dial = Rect::new(0.0, 0.0, 40.0, 40.0);
        let r = a.on_event(&UiEvent::Drag { pos: v(40.0, 20.0), start: v(90.0, 90.0) }, dial);
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(a.angle(), 0);
    }
}
