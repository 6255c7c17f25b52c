//! Pointer drag gesture as an explicit state machine.
//!
//! ```text
//!            down(p)                 move(q), |q-p| > threshold
//!   Idle ─────────────▶ Dragging(p) ───────────────────────────▶ emits Drag
//!    ▲                      │
//!    │   up(q): Click if never moved, DragEnd otherwise
//!    └──────────────────────┘   cancel: DragCancel if moved
//! ```
//!
//! The machine knows nothing about windowing toolkits; the dispatcher feeds
//! it pointer transitions and forwards the events it emits.

use atelier_engine::coords::Vec2;

use crate::event::UiEvent;

/// Drag recognition settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragConfig {
    /// Distance in logical pixels the pointer must travel from the press
    /// point before moves are reported as a drag.
    pub threshold: f32,
}

impl DragConfig {
    pub fn threshold(mut self, v: f32) -> Self {
        self.threshold = v.max(0.0);
        self
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { threshold: 0.0 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        origin: Vec2,
        /// Set once the pointer has left the threshold radius.
        moved: bool,
    },
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    config: DragConfig,
    state: DragState,
}

impl DragGesture {
    pub fn new(config: DragConfig) -> Self {
        Self { config, state: DragState::Idle }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// True between the first reported `Drag` and the release.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { moved: true, .. })
    }

    /// Primary button went down at `pos`.
    ///
    /// A press while already pressed restarts the gesture at `pos`.
    pub fn pointer_down(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            log::debug!("ignoring non-finite press at {pos:?}");
            return;
        }
        self.state = DragState::Dragging { origin: pos, moved: false };
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Option<UiEvent> {
        let DragState::Dragging { origin, moved } = &mut self.state else {
            return None;
        };
        if !pos.is_finite() {
            return None;
        }
        if !*moved && origin.distance(pos) <= self.config.threshold {
            return None;
        }
        *moved = true;
        Some(UiEvent::Drag { pos, start: *origin })
    }

    pub fn pointer_up(&mut self, pos: Vec2) -> Option<UiEvent> {
        let DragState::Dragging { origin, moved } = std::mem::replace(&mut self.state, DragState::Idle) else {
            return None;
        };
        let pos = if pos.is_finite() { pos } else { origin };
        if moved {
            Some(UiEvent::DragEnd { pos, start: origin })
        } else {
            Some(UiEvent::Click { pos })
        }
    }

    /// Abort the gesture without committing. Emits `DragCancel` only when a
    /// drag was actually in progress.
    pub fn cancel(&mut self) -> Option<UiEvent> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { origin, moved: true } => Some(UiEvent::DragCancel { start: origin }),
            _ => None,
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn press_release_in_place_is_click() {
        let mut g = DragGesture::default();
        g.pointer_down(v(10.0, 10.0));
        assert_eq!(g.pointer_up(v(10.0, 10.0)), Some(UiEvent::Click { pos: v(10.0, 10.0) }));
        assert_eq!(g.state(), DragState::Idle);
    }

    #[test]
    fn moves_stream_drag_then_end() {
        let mut g = DragGesture::default();
        g.pointer_down(v(0.0, 0.0));
        assert_eq!(g.pointer_move(v(4.0, 0.0)), Some(UiEvent::Drag { pos: v(4.0, 0.0), start: v(0.0, 0.0) }));
        assert!(g.is_dragging());
        assert_eq!(g.pointer_move(v(8.0, 0.0)), Some(UiEvent::Drag { pos: v(8.0, 0.0), start: v(0.0, 0.0) }));
        assert_eq!(g.pointer_up(v(9.0, 0.0)), Some(UiEvent::DragEnd { pos: v(9.0, 0.0), start: v(0.0, 0.0) }));
        assert!(!g.is_dragging());
    }

    #[test]
    fn threshold_suppresses_small_moves() {
        let mut g = DragGesture::new(DragConfig::default().threshold(5.0));
        g.pointer_down(v(0.0, 0.0));
        assert_eq!(g.pointer_move(v(3.0, 4.0)), None);
        assert_eq!(g.pointer_up(v(3.0, 4.0)), Some(UiEvent::Click { pos: v(3.0, 4.0) }));
    }

    #[test]
    fn once_past_threshold_small_moves_still_drag() {
        let mut g = DragGesture::new(DragConfig::default().threshold(5.0));
        g.pointer_down(v(0.0, 0.0));
        assert!(g.pointer_move(v(10.0, 0.0)).is_some());
        assert!(g.pointer_move(v(1.0, 0.0)).is_some());
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut g = DragGesture::default();
        assert_eq!(g.pointer_move(v(5.0, 5.0)), None);
        assert_eq!(g.pointer_up(v(5.0, 5.0)), None);
    }

    #[test]
    fn cancel_only_reports_active_drags() {
        let mut g = DragGesture::default();
        g.pointer_down(v(0.0, 0.0));
        assert_eq!(g.cancel(), None);

        g.pointer_down(v(0.0, 0.0));
        g.pointer_move(v(20.0, 0.0));
        assert_eq!(g.cancel(), Some(UiEvent::DragCancel { start: v(0.0, 0.0) }));
        assert_eq!(g.state(), DragState::Idle);
    }
}
