//! Nine-point pivot (anchor) picker.
//!
//! The picker surface is split into a 3×3 grid of anchors. Clicking a dot
//! selects its anchor; dragging across the surface snaps to whichever anchor
//! region the pointer is in.

use std::fmt;

use atelier_engine::coords::{Rect, Vec2};

use crate::control::Control;
use crate::event::{EventResult, UiEvent};
use crate::gesture::DragConfig;

/// One of the nine named anchor points, in row-major order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PivotPosition {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl PivotPosition {
    pub const ALL: [PivotPosition; 9] = [
        PivotPosition::TopLeft,
        PivotPosition::TopCenter,
        PivotPosition::TopRight,
        PivotPosition::CenterLeft,
        PivotPosition::Center,
        PivotPosition::CenterRight,
        PivotPosition::BottomLeft,
        PivotPosition::BottomCenter,
        PivotPosition::BottomRight,
    ];

    /// Row-major index, 0 = top left.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            PivotPosition::TopLeft => "Top Left",
            PivotPosition::TopCenter => "Top Center",
            PivotPosition::TopRight => "Top Right",
            PivotPosition::CenterLeft => "Left",
            PivotPosition::Center => "Center",
            PivotPosition::CenterRight => "Right",
            PivotPosition::BottomLeft => "Bottom Left",
            PivotPosition::BottomCenter => "Bottom Center",
            PivotPosition::BottomRight => "Bottom Right",
        }
    }

    /// Vertical keyword: `top`, `center` or `bottom`.
    pub fn y(self) -> &'static str {
        match self.index() / 3 {
            0 => "top",
            1 => "center",
            _ => "bottom",
        }
    }

    /// Horizontal keyword: `left`, `center` or `right`.
    pub fn x(self) -> &'static str {
        match self.index() % 3 {
            0 => "left",
            1 => "center",
            _ => "right",
        }
    }

    /// CSS keyword, `"<y> <x>"` except for the centre which is just `center`.
    pub fn keyword(self) -> &'static str {
        match self {
            PivotPosition::TopLeft => "top left",
            PivotPosition::TopCenter => "top center",
            PivotPosition::TopRight => "top right",
            PivotPosition::CenterLeft => "center left",
            PivotPosition::Center => "center",
            PivotPosition::CenterRight => "center right",
            PivotPosition::BottomLeft => "bottom left",
            PivotPosition::BottomCenter => "bottom center",
            PivotPosition::BottomRight => "bottom right",
        }
    }

    /// Parses a keyword. `"center center"` is accepted for the centre.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s == "center center" {
            return Some(PivotPosition::Center);
        }
        Self::ALL.into_iter().find(|p| p.keyword() == s)
    }

    /// Where this anchor's dot sits on `rect`: corners, edge midpoints and centre.
    pub fn anchor(self, rect: Rect) -> Vec2 {
        let fx = (self.index() % 3) as f32 * 0.5;
        let fy = (self.index() / 3) as f32 * 0.5;
        Vec2::new(rect.origin.x + rect.size.x * fx, rect.origin.y + rect.size.y * fy)
    }

    /// The anchor whose drag region contains `p`, if any.
    ///
    /// With `w` and `h` a third of the surface (rounded), the columns are
    /// `[x, x + w/2]`, `[x + w, x + 2w]` and `[x + 2.5w, x + 3w]`, and rows are
    /// `h` tall. Bounds are inclusive and the first match in row-major order
    /// wins. Pointers in the gaps between columns resolve to nothing.
    pub fn resolve(rect: Rect, p: Vec2) -> Option<Self> {
        let w = (rect.size.x / 3.0).round();
        let h = (rect.size.y / 3.0).round();
        let columns = [(0.0, w / 2.0), (w, w), (w * 2.5, w / 2.0)];

        Self::ALL.into_iter().find(|pos| {
            let (dx, cw) = columns[pos.index() % 3];
            let dy = (pos.index() / 3) as f32 * h;
            Rect::new(rect.origin.x + dx, rect.origin.y + dy, cw, h).contains_inclusive(p)
        })
    }
}

impl fmt::Display for PivotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A preset anchor or a free pixel offset from the centre.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PivotValue {
    Preset(PivotPosition),
    Custom { x: i32, y: i32 },
}

impl PivotValue {
    pub fn preset(self) -> Option<PivotPosition> {
        match self {
            PivotValue::Preset(p) => Some(p),
            PivotValue::Custom { .. } => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PivotValue::Preset(p) => p.label(),
            PivotValue::Custom { .. } => "Custom",
        }
    }

    /// `background-position` value.
    pub fn css(self) -> String {
        match self {
            PivotValue::Preset(p) => format!("{} {}", p.y(), p.x()),
            PivotValue::Custom { x, y } => format!("calc(50% + {x}px) calc(50% + {y}px)"),
        }
    }
}

impl Default for PivotValue {
    fn default() -> Self {
        PivotValue::Preset(PivotPosition::Center)
    }
}

impl From<PivotPosition> for PivotValue {
    fn from(p: PivotPosition) -> Self {
        PivotValue::Preset(p)
    }
}

/// Pivot picker control.
///
/// # Example
/// ```rust,ignore
/// PivotControl::new()
///     .value(PivotPosition::TopLeft)
///     .on_change(|v| log::info!("pivot: {}", v.label()))
/// ```
pub struct PivotControl {
    value: PivotValue,
    /// Side of the square hit area around each dot.
    dot_size: f32,
    drag_threshold: f32,
    /// Set once a drag has left the threshold radius.
    dragging: bool,
    on_change: Option<Box<dyn FnMut(PivotValue)>>,
}

impl PivotControl {
    pub const DRAG_THRESHOLD: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            value: PivotValue::default(),
            dot_size: 6.0,
            drag_threshold: Self::DRAG_THRESHOLD,
            dragging: false,
            on_change: None,
        }
    }

    /// Gesture settings hosts should give the dispatcher driving this control.
    pub fn drag_config() -> DragConfig {
        DragConfig::default().threshold(Self::DRAG_THRESHOLD)
    }

    pub fn value(mut self, v: impl Into<PivotValue>) -> Self { self.value = v.into(); self }
    pub fn dot_size(mut self, v: f32) -> Self { self.dot_size = v.max(0.0); self }
    pub fn on_change(mut self, f: impl FnMut(PivotValue) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn get(&self) -> PivotValue {
        self.value
    }

    pub fn label(&self) -> &'static str {
        self.value.label()
    }

    pub fn set(&mut self, v: impl Into<PivotValue>) {
        let v = v.into();
        if v == self.value {
            return;
        }
        log::debug!("pivot -> {}", v.label());
        self.value = v;
        if let Some(f) = &mut self.on_change {
            f(v);
        }
    }

    /// The dot under `p`, if any.
    pub fn dot_at(&self, rect: Rect, p: Vec2) -> Option<PivotPosition> {
        let half = self.dot_size * 0.5;
        PivotPosition::ALL.into_iter().find(|pos| {
            let a = pos.anchor(rect);
            (p.x - a.x).abs() <= half && (p.y - a.y).abs() <= half
        })
    }
}

impl Default for PivotControl { fn default() -> Self { Self::new() } }

impl Control for PivotControl {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } => match self.dot_at(rect, *pos) {
                Some(p) => {
                    self.set(p);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start }
                if rect.contains_inclusive(*start) =>
            {
                let past_threshold = self.dragging || start.distance(*pos) > self.drag_threshold;
                if past_threshold {
                    self.dragging = true;
                    if let Some(p) = PivotPosition::resolve(rect, *pos) {
                        self.set(p);
                    }
                }
                if matches!(event, UiEvent::DragEnd { .. }) {
                    self.dragging = false;
                }
                EventResult::Consumed
            }
            UiEvent::DragCancel { .. } => {
                self.dragging = false;
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn surface() -> Rect {
        Rect::new(0.0, 0.0, 90.0, 30.0)
    }

    // ── PivotPosition ─────────────────────────────────────────────────────

    #[test]
    fn keywords_parse_back() {
        for p in PivotPosition::ALL {
            assert_eq!(PivotPosition::parse(p.keyword()), Some(p));
        }
        assert_eq!(PivotPosition::parse("center center"), Some(PivotPosition::Center));
        assert_eq!(PivotPosition::parse("middle"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(PivotPosition::CenterLeft.label(), "Left");
        assert_eq!(PivotPosition::BottomCenter.label(), "Bottom Center");
        assert_eq!(PivotValue::Custom { x: 3, y: -4 }.label(), "Custom");
    }

    #[test]
    fn css_values() {
        assert_eq!(PivotValue::Preset(PivotPosition::TopRight).css(), "top right");
        assert_eq!(PivotValue::default().css(), "center center");
        assert_eq!(PivotValue::Custom { x: 12, y: -7 }.css(), "calc(50% + 12px) calc(50% + -7px)");
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_regions() {
        // w = 30, h = 10: columns [0,15], [30,60], [75,90].
        assert_eq!(PivotPosition::resolve(surface(), v(5.0, 5.0)), Some(PivotPosition::TopLeft));
        assert_eq!(PivotPosition::resolve(surface(), v(80.0, 2.0)), Some(PivotPosition::TopRight));
        assert_eq!(PivotPosition::resolve(surface(), v(45.0, 15.0)), Some(PivotPosition::Center));
        assert_eq!(PivotPosition::resolve(surface(), v(90.0, 30.0)), Some(PivotPosition::BottomRight));
    }

    #[test]
    fn shared_edges_go_to_first_region() {
        assert_eq!(PivotPosition::resolve(surface(), v(5.0, 10.0)), Some(PivotPosition::TopLeft));
    }

    #[test]
    fn gaps_resolve_to_nothing() {
        assert_eq!(PivotPosition::resolve(surface(), v(20.0, 5.0)), None);
        assert_eq!(PivotPosition::resolve(surface(), v(70.0, 25.0)), None);
        assert_eq!(PivotPosition::resolve(surface(), v(45.0, 31.0)), None);
    }

    // ── PivotControl ──────────────────────────────────────────────────────

    #[test]
    fn drag_into_top_right_region() {
        let mut c = PivotControl::new();
        c.on_event(&UiEvent::Drag { pos: v(82.0, 4.0), start: v(45.0, 15.0) }, surface());
        assert_eq!(c.label(), "Top Right");
    }

    #[test]
    fn drag_into_gap_keeps_value() {
        let mut c = PivotControl::new().value(PivotPosition::BottomLeft);
        c.on_event(&UiEvent::Drag { pos: v(20.0, 5.0), start: v(45.0, 15.0) }, surface());
        assert_eq!(c.get(), PivotValue::Preset(PivotPosition::BottomLeft));
    }

    #[test]
    fn short_drags_stay_below_threshold() {
        let mut c = PivotControl::new();
        c.on_event(&UiEvent::Drag { pos: v(3.0, 3.0), start: v(6.0, 6.0) }, surface());
        assert_eq!(c.get(), PivotValue::default());
    }

    #[test]
    fn click_on_dot_selects_preset() {
        let mut c = PivotControl::new();
        assert!(c.on_event(&UiEvent::Click { pos: v(89.0, 16.0) }, surface()).is_consumed());
        assert_eq!(c.get().preset(), Some(PivotPosition::CenterRight));
        assert_eq!(c.on_event(&UiEvent::Click { pos: v(20.0, 20.0) }, surface()), EventResult::Ignored);
    }
}
