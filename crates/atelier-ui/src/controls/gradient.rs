use atelier_engine::coords::{Rect, Vec2};
use atelier_engine::input::{Key, Modifiers};
use atelier_engine::paint::{sorted_stops, Color, GradientKind, GradientStop, GradientStyle, StopId};
use uuid::Uuid;

use crate::control::Control;
use crate::event::{EventResult, UiEvent};
use crate::options::GradientType;

fn fresh_id() -> StopId {
    StopId::new(Uuid::new_v4().to_string())
}

/// Initial state and tuning for a [`GradientEditor`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    /// Seed stops as `(color, percent)`. An empty list falls back to the default seed.
    pub stops: Vec<(String, u8)>,
    pub kind: GradientKind,
    pub angle: u16,
    pub center: (u8, u8),
    /// Keyboard nudge step, and the step used while Shift is held.
    pub nudge: u8,
    pub nudge_boost: u8,
    /// Width of the grab area centred on each stop handle.
    pub handle_width: f32,
}

impl GradientConfig {
    pub fn stops<S: Into<String>>(mut self, stops: impl IntoIterator<Item = (S, u8)>) -> Self {
        self.stops = stops.into_iter().map(|(c, s)| (c.into(), s)).collect();
        self
    }
    pub fn kind(mut self, v: GradientKind) -> Self { self.kind = v; self }
    pub fn angle(mut self, v: u16) -> Self { self.angle = v.min(360); self }
    pub fn center(mut self, x: u8, y: u8) -> Self { self.center = (x.min(100), y.min(100)); self }
    pub fn nudge(mut self, step: u8, boost: u8) -> Self {
        self.nudge = step;
        self.nudge_boost = boost;
        self
    }
    pub fn handle_width(mut self, v: f32) -> Self { self.handle_width = v.max(0.0); self }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            stops: vec![("red".to_string(), 20), ("blue".to_string(), 80)],
            kind: GradientKind::Radial,
            angle: GradientStyle::DEFAULT_ANGLE,
            center: (GradientStyle::DEFAULT_CENTER, GradientStyle::DEFAULT_CENTER),
            nudge: 1,
            nudge_boost: 10,
            handle_width: 16.0,
        }
    }
}

/// Colour-stop editor behind a gradient picker.
///
/// Holds a non-empty list of stops in insertion order plus the id of the
/// selected stop, which always names an existing stop. The `rect` passed to
/// [`Control::on_event`] is the preview track the stops sit on.
///
/// - Click on the track adds a stop whose colour is mixed from its neighbours.
/// - Click on a handle selects that stop.
/// - Drag that starts on a handle moves that stop along the track.
/// - ArrowLeft / ArrowRight nudge the selected stop; Backspace / Delete remove it.
///
/// # Example
/// ```rust,ignore
/// let editor = GradientEditor::new(GradientConfig::default().kind(GradientKind::Linear))
///     .on_change(|css| println!("background: {css}"));
/// ```
pub struct GradientEditor {
    stops: Vec<GradientStop>,
    current: StopId,
    style: GradientStyle,
    nudge: u8,
    nudge_boost: u8,
    handle_width: f32,
    /// Stop being dragged and the press point of that gesture.
    dragging: Option<(StopId, Vec2)>,
    /// Called with the new CSS after every change.
    on_change: Option<Box<dyn FnMut(&str)>>,
}

impl GradientEditor {
    pub fn new(config: GradientConfig) -> Self {
        let seed = if config.stops.is_empty() {
            log::warn!("gradient config has no stops; using the default seed");
            GradientConfig::default().stops
        } else {
            config.stops
        };
        let stops: Vec<GradientStop> = seed
            .into_iter()
            .map(|(color, at)| GradientStop::new(fresh_id(), color, at))
            .collect();
        let current = stops.first().map(|s| s.id.clone()).unwrap_or_else(fresh_id);

        let (center_x, center_y) = config.center;
        Self {
            stops,
            current,
            style: GradientStyle {
                kind: config.kind,
                angle: config.angle.min(360),
                center_x: center_x.min(100),
                center_y: center_y.min(100),
            },
            nudge: config.nudge,
            nudge_boost: config.nudge_boost,
            handle_width: config.handle_width,
            dragging: None,
            on_change: None,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn changed(&mut self) {
        let css = self.css();
        log::trace!("gradient: {css}");
        if let Some(f) = &mut self.on_change {
            f(&css);
        }
    }

    fn find_mut(&mut self, id: &StopId) -> Option<&mut GradientStop> {
        self.stops.iter_mut().find(|s| &s.id == id)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Stops in insertion order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Stops in ascending position, ties in insertion order.
    pub fn sorted(&self) -> Vec<&GradientStop> {
        sorted_stops(&self.stops)
    }

    pub fn stop(&self, id: &StopId) -> Option<&GradientStop> {
        self.stops.iter().find(|s| &s.id == id)
    }

    #[inline]
    pub fn current_id(&self) -> &StopId {
        &self.current
    }

    pub fn current(&self) -> Option<&GradientStop> {
        self.stop(&self.current)
    }

    #[inline]
    pub fn style(&self) -> GradientStyle {
        self.style
    }

    /// The type dropdown's current entry.
    pub fn gradient_type(&self) -> GradientType {
        GradientType::from_kind(self.style.kind)
    }

    /// CSS for the configured gradient type.
    pub fn css(&self) -> String {
        self.style.to_css(&self.stops)
    }

    /// CSS for the horizontal preview track, always a 90° linear gradient.
    pub fn bar_css(&self) -> String {
        GradientStyle::linear(GradientStyle::DEFAULT_ANGLE).to_css(&self.stops)
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Returns `false` when `id` names no stop.
    pub fn select(&mut self, id: &StopId) -> bool {
        if self.stop(id).is_none() {
            return false;
        }
        self.current = id.clone();
        true
    }

    // ── Stop edits ────────────────────────────────────────────────────────

    /// Adds a stop where `pointer_x` falls on `track`.
    pub fn add_stop_at(&mut self, pointer_x: f32, track: Rect) -> StopId {
        let percent = track.x_percent(pointer_x).round() as u8;
        self.add_stop(percent)
    }

    /// Adds a stop at `percent`, coloured by mixing the stops on either side
    /// of it, and selects it.
    ///
    /// Past either end the only neighbour is the outermost stop, so the new
    /// stop takes that stop's colour.
    pub fn add_stop(&mut self, percent: u8) -> StopId {
        let percent = percent.min(100);
        let sorted = self.sorted();
        // The new stop sorts after existing stops at the same position.
        let idx = sorted.iter().take_while(|s| s.stop <= percent).count();
        let last = sorted.len().saturating_sub(1);
        let prev = sorted.get(idx.saturating_sub(1)).copied();
        let next = sorted.get(idx.min(last)).copied();

        let color = match (prev, next) {
            (Some(prev), Some(next)) => {
                let a = Color::parse_or_black(&prev.color);
                let b = Color::parse_or_black(&next.color);
                a.mix(b, f32::from(percent)).to_hex_string()
            }
            _ => Color::black().to_hex_string(),
        };

        let id = fresh_id();
        log::debug!("adding stop {id} at {percent}% ({color})");
        self.stops.push(GradientStop::new(id.clone(), color, percent));
        self.current = id.clone();
        self.changed();
        id
    }

    /// Moves a stop, clamping `percent` to [0, 100]. Storage order is kept.
    pub fn move_stop(&mut self, id: &StopId, percent: i32) -> bool {
        let at = percent.clamp(0, 100) as u8;
        let Some(stop) = self.find_mut(id) else {
            return false;
        };
        if stop.stop == at {
            return true;
        }
        stop.stop = at;
        self.changed();
        true
    }

    /// Removes a stop. The last remaining stop cannot be removed.
    ///
    /// Removing the selected stop selects the first stop in sorted order.
    pub fn remove_stop(&mut self, id: &StopId) -> bool {
        if self.stops.len() <= 1 {
            log::debug!("refusing to remove the only gradient stop");
            return false;
        }
        let before = self.stops.len();
        self.stops.retain(|s| &s.id != id);
        if self.stops.len() == before {
            return false;
        }
        if &self.current == id {
            if let Some(first) = self.sorted().first() {
                self.current = first.id.clone();
            }
        }
        if self.dragging.as_ref().is_some_and(|(d, _)| d == id) {
            self.dragging = None;
        }
        self.changed();
        true
    }

    pub fn set_stop_color(&mut self, id: &StopId, color: impl Into<String>) -> bool {
        let color = color.into();
        if Color::parse(&color).is_err() {
            log::debug!("stop {id} given unparseable colour {color:?}");
        }
        let Some(stop) = self.find_mut(id) else {
            return false;
        };
        stop.color = color;
        self.changed();
        true
    }

    /// Sets the colour of the selected stop.
    pub fn set_current_color(&mut self, color: impl Into<String>) -> bool {
        let id = self.current.clone();
        self.set_stop_color(&id, color)
    }

    // ── Gradient style ────────────────────────────────────────────────────

    /// Switching type resets the angle and the radial centre.
    pub fn set_kind(&mut self, kind: GradientKind) {
        self.style = match kind {
            GradientKind::Linear => GradientStyle::linear(GradientStyle::DEFAULT_ANGLE),
            GradientKind::Radial => {
                GradientStyle::radial(GradientStyle::DEFAULT_CENTER, GradientStyle::DEFAULT_CENTER)
            }
        };
        self.changed();
    }

    pub fn set_angle(&mut self, degrees: i32) {
        self.style.angle = degrees.clamp(0, 360) as u16;
        self.changed();
    }

    pub fn set_radial_center(&mut self, x: i32, y: i32) {
        self.style.center_x = x.clamp(0, 100) as u8;
        self.style.center_y = y.clamp(0, 100) as u8;
        self.changed();
    }

    // ── Input ─────────────────────────────────────────────────────────────

    /// Topmost stop whose handle covers `x` on `track`. Later stops draw on top.
    pub fn handle_at(&self, x: f32, track: Rect) -> Option<&StopId> {
        let half = self.handle_width * 0.5;
        self.stops
            .iter()
            .rev()
            .find(|s| {
                let cx = track.origin.x + f32::from(s.stop) / 100.0 * track.size.x;
                (x - cx).abs() <= half
            })
            .map(|s| &s.id)
    }

    fn on_handle(&self, p: Vec2, track: Rect) -> Option<StopId> {
        // Handles overhang the track vertically by a couple of pixels.
        let grab = Rect::new(track.origin.x - self.handle_width, track.origin.y - 2.0,
                             track.size.x + self.handle_width * 2.0, track.size.y + 4.0);
        if !grab.contains_inclusive(p) {
            return None;
        }
        self.handle_at(p.x, track).cloned()
    }

    pub fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        let step = i32::from(if modifiers.shift { self.nudge_boost } else { self.nudge });
        let Some(at) = self.current().map(|s| i32::from(s.stop)) else {
            return EventResult::Ignored;
        };
        let id = self.current.clone();
        match key {
            Key::ArrowLeft => { self.move_stop(&id, at - step); }
            Key::ArrowRight => { self.move_stop(&id, at + step); }
            Key::Backspace | Key::Delete => { self.remove_stop(&id); }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

impl Control for GradientEditor {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } => {
                if let Some(id) = self.on_handle(*pos, rect) {
                    self.select(&id);
                    return EventResult::Consumed;
                }
                if !rect.contains_inclusive(*pos) {
                    return EventResult::Ignored;
                }
                self.add_stop_at(pos.x, rect);
                EventResult::Consumed
            }
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } => {
                // A different press point is a new gesture; the old one ended elsewhere.
                if let Some((id, from)) = &self.dragging {
                    if from != start {
                        log::trace!("dropping stale drag of stop {id}");
                        self.dragging = None;
                    }
                }
                if self.dragging.is_none() {
                    let Some(id) = self.on_handle(*start, rect) else {
                        return EventResult::Ignored;
                    };
                    log::debug!("dragging stop {id}");
                    self.current = id.clone();
                    self.dragging = Some((id, *start));
                }
                let Some((id, _)) = self.dragging.clone() else {
                    return EventResult::Ignored;
                };
                let percent = rect.x_percent(pos.x).round() as i32;
                self.move_stop(&id, percent);
                if matches!(event, UiEvent::DragEnd { .. }) {
                    self.dragging = None;
                }
                EventResult::Consumed
            }
            UiEvent::DragCancel { .. } => match self.dragging.take() {
                Some(_) => EventResult::Consumed,
                None => EventResult::Ignored,
            },
            UiEvent::KeyPress { key, modifiers } => self.on_key(*key, *modifiers),
        }
    }
}
