use atelier_engine::coords::{Rect, Vec2};

use crate::control::Control;
use crate::controls::pivot::PivotValue;
use crate::event::{EventResult, UiEvent};
use crate::options::{BackgroundAttachment, BackgroundRepeat, BackgroundSize, Choice};
use crate::store::style::css_number;

/// Scale factor bounds and the percent range they are entered as.
pub const SCALE_RANGE: (f64, f64) = (0.01, 10.0);
pub const SCALE_PERCENT_RANGE: (f64, f64) = (1.0, 1000.0);

/// Maps `v` linearly from `from` onto `to`, without clamping.
pub fn interpolate(v: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    to.0 + (v - from.0) / span * (to.1 - to.0)
}

/// Everything needed to write the `background-*` declarations of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub image: String,
    pub size: BackgroundSize,
    /// Multiplier applied when `size` is custom.
    pub scale: f64,
    pub position: PivotValue,
    pub repeat: BackgroundRepeat,
    pub attachment: BackgroundAttachment,
}

impl BackgroundImage {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into(), ..Self::default() }
    }

    /// `background-size`: `cover`, `contain`, or the scale as a percentage.
    pub fn size_css(&self) -> String {
        match self.size {
            BackgroundSize::Fill => "cover".to_string(),
            BackgroundSize::Fit => "contain".to_string(),
            BackgroundSize::Custom => format!("{}%", css_number(self.scale * 100.0)),
        }
    }

    /// Scale as shown in the percent input, rounded.
    pub fn scale_percent(&self) -> i64 {
        interpolate(self.scale, SCALE_RANGE, SCALE_PERCENT_RANGE).round() as i64
    }

    pub fn set_scale_percent(&mut self, percent: f64) {
        self.scale = interpolate(percent, SCALE_PERCENT_RANGE, SCALE_RANGE);
    }

    /// Declarations in a stable order.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("background-attachment", self.attachment.css().to_string()),
            ("background-image", format!("url({})", self.image)),
            ("background-repeat", self.repeat.css().to_string()),
            ("background-position", self.position.css()),
            ("background-size", self.size_css()),
        ]
    }

    /// Declarations joined into an inline style string.
    pub fn to_css(&self) -> String {
        self.css_declarations()
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self {
            image: String::new(),
            size: BackgroundSize::Fill,
            scale: 1.0,
            position: PivotValue::default(),
            repeat: BackgroundRepeat::NoRepeat,
            attachment: BackgroundAttachment::Initial,
        }
    }
}

/// Background image settings plus drag-to-position on the preview.
///
/// The `rect` passed to [`Control::on_event`] is the image preview. Dragging
/// it sets a custom offset; offsets accumulate across drags.
///
/// # Example
/// ```rust,ignore
/// BackgroundControls::new(BackgroundImage::new("/images/potato.jpg"))
///     .on_change(|bg| log::info!("{}", bg.to_css()))
/// ```
pub struct BackgroundControls {
    background: BackgroundImage,
    /// Offset committed by previous drags.
    base_offset: Vec2,
    on_change: Option<Box<dyn FnMut(&BackgroundImage)>>,
}

impl BackgroundControls {
    pub fn new(background: BackgroundImage) -> Self {
        let base_offset = Self::offset_of(background.position);
        Self { background, base_offset, on_change: None }
    }

    pub fn on_change(mut self, f: impl FnMut(&BackgroundImage) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn offset_of(position: PivotValue) -> Vec2 {
        match position {
            PivotValue::Custom { x, y } => Vec2::new(x as f32, y as f32),
            PivotValue::Preset(_) => Vec2::zero(),
        }
    }

    fn changed(&mut self) {
        if let Some(f) = &mut self.on_change {
            f(&self.background);
        }
    }

    #[inline]
    pub fn background(&self) -> &BackgroundImage {
        &self.background
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.background.image = image.into();
        self.changed();
    }

    pub fn set_size(&mut self, size: BackgroundSize) {
        self.background.size = size;
        self.changed();
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.background.scale = scale;
        self.changed();
    }

    pub fn set_scale_percent(&mut self, percent: f64) {
        self.background.set_scale_percent(percent);
        self.changed();
    }

    /// Picking a position directly also resets the drag origin.
    pub fn set_position(&mut self, position: impl Into<PivotValue>) {
        self.background.position = position.into();
        self.base_offset = Self::offset_of(self.background.position);
        self.changed();
    }

    pub fn set_repeat(&mut self, repeat: BackgroundRepeat) {
        self.background.repeat = repeat;
        self.changed();
    }

    pub fn set_attachment(&mut self, attachment: BackgroundAttachment) {
        self.background.attachment = attachment;
        self.changed();
    }

    fn drag_to(&mut self, pos: Vec2, start: Vec2) {
        let offset = (self.base_offset + (pos - start)).round();
        self.background.position = PivotValue::Custom { x: offset.x as i32, y: offset.y as i32 };
        self.changed();
    }
}

impl Control for BackgroundControls {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Drag { pos, start } if rect.contains(*start) => {
                self.drag_to(*pos, *start);
                EventResult::Consumed
            }
            UiEvent::DragEnd { pos, start } if rect.contains(*start) => {
                self.drag_to(*pos, *start);
                self.base_offset = Self::offset_of(self.background.position);
                EventResult::Consumed
            }
            UiEvent::DragCancel { start } if rect.contains(*start) => {
                self.base_offset = Self::offset_of(self.background.position);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::pivot::PivotPosition;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn preview() -> Rect {
        Rect::new(0.0, 0.0, 280.0, 200.0)
    }

    // ── css ───────────────────────────────────────────────────────────────

    #[test]
    fn default_declarations() {
        let bg = BackgroundImage::new("/images/potato.jpg");
        assert_eq!(
            bg.to_css(),
            "background-attachment: initial; background-image: url(/images/potato.jpg); \
             background-repeat: no-repeat; background-position: center center; background-size: cover;"
        );
    }

    #[test]
    fn size_modes() {
        let mut bg = BackgroundImage::default();
        bg.size = BackgroundSize::Fit;
        assert_eq!(bg.size_css(), "contain");
        bg.size = BackgroundSize::Custom;
        bg.scale = 1.5;
        assert_eq!(bg.size_css(), "150%");
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_percent_is_linear() {
        let mut bg = BackgroundImage::default();
        assert_eq!(bg.scale_percent(), 100);
        bg.set_scale_percent(1000.0);
        assert!((bg.scale - 10.0).abs() < 1e-9);
        bg.set_scale_percent(1.0);
        assert!((bg.scale - 0.01).abs() < 1e-9);
        assert_eq!(bg.scale_percent(), 1);
    }

    #[test]
    fn interpolate_degenerate_range() {
        assert_eq!(interpolate(5.0, (2.0, 2.0), (0.0, 1.0)), 0.0);
    }

    // ── drag ──────────────────────────────────────────────────────────────

    #[test]
    fn drag_sets_rounded_custom_offset() {
        let mut c = BackgroundControls::new(BackgroundImage::default());
        c.on_event(&UiEvent::Drag { pos: v(110.4, 80.6), start: v(100.0, 100.0) }, preview());
        assert_eq!(c.background().position, PivotValue::Custom { x: 10, y: -19 });
        assert_eq!(c.background().position.label(), "Custom");
    }

    #[test]
    fn offsets_accumulate_across_drags() {
        let mut c = BackgroundControls::new(BackgroundImage::default());
        c.on_event(&UiEvent::DragEnd { pos: v(120.0, 100.0), start: v(100.0, 100.0) }, preview());
        c.on_event(&UiEvent::Drag { pos: v(50.0, 60.0), start: v(50.0, 50.0) }, preview());
        assert_eq!(c.background().position, PivotValue::Custom { x: 20, y: 10 });
    }

    #[test]
    fn picking_a_preset_resets_drag_origin() {
        let mut c = BackgroundControls::new(BackgroundImage::default());
        c.on_event(&UiEvent::DragEnd { pos: v(120.0, 100.0), start: v(100.0, 100.0) }, preview());
        c.set_position(PivotPosition::TopLeft);
        assert_eq!(c.background().position.css(), "top left");
        c.on_event(&UiEvent::Drag { pos: v(55.0, 50.0), start: v(50.0, 50.0) }, preview());
        assert_eq!(c.background().position, PivotValue::Custom { x: 5, y: 0 });
    }

    #[test]
    fn drags_from_outside_are_ignored() {
        let mut c = BackgroundControls::new(BackgroundImage::default());
        let r = c.on_event(&UiEvent::Drag { pos: v(10.0, 10.0), start: v(400.0, 10.0) }, preview());
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(c.background().position, PivotValue::default());
    }
}
