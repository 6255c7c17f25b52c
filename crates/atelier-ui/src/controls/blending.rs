use atelier_engine::paint::Color;

use crate::options::{BlendMode, Choice, SampleImage};
use crate::store::style::css_number;

/// Text blended over a sample photo: the image, blend mode, text colour and
/// opacity picked in the blending panel.
///
/// Opacity is kept as a 0–100 percentage and written as a 0–1 fraction.
pub struct BlendingPreview {
    image: SampleImage,
    blend: BlendMode,
    opacity: f64,
    color: String,
    on_change: Option<Box<dyn FnMut(&BlendingPreview)>>,
}

impl BlendingPreview {
    pub fn new() -> Self {
        Self {
            image: SampleImage::Potato,
            blend: BlendMode::Normal,
            opacity: 100.0,
            color: "white".to_string(),
            on_change: None,
        }
    }

    pub fn image(mut self, v: SampleImage) -> Self {
        self.image = v;
        self
    }

    pub fn blend(mut self, v: BlendMode) -> Self {
        self.blend = v;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&BlendingPreview) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn changed(&mut self) {
        if let Some(mut f) = self.on_change.take() {
            f(&*self);
            self.on_change = Some(f);
        }
    }

    #[inline]
    pub fn sample(&self) -> SampleImage {
        self.image
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_image(&mut self, image: SampleImage) {
        self.image = image;
        self.changed();
    }

    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
        self.changed();
    }

    /// Clamps to 0–100. Returns `false` for `NaN` or an infinity.
    pub fn set_opacity(&mut self, percent: f64) -> bool {
        if !percent.is_finite() {
            log::debug!("ignoring non-finite opacity {percent}");
            return false;
        }
        self.opacity = percent.clamp(0.0, 100.0);
        self.changed();
        true
    }

    /// Stored as typed; unparseable colours are logged and kept.
    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        if Color::parse(&color).is_err() {
            log::debug!("blending text given unparseable colour {color:?}");
        }
        self.color = color;
        self.changed();
    }

    /// Declarations for the photo behind the text.
    pub fn backdrop_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("background-image", format!("url({})", self.image.url())),
            ("background-size", "cover".to_string()),
            ("background-repeat", "no-repeat".to_string()),
        ]
    }

    /// Declarations for the blended text.
    pub fn text_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("color", self.color.clone()),
            ("opacity", css_number(self.opacity / 100.0)),
            ("mix-blend-mode", self.blend.css().to_string()),
        ]
    }
}

impl Default for BlendingPreview {
    fn default() -> Self {
        Self::new()
    }
}
