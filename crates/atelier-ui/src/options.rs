//! Closed option sets for dropdowns and segmented controls.
//!
//! Every enumerated control value implements [`Choice`], which pairs each
//! variant with a display label and the CSS keyword it stands for.

use std::fmt;

use atelier_engine::paint::GradientKind;

/// A `{label, value}` record as shown in a dropdown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OptionRecord<T> {
    pub label: &'static str,
    pub value: T,
}

impl<T> OptionRecord<T> {
    pub const fn new(label: &'static str, value: T) -> Self {
        Self { label, value }
    }
}

/// An enumerated control value.
pub trait Choice: Copy + Eq + 'static {
    /// All options in display order.
    fn options() -> &'static [OptionRecord<Self>];

    /// CSS keyword (or value) this option writes.
    fn css(self) -> &'static str;

    fn label(self) -> &'static str {
        Self::options()
            .iter()
            .find(|o| o.value == self)
            .map(|o| o.label)
            .unwrap_or("")
    }

    /// Reverse lookup from the CSS keyword.
    fn from_css(css: &str) -> Option<Self> {
        Self::options().iter().map(|o| o.value).find(|v| v.css() == css)
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $( $variant:ident => ($label:literal, $css:literal) ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name { $( $variant ),+ }

        impl Choice for $name {
            fn options() -> &'static [OptionRecord<Self>] {
                const OPTIONS: &[OptionRecord<$name>] = &[
                    $( OptionRecord::new($label, $name::$variant) ),+
                ];
                OPTIONS
            }

            fn css(self) -> &'static str {
                match self { $( $name::$variant => $css ),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.css())
            }
        }
    };
}

choice! {
    /// Main-axis / cross-axis placement for stacks.
    pub enum FlexAlign {
        Start => ("Start", "start"),
        Center => ("Center", "center"),
        End => ("End", "end"),
    }
}

impl FlexAlign {
    /// Value for `align-items` / `justify-content`.
    pub fn flex_value(self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
        }
    }
}

choice! {
    pub enum FlexDirection {
        Row => ("Horizontal", "row"),
        Column => ("Vertical", "column"),
    }
}

choice! {
    pub enum Overflow {
        Auto => ("Auto", "auto"),
        Hidden => ("Hidden", "hidden"),
    }
}

choice! {
    pub enum TextAlign {
        Left => ("Left", "left"),
        Center => ("Center", "center"),
        Right => ("Right", "right"),
        Justify => ("Justify", "justify"),
    }
}

choice! {
    pub enum TextDecoration {
        None => ("None", "none"),
        Underline => ("Underline", "underline"),
        LineThrough => ("Line Through", "line-through"),
    }
}

choice! {
    pub enum FontWeight {
        Thin => ("100", "100"),
        ExtraLight => ("200", "200"),
        Light => ("300", "300"),
        Regular => ("400", "400"),
        Medium => ("500", "500"),
        SemiBold => ("600", "600"),
        Bold => ("700", "700"),
        ExtraBold => ("800", "800"),
        Black => ("900", "900"),
    }
}

impl FontWeight {
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

choice! {
    pub enum GradientType {
        Linear => ("Linear", "linear"),
        Radial => ("Radial", "radial"),
    }
}

impl GradientType {
    pub fn kind(self) -> GradientKind {
        match self {
            GradientType::Linear => GradientKind::Linear,
            GradientType::Radial => GradientKind::Radial,
        }
    }

    pub fn from_kind(kind: GradientKind) -> Self {
        match kind {
            GradientKind::Linear => GradientType::Linear,
            GradientKind::Radial => GradientType::Radial,
        }
    }
}

choice! {
    /// How a background image is scaled into its box.
    pub enum BackgroundSize {
        Fill => ("Fill", "fill"),
        Fit => ("Fit", "fit"),
        Custom => ("Custom", "custom"),
    }
}

choice! {
    pub enum BackgroundRepeat {
        NoRepeat => ("None", "no-repeat"),
        Repeat => ("Repeat", "repeat"),
        RepeatX => ("Horizontally", "repeat-x"),
        RepeatY => ("Vertically", "repeat-y"),
        Space => ("Space", "space"),
    }
}

choice! {
    pub enum BackgroundAttachment {
        Fixed => ("Fixed", "fixed"),
        Initial => ("None", "initial"),
    }
}

choice! {
    /// `mix-blend-mode` keywords.
    pub enum BlendMode {
        Normal => ("Normal", "normal"),
        Multiply => ("Multiply", "multiply"),
        Screen => ("Screen", "screen"),
        Overlay => ("Overlay", "overlay"),
        Darken => ("Darken", "darken"),
        Lighten => ("Lighten", "lighten"),
        ColorDodge => ("Color Dodge", "color-dodge"),
        ColorBurn => ("Color Burn", "color-burn"),
        Difference => ("Difference", "difference"),
        Exclusion => ("Exclusion", "exclusion"),
        Hue => ("Hue", "hue"),
        Saturation => ("Saturation", "saturation"),
        Color => ("Color", "color"),
        Luminosity => ("Luminosity", "luminosity"),
    }
}

choice! {
    /// Sample photos for the blending preview, keyed by file stem.
    pub enum SampleImage {
        Potato => ("Potato", "potato"),
        Boba => ("Boba", "boba"),
        Sand => ("Sand", "sand"),
        Leaves => ("Leaves", "leaves"),
        Egg => ("Egg", "egg"),
    }
}

impl SampleImage {
    pub fn url(self) -> String {
        format!("/images/{}.jpg", self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_css_line_up() {
        assert_eq!(FlexDirection::Row.label(), "Horizontal");
        assert_eq!(FlexDirection::Column.css(), "column");
        assert_eq!(BackgroundRepeat::RepeatX.label(), "Horizontally");
        assert_eq!(TextDecoration::LineThrough.to_string(), "line-through");
    }

    #[test]
    fn options_are_in_display_order() {
        let labels: Vec<&str> = FlexAlign::options().iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Start", "Center", "End"]);
        assert_eq!(FontWeight::options().len(), 9);
        assert_eq!(FontWeight::options()[3].value, FontWeight::Regular);
    }

    #[test]
    fn from_css_round_trips_every_option() {
        for opt in BackgroundRepeat::options() {
            assert_eq!(BackgroundRepeat::from_css(opt.value.css()), Some(opt.value));
        }
        assert_eq!(Overflow::from_css("scroll"), None);
    }

    #[test]
    fn blend_modes_are_title_cased() {
        assert_eq!(BlendMode::options().len(), 14);
        assert_eq!(BlendMode::options()[0].value, BlendMode::Normal);
        assert_eq!(BlendMode::ColorDodge.label(), "Color Dodge");
        assert_eq!(BlendMode::from_css("color-burn"), Some(BlendMode::ColorBurn));
        assert_eq!(BlendMode::Luminosity.to_string(), "luminosity");
    }

    #[test]
    fn sample_images_point_at_jpegs() {
        let labels: Vec<&str> = SampleImage::options().iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Potato", "Boba", "Sand", "Leaves", "Egg"]);
        assert_eq!(SampleImage::Leaves.url(), "/images/leaves.jpg");
    }

    #[test]
    fn flex_values() {
        assert_eq!(FlexAlign::Start.flex_value(), "flex-start");
        assert_eq!(FlexAlign::End.flex_value(), "flex-end");
        assert_eq!(FontWeight::Bold.numeric(), 700);
    }
}
