//! Typed attribute record and the paths that address it.
//!
//! Each attribute is an `Option`: `None` hides the control group that edits
//! it, `Some` shows it. Grouped attributes (margin, padding, stack, font) hold
//! a struct whose fields are always present while the group is shown.

use std::fmt;

use crate::options::{
    Choice,
    FlexAlign,
    FlexDirection,
    FontWeight,
    Overflow,
    TextAlign,
    TextDecoration,
};

use super::error::StoreError;

// ── Attribute groups ──────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Edge::ALL.into_iter().find(|e| e.name() == name)
    }
}

/// Per-edge lengths for margin and padding (CSS length strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxEdges {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

impl BoxEdges {
    pub fn uniform(v: impl Into<String>) -> Self {
        let v = v.into();
        Self { top: v.clone(), bottom: v.clone(), left: v.clone(), right: v }
    }

    pub fn edge(&self, edge: Edge) -> &str {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }

    pub fn edge_mut(&mut self, edge: Edge) -> &mut String {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }
}

impl Default for BoxEdges {
    fn default() -> Self {
        Self::uniform("0px")
    }
}

/// Which edge group a box control edits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoxGroup {
    Margin,
    Padding,
}

impl BoxGroup {
    pub fn key(self) -> AttributeKey {
        match self {
            BoxGroup::Margin => AttributeKey::Margin,
            BoxGroup::Padding => AttributeKey::Padding,
        }
    }

    pub fn path(self, edge: Edge) -> AttributePath {
        match self {
            BoxGroup::Margin => AttributePath::Margin(edge),
            BoxGroup::Padding => AttributePath::Padding(edge),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackAttributes {
    pub display: String,
    pub align_items: FlexAlign,
    pub justify_content: FlexAlign,
    pub flex_direction: FlexDirection,
    pub gap: String,
}

impl Default for StackAttributes {
    fn default() -> Self {
        Self {
            display: "flex".to_string(),
            align_items: FlexAlign::Center,
            justify_content: FlexAlign::Center,
            flex_direction: FlexDirection::Row,
            gap: "10px".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StackField {
    Display,
    AlignItems,
    JustifyContent,
    FlexDirection,
    Gap,
}

impl StackField {
    const ALL: [StackField; 5] = [
        StackField::Display,
        StackField::AlignItems,
        StackField::JustifyContent,
        StackField::FlexDirection,
        StackField::Gap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StackField::Display => "display",
            StackField::AlignItems => "alignItems",
            StackField::JustifyContent => "justifyContent",
            StackField::FlexDirection => "flexDirection",
            StackField::Gap => "gap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAttributes {
    pub family: String,
    pub size: String,
    pub weight: FontWeight,
}

impl Default for FontAttributes {
    fn default() -> Self {
        Self {
            family: "system-ui".to_string(),
            size: "13px".to_string(),
            weight: FontWeight::Regular,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontField {
    Family,
    Size,
    Weight,
}

impl FontField {
    const ALL: [FontField; 3] = [FontField::Family, FontField::Size, FontField::Weight];

    pub fn name(self) -> &'static str {
        match self {
            FontField::Family => "family",
            FontField::Size => "size",
            FontField::Weight => "weight",
        }
    }
}

// ── Keys and paths ────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Height,
    Width,
    Margin,
    Padding,
    Stack,
    Overflow,
    Opacity,
    Blur,
    Font,
    LetterSpacing,
    LineHeight,
    TextAlign,
    TextDecoration,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 13] = [
        AttributeKey::Height,
        AttributeKey::Width,
        AttributeKey::Margin,
        AttributeKey::Padding,
        AttributeKey::Stack,
        AttributeKey::Overflow,
        AttributeKey::Opacity,
        AttributeKey::Blur,
        AttributeKey::Font,
        AttributeKey::LetterSpacing,
        AttributeKey::LineHeight,
        AttributeKey::TextAlign,
        AttributeKey::TextDecoration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AttributeKey::Height => "height",
            AttributeKey::Width => "width",
            AttributeKey::Margin => "margin",
            AttributeKey::Padding => "padding",
            AttributeKey::Stack => "stack",
            AttributeKey::Overflow => "overflow",
            AttributeKey::Opacity => "opacity",
            AttributeKey::Blur => "blur",
            AttributeKey::Font => "font",
            AttributeKey::LetterSpacing => "letterSpacing",
            AttributeKey::LineHeight => "lineHeight",
            AttributeKey::TextAlign => "textAlign",
            AttributeKey::TextDecoration => "textDecoration",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        AttributeKey::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Address of a whole attribute or one field of a grouped attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttributePath {
    Attribute(AttributeKey),
    Margin(Edge),
    Padding(Edge),
    Stack(StackField),
    Font(FontField),
}

impl AttributePath {
    /// Parses a dot-separated path such as `"margin.top"` or `"stack.gap"`.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        let unknown = || StoreError::UnknownPath(s.to_string());
        let mut parts = s.split('.');
        let head = parts.next().ok_or_else(unknown)?;
        let key = AttributeKey::from_name(head).ok_or_else(unknown)?;

        let Some(field) = parts.next() else {
            return Ok(AttributePath::Attribute(key));
        };
        if parts.next().is_some() {
            return Err(unknown());
        }

        let path = match key {
            AttributeKey::Margin => Edge::from_name(field).map(AttributePath::Margin),
            AttributeKey::Padding => Edge::from_name(field).map(AttributePath::Padding),
            AttributeKey::Stack => StackField::ALL
                .into_iter()
                .find(|f| f.name() == field)
                .map(AttributePath::Stack),
            AttributeKey::Font => FontField::ALL
                .into_iter()
                .find(|f| f.name() == field)
                .map(AttributePath::Font),
            _ => None,
        };
        path.ok_or_else(unknown)
    }

    /// The top-level attribute this path lives under.
    pub fn key(self) -> AttributeKey {
        match self {
            AttributePath::Attribute(key) => key,
            AttributePath::Margin(_) => AttributeKey::Margin,
            AttributePath::Padding(_) => AttributeKey::Padding,
            AttributePath::Stack(_) => AttributeKey::Stack,
            AttributePath::Font(_) => AttributeKey::Font,
        }
    }
}

impl From<AttributeKey> for AttributePath {
    fn from(key: AttributeKey) -> Self {
        AttributePath::Attribute(key)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.key().name();
        match self {
            AttributePath::Attribute(_) => f.write_str(head),
            AttributePath::Margin(edge) | AttributePath::Padding(edge) => write!(f, "{head}.{}", edge.name()),
            AttributePath::Stack(field) => write!(f, "{head}.{}", field.name()),
            AttributePath::Font(field) => write!(f, "{head}.{}", field.name()),
        }
    }
}

// ── Values ────────────────────────────────────────────────────────────────

/// Any value an attribute path can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Edges(BoxEdges),
    Stack(StackAttributes),
    Font(FontAttributes),
    Overflow(Overflow),
    TextAlign(TextAlign),
    TextDecoration(TextDecoration),
    FlexAlign(FlexAlign),
    FlexDirection(FlexDirection),
    FontWeight(FontWeight),
}

impl AttributeValue {
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Text(_) => "text",
            AttributeValue::Number(_) => "number",
            AttributeValue::Edges(_) => "box edges",
            AttributeValue::Stack(_) => "stack attributes",
            AttributeValue::Font(_) => "font attributes",
            AttributeValue::Overflow(_) => "overflow",
            AttributeValue::TextAlign(_) => "text align",
            AttributeValue::TextDecoration(_) => "text decoration",
            AttributeValue::FlexAlign(_) => "flex align",
            AttributeValue::FlexDirection(_) => "flex direction",
            AttributeValue::FontWeight(_) => "font weight",
        }
    }

    fn mismatch(&self, path: AttributePath, expected: &'static str) -> StoreError {
        StoreError::TypeMismatch { path: path.to_string(), expected, found: self.kind() }
    }

    fn into_text(self, path: AttributePath) -> Result<String, StoreError> {
        match self {
            AttributeValue::Text(s) => Ok(s),
            other => Err(other.mismatch(path, "text")),
        }
    }

    /// Numbers also accept numeric text, as typed into an input box.
    ///
    /// `NaN` and the infinities are refused in either form.
    fn into_number(self, path: AttributePath) -> Result<f64, StoreError> {
        let n = match &self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|n| n.is_finite()).ok_or_else(|| self.mismatch(path, "number"))
    }

    fn into_clamped(self, path: AttributePath, min: f64, max: f64) -> Result<f64, StoreError> {
        self.into_number(path).map(|n| n.clamp(min, max))
    }

    /// Enumerated values also accept their CSS keyword as text.
    fn into_choice<T: ChoiceValue>(self, path: AttributePath) -> Result<T, StoreError> {
        if let Some(v) = T::from_value(&self) {
            return Ok(v);
        }
        match &self {
            AttributeValue::Text(s) => T::from_css(s).ok_or_else(|| self.mismatch(path, T::KIND)),
            _ => Err(self.mismatch(path, T::KIND)),
        }
    }

    fn into_edges(self, path: AttributePath) -> Result<BoxEdges, StoreError> {
        match self {
            AttributeValue::Edges(e) => Ok(e),
            other => Err(other.mismatch(path, "box edges")),
        }
    }

    fn into_stack(self, path: AttributePath) -> Result<StackAttributes, StoreError> {
        match self {
            AttributeValue::Stack(s) => Ok(s),
            other => Err(other.mismatch(path, "stack attributes")),
        }
    }

    fn into_font(self, path: AttributePath) -> Result<FontAttributes, StoreError> {
        match self {
            AttributeValue::Font(f) => Ok(f),
            other => Err(other.mismatch(path, "font attributes")),
        }
    }
}

/// Enumerated types that have their own [`AttributeValue`] variant.
trait ChoiceValue: Choice {
    const KIND: &'static str;
    fn from_value(v: &AttributeValue) -> Option<Self>;
}

macro_rules! choice_value {
    ($($ty:ident => $kind:literal),+ $(,)?) => {
        $(
            impl ChoiceValue for $ty {
                const KIND: &'static str = $kind;
                fn from_value(v: &AttributeValue) -> Option<Self> {
                    match v {
                        AttributeValue::$ty(x) => Some(*x),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for AttributeValue {
                fn from(v: $ty) -> Self {
                    AttributeValue::$ty(v)
                }
            }
        )+
    };
}

choice_value! {
    Overflow => "overflow",
    TextAlign => "text align",
    TextDecoration => "text decoration",
    FlexAlign => "flex align",
    FlexDirection => "flex direction",
    FontWeight => "font weight",
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Number(v)
    }
}

impl From<BoxEdges> for AttributeValue {
    fn from(v: BoxEdges) -> Self {
        AttributeValue::Edges(v)
    }
}

impl From<StackAttributes> for AttributeValue {
    fn from(v: StackAttributes) -> Self {
        AttributeValue::Stack(v)
    }
}

impl From<FontAttributes> for AttributeValue {
    fn from(v: FontAttributes) -> Self {
        AttributeValue::Font(v)
    }
}

// ── Attributes ────────────────────────────────────────────────────────────

/// The editable attribute record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub height: Option<String>,
    pub width: Option<String>,
    pub margin: Option<BoxEdges>,
    pub padding: Option<BoxEdges>,
    pub stack: Option<StackAttributes>,
    pub overflow: Option<Overflow>,
    /// Percentage, 0–100.
    pub opacity: Option<f64>,
    pub blur: Option<f64>,
    pub font: Option<FontAttributes>,
    pub letter_spacing: Option<String>,
    pub line_height: Option<String>,
    pub text_align: Option<TextAlign>,
    pub text_decoration: Option<TextDecoration>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            height: Some("auto".to_string()),
            width: Some("auto".to_string()),
            margin: None,
            padding: None,
            stack: None,
            overflow: None,
            opacity: None,
            blur: None,
            font: None,
            letter_spacing: None,
            line_height: None,
            text_align: None,
            text_decoration: None,
        }
    }
}

impl Attributes {
    /// Value at `path`, or `None` when the attribute (or its group) is absent.
    pub fn get(&self, path: AttributePath) -> Option<AttributeValue> {
        use AttributeValue as V;
        match path {
            AttributePath::Attribute(key) => match key {
                AttributeKey::Height => self.height.clone().map(V::Text),
                AttributeKey::Width => self.width.clone().map(V::Text),
                AttributeKey::Margin => self.margin.clone().map(V::Edges),
                AttributeKey::Padding => self.padding.clone().map(V::Edges),
                AttributeKey::Stack => self.stack.clone().map(V::Stack),
                AttributeKey::Overflow => self.overflow.map(V::Overflow),
                AttributeKey::Opacity => self.opacity.map(V::Number),
                AttributeKey::Blur => self.blur.map(V::Number),
                AttributeKey::Font => self.font.clone().map(V::Font),
                AttributeKey::LetterSpacing => self.letter_spacing.clone().map(V::Text),
                AttributeKey::LineHeight => self.line_height.clone().map(V::Text),
                AttributeKey::TextAlign => self.text_align.map(V::TextAlign),
                AttributeKey::TextDecoration => self.text_decoration.map(V::TextDecoration),
            },
            AttributePath::Margin(edge) => self.margin.as_ref().map(|m| V::Text(m.edge(edge).to_string())),
            AttributePath::Padding(edge) => self.padding.as_ref().map(|p| V::Text(p.edge(edge).to_string())),
            AttributePath::Stack(field) => self.stack.as_ref().map(|s| match field {
                StackField::Display => V::Text(s.display.clone()),
                StackField::AlignItems => V::FlexAlign(s.align_items),
                StackField::JustifyContent => V::FlexAlign(s.justify_content),
                StackField::FlexDirection => V::FlexDirection(s.flex_direction),
                StackField::Gap => V::Text(s.gap.clone()),
            }),
            AttributePath::Font(field) => self.font.as_ref().map(|f| match field {
                FontField::Family => V::Text(f.family.clone()),
                FontField::Size => V::Text(f.size.clone()),
                FontField::Weight => V::FontWeight(f.weight),
            }),
        }
    }

    pub fn has(&self, path: AttributePath) -> bool {
        match path {
            AttributePath::Attribute(key) => match key {
                AttributeKey::Height => self.height.is_some(),
                AttributeKey::Width => self.width.is_some(),
                AttributeKey::Margin => self.margin.is_some(),
                AttributeKey::Padding => self.padding.is_some(),
                AttributeKey::Stack => self.stack.is_some(),
                AttributeKey::Overflow => self.overflow.is_some(),
                AttributeKey::Opacity => self.opacity.is_some(),
                AttributeKey::Blur => self.blur.is_some(),
                AttributeKey::Font => self.font.is_some(),
                AttributeKey::LetterSpacing => self.letter_spacing.is_some(),
                AttributeKey::LineHeight => self.line_height.is_some(),
                AttributeKey::TextAlign => self.text_align.is_some(),
                AttributeKey::TextDecoration => self.text_decoration.is_some(),
            },
            // Group fields are present exactly when their group is.
            nested => self.has(AttributePath::Attribute(nested.key())),
        }
    }

    /// Writes `value` at `path`. `None` clears a whole attribute.
    ///
    /// Writing a nested field of an absent group creates the group from its
    /// defaults first. On error nothing is modified.
    pub fn set(&mut self, path: AttributePath, value: Option<AttributeValue>) -> Result<(), StoreError> {
        match path {
            AttributePath::Attribute(key) => self.set_attribute(key, value),
            nested => {
                let value = value.ok_or_else(|| StoreError::Required(nested.to_string()))?;
                self.set_field(nested, value)
            }
        }
    }

    fn set_attribute(&mut self, key: AttributeKey, value: Option<AttributeValue>) -> Result<(), StoreError> {
        let path = AttributePath::Attribute(key);
        match key {
            AttributeKey::Height => self.height = value.map(|v| v.into_text(path)).transpose()?,
            AttributeKey::Width => self.width = value.map(|v| v.into_text(path)).transpose()?,
            AttributeKey::Margin => self.margin = value.map(|v| v.into_edges(path)).transpose()?,
            AttributeKey::Padding => self.padding = value.map(|v| v.into_edges(path)).transpose()?,
            AttributeKey::Stack => self.stack = value.map(|v| v.into_stack(path)).transpose()?,
            AttributeKey::Overflow => self.overflow = value.map(|v| v.into_choice(path)).transpose()?,
            AttributeKey::Opacity => {
                self.opacity = value.map(|v| v.into_clamped(path, 0.0, 100.0)).transpose()?
            }
            AttributeKey::Blur => self.blur = value.map(|v| v.into_clamped(path, 0.0, f64::MAX)).transpose()?,
            AttributeKey::Font => self.font = value.map(|v| v.into_font(path)).transpose()?,
            AttributeKey::LetterSpacing => self.letter_spacing = value.map(|v| v.into_text(path)).transpose()?,
            AttributeKey::LineHeight => self.line_height = value.map(|v| v.into_text(path)).transpose()?,
            AttributeKey::TextAlign => self.text_align = value.map(|v| v.into_choice(path)).transpose()?,
            AttributeKey::TextDecoration => {
                self.text_decoration = value.map(|v| v.into_choice(path)).transpose()?
            }
        }
        Ok(())
    }

    fn set_field(&mut self, path: AttributePath, value: AttributeValue) -> Result<(), StoreError> {
        match path {
            AttributePath::Attribute(key) => return self.set_attribute(key, Some(value)),
            AttributePath::Margin(edge) => {
                let v = value.into_text(path)?;
                *self.margin.get_or_insert_with(BoxEdges::default).edge_mut(edge) = v;
            }
            AttributePath::Padding(edge) => {
                let v = value.into_text(path)?;
                *self.padding.get_or_insert_with(BoxEdges::default).edge_mut(edge) = v;
            }
            AttributePath::Stack(field) => match field {
                StackField::Display => {
                    let v = value.into_text(path)?;
                    self.stack.get_or_insert_with(StackAttributes::default).display = v;
                }
                StackField::AlignItems => {
                    let v = value.into_choice(path)?;
                    self.stack.get_or_insert_with(StackAttributes::default).align_items = v;
                }
                StackField::JustifyContent => {
                    let v = value.into_choice(path)?;
                    self.stack.get_or_insert_with(StackAttributes::default).justify_content = v;
                }
                StackField::FlexDirection => {
                    let v = value.into_choice(path)?;
                    self.stack.get_or_insert_with(StackAttributes::default).flex_direction = v;
                }
                StackField::Gap => {
                    let v = value.into_text(path)?;
                    self.stack.get_or_insert_with(StackAttributes::default).gap = v;
                }
            },
            AttributePath::Font(field) => match field {
                FontField::Family => {
                    let v = value.into_text(path)?;
                    self.font.get_or_insert_with(FontAttributes::default).family = v;
                }
                FontField::Size => {
                    let v = value.into_text(path)?;
                    self.font.get_or_insert_with(FontAttributes::default).size = v;
                }
                FontField::Weight => {
                    let v = value.into_choice(path)?;
                    self.font.get_or_insert_with(FontAttributes::default).weight = v;
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> AttributePath {
        AttributePath::parse(s).unwrap()
    }

    // ── parse ─────────────────────────────────────────────────────────────

    #[test]
    fn parse_top_level_and_nested() {
        assert_eq!(path("letterSpacing"), AttributePath::Attribute(AttributeKey::LetterSpacing));
        assert_eq!(path("margin.top"), AttributePath::Margin(Edge::Top));
        assert_eq!(path("stack.justifyContent"), AttributePath::Stack(StackField::JustifyContent));
        assert_eq!(path("font.weight"), AttributePath::Font(FontField::Weight));
    }

    #[test]
    fn parse_rejects_unknown_and_too_deep() {
        for bad in ["", "colour", "margin.middle", "height.top", "margin.top.x", "margin."] {
            assert_eq!(AttributePath::parse(bad), Err(StoreError::UnknownPath(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn display_round_trips() {
        for s in ["width", "padding.left", "stack.gap", "font.family", "textDecoration"] {
            assert_eq!(path(s).to_string(), s);
        }
    }

    // ── set / get ─────────────────────────────────────────────────────────

    #[test]
    fn defaults_show_only_size() {
        let a = Attributes::default();
        assert_eq!(a.get(path("height")), Some(AttributeValue::Text("auto".into())));
        assert!(a.has(path("width")));
        for key in ["margin", "padding", "stack", "font", "opacity", "blur"] {
            assert!(!a.has(path(key)), "{key}");
        }
    }

    #[test]
    fn every_path_round_trips_and_keeps_siblings() {
        let cases: Vec<(&str, AttributeValue)> = vec![
            ("height", "120px".into()),
            ("width", "50%".into()),
            ("margin.top", "4px".into()),
            ("margin.right", "8px".into()),
            ("padding.bottom", "2em".into()),
            ("stack.display", "grid".into()),
            ("stack.alignItems", FlexAlign::End.into()),
            ("stack.justifyContent", FlexAlign::Start.into()),
            ("stack.flexDirection", FlexDirection::Column.into()),
            ("stack.gap", "4px".into()),
            ("font.family", "serif".into()),
            ("font.size", "16px".into()),
            ("font.weight", FontWeight::Bold.into()),
            ("overflow", Overflow::Hidden.into()),
            ("opacity", 40.0.into()),
            ("blur", 3.0.into()),
            ("letterSpacing", "1px".into()),
            ("lineHeight", "1.2".into()),
            ("textAlign", TextAlign::Justify.into()),
            ("textDecoration", TextDecoration::Underline.into()),
        ];

        for (p, v) in cases {
            let mut a = Attributes::default();
            a.margin = Some(BoxEdges::uniform("1px"));
            let before = a.clone();
            a.set(path(p), Some(v.clone())).unwrap();
            assert_eq!(a.get(path(p)), Some(v), "{p}");

            // Every other path that existed before is untouched.
            for key in AttributeKey::ALL {
                if key == path(p).key() {
                    continue;
                }
                let other = AttributePath::Attribute(key);
                assert_eq!(a.get(other), before.get(other), "{p} disturbed {key:?}");
            }
        }
    }

    #[test]
    fn nested_write_preserves_sibling_edges() {
        let mut a = Attributes::default();
        a.set(path("margin"), Some(BoxEdges::uniform("1px").into())).unwrap();
        a.set(path("margin.left"), Some("9px".into())).unwrap();
        let m = a.margin.unwrap();
        assert_eq!((m.top.as_str(), m.bottom.as_str(), m.left.as_str(), m.right.as_str()), ("1px", "1px", "9px", "1px"));
    }

    #[test]
    fn nested_write_creates_missing_group() {
        let mut a = Attributes::default();
        a.set(path("stack.gap"), Some("2px".into())).unwrap();
        let stack = a.stack.unwrap();
        assert_eq!(stack.gap, "2px");
        assert_eq!(stack.display, "flex");
    }

    #[test]
    fn choice_paths_accept_css_keywords() {
        let mut a = Attributes::default();
        a.set(path("overflow"), Some("hidden".into())).unwrap();
        a.set(path("stack.flexDirection"), Some("column".into())).unwrap();
        assert_eq!(a.overflow, Some(Overflow::Hidden));
        assert_eq!(a.stack.unwrap().flex_direction, FlexDirection::Column);
    }

    #[test]
    fn numbers_accept_numeric_text() {
        let mut a = Attributes::default();
        a.set(path("opacity"), Some(" 75 ".into())).unwrap();
        assert_eq!(a.opacity, Some(75.0));
    }

    #[test]
    fn non_finite_numbers_are_refused() {
        let mut a = Attributes::default();
        for text in ["NaN", "inf", "-inf", "infinity"] {
            let err = a.set(path("opacity"), Some(text.into())).unwrap_err();
            assert_eq!(
                err,
                StoreError::TypeMismatch { path: "opacity".into(), expected: "number", found: "text" }
            );
        }
        assert!(a.set(path("blur"), Some(f64::NEG_INFINITY.into())).is_err());
        assert!(a.set(path("blur"), Some(f64::NAN.into())).is_err());
        assert_eq!(a, Attributes::default());
    }

    #[test]
    fn opacity_and_blur_clamp_to_range() {
        let mut a = Attributes::default();
        a.set(path("opacity"), Some(140.0.into())).unwrap();
        assert_eq!(a.opacity, Some(100.0));
        a.set(path("opacity"), Some("-20".into())).unwrap();
        assert_eq!(a.opacity, Some(0.0));
        a.set(path("blur"), Some((-3.0).into())).unwrap();
        assert_eq!(a.blur, Some(0.0));
        a.set(path("blur"), Some(12.5.into())).unwrap();
        assert_eq!(a.blur, Some(12.5));
    }

    #[test]
    fn mismatch_leaves_record_untouched() {
        let mut a = Attributes::default();
        let before = a.clone();
        let err = a.set(path("margin.top"), Some(3.0.into())).unwrap_err();
        assert_eq!(
            err,
            StoreError::TypeMismatch { path: "margin.top".into(), expected: "text", found: "number" }
        );
        assert!(a.set(path("overflow"), Some("sideways".into())).is_err());
        assert!(a.set(path("opacity"), Some("lots".into())).is_err());
        assert_eq!(a, before);
    }

    #[test]
    fn clearing_fields_is_refused_but_groups_clear() {
        let mut a = Attributes::default();
        a.set(path("padding"), Some(BoxEdges::default().into())).unwrap();
        assert_eq!(a.set(path("padding.top"), None), Err(StoreError::Required("padding.top".into())));
        a.set(path("padding"), None).unwrap();
        assert!(!a.has(path("padding")));
        assert!(!a.has(path("padding.top")));
    }
}
