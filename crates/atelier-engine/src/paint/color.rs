use std::fmt;

/// Straight-alpha sRGB color with 8-bit channels.
///
/// This is the representation CSS color strings round-trip through: stops keep
/// their original string until a new color has to be computed, at which point
/// both inputs are parsed into `Color`, mixed, and written back as hex.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::from_rgba8(0, 0, 0, 255)
    }

    /// Parses any CSS `<color>`: named colors, `#rgb`/`#rrggbb`/`#rrggbbaa`,
    /// and the functional notations (`rgb()`, `hsl()`, …).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let parsed: csscolorparser::Color = input
            .trim()
            .parse()
            .map_err(|_| ColorParseError::new(input))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::from_rgba8(r, g, b, a))
    }

    /// Like [`parse`](Self::parse), but unparseable input becomes opaque black.
    pub fn parse_or_black(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            log::debug!("{err}; treating as black");
            Self::black()
        })
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Linear per-channel mix towards `other`.
    ///
    /// `amount` is a percentage in [0, 100]: 0 returns `self`, 100 returns `other`.
    /// Out-of-range amounts are clamped.
    pub fn mix(self, other: Color, amount: f32) -> Color {
        let p = if amount.is_finite() { amount.clamp(0.0, 100.0) / 100.0 } else { 0.0 };
        let lerp = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * p).round().clamp(0.0, 255.0) as u8
        };
        Color::from_rgba8(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex_string(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// A string that is not a valid CSS color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid css color: {:?}", self.input)
    }
}

impl std::error::Error for ColorParseError {}
