use std::fmt;

/// Stable identifier of a gradient stop.
///
/// Stops move freely along the track, so array position cannot identify them.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A color anchored at an integer percentage along the gradient axis.
///
/// `color` is kept as the CSS string the user (or the mixer) produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub id: StopId,
    pub color: String,
    /// Position in [0, 100].
    pub stop: u8,
}

impl GradientStop {
    /// Creates a stop, clamping `stop` to 100.
    pub fn new(id: StopId, color: impl Into<String>, stop: u8) -> Self {
        Self { id, color: color.into(), stop: stop.min(100) }
    }
}

/// Gradient geometry family.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
}

/// Everything besides the stops needed to write a CSS gradient.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GradientStyle {
    pub kind: GradientKind,
    /// Linear direction in degrees, [0, 360].
    pub angle: u16,
    /// Radial centre as percentages of the box, [0, 100].
    pub center_x: u8,
    pub center_y: u8,
}

impl GradientStyle {
    pub const DEFAULT_ANGLE: u16 = 90;
    pub const DEFAULT_CENTER: u8 = 50;

    pub const fn linear(angle: u16) -> Self {
        Self {
            kind: GradientKind::Linear,
            angle,
            center_x: Self::DEFAULT_CENTER,
            center_y: Self::DEFAULT_CENTER,
        }
    }

    pub const fn radial(center_x: u8, center_y: u8) -> Self {
        Self {
            kind: GradientKind::Radial,
            angle: Self::DEFAULT_ANGLE,
            center_x,
            center_y,
        }
    }

    /// Writes `linear-gradient(...)` or `radial-gradient(circle at ...)`
    /// for `stops`, in ascending stop order.
    pub fn to_css(&self, stops: &[GradientStop]) -> String {
        let pairs = stop_list_css(stops);
        match self.kind {
            GradientKind::Linear => format!("linear-gradient({}deg, {pairs})", self.angle),
            GradientKind::Radial => format!(
                "radial-gradient(circle at {}% {}%, {pairs})",
                self.center_x, self.center_y
            ),
        }
    }
}

/// Stops ordered by position. Stable: equal positions keep insertion order.
pub fn sorted_stops(stops: &[GradientStop]) -> Vec<&GradientStop> {
    let mut sorted: Vec<&GradientStop> = stops.iter().collect();
    sorted.sort_by_key(|s| s.stop);
    sorted
}

/// `"<color> <stop>%"` pairs joined with `,`, in ascending stop order.
pub fn stop_list_css(stops: &[GradientStop]) -> String {
    sorted_stops(stops)
        .iter()
        .map(|s| format!("{} {}%", s.color, s.stop))
        .collect::<Vec<_>>()
        .join(",")
}
