use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Closed containment: [min, max]. Matches DOM bounding-box hit tests,
    /// where a pointer on the far edge still counts as inside.
    #[inline]
    pub fn contains_inclusive(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x <= max.x && p.y <= max.y
    }

    /// Horizontal position of `x` as a percentage of the width, clamped to [0, 100].
    ///
    /// Returns 0 for zero-width rectangles.
    #[inline]
    pub fn x_percent(self, x: f32) -> f32 {
        let r = self.normalized();
        if r.size.x <= 0.0 {
            return 0.0;
        }
        ((x - r.origin.x) / r.size.x * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_inclusive_accepts_far_edge() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_inclusive(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_inclusive(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains_inclusive(Vec2::new(10.5, 5.0)));
    }

    // ── x_percent ─────────────────────────────────────────────────────────

    #[test]
    fn x_percent_inside_track() {
        let track = r(100.0, 0.0, 200.0, 10.0);
        assert_eq!(track.x_percent(150.0), 25.0);
        assert_eq!(track.x_percent(300.0), 100.0);
    }

    #[test]
    fn x_percent_clamps_outside_track() {
        let track = r(100.0, 0.0, 200.0, 10.0);
        assert_eq!(track.x_percent(0.0), 0.0);
        assert_eq!(track.x_percent(1000.0), 100.0);
    }

    #[test]
    fn x_percent_zero_width() {
        assert_eq!(r(5.0, 0.0, 0.0, 10.0).x_percent(5.0), 0.0);
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 30.0, 40.0).center(), Vec2::new(25.0, 40.0));
    }
}
