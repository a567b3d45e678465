/// Axis-aligned rectangle in pixels.
///
/// Float fields so it can describe a scaled placement as well as a pixel area.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half-open containment: left/top edges in, right/bottom edges out.
    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// Whether the pixel whose top-left corner is `(px, py)` lies inside.
    #[inline]
    pub fn contains_pixel(self, px: u32, py: u32) -> bool {
        self.contains(px as f32, py as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.5, 9.5));
        assert!(!r.contains(10.0, 10.0));
        assert!(!r.contains(-0.5, 5.0));
    }

    #[test]
    fn contains_pixel_matches_cell_grid() {
        let r = Rect::new(2.0, 3.0, 4.0, 1.0);
        assert!(r.contains_pixel(2, 3));
        assert!(r.contains_pixel(5, 3));
        assert!(!r.contains_pixel(6, 3));
        assert!(!r.contains_pixel(2, 4));
    }

    #[test]
    fn zero_area_is_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(3.0, 3.0, 5.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
        assert!(Rect::default().is_empty());
    }
}
