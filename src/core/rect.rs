// Axis-aligned rectangle used for sprites and hitboxes

use glam::Vec2;

/// Axis-aligned rectangle in world pixels, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of the given size centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn topleft(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Move the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    /// Grow (or shrink, with negative amounts) around the center.
    /// `dx` and `dy` are the total change in width and height.
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x - dx / 2.0,
            self.y - dy / 2.0,
            self.width + dx,
            self.height + dy,
        )
    }

    /// Strict overlap test: rectangles sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(rect.topleft(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut rect = Rect::new(0.0, 0.0, 32.0, 16.0);
        rect.set_right(100.0);
        assert_eq!(rect.x, 68.0);
        rect.set_bottom(50.0);
        assert_eq!(rect.y, 34.0);
        assert_eq!(rect.size(), Vec2::new(32.0, 16.0));
    }

    #[test]
    fn test_inflate_keeps_center() {
        let rect = Rect::new(0.0, 0.0, 64.0, 64.0);
        let hitbox = rect.inflate(-6.0, -26.0);
        assert_eq!(hitbox.center(), rect.center());
        assert_eq!(hitbox.width, 58.0);
        assert_eq!(hitbox.height, 38.0);
    }

    #[test]
    fn test_from_center() {
        let rect = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect, Rect::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let b = Rect::new(32.0, 0.0, 32.0, 32.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let c = Rect::new(31.0, 31.0, 32.0, 32.0);
        assert!(a.overlaps(&c));
    }
}
