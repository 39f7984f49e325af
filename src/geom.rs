//! Axis-aligned geometry for collision tests
//!
//! Screen space: origin at top-left, +Y points down. Touching counts as
//! intersecting for every test here.

use glam::Vec2;

/// A circle (the ball)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Translate the circle in place
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// A line segment (one rectangle edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Closest point on the segment to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let seg = self.end - self.start;
        let len_sq = seg.length_squared();
        if len_sq < f32::EPSILON {
            return self.start;
        }
        let t = ((point - self.start).dot(seg) / len_sq).clamp(0.0, 1.0);
        self.start + seg * t
    }

    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        self.closest_point(circle.center).distance_squared(circle.center)
            <= circle.radius * circle.radius
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of `size` centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn top(&self) -> Line {
        Line::new(self.pos, Vec2::new(self.max().x, self.pos.y))
    }

    pub fn bottom(&self) -> Line {
        Line::new(Vec2::new(self.pos.x, self.max().y), self.max())
    }

    pub fn left(&self) -> Line {
        Line::new(self.pos, Vec2::new(self.pos.x, self.max().y))
    }

    pub fn right(&self) -> Line {
        Line::new(Vec2::new(self.max().x, self.pos.y), self.max())
    }

    /// Grow (positive) or shrink (negative) by `amount` on every side
    pub fn stretched(&self, amount: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(amount),
            size: (self.size + Vec2::splat(amount * 2.0)).max(Vec2::ZERO),
        }
    }

    /// Closest point inside the rectangle to `point`
    #[inline]
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }

    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        self.clamp_point(circle.center).distance_squared(circle.center)
            <= circle.radius * circle.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Rect {
        Rect::new(Vec2::new(40.0, 60.0), Vec2::new(40.0, 20.0))
    }

    #[test]
    fn test_rect_edges() {
        let r = brick();
        assert_eq!(r.top(), Line::new(Vec2::new(40.0, 60.0), Vec2::new(80.0, 60.0)));
        assert_eq!(r.bottom(), Line::new(Vec2::new(40.0, 80.0), Vec2::new(80.0, 80.0)));
        assert_eq!(r.left(), Line::new(Vec2::new(40.0, 60.0), Vec2::new(40.0, 80.0)));
        assert_eq!(r.right(), Line::new(Vec2::new(80.0, 60.0), Vec2::new(80.0, 80.0)));
        assert_eq!(r.center(), Vec2::new(60.0, 70.0));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 500.0), Vec2::new(60.0, 10.0));
        assert_eq!(r.pos, Vec2::new(370.0, 495.0));
        assert_eq!(r.center(), Vec2::new(400.0, 500.0));
    }

    #[test]
    fn test_stretched_shrinks_every_side() {
        let r = brick().stretched(-1.0);
        assert_eq!(r.pos, Vec2::new(41.0, 61.0));
        assert_eq!(r.size, Vec2::new(38.0, 18.0));
    }

    #[test]
    fn test_rect_circle_intersection() {
        let r = brick();

        // Centre inside
        assert!(r.intersects_circle(&Circle::new(Vec2::new(60.0, 70.0), 8.0)));
        // Just below the bottom edge, within radius
        assert!(r.intersects_circle(&Circle::new(Vec2::new(60.0, 87.0), 8.0)));
        // Touching counts
        assert!(r.intersects_circle(&Circle::new(Vec2::new(60.0, 88.0), 8.0)));
        // Clear miss
        assert!(!r.intersects_circle(&Circle::new(Vec2::new(60.0, 89.0), 8.0)));
        // Near a corner but outside the rounded reach
        assert!(!r.intersects_circle(&Circle::new(Vec2::new(86.0, 86.0), 8.0)));
    }

    #[test]
    fn test_line_circle_intersection() {
        let bottom = brick().bottom();
        assert!(bottom.intersects_circle(&Circle::new(Vec2::new(60.0, 85.0), 8.0)));
        assert!(bottom.intersects_circle(&Circle::new(Vec2::new(60.0, 75.0), 8.0)));
        assert!(!bottom.intersects_circle(&Circle::new(Vec2::new(60.0, 70.0), 8.0)));
        // Past the end of the segment
        assert!(!bottom.intersects_circle(&Circle::new(Vec2::new(95.0, 80.0), 8.0)));
    }

    #[test]
    fn test_circle_move_by() {
        let mut c = Circle::new(Vec2::new(400.0, 400.0), 8.0);
        c.move_by(Vec2::new(0.0, -8.0));
        assert_eq!(c.center, Vec2::new(400.0, 392.0));
    }
}
