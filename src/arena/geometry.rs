//! Arena coordinate space.
//!
//! All interaction math runs in logical arena units (the default container
//! is 400 x 300) so that it stays independent of the terminal size. The
//! renderer and the mouse handler convert between cells and units.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Offset by a delta, used by keyboard dragging.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Size of the arena container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a point into `0..=width`, `0..=height`.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

/// Axis-aligned rectangle with an inclusive edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region extending `half_w` left and right and `half_h` up and down from `center`.
    pub fn around(center: Point, half_w: f64, half_h: f64) -> Self {
        Self::new(center.x - half_w, center.y - half_h, half_w * 2.0, half_h * 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// The visual line between the astronaut and the pipe end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rope {
    pub length: f64,
    /// Angle of the rope in degrees, `atan2(dy, dx)`.
    pub angle_degrees: f64,
}

impl Rope {
    pub fn between(anchor: Point, end: Point) -> Self {
        let dx = end.x - anchor.x;
        let dy = end.y - anchor.y;
        Self {
            length: anchor.distance_to(end),
            angle_degrees: dy.atan2(dx).to_degrees(),
        }
    }

    /// Point at the far end of the rope, recomputed from length and angle.
    pub fn end_from(&self, anchor: Point) -> Point {
        let rad = self.angle_degrees.to_radians();
        Point::new(
            anchor.x + self.length * rad.cos(),
            anchor.y + self.length * rad.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rope_matches_distance_and_atan2() {
        let anchor = Point::new(64.0, 64.0);
        for &(x, y) in &[(96.0, 48.0), (300.0, 250.0), (0.0, 0.0), (400.0, 300.0), (64.0, 200.0)] {
            let p = Point::new(x, y);
            let rope = Rope::between(anchor, p);
            assert!(close(rope.length, anchor.distance_to(p)));
            assert!(close(
                rope.angle_degrees,
                (y - 64.0).atan2(x - 64.0) * 180.0 / std::f64::consts::PI
            ));
        }
    }

    #[test]
    fn test_rope_axis_angles() {
        let anchor = Point::new(10.0, 10.0);
        assert!(close(Rope::between(anchor, Point::new(20.0, 10.0)).angle_degrees, 0.0));
        assert!(close(Rope::between(anchor, Point::new(10.0, 20.0)).angle_degrees, 90.0));
        assert!(close(Rope::between(anchor, Point::new(0.0, 10.0)).angle_degrees, 180.0));
        assert!(close(Rope::between(anchor, Point::new(10.0, 0.0)).angle_degrees, -90.0));
    }

    #[test]
    fn test_rope_end_reconstructs_point() {
        let anchor = Point::new(64.0, 64.0);
        let p = Point::new(300.0, 250.0);
        let end = Rope::between(anchor, p).end_from(anchor);
        assert!((end.x - p.x).abs() < 1e-6);
        assert!((end.y - p.y).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_clamp() {
        let b = Bounds::default();
        assert_eq!(b.clamp(Point::new(-5.0, 20.0)), Point::new(0.0, 20.0));
        assert_eq!(b.clamp(Point::new(500.0, 350.0)), Point::new(400.0, 300.0));
        assert_eq!(b.clamp(Point::new(12.5, 7.0)), Point::new(12.5, 7.0));
    }

    #[test]
    fn test_region_contains_edges() {
        let r = Region::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(30.1, 20.0)));
        assert!(!r.contains(Point::new(9.9, 20.0)));
        assert_eq!(r.center(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_region_around_uses_separate_half_sizes() {
        let r = Region::around(Point::new(100.0, 50.0), 10.0, 4.0);
        assert_eq!(r, Region::new(90.0, 46.0, 20.0, 8.0));
        assert!(r.contains(Point::new(110.0, 54.0)));
        assert!(!r.contains(Point::new(100.0, 55.0)));
    }

    #[test]
    fn test_region_finiteness() {
        assert!(Region::new(10.0, 10.0, 20.0, 20.0).is_finite());
        assert!(!Region::new(f64::NAN, 10.0, 20.0, 20.0).is_finite());
        assert!(!Region::new(10.0, f64::INFINITY, 20.0, 20.0).is_finite());
    }
}
