//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Wall-clock reading in whole seconds
pub type Timestamp = i64;

/// 2D position in arena coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(3.0, 4.0), Point::new(0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(123.5, -42.25);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_componentwise_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(10.0, 20.0);
        assert_eq!(a + b, Point::new(11.0, 22.0));
        assert_eq!(b - a, Point::new(9.0, 18.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Point::new(11.0, 22.0));
    }

    #[test]
    fn test_display_matches_wire_shape() {
        assert_eq!(Point::new(162.0, 925.5).to_string(), "(162,925.5)");
    }
}
