//! Two-dimensional point value type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Immutable 2D point (also used as a vector for offsets and tangents).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length when the point is read as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`.
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        Point2D::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Unit vector rotated 90° counter-clockwise (in a y-up frame).
    /// Returns `None` for the zero vector.
    pub fn normal(&self) -> Option<Point2D> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Point2D::new(-self.y / len, self.x / len))
    }

    /// Reflection across the vertical line `x = axis_x`.
    pub fn reflect_x(&self, axis_x: f64) -> Point2D {
        Point2D::new(2.0 * axis_x - self.x, self.y)
    }

    /// Angle of the vector from the positive x axis, in radians.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
