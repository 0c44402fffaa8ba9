//! # Curve Math Primitives
//!
//! Cubic bezier evaluation in the Bernstein basis. Parameters outside
//! `[0, 1]` are rejected with `InvalidParameter`; nothing is clamped.

use nalgebra::{Isometry2, Point2};
use phikit_core::{GeometryError, GeometryResult, Point2D};
use serde::{Deserialize, Serialize};

/// One cubic bezier curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub p0: Point2D,
    pub p1: Point2D,
    pub p2: Point2D,
    pub p3: Point2D,
}

impl BezierSegment {
    pub fn new(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Exact cubic representation of the quadratic curve `(p0, control, p2)`.
    pub fn from_quadratic(p0: Point2D, control: Point2D, p2: Point2D) -> Self {
        let c1 = p0 + (control - p0) * (2.0 / 3.0);
        let c2 = p2 + (control - p2) * (2.0 / 3.0);
        Self::new(p0, c1, c2, p2)
    }

    pub fn point_at(&self, t: f64) -> GeometryResult<Point2D> {
        bezier_point_at(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn tangent_at(&self, t: f64) -> GeometryResult<Point2D> {
        bezier_tangent_at(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// Direction of travel at `t`, in radians.
    pub fn angle_at(&self, t: f64) -> GeometryResult<f64> {
        Ok(tangent_angle(self.tangent_at(t)?))
    }

    /// Same curve traversed from `p3` to `p0`.
    pub fn reversed(&self) -> Self {
        Self::new(self.p3, self.p2, self.p1, self.p0)
    }

    pub fn mirrored_x(&self, axis_x: f64) -> Self {
        Self::new(
            self.p0.reflect_x(axis_x),
            self.p1.reflect_x(axis_x),
            self.p2.reflect_x(axis_x),
            self.p3.reflect_x(axis_x),
        )
    }

    pub fn transformed(&self, iso: &Isometry2<f64>) -> Self {
        Self::new(
            transform_point(self.p0, iso),
            transform_point(self.p1, iso),
            transform_point(self.p2, iso),
            transform_point(self.p3, iso),
        )
    }
}

fn check_parameter(t: f64) -> GeometryResult<f64> {
    if t.is_finite() && (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(GeometryError::invalid_parameter(
            "t",
            format!("must be within [0, 1], got {}", t),
        ))
    }
}

/// Evaluate `B(t) = (1-t)³p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`.
pub fn bezier_point_at(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    t: f64,
) -> GeometryResult<Point2D> {
    let t = check_parameter(t)?;
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;

    Ok(Point2D::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    ))
}

/// Evaluate `B'(t) = 3(1-t)²(p1-p0) + 6(1-t)t(p2-p1) + 3t²(p3-p2)`.
pub fn bezier_tangent_at(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    t: f64,
) -> GeometryResult<Point2D> {
    let t = check_parameter(t)?;
    let mt = 1.0 - t;
    let a = 3.0 * mt * mt;
    let b = 6.0 * mt * t;
    let c = 3.0 * t * t;

    Ok((p1 - p0) * a + (p2 - p1) * b + (p3 - p2) * c)
}

/// `atan2` of a tangent vector.
pub fn tangent_angle(tangent: Point2D) -> f64 {
    tangent.y.atan2(tangent.x)
}

pub(crate) fn transform_point(p: Point2D, iso: &Isometry2<f64>) -> Point2D {
    let moved = iso.transform_point(&Point2::new(p.x, p.y));
    Point2D::new(moved.x, moved.y)
}
