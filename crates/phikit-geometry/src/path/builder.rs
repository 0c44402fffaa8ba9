use super::{PathCommand, PathElement, PathRole};
use crate::curve::BezierSegment;
use phikit_core::Point2D;

/// Incremental builder for a [`PathElement`], modelled on lyon's path
/// builder: it tracks the current point so curves can be expressed by
/// their control points alone.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current: Point2D,
    subpath_start: Point2D,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_point(&self) -> Point2D {
        self.current
    }

    pub fn move_to(&mut self, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current = to;
        self.subpath_start = to;
        self
    }

    pub fn line_to(&mut self, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self.current = to;
        self
    }

    pub fn arc_to(
        &mut self,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2D,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radius_x,
            radius_y,
            rotation,
            large_arc,
            sweep,
            to,
        });
        self.current = to;
        self
    }

    /// Circular arc shorthand.
    pub fn circular_arc_to(&mut self, radius: f64, sweep: bool, to: Point2D) -> &mut Self {
        self.arc_to(radius, radius, 0.0, false, sweep, to)
    }

    pub fn curve_to(&mut self, ctrl1: Point2D, ctrl2: Point2D, to: Point2D) -> &mut Self {
        self.commands.push(PathCommand::CurveTo(BezierSegment::new(
            self.current,
            ctrl1,
            ctrl2,
            to,
        )));
        self.current = to;
        self
    }

    /// Quadratic curve, stored as its exact cubic elevation.
    pub fn quad_to(&mut self, ctrl: Point2D, to: Point2D) -> &mut Self {
        let segment = BezierSegment::from_quadratic(self.current, ctrl, to);
        self.curve_to(segment.p1, segment.p2, to)
    }

    /// Return to the start of the current subpath with a straight line.
    pub fn close(&mut self) -> &mut Self {
        let start = self.subpath_start;
        if !self.current.approx_eq(&start, 0.0) {
            self.line_to(start);
        }
        self
    }

    /// Closed axis-aligned rectangle outline.
    pub fn rect(&mut self, min: Point2D, size: f64) -> &mut Self {
        self.move_to(min)
            .line_to(Point2D::new(min.x + size, min.y))
            .line_to(Point2D::new(min.x + size, min.y + size))
            .line_to(Point2D::new(min.x, min.y + size))
            .close()
    }

    /// Closed circle made of two half arcs, starting at its rightmost point.
    pub fn circle(&mut self, center: Point2D, radius: f64) -> &mut Self {
        let right = Point2D::new(center.x + radius, center.y);
        let left = Point2D::new(center.x - radius, center.y);
        self.move_to(right)
            .circular_arc_to(radius, true, left)
            .circular_arc_to(radius, true, right)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(self, role: PathRole) -> PathElement {
        PathElement::new(role, self.commands)
    }
}
